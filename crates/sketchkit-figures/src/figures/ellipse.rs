//! Ellipse figure inscribed in its bounding box.

use sketchkit_core::{BoundingBox, Color, Pen, Point};

use crate::figures::{CanvasFigure, FigureKind, FigureStyle};
use crate::handles::{resized, HandleId};
use crate::surface::DrawSurface;

/// An ellipse inscribed in the box spanned by two opposite corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    start: Point,
    end: Point,
    style: FigureStyle,
}

impl Ellipse {
    pub fn new(start: Point, end: Point, style: FigureStyle) -> Self {
        Self { start, end, style }
    }
}

impl CanvasFigure for Ellipse {
    fn kind(&self) -> FigureKind {
        FigureKind::Ellipse
    }

    fn style(&self) -> &FigureStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut FigureStyle {
        &mut self.style
    }

    fn start_point(&self) -> Point {
        self.start
    }

    fn end_point(&self) -> Point {
        self.end
    }

    fn set_start_point(&mut self, p: Point) {
        self.start = p;
    }

    fn set_end_point(&mut self, p: Point) {
        self.end = p;
    }

    fn bounds(&self) -> BoundingBox {
        BoundingBox::from_corners(self.start, self.end)
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        self.start = self.start.translated(dx, dy);
        self.end = self.end.translated(dx, dy);
    }

    fn resize(&mut self, handle: HandleId, to: Point) {
        let bounds = resized(self.bounds(), handle, to);
        self.start = bounds.top;
        self.end = bounds.bot;
    }

    fn contains_point(&self, p: Point) -> bool {
        let bounds = self.bounds();
        let rx = bounds.width() as f64 / 2.0;
        let ry = bounds.height() as f64 / 2.0;
        if rx == 0.0 || ry == 0.0 {
            // Degenerate ellipse collapses to its bounding segment.
            return bounds.contains(p);
        }

        let center = bounds.center();
        let dx = (p.x - center.x) as f64;
        let dy = (p.y - center.y) as f64;
        (dx * dx) / (rx * rx) + (dy * dy) / (ry * ry) <= 1.0
    }

    fn stroke(&self, surface: &mut dyn DrawSurface, pen: &Pen) {
        surface.ellipse(self.bounds(), pen);
    }

    fn fill(&self, surface: &mut dyn DrawSurface, color: Color) {
        surface.fill_ellipse(self.bounds(), color);
    }
}
