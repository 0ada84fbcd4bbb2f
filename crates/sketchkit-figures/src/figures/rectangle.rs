//! Axis-aligned rectangle figure.

use sketchkit_core::{BoundingBox, Color, Pen, Point};

use crate::figures::{CanvasFigure, FigureKind, FigureStyle};
use crate::handles::{resized, HandleId};
use crate::surface::DrawSurface;

/// A rectangle spanned by two opposite corners, in whatever diagonal
/// orientation the user dragged them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    start: Point,
    end: Point,
    style: FigureStyle,
}

impl Rectangle {
    pub fn new(start: Point, end: Point, style: FigureStyle) -> Self {
        Self { start, end, style }
    }
}

impl CanvasFigure for Rectangle {
    fn kind(&self) -> FigureKind {
        FigureKind::Rectangle
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
        self.bounds().contains(p)
    }

    fn stroke(&self, surface: &mut dyn DrawSurface, pen: &Pen) {
        surface.rect(self.bounds(), pen);
    }

    fn fill(&self, surface: &mut dyn DrawSurface, color: Color) {
        surface.fill_rect(self.bounds(), color);
    }
}
