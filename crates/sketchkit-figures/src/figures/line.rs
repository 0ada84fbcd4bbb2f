//! Straight line figure.

use sketchkit_core::{BoundingBox, Pen, Point};

use crate::figures::{CanvasFigure, FigureKind, FigureStyle};
use crate::handles::{handle_position, HandleId};
use crate::surface::DrawSurface;

/// A straight line between two anchor points.
///
/// Unlike the box figures, `start` and `end` are true anchors: the line
/// occupies one of the two diagonals of its bounding box, and
/// [`normalized_points`](StraightLine::normalized_points) canonicalizes
/// which one so drag direction never changes rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StraightLine {
    start: Point,
    end: Point,
    style: FigureStyle,
}

impl StraightLine {
    pub fn new(start: Point, end: Point, style: FigureStyle) -> Self {
        Self { start, end, style }
    }

    /// The anchor pair in canonical diagonal form.
    ///
    /// Lines on the main diagonal come out top-left to bottom-right, lines
    /// on the anti-diagonal bottom-left to top-right; axis-aligned and
    /// degenerate lines fall onto the main diagonal. Both orientations of
    /// the same geometry canonicalize to the same pair.
    pub fn normalized_points(&self) -> (Point, Point) {
        let bounds = self.bounds();
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;

        if dx.signum() * dy.signum() >= 0 {
            (bounds.top, bounds.bot)
        } else {
            (
                Point::new(bounds.top.x, bounds.bot.y),
                Point::new(bounds.bot.x, bounds.top.y),
            )
        }
    }
}

impl CanvasFigure for StraightLine {
    fn kind(&self) -> FigureKind {
        FigureKind::Line
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

    /// Dragging a handle moves whichever anchor currently sits closer to
    /// that handle; the other anchor stays put.
    fn resize(&mut self, handle: HandleId, to: Point) {
        let grip = handle_position(self.bounds(), handle);
        if self.start.distance_to(&grip) <= self.end.distance_to(&grip) {
            self.start = to;
        } else {
            self.end = to;
        }
    }

    /// Hit test against the full bounding rectangle, not the segment
    /// itself: selection targets the whole spanned rectangle.
    fn contains_point(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    fn stroke(&self, surface: &mut dyn DrawSurface, pen: &Pen) {
        let (from, to) = self.normalized_points();
        surface.line(from, to, pen);
    }
}
