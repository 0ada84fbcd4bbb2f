//! Freehand curve figure.

use sketchkit_core::geometry::distance_to_segment;
use sketchkit_core::{BoundingBox, Pen, Point};

use crate::figures::{CanvasFigure, FigureKind, FigureStyle};
use crate::handles::{handle_position, HandleId};
use crate::surface::DrawSurface;

/// Hit slack for thin stroked figures, in pixels.
const CURVE_TOLERANCE: i32 = 10;

/// A committed freehand stroke: two anchors with the intermediate points
/// captured while the user dragged.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveLine {
    start: Point,
    end: Point,
    points: Vec<Point>,
    style: FigureStyle,
    tolerance: i32,
}

impl CurveLine {
    pub fn new(start: Point, end: Point, points: Vec<Point>, style: FigureStyle) -> Self {
        Self {
            start,
            end,
            points,
            style,
            tolerance: CURVE_TOLERANCE,
        }
    }

    /// The intermediate points between the two anchors.
    pub fn control_points(&self) -> &[Point] {
        &self.points
    }

    /// The full polyline from start anchor through every intermediate
    /// point to the end anchor.
    pub fn chain(&self) -> Vec<Point> {
        let mut chain = Vec::with_capacity(self.points.len() + 2);
        chain.push(self.start);
        chain.extend_from_slice(&self.points);
        chain.push(self.end);
        chain
    }
}

impl CanvasFigure for CurveLine {
    fn kind(&self) -> FigureKind {
        FigureKind::Curve
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
        let mut bounds = BoundingBox::from_corners(self.start, self.end);
        for p in &self.points {
            bounds = BoundingBox::from_corners(
                Point::new(bounds.top.x.min(p.x), bounds.top.y.min(p.y)),
                Point::new(bounds.bot.x.max(p.x), bounds.bot.y.max(p.y)),
            );
        }
        bounds
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        self.start = self.start.translated(dx, dy);
        self.end = self.end.translated(dx, dy);
        for p in &mut self.points {
            *p = p.translated(dx, dy);
        }
    }

    /// Dragging a handle moves the nearer anchor; the captured stroke
    /// between the anchors is left untouched.
    fn resize(&mut self, handle: HandleId, to: Point) {
        let grip = handle_position(self.bounds(), handle);
        if self.start.distance_to(&grip) <= self.end.distance_to(&grip) {
            self.start = to;
        } else {
            self.end = to;
        }
    }

    /// Hit test against the stroke itself: the point must lie within the
    /// tolerance of some segment of the polyline.
    fn contains_point(&self, p: Point) -> bool {
        let chain = self.chain();
        chain
            .windows(2)
            .any(|seg| distance_to_segment(p, seg[0], seg[1]) <= self.tolerance as f64)
    }

    fn stroke(&self, surface: &mut dyn DrawSurface, pen: &Pen) {
        surface.polyline(&self.chain(), pen);
    }
}
