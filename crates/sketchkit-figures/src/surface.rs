//! The draw-surface capability consumed by figures.
//!
//! Rendering is owned by the embedding application; this crate only issues
//! primitive draw calls against whatever surface it is handed. The bundled
//! raster backend lives in [`crate::renderer`].

use sketchkit_core::{BoundingBox, Color, Pen, Point};

/// Primitive drawing operations a graphics backend must provide.
///
/// All coordinates are canvas pixels. Outline primitives take a [`Pen`]
/// (color, width, dash pattern); fill primitives take a plain color.
pub trait DrawSurface {
    /// The surface's background color, used to erase figures.
    fn background(&self) -> Color;

    fn line(&mut self, from: Point, to: Point, pen: &Pen);

    fn rect(&mut self, bounds: BoundingBox, pen: &Pen);

    fn fill_rect(&mut self, bounds: BoundingBox, color: Color);

    fn ellipse(&mut self, bounds: BoundingBox, pen: &Pen);

    fn fill_ellipse(&mut self, bounds: BoundingBox, color: Color);

    /// Strokes an open polyline through `points` in order.
    fn polyline(&mut self, points: &[Point], pen: &Pen);

    /// Places `content` with its top-left corner at `at`.
    fn text(&mut self, at: Point, content: &str, color: Color);
}
