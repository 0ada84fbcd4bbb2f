//! The figure capability set and the five concrete figure kinds.
//!
//! Figures are flat per-kind structs behind a single trait; the [`Figure`]
//! enum dispatches over them at call sites. Every figure keeps its two
//! defining points as entered by the user and derives its normalized
//! bounding box from them before any draw, hit-test or handle operation.

mod curve;
mod ellipse;
mod line;
mod rectangle;
mod text;

pub use curve::CurveLine;
pub use ellipse::Ellipse;
pub use line::StraightLine;
pub use rectangle::Rectangle;
pub use text::TextBox;

use serde::{Deserialize, Serialize};
use sketchkit_core::{BoundingBox, Color, Pen, Point, Size};

use crate::handles::{handle_marker, resize_handles, HandleId, HANDLE_RADIUS};
use crate::surface::DrawSurface;

/// Discriminates the figure kinds, and tags figure records in the
/// persisted format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FigureKind {
    Rectangle,
    Ellipse,
    Line,
    Curve,
    TextBox,
}

/// Style attributes shared by every figure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FigureStyle {
    /// Stroke width in pixels, always positive.
    pub pen_size: u32,
    pub pen_color: Color,
    pub brush_color: Color,
    /// Fill the interior with `brush_color` instead of outline-only.
    pub is_filling: bool,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            pen_size: 1,
            pen_color: Color::BLACK,
            brush_color: Color::WHITE,
            is_filling: false,
        }
    }
}

/// Capability set every drawable figure implements.
///
/// The geometry methods are per-kind; the draw family is provided on top of
/// [`stroke`](CanvasFigure::stroke) and [`fill`](CanvasFigure::fill) so all
/// kinds render, erase, preview and mark selection the same way.
pub trait CanvasFigure {
    fn kind(&self) -> FigureKind;

    fn style(&self) -> &FigureStyle;

    fn style_mut(&mut self) -> &mut FigureStyle;

    fn start_point(&self) -> Point;

    fn end_point(&self) -> Point;

    fn set_start_point(&mut self, p: Point);

    fn set_end_point(&mut self, p: Point);

    /// The normalized bounding box derived from the defining points.
    fn bounds(&self) -> BoundingBox;

    /// Rigid translation of every defining point.
    fn translate(&mut self, dx: i32, dy: i32);

    /// Drags the given handle to `to`, rewriting the defining points.
    fn resize(&mut self, handle: HandleId, to: Point);

    /// Hit test against this figure.
    fn contains_point(&self, p: Point) -> bool;

    /// Strokes the figure's outline with the given pen.
    fn stroke(&self, surface: &mut dyn DrawSurface, pen: &Pen);

    /// Fills the figure's interior; open figures have none and ignore this.
    fn fill(&self, _surface: &mut dyn DrawSurface, _color: Color) {}

    /// Whether translating by `(dx, dy)` keeps the figure fully on a canvas
    /// of the given size. Callers check this before [`translate`]; a figure
    /// is never observed out of bounds.
    ///
    /// [`translate`]: CanvasFigure::translate
    fn can_move(&self, dx: i32, dy: i32, canvas: Size) -> bool {
        self.bounds().translated(dx, dy).within(canvas)
    }

    /// Renders the figure with its own style.
    fn draw(&self, surface: &mut dyn DrawSurface) {
        let style = self.style();
        if style.is_filling {
            self.fill(surface, style.brush_color);
        }
        self.stroke(surface, &Pen::solid(style.pen_color, style.pen_size));
    }

    /// Erases the figure by repainting it in the surface's background color.
    fn hide(&self, surface: &mut dyn DrawSurface) {
        let background = surface.background();
        if self.style().is_filling {
            self.fill(surface, background);
        }
        self.stroke(surface, &Pen::solid(background, self.style().pen_size));
    }

    /// Renders the dashed preview shown while a gesture is uncommitted.
    fn draw_dash(&self, surface: &mut dyn DrawSurface) {
        self.stroke(surface, &Pen::dashed(Color::BLACK, self.style().pen_size));
    }

    /// Renders the selection affordance: a dashed black frame around the
    /// bounding box beneath the figure's outline in dashed blue.
    fn draw_selection(&self, surface: &mut dyn DrawSurface) {
        let pen_size = self.style().pen_size;
        surface.rect(self.bounds(), &Pen::dashed(Color::BLACK, pen_size));
        self.stroke(surface, &Pen::dashed(Color::BLUE, pen_size));
    }

    /// Renders the 8 resize grips as small filled circles.
    fn draw_handles(&self, surface: &mut dyn DrawSurface) {
        for (_, position) in resize_handles(self.bounds()) {
            handle_marker(position, HANDLE_RADIUS).draw(surface);
        }
    }
}

/// Tagged enum over all drawable figure kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Line(StraightLine),
    Curve(CurveLine),
    TextBox(TextBox),
}

impl CanvasFigure for Figure {
    fn kind(&self) -> FigureKind {
        match self {
            Figure::Rectangle(f) => f.kind(),
            Figure::Ellipse(f) => f.kind(),
            Figure::Line(f) => f.kind(),
            Figure::Curve(f) => f.kind(),
            Figure::TextBox(f) => f.kind(),
        }
    }

    fn style(&self) -> &FigureStyle {
        match self {
            Figure::Rectangle(f) => f.style(),
            Figure::Ellipse(f) => f.style(),
            Figure::Line(f) => f.style(),
            Figure::Curve(f) => f.style(),
            Figure::TextBox(f) => f.style(),
        }
    }

    fn style_mut(&mut self) -> &mut FigureStyle {
        match self {
            Figure::Rectangle(f) => f.style_mut(),
            Figure::Ellipse(f) => f.style_mut(),
            Figure::Line(f) => f.style_mut(),
            Figure::Curve(f) => f.style_mut(),
            Figure::TextBox(f) => f.style_mut(),
        }
    }

    fn start_point(&self) -> Point {
        match self {
            Figure::Rectangle(f) => f.start_point(),
            Figure::Ellipse(f) => f.start_point(),
            Figure::Line(f) => f.start_point(),
            Figure::Curve(f) => f.start_point(),
            Figure::TextBox(f) => f.start_point(),
        }
    }

    fn end_point(&self) -> Point {
        match self {
            Figure::Rectangle(f) => f.end_point(),
            Figure::Ellipse(f) => f.end_point(),
            Figure::Line(f) => f.end_point(),
            Figure::Curve(f) => f.end_point(),
            Figure::TextBox(f) => f.end_point(),
        }
    }

    fn set_start_point(&mut self, p: Point) {
        match self {
            Figure::Rectangle(f) => f.set_start_point(p),
            Figure::Ellipse(f) => f.set_start_point(p),
            Figure::Line(f) => f.set_start_point(p),
            Figure::Curve(f) => f.set_start_point(p),
            Figure::TextBox(f) => f.set_start_point(p),
        }
    }

    fn set_end_point(&mut self, p: Point) {
        match self {
            Figure::Rectangle(f) => f.set_end_point(p),
            Figure::Ellipse(f) => f.set_end_point(p),
            Figure::Line(f) => f.set_end_point(p),
            Figure::Curve(f) => f.set_end_point(p),
            Figure::TextBox(f) => f.set_end_point(p),
        }
    }

    fn bounds(&self) -> BoundingBox {
        match self {
            Figure::Rectangle(f) => f.bounds(),
            Figure::Ellipse(f) => f.bounds(),
            Figure::Line(f) => f.bounds(),
            Figure::Curve(f) => f.bounds(),
            Figure::TextBox(f) => f.bounds(),
        }
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        match self {
            Figure::Rectangle(f) => f.translate(dx, dy),
            Figure::Ellipse(f) => f.translate(dx, dy),
            Figure::Line(f) => f.translate(dx, dy),
            Figure::Curve(f) => f.translate(dx, dy),
            Figure::TextBox(f) => f.translate(dx, dy),
        }
    }

    fn resize(&mut self, handle: HandleId, to: Point) {
        match self {
            Figure::Rectangle(f) => f.resize(handle, to),
            Figure::Ellipse(f) => f.resize(handle, to),
            Figure::Line(f) => f.resize(handle, to),
            Figure::Curve(f) => f.resize(handle, to),
            Figure::TextBox(f) => f.resize(handle, to),
        }
    }

    fn contains_point(&self, p: Point) -> bool {
        match self {
            Figure::Rectangle(f) => f.contains_point(p),
            Figure::Ellipse(f) => f.contains_point(p),
            Figure::Line(f) => f.contains_point(p),
            Figure::Curve(f) => f.contains_point(p),
            Figure::TextBox(f) => f.contains_point(p),
        }
    }

    fn stroke(&self, surface: &mut dyn DrawSurface, pen: &Pen) {
        match self {
            Figure::Rectangle(f) => f.stroke(surface, pen),
            Figure::Ellipse(f) => f.stroke(surface, pen),
            Figure::Line(f) => f.stroke(surface, pen),
            Figure::Curve(f) => f.stroke(surface, pen),
            Figure::TextBox(f) => f.stroke(surface, pen),
        }
    }

    fn fill(&self, surface: &mut dyn DrawSurface, color: Color) {
        match self {
            Figure::Rectangle(f) => f.fill(surface, color),
            Figure::Ellipse(f) => f.fill(surface, color),
            Figure::Line(f) => f.fill(surface, color),
            Figure::Curve(f) => f.fill(surface, color),
            Figure::TextBox(f) => f.fill(surface, color),
        }
    }

    fn draw(&self, surface: &mut dyn DrawSurface) {
        match self {
            Figure::Rectangle(f) => f.draw(surface),
            Figure::Ellipse(f) => f.draw(surface),
            Figure::Line(f) => f.draw(surface),
            Figure::Curve(f) => f.draw(surface),
            Figure::TextBox(f) => f.draw(surface),
        }
    }

    fn hide(&self, surface: &mut dyn DrawSurface) {
        match self {
            Figure::Rectangle(f) => f.hide(surface),
            Figure::Ellipse(f) => f.hide(surface),
            Figure::Line(f) => f.hide(surface),
            Figure::Curve(f) => f.hide(surface),
            Figure::TextBox(f) => f.hide(surface),
        }
    }

    fn draw_dash(&self, surface: &mut dyn DrawSurface) {
        match self {
            Figure::Rectangle(f) => f.draw_dash(surface),
            Figure::Ellipse(f) => f.draw_dash(surface),
            Figure::Line(f) => f.draw_dash(surface),
            Figure::Curve(f) => f.draw_dash(surface),
            Figure::TextBox(f) => f.draw_dash(surface),
        }
    }

    fn draw_selection(&self, surface: &mut dyn DrawSurface) {
        match self {
            Figure::Rectangle(f) => f.draw_selection(surface),
            Figure::Ellipse(f) => f.draw_selection(surface),
            Figure::Line(f) => f.draw_selection(surface),
            Figure::Curve(f) => f.draw_selection(surface),
            Figure::TextBox(f) => f.draw_selection(surface),
        }
    }

    fn draw_handles(&self, surface: &mut dyn DrawSurface) {
        match self {
            Figure::Rectangle(f) => f.draw_handles(surface),
            Figure::Ellipse(f) => f.draw_handles(surface),
            Figure::Line(f) => f.draw_handles(surface),
            Figure::Curve(f) => f.draw_handles(surface),
            Figure::TextBox(f) => f.draw_handles(surface),
        }
    }
}
