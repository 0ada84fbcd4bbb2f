//! Text box figure.

use sketchkit_core::{BoundingBox, Color, Pen, Point};

use crate::figures::{CanvasFigure, FigureKind, FigureStyle};
use crate::handles::{resized, HandleId};
use crate::surface::DrawSurface;

/// Inset of the text origin from the box corner, in pixels.
const TEXT_INSET: i32 = 4;

/// A box with editable text content, spanned by two opposite corners.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    start: Point,
    end: Point,
    text: String,
    style: FigureStyle,
}

impl TextBox {
    pub fn new(start: Point, end: Point, text: impl Into<String>, style: FigureStyle) -> Self {
        Self {
            start,
            end,
            text: text.into(),
            style,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    fn text_origin(&self) -> Point {
        self.bounds().top.translated(TEXT_INSET, TEXT_INSET)
    }
}

impl CanvasFigure for TextBox {
    fn kind(&self) -> FigureKind {
        FigureKind::TextBox
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

    fn draw(&self, surface: &mut dyn DrawSurface) {
        let style = *self.style();
        if style.is_filling {
            self.fill(surface, style.brush_color);
        }
        self.stroke(surface, &Pen::solid(style.pen_color, style.pen_size));
        surface.text(self.text_origin(), &self.text, style.pen_color);
    }

    fn hide(&self, surface: &mut dyn DrawSurface) {
        let background = surface.background();
        if self.style().is_filling {
            self.fill(surface, background);
        }
        self.stroke(surface, &Pen::solid(background, self.style().pen_size));
        surface.text(self.text_origin(), &self.text, background);
    }
}
