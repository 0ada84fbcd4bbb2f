//! Canvas document: the ordered figure collection.
//!
//! The canvas owns its figures exclusively; figures are plain values and
//! all mutation goes through the canvas operations below. Draw order is
//! insertion order, so hit queries walk the list back to front.

use tracing::{debug, warn};

use sketchkit_core::{CanvasError, Point, Result, Size};

use crate::figures::{CanvasFigure, Figure};
use crate::handles::HandleId;
use crate::surface::DrawSurface;

/// Canvas state holding the drawing area size and the ordered figures.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    size: Size,
    figures: Vec<Figure>,
}

impl Canvas {
    /// Creates an empty canvas with the given drawing area.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            figures: Vec::new(),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the number of figures on the canvas.
    pub fn len(&self) -> usize {
        self.figures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Figure> {
        self.figures.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Figure> {
        self.figures.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Figure> {
        self.figures.iter()
    }

    /// Appends a figure on top of the draw order and returns its index.
    pub fn push(&mut self, figure: Figure) -> usize {
        debug!(kind = ?figure.kind(), "figure added");
        self.figures.push(figure);
        self.figures.len() - 1
    }

    /// Removes and returns the figure at `index`.
    pub fn remove(&mut self, index: usize) -> Result<Figure> {
        if index >= self.figures.len() {
            return Err(CanvasError::NoSuchFigure { index }.into());
        }
        let figure = self.figures.remove(index);
        debug!(kind = ?figure.kind(), index, "figure removed");
        Ok(figure)
    }

    /// Removes every figure.
    pub fn clear(&mut self) {
        debug!(count = self.figures.len(), "canvas cleared");
        self.figures.clear();
    }

    /// Index of the topmost figure hit by `p`, if any.
    pub fn figure_at(&self, p: Point) -> Option<usize> {
        self.figures
            .iter()
            .enumerate()
            .rev()
            .find(|(_, figure)| figure.contains_point(p))
            .map(|(index, _)| index)
    }

    /// Translates the figure at `index` by `(dx, dy)`.
    ///
    /// The move is rejected up front when any part of the figure would
    /// leave the canvas; nothing is applied partially.
    pub fn move_figure(&mut self, index: usize, dx: i32, dy: i32) -> Result<()> {
        let size = self.size;
        let figure = self
            .figures
            .get_mut(index)
            .ok_or(CanvasError::NoSuchFigure { index })?;

        if !figure.can_move(dx, dy, size) {
            warn!(index, dx, dy, "move rejected, figure would leave canvas");
            return Err(CanvasError::OutOfBounds {
                dx,
                dy,
                width: size.width,
                height: size.height,
            }
            .into());
        }

        figure.translate(dx, dy);
        debug!(index, dx, dy, "figure moved");
        Ok(())
    }

    /// Drags the given resize handle of the figure at `index` to `to`.
    pub fn resize_figure(&mut self, index: usize, handle: HandleId, to: Point) -> Result<()> {
        let figure = self
            .figures
            .get_mut(index)
            .ok_or(CanvasError::NoSuchFigure { index })?;

        figure.resize(handle, to);
        debug!(index, ?handle, "figure resized");
        Ok(())
    }

    /// Renders every figure in draw order.
    pub fn draw_all(&self, surface: &mut dyn DrawSurface) {
        for figure in &self.figures {
            figure.draw(surface);
        }
    }
}
