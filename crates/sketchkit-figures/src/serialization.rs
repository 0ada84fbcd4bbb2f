//! Serialization and deserialization of canvas snapshots.
//!
//! Implements save/load for SketchKit drawings as JSON with a flat,
//! hash-stable shape: two canvases holding equal figures in equal order
//! serialize to identical bytes, so snapshots double as equality probes.
//! Required fields really are required - a record missing one fails to
//! deserialize instead of defaulting silently.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use sketchkit_core::{Color, Error, FormatError, Point, Size};

use crate::canvas::Canvas;
use crate::figures::{
    CanvasFigure, CurveLine, Ellipse, Figure, FigureKind, FigureStyle, Rectangle, StraightLine,
    TextBox,
};

/// Flat snapshot of a whole canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashableCanvas {
    /// Drawing area extents as `(width, height)`.
    pub canvas_size: (i32, i32),
    /// Figure records in draw order.
    pub figures: Vec<HashableFigure>,
}

/// Flat snapshot of one figure: kind tag, geometry and style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashableFigure {
    pub kind: FigureKind,
    pub start_point: Point,
    pub end_point: Point,
    pub pen_size: u32,
    pub pen_color: Color,
    pub brush_color: Color,
    pub is_filling: bool,
    /// Text content; only meaningful for text boxes.
    #[serde(default)]
    pub text: String,
    /// Intermediate stroke points; only meaningful for curves.
    #[serde(default)]
    pub control_points: Vec<Point>,
}

impl HashableFigure {
    /// Snapshots a live figure.
    pub fn from_figure(figure: &Figure) -> Self {
        let style = figure.style();
        Self {
            kind: figure.kind(),
            start_point: figure.start_point(),
            end_point: figure.end_point(),
            pen_size: style.pen_size,
            pen_color: style.pen_color,
            brush_color: style.brush_color,
            is_filling: style.is_filling,
            text: match figure {
                Figure::TextBox(text_box) => text_box.text().to_string(),
                _ => String::new(),
            },
            control_points: match figure {
                Figure::Curve(curve) => curve.control_points().to_vec(),
                _ => Vec::new(),
            },
        }
    }

    /// Rebuilds the live figure this record describes.
    pub fn into_figure(self) -> Result<Figure, Error> {
        if self.pen_size == 0 {
            return Err(FormatError::ZeroPenSize.into());
        }

        let style = FigureStyle {
            pen_size: self.pen_size,
            pen_color: self.pen_color,
            brush_color: self.brush_color,
            is_filling: self.is_filling,
        };

        Ok(match self.kind {
            FigureKind::Rectangle => {
                Figure::Rectangle(Rectangle::new(self.start_point, self.end_point, style))
            }
            FigureKind::Ellipse => {
                Figure::Ellipse(Ellipse::new(self.start_point, self.end_point, style))
            }
            FigureKind::Line => {
                Figure::Line(StraightLine::new(self.start_point, self.end_point, style))
            }
            FigureKind::Curve => Figure::Curve(CurveLine::new(
                self.start_point,
                self.end_point,
                self.control_points,
                style,
            )),
            FigureKind::TextBox => Figure::TextBox(TextBox::new(
                self.start_point,
                self.end_point,
                self.text,
                style,
            )),
        })
    }
}

impl HashableCanvas {
    /// Snapshots a live canvas, preserving draw order.
    pub fn from_canvas(canvas: &Canvas) -> Self {
        Self {
            canvas_size: (canvas.size().width, canvas.size().height),
            figures: canvas.iter().map(HashableFigure::from_figure).collect(),
        }
    }

    /// Rebuilds the live canvas this snapshot describes.
    pub fn into_canvas(self) -> Result<Canvas, Error> {
        let (width, height) = self.canvas_size;
        let mut canvas = Canvas::new(Size::new(width, height));
        for record in self.figures {
            let figure = record.into_figure()?;
            canvas.push(figure);
        }
        Ok(canvas)
    }

    /// Save snapshot to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize canvas")?;
        std::fs::write(path.as_ref(), json).context("Failed to write canvas file")?;
        debug!(figures = self.figures.len(), "canvas saved");
        Ok(())
    }

    /// Load snapshot from file
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read canvas file")?;
        let snapshot: HashableCanvas =
            serde_json::from_str(&content).context("Failed to parse canvas file")?;
        debug!(figures = snapshot.figures.len(), "canvas loaded");
        Ok(snapshot)
    }
}
