//! Raster backend for the draw-surface capability.
//!
//! Renders figures into an image buffer using tiny-skia for anti-aliased
//! 2D rasterization. This is the backend used by previews and tests; the
//! embedding UI may supply its own [`DrawSurface`] instead.

use image::{Rgb, RgbImage};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, StrokeDash, Transform};

use sketchkit_core::{BoundingBox, Color, DashStyle, Error, Pen, Point, Result, Size};

use crate::surface::DrawSurface;

/// On/off lengths of the dashed stroke pattern, in pixels.
const DASH_PATTERN: [f32; 2] = [6.0, 4.0];

/// Horizontal advance of the text placeholder, per character.
const TEXT_ADVANCE: i32 = 7;
/// Baseline offset of the text placeholder below the text origin.
const TEXT_BASELINE: i32 = 12;

fn skia_color(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, 255)
}

fn skia_rect(bounds: BoundingBox) -> Option<Rect> {
    Rect::from_ltrb(
        bounds.top.x as f32,
        bounds.top.y as f32,
        bounds.bot.x as f32,
        bounds.bot.y as f32,
    )
}

/// A [`DrawSurface`] rasterizing onto a tiny-skia pixmap.
#[derive(Debug, Clone)]
pub struct PixmapSurface {
    pixmap: Pixmap,
    background: Color,
}

impl PixmapSurface {
    /// Allocates a surface of the given size, pre-filled with `background`.
    pub fn new(size: Size, background: Color) -> Result<Self> {
        let width = u32::try_from(size.width)
            .ok()
            .filter(|w| *w > 0)
            .ok_or_else(|| Error::other(format!("invalid surface width: {}", size.width)))?;
        let height = u32::try_from(size.height)
            .ok()
            .filter(|h| *h > 0)
            .ok_or_else(|| Error::other(format!("invalid surface height: {}", size.height)))?;

        let mut pixmap = Pixmap::new(width, height)
            .ok_or_else(|| Error::other("failed to allocate pixmap"))?;
        pixmap.fill(skia_color(background));

        Ok(Self { pixmap, background })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Converts the rendered surface into an RGB image buffer.
    pub fn into_image(self) -> RgbImage {
        let width = self.pixmap.width();
        let height = self.pixmap.height();
        let data = self.pixmap.data();
        RgbImage::from_fn(width, height, |x, y| {
            let idx = ((y * width + x) * 4) as usize;
            // Alpha is always opaque here.
            Rgb([data[idx], data[idx + 1], data[idx + 2]])
        })
    }

    fn stroke_path(&mut self, path: &tiny_skia::Path, pen: &Pen) {
        let mut paint = Paint::default();
        paint.set_color(skia_color(pen.color));
        paint.anti_alias = true;

        let mut stroke = Stroke {
            width: pen.width.max(1) as f32,
            ..Default::default()
        };
        if pen.dash == DashStyle::Dash {
            stroke.dash = StrokeDash::new(DASH_PATTERN.to_vec(), 0.0);
        }

        self.pixmap
            .stroke_path(path, &paint, &stroke, Transform::identity(), None);
    }

    fn fill_path(&mut self, path: &tiny_skia::Path, color: Color) {
        let mut paint = Paint::default();
        paint.set_color(skia_color(color));
        paint.anti_alias = true;

        self.pixmap
            .fill_path(path, &paint, FillRule::Winding, Transform::identity(), None);
    }
}

impl DrawSurface for PixmapSurface {
    fn background(&self) -> Color {
        self.background
    }

    fn line(&mut self, from: Point, to: Point, pen: &Pen) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x as f32, from.y as f32);
        pb.line_to(to.x as f32, to.y as f32);
        if let Some(path) = pb.finish() {
            self.stroke_path(&path, pen);
        }
    }

    fn rect(&mut self, bounds: BoundingBox, pen: &Pen) {
        if let Some(rect) = skia_rect(bounds) {
            let path = PathBuilder::from_rect(rect);
            self.stroke_path(&path, pen);
        }
    }

    fn fill_rect(&mut self, bounds: BoundingBox, color: Color) {
        if let Some(rect) = skia_rect(bounds) {
            let path = PathBuilder::from_rect(rect);
            self.fill_path(&path, color);
        }
    }

    fn ellipse(&mut self, bounds: BoundingBox, pen: &Pen) {
        if let Some(path) = skia_rect(bounds).and_then(PathBuilder::from_oval) {
            self.stroke_path(&path, pen);
        }
    }

    fn fill_ellipse(&mut self, bounds: BoundingBox, color: Color) {
        if let Some(path) = skia_rect(bounds).and_then(PathBuilder::from_oval) {
            self.fill_path(&path, color);
        }
    }

    fn polyline(&mut self, points: &[Point], pen: &Pen) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };

        let mut pb = PathBuilder::new();
        pb.move_to(first.x as f32, first.y as f32);
        for p in rest {
            pb.line_to(p.x as f32, p.y as f32);
        }
        if let Some(path) = pb.finish() {
            self.stroke_path(&path, pen);
        }
    }

    fn text(&mut self, at: Point, content: &str, color: Color) {
        // Glyph rasterization needs the UI's font stack; previews mark the
        // text extent with its baseline instead.
        let width = content.chars().count() as i32 * TEXT_ADVANCE;
        if width == 0 {
            return;
        }
        let baseline = at.translated(0, TEXT_BASELINE);
        self.line(baseline, baseline.translated(width, 0), &Pen::solid(color, 1));
    }
}
