//! Resize-handle derivation and hit-testing.
//!
//! Handle positions are a pure function of a figure's bounding box; they
//! are recomputed on demand and never stored.

use sketchkit_core::{BoundingBox, Color, Point};

use crate::figures::{Ellipse, FigureStyle};

/// Half-extent of a handle's grab square, and the radius of its marker.
pub const HANDLE_RADIUS: i32 = 5;

/// The 8 grip positions of a figure's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleId {
    TopLeft,
    TopRight,
    BotLeft,
    BotRight,
    MiddleTop,
    MiddleBot,
    MiddleLeft,
    MiddleRight,
}

/// Derives all 8 handle positions from a bounding box.
///
/// Corners come first so that position-based lookups give them priority
/// over the edge midpoints. Midpoints truncate toward the top-left corner
/// on odd spans. On a degenerate box all handles coincide.
pub fn resize_handles(bounds: BoundingBox) -> [(HandleId, Point); 8] {
    let top_left = bounds.top;
    let bot_right = bounds.bot;
    let top_right = Point::new(bot_right.x, top_left.y);
    let bot_left = Point::new(top_left.x, bot_right.y);

    let middle_x = top_left.x + (bot_right.x - top_left.x) / 2;
    let middle_y = top_left.y + (bot_right.y - top_left.y) / 2;

    [
        (HandleId::TopLeft, top_left),
        (HandleId::TopRight, top_right),
        (HandleId::BotLeft, bot_left),
        (HandleId::BotRight, bot_right),
        (HandleId::MiddleTop, Point::new(middle_x, top_left.y)),
        (HandleId::MiddleBot, Point::new(middle_x, bot_right.y)),
        (HandleId::MiddleLeft, Point::new(top_left.x, middle_y)),
        (HandleId::MiddleRight, Point::new(bot_right.x, middle_y)),
    ]
}

/// Current position of a single handle on the given box.
pub fn handle_position(bounds: BoundingBox, handle: HandleId) -> Point {
    resize_handles(bounds)
        .iter()
        .find(|(id, _)| *id == handle)
        .map(|(_, p)| *p)
        .unwrap_or(bounds.top)
}

/// Returns the handle whose grab square contains `p`, corners taking
/// priority over edge midpoints. `None` when no grip is under the point.
pub fn handle_at(bounds: BoundingBox, p: Point) -> Option<HandleId> {
    resize_handles(bounds)
        .iter()
        .find(|(_, pos)| {
            (p.x - pos.x).abs() <= HANDLE_RADIUS && (p.y - pos.y).abs() <= HANDLE_RADIUS
        })
        .map(|(id, _)| *id)
}

/// Applies a handle drag to a bounding box: the dragged grip lands on `to`
/// while the opposite corner or edge stays anchored. Dragging past the
/// anchor flips the box, which normalization absorbs.
pub fn resized(bounds: BoundingBox, handle: HandleId, to: Point) -> BoundingBox {
    let top = bounds.top;
    let bot = bounds.bot;

    match handle {
        HandleId::TopLeft => BoundingBox::from_corners(bot, to),
        HandleId::TopRight => BoundingBox::from_corners(Point::new(top.x, bot.y), to),
        HandleId::BotLeft => BoundingBox::from_corners(Point::new(bot.x, top.y), to),
        HandleId::BotRight => BoundingBox::from_corners(top, to),
        HandleId::MiddleTop => BoundingBox::from_corners(Point::new(top.x, to.y), bot),
        HandleId::MiddleBot => BoundingBox::from_corners(top, Point::new(bot.x, to.y)),
        HandleId::MiddleLeft => BoundingBox::from_corners(Point::new(to.x, top.y), bot),
        HandleId::MiddleRight => BoundingBox::from_corners(top, Point::new(to.x, bot.y)),
    }
}

/// Builds the small filled circle used to render a resize grip.
pub fn handle_marker(center: Point, radius: i32) -> Ellipse {
    Ellipse::new(
        center.translated(-radius, -radius),
        center.translated(radius, radius),
        FigureStyle {
            pen_size: 2,
            pen_color: Color::BLACK,
            brush_color: Color::BLACK,
            is_filling: true,
        },
    )
}
