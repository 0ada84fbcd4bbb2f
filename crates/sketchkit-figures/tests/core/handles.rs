use std::collections::HashMap;

use sketchkit_figures::{
    handle_at, handle_marker, handle_position, resize_handles, BoundingBox, CanvasFigure, Color,
    HandleId, Point,
};
use sketchkit_figures::handles::resized;

fn positions(bounds: BoundingBox) -> HashMap<HandleId, Point> {
    resize_handles(bounds).into_iter().collect()
}

#[test]
fn test_eight_handles_at_expected_positions() {
    let bounds = BoundingBox::from_corners(Point::new(10, 20), Point::new(50, 60));
    let handles = positions(bounds);

    assert_eq!(handles.len(), 8);
    assert_eq!(handles[&HandleId::TopLeft], Point::new(10, 20));
    assert_eq!(handles[&HandleId::TopRight], Point::new(50, 20));
    assert_eq!(handles[&HandleId::BotLeft], Point::new(10, 60));
    assert_eq!(handles[&HandleId::BotRight], Point::new(50, 60));
    assert_eq!(handles[&HandleId::MiddleTop], Point::new(30, 20));
    assert_eq!(handles[&HandleId::MiddleBot], Point::new(30, 60));
    assert_eq!(handles[&HandleId::MiddleLeft], Point::new(10, 40));
    assert_eq!(handles[&HandleId::MiddleRight], Point::new(50, 40));
}

#[test]
fn test_handles_align_in_columns_and_rows() {
    let bounds = BoundingBox::from_corners(Point::new(3, 7), Point::new(91, 44));
    let handles = positions(bounds);

    assert_eq!(handles[&HandleId::TopLeft].x, handles[&HandleId::BotLeft].x);
    assert_eq!(handles[&HandleId::TopLeft].x, handles[&HandleId::MiddleLeft].x);
    assert_eq!(handles[&HandleId::TopRight].x, handles[&HandleId::BotRight].x);
    assert_eq!(handles[&HandleId::TopRight].x, handles[&HandleId::MiddleRight].x);
    assert_eq!(handles[&HandleId::TopLeft].y, handles[&HandleId::TopRight].y);
    assert_eq!(handles[&HandleId::TopLeft].y, handles[&HandleId::MiddleTop].y);
    assert_eq!(handles[&HandleId::BotLeft].y, handles[&HandleId::BotRight].y);
    assert_eq!(handles[&HandleId::BotLeft].y, handles[&HandleId::MiddleBot].y);

    for (id, p) in resize_handles(bounds) {
        let on_perimeter = p.x == bounds.top.x
            || p.x == bounds.bot.x
            || p.y == bounds.top.y
            || p.y == bounds.bot.y;
        assert!(on_perimeter, "{:?} at {:?} is off the perimeter", id, p);
    }
}

#[test]
fn test_midpoints_truncate_on_odd_spans() {
    let bounds = BoundingBox::from_corners(Point::new(0, 0), Point::new(5, 7));
    let handles = positions(bounds);

    assert_eq!(handles[&HandleId::MiddleTop], Point::new(2, 0));
    assert_eq!(handles[&HandleId::MiddleLeft], Point::new(0, 3));
}

#[test]
fn test_degenerate_box_handles_coincide() {
    let bounds = BoundingBox::from_corners(Point::new(4, 4), Point::new(4, 4));
    for (_, p) in resize_handles(bounds) {
        assert_eq!(p, Point::new(4, 4));
    }
}

#[test]
fn test_handle_at_prefers_corners_over_midpoints() {
    let bounds = BoundingBox::from_corners(Point::new(0, 0), Point::new(8, 8));
    // (1, 1) is within grab range of both TopLeft and the edge midpoints;
    // the corner wins.
    assert_eq!(handle_at(bounds, Point::new(1, 1)), Some(HandleId::TopLeft));
    assert_eq!(handle_at(bounds, Point::new(100, 100)), None);
}

#[test]
fn test_handle_at_grab_square() {
    let bounds = BoundingBox::from_corners(Point::new(0, 0), Point::new(100, 100));
    assert_eq!(
        handle_at(bounds, Point::new(105, 105)),
        Some(HandleId::BotRight)
    );
    assert_eq!(handle_at(bounds, Point::new(106, 100)), None);
    assert_eq!(
        handle_at(bounds, Point::new(50, 102)),
        Some(HandleId::MiddleBot)
    );
}

#[test]
fn test_handle_position_matches_derivation() {
    let bounds = BoundingBox::from_corners(Point::new(10, 10), Point::new(50, 50));
    assert_eq!(handle_position(bounds, HandleId::BotRight), Point::new(50, 50));
    assert_eq!(handle_position(bounds, HandleId::MiddleRight), Point::new(50, 30));
}

#[test]
fn test_resized_anchors_opposite_corner() {
    let bounds = BoundingBox::from_corners(Point::new(10, 10), Point::new(50, 50));

    let tl = resized(bounds, HandleId::TopLeft, Point::new(5, 5));
    assert_eq!(tl, BoundingBox::from_corners(Point::new(5, 5), Point::new(50, 50)));

    let tr = resized(bounds, HandleId::TopRight, Point::new(60, 0));
    assert_eq!(tr, BoundingBox::from_corners(Point::new(10, 0), Point::new(60, 50)));

    let bl = resized(bounds, HandleId::BotLeft, Point::new(0, 70));
    assert_eq!(bl, BoundingBox::from_corners(Point::new(0, 10), Point::new(50, 70)));

    let br = resized(bounds, HandleId::BotRight, Point::new(55, 45));
    assert_eq!(br, BoundingBox::from_corners(Point::new(10, 10), Point::new(55, 45)));
}

#[test]
fn test_resized_edge_handles_move_one_side() {
    let bounds = BoundingBox::from_corners(Point::new(10, 10), Point::new(50, 50));

    let top = resized(bounds, HandleId::MiddleTop, Point::new(30, 0));
    assert_eq!(top, BoundingBox::from_corners(Point::new(10, 0), Point::new(50, 50)));

    let left = resized(bounds, HandleId::MiddleLeft, Point::new(0, 30));
    assert_eq!(left, BoundingBox::from_corners(Point::new(0, 10), Point::new(50, 50)));

    let bot = resized(bounds, HandleId::MiddleBot, Point::new(30, 66));
    assert_eq!(bot, BoundingBox::from_corners(Point::new(10, 10), Point::new(50, 66)));

    let right = resized(bounds, HandleId::MiddleRight, Point::new(44, 30));
    assert_eq!(right, BoundingBox::from_corners(Point::new(10, 10), Point::new(44, 50)));
}

#[test]
fn test_resized_dragging_past_anchor_flips() {
    let bounds = BoundingBox::from_corners(Point::new(10, 10), Point::new(50, 50));
    let flipped = resized(bounds, HandleId::BotRight, Point::new(0, 0));
    assert_eq!(
        flipped,
        BoundingBox::from_corners(Point::new(0, 0), Point::new(10, 10))
    );
}

#[test]
fn test_handle_marker_is_filled_black_circle() {
    let marker = handle_marker(Point::new(20, 20), 5);
    assert_eq!(
        marker.bounds(),
        BoundingBox::from_corners(Point::new(15, 15), Point::new(25, 25))
    );
    assert!(marker.style().is_filling);
    assert_eq!(marker.style().pen_color, Color::BLACK);
    assert_eq!(marker.style().brush_color, Color::BLACK);
}
