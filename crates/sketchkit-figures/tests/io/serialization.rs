use sketchkit_core::{Error, FormatError};
use sketchkit_figures::{
    Canvas, Color, CurveLine, Ellipse, Figure, FigureKind, FigureStyle, HashableCanvas,
    HashableFigure, Point, Rectangle, Size, StraightLine, TextBox,
};

fn sample_canvas() -> Canvas {
    let mut canvas = Canvas::new(Size::new(640, 480));
    canvas.push(Figure::Line(StraightLine::new(
        Point::new(10, 10),
        Point::new(50, 40),
        FigureStyle {
            pen_size: 3,
            pen_color: Color::new(200, 30, 30),
            brush_color: Color::WHITE,
            is_filling: false,
        },
    )));
    canvas.push(Figure::Rectangle(Rectangle::new(
        Point::new(100, 100),
        Point::new(180, 140),
        FigureStyle {
            pen_size: 1,
            pen_color: Color::BLACK,
            brush_color: Color::new(0, 128, 0),
            is_filling: true,
        },
    )));
    canvas.push(Figure::Curve(CurveLine::new(
        Point::new(200, 200),
        Point::new(260, 200),
        vec![Point::new(220, 230), Point::new(240, 170)],
        FigureStyle::default(),
    )));
    canvas.push(Figure::TextBox(TextBox::new(
        Point::new(300, 300),
        Point::new(400, 330),
        "label",
        FigureStyle::default(),
    )));
    canvas.push(Figure::Ellipse(Ellipse::new(
        Point::new(20, 200),
        Point::new(80, 260),
        FigureStyle::default(),
    )));
    canvas
}

#[test]
fn test_round_trip_preserves_order_and_attributes() {
    let canvas = sample_canvas();

    let json = serde_json::to_string(&HashableCanvas::from_canvas(&canvas)).expect("serialize");
    let snapshot: HashableCanvas = serde_json::from_str(&json).expect("deserialize");
    let restored = snapshot.into_canvas().expect("rebuild canvas");

    assert_eq!(restored, canvas);
}

#[test]
fn test_snapshot_is_deterministic() {
    let first = serde_json::to_string(&HashableCanvas::from_canvas(&sample_canvas())).unwrap();
    let second = serde_json::to_string(&HashableCanvas::from_canvas(&sample_canvas())).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_snapshot_shape_matches_format() {
    let snapshot = HashableCanvas::from_canvas(&sample_canvas());
    let value: serde_json::Value = serde_json::to_value(&snapshot).unwrap();

    assert_eq!(value["canvas_size"], serde_json::json!([640, 480]));
    let figures = value["figures"].as_array().expect("figures array");
    assert_eq!(figures.len(), 5);
    assert_eq!(figures[0]["kind"], "line");
    assert_eq!(figures[1]["kind"], "rectangle");
    assert_eq!(figures[0]["pen_color"], "#C81E1E");
    assert_eq!(figures[0]["start_point"]["x"], 10);

    for record in figures {
        for key in [
            "kind",
            "start_point",
            "end_point",
            "pen_size",
            "pen_color",
            "brush_color",
            "is_filling",
        ] {
            assert!(!record[key].is_null(), "missing required key {}", key);
        }
    }
}

#[test]
fn test_missing_required_field_fails() {
    // No pen_color; the record must be rejected, not defaulted.
    let json = r##"{
        "canvas_size": [100, 100],
        "figures": [{
            "kind": "line",
            "start_point": {"x": 0, "y": 0},
            "end_point": {"x": 10, "y": 10},
            "pen_size": 2,
            "brush_color": "#FFFFFF",
            "is_filling": false
        }]
    }"##;
    assert!(serde_json::from_str::<HashableCanvas>(json).is_err());
}

#[test]
fn test_unknown_kind_rejected() {
    let json = r##"{
        "canvas_size": [100, 100],
        "figures": [{
            "kind": "hexagon",
            "start_point": {"x": 0, "y": 0},
            "end_point": {"x": 10, "y": 10},
            "pen_size": 2,
            "pen_color": "#000000",
            "brush_color": "#FFFFFF",
            "is_filling": false
        }]
    }"##;
    assert!(serde_json::from_str::<HashableCanvas>(json).is_err());
}

#[test]
fn test_invalid_color_rejected() {
    let json = r##"{
        "canvas_size": [100, 100],
        "figures": [{
            "kind": "line",
            "start_point": {"x": 0, "y": 0},
            "end_point": {"x": 10, "y": 10},
            "pen_size": 2,
            "pen_color": "red",
            "brush_color": "#FFFFFF",
            "is_filling": false
        }]
    }"##;
    assert!(serde_json::from_str::<HashableCanvas>(json).is_err());
}

#[test]
fn test_zero_pen_size_rejected() {
    let record = HashableFigure {
        kind: FigureKind::Rectangle,
        start_point: Point::new(0, 0),
        end_point: Point::new(10, 10),
        pen_size: 0,
        pen_color: Color::BLACK,
        brush_color: Color::WHITE,
        is_filling: false,
        text: String::new(),
        control_points: Vec::new(),
    };

    let err = record.into_figure().unwrap_err();
    assert!(matches!(err, Error::Format(FormatError::ZeroPenSize)));
}

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("drawing.json");

    let snapshot = HashableCanvas::from_canvas(&sample_canvas());
    snapshot.save_to_file(&path).expect("save failed");
    let loaded = HashableCanvas::load_from_file(&path).expect("load failed");

    assert_eq!(loaded, snapshot);
}

#[test]
fn test_load_nonexistent_file() {
    let result = HashableCanvas::load_from_file("/nonexistent/path/drawing.json");
    assert!(result.is_err());
}

#[test]
fn test_load_invalid_json() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ invalid json }").expect("write failed");

    assert!(HashableCanvas::load_from_file(&path).is_err());
}
