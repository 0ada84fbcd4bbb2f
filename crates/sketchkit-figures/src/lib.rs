//! # SketchKit Figures
//!
//! The figure model of SketchKit: geometric figures that are placed, moved,
//! resized and rendered on a drawing canvas, plus the hash-stable JSON
//! snapshot used for persistence.
//!
//! ## Core Components
//!
//! - **Figures**: rectangles, ellipses, straight lines, curve lines and
//!   text boxes, all implementing the [`CanvasFigure`] capability set
//! - **Handles**: derivation and hit-testing of the 8 resize grips
//! - **Canvas**: the ordered figure collection with bounds-checked moves
//! - **Serialization**: the `HashableCanvas`/`HashableFigure` snapshot
//! - **Renderer**: a tiny-skia backed [`DrawSurface`] implementation
//!
//! ## Architecture
//!
//! ```text
//! Canvas (ordered figure list)
//!   ├── Figure (tagged enum over the five kinds)
//!   │     └── CanvasFigure (geometry + draw family contract)
//!   ├── Handles (pure derivation from a bounding box)
//!   └── DrawSurface (external graphics collaborator)
//!
//! HashableCanvas (persisted snapshot)
//! ```
//!
//! The library never owns the UI's graphics surface: figures draw onto any
//! [`DrawSurface`] passed in. [`PixmapSurface`] is the bundled raster
//! backend.

pub mod canvas;
pub mod figures;
pub mod handles;
pub mod renderer;
pub mod serialization;
pub mod surface;

pub use canvas::Canvas;
pub use figures::{
    CanvasFigure, CurveLine, Ellipse, Figure, FigureKind, FigureStyle, Rectangle, StraightLine,
    TextBox,
};
pub use handles::{handle_at, handle_marker, handle_position, resize_handles, HandleId,
    HANDLE_RADIUS};
pub use renderer::PixmapSurface;
pub use serialization::{HashableCanvas, HashableFigure};
pub use surface::DrawSurface;

// Re-export the core primitives so downstream code needs a single import.
pub use sketchkit_core::{BoundingBox, Color, DashStyle, Error, Pen, Point, Result, Size};
