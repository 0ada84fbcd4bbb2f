//! # SketchKit Core
//!
//! Core types for SketchKit: integer 2D geometry primitives, pen and color
//! styling, and the unified error model shared by all SketchKit crates.
//!
//! Canvas coordinates are whole pixels. Points and sizes are plain `Copy`
//! values; mutation always produces a new value rather than aliasing.

pub mod error;
pub mod geometry;
pub mod style;

pub use error::{CanvasError, Error, FormatError, Result};
pub use geometry::{BoundingBox, Point, Size};
pub use style::{Color, DashStyle, Pen};
