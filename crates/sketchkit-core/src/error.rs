//! Error handling for SketchKit.
//!
//! Library code reports failures through typed enums; the file-I/O boundary
//! in `sketchkit-figures` wraps them with `anyhow` context. All error types
//! use `thiserror`.

use thiserror::Error;

/// Canvas document error type.
///
/// Represents failures of canvas-level operations: addressing a figure that
/// does not exist, or a translation that would leave the canvas.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    /// The figure index does not name a figure on the canvas.
    #[error("no figure at index {index}")]
    NoSuchFigure {
        /// The offending index.
        index: usize,
    },

    /// A move was rejected because part of the figure would leave the canvas.
    #[error("move by ({dx}, {dy}) would leave the {width}x{height} canvas")]
    OutOfBounds {
        /// Requested horizontal delta.
        dx: i32,
        /// Requested vertical delta.
        dy: i32,
        /// Canvas width.
        width: i32,
        /// Canvas height.
        height: i32,
    },
}

/// Persisted-format error type.
///
/// Represents value-level failures while decoding a saved canvas; structural
/// failures (missing required fields, unknown kind tags) are rejected by the
/// deserializer itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A color literal was not of the form `#RRGGBB`.
    #[error("invalid color literal: {value}")]
    InvalidColor {
        /// The rejected literal.
        value: String,
    },

    /// A figure record carried a pen size of zero.
    #[error("pen size must be positive")]
    ZeroPenSize,
}

/// Main error type for SketchKit.
#[derive(Error, Debug)]
pub enum Error {
    /// Canvas document error
    #[error(transparent)]
    Canvas(#[from] CanvasError),

    /// Persisted-format error
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
