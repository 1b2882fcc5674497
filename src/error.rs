//! Error types for softraster operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in softraster operations.
///
/// Expected geometric outcomes (a fully clipped segment, a zero-size
/// ellipse) are not errors; those are reported through return values.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Polygon with fewer than three vertices.
    #[error("Degenerate polygon: {vertices} vertices (3 required)")]
    DegeneratePolygon {
        /// Number of vertices supplied.
        vertices: usize,
    },
}
