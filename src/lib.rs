//! # softraster
//!
//! A small 2D software-rasterization library. Primitive drawing routines
//! write directly into a pixel-addressable drawing surface: straight
//! lines, rectangle-clipped lines, ellipse/circle outlines, and filled
//! polygons.
//!
//! All arithmetic in the inner loops is incremental and integer-only, so
//! repeated draws are exactly reproducible with no floating-point drift.
//!
//! ## Quick Start
//!
//! ```
//! use softraster::prelude::*;
//!
//! let mut fb = Framebuffer::new(64, 64).expect("non-zero dimensions");
//! fb.clear(Rgba::WHITE);
//!
//! draw_line(&mut fb, 0, 0, 63, 63, Rgba::BLACK);
//! draw_circle(&mut fb, 32, 32, 20, Rgba::RED);
//!
//! let triangle = Polygon::new(vec![
//!     Point::new(10, 10),
//!     Point::new(50, 10),
//!     Point::new(10, 50),
//! ]).expect("three vertices");
//! fill_polygon(&mut fb, &triangle, Rgba::BLUE);
//! ```
//!
//! ## Design
//!
//! The routines are free functions over a [`Surface`] capability trait
//! ("set pixel", "bounds"), so they are portable across pixel targets and
//! testable against the in-memory [`Framebuffer`]. The library owns no
//! state between calls: every routine is synchronous and reentrant, and
//! concurrent callers drawing onto distinct surfaces need no coordination.
//!
//! [`Surface`]: surface::Surface
//! [`Framebuffer`]: framebuffer::Framebuffer
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Newman, W. M., & Sproull, R. F. (1979). *Principles of Interactive
//!   Computer Graphics* (Cohen-Sutherland clipping).
//! - Foley, J. D., et al. (1990). *Computer Graphics: Principles and
//!   Practice* (midpoint ellipse, scanline polygon fill).

// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types.
pub mod color;

/// In-memory framebuffer surface.
pub mod framebuffer;

/// Geometric primitives (points, segments, rectangles, polygons).
pub mod geometry;

/// The pixel-settable surface abstraction.
pub mod surface;

// ============================================================================
// Rasterization Modules
// ============================================================================

/// Rasterization routines (lines, clipping, conics, polygon fill).
pub mod raster;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for softraster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```
/// use softraster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{ClipRect, Point, Polygon, Segment};
    pub use crate::raster::{
        clip_line, draw_circle, draw_clipped_line, draw_ellipse, draw_line, fill_polygon,
        FillStatus, DEFAULT_FILL_COLOR, DEFAULT_OUTLINE_COLOR,
    };
    pub use crate::surface::Surface;
}
