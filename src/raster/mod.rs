//! Rasterization routines.
//!
//! Free functions that draw geometric primitives onto any [`Surface`].
//! Every routine is synchronous, reentrant, and integer-incremental in
//! its inner loop.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: one pixel per dominant-axis step, no gaps
//! - **Cohen-Sutherland Clipping**: outcode-driven segment clipping
//! - **Midpoint Ellipse/Circle**: two-region (ellipse) and single-octant
//!   (circle) decision-variable stepping
//! - **Scanline Polygon Fill**: edge table with incremental x updates,
//!   even-odd rule
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Foley, J. D., et al. (1990). *Computer Graphics: Principles and Practice*.
//!
//! [`Surface`]: crate::surface::Surface

mod clip;
mod ellipse;
mod line;
mod polygon;

pub use clip::clip_line;
pub use ellipse::{draw_circle, draw_ellipse};
pub use line::{draw_clipped_line, draw_line};
pub use polygon::{fill_polygon, FillStatus};

use crate::color::Rgba;

/// Default color for outline primitives (lines, ellipses, circles).
pub const DEFAULT_OUTLINE_COLOR: Rgba = Rgba::BLACK;

/// Default color for polygon fill.
pub const DEFAULT_FILL_COLOR: Rgba = Rgba::WHITE;
