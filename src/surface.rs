//! The pixel-settable surface abstraction.
//!
//! The rasterizers are agnostic to how pixels ultimately reach a screen;
//! they only need a target that can accept "set pixel at (x, y) to color
//! C" and report its bounds. The caller owns the surface for the duration
//! of a call; no routine retains or outlives it.

use crate::color::Rgba;

/// A pixel-addressable drawing target.
///
/// Coordinates passed to [`set_pixel`](Surface::set_pixel) are signed so
/// rasterizers can hand over geometry that extends past the surface;
/// implementations must silently discard writes outside
/// `0..width` x `0..height` rather than fault.
pub trait Surface {
    /// Width of the drawable region in pixels.
    fn width(&self) -> u32;

    /// Height of the drawable region in pixels.
    fn height(&self) -> u32;

    /// Write one pixel. Out-of-bounds coordinates are discarded.
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgba);

    /// Whether `(x, y)` lies inside the drawable region.
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height()
    }
}
