//! Bresenham line rasterization.

use crate::color::Rgba;
use crate::geometry::{ClipRect, Segment};
use crate::raster::clip::clip_line;
use crate::surface::Surface;

/// Draw a straight segment using Bresenham's algorithm.
///
/// Plots every pixel on the ideal segment between `(x0, y0)` and
/// `(x1, y1)` with integer-only arithmetic: exactly one pixel per unit
/// step along the dominant axis, so the path is connected with no gaps,
/// and both endpoints are always plotted. All four octant sign
/// combinations and the horizontal/vertical degenerate cases are handled
/// without division. A zero-length segment plots a single pixel.
///
/// Pixels outside the surface bounds are discarded by the surface.
pub fn draw_line<S: Surface>(surface: &mut S, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = x0;
    let mut y = y0;

    loop {
        surface.set_pixel(x, y, color);

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Clip a segment against a rectangle, then draw the visible portion.
///
/// Returns `true` when some portion was visible and drawn, `false` when
/// the segment lies entirely outside the rectangle and nothing was
/// plotted.
pub fn draw_clipped_line<S: Surface>(
    surface: &mut S,
    segment: Segment,
    clip: ClipRect,
    color: Rgba,
) -> bool {
    match clip_line(segment, clip) {
        Some(visible) => {
            draw_line(
                surface,
                visible.start.x,
                visible.start.y,
                visible.end.x,
                visible.end.y,
                color,
            );
            true
        }
        None => false,
    }
}
