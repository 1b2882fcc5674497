//! Midpoint ellipse and circle rasterization.
//!
//! Outline only; the interior is left untouched (polygon fill is a
//! separate routine). Each computed point is mirrored into the remaining
//! quadrants (ellipse) or octants (circle), so the decision loop only
//! walks a quarter or an eighth of the curve.

use crate::color::Rgba;
use crate::surface::Surface;

/// Draw an ellipse outline using the midpoint algorithm.
///
/// `a` is the horizontal semi-axis, `b` the vertical semi-axis. The curve
/// is generated in the first quadrant in two regions split where the
/// slope reaches -1 (region 1 steps along x, region 2 along y), each
/// driven by an integer decision variable updated incrementally. The
/// decision arithmetic is scaled by four so it stays integral; no
/// floating point is evaluated per pixel.
///
/// A zero semi-axis degrades to plotting the single center pixel.
/// Negative semi-axes draw nothing.
pub fn draw_ellipse<S: Surface>(surface: &mut S, cx: i32, cy: i32, a: i32, b: i32, color: Rgba) {
    if a < 0 || b < 0 {
        return;
    }
    if a == 0 || b == 0 {
        surface.set_pixel(cx, cy, color);
        return;
    }

    let a2 = i64::from(a) * i64::from(a);
    let b2 = i64::from(b) * i64::from(b);

    let mut x: i64 = 0;
    let mut y: i64 = i64::from(b);
    let mut dx: i64 = 0; // 2 * b^2 * x
    let mut dy: i64 = 2 * a2 * y; // 2 * a^2 * y

    // Region 1: |slope| < 1, step along x.
    let mut d1 = 4 * b2 - 4 * a2 * i64::from(b) + a2;
    while dx < dy {
        plot_quadrants(surface, cx, cy, x as i32, y as i32, color);

        x += 1;
        dx += 2 * b2;
        if d1 < 0 {
            d1 += 4 * (dx + b2);
        } else {
            y -= 1;
            dy -= 2 * a2;
            d1 += 4 * (dx - dy + b2);
        }
    }

    // Region 2: |slope| > 1, step along y.
    let mut d2 = b2 * (2 * x + 1) * (2 * x + 1) + 4 * a2 * (y - 1) * (y - 1) - 4 * a2 * b2;
    while y >= 0 {
        plot_quadrants(surface, cx, cy, x as i32, y as i32, color);

        y -= 1;
        dy -= 2 * a2;
        if d2 > 0 {
            d2 += 4 * (a2 - dy);
        } else {
            x += 1;
            dx += 2 * b2;
            d2 += 4 * (dx - dy + a2);
        }
    }
}

/// Draw a circle outline using the midpoint algorithm.
///
/// The circle is the `a == b` special case of the ellipse: the two-region
/// test collapses to a single octant-driven loop with one decision
/// variable, and each computed point mirrors into all eight octants.
///
/// A zero radius plots the single center pixel. Negative radii draw
/// nothing.
pub fn draw_circle<S: Surface>(surface: &mut S, cx: i32, cy: i32, radius: i32, color: Rgba) {
    if radius < 0 {
        return;
    }
    if radius == 0 {
        surface.set_pixel(cx, cy, color);
        return;
    }

    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;

    while x >= y {
        plot_octants(surface, cx, cy, x, y, color);

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

/// Mirror a first-quadrant ellipse point into all four quadrants.
#[inline]
fn plot_quadrants<S: Surface>(surface: &mut S, cx: i32, cy: i32, x: i32, y: i32, color: Rgba) {
    surface.set_pixel(cx + x, cy + y, color);
    surface.set_pixel(cx - x, cy + y, color);
    surface.set_pixel(cx + x, cy - y, color);
    surface.set_pixel(cx - x, cy - y, color);
}

/// Mirror a first-octant circle point into all eight octants.
#[inline]
fn plot_octants<S: Surface>(surface: &mut S, cx: i32, cy: i32, x: i32, y: i32, color: Rgba) {
    surface.set_pixel(cx + x, cy + y, color);
    surface.set_pixel(cx - x, cy + y, color);
    surface.set_pixel(cx + x, cy - y, color);
    surface.set_pixel(cx - x, cy - y, color);
    surface.set_pixel(cx + y, cy + x, color);
    surface.set_pixel(cx - y, cy + x, color);
    surface.set_pixel(cx + y, cy - x, color);
    surface.set_pixel(cx - y, cy - x, color);
}
