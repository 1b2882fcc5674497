//! Cohen-Sutherland line clipping.
//!
//! Each endpoint gets a 4-bit region code describing which rectangle
//! boundaries it violates. Segments with both codes zero are trivially
//! accepted; segments whose codes share a bit lie entirely on one side
//! and are trivially rejected. Everything else is cut against one
//! violated boundary at a time until one of the trivial cases applies.

use crate::geometry::{ClipRect, Point, Segment};

const INSIDE: u8 = 0;
const LEFT: u8 = 0b0001;
const RIGHT: u8 = 0b0010;
const TOP: u8 = 0b0100;
const BOTTOM: u8 = 0b1000;

/// At most four boundary cuts are needed for a convex rectangle; the
/// headroom covers re-clips after integer rounding.
const MAX_CUTS: u32 = 8;

/// Compute the visible portion of a segment against a clip rectangle.
///
/// Returns `Some(clipped)` with both endpoints inside the rectangle
/// (boundary inclusive) when any portion of the segment is visible, or
/// `None` when the segment lies entirely outside. A segment fully inside
/// the rectangle is returned unchanged.
///
/// Intersections are computed with the parametric line equation in 64-bit
/// integer arithmetic, rounded to the nearest pixel, so no floating-point
/// error accumulates across cuts.
///
/// # Example
///
/// ```
/// use softraster::geometry::{ClipRect, Point, Segment};
/// use softraster::raster::clip_line;
///
/// let rect = ClipRect::from_corners(Point::new(0, 0), Point::new(10, 10));
/// let line = Segment::from_coords(-5, 5, 15, 5);
/// let clipped = clip_line(line, rect).expect("crosses the rectangle");
/// assert_eq!(clipped, Segment::from_coords(0, 5, 10, 5));
/// ```
#[must_use]
pub fn clip_line(segment: Segment, clip: ClipRect) -> Option<Segment> {
    let mut p0 = segment.start;
    let mut p1 = segment.end;
    let mut code0 = outcode(p0, &clip);
    let mut code1 = outcode(p1, &clip);

    for _ in 0..MAX_CUTS {
        if (code0 | code1) == INSIDE {
            return Some(Segment::new(p0, p1));
        }
        if (code0 & code1) != INSIDE {
            return None;
        }

        // Cut the endpoint that is outside. A zero-length segment never
        // reaches here: identical endpoints have identical outcodes and
        // hit one of the trivial cases above.
        if code0 != INSIDE {
            p0 = intersect(p0, p1, code0, &clip);
            code0 = outcode(p0, &clip);
        } else {
            p1 = intersect(p0, p1, code1, &clip);
            code1 = outcode(p1, &clip);
        }
    }

    // Rounding ping-pong exhausted the cut budget without settling;
    // nothing meaningful remains of the segment.
    None
}

/// Region code of a point relative to the rectangle.
fn outcode(p: Point, clip: &ClipRect) -> u8 {
    let mut code = INSIDE;
    if p.x < clip.left() {
        code |= LEFT;
    } else if p.x > clip.right() {
        code |= RIGHT;
    }
    if p.y < clip.top() {
        code |= TOP;
    } else if p.y > clip.bottom() {
        code |= BOTTOM;
    }
    code
}

/// Intersect the segment with one boundary violated by `code`.
///
/// The caller guarantees the segment actually crosses the chosen
/// boundary: if both endpoints shared the violated side the segment
/// would have been trivially rejected, so the relevant delta is nonzero
/// whenever we divide by it.
fn intersect(p0: Point, p1: Point, code: u8, clip: &ClipRect) -> Point {
    let dx = i64::from(p1.x) - i64::from(p0.x);
    let dy = i64::from(p1.y) - i64::from(p0.y);

    if code & LEFT != 0 {
        let x = clip.left();
        Point::new(x, cross_axis(p0.y, dy, i64::from(x) - i64::from(p0.x), dx))
    } else if code & RIGHT != 0 {
        let x = clip.right();
        Point::new(x, cross_axis(p0.y, dy, i64::from(x) - i64::from(p0.x), dx))
    } else if code & TOP != 0 {
        let y = clip.top();
        Point::new(cross_axis(p0.x, dx, i64::from(y) - i64::from(p0.y), dy), y)
    } else {
        let y = clip.bottom();
        Point::new(cross_axis(p0.x, dx, i64::from(y) - i64::from(p0.y), dy), y)
    }
}

/// Coordinate on the free axis where the segment meets the boundary:
/// `base + delta * travel / span`, rounded to nearest.
fn cross_axis(base: i32, delta: i64, travel: i64, span: i64) -> i32 {
    if span == 0 {
        return base;
    }
    (i64::from(base) + round_div(delta * travel, span)) as i32
}

/// Integer division rounded to nearest, ties away from zero.
fn round_div(num: i64, den: i64) -> i64 {
    let (num, den) = if den < 0 { (-num, -den) } else { (num, den) };
    if num >= 0 {
        (num + den / 2) / den
    } else {
        -((-num + den / 2) / den)
    }
}
