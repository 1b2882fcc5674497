//! Scanline polygon fill.
//!
//! Fills the interior of a closed polygon row by row using an edge table:
//! every non-horizontal edge contributes an x-intersection to each
//! scanline in its half-open span `[y_min, y_max)`, intersections are
//! sorted and paired under the even-odd rule, and the pixels between each
//! pair are filled. Active edges update their intersection incrementally
//! by the edge's inverse slope instead of recomputing per scanline.
//!
//! The half-open span convention is what keeps shared vertices from being
//! counted twice; horizontal edges contribute no crossings and are left
//! out of the table entirely.

use crate::color::Rgba;
use crate::geometry::Polygon;
use crate::surface::Surface;

/// Outcome of a polygon fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillStatus {
    /// At least one pixel was written.
    Filled,
    /// The polygon produced no pixels (every span off-surface, or all
    /// edges horizontal).
    Nothing,
}

/// One non-horizontal polygon edge, tracked while its span is active.
#[derive(Debug, Clone, Copy)]
struct Edge {
    /// Scanline at which the edge retires (exclusive).
    y_max: i32,
    /// Current x-intersection for the scanline being filled.
    x: f32,
    /// Change in x per unit step down in y.
    inv_slope: f32,
}

/// Fill a polygon's interior using scanline even-odd filling.
///
/// Colors every pixel whose center lies inside the polygon under the
/// even-odd rule; the exterior is left untouched. Spans reaching past the
/// surface are clamped to its bounds, so arbitrarily off-surface polygons
/// are safe. Concave polygons are handled; self-intersecting or
/// degenerate (collinear/duplicate-vertex) polygons produce unspecified
/// but non-panicking results.
///
/// Returns [`FillStatus::Filled`] when at least one pixel was written and
/// [`FillStatus::Nothing`] otherwise.
pub fn fill_polygon<S: Surface>(surface: &mut S, polygon: &Polygon, color: Rgba) -> FillStatus {
    // Edge table: one entry per non-horizontal edge, keyed by its top
    // scanline.
    let mut table: Vec<(i32, Edge)> = Vec::with_capacity(polygon.vertices().len());
    for (p, q) in polygon.edges() {
        if p.y == q.y {
            continue;
        }
        let (top, bottom) = if p.y < q.y { (p, q) } else { (q, p) };
        table.push((
            top.y,
            Edge {
                y_max: bottom.y,
                x: top.x as f32,
                inv_slope: (bottom.x - top.x) as f32 / (bottom.y - top.y) as f32,
            },
        ));
    }

    if table.is_empty() {
        return FillStatus::Nothing;
    }

    table.sort_by_key(|&(y_min, _)| y_min);
    let y_start = table[0].0;
    let y_end = table
        .iter()
        .map(|&(_, edge)| edge.y_max)
        .max()
        .unwrap_or(y_start);

    let width = surface.width() as i32;
    let height = surface.height() as i32;

    let mut active: Vec<Edge> = Vec::new();
    let mut next_edge = 0;
    let mut xs: Vec<f32> = Vec::new();
    let mut wrote = false;

    for y in y_start..y_end {
        while next_edge < table.len() && table[next_edge].0 == y {
            active.push(table[next_edge].1);
            next_edge += 1;
        }
        active.retain(|edge| edge.y_max > y);

        xs.clear();
        xs.extend(active.iter().map(|edge| edge.x));
        xs.sort_by(f32::total_cmp);

        if y >= 0 && y < height {
            for pair in xs.chunks_exact(2) {
                // Pixel centers inside the span, clamped to the surface.
                let left = (pair[0].ceil() as i32).max(0);
                let right = (pair[1].floor() as i32).min(width - 1);
                for x in left..=right {
                    surface.set_pixel(x, y, color);
                    wrote = true;
                }
            }
        }

        for edge in &mut active {
            edge.x += edge.inv_slope;
        }
    }

    if wrote {
        FillStatus::Filled
    } else {
        FillStatus::Nothing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Framebuffer;
    use crate::geometry::Point;

    fn lit_count(fb: &Framebuffer, color: Rgba) -> usize {
        (0..fb.height())
            .flat_map(|y| (0..fb.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| fb.get_pixel(x, y) == Some(color))
            .count()
    }

    #[test]
    fn test_fill_axis_aligned_square() {
        let mut fb = Framebuffer::new(30, 30).unwrap();
        let square = Polygon::new(vec![
            Point::new(5, 5),
            Point::new(15, 5),
            Point::new(15, 15),
            Point::new(5, 15),
        ])
        .unwrap();

        let status = fill_polygon(&mut fb, &square, Rgba::RED);
        assert_eq!(status, FillStatus::Filled);

        // Interior filled.
        assert_eq!(fb.get_pixel(10, 10), Some(Rgba::RED));
        // Exterior untouched.
        assert_eq!(fb.get_pixel(3, 10), Some(Rgba::TRANSPARENT));
        assert_eq!(fb.get_pixel(10, 16), Some(Rgba::TRANSPARENT));
        // Half-open spans: rows 5..14 filled, 11 columns each.
        assert_eq!(lit_count(&fb, Rgba::RED), 11 * 10);
    }

    #[test]
    fn test_fill_triangle_area() {
        let mut fb = Framebuffer::new(20, 20).unwrap();
        let triangle = Polygon::new(vec![
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(0, 10),
        ])
        .unwrap();

        fill_polygon(&mut fb, &triangle, Rgba::BLUE);

        // Pixel centers inside the half-plane intersection of the
        // triangle: x >= 0, y >= 0, x + y <= 10 has 66 lattice points.
        let count = lit_count(&fb, Rgba::BLUE) as i64;
        assert!((count - 66).abs() <= 11, "filled {count} pixels");

        // Every filled pixel satisfies the half-plane test.
        for y in 0..20i32 {
            for x in 0..20i32 {
                if fb.get_pixel(x as u32, y as u32) == Some(Rgba::BLUE) {
                    assert!(x + y <= 10, "({x},{y}) outside the triangle");
                }
            }
        }
    }

    #[test]
    fn test_fill_concave_polygon() {
        // A "U" shape: two prongs joined at the bottom.
        let mut fb = Framebuffer::new(40, 40).unwrap();
        let u_shape = Polygon::new(vec![
            Point::new(5, 5),
            Point::new(12, 5),
            Point::new(12, 20),
            Point::new(20, 20),
            Point::new(20, 5),
            Point::new(27, 5),
            Point::new(27, 30),
            Point::new(5, 30),
        ])
        .unwrap();

        fill_polygon(&mut fb, &u_shape, Rgba::GREEN);

        // Inside both prongs and the base.
        assert_eq!(fb.get_pixel(8, 10), Some(Rgba::GREEN));
        assert_eq!(fb.get_pixel(24, 10), Some(Rgba::GREEN));
        assert_eq!(fb.get_pixel(16, 25), Some(Rgba::GREEN));
        // The notch between the prongs stays empty.
        assert_eq!(fb.get_pixel(16, 10), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_fill_clamps_offscreen_spans() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        let big = Polygon::new(vec![
            Point::new(-100, -100),
            Point::new(100, -100),
            Point::new(100, 100),
            Point::new(-100, 100),
        ])
        .unwrap();

        let status = fill_polygon(&mut fb, &big, Rgba::RED);
        assert_eq!(status, FillStatus::Filled);
        assert_eq!(lit_count(&fb, Rgba::RED), 100);
    }

    #[test]
    fn test_fill_fully_offscreen_reports_nothing() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        let far = Polygon::new(vec![
            Point::new(100, 100),
            Point::new(120, 100),
            Point::new(110, 120),
        ])
        .unwrap();

        let status = fill_polygon(&mut fb, &far, Rgba::RED);
        assert_eq!(status, FillStatus::Nothing);
        assert_eq!(lit_count(&fb, Rgba::RED), 0);
    }

    #[test]
    fn test_fill_collinear_vertices_do_not_panic() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        let flat = Polygon::new(vec![
            Point::new(1, 5),
            Point::new(5, 5),
            Point::new(9, 5),
        ])
        .unwrap();

        // All edges horizontal: nothing to fill, but no crash.
        let status = fill_polygon(&mut fb, &flat, Rgba::RED);
        assert_eq!(status, FillStatus::Nothing);
    }

    #[test]
    fn test_fill_shared_vertex_not_double_counted() {
        // Diamond: the left and right vertices sit on a scanline that
        // both touching edges start/end on. Half-open spans mean that
        // row still fills as a single clean span.
        let mut fb = Framebuffer::new(20, 20).unwrap();
        let diamond = Polygon::new(vec![
            Point::new(10, 2),
            Point::new(18, 10),
            Point::new(10, 18),
            Point::new(2, 10),
        ])
        .unwrap();

        fill_polygon(&mut fb, &diamond, Rgba::BLUE);

        // The widest row is continuous between the extreme vertices.
        let row: Vec<u32> = (0..20u32)
            .filter(|&x| fb.get_pixel(x, 10) == Some(Rgba::BLUE))
            .collect();
        assert!(!row.is_empty());
        let first = row[0];
        let last = row[row.len() - 1];
        assert_eq!(row.len() as u32, last - first + 1, "gap in row 10: {row:?}");
    }

    #[test]
    fn test_fill_is_idempotent() {
        let mut fb = Framebuffer::new(20, 20).unwrap();
        let triangle = Polygon::new(vec![
            Point::new(2, 2),
            Point::new(17, 4),
            Point::new(9, 16),
        ])
        .unwrap();

        fill_polygon(&mut fb, &triangle, Rgba::GREEN);
        let first = fb.pixels().to_vec();
        fill_polygon(&mut fb, &triangle, Rgba::GREEN);
        assert_eq!(fb.pixels(), &first[..]);
    }
}
