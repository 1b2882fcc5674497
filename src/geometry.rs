//! Geometric primitives for rasterization.
//!
//! All coordinates are integer pixel coordinates in surface space with y
//! growing downward. Everything here is a plain value type created per
//! call and discarded; no type retains a reference to a surface.

use crate::error::{Error, Result};

/// A 2D point with integer pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Segment {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a segment from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Whether both endpoints coincide.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.start.x == self.end.x && self.start.y == self.end.y
    }
}

/// An axis-aligned clip rectangle, stored normalized.
///
/// Invariant: `left <= right` and `top <= bottom`. Degenerate rectangles
/// of zero width or height are legal; a zero-area rectangle clips
/// everything except segments passing exactly through its single point.
/// The boundary is inclusive on all four sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipRect {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl ClipRect {
    /// Create a clip rectangle from two corner points.
    ///
    /// The corners may be given in any order; they are normalized so the
    /// invariant `left <= right, top <= bottom` always holds.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            right: a.x.max(b.x),
            bottom: a.y.max(b.y),
        }
    }

    /// Create a clip rectangle covering a `width` x `height` surface,
    /// i.e. pixels `(0, 0)` through `(width - 1, height - 1)`.
    ///
    /// The rectangle is boundary-inclusive, so a zero-size surface
    /// degenerates to the single-pixel rectangle at the origin; the
    /// surface itself still discards any write there.
    #[must_use]
    pub fn of_surface(width: u32, height: u32) -> Self {
        Self::from_corners(
            Point::ORIGIN,
            Point::new(
                (width as i32 - 1).max(0),
                (height as i32 - 1).max(0),
            ),
        )
    }

    /// Left edge.
    #[must_use]
    pub const fn left(&self) -> i32 {
        self.left
    }

    /// Top edge.
    #[must_use]
    pub const fn top(&self) -> i32 {
        self.top
    }

    /// Right edge.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.right
    }

    /// Bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.bottom
    }

    /// Check if a point is inside the rectangle (boundary inclusive).
    #[must_use]
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
}

/// A closed polygon: an ordered sequence of at least three vertices.
///
/// The last vertex implicitly connects back to the first. Insertion order
/// is significant; it defines the edges. Self-intersecting polygons are
/// accepted but fill results for them are unspecified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Create a polygon from a vertex loop.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegeneratePolygon`] if fewer than three vertices
    /// are supplied.
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(Error::DegeneratePolygon {
                vertices: vertices.len(),
            });
        }
        Ok(Self { vertices })
    }

    /// The vertex loop, in insertion order.
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Iterate over the edges, including the closing edge back to the
    /// first vertex.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}
