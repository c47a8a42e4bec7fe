//! Geometric primitives shared by the seat and board layers.
//!
//! Screen coordinates: origin at top-left, y grows downwards, so the
//! Bottom edge of a rectangle sits at `max_y()`.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

/// Tolerance used for approximate float comparisons.
pub const CMP_EPSILON: f32 = 0.00001;

/// Approximate equality with a tolerance relative to `a` (never below
/// [`CMP_EPSILON`]).
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    if a == b {
        return true;
    }
    let tolerance = (CMP_EPSILON * a.abs()).max(CMP_EPSILON);
    (a - b).abs() < tolerance
}

/// A 2D point (or vector) in real-valued coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance_to(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;

    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Point {
    type Output = Point;

    fn div(self, rhs: f32) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

/// Width and height of a rectangle. Both are expected to be non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle: top-left position plus size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub position: Point,
    pub size: Size,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { position: Point::new(x, y), size: Size::new(width, height) }
    }

    #[inline]
    pub fn min_x(&self) -> f32 {
        self.position.x
    }

    #[inline]
    pub fn min_y(&self) -> f32 {
        self.position.y
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.position.x + self.size.width
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        self.position.y + self.size.height
    }

    /// Bottom-right corner.
    #[inline]
    pub fn end(&self) -> Point {
        Point::new(self.max_x(), self.max_y())
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            self.position.x + self.size.width / 2.0,
            self.position.y + self.size.height / 2.0,
        )
    }

    /// True when `point` lies inside or on the border.
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x <= self.max_x()
            && point.y >= self.min_y()
            && point.y <= self.max_y()
    }

    /// True when `other` is fully inside `self`, allowing `tolerance` of
    /// float slack on every side.
    pub fn encloses(&self, other: &Rect, tolerance: f32) -> bool {
        other.min_x() >= self.min_x() - tolerance
            && other.min_y() >= self.min_y() - tolerance
            && other.max_x() <= self.max_x() + tolerance
            && other.max_y() <= self.max_y() + tolerance
    }
}

/// Axis along which something is packed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// One side of a bounding rectangle.
///
/// Declaration order is the tie-break priority: `Bottom` wins over `Right`,
/// `Right` over `Top`, `Top` over `Left`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Edge {
    Bottom,
    Right,
    Top,
    Left,
}

impl Edge {
    /// All edges in priority order.
    pub const ALL: [Edge; 4] = [Edge::Bottom, Edge::Right, Edge::Top, Edge::Left];

    /// The axis running along this edge (the seat packing axis).
    pub fn axis(self) -> Axis {
        match self {
            Edge::Bottom | Edge::Top => Axis::Horizontal,
            Edge::Left | Edge::Right => Axis::Vertical,
        }
    }

    pub fn is_horizontal(self) -> bool {
        self.axis() == Axis::Horizontal
    }

    /// Rotation that makes content anchored on this edge face the interior.
    pub fn rotation_degrees(self) -> f32 {
        match self {
            Edge::Bottom => 0.0,
            Edge::Right => 270.0,
            Edge::Top => 180.0,
            Edge::Left => 90.0,
        }
    }

    /// `[start, end]` of `bounds` along this edge's axis.
    pub fn axis_range(self, bounds: &Rect) -> (f32, f32) {
        match self.axis() {
            Axis::Horizontal => (bounds.min_x(), bounds.max_x()),
            Axis::Vertical => (bounds.min_y(), bounds.max_y()),
        }
    }

    /// Extent of `bounds` perpendicular to this edge.
    pub fn depth(self, bounds: &Rect) -> f32 {
        match self.axis() {
            Axis::Horizontal => bounds.size.height,
            Axis::Vertical => bounds.size.width,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Edge::Bottom => "bottom",
            Edge::Right => "right",
            Edge::Top => "top",
            Edge::Left => "left",
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_accessors() {
        let r = Rect::new(10.0, 20.0, 300.0, 120.0);
        assert_eq!(r.min_x(), 10.0);
        assert_eq!(r.max_x(), 310.0);
        assert_eq!(r.min_y(), 20.0);
        assert_eq!(r.max_y(), 140.0);
        assert_eq!(r.center(), Point::new(160.0, 80.0));
    }

    #[test]
    fn test_edge_priority_order() {
        assert!(Edge::Bottom < Edge::Right);
        assert!(Edge::Right < Edge::Top);
        assert!(Edge::Top < Edge::Left);
        assert_eq!(Edge::ALL.len(), 4);
    }

    #[test]
    fn test_edge_rotation_faces_interior() {
        assert_eq!(Edge::Bottom.rotation_degrees(), 0.0);
        assert_eq!(Edge::Right.rotation_degrees(), 270.0);
        assert_eq!(Edge::Top.rotation_degrees(), 180.0);
        assert_eq!(Edge::Left.rotation_degrees(), 90.0);
    }

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(1.0, 1.0 + CMP_EPSILON / 2.0));
        assert!(!approx_eq(1.0, 1.001));
        assert!(approx_eq(10_000.0, 10_000.05));
    }

    #[test]
    fn test_encloses_with_tolerance() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(outer.encloses(&Rect::new(0.0, 0.0, 100.0, 100.0), 0.0));
        assert!(!outer.encloses(&Rect::new(-1.0, 0.0, 50.0, 50.0), 0.5));
        assert!(outer.encloses(&Rect::new(-0.0001, 0.0, 50.0, 50.0), 0.001));
    }
}
