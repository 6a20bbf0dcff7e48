//! The planar point value type.
//!
//! - `Point`: immutable `(x, y)` pair of f64 with exact equality.
//! - Lexicographic order on `(x, y)` is exposed as named predicates rather than
//!   `PartialOrd`, so nothing sorts points by accident.

use std::cmp::Ordering;
use std::fmt;

use nalgebra::Vector2;

/// A point in R². Equality is exact coordinate equality.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates are neither NaN nor infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Exact coordinate equality (same as `==`).
    #[inline]
    pub fn coordinate_equals(&self, other: &Point) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// `self < other` in (x, y) lexicographic order.
    #[inline]
    pub fn lexicographic_less(&self, other: &Point) -> bool {
        self.x < other.x || (self.x == other.x && self.y < other.y)
    }

    /// Total lexicographic comparison; NaN coordinates compare equal.
    #[inline]
    pub fn lexicographic_cmp(&self, other: &Point) -> Ordering {
        match self.x.partial_cmp(&other.x).unwrap_or(Ordering::Equal) {
            Ordering::Equal => self.y.partial_cmp(&other.y).unwrap_or(Ordering::Equal),
            o => o,
        }
    }

    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_vec2()
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
