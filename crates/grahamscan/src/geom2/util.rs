use super::types::Point;
use crate::parallelogram_area;

/// Signed area of the parallelogram spanned by `p2 − p1` and `p3 − p1`.
///
/// Positive: p1→p2→p3 turns counterclockwise. Negative: clockwise.
/// Zero: collinear (including any coincident pair).
#[inline]
pub fn orientation(p1: Point, p2: Point, p3: Point) -> f64 {
    let a = p2.to_vec2() - p1.to_vec2();
    let b = p3.to_vec2() - p1.to_vec2();
    parallelogram_area(a, b)
}

/// Euclidean distance.
#[inline]
pub fn distance(p1: Point, p2: Point) -> f64 {
    (p1.to_vec2() - p2.to_vec2()).norm()
}
