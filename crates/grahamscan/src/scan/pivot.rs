use super::HullError;
use crate::geom2::Point;

/// Move the lexicographically smallest point (x, then y) to index 0.
///
/// The first occurrence wins when the minimum value repeats, and it is moved by
/// a single swap with whatever sits at index 0. Returns the pivot value.
pub fn select_pivot(points: &mut [Point]) -> Result<Point, HullError> {
    let first = *points.first().ok_or(HullError::EmptyInput)?;
    let mut best = 0usize;
    let mut pivot = first;
    for (i, p) in points.iter().enumerate().skip(1) {
        if p.lexicographic_less(&pivot) {
            best = i;
            pivot = *p;
        }
    }
    if best != 0 {
        points.swap(0, best);
    }
    Ok(pivot)
}
