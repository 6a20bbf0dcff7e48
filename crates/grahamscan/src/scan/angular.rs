use std::cmp::Ordering;

use crate::geom2::{distance, orientation, Point};

/// Order `a` against `b` by CCW polar angle around `pivot`.
///
/// Collinear with the pivot (`orientation == 0`): the farther point comes first,
/// equal distances compare `Equal`. Otherwise `a` comes first iff
/// `pivot → a → b` turns left.
///
/// This is a total order as long as every point lies in the closed half-plane
/// right of the pivot with the pivot lexicographically smallest, which
/// `select_pivot` guarantees. Points equal to the pivot sort last.
#[inline]
pub fn polar_angle_cmp(pivot: Point, a: &Point, b: &Point) -> Ordering {
    let cross = orientation(pivot, *a, *b);
    if cross == 0.0 {
        let da = distance(pivot, *a);
        let db = distance(pivot, *b);
        return db.partial_cmp(&da).unwrap_or(Ordering::Equal);
    }
    if cross > 0.0 {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Sort `points[1..]` around the pivot at `points[0]` (stable).
pub fn sort_by_polar_angle(points: &mut [Point]) {
    if let Some((&mut pivot, rest)) = points.split_first_mut() {
        rest.sort_by(|a, b| polar_angle_cmp(pivot, a, b));
    }
}
