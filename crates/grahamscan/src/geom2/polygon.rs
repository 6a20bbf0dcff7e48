//! Measures on a closed vertex ring (last vertex connects back to the first).

use super::types::Point;
use super::util::{distance, orientation};

/// Shoelace area; positive for a counterclockwise ring. Fewer than 3 vertices → 0.
pub fn signed_area(ring: &[Point]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for k in 0..ring.len() {
        let p = ring[k];
        let q = ring[(k + 1) % ring.len()];
        twice += p.x * q.y - q.x * p.y;
    }
    0.5 * twice
}

/// Length of the closed ring. A single vertex has perimeter 0; two vertices
/// count the segment twice (there and back).
pub fn perimeter(ring: &[Point]) -> f64 {
    if ring.len() < 2 {
        return 0.0;
    }
    (0..ring.len())
        .map(|k| distance(ring[k], ring[(k + 1) % ring.len()]))
        .sum()
}

/// Inside-or-on-boundary test for a convex counterclockwise ring.
///
/// Pre: `ring` is convex and CCW (as returned by `convex_hull`); repeated
/// consecutive vertices are allowed.
/// Post: true iff `p` lies on the left of, or on, every edge. An empty ring
/// contains nothing; a one-vertex ring contains only that vertex. A flat ring
/// (all vertices collinear) contains the points of its bounding segment.
pub fn contains_point(ring: &[Point], p: Point) -> bool {
    let n = ring.len();
    match n {
        0 => false,
        1 => ring[0] == p,
        _ => {
            let left_of_all = (0..n).all(|k| orientation(ring[k], ring[(k + 1) % n], p) >= 0.0);
            if !left_of_all {
                return false;
            }
            if signed_area(ring) != 0.0 {
                return true;
            }
            within_bounds(ring, p)
        }
    }
}

fn within_bounds(ring: &[Point], p: Point) -> bool {
    let (mut lo_x, mut hi_x) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut lo_y, mut hi_y) = (f64::INFINITY, f64::NEG_INFINITY);
    for q in ring {
        lo_x = lo_x.min(q.x);
        hi_x = hi_x.max(q.x);
        lo_y = lo_y.min(q.y);
        hi_y = hi_y.max(q.y);
    }
    lo_x <= p.x && p.x <= hi_x && lo_y <= p.y && p.y <= hi_y
}
