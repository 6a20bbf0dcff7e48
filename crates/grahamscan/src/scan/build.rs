use crate::geom2::{orientation, Point};

/// Scan state of `build_hull`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
    /// Still on the first ray out of the pivot; collinear points go to index 1.
    InitialCollinear,
    /// Regular Graham scan: pop on right turns, then push.
    Scanning,
}

/// Scan a pivot-first, angle-sorted sequence into the hull.
///
/// InitialCollinear
/// - fewer than two accepted points: push.
/// - `orientation(hull[-2], hull[-1], p) == 0`: insert `p` at index 1. The sorter
///   feeds the first ray farthest-first, so this rebuilds it nearest-first.
/// - otherwise: switch to `Scanning` and push.
///
/// Scanning
/// - pop while the last two accepted points and `p` turn clockwise, then push.
///
/// The result is returned exactly as accumulated.
pub fn build_hull(sorted: &[Point]) -> Vec<Point> {
    let mut hull: Vec<Point> = Vec::with_capacity(sorted.len());
    let mut phase = Phase::InitialCollinear;
    for &p in sorted {
        match phase {
            Phase::InitialCollinear => {
                let n = hull.len();
                if n < 2 {
                    hull.push(p);
                } else if orientation(hull[n - 2], hull[n - 1], p) == 0.0 {
                    hull.insert(1, p);
                } else {
                    phase = Phase::Scanning;
                    hull.push(p);
                }
            }
            Phase::Scanning => {
                while hull.len() >= 2
                    && orientation(hull[hull.len() - 2], hull[hull.len() - 1], p) < 0.0
                {
                    hull.pop();
                }
                hull.push(p);
            }
        }
    }
    hull
}
