//! Graham scan: pivot selection, angular sort, scan with backtracking.
//!
//! Pipeline (data flows strictly forward)
//! 1. `select_pivot`: lexicographically smallest point, swapped to the front.
//! 2. `sort_by_polar_angle`: remaining points by CCW angle around the pivot,
//!    farther first among collinear points.
//! 3. `build_hull`: two-phase scan; the initial collinear run is re-inserted
//!    right after the pivot to undo the farther-first order on the first edge.
//!
//! Numerics
//! - All collinearity tests are exact (`orientation == 0.0`). Inputs that are
//!   only nearly collinear are treated as turning. Coordinates must be finite.
//! - The angular comparator is only transitive under exact arithmetic. On nearly
//!   collinear float inputs rounding can make it inconsistent, and the standard
//!   sort (Rust 1.81+) may panic when it detects that. Integer-valued or snapped
//!   coordinates avoid it.

mod angular;
mod build;
mod pivot;

pub use angular::{polar_angle_cmp, sort_by_polar_angle};
pub use build::build_hull;
pub use pivot::select_pivot;

use std::fmt;

use crate::geom2::Point;

/// Errors surfaced by the hull pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HullError {
    /// No points: there is no pivot to anchor the hull.
    EmptyInput,
    /// A coordinate is NaN or infinite; the angular order would not be total.
    NonFinite { index: usize },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::EmptyInput => write!(f, "cannot build a hull from zero points"),
            HullError::NonFinite { index } => {
                write!(f, "point {index} has a non-finite coordinate")
            }
        }
    }
}

impl std::error::Error for HullError {}

/// Convex hull of `points`, counterclockwise, starting at the lexicographically
/// smallest point.
///
/// Pre: at least one point, all coordinates finite. Duplicates are allowed.
/// Post: every returned point equals some input point; the caller's slice is
/// left untouched.
pub fn convex_hull(points: &[Point]) -> Result<Vec<Point>, HullError> {
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(HullError::NonFinite { index });
    }
    let mut work = points.to_vec();
    select_pivot(&mut work)?;
    sort_by_polar_angle(&mut work);
    Ok(build_hull(&work))
}
