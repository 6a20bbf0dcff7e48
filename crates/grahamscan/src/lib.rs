//! Convex hulls of planar point sets via Graham scan.
//!
//! Layout
//! - `geom2`: the `Point` value type, orientation/distance predicates, polygon
//!   measures and reproducible point samplers.
//! - `scan`: the hull pipeline (pivot → angular sort → scan with backtracking).
//!
//! API Policy
//! - Everything callers need is re-exported at the crate root and in `prelude`.
//! - `api` is a flat curated surface for the CLI and benchmarks.

pub mod api;
pub mod geom2;
pub mod scan;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{distance, orientation, Point};
pub use nalgebra::Vector2 as Vec2;
pub use scan::{convex_hull, HullError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_points, PointCount, ReplayToken, SampleCfg, Shape};
    pub use crate::geom2::{
        contains_point, distance, orientation, perimeter, signed_area, Point,
    };
    pub use crate::scan::{build_hull, convex_hull, select_pivot, sort_by_polar_angle, HullError};
    pub use nalgebra::Vector2 as Vec2;
}

/// Signed area of the parallelogram spanned by vectors `a` and `b` in R².
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}
