//! Curated flat API for the CLI and benchmarks.
//!
//! Prefer these re-exports over reaching into submodules so call sites stay
//! stable when the module layout moves.

// Points and predicates
pub use crate::geom2::{
    contains_point, distance, orientation, perimeter, signed_area, Point,
};
// Point clouds
pub use crate::geom2::rand::{
    draw_points, PointCount, ReplayToken as SampleReplay, SampleCfg, Shape as SampleShape,
};
// Hull pipeline
pub use crate::scan::{
    build_hull, convex_hull, select_pivot, sort_by_polar_angle, HullError,
};

/// Hull plus the two polygon measures the CLI reports with it.
#[derive(Clone, Debug, PartialEq)]
pub struct HullSummary {
    pub hull: Vec<Point>,
    pub area: f64,
    pub perimeter: f64,
}

/// Run the full pipeline and measure the resulting polygon.
///
/// Pre: `points` is non-empty with finite coordinates.
/// Post: `hull` equals `convex_hull(points)`; `area` is the shoelace area of the
/// hull ring (non-negative for CCW output) and `perimeter` its closed length.
pub fn summarize(points: &[Point]) -> Result<HullSummary, HullError> {
    let hull = convex_hull(points)?;
    let area = signed_area(&hull);
    let perimeter = perimeter(&hull);
    Ok(HullSummary {
        hull,
        area,
        perimeter,
    })
}
