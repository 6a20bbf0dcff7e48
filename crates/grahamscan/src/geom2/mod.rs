//! Planar geometry used by the hull pipeline.
//!
//! Purpose
//! - Provide the `Point` value type and the two predicates the scan is built on:
//!   `orientation` (signed triangle area) and `distance`.
//! - Keep comparisons exact. Equality and the collinearity test use plain f64
//!   comparisons with no tolerance; near-degenerate inputs classify exactly as the
//!   arithmetic says.
//!
//! References
//! - Code cross-refs: `scan::{select_pivot, sort_by_polar_angle, build_hull}`

mod polygon;
pub mod rand;
mod types;
mod util;

pub use polygon::{contains_point, perimeter, signed_area};
pub use types::Point;
pub use util::{distance, orientation};

#[cfg(test)]
mod tests;
