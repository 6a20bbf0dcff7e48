use anyhow::{Context, Result};
use grahamscan::api::HullSummary;
use grahamscan::Point;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Render a hull as `[(x1, y1), (x2, y2), ...]`.
///
/// Coordinates use f64 `Display` (shortest round-trip form): `3.0` prints as `3`,
/// `1.234567` stays `1.234567` rather than being cut to six significant digits.
pub fn format_hull(hull: &[Point]) -> String {
    let body: Vec<String> = hull.iter().map(|p| p.to_string()).collect();
    format!("[{}]", body.join(", "))
}

/// JSON document written by `cli hull --out`.
#[derive(Debug, Serialize)]
pub struct HullReport {
    pub input: String,
    pub points: usize,
    pub hull: Vec<[f64; 2]>,
    pub area: f64,
    pub perimeter: f64,
}

impl HullReport {
    pub fn new(input: &Path, points: usize, summary: &HullSummary) -> Self {
        Self {
            input: input.to_string_lossy().into_owned(),
            points,
            hull: summary.hull.iter().map(|p| [p.x, p.y]).collect(),
            area: summary.area,
            perimeter: summary.perimeter,
        }
    }
}

/// Write `contents` to `path`, creating parent directories as needed.
pub fn write_creating_dirs(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
}

/// Serialize points in the count-prefixed text layout read by `input::parse_text`.
pub fn format_point_file(points: &[Point]) -> String {
    let mut out = format!("{}\n", points.len());
    for p in points {
        out.push_str(&format!("{} {}\n", p.x, p.y));
    }
    out
}
