use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use grahamscan::Point;
use polars::prelude::*;
use std::fs;
use std::path::Path;

/// On-disk layout of a point file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// `.csv` → csv, anything else → text
    Auto,
    /// Point count, then that many `x y` pairs, whitespace separated
    Text,
    /// Header row with `x` and `y` columns
    Csv,
}

impl InputFormat {
    fn resolve(self, path: &Path) -> InputFormat {
        match self {
            InputFormat::Auto => {
                let is_csv = path
                    .extension()
                    .map(|e| e.eq_ignore_ascii_case("csv"))
                    .unwrap_or(false);
                if is_csv {
                    InputFormat::Csv
                } else {
                    InputFormat::Text
                }
            }
            other => other,
        }
    }
}

/// Load every point from `path`.
pub fn read_points(path: &Path, format: InputFormat) -> Result<Vec<Point>> {
    let format = format.resolve(path);
    tracing::debug!(path = %path.display(), ?format, "read_points");
    match format {
        InputFormat::Csv => read_csv(path),
        _ => {
            let src = fs::read_to_string(path)
                .with_context(|| format!("unable to open file {}", path.display()))?;
            parse_text(&src).with_context(|| format!("parsing {}", path.display()))
        }
    }
}

/// Parse the count-prefixed text layout: `N x1 y1 x2 y2 ...`.
///
/// Line breaks carry no meaning. Tokens after the N-th pair are ignored.
pub fn parse_text(src: &str) -> Result<Vec<Point>> {
    let mut tokens = src.split_whitespace();
    let Some(count_tok) = tokens.next() else {
        bail!("empty input: expected a point count");
    };
    let count: usize = count_tok
        .parse()
        .with_context(|| format!("invalid point count '{count_tok}'"))?;

    let mut points = Vec::with_capacity(count);
    for i in 0..count {
        let (Some(xt), Some(yt)) = (tokens.next(), tokens.next()) else {
            bail!("truncated input: expected {count} points, found {i}");
        };
        let x: f64 = xt
            .parse()
            .with_context(|| format!("point {i}: invalid x coordinate '{xt}'"))?;
        let y: f64 = yt
            .parse()
            .with_context(|| format!("point {i}: invalid y coordinate '{yt}'"))?;
        points.push(Point::new(x, y));
    }

    let extra = tokens.count();
    if extra > 0 {
        tracing::warn!(extra, "ignoring tokens after the last point");
    }
    Ok(points)
}

fn read_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("unable to open file {}", path.display()))?
        .collect()
        .with_context(|| format!("reading csv {}", path.display()))?;
    tracing::debug!(rows = df.height(), cols = df.width(), "input_csv_shape");

    let xs = df
        .column("x")
        .context("csv needs an 'x' column")?
        .cast(&DataType::Float64)?;
    let ys = df
        .column("y")
        .context("csv needs a 'y' column")?
        .cast(&DataType::Float64)?;

    let mut points = Vec::with_capacity(df.height());
    for (i, (x, y)) in xs.f64()?.into_iter().zip(ys.f64()?.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => points.push(Point::new(x, y)),
            _ => bail!("row {i}: missing coordinate"),
        }
    }
    Ok(points)
}
