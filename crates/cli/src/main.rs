use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use grahamscan::api::{draw_points, summarize, PointCount, SampleCfg, SampleReplay, SampleShape};
use serde_json::json;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod output;
mod provenance;

use input::InputFormat;
use provenance::Payload;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hulls of planar point files (Graham scan)")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull of a point file and print it as [(x, y), ...]
    Hull {
        /// Point file; prompted for on stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
        format: InputFormat,
        /// Also write a JSON report (plus provenance sidecar) here
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write a reproducible random point file in the text layout
    Sample {
        #[arg(long)]
        count: usize,
        #[arg(long, value_enum, default_value_t = ShapeArg::Disc)]
        shape: ShapeArg,
        #[arg(long, default_value_t = 1.0)]
        radius: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Round coordinates to integers
        #[arg(long)]
        grid: bool,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeArg {
    Disc,
    Square,
    Ring,
}

impl From<ShapeArg> for SampleShape {
    fn from(s: ShapeArg) -> Self {
        match s {
            ShapeArg::Disc => SampleShape::Disc,
            ShapeArg::Square => SampleShape::Square,
            ShapeArg::Ring => SampleShape::Ring,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull { input, format, out } => hull(input, format, out),
        Action::Sample {
            count,
            shape,
            radius,
            seed,
            index,
            grid,
            out,
        } => {
            let cfg = SampleCfg {
                count: PointCount::Fixed(count),
                shape: shape.into(),
                radius,
                grid,
            };
            sample(cfg, SampleReplay { seed, index }, out)
        }
        Action::Report => report(),
    }
}

fn hull(input: Option<PathBuf>, format: InputFormat, out: Option<PathBuf>) -> Result<()> {
    let input = match input {
        Some(path) => path,
        None => prompt_filename(&mut io::stdin().lock(), &mut io::stdout())?,
    };
    tracing::info!(input = %input.display(), ?format, "hull");

    let points = input::read_points(&input, format)?;
    let summary =
        summarize(&points).with_context(|| format!("hull of {}", input.display()))?;
    tracing::info!(
        points = points.len(),
        vertices = summary.hull.len(),
        area = summary.area,
        "hull_done"
    );
    println!("{}", output::format_hull(&summary.hull));

    if let Some(out) = out {
        let report = output::HullReport::new(&input, points.len(), &summary);
        output::write_creating_dirs(&out, &serde_json::to_vec_pretty(&report)?)?;
        let payload = Payload::new(
            "hull",
            json!({
                "input": input.to_string_lossy(),
                "format": format!("{format:?}").to_lowercase(),
            }),
        );
        let prov = provenance::write_sidecar(&out, payload)?;
        tracing::info!(out = %out.display(), provenance = %prov.display(), "report_written");
    }
    Ok(())
}

/// Ask for a file name and read the first whitespace-delimited token.
fn prompt_filename<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<PathBuf> {
    write!(writer, "Enter the filename: ")?;
    writer.flush()?;
    let mut line = String::new();
    reader.read_line(&mut line).context("reading filename")?;
    match line.split_whitespace().next() {
        Some(name) => Ok(PathBuf::from(name)),
        None => bail!("no filename given"),
    }
}

fn sample(cfg: SampleCfg, tok: SampleReplay, out: PathBuf) -> Result<()> {
    tracing::info!(?cfg, seed = tok.seed, index = tok.index, out = %out.display(), "sample");
    let points = draw_points(cfg, tok);
    output::write_creating_dirs(&out, output::format_point_file(&points).as_bytes())?;
    let payload = Payload::new(
        "sample",
        json!({
            "count": points.len(),
            "shape": format!("{:?}", cfg.shape).to_lowercase(),
            "radius": cfg.radius,
            "grid": cfg.grid,
            "seed": tok.seed,
            "index": tok.index
        }),
    );
    provenance::write_sidecar(&out, payload)?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = provenance::document(None, Payload::new("report", json!({})));
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
