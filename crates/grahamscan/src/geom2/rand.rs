//! Random planar point clouds (replay tokens, fixed shapes).
//!
//! Purpose
//! - Provide small, deterministic point sources for hull tests, benchmarks and the
//!   `cli sample` command.
//!
//! Model
//! - `Disc`: uniform in a disc of radius `radius` around the origin.
//! - `Square`: uniform in `[-radius, radius]²`.
//! - `Ring`: `n/4` (at least 3) vertices of a radially jittered convex-ish polygon,
//!   the remaining points uniform inside the inscribed disc.
//! - `grid = true` rounds every coordinate to the nearest integer, which keeps the
//!   orientation arithmetic exact for moderate radii.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use super::types::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

/// Point count distribution.
#[derive(Clone, Copy, Debug)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n,
            PointCount::Uniform { min, max } => {
                let hi = max.max(min);
                rng.gen_range(min..=hi)
            }
        }
    }
}

/// Region the points are drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Disc,
    Square,
    Ring,
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    pub count: PointCount,
    pub shape: Shape,
    /// Half-extent of the region. Clamped to at least 1e-9.
    pub radius: f64,
    /// Round coordinates to integers.
    pub grid: bool,
}
impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            count: PointCount::Fixed(64),
            shape: Shape::Disc,
            radius: 1.0,
            grid: false,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a point cloud. The same `(cfg, tok)` always yields the same points.
pub fn draw_points(cfg: SampleCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let n = cfg.count.sample(&mut rng);
    let r0 = cfg.radius.max(1e-9);
    let mut pts: Vec<Point> = match cfg.shape {
        Shape::Disc => (0..n).map(|_| in_disc(&mut rng, r0)).collect(),
        Shape::Square => (0..n)
            .map(|_| Point::new(rng.gen_range(-r0..=r0), rng.gen_range(-r0..=r0)))
            .collect(),
        Shape::Ring => ring(&mut rng, n, r0),
    };
    if cfg.grid {
        for p in &mut pts {
            *p = Point::new(p.x.round(), p.y.round());
        }
    }
    pts
}

fn in_disc<R: Rng>(rng: &mut R, r0: f64) -> Point {
    // sqrt keeps the density uniform in area
    let r = r0 * rng.gen::<f64>().sqrt();
    let th = rng.gen::<f64>() * TAU;
    Point::new(r * th.cos(), r * th.sin())
}

fn ring<R: Rng>(rng: &mut R, n: usize, r0: f64) -> Vec<Point> {
    if n == 0 {
        return Vec::new();
    }
    let k = (n / 4).max(3).min(n);
    let delta = TAU / (k as f64);
    let phase = rng.gen::<f64>() * TAU;
    let mut pts: Vec<Point> = (0..k)
        .map(|i| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * 0.3 * delta;
            let th = phase + (i as f64) * delta + jitter;
            let r = r0 * (1.0 + 0.1 * (rng.gen::<f64>() * 2.0 - 1.0));
            Point::new(r * th.cos(), r * th.sin())
        })
        .collect();
    // interior disc stays inside every jittered vertex radius
    let r_in = 0.5 * r0;
    pts.extend((k..n).map(|_| in_disc(rng, r_in)));
    pts
}
