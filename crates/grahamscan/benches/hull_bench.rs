//! Criterion benchmarks for the hull pipeline.
//! Focus sizes: n in {10, 100, 1000, 10000}.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p grahamscan

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use grahamscan::geom2::rand::{draw_points, PointCount, ReplayToken, SampleCfg, Shape};
use grahamscan::scan::{build_hull, convex_hull, select_pivot, sort_by_polar_angle};
use grahamscan::Point;

fn cloud(n: usize, shape: Shape, seed: u64) -> Vec<Point> {
    let cfg = SampleCfg {
        count: PointCount::Fixed(n),
        shape,
        radius: 1.0,
        grid: false,
    };
    draw_points(cfg, ReplayToken { seed, index: n as u64 })
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[10usize, 100, 1000, 10000] {
        for (name, shape) in [("disc", Shape::Disc), ("ring", Shape::Ring)] {
            group.bench_with_input(
                BenchmarkId::new(format!("convex_hull_{name}"), n),
                &n,
                |b, &n| {
                    let pts = cloud(n, shape, 43);
                    b.iter(|| {
                        let _hull = convex_hull(&pts).unwrap();
                    })
                },
            );
        }

        // scan stage alone, on a pre-sorted sequence
        group.bench_with_input(BenchmarkId::new("build_hull_presorted", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let mut pts = cloud(n, Shape::Disc, 44);
                    select_pivot(&mut pts).unwrap();
                    sort_by_polar_angle(&mut pts);
                    pts
                },
                |pts| {
                    let _hull = build_hull(&pts);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
