//! Criterion benchmarks for the support-polygon pipeline.
//! Focus sizes: contact counts in {4, 8, 16, 32, 64}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use support_polygon::geom2::{constraints_from_hull, convex_hull};
use support_polygon::project::project_to_ground;
use support_polygon::sample::{draw_contact_points, ContactCfg, ReplayToken};
use support_polygon::{support_constraints, HullCfg};

fn contacts(count: usize, seed: u64) -> Vec<nalgebra::Vector3<f64>> {
    let cfg = ContactCfg {
        count,
        ..ContactCfg::default()
    };
    draw_contact_points(cfg, ReplayToken { seed, index: 0 })
}

fn bench_support(c: &mut Criterion) {
    let cfg = HullCfg::default();
    let mut group = c.benchmark_group("support_polygon");
    for &n in &[4usize, 8, 16, 32, 64] {
        group.bench_with_input(BenchmarkId::new("pipeline", n), &n, |b, &n| {
            b.iter_batched(
                || contacts(n, 43),
                |pts| {
                    let _sys = support_constraints(&pts, &cfg).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("constraints_only", n), &n, |b, &n| {
            let hull = convex_hull(&project_to_ground(&contacts(n, 44)), &cfg).unwrap();
            b.iter(|| {
                let _sys = constraints_from_hull(&hull, &cfg).unwrap();
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_support);
criterion_main!(benches);
