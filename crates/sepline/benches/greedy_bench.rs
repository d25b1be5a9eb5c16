//! Criterion microbenches for the greedy separation loop.
//!
//! Sizes track the fixed instance bound: the largest case is the worst the
//! batch driver can feed the core. Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use sepline::rand::{draw_instance, InstanceCfg, PointCount, ReplayToken};
use sepline::{separate, PointSet};

fn bench_separate(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy");
    for &n in &[25usize, 50, 100] {
        let cfg = InstanceCfg {
            count: PointCount::Fixed(n),
            coord_min: 0,
            coord_max: 9_999,
        };
        group.bench_function(BenchmarkId::new("separate", n), |b| {
            b.iter_batched(
                || {
                    let pts =
                        draw_instance(cfg, ReplayToken { seed: 42, index: n as u64 }).unwrap();
                    PointSet::from_sorted_by_x(&pts)
                },
                |ps| {
                    let _ = separate(&ps);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_separate);
criterion_main!(benches);
