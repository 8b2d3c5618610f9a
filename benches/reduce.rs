//! Pool generation and reduction benchmarks.
//!
//! Run with:
//! ```bash
//! cargo bench --bench reduce
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use wheel_rs::config::WheelConfig;
use wheel_rs::wheel::Wheel;

/// A shuffled universe 1..=n, so generation order does not depend on
/// favorable input order.
fn universe(n: u32, seed: u64) -> Vec<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut numbers: Vec<u32> = (1..=n).collect();
    numbers.shuffle(&mut rng);
    numbers
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("wheel/generate");

    for n in [10, 15, 20, 25] {
        group.bench_with_input(BenchmarkId::new("pool", n), &n, |b, &n| {
            let mut wheel = Wheel::with_seed(WheelConfig::default(), 0);
            wheel.set_universe(&universe(n, 1)).unwrap();
            b.iter(|| wheel.generate(6).unwrap());
        });
    }

    group.finish();
}

fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("wheel/reduce");
    group.sample_size(10); // Large pools make each reduction slow

    for n in [15, 18, 20] {
        group.bench_with_input(BenchmarkId::new("min_hits=3", n), &n, |b, &n| {
            b.iter(|| {
                let config = WheelConfig {
                    max_reduced_count: 200,
                    ..WheelConfig::default()
                };
                let mut wheel = Wheel::with_seed(config, 42);
                wheel.set_universe(&universe(n, 1)).unwrap();
                wheel.reduce(3).unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate, bench_reduce);
criterion_main!(benches);
