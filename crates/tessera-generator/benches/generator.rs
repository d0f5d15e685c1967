//! Benchmarks for initial layout generation.
//!
//! - **`generate_with_seed`**: full permutation generation from a fixed seed,
//!   including PCG seeding and the Fisher–Yates pass.
//! - **`fisher_yates`**: the shuffle alone over all tile identities.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use tessera_core::TileId;
use tessera_generator::{PermutationGenerator, ShuffleSeed, fisher_yates};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_generate_with_seed(c: &mut Criterion) {
    let generator = PermutationGenerator::new();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = ShuffleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("generate_with_seed", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_fisher_yates(c: &mut Criterion) {
    let mut rng = Pcg64::from_seed([7; 32]);
    c.bench_function("fisher_yates", |b| {
        b.iter_batched(
            || hint::black_box(TileId::ALL),
            |mut tiles| {
                fisher_yates(&mut tiles, &mut rng);
                tiles
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(5));
    targets =
        bench_generate_with_seed,
        bench_fisher_yates
);
criterion_main!(benches);
