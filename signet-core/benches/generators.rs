//! Signed graph generator benchmarks.
//!
//! Measures the time to grow Erdős–Rényi and Barabási–Albert graphs across a
//! few sizes, using a fixed seed so every sample draws the same graphs.
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::SmallRng};

use signet_core::{BarabasiAlbertGenerator, ErdosRenyiGenerator, GraphError};

/// Seed used for every benchmark iteration.
const SEED: u64 = 42;

/// Node counts to benchmark.
const NODE_COUNTS: &[usize] = &[100, 500, 1_000];

fn erdos_renyi_impl(c: &mut Criterion) -> Result<(), GraphError> {
    let mut group = c.benchmark_group("erdos_renyi");
    for &nodes in NODE_COUNTS {
        let generator = ErdosRenyiGenerator::new(nodes, 0.1, 0.5)?;
        group.bench_with_input(BenchmarkId::from_parameter(nodes), &generator, |b, generator| {
            b.iter(|| generator.generate(&mut SmallRng::seed_from_u64(SEED)));
        });
    }
    group.finish();
    Ok(())
}

fn barabasi_albert_impl(c: &mut Criterion) -> Result<(), GraphError> {
    let mut group = c.benchmark_group("barabasi_albert");
    for &nodes in NODE_COUNTS {
        let generator = BarabasiAlbertGenerator::new(nodes, 0.5, 3, 2)?;
        group.bench_with_input(BenchmarkId::from_parameter(nodes), &generator, |b, generator| {
            b.iter(|| generator.generate(&mut SmallRng::seed_from_u64(SEED)));
        });
    }
    group.finish();
    Ok(())
}

fn generators(c: &mut Criterion) {
    if let Err(err) = erdos_renyi_impl(c) {
        panic!("erdos_renyi benchmark setup failed: {err}");
    }
    if let Err(err) = barabasi_albert_impl(c) {
        panic!("barabasi_albert benchmark setup failed: {err}");
    }
}

criterion_group!(benches, generators);
criterion_main!(benches);
