//! Criterion benchmarks for the building search.
//!
//! Measures generation throughput and whole runs with a fixed generation
//! cap so that timings do not depend on when stagnation kicks in.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use storey_ga::ga::{GaConfig, GaRunner};
use storey_ga::{evaluate, run, Building, BuildingConfig, BuildingFitness};

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for &floors in &[10usize, 100, 1000] {
        let mut rng = StdRng::seed_from_u64(42);
        let building = Building::new_random(floors, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(floors), &building, |b, bld| {
            b.iter(|| evaluate(black_box(bld), 60.0, 100_000.0))
        });
    }
    group.finish();
}

fn bench_next_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_generation");
    group.sample_size(20);

    for &pop in &[50usize, 200] {
        let config = GaConfig::default()
            .with_population_size(pop)
            .with_parallel(false);
        let runner = GaRunner::new(BuildingFitness::new(60.0, 100_000.0).unwrap(), config);
        let mut rng = StdRng::seed_from_u64(42);
        let prototype = Building::new_random(10, &mut rng);
        let population = runner.initial_population(&prototype, &mut rng);

        group.bench_with_input(BenchmarkId::from_parameter(pop), &population, |b, p| {
            b.iter(|| black_box(runner.next_generation(p, &mut rng)))
        });
    }
    group.finish();
}

fn bench_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("run");
    group.sample_size(10);

    for (floors, pop, gen) in [(10usize, 50usize, 100usize), (30, 100, 100)] {
        let config = BuildingConfig::default()
            .with_floors(floors)
            .with_population_size(pop)
            .with_stagnation_limit(gen)
            .with_max_generations(gen)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("f{}_p{}_g{}", floors, pop, gen), floors),
            &config,
            |b, c| {
                b.iter(|| {
                    let outcome = run(black_box(c)).unwrap();
                    black_box(outcome)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_next_generation, bench_run);
criterion_main!(benches);
