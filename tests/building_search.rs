//! End-to-end checks of the building search through the public API.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use storey_ga::ga::operators::uniform_crossover;
use storey_ga::ga::{Chromosome, GaConfig, GaRunner, StopReason, SwapMutation};
use storey_ga::{evolve, run, Building, BuildingConfig, BuildingFitness, ConfigError};

fn config() -> BuildingConfig {
    BuildingConfig::default()
        .with_population_size(30)
        .with_stagnation_limit(20)
        .with_seed(2024)
}

#[test]
fn generous_budget_yields_a_feasible_design() {
    // Ten random floors average about 400k, so a 1M budget is easy to meet.
    let outcome = run(&config().with_budgets(60.0, 1_000_000.0)).unwrap();

    assert!(outcome.design.feasible);
    assert!(outcome.design.fitness > 0.0);
    assert!(outcome.design.total_height <= 60.0);
    assert!(outcome.design.total_cost <= 1_000_000.0);
    assert_eq!(outcome.stop_reason, StopReason::Stagnation);
}

#[test]
fn same_seed_same_design() {
    let a = run(&config()).unwrap();
    let b = run(&config()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn stagnation_window_is_exact_when_nothing_improves() {
    let fitness = |_: &Building| 0.5;
    let ga = GaConfig::default()
        .with_population_size(10)
        .with_stagnation_limit(12)
        .with_seed(3);
    let mut rng = StdRng::seed_from_u64(0);
    let prototype = Building::new_random(4, &mut rng);

    let result = GaRunner::new(fitness, ga).run(&prototype).unwrap();

    assert_eq!(result.generations, 12);
    assert_eq!(result.stop_reason, StopReason::Stagnation);
}

#[test]
fn elite_building_survives_each_generation() {
    let fitness = BuildingFitness::new(60.0, 100_000.0).unwrap();
    let ga = GaConfig::default()
        .with_population_size(20)
        .with_mutation_rate(1.0)
        .with_parallel(false);
    let runner = GaRunner::new(fitness, ga).with_mutation(SwapMutation);
    let mut rng = StdRng::seed_from_u64(11);
    let prototype = Building::new_random(10, &mut rng);

    let mut population = runner.initial_population(&prototype, &mut rng);
    for _ in 0..25 {
        let elite = population.best().clone();
        population = runner.next_generation(&population, &mut rng);
        let survived = population.individuals().iter().any(|ind| *ind == elite);
        assert!(survived || population.best().fitness > elite.fitness);
    }
}

#[test]
fn generation_cap_bounds_the_run() {
    let (result, _) = evolve(&config().with_max_generations(3), |r| r).unwrap();
    assert_eq!(result.generations, 3);
    assert_eq!(result.stop_reason, StopReason::GenerationCap);
    assert!(result
        .population
        .individuals()
        .iter()
        .all(|ind| ind.chromosome.len() == 10));
}

#[test]
fn configuration_errors_abort_before_running() {
    assert_eq!(
        run(&config().with_budgets(60.0, 0.0)).unwrap_err(),
        ConfigError::InvalidBudget {
            name: "max_cost",
            value: 0.0
        }
    );
    assert!(run(&config().with_population_size(1)).is_err());
    assert!(run(&config().with_stagnation_limit(0)).is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn crossover_children_take_genes_from_parents(seed in any::<u64>(), n in 1usize..15) {
        let mut rng = StdRng::seed_from_u64(seed);
        let p1 = Building::new_random(n, &mut rng);
        let p2 = Building::new_random(n, &mut rng);
        let (c1, c2) = uniform_crossover(&p1, &p2, 0.5, &mut rng);

        prop_assert_eq!(c1.len(), n);
        prop_assert_eq!(c2.len(), n);
        for i in 0..n {
            let (a, b) = (&p1.genes()[i], &p2.genes()[i]);
            prop_assert!(&c1.genes()[i] == a || &c1.genes()[i] == b);
            prop_assert!(&c2.genes()[i] == a || &c2.genes()[i] == b);
        }
    }
}
