//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation →
//! replacement → termination check → repeat.

use super::config::GaConfig;
use super::operators::{Crossover, Mutation, SwapMutation, UniformCrossover};
use super::population::Population;
use super::selection::{EliteSelection, Selection};
use super::termination::{
    EvolutionState, FitnessStagnation, GenerationCap, StopReason, Termination,
};
use super::types::{Chromosome, FitnessFunction, Individual};
use crate::error::ConfigError;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info};

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<C> {
    /// The best individual found during the entire run.
    pub best: Individual<C>,

    /// Total number of generations executed.
    pub generations: usize,

    /// The condition that ended the run.
    pub stop_reason: StopReason,

    /// Best fitness so far at the end of each generation, starting with
    /// the initial population.
    pub fitness_history: Vec<f64>,

    /// The final population, frozen.
    pub population: Population<C>,
}

/// Executes the GA evolutionary loop.
///
/// Operators are injected as strategy objects; unset strategies fall back
/// to [`EliteSelection`], [`UniformCrossover`], [`SwapMutation`] and
/// [`FitnessStagnation`] with the configured window.
///
/// # Usage
///
/// ```ignore
/// let runner = GaRunner::new(MyFitness, GaConfig::default().with_seed(42))
///     .with_selection(TournamentSelection(3));
/// let result = runner.run(&prototype)?;
/// println!("Best fitness: {}", result.best.fitness);
/// ```
pub struct GaRunner<C> {
    config: GaConfig,
    fitness: Box<dyn FitnessFunction<C>>,
    selection: Box<dyn Selection<C>>,
    crossover: Box<dyn Crossover<C>>,
    mutation: Box<dyn Mutation<C>>,
    termination: Option<Box<dyn Termination>>,
}

impl<C: Chromosome + 'static> GaRunner<C> {
    pub fn new(fitness: impl FitnessFunction<C> + 'static, config: GaConfig) -> Self {
        Self {
            config,
            fitness: Box::new(fitness),
            selection: Box::new(EliteSelection),
            crossover: Box::new(UniformCrossover::default()),
            mutation: Box::new(SwapMutation),
            termination: None,
        }
    }

    pub fn with_selection(mut self, selection: impl Selection<C> + 'static) -> Self {
        self.selection = Box::new(selection);
        self
    }

    pub fn with_crossover(mut self, crossover: impl Crossover<C> + 'static) -> Self {
        self.crossover = Box::new(crossover);
        self
    }

    pub fn with_mutation(mut self, mutation: impl Mutation<C> + 'static) -> Self {
        self.mutation = Box::new(mutation);
        self
    }

    /// Replaces the stagnation condition.
    ///
    /// `config.max_generations`, when set, still applies as a hard cap.
    pub fn with_termination(mut self, termination: impl Termination + 'static) -> Self {
        self.termination = Some(Box::new(termination));
        self
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Runs the GA optimization.
    ///
    /// The initial population is created from `prototype` with
    /// [`Chromosome::create_new_of_same_shape`], so every individual has
    /// the prototype's length. The prototype itself is not part of the
    /// population.
    pub fn run(&self, prototype: &C) -> Result<GaResult<C>, ConfigError> {
        self.config.validate()?;

        let seed = self.config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);

        info!(
            population_size = self.config.population_size,
            chromosome_length = prototype.len(),
            stagnation_limit = self.config.stagnation_limit,
            max_generations = ?self.config.max_generations,
            seed,
            "starting evolution"
        );

        // 1. Initialize and evaluate
        let mut population = self.initial_population(prototype, &mut rng);

        // 2. Track best
        let mut best = population.best().clone();
        let mut state = EvolutionState::initial(best.fitness);
        let mut fitness_history = vec![state.best_fitness];

        // 3. Evolutionary loop
        let stop_reason = loop {
            if let Some(reason) = self.check_termination(&state) {
                break reason;
            }

            population = self.next_generation(&population, &mut rng);

            let gen_best = population.best();
            if state.record(gen_best.fitness) {
                best = gen_best.clone();
            }
            fitness_history.push(state.best_fitness);

            debug!(
                generation = state.generation,
                best_fitness = state.best_fitness,
                generation_best = gen_best.fitness,
                stagnant_generations = state.stagnant_generations,
                "generation complete"
            );
        };

        info!(
            generations = state.generation,
            best_fitness = state.best_fitness,
            reason = %stop_reason,
            "evolution finished"
        );

        Ok(GaResult {
            best,
            generations: state.generation,
            stop_reason,
            fitness_history,
            population,
        })
    }

    /// Creates and scores `population_size` random individuals.
    pub fn initial_population(&self, prototype: &C, rng: &mut dyn RngCore) -> Population<C> {
        let chromosomes: Vec<C> = (0..self.config.population_size)
            .map(|_| prototype.create_new_of_same_shape(rng))
            .collect();
        Population::new(0, self.score_all(chromosomes))
    }

    /// Builds the next generation from `population`.
    ///
    /// The `elite_count` best individuals are copied unchanged; the rest of
    /// the slots are filled with offspring of selected parents. Only the
    /// offspring are evaluated. The input population is left untouched.
    pub fn next_generation(
        &self,
        population: &Population<C>,
        rng: &mut dyn RngCore,
    ) -> Population<C> {
        let size = self.config.population_size;
        let elite_count = self.config.elite_count.min(population.len());
        let individuals = population.individuals();

        // Elite preservation
        let mut next_gen: Vec<Individual<C>> = Vec::with_capacity(size);
        next_gen.extend(
            population.ranked_indices()[..elite_count]
                .iter()
                .map(|&i| individuals[i].clone()),
        );

        // Selection
        let needed = size - elite_count;
        let parent_count = needed + needed % 2;
        let mut parents = self
            .selection
            .select(population, parent_count, rng)
            .into_iter()
            .cycle();

        // Crossover + mutation
        let mut offspring: Vec<C> = Vec::with_capacity(needed);
        while offspring.len() < needed {
            let (p1, p2) = match (parents.next(), parents.next()) {
                (Some(a), Some(b)) => (&individuals[a].chromosome, &individuals[b].chromosome),
                _ => panic!("selection strategy returned no parents"),
            };

            let children = if rng.random_bool(self.config.crossover_rate) {
                self.crossover.cross(p1, p2, rng)
            } else {
                vec![p1.clone(), p2.clone()]
            };

            for mut child in children {
                if offspring.len() >= needed {
                    break;
                }
                if rng.random_bool(self.config.mutation_rate) {
                    self.mutation.mutate(&mut child, rng);
                }
                offspring.push(child);
            }
        }

        // Replacement
        next_gen.extend(self.score_all(offspring));
        Population::new(population.generation() + 1, next_gen)
    }

    fn check_termination(&self, state: &EvolutionState) -> Option<StopReason> {
        let capped = self
            .config
            .max_generations
            .and_then(|cap| GenerationCap(cap).check(state));
        capped.or_else(|| match &self.termination {
            Some(custom) => custom.check(state),
            None => FitnessStagnation(self.config.stagnation_limit).check(state),
        })
    }

    fn score_all(&self, chromosomes: Vec<C>) -> Vec<Individual<C>> {
        evaluate_population(self.fitness.as_ref(), chromosomes, self.config.parallel)
    }
}

/// Evaluate all chromosomes, preserving order.
#[cfg(feature = "parallel")]
fn evaluate_population<C: Chromosome>(
    fitness: &dyn FitnessFunction<C>,
    chromosomes: Vec<C>,
    parallel: bool,
) -> Vec<Individual<C>> {
    if parallel {
        chromosomes
            .into_par_iter()
            .map(|c| {
                let f = fitness.evaluate(&c);
                Individual::new(c, f)
            })
            .collect()
    } else {
        evaluate_sequential(fitness, chromosomes)
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate_population<C: Chromosome>(
    fitness: &dyn FitnessFunction<C>,
    chromosomes: Vec<C>,
    _parallel: bool,
) -> Vec<Individual<C>> {
    evaluate_sequential(fitness, chromosomes)
}

fn evaluate_sequential<C: Chromosome>(
    fitness: &dyn FitnessFunction<C>,
    chromosomes: Vec<C>,
) -> Vec<Individual<C>> {
    chromosomes
        .into_iter()
        .map(|c| {
            let f = fitness.evaluate(&c);
            Individual::new(c, f)
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::{
        FitnessThreshold, RandomResetMutation, RankSelection, RouletteSelection,
        TournamentSelection,
    };

    // ---- OneMax problem: maximize number of true bits ----

    #[derive(Clone, Debug, PartialEq)]
    struct BitString(Vec<bool>);

    impl Chromosome for BitString {
        type Gene = bool;

        fn genes(&self) -> &[bool] {
            &self.0
        }

        fn replace_gene(&mut self, index: usize, gene: bool) {
            self.0[index] = gene;
        }

        fn generate_gene<R: Rng + ?Sized>(&self, _index: usize, rng: &mut R) -> bool {
            rng.random_bool(0.5)
        }

        fn create_new_of_same_shape<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
            BitString((0..self.0.len()).map(|i| self.generate_gene(i, rng)).collect())
        }
    }

    fn ones(b: &BitString) -> f64 {
        b.0.iter().filter(|&&bit| bit).count() as f64
    }

    fn prototype(n: usize) -> BitString {
        BitString(vec![false; n])
    }

    fn config() -> GaConfig {
        GaConfig::default()
            .with_population_size(30)
            .with_seed(42)
            .with_parallel(false)
    }

    #[test]
    fn test_onemax_convergence() {
        let runner = GaRunner::new(ones, config().with_max_generations(200).with_mutation_rate(0.3))
            .with_selection(TournamentSelection(3))
            .with_mutation(RandomResetMutation);

        let result = runner.run(&prototype(20)).unwrap();

        assert!(
            result.best.fitness >= 15.0,
            "expected fitness >= 15 for 20-bit OneMax, got {}",
            result.best.fitness
        );
    }

    #[test]
    fn test_constant_fitness_stops_exactly_at_window() {
        for k in [1, 5, 17] {
            let runner = GaRunner::new(|_: &BitString| 0.25, config().with_stagnation_limit(k));
            let result = runner.run(&prototype(8)).unwrap();

            assert_eq!(result.stop_reason, StopReason::Stagnation);
            assert_eq!(result.generations, k);
            assert_eq!(result.fitness_history.len(), k + 1);
            assert_eq!(result.population.generation(), k);
        }
    }

    #[test]
    fn test_generation_cap_wins_over_stagnation() {
        let runner = GaRunner::new(
            |_: &BitString| 0.0,
            config().with_stagnation_limit(50).with_max_generations(7),
        );
        let result = runner.run(&prototype(8)).unwrap();

        assert_eq!(result.stop_reason, StopReason::GenerationCap);
        assert_eq!(result.generations, 7);
    }

    #[test]
    fn test_custom_termination() {
        let runner = GaRunner::new(ones, config().with_max_generations(500).with_mutation_rate(0.5))
            .with_selection(TournamentSelection(3))
            .with_mutation(RandomResetMutation)
            .with_termination(FitnessThreshold(8.0));
        let result = runner.run(&prototype(8)).unwrap();

        match result.stop_reason {
            StopReason::FitnessReached => assert!((result.best.fitness - 8.0).abs() < 1e-12),
            StopReason::GenerationCap => assert_eq!(result.generations, 500),
            other => panic!("unexpected stop reason {other:?}"),
        }
    }

    #[test]
    fn test_elite_survives_unchanged() {
        let runner = GaRunner::new(ones, config().with_mutation_rate(1.0))
            .with_selection(RouletteSelection)
            .with_mutation(RandomResetMutation);
        let mut rng = StdRng::seed_from_u64(7);

        let mut population = runner.initial_population(&prototype(16), &mut rng);
        for _ in 0..30 {
            let previous_best = population.best().clone();
            population = runner.next_generation(&population, &mut rng);
            assert!(
                population
                    .individuals()
                    .iter()
                    .any(|ind| ind == &previous_best),
                "best individual of generation {} was lost",
                population.generation() - 1
            );
        }
    }

    #[test]
    fn test_population_size_is_fixed() {
        for size in [2, 3, 10, 31] {
            let runner = GaRunner::new(ones, config().with_population_size(size));
            let mut rng = StdRng::seed_from_u64(1);
            let mut population = runner.initial_population(&prototype(6), &mut rng);
            for _ in 0..5 {
                population = runner.next_generation(&population, &mut rng);
                assert_eq!(population.len(), size);
                assert!(population.individuals().iter().all(|ind| ind.chromosome.len() == 6));
            }
        }
    }

    #[test]
    fn test_fitness_history_non_decreasing() {
        let runner = GaRunner::new(ones, config().with_max_generations(40))
            .with_selection(RankSelection)
            .with_mutation(RandomResetMutation);
        let result = runner.run(&prototype(12)).unwrap();

        for window in result.fitness_history.windows(2) {
            assert!(
                window[1] >= window[0],
                "best-so-far fitness decreased: {} < {}",
                window[1],
                window[0]
            );
        }
        assert_eq!(
            *result.fitness_history.last().unwrap(),
            result.best.fitness
        );
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let run = || {
            GaRunner::new(ones, config().with_max_generations(25))
                .run(&prototype(10))
                .unwrap()
        };
        let (a, b) = (run(), run());
        assert_eq!(a.best, b.best);
        assert_eq!(a.fitness_history, b.fitness_history);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let runner = GaRunner::new(ones, config().with_population_size(1));
        assert_eq!(
            runner.run(&prototype(4)).unwrap_err(),
            ConfigError::PopulationTooSmall(1)
        );
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let run = |parallel| {
            GaRunner::new(ones, config().with_max_generations(20).with_parallel(parallel))
                .run(&prototype(10))
                .unwrap()
        };
        assert_eq!(run(true).fitness_history, run(false).fitness_history);
    }
}
