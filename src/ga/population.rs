//! Scored populations and best-individual extraction.

use super::types::Individual;
use std::cmp::Ordering;

/// The individuals alive in one generation, each with its cached fitness.
///
/// A population is built once per generation and never edited afterwards:
/// the runner assembles the next generation in a fresh `Vec` and publishes
/// it as a new `Population`.
#[derive(Debug, Clone)]
pub struct Population<C> {
    generation: usize,
    individuals: Vec<Individual<C>>,
}

impl<C> Population<C> {
    /// Wraps already-scored individuals.
    ///
    /// # Panics
    /// Panics if `individuals` is empty.
    pub fn new(generation: usize, individuals: Vec<Individual<C>>) -> Self {
        assert!(!individuals.is_empty(), "population must not be empty");
        Self {
            generation,
            individuals,
        }
    }

    /// Generation index; the initial population is generation 0.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn individuals(&self) -> &[Individual<C>] {
        &self.individuals
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Fitness of every individual, in population order.
    pub fn fitnesses(&self) -> Vec<f64> {
        self.individuals.iter().map(|ind| ind.fitness).collect()
    }

    /// Returns the individual with the highest fitness.
    ///
    /// Ties go to the first one encountered.
    pub fn best(&self) -> &Individual<C> {
        &self.individuals[best_index(&self.individuals)]
    }

    /// Indices of all individuals sorted best first.
    ///
    /// The sort is stable, so equally fit individuals keep population order.
    pub fn ranked_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.individuals.len()).collect();
        indices.sort_by(|&a, &b| {
            compare_fitness(self.individuals[b].fitness, self.individuals[a].fitness)
        });
        indices
    }
}

/// Returns the best individual of `population`. Free-function form of
/// [`Population::best`].
pub fn best<C>(population: &Population<C>) -> &Individual<C> {
    population.best()
}

/// Index of the first individual with maximal fitness.
fn best_index<C>(individuals: &[Individual<C>]) -> usize {
    let mut best = 0;
    for (i, ind) in individuals.iter().enumerate().skip(1) {
        if compare_fitness(ind.fitness, individuals[best].fitness) == Ordering::Greater {
            best = i;
        }
    }
    best
}

/// Total order on fitness values with NaN ranked below everything.
pub(crate) fn compare_fitness(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}
