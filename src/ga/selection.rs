//! Selection strategies for the GA.
//!
//! Selection determines which individuals are chosen as parents for
//! crossover. Different strategies provide different selection pressure.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::population::{compare_fitness, Population};
use rand::{Rng, RngCore};

/// Chooses parents from a population.
///
/// All strategies assume **maximization** (higher fitness = better) and
/// return indices into [`Population::individuals`]. The same index may be
/// returned more than once.
pub trait Selection<C>: Send + Sync {
    /// Selects `count` parent indices.
    ///
    /// # Panics
    /// Implementations may panic if `population` is empty.
    fn select(&self, population: &Population<C>, count: usize, rng: &mut dyn RngCore)
        -> Vec<usize>;
}

/// Elite selection: the `count` best individuals, best first.
///
/// When `count` exceeds the population size the ranking is repeated from
/// the top. Equally fit individuals keep population order.
///
/// # Examples
///
/// ```
/// use storey_ga::ga::{EliteSelection, Individual, Population, Selection};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let pop = Population::new(0, vec![
///     Individual::new('a', 0.1),
///     Individual::new('b', 0.9),
///     Individual::new('c', 0.5),
/// ]);
/// let mut rng = StdRng::seed_from_u64(1);
/// assert_eq!(EliteSelection.select(&pop, 4, &mut rng), vec![1, 2, 0, 1]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EliteSelection;

impl<C> Selection<C> for EliteSelection {
    fn select(
        &self,
        population: &Population<C>,
        count: usize,
        _rng: &mut dyn RngCore,
    ) -> Vec<usize> {
        let ranked = population.ranked_indices();
        ranked.iter().copied().cycle().take(count).collect()
    }
}

/// Tournament selection: pick `k` individuals at random, keep the best.
///
/// Higher `k` = stronger selection pressure.
/// - k=2: light pressure (good for diversity)
/// - k=3-5: moderate pressure (typical default)
/// - k>5: strong pressure (risk of premature convergence)
///
/// # Complexity
/// O(k) per selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TournamentSelection(pub usize);

impl Default for TournamentSelection {
    fn default() -> Self {
        TournamentSelection(3)
    }
}

impl<C> Selection<C> for TournamentSelection {
    fn select(
        &self,
        population: &Population<C>,
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Vec<usize> {
        let fitnesses = population.fitnesses();
        (0..count).map(|_| tournament(&fitnesses, self.0, rng)).collect()
    }
}

fn tournament(fitnesses: &[f64], k: usize, rng: &mut dyn RngCore) -> usize {
    let k = k.max(1);
    let n = fitnesses.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if compare_fitness(fitnesses[idx], fitnesses[best_idx]).is_gt() {
            best_idx = idx;
        }
    }
    best_idx
}

/// Fitness-proportionate (roulette wheel) selection.
///
/// Fitness may be negative, so weights are shifted by the population
/// minimum: `weight_i = fitness_i - min_fitness + epsilon`.
///
/// **Warning**: Susceptible to super-individual dominance when
/// fitness variance is high.
///
/// # Complexity
/// O(n) per selection (linear scan)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouletteSelection;

impl<C> Selection<C> for RouletteSelection {
    fn select(
        &self,
        population: &Population<C>,
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Vec<usize> {
        let fitnesses = population.fitnesses();
        let n = fitnesses.len();
        if n == 1 {
            return vec![0; count];
        }

        let min_fitness = fitnesses
            .iter()
            .copied()
            .filter(|f| f.is_finite())
            .fold(f64::INFINITY, f64::min);

        let epsilon = 1e-10;

        let weights: Vec<f64> = fitnesses
            .iter()
            .map(|&f| {
                let w = f - min_fitness + epsilon;
                if w.is_finite() && w > 0.0 {
                    w
                } else {
                    epsilon
                }
            })
            .collect();
        let total: f64 = weights.iter().sum();

        (0..count)
            .map(|_| spin_wheel(&weights, total, rng))
            .collect()
    }
}

fn spin_wheel(weights: &[f64], total: f64, rng: &mut dyn RngCore) -> usize {
    let n = weights.len();
    if total <= 0.0 || !total.is_finite() {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    n - 1 // floating-point fallback
}

/// Rank-based selection.
///
/// Individuals are sorted by fitness and selection probability is
/// proportional to rank position, not raw fitness value. This avoids
/// the scaling problems of roulette wheel selection.
///
/// Reference: Baker (1985), "Adaptive Selection Methods for Genetic
/// Algorithms"
///
/// # Complexity
/// O(n log n) per call (sort), O(n) per selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankSelection;

impl<C> Selection<C> for RankSelection {
    fn select(
        &self,
        population: &Population<C>,
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Vec<usize> {
        let ranked = population.ranked_indices();
        let n = ranked.len();
        if n == 1 {
            return vec![ranked[0]; count];
        }

        // rank 0 (best) gets weight n
        let weights: Vec<f64> = (0..n).map(|rank| (n - rank) as f64).collect();
        let total: f64 = (n * (n + 1)) as f64 / 2.0;

        (0..count)
            .map(|_| ranked[spin_wheel(&weights, total, rng)])
            .collect()
    }
}
