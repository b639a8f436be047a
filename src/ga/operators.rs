//! Crossover and mutation operators for fixed-length chromosomes.
//!
//! Every operator works position by position on a [`Chromosome`], so the
//! length of a chromosome is preserved by construction.
//!
//! # Crossover Operators
//!
//! - [`UniformCrossover`]: each position drawn from either parent
//!
//! # Mutation Operators
//!
//! - [`SwapMutation`]: exchange two distinct positions — O(1)
//! - [`InsertMutation`]: remove and reinsert at a random position — O(n)
//! - [`InversionMutation`]: reverse a random segment — O(n)
//! - [`RandomResetMutation`]: regenerate one gene — O(1)
//!
//! Only [`RandomResetMutation`] introduces genes that were not already in
//! the chromosome; the others reorder existing genes.
//!
//! # References
//!
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use super::types::Chromosome;
use rand::seq::index;
use rand::{Rng, RngCore};

/// Recombines two parents into offspring.
pub trait Crossover<C>: Send + Sync {
    /// Produces one or two children from `parent1` and `parent2`.
    ///
    /// # Panics
    /// Implementations may panic if the parents have different lengths.
    fn cross(&self, parent1: &C, parent2: &C, rng: &mut dyn RngCore) -> Vec<C>;
}

/// Perturbs a single chromosome in place.
pub trait Mutation<C>: Send + Sync {
    fn mutate(&self, chromosome: &mut C, rng: &mut dyn RngCore);
}

// ============================================================================
// Crossover operators
// ============================================================================

/// Uniform crossover.
///
/// For every position, a coin with bias `mix_probability` decides whether
/// the first child takes its gene from `parent1` or `parent2`; the second
/// child takes the gene from the other parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformCrossover {
    pub mix_probability: f64,
}

impl Default for UniformCrossover {
    fn default() -> Self {
        Self {
            mix_probability: 0.5,
        }
    }
}

impl<C: Chromosome> Crossover<C> for UniformCrossover {
    fn cross(&self, parent1: &C, parent2: &C, rng: &mut dyn RngCore) -> Vec<C> {
        let (child1, child2) = uniform_crossover(parent1, parent2, self.mix_probability, rng);
        vec![child1, child2]
    }
}

/// Uniform crossover on two equal-length chromosomes.
///
/// Both children start as fresh containers from
/// [`Chromosome::create_new_of_same_shape`] and have every position
/// overwritten with a clone of a parent gene.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths.
pub fn uniform_crossover<C: Chromosome, R: Rng + ?Sized>(
    parent1: &C,
    parent2: &C,
    mix_probability: f64,
    rng: &mut R,
) -> (C, C) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    let mix_probability = mix_probability.clamp(0.0, 1.0);
    let mut child1 = parent1.create_new_of_same_shape(rng);
    let mut child2 = parent2.create_new_of_same_shape(rng);

    for i in 0..n {
        let (a, b) = if rng.random_bool(mix_probability) {
            (parent2, parent1)
        } else {
            (parent1, parent2)
        };
        child1.replace_gene(i, a.genes()[i].clone());
        child2.replace_gene(i, b.genes()[i].clone());
    }

    (child1, child2)
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Swap mutation: exchange two distinct random positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwapMutation;

impl<C: Chromosome> Mutation<C> for SwapMutation {
    fn mutate(&self, chromosome: &mut C, rng: &mut dyn RngCore) {
        swap_mutation(chromosome, rng);
    }
}

/// Swaps the genes at two distinct random positions.
///
/// Chromosomes with fewer than two genes are left unchanged.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<C: Chromosome, R: Rng + ?Sized>(chromosome: &mut C, rng: &mut R) {
    let n = chromosome.len();
    if n < 2 {
        return;
    }
    let picked = index::sample(rng, n, 2);
    chromosome.swap_genes(picked.index(0), picked.index(1));
}

/// Insert mutation: remove a gene and reinsert it at another position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertMutation;

impl<C: Chromosome> Mutation<C> for InsertMutation {
    fn mutate(&self, chromosome: &mut C, rng: &mut dyn RngCore) {
        let n = chromosome.len();
        if n < 2 {
            return;
        }
        let mut genes = chromosome.genes().to_vec();
        let from = rng.random_range(0..n);
        let gene = genes.remove(from);
        let to = rng.random_range(0..n);
        genes.insert(to, gene);
        write_back(chromosome, genes);
    }
}

/// Inversion mutation: reverse a random segment (2-opt move).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InversionMutation;

impl<C: Chromosome> Mutation<C> for InversionMutation {
    fn mutate(&self, chromosome: &mut C, rng: &mut dyn RngCore) {
        let n = chromosome.len();
        if n < 2 {
            return;
        }
        let (start, end) = random_segment(n, rng);
        let mut genes = chromosome.genes().to_vec();
        genes[start..=end].reverse();
        write_back(chromosome, genes);
    }
}

/// Random reset mutation: replace one gene with a freshly generated one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomResetMutation;

impl<C: Chromosome> Mutation<C> for RandomResetMutation {
    fn mutate(&self, chromosome: &mut C, rng: &mut dyn RngCore) {
        let n = chromosome.len();
        if n == 0 {
            return;
        }
        let i = rng.random_range(0..n);
        let gene = chromosome.generate_gene(i, rng);
        chromosome.replace_gene(i, gene);
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn write_back<C: Chromosome>(chromosome: &mut C, genes: Vec<C::Gene>) {
    for (i, gene) in genes.into_iter().enumerate() {
        chromosome.replace_gene(i, gene);
    }
}

/// Pick a random segment `[start, end]` within `0..n` where `start <= end`.
fn random_segment<R: Rng + ?Sized>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================
