//! Core trait definitions for the GA engine.
//!
//! [`Chromosome`] and [`FitnessFunction`] define the contract between the
//! generic evolutionary loop and a concrete encoding such as
//! [`Building`](crate::Building).

use rand::Rng;

/// A fixed-length sequence of genes.
///
/// The length of a chromosome never changes once it is created: every
/// operator in this crate works position by position and replaces whole
/// genes rather than editing them in place.
///
/// # Implementing
///
/// ```ignore
/// #[derive(Clone)]
/// struct Bits(Vec<bool>);
///
/// impl Chromosome for Bits {
///     type Gene = bool;
///     fn genes(&self) -> &[bool] { &self.0 }
///     fn replace_gene(&mut self, index: usize, gene: bool) { self.0[index] = gene; }
///     fn generate_gene<R: Rng + ?Sized>(&self, _index: usize, rng: &mut R) -> bool {
///         rng.random_bool(0.5)
///     }
///     fn create_new_of_same_shape<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
///         Bits((0..self.0.len()).map(|_| rng.random_bool(0.5)).collect())
///     }
/// }
/// ```
pub trait Chromosome: Clone + Send + Sync {
    /// The gene type. Genes are value objects and are cloned, never shared.
    type Gene: Clone + Send + Sync;

    /// Returns the genes in order.
    fn genes(&self) -> &[Self::Gene];

    /// Replaces the gene at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    fn replace_gene(&mut self, index: usize, gene: Self::Gene);

    /// Produces a fresh random gene suitable for position `index`.
    fn generate_gene<R: Rng + ?Sized>(&self, index: usize, rng: &mut R) -> Self::Gene;

    /// Creates a new random chromosome with the same length as `self`.
    ///
    /// The result shares no genes with `self`.
    fn create_new_of_same_shape<R: Rng + ?Sized>(&self, rng: &mut R) -> Self;

    /// Exchanges the genes at positions `a` and `b`.
    fn swap_genes(&mut self, a: usize, b: usize) {
        let gene_a = self.genes()[a].clone();
        let gene_b = self.genes()[b].clone();
        self.replace_gene(a, gene_b);
        self.replace_gene(b, gene_a);
    }

    /// Number of genes.
    fn len(&self) -> usize {
        self.genes().len()
    }

    /// Returns `true` if the chromosome has no genes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Scores a chromosome. **Higher fitness is better.**
///
/// Evaluation must be a pure function of the chromosome: the engine may
/// evaluate a generation in parallel and in any order.
pub trait FitnessFunction<C>: Send + Sync {
    fn evaluate(&self, chromosome: &C) -> f64;
}

impl<C, F> FitnessFunction<C> for F
where
    F: Fn(&C) -> f64 + Send + Sync,
{
    fn evaluate(&self, chromosome: &C) -> f64 {
        self(chromosome)
    }
}

/// A chromosome together with its cached fitness.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual<C> {
    pub chromosome: C,
    pub fitness: f64,
}

impl<C> Individual<C> {
    pub fn new(chromosome: C, fitness: f64) -> Self {
        Self {
            chromosome,
            fitness,
        }
    }
}
