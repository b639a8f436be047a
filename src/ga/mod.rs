//! Genetic Algorithm engine.
//!
//! A generic GA built on trait-based abstractions. An encoding implements
//! [`Chromosome`] and is scored by a [`FitnessFunction`]; the operators are
//! strategy objects injected into [`GaRunner`].
//!
//! # Core Traits
//!
//! - [`Chromosome`]: A fixed-length sequence of genes
//! - [`FitnessFunction`]: Scores a chromosome (higher is better)
//! - [`Selection`], [`Crossover`], [`Mutation`], [`Termination`]: operator strategies
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, elitism, rates)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final optimization result with statistics
//! - [`Population`]: One scored generation; [`best`] extracts the winner
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod config;
pub mod operators;
mod population;
mod runner;
mod selection;
mod termination;
mod types;

pub use config::GaConfig;
pub use operators::{
    Crossover, InsertMutation, InversionMutation, Mutation, RandomResetMutation, SwapMutation,
    UniformCrossover,
};
pub use population::{best, Population};
pub use runner::{GaResult, GaRunner};
pub use selection::{
    EliteSelection, RankSelection, RouletteSelection, Selection, TournamentSelection,
};
pub use termination::{
    AnyOf, EvolutionState, FitnessStagnation, FitnessThreshold, GenerationCap, StopReason,
    Termination,
};
pub use types::{Chromosome, FitnessFunction, Individual};
