//! Evolutionary search for multi-floor building layouts.
//!
//! A candidate building is a fixed-length stack of randomly generated
//! floors. A genetic algorithm evolves a population of candidates toward
//! designs that are as tall as possible while staying within a height
//! budget and a cost budget.
//!
//! - [`Floor`] / [`generate_random_floor`]: rectangular floors, the genes
//! - [`Building`]: the candidate encoding
//! - [`evaluate`] / [`BuildingFitness`]: the fitness function
//! - [`ga`]: the generic evolution engine and its operator strategies
//! - [`run`] / [`BuildingOutcome`]: one-call search and result extraction
//!
//! # Architecture
//!
//! The [`ga`] module knows nothing about buildings; it drives any
//! [`ga::Chromosome`] scored by a [`ga::FitnessFunction`]. Printing and
//! saving results is left to callers (see the `storey-ga` binary behind the
//! `cli` feature).

mod building;
mod config;
mod design;
mod error;
mod fitness;
mod floor;
pub mod ga;

pub use building::Building;
pub use config::BuildingConfig;
pub use design::{evolve, outcome, run, BuildingDesign, BuildingOutcome};
pub use error::ConfigError;
pub use fitness::{evaluate, BuildingFitness};
pub use floor::{
    generate_random_floor, Floor, Vertex, COST_PER_CUBIC_METER, FOOTPRINT_RANGE, HEIGHT_RANGE,
};
