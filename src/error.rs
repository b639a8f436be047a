//! Configuration errors.
//!
//! Every run validates its configuration before the first individual is
//! created. Anything that gets past validation cannot fail: infeasible
//! buildings are scored 0 and selected against, never reported as errors.

use thiserror::Error;

/// A run configuration that cannot produce a well-defined evolution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    #[error("elite_count must be in 1..population_size ({population_size}), got {elite_count}")]
    InvalidEliteCount {
        elite_count: usize,
        population_size: usize,
    },

    #[error("stagnation_limit must be at least 1")]
    ZeroStagnationLimit,

    #[error("max_generations must be positive or None")]
    ZeroGenerationCap,

    #[error("{name} must be within [0, 1], got {value}")]
    InvalidRate { name: &'static str, value: f64 },

    #[error("a building needs at least one floor")]
    NoFloors,

    #[error("{name} must be a positive finite number, got {value}")]
    InvalidBudget { name: &'static str, value: f64 },
}
