//! Run configuration for the building search.

use crate::error::ConfigError;
use crate::fitness::check_budget;
use crate::ga::GaConfig;

/// Everything needed to run one building search.
///
/// # Examples
///
/// ```
/// use storey_ga::BuildingConfig;
///
/// let config = BuildingConfig::default()
///     .with_floors(12)
///     .with_budgets(45.0, 250_000.0)
///     .with_seed(3);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.ga.population_size, 50);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingConfig {
    /// Number of floors (chromosome length).
    pub floors: usize,

    /// Height budget in meters.
    pub max_height: f64,

    /// Cost budget.
    pub max_cost: f64,

    /// Evolutionary loop parameters.
    pub ga: GaConfig,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self {
            floors: 10,
            max_height: 60.0,
            max_cost: 100_000.0,
            ga: GaConfig::default(),
        }
    }
}

impl BuildingConfig {
    pub fn with_floors(mut self, floors: usize) -> Self {
        self.floors = floors;
        self
    }

    pub fn with_budgets(mut self, max_height: f64, max_cost: f64) -> Self {
        self.max_height = max_height;
        self.max_cost = max_cost;
        self
    }

    pub fn with_population_size(mut self, n: usize) -> Self {
        self.ga = self.ga.with_population_size(n);
        self
    }

    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.ga = self.ga.with_stagnation_limit(limit);
        self
    }

    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.ga = self.ga.with_max_generations(n);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.ga = self.ga.with_seed(seed);
        self
    }

    pub fn with_ga(mut self, ga: GaConfig) -> Self {
        self.ga = ga;
        self
    }

    /// Validates the building parameters and the GA parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.floors == 0 {
            return Err(ConfigError::NoFloors);
        }
        check_budget("max_height", self.max_height)?;
        check_budget("max_cost", self.max_cost)?;
        self.ga.validate()
    }
}
