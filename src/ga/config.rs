//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::ConfigError;

/// Configuration for the Genetic Algorithm.
///
/// Controls population size, elitism, operator rates, the default
/// termination conditions, and parallelism.
///
/// # Defaults
///
/// ```
/// use storey_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.stagnation_limit, 100);
/// assert_eq!(config.max_generations, None);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use storey_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_elite_count(4)
///     .with_mutation_rate(0.2)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in every generation.
    pub population_size: usize,

    /// Number of best individuals copied unchanged into the next generation.
    ///
    /// Must be at least 1 so the best individual is never lost.
    pub elite_count: usize,

    /// Probability of applying crossover to a pair of parents (0.0–1.0).
    ///
    /// When crossover is not applied, both parents are copied.
    pub crossover_rate: f64,

    /// Probability of applying mutation to an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Generations without a strict improvement of the best fitness
    /// before the run stops.
    pub stagnation_limit: usize,

    /// Optional hard cap on the number of generations.
    pub max_generations: Option<usize>,

    /// Whether to evaluate offspring in parallel using rayon.
    ///
    /// Ignored when the `parallel` feature is disabled.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            elite_count: 1,
            crossover_rate: 0.75,
            mutation_rate: 0.1,
            stagnation_limit: 100,
            max_generations: None,
            parallel: true,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of elites.
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the stagnation window.
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Sets a hard cap on the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = Some(n);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.elite_count == 0 || self.elite_count >= self.population_size {
            return Err(ConfigError::InvalidEliteCount {
                elite_count: self.elite_count,
                population_size: self.population_size,
            });
        }
        // Struct literals bypass the clamping setters.
        for (name, value) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidRate { name, value });
            }
        }
        if self.stagnation_limit == 0 {
            return Err(ConfigError::ZeroStagnationLimit);
        }
        if self.max_generations == Some(0) {
            return Err(ConfigError::ZeroGenerationCap);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 50);
        assert_eq!(config.elite_count, 1);
        assert!((config.crossover_rate - 0.75).abs() < 1e-10);
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert_eq!(config.stagnation_limit, 100);
        assert!(config.max_generations.is_none());
        assert!(config.parallel);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(80)
            .with_elite_count(3)
            .with_crossover_rate(0.6)
            .with_mutation_rate(0.05)
            .with_stagnation_limit(20)
            .with_max_generations(500)
            .with_parallel(false)
            .with_seed(42);

        assert_eq!(config.population_size, 80);
        assert_eq!(config.elite_count, 3);
        assert!((config.crossover_rate - 0.6).abs() < 1e-10);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert_eq!(config.stagnation_limit, 20);
        assert_eq!(config.max_generations, Some(500));
        assert!(!config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_clamp_rates() {
        let config = GaConfig::default()
            .with_crossover_rate(-0.5)
            .with_mutation_rate(2.0);

        assert!((config.crossover_rate - 0.0).abs() < 1e-10);
        assert!((config.mutation_rate - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = GaConfig::default().with_population_size(1);
        assert_eq!(config.validate(), Err(ConfigError::PopulationTooSmall(1)));
    }

    #[test]
    fn test_validate_elite_bounds() {
        let none = GaConfig::default().with_elite_count(0);
        assert!(matches!(
            none.validate(),
            Err(ConfigError::InvalidEliteCount { elite_count: 0, .. })
        ));

        let all = GaConfig::default()
            .with_population_size(10)
            .with_elite_count(10);
        assert!(all.validate().is_err());
    }

    #[test]
    fn test_validate_unclamped_rate() {
        let config = GaConfig {
            mutation_rate: 1.5,
            ..GaConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRate {
                name: "mutation_rate",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_zero_stagnation() {
        let config = GaConfig::default().with_stagnation_limit(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroStagnationLimit));
    }

    #[test]
    fn test_validate_zero_generation_cap() {
        let config = GaConfig::default().with_max_generations(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroGenerationCap));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let err = GaConfig::default()
            .with_population_size(1)
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "population_size must be at least 2, got 1");
    }
}
