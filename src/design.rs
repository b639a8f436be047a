//! Running a building search and reading out the winning design.

use crate::building::Building;
use crate::config::BuildingConfig;
use crate::error::ConfigError;
use crate::fitness::BuildingFitness;
use crate::floor::Floor;
use crate::ga::{GaResult, GaRunner, Individual, StopReason};
use tracing::warn;

/// The best building of a run, with its aggregates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingDesign {
    pub floors: Vec<Floor>,
    pub total_height: f64,
    pub total_cost: f64,
    pub fitness: f64,
    /// Whether the design stays within both budgets.
    pub feasible: bool,
}

impl BuildingDesign {
    pub fn new(best: &Individual<Building>, fitness: &BuildingFitness) -> Self {
        let building = &best.chromosome;
        Self {
            floors: building.floors().to_vec(),
            total_height: building.total_height(),
            total_cost: building.total_cost(),
            fitness: best.fitness,
            feasible: fitness.is_feasible(building),
        }
    }
}

/// Summary of a finished building search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingOutcome {
    pub design: BuildingDesign,
    pub generations: usize,
    pub stop_reason: StopReason,
    pub fitness_history: Vec<f64>,
}

/// Runs the building search with the default operators: elite selection,
/// uniform crossover, swap mutation and fitness-stagnation termination.
///
/// A run in which nothing feasible was found is not an error; the outcome's
/// design then has `feasible == false` and a fitness of 0.
///
/// # Examples
///
/// ```
/// use storey_ga::{run, BuildingConfig};
///
/// let config = BuildingConfig::default()
///     .with_population_size(20)
///     .with_stagnation_limit(10)
///     .with_seed(42);
/// let outcome = run(&config).unwrap();
/// assert_eq!(outcome.design.floors.len(), 10);
/// ```
pub fn run(config: &BuildingConfig) -> Result<BuildingOutcome, ConfigError> {
    let (result, fitness) = evolve(config, |runner| runner)?;
    Ok(outcome(&result, &fitness))
}

/// Runs the building search after letting `customize` swap operators on
/// the runner.
///
/// ```
/// use storey_ga::ga::{RandomResetMutation, TournamentSelection};
/// use storey_ga::{evolve, BuildingConfig};
///
/// let config = BuildingConfig::default().with_max_generations(5).with_seed(1);
/// let (result, _) = evolve(&config, |runner| {
///     runner
///         .with_selection(TournamentSelection(3))
///         .with_mutation(RandomResetMutation)
/// })
/// .unwrap();
/// assert_eq!(result.generations, 5);
/// ```
pub fn evolve<F>(
    config: &BuildingConfig,
    customize: F,
) -> Result<(GaResult<Building>, BuildingFitness), ConfigError>
where
    F: FnOnce(GaRunner<Building>) -> GaRunner<Building>,
{
    config.validate()?;
    let fitness = BuildingFitness::new(config.max_height, config.max_cost)?;
    let runner = customize(GaRunner::new(fitness, config.ga.clone()));

    // Only the length of the prototype matters; its floors are never used.
    let prototype = Building::from_floors(vec![Floor::rectangle(1.0, 1.0, 1.0); config.floors]);
    let result = runner.run(&prototype)?;
    Ok((result, fitness))
}

/// Extracts the best design of a finished run.
pub fn outcome(result: &GaResult<Building>, fitness: &BuildingFitness) -> BuildingOutcome {
    let design = BuildingDesign::new(&result.best, fitness);
    if !design.feasible {
        warn!(
            total_height = design.total_height,
            total_cost = design.total_cost,
            "no design within budget was found"
        );
    }
    BuildingOutcome {
        design,
        generations: result.generations,
        stop_reason: result.stop_reason,
        fitness_history: result.fitness_history.clone(),
    }
}
