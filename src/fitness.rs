//! Building fitness under height and cost budgets.

use crate::building::Building;
use crate::error::ConfigError;
use crate::ga::FitnessFunction;

/// Scores a building against a height budget and a cost budget.
///
/// A building that exceeds either budget (strictly) is infeasible and
/// scores `0.0`. A feasible building scores
/// `total_height / max_height - total_cost / max_cost`, which rewards tall
/// and cheap designs and lies in `(-1, 1]`.
///
/// Note that `0.0` is also the score of a feasible building whose height
/// and cost ratios cancel out, so a zero score alone does not prove
/// infeasibility; see [`BuildingFitness::is_feasible`].
///
/// # Examples
///
/// ```
/// use storey_ga::{evaluate, Building, Floor};
///
/// let building = Building::from_floors(vec![Floor::rectangle(1.0, 0.5, 10.0)]);
/// let score = evaluate(&building, 60.0, 100_000.0);
/// assert!((score - (10.0 / 60.0 - 500.0 / 100_000.0)).abs() < 1e-12);
/// ```
pub fn evaluate(building: &Building, max_height: f64, max_cost: f64) -> f64 {
    let total_height = building.total_height();
    let total_cost = building.total_cost();

    if total_height > max_height || total_cost > max_cost {
        return 0.0;
    }

    total_height / max_height - total_cost / max_cost
}

/// [`evaluate`] with fixed budgets, for use as a GA fitness function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildingFitness {
    max_height: f64,
    max_cost: f64,
}

impl BuildingFitness {
    /// Creates a fitness function; both budgets must be positive and finite.
    pub fn new(max_height: f64, max_cost: f64) -> Result<Self, ConfigError> {
        check_budget("max_height", max_height)?;
        check_budget("max_cost", max_cost)?;
        Ok(Self {
            max_height,
            max_cost,
        })
    }

    pub fn max_height(&self) -> f64 {
        self.max_height
    }

    pub fn max_cost(&self) -> f64 {
        self.max_cost
    }

    /// Whether `building` stays within both budgets (boundary included).
    pub fn is_feasible(&self, building: &Building) -> bool {
        building.total_height() <= self.max_height && building.total_cost() <= self.max_cost
    }
}

impl FitnessFunction<Building> for BuildingFitness {
    fn evaluate(&self, building: &Building) -> f64 {
        evaluate(building, self.max_height, self.max_cost)
    }
}

pub(crate) fn check_budget(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidBudget { name, value })
    }
}
