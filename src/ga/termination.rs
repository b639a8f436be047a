//! Termination conditions.
//!
//! The runner keeps an [`EvolutionState`] and, at every generation
//! boundary, asks its [`Termination`] whether to stop. Conditions are
//! stateless: everything they need is in the state snapshot.

use std::fmt;

/// Progress of a run, updated at every generation boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvolutionState {
    /// Number of completed generations; 0 right after initialization.
    pub generation: usize,

    /// Best fitness seen since the run started.
    pub best_fitness: f64,

    /// Consecutive generations in which `best_fitness` did not strictly improve.
    pub stagnant_generations: usize,
}

impl EvolutionState {
    /// State right after the initial population has been scored.
    pub fn initial(best_fitness: f64) -> Self {
        Self {
            generation: 0,
            best_fitness,
            stagnant_generations: 0,
        }
    }

    /// Records the best fitness of a freshly completed generation.
    ///
    /// Returns `true` if it strictly improved on the best so far.
    pub fn record(&mut self, generation_best: f64) -> bool {
        self.generation += 1;
        if generation_best > self.best_fitness {
            self.best_fitness = generation_best;
            self.stagnant_generations = 0;
            true
        } else {
            self.stagnant_generations += 1;
            false
        }
    }
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// The best fitness did not improve for the configured window.
    Stagnation,
    /// The hard generation cap was reached.
    GenerationCap,
    /// The best fitness reached the target value.
    FitnessReached,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StopReason::Stagnation => "fitness stagnation",
            StopReason::GenerationCap => "generation cap",
            StopReason::FitnessReached => "fitness target reached",
        };
        f.write_str(s)
    }
}

/// Decides whether the run should stop.
pub trait Termination: Send + Sync {
    /// Returns `Some(reason)` to stop, `None` to continue.
    fn check(&self, state: &EvolutionState) -> Option<StopReason>;
}

/// Stops once the best fitness has not strictly improved for `K`
/// consecutive generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitnessStagnation(pub usize);

impl Default for FitnessStagnation {
    fn default() -> Self {
        FitnessStagnation(100)
    }
}

impl Termination for FitnessStagnation {
    fn check(&self, state: &EvolutionState) -> Option<StopReason> {
        (state.stagnant_generations >= self.0).then_some(StopReason::Stagnation)
    }
}

/// Stops after a fixed number of generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationCap(pub usize);

impl Termination for GenerationCap {
    fn check(&self, state: &EvolutionState) -> Option<StopReason> {
        (state.generation >= self.0).then_some(StopReason::GenerationCap)
    }
}

/// Stops once the best fitness reaches a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessThreshold(pub f64);

impl Termination for FitnessThreshold {
    fn check(&self, state: &EvolutionState) -> Option<StopReason> {
        (state.best_fitness >= self.0).then_some(StopReason::FitnessReached)
    }
}

/// Stops as soon as any inner condition does; the first one listed wins.
#[derive(Default)]
pub struct AnyOf(pub Vec<Box<dyn Termination>>);

impl AnyOf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn or(mut self, condition: impl Termination + 'static) -> Self {
        self.0.push(Box::new(condition));
        self
    }
}

impl Termination for AnyOf {
    fn check(&self, state: &EvolutionState) -> Option<StopReason> {
        self.0.iter().find_map(|t| t.check(state))
    }
}
