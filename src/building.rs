//! Candidate buildings.

use crate::floor::{generate_random_floor, Floor};
use crate::ga::Chromosome;
use rand::Rng;

/// A building: an ordered stack of floors, ground floor first.
///
/// The number of floors is fixed when the building is created. Every
/// building owns its floors; copying a building copies them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Building {
    floors: Vec<Floor>,
}

impl Building {
    /// Creates a building of `floors` independently generated random floors.
    pub fn new_random<R: Rng + ?Sized>(floors: usize, rng: &mut R) -> Self {
        Self {
            floors: (0..floors).map(|_| generate_random_floor(rng)).collect(),
        }
    }

    pub fn from_floors(floors: Vec<Floor>) -> Self {
        Self { floors }
    }

    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    /// Sum of floor heights, in meters.
    pub fn total_height(&self) -> f64 {
        self.floors.iter().map(Floor::height).sum()
    }

    /// Sum of floor costs.
    pub fn total_cost(&self) -> f64 {
        self.floors.iter().map(Floor::cost).sum()
    }
}

impl Chromosome for Building {
    type Gene = Floor;

    fn genes(&self) -> &[Floor] {
        &self.floors
    }

    fn replace_gene(&mut self, index: usize, gene: Floor) {
        assert!(
            index < self.floors.len(),
            "gene index {index} out of range for a building of {} floors",
            self.floors.len()
        );
        self.floors[index] = gene;
    }

    fn generate_gene<R: Rng + ?Sized>(&self, _index: usize, rng: &mut R) -> Floor {
        generate_random_floor(rng)
    }

    fn create_new_of_same_shape<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        Self::new_random(self.floors.len(), rng)
    }

    fn swap_genes(&mut self, a: usize, b: usize) {
        self.floors.swap(a, b);
    }
}
