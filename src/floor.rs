//! Floors: the genes of a building.
//!
//! A [`Floor`] is an axis-aligned box with a rectangular footprint anchored
//! at the origin. Floors are value objects; mutation replaces whole floors.

use rand::Rng;
use std::ops::Range;

/// Range of footprint width and depth, in meters.
pub const FOOTPRINT_RANGE: Range<f64> = 5.0..15.0;

/// Range of floor height, in meters.
pub const HEIGHT_RANGE: Range<f64> = 2.0..6.0;

/// Construction cost per cubic meter of floor volume.
pub const COST_PER_CUBIC_METER: f64 = 100.0;

/// A point of a floor's footprint.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One floor of a building.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor {
    height: f64,
    base_vertices: [Vertex; 4],
    cost: f64,
}

impl Floor {
    /// Builds a `width × depth` footprint with one corner at the origin.
    ///
    /// Vertices run counter-clockwise: `(0,0)`, `(w,0)`, `(w,d)`, `(0,d)`.
    /// The cost is `width · depth · height · 100`.
    ///
    /// # Panics
    /// Panics if any dimension is not a positive finite number.
    ///
    /// # Examples
    ///
    /// ```
    /// use storey_ga::Floor;
    ///
    /// let floor = Floor::rectangle(10.0, 8.0, 3.0);
    /// assert_eq!(floor.area(), 80.0);
    /// assert_eq!(floor.cost(), 24_000.0);
    /// ```
    pub fn rectangle(width: f64, depth: f64, height: f64) -> Self {
        for (name, value) in [("width", width), ("depth", depth), ("height", height)] {
            assert!(
                value.is_finite() && value > 0.0,
                "floor {name} must be positive and finite, got {value}"
            );
        }
        Self {
            height,
            base_vertices: [
                Vertex::new(0.0, 0.0),
                Vertex::new(width, 0.0),
                Vertex::new(width, depth),
                Vertex::new(0.0, depth),
            ],
            cost: width * depth * height * COST_PER_CUBIC_METER,
        }
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn base_vertices(&self) -> &[Vertex; 4] {
        &self.base_vertices
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn width(&self) -> f64 {
        self.base_vertices[1].x - self.base_vertices[0].x
    }

    pub fn depth(&self) -> f64 {
        self.base_vertices[2].y - self.base_vertices[1].y
    }

    /// Footprint area in square meters.
    pub fn area(&self) -> f64 {
        self.width() * self.depth()
    }
}

/// Draws a random floor: width and depth uniform in [`FOOTPRINT_RANGE`],
/// height uniform in [`HEIGHT_RANGE`].
pub fn generate_random_floor<R: Rng + ?Sized>(rng: &mut R) -> Floor {
    let width = rng.random_range(FOOTPRINT_RANGE);
    let depth = rng.random_range(FOOTPRINT_RANGE);
    let height = rng.random_range(HEIGHT_RANGE);
    Floor::rectangle(width, depth, height)
}
