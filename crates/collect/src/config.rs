//! Configuration for collection planning.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use celldissect_core::{Error, Result};

/// Configuration parameters for the collection planner.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanConfig {
    /// Distance threshold for shape simplification, in pixels.
    /// Must be >= 0. Larger values drop more boundary points.
    pub epsilon: f64,

    /// Seed for blank position sampling. The same seed with the same
    /// inputs always reproduces the same blank placement.
    pub random_seed: u64,

    /// Wells per traversal quadrant. Specimens plus blanks are always
    /// padded to a multiple of this, so collection stops at a quadrant
    /// boundary.
    pub quadrant_size: usize,

    /// Tour start index for the first specimen group.
    pub start_index: usize,

    /// Maximum number of full 2-opt improvement passes.
    /// Set to 0 to use only the nearest-neighbor tour.
    pub max_2opt_passes: usize,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            epsilon: 60.0,
            random_seed: 25,
            quadrant_size: 77,
            start_index: 0,
            max_2opt_passes: 1000,
        }
    }
}

impl PlanConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the simplification threshold.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Sets the blank placement seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = seed;
        self
    }

    /// Sets the wells-per-quadrant count.
    pub fn with_quadrant_size(mut self, size: usize) -> Self {
        self.quadrant_size = size;
        self
    }

    /// Sets the tour start index for the first group.
    pub fn with_start_index(mut self, index: usize) -> Self {
        self.start_index = index;
        self
    }

    /// Sets the maximum number of 2-opt passes.
    pub fn with_max_2opt_passes(mut self, passes: usize) -> Self {
        self.max_2opt_passes = passes;
        self
    }

    /// Validates the configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(self.epsilon >= 0.0) || !self.epsilon.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "epsilon must be a finite value >= 0, got {}",
                self.epsilon
            )));
        }
        if self.quadrant_size == 0 {
            return Err(Error::InvalidConfig(
                "quadrant_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
