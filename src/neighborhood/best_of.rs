//! Best of several chained operator applications.

use rand::RngCore;

use crate::error::ConfigError;
use crate::evaluation::FitnessFn;
use crate::models::Solution;

use super::NeighborhoodGenerator;

/// Applies an inner operator `samples` times, each time starting from the
/// best solution found so far, and returns that best solution.
///
/// Returns a copy of the input when no application improves on it.
pub struct BestOfN {
    inner: Box<dyn NeighborhoodGenerator>,
    fitness: FitnessFn,
    samples: usize,
}

impl BestOfN {
    pub fn new(
        inner: Box<dyn NeighborhoodGenerator>,
        fitness: FitnessFn,
        samples: usize,
    ) -> Result<Self, ConfigError> {
        if samples == 0 {
            return Err(ConfigError::InvalidSampleCount);
        }
        Ok(Self {
            inner,
            fitness,
            samples,
        })
    }
}

impl NeighborhoodGenerator for BestOfN {
    fn name(&self) -> &str {
        "best of n"
    }

    fn apply(&self, solution: &Solution, rng: &mut dyn RngCore) -> Solution {
        let mut best: Option<Solution> = None;
        let mut best_value = (self.fitness)(solution);

        for _ in 0..self.samples {
            let candidate = self.inner.apply(best.as_ref().unwrap_or(solution), rng);
            let value = (self.fitness)(&candidate);
            if value > best_value {
                best_value = value;
                best = Some(candidate);
            }
        }

        best.unwrap_or_else(|| solution.clone())
    }
}
