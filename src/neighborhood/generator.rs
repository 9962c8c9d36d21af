//! The neighborhood operator interface.

use rand::RngCore;

use crate::models::Solution;

/// Produces a solution "close to" a given one.
///
/// Implementations never modify their input: they clone the routes they
/// touch and return a fresh [`Solution`] that still visits every location
/// exactly once.
pub trait NeighborhoodGenerator: Send + Sync {
    /// Operator name, for logging.
    fn name(&self) -> &str;

    /// Returns a neighbor of `solution`.
    fn apply(&self, solution: &Solution, rng: &mut dyn RngCore) -> Solution;
}

impl<G: NeighborhoodGenerator + ?Sized> NeighborhoodGenerator for Box<G> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn apply(&self, solution: &Solution, rng: &mut dyn RngCore) -> Solution {
        (**self).apply(solution, rng)
    }
}
