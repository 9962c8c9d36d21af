//! Full random permutation of one route.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::models::Solution;

use super::NeighborhoodGenerator;

/// Picks one brigade uniformly and shuffles its route.
#[derive(Debug, Clone, Copy, Default)]
pub struct Shuffle;

impl NeighborhoodGenerator for Shuffle {
    fn name(&self) -> &str {
        "shuffle"
    }

    fn apply(&self, solution: &Solution, rng: &mut dyn RngCore) -> Solution {
        let n = solution.num_brigades();
        if n == 0 {
            return solution.clone();
        }
        let target = rng.random_range(0..n);
        let mut brigades = solution.brigades().to_vec();
        brigades[target].route_mut().location_ids_mut().shuffle(rng);
        Solution::new(brigades)
    }
}
