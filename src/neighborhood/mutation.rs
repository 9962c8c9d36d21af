//! Intra-route swap of two positions.

use rand::seq::{index, IndexedRandom};
use rand::RngCore;

use crate::models::Solution;

use super::NeighborhoodGenerator;

/// Picks one brigade with at least two stops and swaps two distinct
/// positions of its route.
///
/// Returns an unchanged copy when no route has two stops.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mutation;

impl NeighborhoodGenerator for Mutation {
    fn name(&self) -> &str {
        "mutation"
    }

    fn apply(&self, solution: &Solution, rng: &mut dyn RngCore) -> Solution {
        let eligible: Vec<usize> = solution
            .brigades()
            .iter()
            .enumerate()
            .filter(|(_, b)| b.route().len() >= 2)
            .map(|(idx, _)| idx)
            .collect();
        let Some(&target) = eligible.choose(rng) else {
            return solution.clone();
        };

        let mut brigades = solution.brigades().to_vec();
        let route = brigades[target].route_mut();
        let positions = index::sample(rng, route.len(), 2);
        route
            .location_ids_mut()
            .swap(positions.index(0), positions.index(1));
        Solution::new(brigades)
    }
}
