//! Tail-swap crossover between two brigades.
//!
//! # Algorithm
//!
//! Pick two distinct brigades `a` and `b` and a point
//! `p ∈ [0, min(|a|, |b|) / 2]`, then exchange the tails:
//!
//! ```text
//! a' = a[..p] ++ b[p..]
//! b' = b[..p] ++ a[p..]
//! ```
//!
//! Because both heads have length `p`, the two children together hold
//! exactly the locations of the two parents, so the partition is preserved
//! whatever the route lengths. The children replace their parents at the
//! same brigade indices.

use rand::seq::index;
use rand::{Rng, RngCore};

use crate::models::{Brigade, Solution};

use super::NeighborhoodGenerator;

/// Crossover operator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Crossover;

impl NeighborhoodGenerator for Crossover {
    fn name(&self) -> &str {
        "crossover"
    }

    fn apply(&self, solution: &Solution, rng: &mut dyn RngCore) -> Solution {
        let n = solution.num_brigades();
        if n < 2 {
            return solution.clone();
        }
        let picked = index::sample(rng, n, 2);
        let (i, j) = (picked.index(0), picked.index(1));
        let brigades = solution.brigades();
        let max_point = brigades[i]
            .route()
            .len()
            .min(brigades[j].route().len())
            / 2;
        let point = rng.random_range(0..=max_point);
        crossover_at(solution, i, j, point)
    }
}

/// Swaps the tails of brigades `i` and `j` after position `point`.
///
/// # Panics
///
/// Panics if `i` or `j` is out of range or `point` exceeds either route.
///
/// # Examples
///
/// ```
/// use u_brigade::models::Solution;
/// use u_brigade::neighborhood::crossover_at;
///
/// let sol = Solution::from_routes(vec![vec![1, 2, 3], vec![4, 5]]);
/// let child = crossover_at(&sol, 0, 1, 1);
/// assert_eq!(child, Solution::from_routes(vec![vec![1, 5], vec![4, 2, 3]]));
/// ```
pub fn crossover_at(solution: &Solution, i: usize, j: usize, point: usize) -> Solution {
    let a = solution.brigades()[i].route().location_ids();
    let b = solution.brigades()[j].route().location_ids();
    let child_a = [&a[..point], &b[point..]].concat();
    let child_b = [&b[..point], &a[point..]].concat();

    let mut brigades = solution.brigades().to_vec();
    brigades[i] = Brigade::from(child_a);
    brigades[j] = Brigade::from(child_b);
    Solution::new(brigades)
}
