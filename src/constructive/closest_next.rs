//! Greedy closest-next initial assignment.
//!
//! Each brigade in turn extends its route with the still-available location
//! that is quickest to reach from its current last stop (the depot for an
//! empty route). Travel times are read in the `previous → candidate`
//! direction; ties go to the lowest location ID.
//!
//! # Complexity
//!
//! O(n²) where n = number of locations.

use std::collections::BTreeSet;

use rand::RngCore;

use crate::network::Network;

use super::InitialStateGenerator;

/// Greedy nearest-next generator.
///
/// # Examples
///
/// ```
/// use u_brigade::models::{Coords, Location};
/// use u_brigade::network::{Network, TravelMatrix};
/// use u_brigade::constructive::{initial_solution, ClosestNext};
/// use u_brigade::random::create_rng;
///
/// // depot 0, locations on a line: 1 (near), 2 (middle), 3 (far)
/// let matrix = TravelMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0, 3.0],
///     vec![1.0, 0.0, 1.0, 2.0],
///     vec![2.0, 1.0, 0.0, 1.0],
///     vec![3.0, 2.0, 1.0, 0.0],
/// ]).unwrap();
/// let locations = (1..=3).map(|id| Location::new(id, Coords::default(), 0.0)).collect();
/// let network = Network::new(Location::depot(0, Coords::default()), locations, matrix).unwrap();
///
/// let sol = initial_solution(&ClosestNext, &network, 1, &mut create_rng(0)).unwrap();
/// assert_eq!(sol.brigades()[0].route().location_ids(), &[1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosestNext;

impl InitialStateGenerator for ClosestNext {
    fn name(&self) -> &str {
        "closest"
    }

    fn next_location(
        &self,
        available: &BTreeSet<usize>,
        previous: usize,
        network: &Network,
        _rng: &mut dyn RngCore,
    ) -> Option<usize> {
        network.matrix().nearest(previous, available.iter().copied())
    }
}
