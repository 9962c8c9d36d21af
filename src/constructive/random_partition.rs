//! Uniformly random initial assignment.

use std::collections::BTreeSet;

use rand::{Rng, RngCore};

use crate::network::Network;

use super::InitialStateGenerator;

/// Deals locations to brigades in uniformly random order.
///
/// Each pick is drawn uniformly from the still-available locations, so no
/// location is drawn twice.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPartition;

impl InitialStateGenerator for RandomPartition {
    fn name(&self) -> &str {
        "random"
    }

    fn next_location(
        &self,
        available: &BTreeSet<usize>,
        _previous: usize,
        _network: &Network,
        rng: &mut dyn RngCore,
    ) -> Option<usize> {
        if available.is_empty() {
            return None;
        }
        let pick = rng.random_range(0..available.len());
        available.iter().nth(pick).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::initial_solution;
    use crate::error::ConfigError;
    use crate::models::{Coords, Location};
    use crate::network::TravelMatrix;
    use crate::random::create_rng;

    fn ten_location_network() -> Network {
        let mut m = TravelMatrix::new(10);
        for i in 0..10 {
            for j in 0..10 {
                if i != j {
                    m.set(i, j, 1.0);
                }
            }
        }
        let locations = (1..10)
            .map(|id| Location::new(id, Coords::default(), 0.0))
            .collect();
        Network::new(Location::depot(0, Coords::default()), locations, m).expect("valid")
    }

    #[test]
    fn test_random_two_carriers() {
        let net = ten_location_network();
        let mut rng = create_rng(42);
        let sol = initial_solution(&RandomPartition, &net, 2, &mut rng).expect("valid");
        assert_eq!(sol.num_brigades(), 2);
        assert!(sol.is_partition_of(&net.location_ids()));
        // round robin: 9 locations over 2 brigades
        assert_eq!(sol.brigades()[0].route().len(), 5);
        assert_eq!(sol.brigades()[1].route().len(), 4);
    }

    #[test]
    fn test_random_partition_many_seeds() {
        let net = ten_location_network();
        for seed in 0..50 {
            let mut rng = create_rng(seed);
            let carriers = (seed as usize % 9) + 1;
            let sol = initial_solution(&RandomPartition, &net, carriers, &mut rng).expect("valid");
            assert_eq!(sol.num_brigades(), carriers);
            assert!(sol.is_partition_of(&net.location_ids()));
        }
    }

    #[test]
    fn test_random_is_reproducible() {
        let net = ten_location_network();
        let a = initial_solution(&RandomPartition, &net, 3, &mut create_rng(9)).expect("valid");
        let b = initial_solution(&RandomPartition, &net, 3, &mut create_rng(9)).expect("valid");
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_carrier_counts() {
        let net = ten_location_network();
        let mut rng = create_rng(1);
        assert_eq!(
            initial_solution(&RandomPartition, &net, 0, &mut rng).unwrap_err(),
            ConfigError::InvalidCarrierCount {
                carriers: 0,
                locations: 9
            }
        );
        assert!(initial_solution(&RandomPartition, &net, 10, &mut rng).is_err());
        assert!(initial_solution(&RandomPartition, &net, 9, &mut rng).is_ok());
    }

    #[test]
    fn test_next_location_empty() {
        let net = ten_location_network();
        let mut rng = create_rng(1);
        assert_eq!(
            RandomPartition.next_location(&BTreeSet::new(), 0, &net, &mut rng),
            None
        );
    }
}
