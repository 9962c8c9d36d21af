//! Round-robin construction shared by every initial-state generator.

use std::collections::BTreeSet;

use rand::RngCore;
use tracing::debug;

use crate::error::ConfigError;
use crate::models::{Brigade, Route, Solution};
use crate::network::Network;

/// Chooses the next location to append to a brigade's route while building
/// an initial solution.
pub trait InitialStateGenerator: Send + Sync {
    /// Generator name, for logging.
    fn name(&self) -> &str;

    /// Picks one member of `available` to visit after `previous` (the
    /// brigade's last stop, or the depot for an empty route).
    ///
    /// Returns `None` only when `available` is empty.
    fn next_location(
        &self,
        available: &BTreeSet<usize>,
        previous: usize,
        network: &Network,
        rng: &mut dyn RngCore,
    ) -> Option<usize>;
}

/// Builds an initial solution by dealing locations to `num_carriers`
/// brigades in round-robin order, asking `generator` for each pick.
///
/// Every location of the network ends up in exactly one route. When the
/// locations run out mid-round the remaining brigades keep shorter routes.
///
/// # Errors
///
/// [`ConfigError::InvalidCarrierCount`] if `num_carriers` is zero or exceeds
/// the number of locations. [`ConfigError::GeneratorStalled`] or
/// [`ConfigError::UnavailableLocation`] if `generator` returns nothing, or
/// a location already dealt, while locations remain.
///
/// # Examples
///
/// ```
/// use u_brigade::models::{Coords, Location};
/// use u_brigade::network::{Network, TravelMatrix};
/// use u_brigade::constructive::{initial_solution, RandomPartition};
/// use u_brigade::random::create_rng;
///
/// let locations = (1..=5).map(|id| Location::new(id, Coords::default(), 0.0)).collect();
/// let network = Network::new(Location::depot(0, Coords::default()), locations, TravelMatrix::new(6)).unwrap();
///
/// let mut rng = create_rng(7);
/// let sol = initial_solution(&RandomPartition, &network, 2, &mut rng).unwrap();
/// assert_eq!(sol.num_brigades(), 2);
/// assert!(sol.is_partition_of(&[1, 2, 3, 4, 5]));
/// ```
pub fn initial_solution<G: InitialStateGenerator + ?Sized>(
    generator: &G,
    network: &Network,
    num_carriers: usize,
    rng: &mut dyn RngCore,
) -> Result<Solution, ConfigError> {
    let num_locations = network.num_locations();
    if num_carriers == 0 || num_carriers > num_locations {
        return Err(ConfigError::InvalidCarrierCount {
            carriers: num_carriers,
            locations: num_locations,
        });
    }

    let depot = network.depot().id();
    let mut available: BTreeSet<usize> = network.location_ids().into_iter().collect();
    let mut routes = vec![Route::new(); num_carriers];

    'deal: while !available.is_empty() {
        for route in routes.iter_mut() {
            let previous = route.last().unwrap_or(depot);
            let Some(next) = generator.next_location(&available, previous, network, rng) else {
                return Err(ConfigError::GeneratorStalled {
                    generator: generator.name().to_string(),
                    remaining: available.len(),
                });
            };
            if !available.remove(&next) {
                return Err(ConfigError::UnavailableLocation {
                    generator: generator.name().to_string(),
                    id: next,
                });
            }
            route.push(next);
            if available.is_empty() {
                break 'deal;
            }
        }
    }

    debug!(
        generator = generator.name(),
        carriers = num_carriers,
        locations = num_locations,
        "built initial solution"
    );
    Ok(Solution::new(routes.into_iter().map(Brigade::new).collect()))
}
