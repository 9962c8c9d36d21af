//! Fitness functions consumed by search strategies.

use std::sync::Arc;

use crate::models::Solution;
use crate::network::Network;

use super::evaluate;

/// Scores a solution; higher is better.
pub type FitnessFn = Arc<dyn Fn(&Solution) -> f64 + Send + Sync>;

/// Fitness that prefers less total waiting: the negated waiting-time cost.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_brigade::models::{Coords, Location, OpeningHours, Solution};
/// use u_brigade::network::{Network, TravelMatrix};
/// use u_brigade::evaluation::waiting_time_fitness;
///
/// let depot = Location::depot(0, Coords::default());
/// let shop = Location::new(1, Coords::default(), 0.0)
///     .with_opening_hours(OpeningHours::from_hours(&[10]));
/// let network = Arc::new(Network::new(depot, vec![shop], TravelMatrix::new(2)).unwrap());
///
/// let fitness = waiting_time_fitness(network);
/// assert_eq!(fitness(&Solution::from_routes(vec![vec![1]])), -3600.0);
/// ```
pub fn waiting_time_fitness(network: Arc<Network>) -> FitnessFn {
    Arc::new(move |solution: &Solution| -evaluate(solution, &network))
}
