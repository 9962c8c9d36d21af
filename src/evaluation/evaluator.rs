//! Timeline simulation and waiting-time cost.

use serde::Serialize;
use tracing::{trace, warn};

use crate::error::ScheduleError;
use crate::models::{OpeningHours, Route, Solution, HOURS_PER_DAY};
use crate::network::Network;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Time of day at which every brigade leaves the depot (09:00, in seconds).
pub const INSPECTION_START: f64 = 9.0 * SECONDS_PER_HOUR;

/// Cost assigned to a solution that visits a location which never opens.
pub const INFEASIBLE_PENALTY: f64 = 1.0e12;

/// A single stop on a simulated brigade timeline. Times are seconds since
/// midnight of the inspection day and may exceed one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Visit {
    /// Location being inspected.
    pub location_id: usize,
    /// Arrival time after travelling from the previous stop.
    pub arrival: f64,
    /// Time spent waiting for the location to open.
    pub waiting: f64,
    /// Departure time (arrival + waiting + service duration).
    pub departure: f64,
}

/// The simulated timeline of one brigade.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Schedule {
    pub visits: Vec<Visit>,
    pub total_waiting: f64,
    pub total_travel: f64,
    pub total_utility: f64,
    /// Departure time from the last stop (start time for an empty route).
    pub end_time: f64,
}

/// Simulates brigade timelines against opening hours.
///
/// # Examples
///
/// ```
/// use u_brigade::models::{Coords, Location, OpeningHours, Route};
/// use u_brigade::network::{Network, TravelMatrix};
/// use u_brigade::evaluation::ScheduleEvaluator;
///
/// let depot = Location::depot(0, Coords::default());
/// let shop = Location::new(1, Coords::default(), 600.0)
///     .with_opening_hours(OpeningHours::from_hours(&[10]));
/// let network = Network::new(depot, vec![shop], TravelMatrix::new(2)).unwrap();
///
/// let eval = ScheduleEvaluator::new(&network);
/// let schedule = eval.build_schedule(&Route::from_ids(vec![1])).unwrap();
/// assert_eq!(schedule.total_waiting, 3600.0);
/// assert_eq!(schedule.visits[0].departure, 10.0 * 3600.0 + 600.0);
/// ```
pub struct ScheduleEvaluator<'a> {
    network: &'a Network,
    start_time: f64,
}

impl<'a> ScheduleEvaluator<'a> {
    /// Creates an evaluator starting every brigade at [`INSPECTION_START`].
    pub fn new(network: &'a Network) -> Self {
        Self {
            network,
            start_time: INSPECTION_START,
        }
    }

    /// Overrides the departure time from the depot (seconds since midnight).
    pub fn with_start_time(mut self, start_time: f64) -> Self {
        self.start_time = start_time;
        self
    }

    /// Builds the full timeline of a route.
    pub fn build_schedule(&self, route: &Route) -> Result<Schedule, ScheduleError> {
        let mut visits = Vec::with_capacity(route.len());
        let mut schedule = self.simulate(route, |visit| visits.push(visit))?;
        schedule.visits = visits;
        Ok(schedule)
    }

    /// Total waiting time of a single route.
    pub fn waiting_time(&self, route: &Route) -> Result<f64, ScheduleError> {
        self.simulate(route, |_| {}).map(|s| s.total_waiting)
    }

    /// Total waiting time of a solution, memoized on the solution.
    ///
    /// Returns [`INFEASIBLE_PENALTY`] if any route cannot be simulated. The
    /// memoized value is tied to the first network and start time used, so a
    /// solution should only be evaluated against one of each.
    pub fn cost(&self, solution: &Solution) -> f64 {
        solution.value_or_init(|s| self.compute_cost(s))
    }

    fn compute_cost(&self, solution: &Solution) -> f64 {
        let mut total = 0.0;
        for brigade in solution.brigades() {
            match self.waiting_time(brigade.route()) {
                Ok(waiting) => total += waiting,
                Err(e @ ScheduleError::NeverOpen(_)) => {
                    trace!(error = %e, "infeasible route");
                    return INFEASIBLE_PENALTY;
                }
                Err(e @ ScheduleError::UnknownLocation(_)) => {
                    warn!(error = %e, "infeasible route");
                    return INFEASIBLE_PENALTY;
                }
            }
        }
        total
    }

    fn simulate(
        &self,
        route: &Route,
        mut on_visit: impl FnMut(Visit),
    ) -> Result<Schedule, ScheduleError> {
        let mut schedule = Schedule::default();
        let mut clock = self.start_time;
        let mut prev = self.network.depot().id();

        for &id in route.location_ids() {
            let location = self
                .network
                .location(id)
                .ok_or(ScheduleError::UnknownLocation(id))?;

            let travel = self.network.travel_time(prev, id);
            schedule.total_travel += travel;
            clock += travel;
            let arrival = clock;

            let waiting = wait_until_open(clock, location.opening_hours())
                .ok_or(ScheduleError::NeverOpen(id))?;
            schedule.total_waiting += waiting;
            clock += waiting + location.service_duration();
            schedule.total_utility += location.utility();

            on_visit(Visit {
                location_id: id,
                arrival,
                waiting,
                departure: clock,
            });
            prev = id;
        }

        schedule.end_time = clock;
        Ok(schedule)
    }
}

/// Seconds to wait from `clock` until the start of the next open hour,
/// searching forward from the current hour inclusive.
fn wait_until_open(clock: f64, hours: &OpeningHours) -> Option<f64> {
    let hour_start = (clock / SECONDS_PER_HOUR).floor();
    let hour = (hour_start as usize) % HOURS_PER_DAY;
    match hours.next_open_offset(hour)? {
        0 => Some(0.0),
        offset => Some((hour_start + offset as f64) * SECONDS_PER_HOUR - clock),
    }
}

/// Total waiting time of a solution under the default inspection start.
///
/// Shorthand for `ScheduleEvaluator::new(network).cost(solution)`.
pub fn evaluate(solution: &Solution, network: &Network) -> f64 {
    ScheduleEvaluator::new(network).cost(solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coords, Location};
    use crate::network::TravelMatrix;

    fn network_with(locations: Vec<Location>, matrix: TravelMatrix) -> Network {
        Network::new(Location::depot(0, Coords::default()), locations, matrix)
            .expect("valid network")
    }

    fn all_ones(size: usize) -> TravelMatrix {
        let mut m = TravelMatrix::new(size);
        for i in 0..size {
            for j in 0..size {
                if i != j {
                    m.set(i, j, 1.0);
                }
            }
        }
        m
    }

    #[test]
    fn test_wait_until_open() {
        let hours = OpeningHours::from_hours(&[14]);
        assert_eq!(wait_until_open(9.0 * 3600.0, &hours), Some(18000.0));
        assert_eq!(wait_until_open(14.5 * 3600.0, &hours), Some(0.0));
        // 15:00 -> next day 14:00
        assert_eq!(wait_until_open(15.0 * 3600.0, &hours), Some(23.0 * 3600.0));
        assert_eq!(wait_until_open(0.0, &OpeningHours::never_open()), None);
    }

    #[test]
    fn test_wait_mid_hour() {
        let hours = OpeningHours::from_hours(&[10]);
        // 09:30 -> 10:00
        assert_eq!(wait_until_open(9.5 * 3600.0, &hours), Some(1800.0));
    }

    #[test]
    fn test_single_location_open_at_fourteen() {
        let loc = Location::new(1, Coords::default(), 0.0)
            .with_opening_hours(OpeningHours::from_hours(&[14]));
        let net = network_with(vec![loc], TravelMatrix::new(2));
        let sol = Solution::from_routes(vec![vec![1]]);
        assert_eq!(evaluate(&sol, &net), 18000.0);
    }

    #[test]
    fn test_always_open_costs_zero() {
        let locations = (1..10)
            .map(|id| Location::new(id, Coords::default(), 900.0))
            .collect();
        let net = network_with(locations, all_ones(10));
        let sol = Solution::from_routes(vec![vec![1, 2, 3, 4, 5], vec![6, 7, 8, 9]]);
        assert_eq!(evaluate(&sol, &net), 0.0);
    }

    #[test]
    fn test_never_open_is_penalized() {
        let locations = vec![
            Location::new(1, Coords::default(), 0.0),
            Location::new(2, Coords::default(), 0.0)
                .with_opening_hours(OpeningHours::never_open()),
        ];
        let net = network_with(locations, all_ones(3));
        let sol = Solution::from_routes(vec![vec![1], vec![2]]);
        assert_eq!(evaluate(&sol, &net), INFEASIBLE_PENALTY);
    }

    #[test]
    fn test_unknown_location_is_penalized() {
        let net = network_with(vec![Location::new(1, Coords::default(), 0.0)], all_ones(3));
        let sol = Solution::from_routes(vec![vec![1, 2]]);
        assert_eq!(evaluate(&sol, &net), INFEASIBLE_PENALTY);
    }

    #[test]
    fn test_service_time_pushes_into_closed_hour() {
        // 09:00 + 1h service at loc 1 -> arrive loc 2 at 10:00, opens 12:00
        let locations = vec![
            Location::new(1, Coords::default(), 3600.0),
            Location::new(2, Coords::default(), 0.0)
                .with_opening_hours(OpeningHours::from_hours(&[12, 13])),
        ];
        let net = network_with(locations, TravelMatrix::new(3));
        let eval = ScheduleEvaluator::new(&net);
        let schedule = eval
            .build_schedule(&Route::from_ids(vec![1, 2]))
            .expect("feasible");
        assert_eq!(schedule.visits.len(), 2);
        assert_eq!(schedule.visits[1].arrival, 10.0 * 3600.0);
        assert_eq!(schedule.visits[1].waiting, 7200.0);
        assert_eq!(schedule.total_waiting, 7200.0);
        assert_eq!(schedule.end_time, 12.0 * 3600.0);
    }

    #[test]
    fn test_travel_uses_directed_entries() {
        let mut m = TravelMatrix::new(3);
        m.set(0, 1, 100.0);
        m.set(1, 2, 200.0);
        m.set(2, 1, 9999.0);
        let locations = vec![
            Location::new(1, Coords::default(), 0.0),
            Location::new(2, Coords::default(), 0.0),
        ];
        let net = network_with(locations, m);
        let schedule = ScheduleEvaluator::new(&net)
            .build_schedule(&Route::from_ids(vec![1, 2]))
            .expect("feasible");
        assert_eq!(schedule.total_travel, 300.0);
        assert_eq!(schedule.end_time, INSPECTION_START + 300.0);
    }

    #[test]
    fn test_custom_start_time() {
        let loc = Location::new(1, Coords::default(), 0.0)
            .with_opening_hours(OpeningHours::from_hours(&[14]));
        let net = network_with(vec![loc], TravelMatrix::new(2));
        let eval = ScheduleEvaluator::new(&net).with_start_time(13.0 * 3600.0);
        let waiting = eval
            .waiting_time(&Route::from_ids(vec![1]))
            .expect("feasible");
        assert_eq!(waiting, 3600.0);
    }

    #[test]
    fn test_empty_route() {
        let net = network_with(vec![Location::new(1, Coords::default(), 0.0)], all_ones(2));
        let schedule = ScheduleEvaluator::new(&net)
            .build_schedule(&Route::new())
            .expect("feasible");
        assert!(schedule.visits.is_empty());
        assert_eq!(schedule.end_time, INSPECTION_START);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let loc = Location::new(1, Coords::default(), 0.0)
            .with_opening_hours(OpeningHours::from_hours(&[11]));
        let net = network_with(vec![loc], TravelMatrix::new(2));
        let sol = Solution::from_routes(vec![vec![1]]);
        assert_eq!(sol.cached_value(), None);
        let first = evaluate(&sol, &net);
        assert_eq!(sol.cached_value(), Some(first));
        assert_eq!(evaluate(&sol, &net), first);
    }

    #[test]
    fn test_utility_accumulates() {
        let locations = vec![
            Location::new(1, Coords::default(), 0.0).with_utility(2.0),
            Location::new(2, Coords::default(), 0.0).with_utility(3.5),
        ];
        let net = network_with(locations, TravelMatrix::new(3));
        let schedule = ScheduleEvaluator::new(&net)
            .build_schedule(&Route::from_ids(vec![2, 1]))
            .expect("feasible");
        assert_eq!(schedule.total_utility, 5.5);
    }
}
