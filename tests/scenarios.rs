//! End-to-end scenarios over the public API.

use std::sync::Arc;

use u_brigade::config::{InitialGeneratorKind, MetaheuristicKind, OptimizerConfig};
use u_brigade::constructive::{initial_solution, RandomPartition};
use u_brigade::driver::OptimizationDriver;
use u_brigade::evaluation::{evaluate, ScheduleEvaluator};
use u_brigade::meta::{AnnealingConfig, Metaheuristic, SimulatedAnnealing};
use u_brigade::models::{Coords, Location, OpeningHours, Route, Solution};
use u_brigade::neighborhood::{crossover_at, Mutation};
use u_brigade::network::{Network, TravelMatrix};
use u_brigade::random::create_rng;

/// Ids 0..=9 with 0 as depot, unit travel between distinct stops, always open.
fn ten_location_network() -> Network {
    let mut matrix = TravelMatrix::new(10);
    for i in 0..10 {
        for j in 0..10 {
            if i != j {
                matrix.set(i, j, 1.0);
            }
        }
    }
    let locations = (1..10)
        .map(|id| Location::new(id, Coords::default(), 0.0))
        .collect();
    Network::new(Location::depot(0, Coords::default()), locations, matrix).expect("valid network")
}

#[test]
fn test_always_open_network_costs_nothing() {
    let network = ten_location_network();
    let mut rng = create_rng(2024);
    let solution = initial_solution(&RandomPartition, &network, 2, &mut rng).expect("valid");

    assert_eq!(solution.num_brigades(), 2);
    assert!(solution.is_partition_of(&(1..10).collect::<Vec<_>>()));
    assert_eq!(evaluate(&solution, &network), 0.0);
}

#[test]
fn test_single_open_hour_waits_five_hours() {
    let shop = Location::new(1, Coords::default(), 0.0)
        .with_opening_hours(OpeningHours::from_hours(&[14]));
    let network = Network::new(Location::depot(0, Coords::default()), vec![shop], TravelMatrix::new(2))
        .expect("valid network");

    let evaluator = ScheduleEvaluator::new(&network);
    let waiting = evaluator
        .waiting_time(&Route::from_ids(vec![1]))
        .expect("reachable");
    assert_eq!(waiting, 18000.0);
    assert_eq!(evaluate(&Solution::from_routes(vec![vec![1]]), &network), 18000.0);
}

#[test]
fn test_crossover_swaps_single_location_routes() {
    let solution = Solution::from_routes(vec![vec![3], vec![7]]);
    let child = crossover_at(&solution, 0, 1, 0);
    assert_eq!(child, Solution::from_routes(vec![vec![7], vec![3]]));
}

#[test]
fn test_annealing_terminates_within_cooling_bound() {
    let network = Arc::new(ten_location_network());
    let config = AnnealingConfig::default()
        .with_initial_temperature(100.0)
        .with_cooling_factor(0.9)
        .with_limit_temperature(1.0);
    let fitness = u_brigade::evaluation::waiting_time_fitness(Arc::clone(&network));
    let sa = SimulatedAnnealing::new(Box::new(Mutation), fitness, config).expect("valid");

    let mut rng = create_rng(8);
    let start = Arc::new(
        initial_solution(&RandomPartition, &network, 3, &mut rng).expect("valid"),
    );
    let count = sa.optimize(start, &mut rng).count();
    assert!(count >= 1);
    assert!(count <= 44);
}

#[test]
fn test_driver_statistics_serialize() {
    let network = Arc::new(ten_location_network());
    let config = OptimizerConfig::default()
        .with_initial_generator(InitialGeneratorKind::Closest)
        .with_metaheuristic(MetaheuristicKind::BestAfter { samples: 4 })
        .with_num_carriers(3)
        .with_seed(99);
    let mut driver = OptimizationDriver::from_config(network, &config).expect("valid");
    let yielded = driver.run().count();

    let stats = driver.statistics();
    assert_eq!(stats.iterations(), yielded);
    assert!(stats.is_completed());

    let json = serde_json::to_value(stats).expect("serializable");
    assert_eq!(json["iterations"], yielded);
    assert_eq!(json["completed"], true);
    assert_eq!(
        json["value_trace"].as_array().map(Vec::len),
        Some(yielded)
    );
    assert!(json["final_solution"]["brigades"].is_array());
}
