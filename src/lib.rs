//! # u-brigade
//!
//! Route optimization for inspection brigades. A fixed set of carriers
//! starts at a depot and visits every location exactly once; locations only
//! accept visits during their opening hours, and the objective is the total
//! time brigades spend waiting for a location to open.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Location, OpeningHours, Route, Brigade, Solution)
//! - [`network`] — Travel-time matrix and the validated location network
//! - [`evaluation`] — Brigade timelines, waiting-time cost and fitness functions
//! - [`constructive`] — Initial solutions (random partition, closest next)
//! - [`neighborhood`] — Neighborhood operators (crossover, mutation, shuffle, composites)
//! - [`meta`] — Search strategies (hill climbing, simulated annealing, best after n)
//! - [`config`] — Serializable pipeline configuration
//! - [`driver`] — Restartable optimization runs with statistics
//! - [`random`] — Seeded random sources
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use u_brigade::config::OptimizerConfig;
//! use u_brigade::driver::OptimizationDriver;
//! use u_brigade::models::{Coords, Location, OpeningHours};
//! use u_brigade::network::{Network, TravelMatrix};
//!
//! let locations = (1..=10)
//!     .map(|id| {
//!         Location::new(id, Coords::default(), 900.0)
//!             .with_opening_hours(OpeningHours::from_hours(&[10, 11, 14]))
//!     })
//!     .collect();
//! let matrix = TravelMatrix::new(11);
//! let network = Network::new(Location::depot(0, Coords::default()), locations, matrix).unwrap();
//!
//! let config = OptimizerConfig::default().with_seed(42);
//! let mut driver = OptimizationDriver::from_config(Arc::new(network), &config).unwrap();
//! for solution in driver.run() {
//!     assert_eq!(solution.num_visits(), 10);
//! }
//! let stats = driver.statistics();
//! assert!(stats.best_value().unwrap() <= stats.value_trace()[0]);
//! ```

pub mod config;
pub mod constructive;
pub mod driver;
pub mod error;
pub mod evaluation;
pub mod meta;
pub mod models;
pub mod neighborhood;
pub mod network;
pub mod random;
