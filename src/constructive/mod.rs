//! Constructive heuristics for building initial solutions.
//!
//! - [`RandomPartition`] — uniformly random dealing of locations
//! - [`ClosestNext`] — greedy nearest-next from each brigade's last stop
//!
//! Both plug into [`initial_solution`], which deals locations to brigades
//! in round-robin order.

mod closest_next;
mod generator;
mod random_partition;

pub use closest_next::ClosestNext;
pub use generator::{initial_solution, InitialStateGenerator};
pub use random_partition::RandomPartition;
