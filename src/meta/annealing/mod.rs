//! Simulated annealing.
//!
//! Metropolis acceptance with geometric cooling, plus early termination when
//! the trailing non-improving fitness deltas stop changing.

mod config;
mod runner;

pub use config::AnnealingConfig;
pub use runner::SimulatedAnnealing;
