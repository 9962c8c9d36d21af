//! Search strategies over solutions.
//!
//! Every strategy yields its current solution once per step as a lazy
//! [`SolutionStream`], starting with the initial solution.
//!
//! - [`HillClimbing`] — accept only strictly improving neighbors
//! - [`SimulatedAnnealing`] — Metropolis acceptance with geometric cooling
//! - [`BestAfterN`] — best of `n` sampled neighbors per step

pub mod annealing;
mod best_after;
mod hill_climbing;
mod metaheuristic;

pub use annealing::{AnnealingConfig, SimulatedAnnealing};
pub use best_after::BestAfterN;
pub use hill_climbing::HillClimbing;
pub use metaheuristic::{Metaheuristic, SolutionStream};
