//! Optimization driver and run statistics.

mod optimizer;
mod statistics;

pub use optimizer::{OptimizationDriver, Run};
pub use statistics::RunStatistics;
