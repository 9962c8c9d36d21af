//! Route timeline simulation and solution fitness.

mod evaluator;
mod fitness;

pub use evaluator::{
    evaluate, Schedule, ScheduleEvaluator, Visit, INFEASIBLE_PENALTY, INSPECTION_START,
};
pub use fitness::{waiting_time_fitness, FitnessFn};
