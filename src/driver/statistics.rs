//! Per-run statistics.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::models::Solution;

/// What a single [`Run`](super::Run) observed.
///
/// Costs are waiting-time costs (lower is better), one per yielded solution.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStatistics {
    pub(crate) runtime: Duration,
    pub(crate) iterations: usize,
    pub(crate) value_trace: Vec<f64>,
    pub(crate) best: Option<Arc<Solution>>,
    pub(crate) best_value: Option<f64>,
    pub(crate) final_solution: Option<Arc<Solution>>,
    pub(crate) completed: bool,
}

impl RunStatistics {
    /// Wall-clock time from the start of the run to its end.
    pub fn runtime(&self) -> Duration {
        self.runtime
    }

    /// Number of solutions yielded, the initial one included.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Cost of every yielded solution, in order. First is the initial
    /// solution, last is the final one.
    pub fn value_trace(&self) -> &[f64] {
        &self.value_trace
    }

    /// Lowest-cost solution seen. The first one wins ties.
    pub fn best(&self) -> Option<&Arc<Solution>> {
        self.best.as_ref()
    }

    pub fn best_value(&self) -> Option<f64> {
        self.best_value
    }

    /// Last yielded solution.
    pub fn final_solution(&self) -> Option<&Arc<Solution>> {
        self.final_solution.as_ref()
    }

    /// Cost of the last yielded solution.
    pub fn final_value(&self) -> Option<f64> {
        self.value_trace.last().copied()
    }

    /// `false` if the consumer stopped pulling before the search ended.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub(crate) fn record(&mut self, solution: &Arc<Solution>, cost: f64) {
        self.iterations += 1;
        self.value_trace.push(cost);
        match self.best_value {
            Some(best) if cost >= best => {}
            _ => {
                self.best_value = Some(cost);
                self.best = Some(Arc::clone(solution));
            }
        }
    }
}
