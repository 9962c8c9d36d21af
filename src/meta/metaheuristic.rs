//! The search strategy interface.

use std::sync::Arc;

use rand::RngCore;

use crate::models::Solution;

/// A lazily evaluated sequence of solutions produced by a search.
///
/// Every yielded solution is immutable; consumers may keep and share them
/// while the search continues. Dropping the stream cancels the search.
pub type SolutionStream<'a> = Box<dyn Iterator<Item = Arc<Solution>> + 'a>;

/// A search strategy driving a solution toward higher fitness.
///
/// Strategies own their neighborhood operator and fitness function; the
/// driver only needs this trait, so new strategies plug in without changing
/// it.
pub trait Metaheuristic: Send + Sync {
    /// Strategy name, for logging.
    fn name(&self) -> &str;

    /// Starts a search from `initial`.
    ///
    /// The first element is always `initial` itself; each following element
    /// is the strategy's current solution after one step. The stream ends
    /// when the strategy's own termination condition is met.
    fn optimize<'a>(
        &'a self,
        initial: Arc<Solution>,
        rng: &'a mut dyn RngCore,
    ) -> SolutionStream<'a>;
}
