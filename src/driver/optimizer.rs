//! Owns the search state across runs.

use std::sync::Arc;
use std::time::Instant;

use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::config::OptimizerConfig;
use crate::constructive::initial_solution;
use crate::error::ConfigError;
use crate::evaluation::evaluate;
use crate::meta::{Metaheuristic, SolutionStream};
use crate::models::Solution;
use crate::network::Network;
use crate::random::rng_from_seed;

use super::RunStatistics;

/// Drives a metaheuristic over a network and keeps the resulting solution
/// for the next run.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_brigade::config::{MetaheuristicKind, OptimizerConfig};
/// use u_brigade::driver::OptimizationDriver;
/// use u_brigade::models::{Coords, Location};
/// use u_brigade::network::{Network, TravelMatrix};
///
/// let locations = (1..=9).map(|id| Location::new(id, Coords::default(), 0.0)).collect();
/// let network = Network::new(Location::depot(0, Coords::default()), locations, TravelMatrix::new(10)).unwrap();
///
/// let config = OptimizerConfig::default()
///     .with_metaheuristic(MetaheuristicKind::HillClimbing)
///     .with_num_carriers(2)
///     .with_seed(1);
/// let mut driver = OptimizationDriver::from_config(Arc::new(network), &config).unwrap();
///
/// let yielded = driver.run().count();
/// assert_eq!(driver.statistics().iterations(), yielded);
/// assert!(driver.statistics().is_completed());
/// assert_eq!(driver.num_carriers(), 2);
/// ```
pub struct OptimizationDriver {
    network: Arc<Network>,
    current: Arc<Solution>,
    metaheuristic: Box<dyn Metaheuristic>,
    rng: StdRng,
    statistics: RunStatistics,
}

impl OptimizationDriver {
    pub fn new(
        network: Arc<Network>,
        initial: Solution,
        metaheuristic: Box<dyn Metaheuristic>,
        rng: StdRng,
    ) -> Self {
        Self {
            network,
            current: Arc::new(initial),
            metaheuristic,
            rng,
            statistics: RunStatistics::default(),
        }
    }

    /// Assembles the whole pipeline: seeds the RNG, builds the initial
    /// solution and the search strategy.
    ///
    /// # Errors
    ///
    /// Any invalid component, or a carrier count outside
    /// `1..=network.num_locations()`. Without an explicit carrier count the
    /// count is [`default_num_carriers`](Self::default_num_carriers), which
    /// is zero, and so rejected, for fewer than ten locations.
    pub fn from_config(
        network: Arc<Network>,
        config: &OptimizerConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = rng_from_seed(config.seed);
        let num_carriers = config
            .num_carriers
            .unwrap_or_else(|| Self::default_num_carriers(network.num_locations()));

        let generator = config.initial_generator.build();
        let initial = initial_solution(generator.as_ref(), &network, num_carriers, &mut rng)?;
        let metaheuristic = config.build_metaheuristic(Arc::clone(&network), &mut rng)?;

        Ok(Self::new(network, initial, metaheuristic, rng))
    }

    /// One carrier per ten locations, rounded down.
    pub fn default_num_carriers(num_locations: usize) -> usize {
        num_locations / 10
    }

    /// Number of brigades in the current solution.
    pub fn num_carriers(&self) -> usize {
        self.current.num_brigades()
    }

    pub fn network(&self) -> &Arc<Network> {
        &self.network
    }

    /// Starting point of the next run; after a run, its final solution.
    pub fn current(&self) -> &Arc<Solution> {
        &self.current
    }

    pub fn metaheuristic(&self) -> &dyn Metaheuristic {
        self.metaheuristic.as_ref()
    }

    /// Statistics of the most recent run.
    pub fn statistics(&self) -> &RunStatistics {
        &self.statistics
    }

    /// Replaces the network, rebuilding the initial solution and the search
    /// strategy from `config` so that fitness is computed on the new network.
    pub fn set_network(
        &mut self,
        network: Arc<Network>,
        config: &OptimizerConfig,
    ) -> Result<(), ConfigError> {
        *self = Self::from_config(network, config)?;
        Ok(())
    }

    /// Replaces the starting point of the next run.
    ///
    /// Any cost cached on `solution` is dropped, since it may have been
    /// computed against another network.
    pub fn set_solution(&mut self, solution: Solution) {
        self.current = Arc::new(Solution::new(solution.into_brigades()));
    }

    pub fn set_metaheuristic(&mut self, metaheuristic: Box<dyn Metaheuristic>) {
        self.metaheuristic = metaheuristic;
    }

    /// Starts a run from the current solution.
    ///
    /// Statistics are reset now and filled in as solutions are pulled. When
    /// the returned iterator is exhausted or dropped, the last yielded
    /// solution becomes the current one.
    pub fn run(&mut self) -> Run<'_> {
        let Self {
            network,
            current,
            metaheuristic,
            rng,
            statistics,
        } = self;

        *statistics = RunStatistics::default();
        debug!(
            metaheuristic = metaheuristic.name(),
            brigades = current.num_brigades(),
            visits = current.num_visits(),
            "run started"
        );

        let stream = metaheuristic.optimize(Arc::clone(current), rng);
        Run {
            stream,
            network: Arc::clone(network),
            current,
            statistics,
            started: Instant::now(),
            last: None,
            finished: false,
        }
    }
}

/// A single pass of the metaheuristic, recording statistics as it goes.
///
/// Yields exactly what the metaheuristic yields.
pub struct Run<'d> {
    stream: SolutionStream<'d>,
    network: Arc<Network>,
    current: &'d mut Arc<Solution>,
    statistics: &'d mut RunStatistics,
    started: Instant,
    last: Option<Arc<Solution>>,
    finished: bool,
}

impl Run<'_> {
    /// Statistics recorded so far.
    pub fn statistics(&self) -> &RunStatistics {
        self.statistics
    }

    fn finish(&mut self, completed: bool) {
        if self.finished {
            return;
        }
        self.finished = true;

        let stats = &mut *self.statistics;
        stats.runtime = self.started.elapsed();
        stats.completed = completed;
        stats.final_solution = self.last.clone();
        if let Some(last) = self.last.take() {
            *self.current = last;
        }

        info!(
            iterations = stats.iterations,
            runtime_ms = stats.runtime.as_millis() as u64,
            best = stats.best_value,
            last = stats.value_trace.last().copied(),
            completed,
            "run finished"
        );
    }
}

impl Iterator for Run<'_> {
    type Item = Arc<Solution>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.stream.next() {
            Some(solution) => {
                let cost = evaluate(&solution, &self.network);
                self.statistics.record(&solution, cost);
                self.last = Some(Arc::clone(&solution));
                Some(solution)
            }
            None => {
                self.finish(true);
                None
            }
        }
    }
}

impl Drop for Run<'_> {
    fn drop(&mut self) {
        self.finish(false);
    }
}
