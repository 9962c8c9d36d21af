//! The annealing search loop.

use std::collections::VecDeque;
use std::sync::Arc;

use rand::{Rng, RngCore};
use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::evaluation::FitnessFn;
use crate::models::Solution;
use crate::meta::{Metaheuristic, SolutionStream};
use crate::neighborhood::NeighborhoodGenerator;

use super::AnnealingConfig;

/// Simulated annealing with Metropolis acceptance and geometric cooling.
///
/// Improving neighbors are always accepted; a worsening neighbor with
/// fitness change `delta` is accepted with probability `exp(delta / T)`.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_brigade::meta::{AnnealingConfig, Metaheuristic, SimulatedAnnealing};
/// use u_brigade::models::Solution;
/// use u_brigade::neighborhood::Shuffle;
/// use u_brigade::random::create_rng;
///
/// let config = AnnealingConfig::default().with_cooling_factor(0.9);
/// let fitness = Arc::new(|s: &Solution| s.brigades()[0].route().location_ids()[0] as f64);
/// let sa = SimulatedAnnealing::new(Box::new(Shuffle), fitness, config).unwrap();
///
/// let mut rng = create_rng(42);
/// let start = Arc::new(Solution::from_routes(vec![vec![1, 2, 3, 4]]));
/// let count = sa.optimize(start, &mut rng).count();
/// assert!(count >= 1 && count <= config.iteration_bound());
/// ```
pub struct SimulatedAnnealing {
    generator: Box<dyn NeighborhoodGenerator>,
    fitness: FitnessFn,
    config: AnnealingConfig,
}

impl SimulatedAnnealing {
    pub fn new(
        generator: Box<dyn NeighborhoodGenerator>,
        fitness: FitnessFn,
        config: AnnealingConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            generator,
            fitness,
            config,
        })
    }

    pub fn config(&self) -> &AnnealingConfig {
        &self.config
    }
}

impl Metaheuristic for SimulatedAnnealing {
    fn name(&self) -> &str {
        "simulated annealing"
    }

    fn optimize<'a>(
        &'a self,
        initial: Arc<Solution>,
        rng: &'a mut dyn RngCore,
    ) -> SolutionStream<'a> {
        let current_fitness = (self.fitness)(&initial);
        debug!(
            temperature = self.config.initial_temperature,
            fitness = current_fitness,
            "annealing started"
        );
        Box::new(Anneal {
            search: self,
            rng,
            current: initial,
            current_fitness,
            temperature: self.config.initial_temperature,
            deltas: VecDeque::with_capacity(self.config.stagnation_window),
            iteration: 0,
            accepted: 0,
            started: false,
            done: false,
        })
    }
}

struct Anneal<'a> {
    search: &'a SimulatedAnnealing,
    rng: &'a mut dyn RngCore,
    current: Arc<Solution>,
    current_fitness: f64,
    temperature: f64,
    deltas: VecDeque<f64>,
    iteration: usize,
    accepted: usize,
    started: bool,
    done: bool,
}

impl Anneal<'_> {
    /// One annealing iteration. Returns `false` when the window of
    /// non-improving deltas signals stagnation.
    fn step(&mut self) -> bool {
        self.iteration += 1;
        let neighbor = self.search.generator.apply(&self.current, &mut *self.rng);
        let value = (self.search.fitness)(&neighbor);
        let delta = value - self.current_fitness;

        let accept = if delta > 0.0 {
            true
        } else {
            if self.is_stagnant(delta) {
                return false;
            }
            let probability = (delta / self.temperature).exp();
            self.rng.random::<f64>() < probability
        };

        if accept {
            debug!(
                iteration = self.iteration,
                delta,
                temperature = self.temperature,
                "annealing accepted neighbor"
            );
            self.current = Arc::new(neighbor);
            self.current_fitness = value;
            self.accepted += 1;
        }

        self.temperature *= self.search.config.cooling_factor;
        trace!(iteration = self.iteration, temperature = self.temperature);
        true
    }

    /// Records a non-improving delta and reports whether the window is full
    /// of identical values.
    fn is_stagnant(&mut self, delta: f64) -> bool {
        let window = self.search.config.stagnation_window;
        if window == 0 {
            return false;
        }
        if self.deltas.len() == window {
            self.deltas.pop_front();
        }
        self.deltas.push_back(delta);
        self.deltas.len() == window && self.deltas.iter().all(|&d| d == delta)
    }

    fn finish(&mut self, reason: &str) {
        self.done = true;
        debug!(
            iterations = self.iteration,
            accepted = self.accepted,
            temperature = self.temperature,
            fitness = self.current_fitness,
            reason,
            "annealing finished"
        );
    }
}

impl Iterator for Anneal<'_> {
    type Item = Arc<Solution>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.started && !self.step() {
            self.finish("stagnation");
            return None;
        }
        if self.temperature <= self.search.config.limit_temperature {
            self.finish("cooled");
            return None;
        }
        self.started = true;
        Some(Arc::clone(&self.current))
    }
}
