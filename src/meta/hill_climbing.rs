//! Stochastic hill climbing.

use std::sync::Arc;

use rand::RngCore;
use tracing::debug;

use crate::evaluation::FitnessFn;
use crate::models::Solution;
use crate::neighborhood::NeighborhoodGenerator;

use super::{Metaheuristic, SolutionStream};

/// Moves to a generated neighbor only if it strictly improves fitness, and
/// stops at the first neighbor that does not.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_brigade::models::Solution;
/// use u_brigade::meta::{HillClimbing, Metaheuristic};
/// use u_brigade::neighborhood::Mutation;
/// use u_brigade::random::create_rng;
///
/// let fitness = Arc::new(|s: &Solution| -(s.brigades()[0].route().location_ids()[0] as f64));
/// let hc = HillClimbing::new(Box::new(Mutation), fitness);
///
/// let mut rng = create_rng(1);
/// let start = Arc::new(Solution::from_routes(vec![vec![3, 1, 2]]));
/// let trace: Vec<_> = hc.optimize(start.clone(), &mut rng).collect();
/// assert_eq!(trace[0], start);
/// ```
pub struct HillClimbing {
    generator: Box<dyn NeighborhoodGenerator>,
    fitness: FitnessFn,
}

impl HillClimbing {
    pub fn new(generator: Box<dyn NeighborhoodGenerator>, fitness: FitnessFn) -> Self {
        Self { generator, fitness }
    }
}

impl Metaheuristic for HillClimbing {
    fn name(&self) -> &str {
        "hill climbing"
    }

    fn optimize<'a>(
        &'a self,
        initial: Arc<Solution>,
        rng: &'a mut dyn RngCore,
    ) -> SolutionStream<'a> {
        let current_fitness = (self.fitness)(&initial);
        Box::new(Climb {
            generator: self.generator.as_ref(),
            fitness: &self.fitness,
            rng,
            current: initial,
            current_fitness,
            started: false,
            done: false,
        })
    }
}

struct Climb<'a> {
    generator: &'a dyn NeighborhoodGenerator,
    fitness: &'a FitnessFn,
    rng: &'a mut dyn RngCore,
    current: Arc<Solution>,
    current_fitness: f64,
    started: bool,
    done: bool,
}

impl Iterator for Climb<'_> {
    type Item = Arc<Solution>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(Arc::clone(&self.current));
        }

        let neighbor = self.generator.apply(&self.current, &mut *self.rng);
        let value = (self.fitness)(&neighbor);
        if value > self.current_fitness {
            self.current = Arc::new(neighbor);
            self.current_fitness = value;
            Some(Arc::clone(&self.current))
        } else {
            self.done = true;
            debug!(
                generator = self.generator.name(),
                fitness = self.current_fitness,
                "hill climbing reached a local optimum"
            );
            None
        }
    }
}
