//! Sampled steepest ascent.

use std::sync::Arc;

use rand::RngCore;
use tracing::debug;

use crate::error::ConfigError;
use crate::evaluation::FitnessFn;
use crate::models::Solution;
use crate::neighborhood::NeighborhoodGenerator;

use super::{Metaheuristic, SolutionStream};

/// Samples `samples` neighbors of the current solution per step and moves to
/// the best one if it strictly improves fitness. Stops when no sampled
/// neighbor improves.
pub struct BestAfterN {
    generator: Box<dyn NeighborhoodGenerator>,
    fitness: FitnessFn,
    samples: usize,
}

impl BestAfterN {
    pub fn new(
        generator: Box<dyn NeighborhoodGenerator>,
        fitness: FitnessFn,
        samples: usize,
    ) -> Result<Self, ConfigError> {
        if samples == 0 {
            return Err(ConfigError::InvalidSampleCount);
        }
        Ok(Self {
            generator,
            fitness,
            samples,
        })
    }

    pub fn samples(&self) -> usize {
        self.samples
    }
}

impl Metaheuristic for BestAfterN {
    fn name(&self) -> &str {
        "best after n"
    }

    fn optimize<'a>(
        &'a self,
        initial: Arc<Solution>,
        rng: &'a mut dyn RngCore,
    ) -> SolutionStream<'a> {
        let current_fitness = (self.fitness)(&initial);
        Box::new(Ascent {
            search: self,
            rng,
            current: initial,
            current_fitness,
            started: false,
            done: false,
        })
    }
}

struct Ascent<'a> {
    search: &'a BestAfterN,
    rng: &'a mut dyn RngCore,
    current: Arc<Solution>,
    current_fitness: f64,
    started: bool,
    done: bool,
}

impl Iterator for Ascent<'_> {
    type Item = Arc<Solution>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(Arc::clone(&self.current));
        }

        let mut best: Option<(Solution, f64)> = None;
        for _ in 0..self.search.samples {
            let neighbor = self.search.generator.apply(&self.current, &mut *self.rng);
            let value = (self.search.fitness)(&neighbor);
            let threshold = best.as_ref().map_or(self.current_fitness, |(_, v)| *v);
            if value > threshold {
                best = Some((neighbor, value));
            }
        }

        match best {
            Some((solution, value)) => {
                self.current = Arc::new(solution);
                self.current_fitness = value;
                Some(Arc::clone(&self.current))
            }
            None => {
                self.done = true;
                debug!(
                    samples = self.search.samples,
                    fitness = self.current_fitness,
                    "no sampled neighbor improves"
                );
                None
            }
        }
    }
}
