//! Optimizer pipeline configuration.
//!
//! [`OptimizerConfig`] names every component of a run (initial generator,
//! neighborhood operators, search strategy) and assembles them against a
//! network. All types are serde-friendly so a host can load them from its own
//! config files.

use std::sync::Arc;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::constructive::{ClosestNext, InitialStateGenerator, RandomPartition};
use crate::error::ConfigError;
use crate::evaluation::waiting_time_fitness;
use crate::meta::{AnnealingConfig, BestAfterN, HillClimbing, Metaheuristic, SimulatedAnnealing};
use crate::network::Network;
use crate::neighborhood::{
    Crossover, Mutation, NeighborhoodGenerator, RandomOf, SelectionMode, Shuffle,
};

/// Initial-state generator variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitialGeneratorKind {
    /// Uniform random dealing.
    #[default]
    Random,
    /// Greedy nearest next stop.
    Closest,
}

impl InitialGeneratorKind {
    pub fn build(self) -> Box<dyn InitialStateGenerator> {
        match self {
            Self::Random => Box::new(RandomPartition),
            Self::Closest => Box::new(ClosestNext),
        }
    }
}

/// Primitive neighborhood operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeighborhoodKind {
    Crossover,
    Mutation,
    Shuffle,
}

impl NeighborhoodKind {
    pub fn build(self) -> Box<dyn NeighborhoodGenerator> {
        match self {
            Self::Crossover => Box::new(Crossover),
            Self::Mutation => Box::new(Mutation),
            Self::Shuffle => Box::new(Shuffle),
        }
    }
}

/// Search strategy and its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MetaheuristicKind {
    HillClimbing,
    SimulatedAnnealing(AnnealingConfig),
    BestAfter { samples: usize },
}

impl Default for MetaheuristicKind {
    fn default() -> Self {
        Self::SimulatedAnnealing(AnnealingConfig::default())
    }
}

/// Configuration of a whole optimization pipeline.
///
/// # Examples
///
/// ```
/// use u_brigade::config::{MetaheuristicKind, NeighborhoodKind, OptimizerConfig};
///
/// let config = OptimizerConfig::default()
///     .with_neighborhoods(vec![NeighborhoodKind::Mutation])
///     .with_metaheuristic(MetaheuristicKind::HillClimbing)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
///
/// let empty = OptimizerConfig::default().with_neighborhoods(vec![]);
/// assert!(empty.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// How the starting solution is built.
    pub initial_generator: InitialGeneratorKind,

    /// Operators the search draws neighbors from.
    pub neighborhoods: Vec<NeighborhoodKind>,

    /// Whether the operator is redrawn on every move or fixed once.
    pub selection_mode: SelectionMode,

    pub metaheuristic: MetaheuristicKind,

    /// Carrier count. `None` derives it from the location count.
    pub num_carriers: Option<usize>,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            initial_generator: InitialGeneratorKind::default(),
            neighborhoods: vec![
                NeighborhoodKind::Crossover,
                NeighborhoodKind::Mutation,
                NeighborhoodKind::Shuffle,
            ],
            selection_mode: SelectionMode::default(),
            metaheuristic: MetaheuristicKind::default(),
            num_carriers: None,
            seed: None,
        }
    }
}

impl OptimizerConfig {
    pub fn with_initial_generator(mut self, kind: InitialGeneratorKind) -> Self {
        self.initial_generator = kind;
        self
    }

    pub fn with_neighborhoods(mut self, kinds: Vec<NeighborhoodKind>) -> Self {
        self.neighborhoods = kinds;
        self
    }

    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    pub fn with_metaheuristic(mut self, kind: MetaheuristicKind) -> Self {
        self.metaheuristic = kind;
        self
    }

    pub fn with_num_carriers(mut self, n: usize) -> Self {
        self.num_carriers = Some(n);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates everything that does not depend on the network.
    ///
    /// Carrier counts are checked against the location count when the
    /// initial solution is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.neighborhoods.is_empty() {
            return Err(ConfigError::EmptyGeneratorList);
        }
        match self.metaheuristic {
            MetaheuristicKind::HillClimbing => Ok(()),
            MetaheuristicKind::SimulatedAnnealing(config) => config.validate(),
            MetaheuristicKind::BestAfter { samples: 0 } => Err(ConfigError::InvalidSampleCount),
            MetaheuristicKind::BestAfter { .. } => Ok(()),
        }
    }

    /// Builds the neighborhood operator: a uniform choice among the
    /// configured operators.
    pub fn build_neighborhood(
        &self,
        rng: &mut dyn RngCore,
    ) -> Result<Box<dyn NeighborhoodGenerator>, ConfigError> {
        let generators = self.neighborhoods.iter().map(|kind| kind.build()).collect();
        let op = RandomOf::with_mode(generators, self.selection_mode, rng)?;
        Ok(Box::new(op))
    }

    /// Builds the search strategy, minimizing waiting time on `network`.
    pub fn build_metaheuristic(
        &self,
        network: Arc<Network>,
        rng: &mut dyn RngCore,
    ) -> Result<Box<dyn Metaheuristic>, ConfigError> {
        let generator = self.build_neighborhood(rng)?;
        let fitness = waiting_time_fitness(network);
        let meta: Box<dyn Metaheuristic> = match self.metaheuristic {
            MetaheuristicKind::HillClimbing => Box::new(HillClimbing::new(generator, fitness)),
            MetaheuristicKind::SimulatedAnnealing(config) => {
                Box::new(SimulatedAnnealing::new(generator, fitness, config)?)
            }
            MetaheuristicKind::BestAfter { samples } => {
                Box::new(BestAfterN::new(generator, fitness, samples)?)
            }
        };
        Ok(meta)
    }
}
