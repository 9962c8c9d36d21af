//! Random choice among several operators.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::Solution;

use super::NeighborhoodGenerator;

/// When [`RandomOf`] draws its delegate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Draw a new delegate on every `apply` call.
    #[default]
    PerCall,
    /// Draw once at construction and keep it for the operator's lifetime.
    Fixed,
}

/// Delegates each `apply` to one of its operators, chosen uniformly.
///
/// # Examples
///
/// ```
/// use u_brigade::models::Solution;
/// use u_brigade::neighborhood::{Crossover, Mutation, NeighborhoodGenerator, RandomOf};
/// use u_brigade::random::create_rng;
///
/// let op = RandomOf::new(vec![Box::new(Crossover), Box::new(Mutation)]).unwrap();
/// let sol = Solution::from_routes(vec![vec![1, 2], vec![3, 4]]);
/// let child = op.apply(&sol, &mut create_rng(1));
/// assert!(child.is_partition_of(&[1, 2, 3, 4]));
///
/// assert!(RandomOf::new(vec![]).is_err());
/// ```
pub struct RandomOf {
    generators: Vec<Box<dyn NeighborhoodGenerator>>,
    fixed: Option<usize>,
}

impl RandomOf {
    /// Draws a delegate on every call.
    pub fn new(generators: Vec<Box<dyn NeighborhoodGenerator>>) -> Result<Self, ConfigError> {
        if generators.is_empty() {
            return Err(ConfigError::EmptyGeneratorList);
        }
        Ok(Self {
            generators,
            fixed: None,
        })
    }

    /// Draws a delegate once, now, and uses it for every call.
    pub fn fixed(
        generators: Vec<Box<dyn NeighborhoodGenerator>>,
        rng: &mut dyn RngCore,
    ) -> Result<Self, ConfigError> {
        let mut op = Self::new(generators)?;
        op.fixed = Some(rng.random_range(0..op.generators.len()));
        Ok(op)
    }

    /// Builds the operator in the given selection mode.
    pub fn with_mode(
        generators: Vec<Box<dyn NeighborhoodGenerator>>,
        mode: SelectionMode,
        rng: &mut dyn RngCore,
    ) -> Result<Self, ConfigError> {
        match mode {
            SelectionMode::PerCall => Self::new(generators),
            SelectionMode::Fixed => Self::fixed(generators, rng),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        if self.fixed.is_some() {
            SelectionMode::Fixed
        } else {
            SelectionMode::PerCall
        }
    }

    /// The delegate to use for the next call.
    pub fn choose(&self, rng: &mut dyn RngCore) -> &dyn NeighborhoodGenerator {
        let idx = match self.fixed {
            Some(idx) => idx,
            None => rng.random_range(0..self.generators.len()),
        };
        self.generators[idx].as_ref()
    }
}

impl NeighborhoodGenerator for RandomOf {
    fn name(&self) -> &str {
        match self.fixed {
            Some(idx) => self.generators[idx].name(),
            None => "random",
        }
    }

    fn apply(&self, solution: &Solution, rng: &mut dyn RngCore) -> Solution {
        self.choose(rng).apply(solution, rng)
    }
}
