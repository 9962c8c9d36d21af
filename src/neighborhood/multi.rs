//! Sequential composition of operators.

use rand::RngCore;

use crate::error::ConfigError;
use crate::models::Solution;

use super::NeighborhoodGenerator;

/// Applies a fixed list of operators in order, each to the previous result.
///
/// # Examples
///
/// ```
/// use u_brigade::models::Solution;
/// use u_brigade::neighborhood::{Crossover, Multi, NeighborhoodGenerator, Shuffle};
/// use u_brigade::random::create_rng;
///
/// let op = Multi::new(vec![Box::new(Crossover), Box::new(Shuffle)]).unwrap();
/// let sol = Solution::from_routes(vec![vec![1, 2, 3], vec![4, 5, 6]]);
/// let child = op.apply(&sol, &mut create_rng(3));
/// assert!(child.is_partition_of(&[1, 2, 3, 4, 5, 6]));
/// ```
pub struct Multi {
    generators: Vec<Box<dyn NeighborhoodGenerator>>,
}

impl Multi {
    pub fn new(generators: Vec<Box<dyn NeighborhoodGenerator>>) -> Result<Self, ConfigError> {
        if generators.is_empty() {
            return Err(ConfigError::EmptyGeneratorList);
        }
        Ok(Self { generators })
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

impl NeighborhoodGenerator for Multi {
    fn name(&self) -> &str {
        "multi"
    }

    fn apply(&self, solution: &Solution, rng: &mut dyn RngCore) -> Solution {
        let mut generators = self.generators.iter();
        let Some(first) = generators.next() else {
            return solution.clone();
        };
        let mut current = first.apply(solution, rng);
        for generator in generators {
            current = generator.apply(&current, rng);
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Brigade;
    use crate::random::create_rng;

    struct Append(usize);

    impl NeighborhoodGenerator for Append {
        fn name(&self) -> &str {
            "append"
        }

        fn apply(&self, solution: &Solution, _rng: &mut dyn RngCore) -> Solution {
            let mut brigades = solution.brigades().to_vec();
            brigades.push(Brigade::from(vec![self.0]));
            Solution::new(brigades)
        }
    }

    #[test]
    fn test_applies_in_order() {
        let op = Multi::new(vec![Box::new(Append(1)), Box::new(Append(2)), Box::new(Append(3))])
            .expect("non-empty");
        let out = op.apply(&Solution::default(), &mut create_rng(0));
        assert_eq!(out, Solution::from_routes(vec![vec![1], vec![2], vec![3]]));
        assert_eq!(op.len(), 3);
    }

    #[test]
    fn test_input_untouched() {
        let op = Multi::new(vec![Box::new(Append(9))]).expect("non-empty");
        let sol = Solution::from_routes(vec![vec![1]]);
        let out = op.apply(&sol, &mut create_rng(0));
        assert_eq!(sol.num_brigades(), 1);
        assert_eq!(out.num_brigades(), 2);
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(Multi::new(vec![]).err(), Some(ConfigError::EmptyGeneratorList));
    }
}
