//! Solution (state) type.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::Brigade;

/// A complete assignment of locations to brigades.
///
/// Holds one [`Brigade`] per carrier plus a memoized cost. The cache is
/// written at most once per brigade list; replacing the brigades resets it.
/// Operators never edit a solution in place: they clone the routes they
/// touch and build a new `Solution`.
///
/// # Examples
///
/// ```
/// use u_brigade::models::{Brigade, Solution};
///
/// let sol = Solution::new(vec![Brigade::from(vec![1, 2]), Brigade::from(vec![3])]);
/// assert_eq!(sol.num_brigades(), 2);
/// assert_eq!(sol.num_visits(), 3);
/// assert!(sol.is_partition_of(&[3, 2, 1]));
/// assert_eq!(sol.cached_value(), None);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Solution {
    brigades: Vec<Brigade>,
    #[serde(skip)]
    cached_value: OnceLock<f64>,
}

impl Solution {
    /// Creates a solution from its brigades.
    pub fn new(brigades: Vec<Brigade>) -> Self {
        Self {
            brigades,
            cached_value: OnceLock::new(),
        }
    }

    /// Builds a solution from raw routes of location IDs.
    pub fn from_routes(routes: Vec<Vec<usize>>) -> Self {
        Self::new(routes.into_iter().map(Brigade::from).collect())
    }

    pub fn brigades(&self) -> &[Brigade] {
        &self.brigades
    }

    /// Replaces the brigade list and invalidates the cached cost.
    pub fn set_brigades(&mut self, brigades: Vec<Brigade>) {
        self.brigades = brigades;
        self.cached_value = OnceLock::new();
    }

    /// Consumes the solution, returning its brigades.
    pub fn into_brigades(self) -> Vec<Brigade> {
        self.brigades
    }

    pub fn num_brigades(&self) -> usize {
        self.brigades.len()
    }

    /// Total number of visits across all brigades.
    pub fn num_visits(&self) -> usize {
        self.brigades.iter().map(|b| b.route().len()).sum()
    }

    /// All visited location IDs, brigade by brigade.
    pub fn location_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.brigades
            .iter()
            .flat_map(|b| b.route().location_ids().iter().copied())
    }

    /// The memoized cost, if it has been computed.
    pub fn cached_value(&self) -> Option<f64> {
        self.cached_value.get().copied()
    }

    /// Returns the memoized cost, computing it with `compute` on first use.
    pub fn value_or_init(&self, compute: impl FnOnce(&Self) -> f64) -> f64 {
        *self.cached_value.get_or_init(|| compute(self))
    }

    /// Returns `true` if every ID in `expected` is visited exactly once and
    /// nothing else is visited.
    pub fn is_partition_of(&self, expected: &[usize]) -> bool {
        let mut visited: Vec<usize> = self.location_ids().collect();
        let mut expected = expected.to_vec();
        visited.sort_unstable();
        expected.sort_unstable();
        visited == expected
    }
}

impl PartialEq for Solution {
    fn eq(&self, other: &Self) -> bool {
        self.brigades == other.brigades
    }
}
