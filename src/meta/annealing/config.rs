//! Annealing parameters.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for [`SimulatedAnnealing`](super::SimulatedAnnealing).
///
/// Cooling is geometric: the temperature is multiplied by
/// `cooling_factor` after every iteration, and the search stops once it is
/// no longer above `limit_temperature`.
///
/// # Examples
///
/// ```
/// use u_brigade::meta::AnnealingConfig;
///
/// let config = AnnealingConfig::default()
///     .with_initial_temperature(100.0)
///     .with_cooling_factor(0.9)
///     .with_limit_temperature(1.0);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.iteration_bound(), 44);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnealingConfig {
    /// Starting temperature. Higher values accept more worsening moves.
    pub initial_temperature: f64,

    /// Multiplier applied to the temperature each iteration, in (0, 1).
    pub cooling_factor: f64,

    /// The search stops once the temperature is at or below this value.
    pub limit_temperature: f64,

    /// Length of the trailing window of non-improving fitness deltas. The
    /// search stops when the window is full and every delta in it is
    /// identical.
    /// 0 disables the check.
    pub stagnation_window: usize,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            cooling_factor: 0.95,
            limit_temperature: 1.0,
            stagnation_window: 5,
        }
    }
}

impl AnnealingConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_factor(mut self, alpha: f64) -> Self {
        self.cooling_factor = alpha;
        self
    }

    pub fn with_limit_temperature(mut self, t: f64) -> Self {
        self.limit_temperature = t;
        self
    }

    pub fn with_stagnation_window(mut self, n: usize) -> Self {
        self.stagnation_window = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t0 = self.initial_temperature;
        if !(t0.is_finite() && t0 > 0.0) {
            return Err(ConfigError::InvalidInitialTemperature(t0));
        }
        let limit = self.limit_temperature;
        if !(limit > 0.0 && limit < t0) {
            return Err(ConfigError::InvalidLimitTemperature(limit));
        }
        let alpha = self.cooling_factor;
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(ConfigError::InvalidCoolingFactor(alpha));
        }
        if self.stagnation_window == 1 {
            return Err(ConfigError::InvalidStagnationWindow);
        }
        Ok(())
    }

    /// Upper bound on the number of solutions a run yields, from the
    /// cooling schedule alone.
    ///
    /// Smallest `k` with `T0 * alpha^k <= limit`. Only meaningful for a
    /// valid configuration.
    pub fn iteration_bound(&self) -> usize {
        let ratio = self.limit_temperature / self.initial_temperature;
        let k = ratio.ln() / self.cooling_factor.ln();
        k.ceil().max(0.0) as usize
    }
}
