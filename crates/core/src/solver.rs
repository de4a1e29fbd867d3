//! Solver trait and search configuration.

use crate::error::Error;
use crate::grid::GridProblem;
use crate::result::OptimizationResult;
use crate::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration of the combo truncation and the cross-core search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Cheapest combos kept per point tier.
    pub efficient_per_tier: usize,

    /// Most expensive combos kept per point tier.
    pub inefficient_per_tier: usize,

    /// Length of each core's candidate list after ranking.
    pub max_candidates: usize,

    /// Number of threads to use (0 = rayon default, 1 = sequential).
    pub threads: usize,

    /// Maximum computation time in milliseconds (0 = unlimited).
    pub time_limit_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            efficient_per_tier: 100,
            inefficient_per_tier: 50,
            max_candidates: 300,
            threads: 0,
            time_limit_ms: 0,
        }
    }
}

impl SearchConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many cheapest combos are kept per point tier.
    pub fn with_efficient_per_tier(mut self, n: usize) -> Self {
        self.efficient_per_tier = n;
        self
    }

    /// Sets how many most expensive combos are kept per point tier.
    pub fn with_inefficient_per_tier(mut self, n: usize) -> Self {
        self.inefficient_per_tier = n;
        self
    }

    /// Sets the per-core candidate list length.
    pub fn with_max_candidates(mut self, n: usize) -> Self {
        self.max_candidates = n;
        self
    }

    /// Sets the number of worker threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Sets the time limit in milliseconds.
    pub fn with_time_limit(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    /// Returns true if the search runs on the calling thread only.
    pub fn is_sequential(&self) -> bool {
        self.threads == 1
    }

    /// Checks the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.efficient_per_tier == 0 {
            return Err(Error::ConfigError(
                "efficient_per_tier must be at least 1".to_string(),
            ));
        }
        if self.max_candidates == 0 {
            return Err(Error::ConfigError(
                "max_candidates must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Progress callback for long-running searches.
pub type ProgressCallback = Box<dyn Fn(ProgressInfo) + Send + Sync>;

/// Progress information during a search.
#[derive(Debug, Clone)]
pub struct ProgressInfo {
    /// Core-0 candidates fully explored.
    pub completed: usize,
    /// Core-0 candidates to explore.
    pub total: usize,
    /// Best power seen so far.
    pub best_power: Option<f64>,
    /// Elapsed time in milliseconds.
    pub elapsed_ms: u64,
    /// Whether the solver is still running.
    pub running: bool,
}

impl ProgressInfo {
    /// Fraction of the outer loop done (0.0 - 1.0).
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }
}

/// Trait for grid optimizers.
pub trait Solver {
    /// Finds the best assignment of gems to the three cores.
    fn solve(&self, problem: &GridProblem) -> Result<OptimizationResult>;

    /// Solves with a progress callback.
    fn solve_with_progress(
        &self,
        problem: &GridProblem,
        callback: ProgressCallback,
    ) -> Result<OptimizationResult>;

    /// Cancels an ongoing solve operation.
    fn cancel(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.efficient_per_tier, 100);
        assert_eq!(config.inefficient_per_tier, 50);
        assert_eq!(config.max_candidates, 300);
        assert_eq!(config.threads, 0);
        assert_eq!(config.time_limit_ms, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = SearchConfig::new()
            .with_efficient_per_tier(10)
            .with_inefficient_per_tier(0)
            .with_max_candidates(40)
            .with_threads(1)
            .with_time_limit(250);

        assert_eq!(config.efficient_per_tier, 10);
        assert_eq!(config.inefficient_per_tier, 0);
        assert_eq!(config.max_candidates, 40);
        assert!(config.is_sequential());
        assert_eq!(config.time_limit_ms, 250);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        assert!(SearchConfig::new()
            .with_efficient_per_tier(0)
            .validate()
            .is_err());
        assert!(matches!(
            SearchConfig::new().with_max_candidates(0).validate(),
            Err(Error::ConfigError(_))
        ));
    }

    #[test]
    fn test_progress_fraction() {
        let info = ProgressInfo {
            completed: 30,
            total: 120,
            best_power: None,
            elapsed_ms: 5,
            running: true,
        };
        assert!((info.fraction() - 0.25).abs() < 1e-12);
    }
}
