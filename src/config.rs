//! Search configuration
//!
//! Every optimisation can be toggled independently. Turning alpha-beta or
//! the transposition table on or off never changes the chosen move or its
//! score, only the amount of work done. The two move-reduction options are
//! approximations and may change the result.

use crate::error::ConfigError;
use crate::eval::HeuristicKind;

/// Default search depth
pub const DEFAULT_DEPTH: u32 = 3;

/// Options for one `best_move` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum search depth in plies (>= 1)
    pub depth: u32,
    /// Leaf evaluation strategy
    pub heuristic: HeuristicKind,
    /// Stop enumerating a node's moves once its window closes
    pub alpha_beta: bool,
    /// Cache node scores by board contents for the duration of one call
    pub transposition: bool,
    /// Search one cell per symmetry orbit
    pub symmetry_reduction: bool,
    /// Keep only the best-scoring half (at least 5) of the candidates
    pub heuristic_reduction: bool,
    /// Log search statistics at info level
    pub verbose: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            heuristic: HeuristicKind::Advanced,
            alpha_beta: true,
            transposition: true,
            symmetry_reduction: false,
            heuristic_reduction: false,
            verbose: false,
        }
    }
}

impl SearchConfig {
    /// Default options at the given depth.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidDepth` when `depth` is 0.
    pub fn new(depth: u32) -> Result<Self, ConfigError> {
        Self::default().with_depth(depth)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidDepth` when `depth` is 0.
    pub fn with_depth(mut self, depth: u32) -> Result<Self, ConfigError> {
        self.depth = depth;
        self.validate()?;
        Ok(self)
    }

    #[must_use]
    pub fn with_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = heuristic;
        self
    }

    #[must_use]
    pub fn with_alpha_beta(mut self, enabled: bool) -> Self {
        self.alpha_beta = enabled;
        self
    }

    #[must_use]
    pub fn with_transposition(mut self, enabled: bool) -> Self {
        self.transposition = enabled;
        self
    }

    #[must_use]
    pub fn with_symmetry_reduction(mut self, enabled: bool) -> Self {
        self.symmetry_reduction = enabled;
        self
    }

    #[must_use]
    pub fn with_heuristic_reduction(mut self, enabled: bool) -> Self {
        self.heuristic_reduction = enabled;
        self
    }

    #[must_use]
    pub fn with_verbose(mut self, enabled: bool) -> Self {
        self.verbose = enabled;
        self
    }

    /// Check the options are usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidDepth` when `depth` is 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::InvalidDepth(self.depth));
        }
        Ok(())
    }

    /// Human-readable algorithm summary, e.g. "Minimax + Alpha-Beta + Symmetry"
    pub fn algorithm_name(&self) -> String {
        let mut parts = vec!["Minimax"];
        if self.alpha_beta {
            parts.push("Alpha-Beta");
        }
        if self.symmetry_reduction {
            parts.push("Symmetry");
        }
        if self.heuristic_reduction {
            parts.push("Heuristic Red.");
        }
        parts.join(" + ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.depth, 3);
        assert_eq!(config.heuristic, HeuristicKind::Advanced);
        assert!(config.alpha_beta);
        assert!(config.transposition);
        assert!(!config.symmetry_reduction);
        assert!(!config.heuristic_reduction);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_depth_rejected() {
        assert_eq!(SearchConfig::new(0), Err(ConfigError::InvalidDepth(0)));
        let mut config = SearchConfig::default();
        config.depth = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builder() {
        let config = SearchConfig::new(2)
            .unwrap()
            .with_heuristic(HeuristicKind::Simple)
            .with_alpha_beta(false)
            .with_symmetry_reduction(true);
        assert_eq!(config.depth, 2);
        assert_eq!(config.heuristic, HeuristicKind::Simple);
        assert!(!config.alpha_beta);
        assert!(config.symmetry_reduction);
    }

    #[test]
    fn test_algorithm_name() {
        let config = SearchConfig::default().with_heuristic_reduction(true);
        assert_eq!(config.algorithm_name(), "Minimax + Alpha-Beta + Heuristic Red.");
        let plain = SearchConfig::default().with_alpha_beta(false);
        assert_eq!(plain.algorithm_name(), "Minimax");
    }
}
