//! Main AI engine entry point
//!
//! [`best_move`] is the one operation collaborators need: it runs a fresh
//! [`Searcher`] for the given configuration and reports the result together
//! with its statistics. [`AIEngine`] wraps a validated configuration and a
//! reusable searcher for callers that ask for many moves.
//!
//! # Example
//!
//! ```
//! use cubic::{AIEngine, Board, Mark, Pos, SearchConfig};
//!
//! // Use smaller depth for faster example
//! let config = SearchConfig::new(2).unwrap();
//! let mut engine = AIEngine::with_config(config).unwrap();
//! let mut board = Board::new();
//! board.apply(Pos::new(1, 1, 1), Mark::X);
//!
//! let result = engine.get_move_with_stats(&board, Mark::O);
//! println!("Best move: {:?}", result.best_move);
//! println!("Stats: {}", result.stats);
//! ```

use log::{debug, info};

use crate::board::{Board, Mark, Pos};
use crate::config::SearchConfig;
use crate::error::ConfigError;
use crate::search::{SearchResult, Searcher};

/// Find the best move for `player` with a one-off searcher.
///
/// Caches are private to this call, so concurrent calls never interfere.
/// Returns `best_move: None` with a zero score when the board is full.
pub fn best_move(board: &Board, player: Mark, config: &SearchConfig) -> SearchResult {
    let mut searcher = Searcher::new(*config);
    let result = searcher.best_move(board, player);
    log_result(&result, player, config.verbose);
    result
}

fn log_result(result: &SearchResult, player: Mark, verbose: bool) {
    let chosen = result.best_move.map_or_else(|| "none".to_string(), |pos| pos.to_string());
    if verbose {
        info!("{player} plays {chosen} (score {:.1}): {}", result.score, result.stats);
    } else {
        debug!("{player} plays {chosen} (score {:.1}): {}", result.score, result.stats);
    }
}

/// Main AI Engine for Cubic.
///
/// Holds a validated [`SearchConfig`] and a searcher that is reset at the
/// start of every move request.
///
/// # Example
///
/// ```
/// use cubic::AIEngine;
///
/// let engine = AIEngine::new();
/// assert_eq!(engine.max_depth(), 3);
/// ```
pub struct AIEngine {
    searcher: Searcher,
}

impl AIEngine {
    /// Create a new AI engine with default settings.
    ///
    /// Default configuration:
    /// - Depth 3
    /// - Advanced heuristic
    /// - Alpha-beta and transposition table on, move reductions off
    #[must_use]
    pub fn new() -> Self {
        Self {
            searcher: Searcher::new(SearchConfig::default()),
        }
    }

    /// Create an AI engine with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns the validation error when the configuration is unusable.
    pub fn with_config(config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            searcher: Searcher::new(config),
        })
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        self.searcher.config()
    }

    /// Replace the configuration.
    ///
    /// # Errors
    ///
    /// Returns the validation error and keeps the old configuration when the
    /// new one is unusable.
    pub fn set_config(&mut self, config: SearchConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.searcher = Searcher::new(config);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidDepth` when `depth` is 0.
    pub fn set_max_depth(&mut self, depth: u32) -> Result<(), ConfigError> {
        let config = self.config().with_depth(depth)?;
        self.set_config(config)
    }

    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.config().depth
    }

    /// Get the best move for the given position.
    ///
    /// This is a convenience method that returns only the best move.
    /// Use `get_move_with_stats` if you need search statistics.
    pub fn get_move(&mut self, board: &Board, player: Mark) -> Option<Pos> {
        self.get_move_with_stats(board, player).best_move
    }

    /// Get the best move with detailed search statistics.
    pub fn get_move_with_stats(&mut self, board: &Board, player: Mark) -> SearchResult {
        let result = self.searcher.best_move(board, player);
        log_result(&result, player, self.config().verbose);
        result
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::HeuristicKind;
    use crate::rules::win::tests::drawn_board;

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert_eq!(engine.max_depth(), 3);
        assert_eq!(*engine.config(), SearchConfig::default());
    }

    #[test]
    fn test_engine_rejects_zero_depth() {
        let mut config = SearchConfig::default();
        config.depth = 0;
        assert_eq!(AIEngine::with_config(config).err(), Some(ConfigError::InvalidDepth(0)));

        let mut engine = AIEngine::new();
        assert!(engine.set_max_depth(0).is_err());
        assert_eq!(engine.max_depth(), 3);
        assert!(engine.set_max_depth(5).is_ok());
        assert_eq!(engine.max_depth(), 5);
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let mut board = Board::new();
        for layer in 0..3 {
            board.apply(Pos::new(layer, 2, 2), Mark::O);
        }
        board.apply(Pos::new(0, 0, 0), Mark::X);
        board.apply(Pos::new(1, 0, 0), Mark::X);

        let mut engine = AIEngine::with_config(SearchConfig::new(2).unwrap()).unwrap();
        let result = engine.get_move_with_stats(&board, Mark::O);

        assert_eq!(result.best_move, Some(Pos::new(3, 2, 2)));
        assert_eq!(result.score, 10_000.0);
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let mut board = Board::new();
        for row in 0..3 {
            board.apply(Pos::new(3, row, 3), Mark::X);
        }
        board.apply(Pos::new(1, 1, 1), Mark::O);

        let mut engine = AIEngine::with_config(SearchConfig::new(2).unwrap()).unwrap();
        assert_eq!(engine.get_move(&board, Mark::O), Some(Pos::new(3, 3, 3)));
    }

    #[test]
    fn test_engine_full_board() {
        let mut engine = AIEngine::new();
        let result = engine.get_move_with_stats(&drawn_board(), Mark::X);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_free_function_matches_engine() {
        let mut board = Board::new();
        board.apply(Pos::new(1, 1, 1), Mark::X);
        board.apply(Pos::new(2, 2, 2), Mark::O);
        board.apply(Pos::new(0, 0, 0), Mark::X);

        let config = SearchConfig::new(2)
            .unwrap()
            .with_heuristic(HeuristicKind::Simple)
            .with_verbose(true);
        let direct = best_move(&board, Mark::O, &config);
        let mut engine = AIEngine::with_config(config).unwrap();
        let wrapped = engine.get_move_with_stats(&board, Mark::O);

        assert_eq!(direct.best_move, wrapped.best_move);
        assert_eq!(direct.score, wrapped.score);
        assert_eq!(direct.stats.nodes_explored, wrapped.stats.nodes_explored);
    }

    #[test]
    fn test_concurrent_searches_are_independent() {
        let mut board = Board::new();
        board.apply(Pos::new(0, 1, 2), Mark::X);
        let config = SearchConfig::new(2).unwrap();
        let expected = best_move(&board, Mark::O, &config);

        let handles: Vec<_> = (0..2)
            .map(|_| {
                let board = board.clone();
                std::thread::spawn(move || best_move(&board, Mark::O, &config))
            })
            .collect();
        for handle in handles {
            let result = handle.join().unwrap();
            assert_eq!(result.best_move, expected.best_move);
            assert_eq!(result.score, expected.score);
            assert_eq!(result.stats.nodes_explored, expected.stats.nodes_explored);
        }
    }
}
