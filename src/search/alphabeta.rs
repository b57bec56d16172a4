//! Minimax search with optional alpha-beta pruning and transposition table
//!
//! This module implements the core search algorithm for the Cubic AI.
//! The root player always maximizes; scores are from its perspective at
//! every ply.
//!
//! # Features
//!
//! - Fixed-depth minimax, no time cutoff
//! - Alpha-beta pruning that never changes the chosen move or score
//! - Transposition table with bound flags, cleared per call
//! - Symmetry and heuristic move reduction, applied at every ply
//!
//! # Example
//!
//! ```
//! use cubic::board::{Board, Mark};
//! use cubic::config::SearchConfig;
//! use cubic::search::Searcher;
//!
//! let config = SearchConfig::new(1).unwrap();
//! let mut searcher = Searcher::new(config);
//! let board = Board::new();
//!
//! let result = searcher.best_move(&board, Mark::X);
//! assert!(result.best_move.is_some());
//! assert_eq!(result.stats.nodes_explored, 64);
//! ```

use std::fmt;
use std::time::{Duration, Instant};

use log::trace;

use crate::board::{Board, Mark, Pos};
use crate::config::SearchConfig;
use crate::eval::{evaluate, terminal_score, HeuristicKind};
use crate::rules::LineCatalog;

use super::reduce::heuristic_reduce;
use super::symmetry::SymmetryCache;
use super::tt::{EntryType, TranspositionTable};

/// Infinity score for alpha-beta bounds
const INF: f64 = f64::INFINITY;

/// Counters and settings reported for one search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchStats {
    /// Nodes entered below the root, including cache hits
    pub nodes_explored: u64,
    /// Candidates skipped by alpha-beta cutoffs
    pub nodes_pruned: u64,
    /// Transposition lookups that returned a usable score
    pub tt_hits: u64,
    /// Share of transposition lookups that hit, in percent
    pub tt_hit_rate: f64,
    /// Reduced move sets answered from the symmetry cache
    pub symmetry_hits: u64,
    pub elapsed: Duration,
    pub depth: u32,
    pub heuristic: HeuristicKind,
    pub alpha_beta: bool,
    pub transposition: bool,
    pub symmetry_reduction: bool,
    pub heuristic_reduction: bool,
}

impl SearchStats {
    /// Zeroed counters for the given configuration
    pub fn empty(config: &SearchConfig) -> Self {
        Self {
            nodes_explored: 0,
            nodes_pruned: 0,
            tt_hits: 0,
            tt_hit_rate: 0.0,
            symmetry_hits: 0,
            elapsed: Duration::ZERO,
            depth: config.depth,
            heuristic: config.heuristic,
            alpha_beta: config.alpha_beta,
            transposition: config.transposition,
            symmetry_reduction: config.symmetry_reduction,
            heuristic_reduction: config.heuristic_reduction,
        }
    }

    /// The configuration these statistics were produced with
    pub fn config(&self) -> SearchConfig {
        SearchConfig {
            depth: self.depth,
            heuristic: self.heuristic,
            alpha_beta: self.alpha_beta,
            transposition: self.transposition,
            symmetry_reduction: self.symmetry_reduction,
            heuristic_reduction: self.heuristic_reduction,
            verbose: false,
        }
    }

    pub fn algorithm_name(&self) -> String {
        self.config().algorithm_name()
    }

    /// Share of candidate nodes cut off: pruned / (explored + pruned)
    pub fn pruning_ratio(&self) -> f64 {
        let total = self.nodes_explored + self.nodes_pruned;
        if total == 0 {
            0.0
        } else {
            self.nodes_pruned as f64 / total as f64
        }
    }

    /// Elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | depth {} | {} heuristic | nodes {} | pruned {} | tt hits {} | {:.1}ms",
            self.algorithm_name(),
            self.depth,
            self.heuristic,
            self.nodes_explored,
            self.nodes_pruned,
            self.tt_hits,
            self.elapsed_ms(),
        )
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Best move found, `None` when there are no legal moves
    pub best_move: Option<Pos>,
    /// Score of the best move from the searching player's perspective
    pub score: f64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Fixed-depth minimax searcher.
///
/// Owns its transposition table and symmetry cache. Both are reset at the
/// start of every [`Searcher::best_move`] call, so a searcher can be reused
/// but never leaks results between calls. Independent searchers share
/// nothing mutable and can run on different threads.
pub struct Searcher {
    config: SearchConfig,
    catalog: &'static LineCatalog,
    tt: TranspositionTable,
    symmetry: SymmetryCache,
    nodes: u64,
    pruned: u64,
}

impl Searcher {
    /// Create a searcher for the given configuration.
    ///
    /// The configuration is expected to be validated; a depth of 0 is
    /// searched as depth 1.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            catalog: LineCatalog::shared(),
            tt: TranspositionTable::new(),
            symmetry: SymmetryCache::new(),
            nodes: 0,
            pruned: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find the best move for `player` on `board`.
    ///
    /// # Panics
    ///
    /// Panics if `player` is `Mark::Empty`.
    pub fn best_move(&mut self, board: &Board, player: Mark) -> SearchResult {
        assert!(player != Mark::Empty, "search needs a player to move");

        self.reset();
        let start = Instant::now();
        let depth = self.config.depth.max(1);

        let moves = self.candidate_moves(board, player);
        if moves.is_empty() {
            return SearchResult {
                best_move: None,
                score: 0.0,
                stats: SearchStats::empty(&self.config),
            };
        }

        let mut best_move = None;
        let mut best_score = -INF;
        let mut alpha = -INF;

        for mov in moves {
            let mut child = board.clone();
            child.apply(mov, player);

            let score = self.search(&child, depth - 1, alpha, INF, false, player);

            // first move to reach a new maximum keeps ties
            if best_move.is_none() || score > best_score {
                best_score = score;
                best_move = Some(mov);
            }
            if self.config.alpha_beta {
                alpha = alpha.max(best_score);
            }
        }

        SearchResult {
            best_move,
            score: best_score,
            stats: self.stats(start.elapsed()),
        }
    }

    /// Clear per-call caches and counters
    fn reset(&mut self) {
        trace!(
            "Resetting search caches ({} tt entries, {} symmetry sets)",
            self.tt.len(),
            self.symmetry.len()
        );
        self.tt.clear();
        self.symmetry.clear();
        self.nodes = 0;
        self.pruned = 0;
    }

    fn stats(&self, elapsed: Duration) -> SearchStats {
        let tt = self.tt.stats();
        SearchStats {
            nodes_explored: self.nodes,
            nodes_pruned: self.pruned,
            tt_hits: tt.hits,
            tt_hit_rate: tt.hit_rate(),
            symmetry_hits: self.symmetry.hits(),
            elapsed,
            ..SearchStats::empty(&self.config)
        }
    }

    /// Candidates for `player`, after the configured reductions
    fn candidate_moves(&mut self, board: &Board, player: Mark) -> Vec<Pos> {
        let moves = if self.config.symmetry_reduction {
            self.symmetry.reduce(board)
        } else {
            board.legal_moves()
        };

        if self.config.heuristic_reduction {
            let before = moves.len();
            let kept = heuristic_reduce(board, moves, player, self.config.heuristic);
            trace!("Heuristic reduction kept {}/{} moves", kept.len(), before);
            kept
        } else {
            moves
        }
    }

    /// Score `board` to `depth` more plies, from `root`'s perspective.
    fn search(&mut self, board: &Board, depth: u32, mut alpha: f64, mut beta: f64, maximizing: bool, root: Mark) -> f64 {
        self.nodes += 1;

        let key = board.key();
        if self.config.transposition {
            if let Some(score) = self.tt.probe(key, depth, alpha, beta) {
                return score;
            }
        }

        let (score, entry_type) = if let Some(terminal) = terminal_score(self.catalog, board, root) {
            (terminal, EntryType::Exact)
        } else if depth == 0 {
            (self.leaf_score(board, root), EntryType::Exact)
        } else {
            let alpha_orig = alpha;
            let beta_orig = beta;
            let mover = if maximizing { root } else { root.opponent() };
            let moves = self.candidate_moves(board, mover);

            let mut best = if maximizing { -INF } else { INF };
            for (i, &mov) in moves.iter().enumerate() {
                let mut child = board.clone();
                child.apply(mov, mover);

                let value = self.search(&child, depth - 1, alpha, beta, !maximizing, root);

                if maximizing {
                    best = best.max(value);
                    if self.config.alpha_beta {
                        alpha = alpha.max(value);
                    }
                } else {
                    best = best.min(value);
                    if self.config.alpha_beta {
                        beta = beta.min(value);
                    }
                }

                if self.config.alpha_beta && beta <= alpha {
                    self.pruned += (moves.len() - i - 1) as u64;
                    break;
                }
            }

            if moves.is_empty() {
                // a non-terminal board always has a move; score it as a leaf
                (self.leaf_score(board, root), EntryType::Exact)
            } else if best <= alpha_orig {
                (best, EntryType::UpperBound)
            } else if best >= beta_orig {
                (best, EntryType::LowerBound)
            } else {
                (best, EntryType::Exact)
            }
        };

        if self.config.transposition {
            self.tt.store(key, depth, score, entry_type);
        }

        score
    }

    /// Depth-limited leaf value
    #[inline]
    fn leaf_score(&self, board: &Board, root: Mark) -> f64 {
        if self.config.heuristic.is_enabled() {
            evaluate(board, root, self.config.heuristic)
        } else {
            0.0
        }
    }
}
