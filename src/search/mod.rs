//! Search module for Cubic AI
//!
//! Contains:
//! - Transposition table for caching search results
//! - Cube symmetries and symmetry-based move reduction
//! - Heuristic move reduction
//! - Minimax search with alpha-beta pruning

pub mod alphabeta;
pub mod reduce;
pub mod symmetry;
pub mod tt;

pub use alphabeta::{SearchResult, SearchStats, Searcher};
pub use reduce::{heuristic_reduce, kept_count};
pub use symmetry::{orbit, orbit_id, representatives, Symmetry, SymmetryCache};
pub use tt::{EntryType, TTEntry, TTStats, TranspositionTable};
