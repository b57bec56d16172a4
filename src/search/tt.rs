//! Transposition Table for caching search results
//!
//! The transposition table stores node scores keyed by board contents,
//! enabling reuse of a previous result when the same position is reached
//! through a different move order.
//!
//! A table lives for one `best_move` call and is cleared at the start of
//! the next one.
//!
//! # Example
//!
//! ```
//! use cubic::board::Board;
//! use cubic::search::{EntryType, TranspositionTable};
//!
//! let mut tt = TranspositionTable::new();
//! let key = Board::new().key();
//!
//! tt.store(key, 3, 42.0, EntryType::Exact);
//! assert_eq!(tt.probe(key, 2, f64::NEG_INFINITY, f64::INFINITY), Some(42.0));
//! // a shallower result never answers a deeper query
//! assert_eq!(tt.probe(key, 4, f64::NEG_INFINITY, f64::INFINITY), None);
//! ```

use std::collections::HashMap;

use crate::board::BoardKey;

/// Entry type for score interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// Exact score - the node was searched with an open window
    Exact,
    /// Lower bound - true score >= stored value (beta cutoff)
    LowerBound,
    /// Upper bound - true score <= stored value (alpha fail-low)
    UpperBound,
}

/// Transposition table entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TTEntry {
    /// Remaining depth the score was computed at
    pub depth: u32,
    /// Score from the root player's perspective
    pub score: f64,
    /// Type of score (exact, lower bound, upper bound)
    pub entry_type: EntryType,
}

/// Transposition table keyed by board contents.
#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<BoardKey, TTEntry>,
    probes: u64,
    hits: u64,
}

impl TranspositionTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe the table for a position.
    ///
    /// Returns the stored score only if it was computed at least as deep as
    /// `depth` and its bound type is conclusive for the `(alpha, beta)` window.
    pub fn probe(&mut self, key: BoardKey, depth: u32, alpha: f64, beta: f64) -> Option<f64> {
        self.probes += 1;
        let entry = self.entries.get(&key)?;

        if entry.depth < depth {
            return None;
        }

        let usable = match entry.entry_type {
            EntryType::Exact => true,
            EntryType::LowerBound => entry.score >= beta,
            EntryType::UpperBound => entry.score <= alpha,
        };

        if usable {
            self.hits += 1;
            Some(entry.score)
        } else {
            None
        }
    }

    /// Store a position in the table.
    ///
    /// Replaces an existing entry for the same key unless that entry was
    /// searched deeper.
    pub fn store(&mut self, key: BoardKey, depth: u32, score: f64, entry_type: EntryType) {
        let new_entry = TTEntry {
            depth,
            score,
            entry_type,
        };

        self.entries
            .entry(key)
            .and_modify(|e| {
                if e.depth <= depth {
                    *e = new_entry;
                }
            })
            .or_insert(new_entry);
    }

    /// Look up the raw entry for a key
    pub fn get(&self, key: BoardKey) -> Option<&TTEntry> {
        self.entries.get(&key)
    }

    /// Clear all entries and counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.probes = 0;
        self.hits = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get statistics about table usage.
    #[must_use]
    pub fn stats(&self) -> TTStats {
        TTStats {
            entries: self.entries.len(),
            probes: self.probes,
            hits: self.hits,
        }
    }
}

/// Statistics about transposition table usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TTStats {
    /// Positions currently stored
    pub entries: usize,
    /// Lookups since the last clear
    pub probes: u64,
    /// Lookups that returned a usable score
    pub hits: u64,
}

impl TTStats {
    /// Hit rate in percent
    pub fn hit_rate(&self) -> f64 {
        if self.probes == 0 {
            0.0
        } else {
            self.hits as f64 / self.probes as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Mark, Pos};

    const INF: f64 = f64::INFINITY;

    fn key_after(idx: usize) -> BoardKey {
        let mut board = Board::new();
        board.apply(Pos::from_index(idx), Mark::X);
        board.key()
    }

    #[test]
    fn test_store_and_probe() {
        let mut tt = TranspositionTable::new();
        let key = key_after(0);
        tt.store(key, 2, 12.5, EntryType::Exact);

        assert_eq!(tt.probe(key, 2, -INF, INF), Some(12.5));
        assert_eq!(tt.probe(key, 1, -INF, INF), Some(12.5));
        assert_eq!(tt.probe(key_after(1), 1, -INF, INF), None);
    }

    #[test]
    fn test_shallow_entry_not_trusted() {
        let mut tt = TranspositionTable::new();
        let key = key_after(5);
        tt.store(key, 1, 7.0, EntryType::Exact);
        assert_eq!(tt.probe(key, 2, -INF, INF), None);
    }

    #[test]
    fn test_bounds_respect_window() {
        let mut tt = TranspositionTable::new();
        let lower = key_after(0);
        let upper = key_after(1);
        tt.store(lower, 3, 50.0, EntryType::LowerBound);
        tt.store(upper, 3, -50.0, EntryType::UpperBound);

        // lower bound only answers when it already fails high
        assert_eq!(tt.probe(lower, 3, 0.0, 40.0), Some(50.0));
        assert_eq!(tt.probe(lower, 3, 0.0, 60.0), None);
        // upper bound only answers when it already fails low
        assert_eq!(tt.probe(upper, 3, -40.0, 0.0), Some(-50.0));
        assert_eq!(tt.probe(upper, 3, -60.0, 0.0), None);
    }

    #[test]
    fn test_deeper_entry_kept() {
        let mut tt = TranspositionTable::new();
        let key = key_after(9);
        tt.store(key, 3, 1.0, EntryType::Exact);
        tt.store(key, 1, 2.0, EntryType::Exact);
        assert_eq!(tt.get(key).map(|e| e.score), Some(1.0));

        tt.store(key, 3, 3.0, EntryType::Exact);
        assert_eq!(tt.get(key).map(|e| e.score), Some(3.0));
        tt.store(key, 4, 4.0, EntryType::Exact);
        assert_eq!(tt.get(key).map(|e| e.depth), Some(4));
    }

    #[test]
    fn test_clear_and_stats() {
        let mut tt = TranspositionTable::new();
        let key = key_after(2);
        tt.store(key, 1, 0.0, EntryType::Exact);
        let _ = tt.probe(key, 1, -INF, INF);
        let _ = tt.probe(key_after(3), 1, -INF, INF);

        let stats = tt.stats();
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.probes, 2);
        assert_eq!(stats.hits, 1);
        assert!((stats.hit_rate() - 50.0).abs() < 1e-9);

        tt.clear();
        assert!(tt.is_empty());
        assert_eq!(tt.stats(), TTStats::default());
    }
}
