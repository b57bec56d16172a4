//! Board structure with move history

use super::bitboard::Bitboard;
use super::{Mark, Pos, TOTAL_CELLS};

/// Game board: one bitboard per player plus the order moves were played in.
///
/// A cell never changes once marked, so `history.len()` always equals the
/// number of marked cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// X marks bitboard
    pub x: Bitboard,
    /// O marks bitboard
    pub o: Bitboard,
    /// Cells in play order
    history: Vec<Pos>,
}

/// Fixed-width key identifying board contents (move order excluded).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardKey {
    pub x: u64,
    pub o: u64,
}

impl Board {
    pub fn new() -> Self {
        Self {
            x: Bitboard::new(),
            o: Bitboard::new(),
            history: Vec::with_capacity(TOTAL_CELLS),
        }
    }

    /// Get mark at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        if self.x.get(pos) {
            Mark::X
        } else if self.o.get(pos) {
            Mark::O
        } else {
            Mark::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.x.get(pos) && !self.o.get(pos)
    }

    /// Mark a cell for `mark`.
    ///
    /// Applying to an occupied cell (or with `Mark::Empty`) is a silent no-op;
    /// callers that need strict validation check `is_empty` or `legal_moves` first.
    #[inline]
    pub fn apply(&mut self, pos: Pos, mark: Mark) {
        if !self.is_empty(pos) {
            return;
        }
        match mark {
            Mark::X => self.x.set(pos),
            Mark::O => self.o.set(pos),
            Mark::Empty => return,
        }
        self.history.push(pos);
    }

    /// Empty cells in ascending index order
    pub fn legal_moves(&self) -> Vec<Pos> {
        self.occupied().iter_zeros().collect()
    }

    /// Check if every cell is marked
    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupied().is_full()
    }

    /// Union of both players' marks
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.x.union(self.o)
    }

    /// Get bitboard for a mark (returns None for Empty)
    #[inline]
    pub fn marks(&self, mark: Mark) -> Option<&Bitboard> {
        match mark {
            Mark::X => Some(&self.x),
            Mark::O => Some(&self.o),
            Mark::Empty => None,
        }
    }

    /// Number of moves made
    #[inline]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Cells in the order they were marked
    pub fn history(&self) -> &[Pos] {
        &self.history
    }

    /// Most recent move, if any
    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().copied()
    }

    /// Content key for caching
    #[inline]
    pub fn key(&self) -> BoardKey {
        BoardKey {
            x: self.x.bits(),
            o: self.o.bits(),
        }
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Build a board from four layer diagrams of four rows each.
    ///
    /// `X` and `O` mark cells, anything else is empty. History follows
    /// ascending cell index, so this is meant for fixtures, not replays.
    pub fn from_layers(layers: [[&str; 4]; 4]) -> Self {
        let mut board = Self::new();
        for (l, rows) in layers.iter().enumerate() {
            for (r, row) in rows.iter().enumerate() {
                for (c, ch) in row.chars().take(4).enumerate() {
                    let mark = match ch {
                        'X' | 'x' => Mark::X,
                        'O' | 'o' => Mark::O,
                        _ => continue,
                    };
                    board.apply(Pos::new(l as u8, r as u8, c as u8), mark);
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..4u8 {
            for layer in 0..4u8 {
                if layer > 0 {
                    write!(f, "   ")?;
                }
                for col in 0..4u8 {
                    write!(f, "{}", self.get(Pos::new(layer, row, col)))?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
