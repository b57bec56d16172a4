//! Board representation for 4x4x4 Cubic

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, BoardKey};

/// Cells along each edge of the cube
pub const BOARD_SIZE: usize = 4;
pub const LAYER_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 16
pub const TOTAL_CELLS: usize = LAYER_CELLS * BOARD_SIZE; // 64

/// Cell contents / player marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    /// Get opponent mark
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }

    /// Single-character symbol used by text renderings
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => '.',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Position in the cube
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub layer: u8,
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(layer: u8, row: u8, col: u8) -> Self {
        assert!(
            (layer as usize) < BOARD_SIZE && (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE,
            "cell ({layer}, {row}, {col}) is outside the cube"
        );
        Self { layer, row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.layer as usize * LAYER_CELLS + self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        assert!(idx < TOTAL_CELLS, "cell index {idx} is outside the cube");
        Self {
            layer: (idx / LAYER_CELLS) as u8,
            row: ((idx % LAYER_CELLS) / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    /// All 64 cells in ascending index order
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..TOTAL_CELLS).map(Pos::from_index)
    }

    /// Coordinates as an array `[layer, row, col]`
    #[inline]
    pub fn coords(self) -> [u8; 3] {
        [self.layer, self.row, self.col]
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "L{} R{} C{}", self.layer, self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
