//! Scoring weights for Cubic evaluation
//!
//! All weights are fixed constants.

use crate::board::Pos;

/// Line and position weights used by the evaluators
pub struct LineScore;

impl LineScore {
    // Terminal scores
    /// Root player has completed a line
    pub const WIN: f64 = 10_000.0;
    /// Opponent has completed a line
    pub const LOSS: f64 = -10_000.0;
    /// Full board, no line
    pub const DRAW: f64 = 0.0;

    /// Three marks and one empty cell: immediate threat
    pub const THREE: f64 = 500.0;
    /// Two marks, two empty cells
    pub const TWO: f64 = 50.0;
    /// One mark, three empty cells
    pub const ONE: f64 = 5.0;
    /// Opponent threats weigh more than our own
    pub const BLOCK_FACTOR: f64 = 1.2;
    /// Per central cell held
    pub const CENTER: f64 = 10.0;
}

/// The 8 cells at the heart of the cube (all coordinates in 1..=2)
pub fn center_cells() -> [Pos; 8] {
    [
        Pos::new(1, 1, 1),
        Pos::new(1, 1, 2),
        Pos::new(1, 2, 1),
        Pos::new(1, 2, 2),
        Pos::new(2, 1, 1),
        Pos::new(2, 1, 2),
        Pos::new(2, 2, 1),
        Pos::new(2, 2, 2),
    ]
}

/// Advanced score for a line open to one side (no opposing marks).
///
/// `own` marks of the side and `empty` cells; returns 0 for anything that
/// isn't a 3/1, 2/2 or 1/3 split.
#[inline]
pub fn open_line_score(own: u32, empty: u32) -> f64 {
    match (own, empty) {
        (3, 1) => LineScore::THREE,
        (2, 2) => LineScore::TWO,
        (1, 3) => LineScore::ONE,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_line_score() {
        assert_eq!(open_line_score(3, 1), 500.0);
        assert_eq!(open_line_score(2, 2), 50.0);
        assert_eq!(open_line_score(1, 3), 5.0);
        assert_eq!(open_line_score(0, 4), 0.0);
        assert_eq!(open_line_score(4, 0), 0.0);
    }

    #[test]
    fn test_center_cells_are_inner() {
        for pos in center_cells() {
            assert!(pos.coords().iter().all(|&c| c == 1 || c == 2));
        }
    }
}
