//! Terminal-state detection
//!
//! A game ends when one player fills a line or the board is full.
//! When several lines are complete at once, the first in catalog order
//! is reported; scoring only cares that a winner exists.

use crate::board::{Board, Mark};

use super::lines::{Line, LineCatalog};

/// Classification of a position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    XWins,
    OWins,
    Draw,
    Ongoing,
}

impl GameStatus {
    /// Winning mark, if any
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::XWins => Some(Mark::X),
            GameStatus::OWins => Some(Mark::O),
            GameStatus::Draw | GameStatus::Ongoing => None,
        }
    }

    #[inline]
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }
}

impl LineCatalog {
    /// First complete line and its owner
    pub fn find_complete(&self, board: &Board) -> Option<(Mark, &Line)> {
        self.lines().iter().find_map(|line| {
            if board.x.contains_all(line.mask) {
                Some((Mark::X, line))
            } else if board.o.contains_all(line.mask) {
                Some((Mark::O, line))
            } else {
                None
            }
        })
    }

    /// Owner of the first complete line
    #[inline]
    pub fn winner(&self, board: &Board) -> Option<Mark> {
        self.find_complete(board).map(|(mark, _)| mark)
    }

    /// Cells of the first complete line
    pub fn winning_line(&self, board: &Board) -> Option<Line> {
        self.find_complete(board).map(|(_, line)| *line)
    }

    /// Won or full
    #[inline]
    pub fn is_terminal(&self, board: &Board) -> bool {
        board.is_full() || self.winner(board).is_some()
    }

    pub fn status(&self, board: &Board) -> GameStatus {
        match self.winner(board) {
            Some(Mark::X) => GameStatus::XWins,
            Some(Mark::O) => GameStatus::OWins,
            _ if board.is_full() => GameStatus::Draw,
            _ => GameStatus::Ongoing,
        }
    }
}

/// Owner of the first complete line, using the shared catalog
pub fn winner(board: &Board) -> Option<Mark> {
    LineCatalog::shared().winner(board)
}

/// First complete line, using the shared catalog
pub fn winning_line(board: &Board) -> Option<Line> {
    LineCatalog::shared().winning_line(board)
}

pub fn is_terminal(board: &Board) -> bool {
    LineCatalog::shared().is_terminal(board)
}

pub fn game_status(board: &Board) -> GameStatus {
    LineCatalog::shared().status(board)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::board::Pos;

    /// A full board without any complete line
    pub(crate) fn drawn_board() -> Board {
        Board::from_layers([
            ["OOOX", "XXXO", "XOXX", "OOOX"],
            ["XXOX", "XOXO", "XXOO", "OXXO"],
            ["XOOO", "XOXO", "OXXX", "XXXO"],
            ["XOXO", "OOOX", "XXOO", "OXOO"],
        ])
    }

    #[test]
    fn test_empty_board_ongoing() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
        assert_eq!(winning_line(&board), None);
        assert!(!is_terminal(&board));
        assert_eq!(game_status(&board), GameStatus::Ongoing);
    }

    #[test]
    fn test_row_win() {
        let mut board = Board::new();
        for col in 0..4 {
            board.apply(Pos::new(2, 1, col), Mark::X);
        }
        board.apply(Pos::new(0, 0, 0), Mark::O);

        assert_eq!(winner(&board), Some(Mark::X));
        assert!(is_terminal(&board));
        assert!(!board.is_full());
        assert_eq!(game_status(&board), GameStatus::XWins);
        let line = winning_line(&board).unwrap();
        assert_eq!(line.cells.map(Pos::to_index), [36, 37, 38, 39]);
    }

    #[test]
    fn test_pillar_win() {
        let mut board = Board::new();
        for layer in 0..4 {
            board.apply(Pos::new(layer, 3, 0), Mark::O);
        }
        assert_eq!(winner(&board), Some(Mark::O));
        assert_eq!(game_status(&board), GameStatus::OWins);
    }

    #[test]
    fn test_space_diagonal_win() {
        let mut board = Board::new();
        for i in 0..4 {
            board.apply(Pos::new(i, 3 - i, i), Mark::O);
        }
        assert_eq!(winner(&board), Some(Mark::O));
        assert_eq!(winning_line(&board).unwrap().describe(), "3D diagonal");
    }

    #[test]
    fn test_three_is_not_win() {
        let mut board = Board::new();
        for col in 0..3 {
            board.apply(Pos::new(0, 0, col), Mark::X);
        }
        board.apply(Pos::new(0, 0, 3), Mark::O);
        assert_eq!(winner(&board), None);
        assert_eq!(game_status(&board), GameStatus::Ongoing);
    }

    #[test]
    fn test_first_line_in_catalog_reported() {
        let mut board = Board::new();
        // complete a pillar (catalog index >= 32) and a row (index < 16)
        for layer in 0..4 {
            board.apply(Pos::new(layer, 3, 3), Mark::O);
        }
        for col in 0..4 {
            board.apply(Pos::new(1, 0, col), Mark::X);
        }
        assert_eq!(winner(&board), Some(Mark::X));
        assert_eq!(winning_line(&board).unwrap().describe(), "Layer 1");
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = drawn_board();
        assert!(board.is_full());
        assert_eq!(winner(&board), None);
        assert!(is_terminal(&board));
        assert_eq!(game_status(&board), GameStatus::Draw);
    }

    #[test]
    fn test_winner_has_complete_line() {
        let mut board = Board::new();
        for (i, pos) in Pos::all().enumerate() {
            board.apply(pos, if (i / 3) % 2 == 0 { Mark::X } else { Mark::O });
            if let Some(mark) = winner(&board) {
                let line = winning_line(&board).unwrap();
                assert!(line.cells.iter().all(|&p| board.get(p) == mark));
                return;
            }
        }
        panic!("a dense fill should complete some line");
    }

    #[test]
    fn test_status_winner_accessor() {
        assert_eq!(GameStatus::XWins.winner(), Some(Mark::X));
        assert_eq!(GameStatus::Draw.winner(), None);
        assert!(GameStatus::Draw.is_over());
        assert!(!GameStatus::Ongoing.is_over());
    }
}
