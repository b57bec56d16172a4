//! Heuristic move reduction
//!
//! Orders candidates by the static score of the position each one produces
//! (from the mover's perspective) and keeps only the best part of the list.
//! This prunes unlikely moves and may miss the true minimax choice.

use std::cmp::Ordering;

use crate::board::{Board, Mark, Pos};
use crate::eval::{evaluate, HeuristicKind};

/// Fewest candidates kept after reduction
pub const MIN_KEPT_MOVES: usize = 5;

/// Number of candidates kept out of `n`: half, but at least
/// `MIN_KEPT_MOVES`, never more than `n`.
#[inline]
pub fn kept_count(n: usize) -> usize {
    (n / 2).max(MIN_KEPT_MOVES).min(n)
}

/// Keep the highest-scoring candidates for `player`, best first.
///
/// Candidates with equal scores keep their input order.
/// `HeuristicKind::None` gives no ordering information, so the advanced
/// evaluator is used in its place.
pub fn heuristic_reduce(board: &Board, moves: Vec<Pos>, player: Mark, kind: HeuristicKind) -> Vec<Pos> {
    let kind = if kind.is_enabled() { kind } else { HeuristicKind::Advanced };
    let keep = kept_count(moves.len());

    let mut scored: Vec<(Pos, f64)> = moves
        .into_iter()
        .map(|mov| {
            let mut child = board.clone();
            child.apply(mov, player);
            (mov, evaluate(&child, player, kind))
        })
        .collect();

    // stable: ties stay in input order
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scored.truncate(keep);
    scored.into_iter().map(|(mov, _)| mov).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kept_count() {
        assert_eq!(kept_count(64), 32);
        assert_eq!(kept_count(11), 5);
        assert_eq!(kept_count(6), 5);
        assert_eq!(kept_count(3), 3);
        assert_eq!(kept_count(0), 0);
    }

    #[test]
    fn test_reduces_empty_board_to_half() {
        let board = Board::new();
        let kept = heuristic_reduce(&board, board.legal_moves(), Mark::X, HeuristicKind::Advanced);
        assert_eq!(kept.len(), 32);
        // central cells score highest and come first, in index order
        let first: Vec<usize> = kept[..8].iter().map(|p| p.to_index()).collect();
        assert_eq!(first, vec![21, 22, 25, 26, 37, 38, 41, 42]);
    }

    #[test]
    fn test_small_lists_kept_whole() {
        let board = Board::new();
        let moves: Vec<Pos> = [0, 1, 2].into_iter().map(Pos::from_index).collect();
        let kept = heuristic_reduce(&board, moves, Mark::O, HeuristicKind::Simple);
        assert_eq!(kept.len(), 3);
    }

    #[test]
    fn test_winning_move_first() {
        let mut board = Board::new();
        for idx in [0, 1, 2] {
            board.apply(Pos::from_index(idx), Mark::X);
        }
        let moves: Vec<Pos> = [5, 3, 40, 63, 20, 9].into_iter().map(Pos::from_index).collect();
        let kept = heuristic_reduce(&board, moves, Mark::X, HeuristicKind::None);
        assert_eq!(kept.len(), 5);
        assert_eq!(kept[0], Pos::from_index(3));
    }
}
