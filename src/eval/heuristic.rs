//! Static evaluation of Cubic positions
//!
//! Scores a position from one player's perspective. Terminal positions get
//! fixed scores; everything else is delegated to the configured strategy:
//! - `Simple`: squared mark counts on lines the other side has not touched
//! - `Advanced`: threat/shape weights per open line plus a center bonus
//! - `None`: every non-terminal position is neutral

use std::fmt;
use std::str::FromStr;

use crate::board::{Bitboard, Board, Mark};
use crate::error::ConfigError;
use crate::rules::LineCatalog;

use super::patterns::{center_cells, open_line_score, LineScore};

/// Leaf evaluation strategy, chosen once when the search is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeuristicKind {
    /// Depth-limited leaves score 0.0
    None,
    Simple,
    #[default]
    Advanced,
}

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 3] = [HeuristicKind::None, HeuristicKind::Simple, HeuristicKind::Advanced];

    pub fn name(self) -> &'static str {
        match self {
            HeuristicKind::None => "none",
            HeuristicKind::Simple => "simple",
            HeuristicKind::Advanced => "advanced",
        }
    }

    /// True unless depth-limited leaves are treated as neutral
    #[inline]
    pub fn is_enabled(self) -> bool {
        self != HeuristicKind::None
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HeuristicKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(HeuristicKind::None),
            "simple" => Ok(HeuristicKind::Simple),
            "advanced" => Ok(HeuristicKind::Advanced),
            other => Err(ConfigError::UnknownHeuristic(other.to_string())),
        }
    }
}

/// Evaluate the board from the perspective of `player`.
///
/// Returns `LineScore::WIN` if `player` owns a complete line,
/// `LineScore::LOSS` if the opponent does, `LineScore::DRAW` on a full
/// board, and otherwise the strategy score (positive favours `player`).
#[must_use]
pub fn evaluate(board: &Board, player: Mark, kind: HeuristicKind) -> f64 {
    let catalog = LineCatalog::shared();

    if let Some(terminal) = terminal_score(catalog, board, player) {
        return terminal;
    }

    match kind {
        HeuristicKind::None => 0.0,
        HeuristicKind::Simple => simple_score(catalog, board, player),
        HeuristicKind::Advanced => advanced_score(catalog, board, player),
    }
}

/// Win / loss / draw score, or `None` while the game is still open
#[inline]
pub fn terminal_score(catalog: &LineCatalog, board: &Board, player: Mark) -> Option<f64> {
    match catalog.winner(board) {
        Some(mark) if mark == player => Some(LineScore::WIN),
        Some(_) => Some(LineScore::LOSS),
        None if board.is_full() => Some(LineScore::DRAW),
        None => None,
    }
}

/// Own and opposing bitboards for `player`
fn sides(board: &Board, player: Mark) -> (Bitboard, Bitboard) {
    match (board.marks(player), board.marks(player.opponent())) {
        (Some(own), Some(opp)) => (*own, *opp),
        _ => (Bitboard::new(), Bitboard::new()),
    }
}

/// Sum of squared counts over lines open to each side.
fn simple_score(catalog: &LineCatalog, board: &Board, player: Mark) -> f64 {
    let (own, opp) = sides(board, player);
    let mut player_score = 0u32;
    let mut opponent_score = 0u32;

    for line in catalog.lines() {
        let mine = own.overlap(line.mask);
        let theirs = opp.overlap(line.mask);

        if theirs == 0 && mine > 0 {
            player_score += mine * mine;
        }
        if mine == 0 && theirs > 0 {
            opponent_score += theirs * theirs;
        }
    }

    f64::from(player_score) - f64::from(opponent_score)
}

/// Threat-weighted line shapes plus center control.
fn advanced_score(catalog: &LineCatalog, board: &Board, player: Mark) -> f64 {
    let (own, opp) = sides(board, player);
    let mut score = 0.0;

    for line in catalog.lines() {
        let mine = own.overlap(line.mask);
        let theirs = opp.overlap(line.mask);
        let empty = 4 - mine - theirs;

        if theirs == 0 {
            score += open_line_score(mine, empty);
        }
        if mine == 0 {
            let threat = open_line_score(theirs, empty);
            score -= if theirs == 3 { threat * LineScore::BLOCK_FACTOR } else { threat };
        }
    }

    for pos in center_cells() {
        if own.get(pos) {
            score += LineScore::CENTER;
        } else if opp.get(pos) {
            score -= LineScore::CENTER;
        }
    }

    score
}
