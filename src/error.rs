//! Error types

use crate::board::Pos;

/// Errors raised while building a search configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("search depth must be at least 1 (got {0})")]
    InvalidDepth(u32),

    #[error("unknown heuristic '{0}' (expected none, simple or advanced)")]
    UnknownHeuristic(String),
}

/// Errors raised when a player tries to move in an interactive game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("game is over")]
    GameOver,

    #[error("cell {0} is already occupied")]
    Occupied(Pos),

    #[error("not your turn")]
    NotYourTurn,

    #[error("AI is thinking")]
    AiThinking,
}
