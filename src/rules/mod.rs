//! Game rules for 4x4x4 Cubic
//!
//! This module implements:
//! - Winning line enumeration (76 lines)
//! - Win / draw detection

pub mod lines;
pub mod win;

// Re-exports for convenient access
pub use lines::{Line, LineCatalog, LINE_COUNT};
pub use win::{game_status, is_terminal, winner, winning_line, GameStatus};
