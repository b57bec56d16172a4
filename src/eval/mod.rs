//! Evaluation module for Cubic positions
//!
//! This module provides static scoring of board positions.
//! The evaluation considers:
//! - Terminal states (win, loss, draw)
//! - Open lines for each side
//! - Center control (advanced strategy only)

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, terminal_score, HeuristicKind};
pub use patterns::{center_cells, LineScore};
