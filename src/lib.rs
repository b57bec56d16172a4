//! Cubic AI Engine: 4x4x4 three-dimensional tic-tac-toe
//!
//! A minimax game engine for Qubic-style 3D tic-tac-toe:
//! - 64 cells in four stacked 4x4 layers
//! - 76 winning lines (rows, columns, pillars and diagonals)
//! - Two players, X and O, alternate; a full board without a line is a draw
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Line catalog and win/draw detection
//! - [`eval`]: Static position evaluation (none / simple / advanced)
//! - [`search`]: Minimax with alpha-beta, transposition table and move reduction
//! - [`engine`]: `best_move` entry point and the `AIEngine` wrapper
//! - [`config`]: Search options
//!
//! # Quick Start
//!
//! ```
//! use cubic::{AIEngine, Board, Mark, Pos, SearchConfig};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::with_config(SearchConfig::new(2).unwrap()).unwrap();
//!
//! board.apply(Pos::new(1, 1, 1), Mark::X);
//!
//! // AI responds as O
//! if let Some(pos) = engine.get_move(&board, Mark::O) {
//!     board.apply(pos, Mark::O);
//!     println!("AI plays at {pos}");
//! }
//! ```
//!
//! # Search Options
//!
//! Every optimisation is an independent switch on [`SearchConfig`]:
//! 1. Alpha-beta pruning (exact, only saves work)
//! 2. Transposition table (exact, only saves work)
//! 3. Symmetry reduction (one cell per orbit of the cube's symmetries)
//! 4. Heuristic reduction (keeps the better half of the moves, approximate)

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Pos, BOARD_SIZE};
pub use config::SearchConfig;
pub use engine::{best_move, AIEngine};
pub use error::{ConfigError, GameError};
pub use eval::HeuristicKind;
pub use rules::GameStatus;
pub use search::{SearchResult, SearchStats};
