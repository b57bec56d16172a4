//! Game state management for the Cubic GUI

use crate::board::{Board, Mark, Pos};
use crate::config::SearchConfig;
use crate::engine::best_move;
use crate::error::GameError;
use crate::rules::{GameStatus, Line, LineCatalog};
use crate::search::SearchResult;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

/// Deepest search the settings panel offers
pub const MAX_UI_DEPTH: u32 = 5;

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human: Mark },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human: Mark::X }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<SearchResult>,
        start_time: Instant,
    },
}

/// Finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub status: GameStatus,
    pub winning_line: Option<Line>,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Mark,
    pub game_over: Option<GameResult>,
    pub last_ai_result: Option<SearchResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,
    /// Options used for AI moves and hints
    pub config: SearchConfig,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self::with_config(mode, SearchConfig::default())
    }

    pub fn with_config(mode: GameMode, config: SearchConfig) -> Self {
        Self {
            board: Board::new(),
            mode,
            current_turn: Mark::X,
            game_over: None,
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            config,
        }
    }

    /// Start over in the same mode, keeping the AI settings
    pub fn reset(&mut self) {
        *self = Self::with_config(self.mode, self.config);
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.current_turn == human,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.current_turn != human,
            GameMode::PvP => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    pub fn move_count(&self) -> usize {
        self.board.move_count()
    }

    /// Attempt to place the current player's mark at `pos`
    pub fn try_place(&mut self, pos: Pos) -> Result<(), GameError> {
        if self.game_over.is_some() {
            return Err(GameError::GameOver);
        }
        if self.is_ai_thinking() {
            return Err(GameError::AiThinking);
        }
        if !self.is_human_turn() {
            return Err(GameError::NotYourTurn);
        }
        if !self.board.is_empty(pos) {
            return Err(GameError::Occupied(pos));
        }

        self.execute_move(pos);
        Ok(())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) {
        let mark = self.current_turn;
        self.board.apply(pos, mark);
        self.suggested_move = None;
        self.move_timer.stop();

        let catalog = LineCatalog::shared();
        let status = catalog.status(&self.board);
        if status.is_over() {
            log::info!("Game over after {} moves: {:?}", self.board.move_count(), status);
            self.game_over = Some(GameResult {
                status,
                winning_line: catalog.winning_line(&self.board),
            });
            return;
        }

        self.current_turn = mark.opponent();
        self.move_timer.start();
        self.message = None;
    }

    /// Start AI thinking on a background thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let board = self.board.clone();
        let mark = self.current_turn;
        let config = self.config;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = best_move(&board, mark, &config);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((search_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.move_timer.set_ai_time(elapsed);
            let chosen = search_result.best_move;
            self.last_ai_result = Some(search_result);

            match chosen {
                Some(pos) if self.board.is_empty(pos) => self.execute_move(pos),
                _ => self.message = Some("AI could not find a move".to_string()),
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Request move suggestion for PvP mode
    pub fn request_suggestion(&mut self) {
        if self.game_over.is_some() || self.is_ai_thinking() {
            return;
        }

        let result = best_move(&self.board, self.current_turn, &self.config);
        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }

    /// Undo last move (last two against the AI)
    pub fn undo(&mut self) {
        if self.board.is_board_empty() || self.is_ai_thinking() {
            return;
        }

        let undo_count = match self.mode {
            GameMode::PvE { human } => {
                // back to the latest position with the human to move
                let count = self.board.move_count();
                let human_to_move = |moves: usize| (moves % 2 == 0) == (human == Mark::X);
                match (1..=count).find(|&drop| human_to_move(count - drop)) {
                    Some(drop) => drop,
                    None => return,
                }
            }
            GameMode::PvP => 1,
        };

        let keep = self.board.move_count().saturating_sub(undo_count);
        let moves: Vec<Pos> = self.board.history()[..keep].to_vec();

        self.board = Board::new();
        self.current_turn = Mark::X;
        for pos in moves {
            self.board.apply(pos, self.current_turn);
            self.current_turn = self.current_turn.opponent();
        }

        self.game_over = None;
        self.suggested_move = None;
        self.message = None;
        self.move_timer.start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pvp() -> GameState {
        GameState::with_config(GameMode::PvP, SearchConfig::new(1).unwrap())
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = pvp();
        assert_eq!(state.current_turn, Mark::X);
        state.try_place(Pos::new(0, 0, 0)).unwrap();
        assert_eq!(state.current_turn, Mark::O);
        assert_eq!(state.board.get(Pos::new(0, 0, 0)), Mark::X);
    }

    #[test]
    fn test_occupied_rejected() {
        let mut state = pvp();
        let pos = Pos::new(1, 2, 3);
        state.try_place(pos).unwrap();
        assert_eq!(state.try_place(pos), Err(GameError::Occupied(pos)));
        assert_eq!(state.move_count(), 1);
    }

    #[test]
    fn test_win_ends_game() {
        let mut state = pvp();
        for col in 0..3 {
            state.try_place(Pos::new(2, 0, col)).unwrap();
            state.try_place(Pos::new(3, 3, col)).unwrap();
        }
        state.try_place(Pos::new(2, 0, 3)).unwrap();

        let result = state.game_over.unwrap();
        assert_eq!(result.status, GameStatus::XWins);
        assert_eq!(result.winning_line.map(|l| l.describe()), Some("Layer 2".to_string()));
        assert_eq!(state.try_place(Pos::new(0, 0, 0)), Err(GameError::GameOver));
    }

    #[test]
    fn test_undo_pvp() {
        let mut state = pvp();
        state.try_place(Pos::new(0, 0, 0)).unwrap();
        state.try_place(Pos::new(0, 0, 1)).unwrap();
        state.undo();
        assert_eq!(state.move_count(), 1);
        assert_eq!(state.current_turn, Mark::O);
        assert!(state.board.is_empty(Pos::new(0, 0, 1)));
    }

    #[test]
    fn test_undo_pve_returns_to_human() {
        let mut state = GameState::with_config(GameMode::PvE { human: Mark::X }, SearchConfig::new(1).unwrap());
        state.try_place(Pos::new(0, 0, 0)).unwrap();
        assert_eq!(state.try_place(Pos::new(0, 0, 1)), Err(GameError::NotYourTurn));

        state.start_ai_thinking();
        assert!(state.is_ai_thinking());
        while state.is_ai_thinking() {
            thread::sleep(Duration::from_millis(5));
            state.check_ai_result();
        }
        assert_eq!(state.move_count(), 2);
        assert!(state.last_ai_result.is_some());
        assert!(state.is_human_turn());

        state.undo();
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.current_turn, Mark::X);
    }

    #[test]
    fn test_hint_in_pvp() {
        let mut state = pvp();
        state.request_suggestion();
        assert!(state.suggested_move.is_some());
        assert!(state.last_ai_result.is_some());
    }
}
