//! Click-driven game session.
//!
//! The shell resolves every pointer click (or typed square) to a [`Square`]
//! and hands it to [`GameSession::click`]. The session keeps at most one
//! selected square and moves between three phases:
//!
//! - `Idle`: clicking a piece of the side to move selects it.
//! - `Selected`: clicking another piece of the side to move re-selects,
//!   anything else attempts the move. The selection is dropped either way.
//! - `Over`: a king was taken. Only [`GameSession::retry`] leaves this phase.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::game::GameState;
use crate::layout::Layout;
use crate::types::{Color, MoveOutcome, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Selected(Square),
    Over,
}

/// What a single click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickResult {
    /// Nothing to select and nothing selected, or the game is over.
    Ignored,
    Selected(Square),
    /// The selected square was clicked again but no longer holds a piece
    /// of the side to move.
    Deselected,
    Moved(MoveOutcome),
    /// A move was attempted and the rules refused it.
    Rejected,
    /// The move took the enemy king; the payload is the winner.
    KingCaptured(Color),
}

/// Machine-readable view of a session for shells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Piece codes, top row first, blanks as spaces.
    pub rows: Vec<String>,
    pub turn: Color,
    pub selected: Option<Square>,
    pub over: bool,
    pub winner: Option<Color>,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    phase: Phase,
    layout: Layout,
}

impl GameSession {
    pub fn new(layout: Layout) -> Self {
        GameSession {
            state: GameState::from_layout(&layout),
            phase: Phase::Idle,
            layout,
        }
    }

    pub fn standard() -> Self {
        GameSession::new(Layout::standard())
    }

    pub fn click(&mut self, square: Square) -> ClickResult {
        let result = match self.phase {
            Phase::Over => ClickResult::Ignored,
            Phase::Idle => self.select(square).unwrap_or(ClickResult::Ignored),
            Phase::Selected(origin) => match self.select(square) {
                Some(result) => result,
                None => self.attempt(origin, square),
            },
        };
        tracing::debug!(%square, ?result, phase = ?self.phase, "click");
        result
    }

    /// Selects `square` when it holds a piece of the side to move.
    fn select(&mut self, square: Square) -> Option<ClickResult> {
        if self.state.board.get(square).belongs_to(self.state.turn) {
            self.phase = Phase::Selected(square);
            Some(ClickResult::Selected(square))
        } else {
            None
        }
    }

    fn attempt(&mut self, origin: Square, target: Square) -> ClickResult {
        self.phase = Phase::Idle;
        if origin == target {
            return ClickResult::Deselected;
        }

        let outcome = self.state.play(origin, target);
        if self.state.is_over {
            self.phase = Phase::Over;
            return ClickResult::KingCaptured(self.state.turn);
        }
        if outcome.is_legal() {
            ClickResult::Moved(outcome)
        } else {
            ClickResult::Rejected
        }
    }

    /// Starts over from the session's starting layout.
    pub fn retry(&mut self) {
        self.state = GameState::from_layout(&self.layout);
        self.phase = Phase::Idle;
        tracing::info!("game restarted");
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn turn(&self) -> Color {
        self.state.turn
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selected(&self) -> Option<Square> {
        match self.phase {
            Phase::Selected(square) => Some(square),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    pub fn winner(&self) -> Option<Color> {
        self.state.winner()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            rows: self.state.board.rows(),
            turn: self.turn(),
            selected: self.selected(),
            over: self.is_over(),
            winner: self.winner(),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::standard()
    }
}
