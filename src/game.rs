//////////////////////////
// game.rs
//////////////////////////

use crate::board::Board;
use crate::layout::Layout;
use crate::rules::validate_move;
use crate::types::*;

/// Board, side to move and whether a king has fallen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub turn: Color,
    pub is_over: bool,
}

impl GameState {
    pub fn new() -> Self {
        GameState::from_layout(&Layout::standard())
    }

    pub fn from_layout(layout: &Layout) -> Self {
        GameState {
            board: Board::from_layout(layout),
            turn: Color::White,
            is_over: false,
        }
    }

    /// Classifies moving whatever stands on `from` to `to`.
    pub fn validate(&self, from: Square, to: Square) -> MoveOutcome {
        validate_move(&self.board, self.board.get(from), from, to)
    }

    /// Validates and, when legal, applies the move.
    pub fn play(&mut self, from: Square, to: Square) -> MoveOutcome {
        let outcome = self.validate(from, to);
        if outcome.is_legal() {
            self.apply_move(from, to, outcome);
        }
        outcome
    }

    /// Applies a move the rules accepted with `outcome`.
    ///
    /// Landing on a king ends the game on the spot: the board is left as it
    /// was and the turn does not pass. Otherwise the piece moves, a promoting
    /// pawn becomes a queen and the other side is to move.
    pub fn apply_move(&mut self, from: Square, to: Square, outcome: MoveOutcome) {
        if !outcome.is_legal() {
            tracing::error!(%from, %to, "refusing to apply an invalid move");
            return;
        }

        if self.board.get(to).kind == PieceKind::King {
            tracing::info!(winner = %self.turn, square = %to, "king captured");
            self.is_over = true;
            return;
        }

        let mover = self.board.get(from);
        self.board.set(to, mover);
        self.board.clear(from);

        if outcome == MoveOutcome::Promotion {
            self.board.set(to, Piece::new(PieceKind::Queen, mover.color));
        }

        self.turn = self.turn.opposite();
    }

    /// The side that took the enemy king, once the game is over.
    pub fn winner(&self) -> Option<Color> {
        self.is_over.then_some(self.turn)
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
