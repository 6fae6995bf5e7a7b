//! Per-piece move legality.
//!
//! Every rule looks at the board read-only and classifies a move from
//! `from` to `to` as a [`MoveOutcome`]. Callers guarantee that `from` holds
//! a piece of the side to move and that `from != to`.

use crate::board::Board;
use crate::types::{MoveOutcome, Piece, PieceKind, Square};

/// Routes a move to the rule for `piece.kind`.
pub fn validate_move(board: &Board, piece: Piece, from: Square, to: Square) -> MoveOutcome {
    let outcome = match piece.kind {
        PieceKind::Pawn => pawn_move(board, from, to),
        PieceKind::Knight => knight_move(board, from, to),
        PieceKind::Rook => rook_move(board, from, to),
        PieceKind::Bishop => bishop_move(board, from, to),
        PieceKind::Queen => queen_move(board, from, to),
        PieceKind::King => king_move(board, from, to),
        PieceKind::None => MoveOutcome::Invalid,
    };
    tracing::trace!(kind = ?piece.kind, %from, %to, %outcome, "validated move");
    outcome
}

/// Classifies landing on `to`: empty is a plain move, an enemy piece is a
/// capture, a friendly piece blocks.
fn landing(board: &Board, from: Square, to: Square) -> MoveOutcome {
    let mover = board.get(from);
    let target = board.get(to);
    if target.is_empty() {
        MoveOutcome::Valid
    } else if target.color != mover.color {
        MoveOutcome::Capture
    } else {
        MoveOutcome::Invalid
    }
}

/// Reaching the far rank promotes before anything else is looked at.
/// The double step does not inspect the square it passes over.
pub fn pawn_move(board: &Board, from: Square, to: Square) -> MoveOutcome {
    let color = board.get(from).color;
    let direction = color.forward();
    let (dx, dy) = from.delta(to);
    let target = board.get(to);

    if to.rank == color.promotion_rank() {
        return MoveOutcome::Promotion;
    }
    if dx == 0 && dy == direction && target.is_empty() {
        return MoveOutcome::Valid;
    }
    if dx == 0 && dy == 2 * direction && from.rank == color.pawn_home_rank() && target.is_empty()
    {
        return MoveOutcome::Valid;
    }
    if dy == direction && dx.abs() == 1 && !target.is_empty() && target.color != color {
        return MoveOutcome::Capture;
    }
    MoveOutcome::Invalid
}

pub fn rook_move(board: &Board, from: Square, to: Square) -> MoveOutcome {
    let (dx, dy) = from.delta(to);
    if (dx != 0 && dy != 0) || (dx == 0 && dy == 0) {
        return MoveOutcome::Invalid;
    }
    if !board.is_path_clear(from, to) {
        return MoveOutcome::Invalid;
    }
    landing(board, from, to)
}

pub fn bishop_move(board: &Board, from: Square, to: Square) -> MoveOutcome {
    let (dx, dy) = from.delta(to);
    if dx == 0 || dx.abs() != dy.abs() {
        return MoveOutcome::Invalid;
    }
    if !board.is_path_clear(from, to) {
        return MoveOutcome::Invalid;
    }
    landing(board, from, to)
}

pub fn queen_move(board: &Board, from: Square, to: Square) -> MoveOutcome {
    match rook_move(board, from, to) {
        MoveOutcome::Invalid => bishop_move(board, from, to),
        outcome => outcome,
    }
}

/// Knights jump, nothing in between matters.
pub fn knight_move(board: &Board, from: Square, to: Square) -> MoveOutcome {
    match from.delta(to) {
        (dx, dy) if matches!((dx.abs(), dy.abs()), (2, 1) | (1, 2)) => landing(board, from, to),
        _ => MoveOutcome::Invalid,
    }
}

pub fn king_move(board: &Board, from: Square, to: Square) -> MoveOutcome {
    let (dx, dy) = from.delta(to);
    if dx.abs() > 1 || dy.abs() > 1 || (dx == 0 && dy == 0) {
        return MoveOutcome::Invalid;
    }
    landing(board, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(file: u8, rank: u8) -> Square {
        Square::new(file, rank)
    }

    fn board_with(pieces: &[(u8, u8, char)]) -> Board {
        let mut board = Board::empty();
        for &(file, rank, code) in pieces {
            board.set(sq(file, rank), Piece::from_code(code));
        }
        board
    }

    #[test]
    fn white_pawn_single_and_double_step() {
        let board = board_with(&[(4, 6, 'P')]);
        assert_eq!(pawn_move(&board, sq(4, 6), sq(4, 5)), MoveOutcome::Valid);
        assert_eq!(pawn_move(&board, sq(4, 6), sq(4, 4)), MoveOutcome::Valid);
        assert_eq!(pawn_move(&board, sq(4, 6), sq(4, 3)), MoveOutcome::Invalid);
        assert_eq!(pawn_move(&board, sq(4, 6), sq(4, 7)), MoveOutcome::Invalid);
    }

    #[test]
    fn double_step_only_from_home_rank() {
        let board = board_with(&[(4, 5, 'P'), (2, 2, 'p')]);
        assert_eq!(pawn_move(&board, sq(4, 5), sq(4, 3)), MoveOutcome::Invalid);
        assert_eq!(pawn_move(&board, sq(2, 2), sq(2, 4)), MoveOutcome::Invalid);
    }

    #[test]
    fn double_step_skips_intermediate_square() {
        let board = board_with(&[(4, 6, 'P'), (4, 5, 'n')]);
        assert_eq!(pawn_move(&board, sq(4, 6), sq(4, 4)), MoveOutcome::Valid);
    }

    #[test]
    fn pawn_blocked_straight_ahead() {
        let board = board_with(&[(4, 6, 'P'), (4, 5, 'p'), (3, 1, 'p'), (3, 3, 'P')]);
        assert_eq!(pawn_move(&board, sq(4, 6), sq(4, 5)), MoveOutcome::Invalid);
        assert_eq!(pawn_move(&board, sq(3, 1), sq(3, 3)), MoveOutcome::Invalid);
    }

    #[test]
    fn pawn_captures_diagonally_forward_only() {
        let board = board_with(&[(4, 4, 'P'), (3, 3, 'p'), (5, 3, 'P'), (5, 5, 'p')]);
        assert_eq!(pawn_move(&board, sq(4, 4), sq(3, 3)), MoveOutcome::Capture);
        assert_eq!(pawn_move(&board, sq(4, 4), sq(5, 3)), MoveOutcome::Invalid);
        assert_eq!(pawn_move(&board, sq(4, 4), sq(5, 5)), MoveOutcome::Invalid);
        assert_eq!(pawn_move(&board, sq(4, 4), sq(2, 3)), MoveOutcome::Invalid);
    }

    #[test]
    fn black_pawn_moves_down_the_board() {
        let board = board_with(&[(4, 1, 'p'), (5, 2, 'P')]);
        assert_eq!(pawn_move(&board, sq(4, 1), sq(4, 2)), MoveOutcome::Valid);
        assert_eq!(pawn_move(&board, sq(4, 1), sq(4, 3)), MoveOutcome::Valid);
        assert_eq!(pawn_move(&board, sq(4, 1), sq(5, 2)), MoveOutcome::Capture);
        assert_eq!(pawn_move(&board, sq(4, 1), sq(4, 0)), MoveOutcome::Invalid);
    }

    #[test]
    fn promotion_takes_precedence() {
        let board = board_with(&[(4, 1, 'P'), (3, 6, 'p'), (2, 0, 'n')]);
        assert_eq!(pawn_move(&board, sq(4, 1), sq(4, 0)), MoveOutcome::Promotion);
        assert_eq!(pawn_move(&board, sq(4, 1), sq(3, 0)), MoveOutcome::Promotion);
        assert_eq!(pawn_move(&board, sq(3, 6), sq(3, 7)), MoveOutcome::Promotion);
    }

    #[test]
    fn promotion_ignores_path_and_distance() {
        let board = board_with(&[(0, 4, 'P')]);
        assert_eq!(pawn_move(&board, sq(0, 4), sq(5, 0)), MoveOutcome::Promotion);
    }

    #[test]
    fn rook_lines_and_obstruction() {
        let board = board_with(&[(0, 0, 'R'), (0, 3, 'p')]);
        assert_eq!(rook_move(&board, sq(0, 0), sq(0, 5)), MoveOutcome::Invalid);
        assert_eq!(rook_move(&board, sq(0, 0), sq(0, 3)), MoveOutcome::Capture);
        assert_eq!(rook_move(&board, sq(0, 0), sq(0, 2)), MoveOutcome::Valid);
        assert_eq!(rook_move(&board, sq(0, 0), sq(7, 0)), MoveOutcome::Valid);
        assert_eq!(rook_move(&board, sq(0, 0), sq(1, 1)), MoveOutcome::Invalid);
    }

    #[test]
    fn rook_captures_at_end_of_clear_file() {
        let board = board_with(&[(0, 0, 'R'), (0, 7, 'r')]);
        assert_eq!(rook_move(&board, sq(0, 0), sq(0, 7)), MoveOutcome::Capture);
    }

    #[test]
    fn bishop_diagonals() {
        let board = board_with(&[(2, 2, 'B')]);
        assert_eq!(bishop_move(&board, sq(2, 2), sq(5, 5)), MoveOutcome::Valid);
        assert_eq!(bishop_move(&board, sq(2, 2), sq(0, 4)), MoveOutcome::Valid);
        assert_eq!(bishop_move(&board, sq(2, 2), sq(2, 5)), MoveOutcome::Invalid);
        assert_eq!(bishop_move(&board, sq(2, 2), sq(4, 5)), MoveOutcome::Invalid);

        let blocked = board_with(&[(2, 2, 'B'), (5, 5, 'N')]);
        assert_eq!(bishop_move(&blocked, sq(2, 2), sq(5, 5)), MoveOutcome::Invalid);
        assert_eq!(bishop_move(&blocked, sq(2, 2), sq(6, 6)), MoveOutcome::Invalid);
    }

    #[test]
    fn queen_prefers_rook_then_bishop() {
        let board = board_with(&[(3, 3, 'Q'), (3, 0, 'q'), (6, 6, 'r')]);
        assert_eq!(queen_move(&board, sq(3, 3), sq(3, 0)), MoveOutcome::Capture);
        assert_eq!(queen_move(&board, sq(3, 3), sq(6, 6)), MoveOutcome::Capture);
        assert_eq!(queen_move(&board, sq(3, 3), sq(5, 5)), MoveOutcome::Valid);
        assert_eq!(queen_move(&board, sq(3, 3), sq(4, 5)), MoveOutcome::Invalid);
    }

    #[test]
    fn knight_jumps_over_pieces() {
        let board = board_with(&[(1, 0, 'N'), (1, 1, 'P'), (2, 1, 'p'), (3, 1, 'P')]);
        assert_eq!(knight_move(&board, sq(1, 0), sq(2, 2)), MoveOutcome::Valid);
        assert_eq!(knight_move(&board, sq(1, 0), sq(3, 1)), MoveOutcome::Invalid);
        assert_eq!(knight_move(&board, sq(1, 0), sq(1, 2)), MoveOutcome::Invalid);
    }

    #[test]
    fn king_single_steps() {
        let board = board_with(&[(4, 7, 'K'), (4, 6, 'P'), (5, 6, 'p')]);
        assert_eq!(king_move(&board, sq(4, 7), sq(3, 7)), MoveOutcome::Valid);
        assert_eq!(king_move(&board, sq(4, 7), sq(5, 6)), MoveOutcome::Capture);
        assert_eq!(king_move(&board, sq(4, 7), sq(4, 6)), MoveOutcome::Invalid);
        assert_eq!(king_move(&board, sq(4, 7), sq(6, 7)), MoveOutcome::Invalid);
    }

    #[test]
    fn empty_piece_is_never_valid() {
        let board = Board::standard();
        assert_eq!(
            validate_move(&board, Piece::EMPTY, sq(4, 4), sq(4, 3)),
            MoveOutcome::Invalid
        );
    }
}
