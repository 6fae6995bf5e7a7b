use serde::{Deserialize, Serialize};

use crate::layout::Layout;
use crate::types::{Piece, Square, BOARD_SIZE};

/// Dense 8×8 grid, indexed `[rank][file]`. Empty squares hold
/// [`Piece::EMPTY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [[Piece; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [[Piece::EMPTY; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn standard() -> Self {
        Board::from_layout(&Layout::standard())
    }

    pub fn from_layout(layout: &Layout) -> Self {
        let mut board = Board::empty();
        for (rank, row) in layout.rows().iter().enumerate() {
            for (file, &code) in row.iter().enumerate() {
                board.squares[rank][file] = Piece::from_code(code);
            }
        }
        board
    }

    pub fn to_layout(&self) -> Layout {
        let mut rows = [[' '; BOARD_SIZE]; BOARD_SIZE];
        for (row, squares) in rows.iter_mut().zip(&self.squares) {
            for (cell, piece) in row.iter_mut().zip(squares) {
                *cell = piece.code();
            }
        }
        Layout::from_rows(rows)
    }

    pub fn get(&self, square: Square) -> Piece {
        self.squares[square.rank as usize][square.file as usize]
    }

    pub fn set(&mut self, square: Square, piece: Piece) {
        self.squares[square.rank as usize][square.file as usize] = piece;
    }

    pub fn clear(&mut self, square: Square) {
        self.set(square, Piece::EMPTY);
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_empty()
    }

    /// True when every square strictly between `from` and `to` is empty.
    /// The two squares must share a rank, a file or a diagonal.
    pub fn is_path_clear(&self, from: Square, to: Square) -> bool {
        let (dx, dy) = from.delta(to);
        let (step_x, step_y) = (dx.signum(), dy.signum());

        let mut file = from.file as i8 + step_x;
        let mut rank = from.rank as i8 + step_y;
        while (file, rank) != (to.file as i8, to.rank as i8) {
            if self.squares[rank as usize][file as usize].is_empty() {
                file += step_x;
                rank += step_y;
            } else {
                return false;
            }
        }
        true
    }

    /// Occupied squares with their pieces, top row first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(rank, row)| {
            row.iter().enumerate().filter_map(move |(file, &piece)| {
                (!piece.is_empty()).then(|| (Square::new(file as u8, rank as u8), piece))
            })
        })
    }

    /// Piece codes row by row, top row first, blanks as spaces.
    pub fn rows(&self) -> Vec<String> {
        self.squares
            .iter()
            .map(|row| row.iter().map(Piece::code).collect())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}
