//////////////////////////
// types.rs
//////////////////////////

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const BOARD_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank step a pawn of this color takes when advancing.
    pub fn forward(&self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Rank the pawns of this color start on.
    pub fn pawn_home_rank(&self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Farthest rank for a pawn of this color.
    pub fn promotion_rank(&self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// `None` marks an empty square, it is not a real piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Rook,
    Bishop,
    Queen,
    King,
    None,
}

/// A square's occupant. The color of an empty square carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const EMPTY: Piece = Piece {
        kind: PieceKind::None,
        color: Color::White,
    };

    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    /// Piece catalog lookup. Case picks the color (upper is White), the
    /// letter picks the kind; anything unrecognised is an empty square.
    pub fn from_code(code: char) -> Self {
        let color = if code.is_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match code.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'r' => PieceKind::Rook,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return Piece::EMPTY,
        };
        Piece { kind, color }
    }

    /// Inverse of [`Piece::from_code`]; empty squares map to a space.
    pub fn code(&self) -> char {
        let code = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
            PieceKind::None => return ' ',
        };
        match self.color {
            Color::White => code.to_ascii_uppercase(),
            Color::Black => code,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.kind == PieceKind::None
    }

    /// True when the square holds a real piece of `color`.
    pub fn belongs_to(&self, color: Color) -> bool {
        !self.is_empty() && self.color == color
    }
}

/// A board coordinate. Rank 0 is the top row of the starting layout
/// (Black's back rank), rank 7 is White's back rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub file: u8,
    pub rank: u8,
}

impl Square {
    pub const fn new(file: u8, rank: u8) -> Self {
        assert!(file < BOARD_SIZE as u8 && rank < BOARD_SIZE as u8);
        Square { file, rank }
    }

    pub fn try_new(file: i32, rank: i32) -> Option<Self> {
        let range = 0..BOARD_SIZE as i32;
        if range.contains(&file) && range.contains(&rank) {
            Some(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// (file, rank) difference from `self` to `other`.
    pub fn delta(&self, other: Square) -> (i8, i8) {
        (
            other.file as i8 - self.file as i8,
            other.rank as i8 - self.rank as i8,
        )
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (self.file + b'a') as char;
        write!(f, "{}{}", file, BOARD_SIZE as u8 - self.rank)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a board square: {0:?}")]
pub struct ParseSquareError(pub String);

impl FromStr for Square {
    type Err = ParseSquareError;

    /// Algebraic notation: `e2` is file 4, rank 6.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseSquareError(s.to_string());
        let bytes = s.trim().as_bytes();
        if bytes.len() != 2 {
            return Err(err());
        }
        let file = bytes[0].to_ascii_lowercase() as i32 - b'a' as i32;
        let digit = bytes[1] as i32 - b'0' as i32;
        if !(1..=BOARD_SIZE as i32).contains(&digit) {
            return Err(err());
        }
        Square::try_new(file, BOARD_SIZE as i32 - digit).ok_or_else(err)
    }
}

/// What a proposed move would do if played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveOutcome {
    Invalid,
    Valid,
    Capture,
    Promotion,
}

impl MoveOutcome {
    pub fn is_legal(&self) -> bool {
        *self != MoveOutcome::Invalid
    }
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveOutcome::Invalid => write!(f, "invalid"),
            MoveOutcome::Valid => write!(f, "move"),
            MoveOutcome::Capture => write!(f, "capture"),
            MoveOutcome::Promotion => write!(f, "promotion"),
        }
    }
}
