//////////////////////////
// display.rs
//////////////////////////

use colored::*;
use std::fmt;

use crate::session::GameSession;
use crate::types::{Color, Piece, Square, BOARD_SIZE};

/// Terminal rendering of a session: the grid with the selected square
/// highlighted, then a status line.
pub struct BoardView<'a> {
    session: &'a GameSession,
}

impl<'a> BoardView<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        BoardView { session }
    }
}

fn file_labels(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "  ")?;
    for file in 0..BOARD_SIZE {
        write!(f, " {} ", ((file as u8 + b'a') as char).to_string().cyan())?;
    }
    writeln!(f)
}

fn symbol(piece: Piece) -> ColoredString {
    if piece.is_empty() {
        return "·".bright_black();
    }
    let code = piece.code().to_string();
    match piece.color {
        Color::White => code.bright_red().bold(),
        Color::Black => code.bright_blue().bold(),
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.session.board();
        let selected = self.session.selected();

        file_labels(f)?;
        writeln!(f, "  {}", "─".repeat(3 * BOARD_SIZE).bright_magenta())?;

        for rank in 0..BOARD_SIZE as u8 {
            let label = (BOARD_SIZE as u8 - rank).to_string();
            write!(f, "{}{}", label.cyan(), "│".bright_magenta())?;

            for file in 0..BOARD_SIZE as u8 {
                let square = Square::new(file, rank);
                let cell = format!(" {} ", symbol(board.get(square)));
                if selected == Some(square) {
                    write!(f, "{}", cell.on_yellow())?;
                } else {
                    write!(f, "{}", cell)?;
                }
            }

            writeln!(f, "{}{}", "│".bright_magenta(), label.cyan())?;
        }

        writeln!(f, "  {}", "─".repeat(3 * BOARD_SIZE).bright_magenta())?;
        file_labels(f)?;

        match self.session.winner() {
            Some(winner) => write!(
                f,
                "\n{} {}",
                format!("{} takes the king and wins!", winner).green().bold(),
                "Type 'retry' or 'quit'."
            ),
            None => match selected {
                Some(square) => write!(f, "\n{} to move, {} selected", self.session.turn(), square),
                None => write!(f, "\n{} to move", self.session.turn()),
            },
        }
    }
}
