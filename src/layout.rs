//! Starting layouts: the 8×8 grid of piece codes a game begins from.
//!
//! The text form is eight lines of eight characters, top line first.
//! `.` or a space is an empty square, `prnbqk` are Black pieces and
//! `PRNBQK` are White pieces.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

use crate::types::BOARD_SIZE;

const STANDARD_ROWS: [&str; BOARD_SIZE] = [
    "rnbqkbnr",
    "pppppppp",
    "        ",
    "        ",
    "        ",
    "        ",
    "PPPPPPPP",
    "RNBQKBNR",
];

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("layout has {0} rows, expected 8")]
    RowCount(usize),

    #[error("layout row {row} has {width} columns, expected 8")]
    RowWidth { row: usize, width: usize },

    #[error("layout row {row}, column {col}: unknown piece code {code:?}")]
    UnknownCode { row: usize, col: usize, code: char },

    #[error("cannot read layout {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    rows: [[char; BOARD_SIZE]; BOARD_SIZE],
}

impl Layout {
    /// The usual chess arrangement, Black on top.
    pub fn standard() -> Self {
        let mut rows = [[' '; BOARD_SIZE]; BOARD_SIZE];
        for (row, text) in rows.iter_mut().zip(STANDARD_ROWS) {
            for (cell, code) in row.iter_mut().zip(text.chars()) {
                *cell = code;
            }
        }
        Layout { rows }
    }

    pub fn empty() -> Self {
        Layout {
            rows: [[' '; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn from_rows(rows: [[char; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Layout { rows }
    }

    pub fn rows(&self) -> &[[char; BOARD_SIZE]; BOARD_SIZE] {
        &self.rows
    }

    /// Piece code at `row` (rank) and `col` (file).
    pub fn code(&self, row: usize, col: usize) -> char {
        self.rows[row][col]
    }

    pub fn load(path: &Path) -> Result<Self, LayoutError> {
        let text = fs::read_to_string(path).map_err(|source| LayoutError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        text.parse()
    }

    /// Loads `path` when given, falling back to [`Layout::standard`] on any
    /// failure.
    pub fn load_or_standard(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Layout::standard();
        };
        match Layout::load(path) {
            Ok(layout) => {
                tracing::info!(path = %path.display(), "loaded starting layout");
                layout
            }
            Err(err) => {
                tracing::warn!(%err, "falling back to the standard layout");
                Layout::standard()
            }
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout::standard()
    }
}

fn is_layout_code(code: char) -> bool {
    code == '.' || code == ' ' || "prnbqk".contains(code.to_ascii_lowercase())
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut lines: Vec<&str> = text
            .lines()
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        if lines.len() != BOARD_SIZE {
            return Err(LayoutError::RowCount(lines.len()));
        }

        let mut rows = [[' '; BOARD_SIZE]; BOARD_SIZE];
        for (row, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != BOARD_SIZE {
                return Err(LayoutError::RowWidth { row, width });
            }
            for (col, code) in line.chars().enumerate() {
                if !is_layout_code(code) {
                    return Err(LayoutError::UnknownCode { row, col, code });
                }
                rows[row][col] = if code == '.' { ' ' } else { code };
            }
        }
        Ok(Layout { rows })
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let line: String = row
                .iter()
                .map(|&code| if code == ' ' { '.' } else { code })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
