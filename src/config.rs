use std::path::PathBuf;

use clap::Parser;

/// Two-player chess in the terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "chess_game", version)]
pub struct Config {
    /// Starting layout file: 8 lines of 8 piece codes, `.` for empty squares.
    /// The standard arrangement is used when missing or unreadable.
    pub layout: Option<PathBuf>,

    /// Disable ANSI colours.
    #[arg(long)]
    pub no_color: bool,

    /// Tracing filter, overridden by `RUST_LOG` when set.
    #[arg(long, default_value = "chess_game=info")]
    pub log: String,
}
