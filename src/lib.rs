pub mod types;
pub mod layout;
pub mod board;
pub mod rules;
pub mod game;
pub mod session;
pub mod display;
pub mod config;

pub use types::*;
pub use board::Board;
pub use layout::{Layout, LayoutError};
pub use rules::validate_move;
pub use game::GameState;
pub use session::{ClickResult, GameSession, Phase, Snapshot};
pub use display::BoardView;
pub use config::Config;
