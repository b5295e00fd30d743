//! `othello-engine` is the rules engine for a two-player Othello game.
//!
//! The crate is layered the same way a game is played:
//!
//!  - [`Board`] stores the 64 playable cells inside a ring of border sentinels,
//!    so the directional scans never bounds-check.
//!  - [`Board::legal_moves`] and [`Board::apply_move`] resolve moves: which
//!    empty cells bracket an opposing run, and which runs flip when a piece lands.
//!  - [`GameState`] controls the game: whose turn it is, when the game ends and
//!    who won. It is the safe, high-level interface and the one to use from a UI.
//!
//! Errors are reported as [`GameError`]; the library logs through `tracing` and
//! never prints.

pub mod test_utils;

mod board;
mod config;
mod error;
mod game;
mod moves;
mod player;
mod position;

pub use board::{Board, Cell, ParseBoardError};
pub use config::GameConfig;
pub use error::{ConfigError, GameError};
pub use game::{GameResult, GameState, Outcome, Status, Turn};
pub use player::{create_player, Color, Player, Roster};
pub use position::{MoveSet, ParsePositionError, Position};

/// The number of spaces on one edge of the playable board.
pub const EDGE_LENGTH: usize = 8;

/// The number of playable spaces on the board.
pub const NUM_SPACES: usize = 64;
