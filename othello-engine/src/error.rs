//! Error types for game play and configuration loading.

use crate::player::Color;
use crate::position::{MoveSet, Position};
use std::path::PathBuf;

/// Errors a game can report back to the caller.
///
/// Everything except [`GameError::InvalidColor`] leaves the game untouched and
/// can be retried with different input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid piece color {0:?} (expected \"black\" or \"white\")")]
    InvalidColor(String),

    #[error("it's not your turn, it's {expected}'s turn")]
    NotYourTurn { expected: Color, attempted: Color },

    #[error("{position} is not a legal move (legal: {legal})")]
    IllegalMove { position: Position, legal: MoveSet },

    #[error("{0} has no legal moves")]
    NoLegalMoves(Color),

    #[error("the game is already over")]
    GameOver,
}

impl GameError {
    /// The legal positions to suggest after a rejected move, if this error carries any.
    pub fn legal_moves(&self) -> Option<MoveSet> {
        match self {
            GameError::IllegalMove { legal, .. } => Some(*legal),
            GameError::NoLegalMoves(_) => Some(MoveSet::EMPTY),
            _ => None,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}
