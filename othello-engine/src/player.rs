//! Piece colors and the people playing them.

use crate::error::GameError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One of the two sides in a game.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[display(fmt = "black")]
    Black,
    #[display(fmt = "white")]
    White,
}

impl Default for Color {
    /// Gets the opening color (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    /// Gets the other color.
    fn not(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl Color {
    /// The color to move on turn number `turn`: black on even turns, white on odd.
    #[inline]
    pub fn for_turn(turn: u32) -> Self {
        if turn % 2 == 0 {
            Color::Black
        } else {
            Color::White
        }
    }

    /// Single-character piece symbol.
    pub fn symbol(self) -> char {
        match self {
            Color::Black => 'X',
            Color::White => 'O',
        }
    }
}

/// Parses exactly `"black"` or `"white"`.
impl std::str::FromStr for Color {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black" => Ok(Color::Black),
            "white" => Ok(Color::White),
            other => Err(GameError::InvalidColor(other.to_string())),
        }
    }
}

/// A registered player: a name bound to a color.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    color: Color,
}

impl Player {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// Create a player from a color name.
/// Fails with [`GameError::InvalidColor`] unless `color` is `"black"` or `"white"`.
pub fn create_player(name: impl Into<String>, color: &str) -> Result<Player, GameError> {
    let color = color.parse()?;
    Ok(Player::new(name, color))
}

/// The players seated at a game, at most one per color.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    black: Option<Player>,
    white: Option<Player>,
}

impl Roster {
    /// Seat `player` on their color, returning whoever held that seat before.
    pub fn register(&mut self, player: Player) -> Option<Player> {
        let seat = match player.color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        };
        let previous = seat.replace(player);
        if let Some(previous) = &previous {
            warn!(color = %previous.color, replaced = %previous.name, "player seat reassigned");
        }
        previous
    }

    /// The player seated on `color`, if any.
    pub fn get(&self, color: Color) -> Option<&Player> {
        match color {
            Color::Black => self.black.as_ref(),
            Color::White => self.white.as_ref(),
        }
    }

    /// Iterate over seated players, white first.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.white.iter().chain(self.black.iter())
    }
}
