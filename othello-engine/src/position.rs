//! Code for working with [`Position`]s on the playable interior of the board.

use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Formatter, Write};

/// A square on the 8x8 playable interior, in 0-based `(row, col)` coordinates.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Position {
    row: u8,
    col: u8,
}

/// A set of interior positions, packed as one bit per square in row-major order.
/// Iterating yields positions in row-major order, each exactly once.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct MoveSet(u64);

impl Position {
    /// Construct a position from interior coordinates.
    /// Panics if either coordinate is off the board.
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            (row as usize) < EDGE_LENGTH && (col as usize) < EDGE_LENGTH,
            "position ({}, {}) is off the board",
            row,
            col
        );
        Self { row, col }
    }

    /// Construct a position from interior coordinates.
    /// Returns None if the coordinates are not on the board.
    pub fn from_coords(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < EDGE_LENGTH && (col as usize) < EDGE_LENGTH {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Convert from a row-major square index in `0..64`.
    #[inline]
    pub fn from_index(index: u8) -> Self {
        debug_assert!((index as usize) < NUM_SPACES);
        let edge = EDGE_LENGTH as u8;
        Self {
            row: index / edge,
            col: index % edge,
        }
    }

    /// Convert into a row-major square index in `0..64`.
    #[inline]
    pub fn to_index(self) -> u8 {
        self.row * EDGE_LENGTH as u8 + self.col
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    /// Get the row and column coordinates.
    #[inline]
    pub fn to_coords(self) -> (u8, u8) {
        (self.row, self.col)
    }
}

impl From<Position> for (u8, u8) {
    fn from(pos: Position) -> Self {
        pos.to_coords()
    }
}

impl TryFrom<(u8, u8)> for Position {
    type Error = ParsePositionError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Self::from_coords(row, col).ok_or(ParsePositionError)
    }
}

/// Convert this [`Position`] into string notation ("D3": column letter, then row number).
impl fmt::Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_str = "ABCDEFGH".chars().nth(self.col as usize).ok_or(fmt::Error)?;
        let row_str = "12345678".chars().nth(self.row as usize).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid position string")]
pub struct ParsePositionError;

/// Build a [`Position`] from 1-indexed string notation ("D3").
impl std::str::FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParsePositionError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParsePositionError)? as u8;
        let row = chars
            .next()
            .ok_or(ParsePositionError)?
            .to_digit(10)
            .ok_or(ParsePositionError)? as u8;

        if row == 0 || chars.next().is_some() {
            return Err(ParsePositionError);
        }

        Self::from_coords(row - 1, col).ok_or(ParsePositionError)
    }
}

impl MoveSet {
    /// The set with no positions.
    pub const EMPTY: Self = Self(0);

    #[inline]
    fn bit(pos: Position) -> u64 {
        1 << pos.to_index()
    }

    /// Add `pos` to the set. Adding a position twice has no effect.
    #[inline]
    pub fn insert(&mut self, pos: Position) {
        self.0 |= Self::bit(pos);
    }

    /// Returns whether `pos` is in this set.
    #[inline]
    pub fn contains(self, pos: Position) -> bool {
        self.0 & Self::bit(pos) != 0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of positions in the set.
    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }
}

impl FromIterator<Position> for MoveSet {
    fn from_iter<T: IntoIterator<Item = Position>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}

impl Iterator for MoveSet {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.0 == 0 {
            return None;
        }

        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Position::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = MoveSet::len(*self);
        (len, Some(len))
    }
}

impl fmt::Display for MoveSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|pos| pos.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}
