//! Cell storage for an Othello board.
//!
//! The 8x8 playable interior is stored inside a 10x10 grid whose outer ring is
//! filled with border sentinels. Directional scans in [`crate::moves`] step by
//! raw index offsets and stop when they reach a border square, so they never
//! need a range check. The border never leaks out of this module's public API:
//! callers address the board with [`Position`] and only ever see a [`Cell`].

use crate::player::Color;
use crate::position::Position;
use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of one edge of the padded grid, including the border ring.
pub(crate) const GRID_LENGTH: usize = EDGE_LENGTH + 2;

/// Number of squares in the padded grid.
pub(crate) const GRID_SPACES: usize = GRID_LENGTH * GRID_LENGTH;

/// The contents of one playable square.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    /// The color of the piece on this cell, if any.
    #[inline]
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
        }
    }

    fn to_char(self) -> char {
        self.color().map_or('.', Color::symbol)
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// A square of the padded grid: either playable or part of the border ring.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Square {
    Playable(Cell),
    Border,
}

impl Square {
    /// Whether this square holds a piece of `color`.
    #[inline]
    pub(crate) fn holds(self, color: Color) -> bool {
        self == Square::Playable(color.into())
    }
}

/// A fixed-size Othello board.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    squares: [Square; GRID_SPACES],
}

impl Default for Board {
    /// Gets the seeded starting board.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A board with the four center seeds: White on the main diagonal, Black on the other.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.set(Position::new(3, 3), Cell::White);
        board.set(Position::new(4, 4), Cell::White);
        board.set(Position::new(3, 4), Cell::Black);
        board.set(Position::new(4, 3), Cell::Black);
        board
    }

    /// A board with an intact border ring and an all-empty interior.
    pub fn empty() -> Self {
        let mut squares = [Square::Border; GRID_SPACES];
        for index in 0..NUM_SPACES {
            squares[Self::index_of(Position::from_index(index as u8))] = Square::Playable(Cell::Empty);
        }
        Self { squares }
    }

    /// Grid index of an interior position.
    #[inline]
    pub(crate) fn index_of(pos: Position) -> usize {
        (pos.row() as usize + 1) * GRID_LENGTH + pos.col() as usize + 1
    }

    /// Read any square of the padded grid, border included.
    #[inline]
    pub(crate) fn square(&self, index: usize) -> Square {
        self.squares[index]
    }

    /// Write a playable square by grid index.
    /// Writing to the border ring is a programming error and panics.
    #[inline]
    pub(crate) fn set_square(&mut self, index: usize, cell: Cell) {
        match self.squares[index] {
            Square::Border => panic!("attempted to write border square {}", index),
            Square::Playable(_) => self.squares[index] = Square::Playable(cell),
        }
    }

    /// Get the contents of an interior square.
    pub fn get(&self, pos: Position) -> Cell {
        match self.squares[Self::index_of(pos)] {
            Square::Playable(cell) => cell,
            Square::Border => unreachable!("interior position {} maps to the border", pos),
        }
    }

    /// Overwrite an interior square. No rules are checked.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.set_square(Self::index_of(pos), cell);
    }

    /// Iterate over every interior square in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        (0..NUM_SPACES as u8).map(move |index| {
            let pos = Position::from_index(index);
            (pos, self.get(pos))
        })
    }

    /// Count the interior squares holding `cell`.
    pub fn count(&self, cell: Cell) -> u8 {
        self.cells().filter(|&(_, c)| c == cell).count() as u8
    }

    /// Count pieces as `(black, white)`.
    pub fn count_pieces(&self) -> (u8, u8) {
        (self.count(Cell::Black), self.count(Cell::White))
    }

    /// Whether every square of the border ring still holds a sentinel.
    #[cfg(test)]
    pub(crate) fn border_is_intact(&self) -> bool {
        (0..GRID_SPACES).all(|index| {
            let (row, col) = (index / GRID_LENGTH, index % GRID_LENGTH);
            let on_ring = row == 0 || col == 0 || row == GRID_LENGTH - 1 || col == GRID_LENGTH - 1;
            on_ring == (self.squares[index] == Square::Border)
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   A B C D E F G H")?;
        for row in 0..EDGE_LENGTH as u8 {
            write!(f, "\n {} ", row + 1)?;
            for col in 0..EDGE_LENGTH as u8 {
                write!(f, "{} ", self.get(Position::new(row, col)).to_char())?;
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "board strings need 64 squares of '.', 'X' or 'O'")]
pub struct ParseBoardError;

/// Parse a board from 64 square characters in row-major order:
/// `.` for empty, `X` for black, `O` for white. Whitespace is ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Self::empty();
        let mut squares = s.chars().filter(|c| !c.is_whitespace());

        for index in 0..NUM_SPACES as u8 {
            let cell = match squares.next().ok_or(ParseBoardError)? {
                '.' | '-' => Cell::Empty,
                'X' | 'x' => Cell::Black,
                'O' | 'o' => Cell::White,
                _ => return Err(ParseBoardError),
            };
            board.set(Position::from_index(index), cell);
        }

        match squares.next() {
            None => Ok(board),
            Some(_) => Err(ParseBoardError),
        }
    }
}
