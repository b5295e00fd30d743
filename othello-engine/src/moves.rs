//! Legal-move generation and move execution.
//!
//! Both operations walk rays outward from a square by adding a fixed grid
//! offset per step. The border ring in [`Board`] guarantees every ray reaches a
//! non-piece square before it can leave the grid, so no bounds checks are made.

use crate::board::{Board, Cell, Square, GRID_LENGTH};
use crate::error::GameError;
use crate::player::Color;
use crate::position::{MoveSet, Position};
use crate::NUM_SPACES;

/// Grid offsets for the eight compass directions: NW, N, NE, W, E, SW, S, SE.
const DIRECTIONS: [isize; 8] = {
    const W: isize = GRID_LENGTH as isize;
    [-W - 1, -W, -W + 1, -1, 1, W - 1, W, W + 1]
};

impl Board {
    /// Length of the opposing run starting next to `origin` along `step`,
    /// if that run is closed off by a piece of `color`. Returns `None` when the
    /// ray finds no opposing piece first, or runs into an empty or border square.
    #[inline]
    fn capture_run(&self, origin: usize, step: isize, color: Color) -> Option<usize> {
        let opponent = !color;
        let mut index = origin.wrapping_add_signed(step);
        let mut run = 0;

        while self.square(index).holds(opponent) {
            run += 1;
            index = index.wrapping_add_signed(step);
        }

        if run > 0 && self.square(index).holds(color) {
            Some(run)
        } else {
            None
        }
    }

    /// Whether placing `color` at `index` would capture along any direction.
    #[inline]
    fn captures_any(&self, index: usize, color: Color) -> bool {
        DIRECTIONS
            .iter()
            .any(|&step| self.capture_run(index, step, color).is_some())
    }

    /// Get the set of empty squares where `color` would capture at least one run.
    pub fn legal_moves(&self, color: Color) -> MoveSet {
        (0..NUM_SPACES as u8)
            .map(Position::from_index)
            .filter(|&pos| {
                let index = Board::index_of(pos);
                self.square(index) == Square::Playable(Cell::Empty) && self.captures_any(index, color)
            })
            .collect()
    }

    /// Whether `color` has any legal move.
    pub fn has_legal_move(&self, color: Color) -> bool {
        !MoveSet::is_empty(self.legal_moves(color))
    }

    /// Place a `color` piece at `pos` and flip every captured run.
    /// Returns the number of pieces flipped.
    ///
    /// The board is left unchanged if the move is not legal.
    pub fn apply_move(&mut self, color: Color, pos: Position) -> Result<u8, GameError> {
        let legal = self.legal_moves(color);
        if MoveSet::is_empty(legal) {
            return Err(GameError::NoLegalMoves(color));
        }
        if !legal.contains(pos) {
            return Err(GameError::IllegalMove {
                position: pos,
                legal,
            });
        }

        let origin = Board::index_of(pos);
        self.set_square(origin, color.into());

        let mut flipped = 0;
        for &step in DIRECTIONS.iter() {
            if let Some(run) = self.capture_run(origin, step, color) {
                let mut index = origin;
                for _ in 0..run {
                    index = index.wrapping_add_signed(step);
                    self.set_square(index, color.into());
                }
                flipped += run as u8;
            }
        }

        debug_assert!(flipped > 0, "legal move at {} flipped nothing", pos);
        Ok(flipped)
    }
}
