//! Implements game-level Othello logic: turn order, game end and scoring.
//!
//! [`GameState`] is the safe entry point. All mutation goes through
//! [`GameState::play`], which either applies a legal move for the color whose
//! turn it is or returns a [`GameError`] and leaves the game untouched.

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::player::{Color, Player, Roster};
use crate::position::{MoveSet, Position};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, instrument, trace};

/// Who won, by piece count.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    Winner(Color),
    Draw,
}

impl Outcome {
    /// Decide the outcome from final piece counts.
    pub fn from_counts(black: u8, white: u8) -> Self {
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Outcome::Winner(Color::Black),
            std::cmp::Ordering::Less => Outcome::Winner(Color::White),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

/// The final record of a finished game.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub black_count: u8,
    pub white_count: u8,
    pub outcome: Outcome,
    /// The player seated on the winning color, if one was registered.
    pub winner: Option<Player>,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Game is ended white piece: {} black piece: {}",
            self.white_count, self.black_count
        )?;
        match (self.outcome, &self.winner) {
            (Outcome::Draw, _) => write!(f, "The game is a tie"),
            (Outcome::Winner(color), Some(player)) => {
                write!(f, "Winner is {} player: {}", color, player.name())
            }
            (Outcome::Winner(color), None) => write!(f, "Winner is {} player", color),
        }
    }
}

/// Where a game stands.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Status {
    AwaitingMove(Color),
    GameOver(GameResult),
}

/// What happens after a successful [`GameState::play`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Turn {
    /// The game continues with this color to move.
    Next(Color),
    /// Neither color can move; the game is finished.
    GameOver(GameResult),
}

/// The complete state of one Othello game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    turn: u32,
    board: Board,
    roster: Roster,
    config: GameConfig,
    result: Option<GameResult>,
}

impl Default for GameState {
    /// Gets the starting position with default rules.
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Start a new game: seeded board, turn 0, black to move.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Start a new game with the given rule options.
    pub fn with_config(config: GameConfig) -> Self {
        Self::from_position(Board::new(), Color::default(), config)
    }

    /// Resume from an arbitrary board with `to_move` on turn.
    /// The game is finished immediately if neither color can move.
    pub fn from_position(board: Board, to_move: Color, config: GameConfig) -> Self {
        let mut game = Self {
            turn: match to_move {
                Color::Black => 0,
                Color::White => 1,
            },
            board,
            roster: Roster::default(),
            config,
            result: None,
        };
        if !game.board.has_legal_move(Color::Black) && !game.board.has_legal_move(Color::White) {
            game.result = Some(game.final_result());
        }
        game
    }

    /// Seat a player on their color. Returns the player previously seated there.
    pub fn register(&mut self, player: Player) -> Option<Player> {
        let previous = self.roster.register(player);
        if let Some(result) = &mut self.result {
            result.winner = match result.outcome {
                Outcome::Winner(color) => self.roster.get(color).cloned(),
                Outcome::Draw => None,
            };
        }
        previous
    }

    /// Create and seat a player from a color name.
    pub fn create_player(&mut self, name: impl Into<String>, color: &str) -> Result<(), GameError> {
        let player = crate::player::create_player(name, color)?;
        self.register(player);
        Ok(())
    }

    /// The turn counter: the number of turns taken so far.
    #[inline]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The color whose turn it is by parity.
    #[inline]
    pub fn current_color(&self) -> Color {
        Color::for_turn(self.turn)
    }

    /// A message naming whose turn it is.
    pub fn turn_message(&self) -> String {
        format!("It's {}'s turn", self.current_color())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn status(&self) -> Status {
        match &self.result {
            Some(result) => Status::GameOver(result.clone()),
            None => Status::AwaitingMove(self.current_color()),
        }
    }

    /// The final record, once the game is over.
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.result.is_some()
    }

    /// Get the legal moves for `color` on the current board.
    pub fn legal_moves(&self, color: Color) -> MoveSet {
        self.board.legal_moves(color)
    }

    /// Count pieces as `(black, white)`.
    pub fn count_pieces(&self) -> (u8, u8) {
        self.board.count_pieces()
    }

    /// Who is ahead (or has won) on piece count.
    pub fn winner(&self) -> Outcome {
        let (black, white) = self.count_pieces();
        Outcome::from_counts(black, white)
    }

    /// Play `color` at `pos`.
    ///
    /// On success the board is updated and the turn passes on, or the game ends
    /// if neither color has a legal move left. On error nothing changes.
    #[instrument(level = "debug", skip(self), fields(turn = self.turn))]
    pub fn play(&mut self, color: Color, pos: Position) -> Result<Turn, GameError> {
        if self.is_finished() {
            trace!("play after game over");
            return Err(GameError::GameOver);
        }

        let expected = self.current_color();
        if color != expected {
            trace!(%expected, "out of turn");
            return Err(GameError::NotYourTurn {
                expected,
                attempted: color,
            });
        }

        let flipped = self.board.apply_move(color, pos).map_err(|err| {
            trace!(%err, "move rejected");
            err
        })?;
        debug!(%color, position = %pos, flipped, "move applied");

        let mover_can_move = self.board.has_legal_move(color);
        let opponent_can_move = self.board.has_legal_move(!color);

        if !mover_can_move && !opponent_can_move {
            let result = self.final_result();
            info!(
                black = result.black_count,
                white = result.white_count,
                outcome = ?result.outcome,
                "game over"
            );
            self.result = Some(result.clone());
            return Ok(Turn::GameOver(result));
        }

        if self.config.forced_pass && !opponent_can_move {
            let passed = !color;
            debug!(%passed, "opponent has no legal move, turn returns to mover");
            self.turn += 2;
        } else {
            self.turn += 1;
        }

        Ok(Turn::Next(self.current_color()))
    }

    fn final_result(&self) -> GameResult {
        let (black_count, white_count) = self.count_pieces();
        let outcome = Outcome::from_counts(black_count, white_count);
        let winner = match outcome {
            Outcome::Winner(color) => self.roster.get(color).cloned(),
            Outcome::Draw => None,
        };
        GameResult {
            black_count,
            white_count,
            outcome,
            winner,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        match &self.result {
            Some(result) => write!(f, "{}", result),
            None => write!(f, "{}", self.turn_message()),
        }
    }
}
