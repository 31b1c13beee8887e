//! First-class action types for Quoridor.
//!
//! A move is a domain event: either a token step/jump or a wall placement.
//! Moves can be validated against a state before anything is committed, and
//! they have a compact textual form (`T 5 2`, `H 3 4`, `V 7 1`) for logs and
//! line-oriented input.

use crate::geometry::{Cell, Orientation, Wall};
use crate::state::PlayerId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A single turn's action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Move the token to this cell (a step or a jump).
    Token(Cell),
    /// Place this wall.
    Wall(Wall),
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Token(cell) => write!(f, "T {} {}", cell.x, cell.y),
            Move::Wall(wall) => {
                let tag = match wall.orientation {
                    Orientation::Horizontal => 'H',
                    Orientation::Vertical => 'V',
                };
                write!(f, "{} {} {}", tag, wall.anchor.x, wall.anchor.y)
            }
        }
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [tag, x, y] = parts[..] else {
            return Err(MoveParseError::Malformed(s.to_string()));
        };
        let coord = |raw: &str| {
            raw.parse::<i8>()
                .map_err(|_| MoveParseError::BadCoordinate(raw.to_string()))
        };
        let cell = Cell::new(coord(x)?, coord(y)?);

        match tag.to_ascii_uppercase().as_str() {
            "T" => Ok(Move::Token(cell)),
            "H" => Ok(Move::Wall(Wall::new(cell, Orientation::Horizontal))),
            "V" => Ok(Move::Wall(Wall::new(cell, Orientation::Vertical))),
            _ => Err(MoveParseError::UnknownKind(tag.to_string())),
        }
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Player number outside {1, 2}.
    #[display("Invalid player number {}, expected 1 or 2", _0)]
    InvalidPlayerIndex(u8),

    /// A cell or wall anchor outside its valid range.
    #[display("Coordinates ({}, {}) are out of bounds", x, y)]
    OutOfBounds {
        /// Column.
        x: i8,
        /// Row.
        y: i8,
    },

    /// The token cannot reach this cell this turn.
    #[display("Cell {} is not a legal destination", _0)]
    OccupiedDestination(Cell),

    /// The wall overlaps or crosses a placed wall.
    #[display("{} collides with a placed wall", _0)]
    Collision(Wall),

    /// The player has no walls left to place.
    #[display("Player {} has no walls left", _0)]
    NoWallsLeft(PlayerId),

    /// The wall would cut a player off from their goal row.
    #[display("{} would block a player's path to goal", _0)]
    BlocksPath(Wall),

    /// A player already reached their goal row.
    #[display("Game is already over, player {} won", _0)]
    GameAlreadyOver(PlayerId),

    /// The player has no legal destination at all.
    #[display("Player {} has no legal move", _0)]
    NoLegalMove(PlayerId),
}

impl std::error::Error for MoveError {}

/// Error raised when a snapshot does not describe a valid position.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SetupError {
    /// A wall count outside `0..=10`.
    #[display("Player {} has {} walls, expected 0 to 10", player, walls)]
    WallCount {
        /// Offending player.
        player: PlayerId,
        /// Count found.
        walls: u8,
    },

    /// A token off the board.
    #[display("Player {} stands off the board at {}", _0, _1)]
    PositionOffBoard(PlayerId, Cell),

    /// Both tokens on one cell.
    #[display("Both players stand on {}", _0)]
    SharedPosition(Cell),

    /// A wall anchor outside its orientation's range.
    #[display("{} is out of bounds", _0)]
    WallOffBoard(Wall),

    /// Two placed walls overlap or cross.
    #[display("{} overlaps {}", _0, _1)]
    OverlappingWalls(Wall, Wall),

    /// Placed plus remaining walls do not add up to 20.
    #[display("Walls placed and remaining add up to {}, expected 20", _0)]
    WallBudget(usize),
}

impl std::error::Error for SetupError {}

/// Error raised when move notation cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveParseError {
    /// Not three whitespace-separated fields.
    #[display("Expected `<T|H|V> <x> <y>`, got {:?}", _0)]
    Malformed(String),

    /// Unknown move tag.
    #[display("Unknown move kind {:?}, expected T, H or V", _0)]
    UnknownKind(String),

    /// A coordinate that is not a small integer.
    #[display("Invalid coordinate {:?}", _0)]
    BadCoordinate(String),
}

impl std::error::Error for MoveParseError {}
