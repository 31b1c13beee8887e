//! Core domain types for a Quoridor match.

use crate::action::{Move, MoveError, SetupError};
use crate::geometry::{Cell, Orientation, Wall, wall_overlaps};
use crate::graph::{Goal, MoveGraph};
use crate::invariants::{InvariantSet, QuoridorInvariants};
use crate::legality::{self, Destinations};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

/// Walls each player holds at the start of a match.
pub const WALLS_PER_PLAYER: u8 = 10;

/// Walls in a match, placed and unplaced.
pub const TOTAL_WALLS: usize = 2 * WALLS_PER_PLAYER as usize;

/// Identifies one of the two seats.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum PlayerId {
    /// Starts on row 1 and races to row 9. Moves first.
    #[display("1")]
    One,
    /// Starts on row 9 and races to row 1.
    #[display("2")]
    Two,
}

impl PlayerId {
    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Zero-based seat index.
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// The sentinel this player races to.
    pub fn goal(self) -> Goal {
        match self {
            PlayerId::One => Goal::Row9,
            PlayerId::Two => Goal::Row1,
        }
    }

    /// Starting cell in a fresh match.
    pub fn start(self) -> Cell {
        match self {
            PlayerId::One => Cell::new(5, 1),
            PlayerId::Two => Cell::new(5, 9),
        }
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = MoveError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(PlayerId::One),
            2 => Ok(PlayerId::Two),
            other => Err(MoveError::InvalidPlayerIndex(other)),
        }
    }
}

/// A player's record.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    name: String,
    /// Walls this player may still place.
    walls_remaining: u8,
    /// Current token cell.
    position: Cell,
}

impl Player {
    /// Creates a player record.
    pub fn new(name: impl Into<String>, walls_remaining: u8, position: Cell) -> Self {
        Self {
            name: name.into(),
            walls_remaining,
            position,
        }
    }
}

/// Placed walls, by orientation, in placement order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct WallSet {
    /// Anchors of horizontal walls.
    horizontal: Vec<Cell>,
    /// Anchors of vertical walls.
    vertical: Vec<Cell>,
}

impl WallSet {
    /// Creates a wall set from anchor lists.
    pub fn new(horizontal: Vec<Cell>, vertical: Vec<Cell>) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// All walls, horizontal first.
    pub fn iter(&self) -> impl Iterator<Item = Wall> + '_ {
        let horizontal = self
            .horizontal
            .iter()
            .map(|anchor| Wall::new(*anchor, Orientation::Horizontal));
        let vertical = self
            .vertical
            .iter()
            .map(|anchor| Wall::new(*anchor, Orientation::Vertical));
        horizontal.chain(vertical)
    }

    /// Number of placed walls.
    pub fn len(&self) -> usize {
        self.horizontal.len() + self.vertical.len()
    }

    /// Returns true if no wall is placed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A copy of this set with `wall` added.
    pub fn with(&self, wall: Wall) -> Self {
        let mut next = self.clone();
        next.push(wall);
        next
    }

    fn push(&mut self, wall: Wall) {
        match wall.orientation {
            Orientation::Horizontal => self.horizontal.push(wall.anchor),
            Orientation::Vertical => self.vertical.push(wall.anchor),
        }
    }
}

/// Plain record exchanged with collaborators (drivers, renderers, storage).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Player One then player Two.
    pub players: [Player; 2],
    /// Placed walls.
    pub walls: WallSet,
}

/// Complete match state.
///
/// Every mutation validates first and commits only on success, so a
/// rejected action leaves the state exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) players: [Player; 2],
    pub(crate) walls: WallSet,
}

impl GameState {
    /// Starts a match: tokens on (5, 1) and (5, 9), ten walls each.
    #[instrument(skip(first, second))]
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            players: [
                Player::new(first, WALLS_PER_PLAYER, PlayerId::One.start()),
                Player::new(second, WALLS_PER_PLAYER, PlayerId::Two.start()),
            ],
            walls: WallSet::default(),
        }
    }

    /// Returns a player's record.
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Returns the placed walls.
    pub fn walls(&self) -> &WallSet {
        &self.walls
    }

    /// Token cells, player One first.
    pub fn positions(&self) -> [Cell; 2] {
        [self.players[0].position, self.players[1].position]
    }

    /// Builds the admissible-moves graph for the current position.
    pub fn graph(&self) -> MoveGraph {
        MoveGraph::build(&self.positions(), self.walls.iter())
    }

    /// The player standing on their goal row, if any.
    #[instrument(level = "debug", skip(self))]
    pub fn winner(&self) -> Option<PlayerId> {
        PlayerId::iter().find(|id| self.player(*id).position.y == id.goal().row())
    }

    /// Cells the player's token may move to this turn.
    pub fn legal_destinations(&self, id: PlayerId) -> Destinations {
        legality::legal_token_destinations(self, id)
    }

    /// Moves a token after checking the move is legal.
    pub fn move_token(&mut self, id: PlayerId, cell: Cell) -> Result<(), MoveError> {
        self.apply(id, Move::Token(cell))
    }

    /// Places a wall after checking the placement is legal.
    pub fn place_wall(&mut self, id: PlayerId, wall: Wall) -> Result<(), MoveError> {
        self.apply(id, Move::Wall(wall))
    }

    /// Validates and commits an action.
    ///
    /// # Errors
    ///
    /// Returns `GameAlreadyOver` once a player has reached their goal row,
    /// otherwise whatever [`legality`] reports for the action.
    #[instrument(skip(self, id, mov), fields(player = %id, action = %mov))]
    pub fn apply(&mut self, id: PlayerId, mov: Move) -> Result<(), MoveError> {
        if let Some(winner) = self.winner() {
            warn!(%winner, "Action after the game ended");
            return Err(MoveError::GameAlreadyOver(winner));
        }

        match mov {
            Move::Token(cell) => {
                legality::validate_token_move(self, id, cell)?;
                self.players[id.index()].position = cell;
            }
            Move::Wall(wall) => {
                legality::validate_wall_placement(self, id, wall)?;
                self.walls.push(wall);
                self.players[id.index()].walls_remaining -= 1;
            }
        }

        debug_assert!(
            QuoridorInvariants::check_all(self).is_ok(),
            "Invariant violated after {mov}"
        );
        info!("Action applied");
        Ok(())
    }

    /// Copies the state into a plain record.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            players: self.players.clone(),
            walls: self.walls.clone(),
        }
    }
}

impl TryFrom<Snapshot> for GameState {
    type Error = SetupError;

    /// Validates a snapshot before accepting it as a position.
    #[instrument(skip(snapshot))]
    fn try_from(snapshot: Snapshot) -> Result<Self, Self::Error> {
        let Snapshot { players, walls } = snapshot;

        for (id, player) in PlayerId::iter().zip(&players) {
            if player.walls_remaining > WALLS_PER_PLAYER {
                return Err(SetupError::WallCount {
                    player: id,
                    walls: player.walls_remaining,
                });
            }
            if !player.position.on_board() {
                return Err(SetupError::PositionOffBoard(id, player.position));
            }
        }
        if players[0].position == players[1].position {
            return Err(SetupError::SharedPosition(players[0].position));
        }

        let placed: Vec<Wall> = walls.iter().collect();
        if let Some(wall) = placed.iter().find(|wall| !wall.in_bounds()) {
            return Err(SetupError::WallOffBoard(*wall));
        }
        for (i, a) in placed.iter().enumerate() {
            if let Some(b) = placed[i + 1..].iter().find(|b| wall_overlaps(a, b)) {
                return Err(SetupError::OverlappingWalls(*a, *b));
            }
        }

        let budget = placed.len()
            + usize::from(players[0].walls_remaining)
            + usize::from(players[1].walls_remaining);
        if budget != TOTAL_WALLS {
            return Err(SetupError::WallBudget(budget));
        }

        debug!(walls = placed.len(), "Snapshot accepted");
        Ok(Self { players, walls })
    }
}
