//! Strictly Quoridor - move legality for two-player Quoridor
//!
//! Given the two token positions and the placed walls, this crate derives
//! the graph of admissible token moves, enumerates legal destinations,
//! validates wall placements (a wall may never cut a player off from their
//! goal row) and picks moves for an automated player.
//!
//! # Architecture
//!
//! - **Geometry**: cells, walls and the edges a wall blocks
//! - **Graph**: the admissible-moves graph, rebuilt for every query
//! - **Legality**: destinations and wall validation, always check-then-commit
//! - **State**: players, placed walls and validated snapshots
//! - **Selector**: a greedy shortest-path player
//!
//! # Example
//!
//! ```
//! use strictly_quoridor::{Cell, GameState, Move, PlayerId, Wall, choose_move};
//!
//! let mut state = GameState::new("ada", "bob");
//! state.apply(PlayerId::One, Move::Token(Cell::new(5, 2)))?;
//! state.apply(PlayerId::Two, Move::Wall(Wall::horizontal(4, 4)))?;
//!
//! let suggestion = choose_move(&state, PlayerId::One)?;
//! assert!(state.clone().apply(PlayerId::One, suggestion).is_ok());
//! # Ok::<(), strictly_quoridor::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod geometry;
mod graph;
mod invariants;
mod legality;
mod render;
mod selector;
mod state;

// Crate-level exports - Geometry
pub use geometry::{
    BOARD_SIZE, Cell, Edge, Orientation, Wall, horizontal_wall_blocked_edges, orthogonal_neighbors,
    vertical_wall_blocked_edges, wall_overlaps,
};

// Crate-level exports - Graph
pub use graph::{Goal, MoveGraph, Node, apply_occupancy};

// Crate-level exports - Actions and errors
pub use action::{Move, MoveError, MoveParseError, SetupError};

// Crate-level exports - State
pub use state::{GameState, Player, PlayerId, Snapshot, TOTAL_WALLS, WALLS_PER_PLAYER, WallSet};

// Crate-level exports - Legality
pub use legality::{
    Destinations, distance_to_goal, legal_token_destinations, path_exists, validate_token_move,
    validate_wall_placement,
};

// Crate-level exports - Invariants
pub use invariants::{
    DistinctPositionsInvariant, Invariant, InvariantSet, InvariantViolation, QuoridorInvariants,
    WallBudgetInvariant, WellFormedWallsInvariant,
};

// Crate-level exports - Selection and rendering
pub use render::render;
pub use selector::choose_move;
