//! Move legality: token destinations and wall-placement validation.
//!
//! Every check here is pure. Nothing mutates the state; callers commit only
//! after a check returns `Ok`.

use crate::action::MoveError;
use crate::geometry::{Cell, Wall, wall_overlaps};
use crate::graph::{Goal, MoveGraph};
use crate::state::{GameState, PlayerId};
use std::collections::BTreeSet;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Where a token may go this turn.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Destinations {
    /// Reachable cells in one step or jump, ascending.
    pub cells: BTreeSet<Cell>,
    /// True if one of `cells` lies on the mover's goal row.
    pub reaches_goal: bool,
}

impl Destinations {
    /// Returns true if `cell` is a legal destination.
    pub fn contains(&self, cell: &Cell) -> bool {
        self.cells.contains(cell)
    }
}

/// Successor cells of the player's token in the current graph.
#[instrument(level = "debug", skip(state))]
pub fn legal_token_destinations(state: &GameState, player: PlayerId) -> Destinations {
    destinations_in(&state.graph(), state, player)
}

pub(crate) fn destinations_in(graph: &MoveGraph, state: &GameState, player: PlayerId) -> Destinations {
    let from = *state.player(player).position();
    let cells: BTreeSet<Cell> = graph.cell_successors(from).collect();
    let goal_row = player.goal().row();
    let reaches_goal = cells.iter().any(|cell| cell.y == goal_row);
    debug!(%from, count = cells.len(), reaches_goal, "Enumerated destinations");
    Destinations {
        cells,
        reaches_goal,
    }
}

/// Returns true if `goal` can be reached from `from` in `graph`.
pub fn path_exists(graph: &MoveGraph, from: Cell, goal: Goal) -> bool {
    graph.path_exists(from, goal)
}

/// Token moves on a shortest path from `from` to `goal`, 0 on the goal row.
pub fn distance_to_goal(graph: &MoveGraph, from: Cell, goal: Goal) -> Option<usize> {
    graph.distance(from, goal)
}

/// Checks that the player's token may move to `cell`.
///
/// # Errors
///
/// `OutOfBounds` for an off-board target, `OccupiedDestination` for any
/// target the admissible-moves graph does not offer.
#[instrument(level = "debug", skip(state))]
pub fn validate_token_move(state: &GameState, player: PlayerId, cell: Cell) -> Result<(), MoveError> {
    if !cell.on_board() {
        return Err(MoveError::OutOfBounds {
            x: cell.x,
            y: cell.y,
        });
    }
    if !legal_token_destinations(state, player).contains(&cell) {
        return Err(MoveError::OccupiedDestination(cell));
    }
    Ok(())
}

/// Checks that the player may place `wall`.
///
/// Runs, in order: anchor range, collision with placed walls, walls left,
/// and path existence for both players with the wall in place. The cheap
/// checks short-circuit before the graph is rebuilt.
#[instrument(level = "debug", skip(state))]
pub fn validate_wall_placement(state: &GameState, player: PlayerId, wall: Wall) -> Result<(), MoveError> {
    wall_placement_graph(state, player, wall).map(|_| ())
}

/// Like [`validate_wall_placement`], but hands back the graph with the
/// wall in place.
pub(crate) fn wall_placement_graph(
    state: &GameState,
    player: PlayerId,
    wall: Wall,
) -> Result<MoveGraph, MoveError> {
    if !wall.in_bounds() {
        return Err(MoveError::OutOfBounds {
            x: wall.anchor.x,
            y: wall.anchor.y,
        });
    }
    if state.walls().iter().any(|placed| wall_overlaps(&placed, &wall)) {
        return Err(MoveError::Collision(wall));
    }
    if *state.player(player).walls_remaining() == 0 {
        return Err(MoveError::NoWallsLeft(player));
    }

    let walls = state.walls().with(wall);
    let graph = MoveGraph::build(&state.positions(), walls.iter());
    for id in PlayerId::iter() {
        if !path_exists(&graph, *state.player(id).position(), id.goal()) {
            debug!(%wall, stranded = %id, "Wall would block a path");
            return Err(MoveError::BlocksPath(wall));
        }
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Player, Snapshot, WallSet};

    fn state_with(one: Cell, two: Cell, horizontal: Vec<Cell>, vertical: Vec<Cell>) -> GameState {
        let placed = (horizontal.len() + vertical.len()) as u8;
        GameState::try_from(Snapshot {
            players: [
                Player::new("ada", 10 - placed, one),
                Player::new("bob", 10, two),
            ],
            walls: WallSet::new(horizontal, vertical),
        })
        .unwrap()
    }

    #[test]
    fn test_destinations_from_start() {
        let state = GameState::new("ada", "bob");
        let dest = legal_token_destinations(&state, PlayerId::One);
        let expected: BTreeSet<_> = [Cell::new(4, 1), Cell::new(6, 1), Cell::new(5, 2)].into();
        assert_eq!(dest.cells, expected);
        assert!(!dest.reaches_goal);
    }

    #[test]
    fn test_reaches_goal_flag() {
        let state = state_with(Cell::new(2, 8), Cell::new(7, 7), vec![], vec![]);
        let dest = legal_token_destinations(&state, PlayerId::One);
        assert!(dest.reaches_goal);
        assert!(!legal_token_destinations(&state, PlayerId::Two).reaches_goal);
    }

    #[test]
    fn test_distance_to_goal() {
        let state = state_with(Cell::new(5, 1), Cell::new(5, 9), vec![Cell::new(5, 2)], vec![]);
        let graph = state.graph();
        // H(5, 2) costs each player one sideways step.
        assert_eq!(distance_to_goal(&graph, Cell::new(5, 1), Goal::Row9), Some(9));
        assert_eq!(distance_to_goal(&graph, Cell::new(5, 9), Goal::Row1), Some(9));
    }

    #[test]
    fn test_token_move_errors() {
        let state = GameState::new("ada", "bob");
        assert_eq!(
            validate_token_move(&state, PlayerId::One, Cell::new(5, 0)),
            Err(MoveError::OutOfBounds { x: 5, y: 0 })
        );
        assert_eq!(
            validate_token_move(&state, PlayerId::One, Cell::new(6, 2)),
            Err(MoveError::OccupiedDestination(Cell::new(6, 2)))
        );
        assert!(validate_token_move(&state, PlayerId::One, Cell::new(5, 2)).is_ok());
    }

    #[test]
    fn test_wall_checks_run_in_order() {
        let state = state_with(Cell::new(5, 1), Cell::new(5, 9), vec![Cell::new(4, 5)], vec![]);
        assert_eq!(
            validate_wall_placement(&state, PlayerId::One, Wall::horizontal(9, 5)),
            Err(MoveError::OutOfBounds { x: 9, y: 5 })
        );
        assert_eq!(
            validate_wall_placement(&state, PlayerId::One, Wall::vertical(5, 4)),
            Err(MoveError::Collision(Wall::vertical(5, 4)))
        );
    }

    #[test]
    fn test_no_walls_left() {
        let horizontal: Vec<Cell> = [1, 4]
            .into_iter()
            .flat_map(|x| [2, 4, 6, 8].map(|y| Cell::new(x, y)))
            .collect();
        let vertical = vec![Cell::new(9, 1), Cell::new(9, 5)];
        let state = state_with(Cell::new(5, 1), Cell::new(5, 9), horizontal, vertical);
        assert_eq!(*state.player(PlayerId::One).walls_remaining(), 0);

        assert_eq!(
            validate_wall_placement(&state, PlayerId::One, Wall::horizontal(6, 5)),
            Err(MoveError::NoWallsLeft(PlayerId::One))
        );
        assert!(validate_wall_placement(&state, PlayerId::Two, Wall::horizontal(6, 5)).is_ok());
    }

    #[test]
    fn test_wall_blocking_path_is_rejected() {
        // A 1x2 pocket in the corner around (1, 1) and (2, 1).
        let state = state_with(Cell::new(1, 1), Cell::new(5, 9), vec![Cell::new(1, 2)], vec![]);
        assert_eq!(
            validate_wall_placement(&state, PlayerId::Two, Wall::vertical(3, 1)),
            Err(MoveError::BlocksPath(Wall::vertical(3, 1)))
        );
    }
}
