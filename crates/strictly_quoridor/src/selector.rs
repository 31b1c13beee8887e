//! Greedy shortest-path move selection.
//!
//! The selector races: it steps along a shortest path to its goal row, and
//! spends a wall instead when stepping does not help or the opponent is
//! ahead in the race and some wall lengthens the opponent's path. There is
//! no randomness, so identical states always yield identical moves.

use crate::action::{Move, MoveError};
use crate::geometry::{Cell, Wall};
use crate::graph::MoveGraph;
use crate::legality::{destinations_in, wall_placement_graph};
use crate::state::{GameState, PlayerId};
use tracing::{debug, info, instrument};

/// Unreachable counts as infinitely far.
fn rank(distance: Option<usize>) -> usize {
    distance.unwrap_or(usize::MAX)
}

/// Picks a legal move for `player`.
///
/// # Errors
///
/// `GameAlreadyOver` once a player has won, `NoLegalMove` if the player
/// can neither move nor usefully wall.
#[instrument(skip(state), fields(player = %player))]
pub fn choose_move(state: &GameState, player: PlayerId) -> Result<Move, MoveError> {
    if let Some(winner) = state.winner() {
        return Err(MoveError::GameAlreadyOver(winner));
    }

    let opponent = player.opponent();
    let graph = state.graph();
    let own = graph.distance(*state.player(player).position(), player.goal());
    let theirs = graph.distance(*state.player(opponent).position(), opponent.goal());
    debug!(?own, ?theirs, "Race distances");

    let step = best_step(&graph, state, player);
    let improves = step.is_some_and(|(_, after)| rank(after) < rank(own));
    let behind = rank(theirs) < rank(own);

    if improves && !behind {
        if let Some((cell, after)) = step {
            info!(%cell, ?after, "Stepping toward goal");
            return Ok(Move::Token(cell));
        }
    }

    if *state.player(player).walls_remaining() > 0 {
        if let Some(wall) = best_wall(state, player, theirs) {
            info!(%wall, "Placing wall");
            return Ok(Move::Wall(wall));
        }
    }

    match step {
        Some((cell, after)) => {
            info!(%cell, ?after, "Stepping");
            Ok(Move::Token(cell))
        }
        None => Err(MoveError::NoLegalMove(player)),
    }
}

/// The destination with the shortest remaining distance, lowest `(x, y)`
/// first on ties.
fn best_step(graph: &MoveGraph, state: &GameState, player: PlayerId) -> Option<(Cell, Option<usize>)> {
    let mut best: Option<(Cell, Option<usize>)> = None;
    for cell in destinations_in(graph, state, player).cells {
        let mut positions = state.positions();
        positions[player.index()] = cell;
        let after = MoveGraph::build(&positions, state.walls().iter()).distance(cell, player.goal());
        if best.is_none_or(|(_, current)| rank(after) < rank(current)) {
            best = Some((cell, after));
        }
    }
    best
}

/// The legal wall that lengthens the opponent's path the most, first in
/// [`Wall::all`] order on ties. Only strict increases count.
fn best_wall(state: &GameState, player: PlayerId, baseline: Option<usize>) -> Option<Wall> {
    let baseline = baseline?;
    let opponent = player.opponent();
    let from = *state.player(opponent).position();

    let mut best: Option<(Wall, usize)> = None;
    for wall in Wall::all() {
        let Ok(graph) = wall_placement_graph(state, player, wall) else {
            continue;
        };
        let Some(after) = graph.distance(from, opponent.goal()) else {
            continue;
        };
        if after > baseline && best.is_none_or(|(_, current)| after > current) {
            best = Some((wall, after));
        }
    }
    debug!(?best, baseline, "Wall search finished");
    best.map(|(wall, _)| wall)
}
