//! First-class invariants for Quoridor.
//!
//! Invariants are logical properties of a [`GameState`] that must hold after
//! every committed action. They are checked in debug builds and can be
//! tested independently.

use crate::geometry::wall_overlaps;
use crate::state::{GameState, TOTAL_WALLS, WALLS_PER_PLAYER};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Invariants checked together, implemented for tuples.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set, collecting each violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn record<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, A, B, C> InvariantSet<S> for (A, B, C)
where
    A: Invariant<S>,
    B: Invariant<S>,
    C: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        record::<S, A>(state, &mut violations);
        record::<S, B>(state, &mut violations);
        record::<S, C>(state, &mut violations);
        match violations.is_empty() {
            true => Ok(()),
            false => Err(violations),
        }
    }
}

/// Placed plus remaining walls always total 20, and nobody holds more than 10.
pub struct WallBudgetInvariant;

impl Invariant<GameState> for WallBudgetInvariant {
    fn holds(state: &GameState) -> bool {
        let remaining: Vec<u8> = state.players.iter().map(|p| *p.walls_remaining()).collect();
        let total = state.walls.len() + remaining.iter().map(|n| usize::from(*n)).sum::<usize>();
        let valid = total == TOTAL_WALLS && remaining.iter().all(|n| *n <= WALLS_PER_PLAYER);
        if !valid {
            warn!(total, ?remaining, "Wall budget violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Placed and remaining walls must total 20 with at most 10 per player"
    }
}

/// Both tokens stand on the board, on different cells.
pub struct DistinctPositionsInvariant;

impl Invariant<GameState> for DistinctPositionsInvariant {
    fn holds(state: &GameState) -> bool {
        let [a, b] = state.positions();
        let valid = a.on_board() && b.on_board() && a != b;
        if !valid {
            warn!(%a, %b, "Token positions invalid");
        }
        valid
    }

    fn description() -> &'static str {
        "Tokens must stand on distinct board cells"
    }
}

/// Every wall is in range and no two walls overlap or cross.
pub struct WellFormedWallsInvariant;

impl Invariant<GameState> for WellFormedWallsInvariant {
    fn holds(state: &GameState) -> bool {
        let walls: Vec<_> = state.walls.iter().collect();
        let in_range = walls.iter().all(|wall| wall.in_bounds());
        let disjoint = walls
            .iter()
            .enumerate()
            .all(|(i, a)| walls[i + 1..].iter().all(|b| !wall_overlaps(a, b)));
        if !(in_range && disjoint) {
            warn!(in_range, disjoint, "Wall layout invalid");
        }
        in_range && disjoint
    }

    fn description() -> &'static str {
        "Walls must lie in range without overlapping"
    }
}

/// All Quoridor invariants as a composable set.
pub type QuoridorInvariants = (
    WallBudgetInvariant,
    DistinctPositionsInvariant,
    WellFormedWallsInvariant,
);
