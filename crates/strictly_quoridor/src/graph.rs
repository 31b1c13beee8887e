//! The admissible-moves graph.
//!
//! The graph is a derived view of `(player positions, placed walls)`: it is
//! rebuilt from scratch for every query and never stored. Construction runs
//! in three independent stages so each can be tested on its own:
//!
//! 1. [`MoveGraph::board`] - every orthogonal step on an empty board.
//! 2. [`MoveGraph::remove_wall`] - cut the edges a wall crosses.
//! 3. [`apply_occupancy`] - forbid stepping onto a token and add the
//!    straight or diagonal jumps that replace those steps.
//!
//! Finally every goal-row cell gets an edge into its goal sentinel, which
//! turns "can this player still win?" into single-target reachability.

use crate::geometry::{BOARD_SIZE, Cell, Wall, orthogonal_neighbors};
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use tracing::{debug, instrument, trace};

/// Synthetic node reached from any cell of a goal row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Goal {
    /// Row 9, player One's target.
    Row9,
    /// Row 1, player Two's target.
    Row1,
}

impl Goal {
    /// The board row feeding this sentinel.
    pub fn row(self) -> i8 {
        match self {
            Goal::Row9 => 9,
            Goal::Row1 => 1,
        }
    }
}

/// A node of the admissible-moves graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Node {
    /// A board cell.
    Cell(Cell),
    /// A goal sentinel.
    Goal(Goal),
}

impl From<Cell> for Node {
    fn from(cell: Cell) -> Self {
        Node::Cell(cell)
    }
}

/// Directed graph of legal single moves, keyed by node.
///
/// Ordered maps keep iteration deterministic, so two graphs built from the
/// same input compare equal edge for edge.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoveGraph {
    edges: BTreeMap<Node, BTreeSet<Node>>,
}

impl MoveGraph {
    /// Every orthogonal step between the 81 cells, plus both (isolated) goal
    /// sentinels.
    pub fn board() -> Self {
        let mut graph = Self::default();
        for cell in Cell::all() {
            let successors = orthogonal_neighbors(cell)
                .into_iter()
                .map(Node::Cell)
                .collect();
            graph.edges.insert(Node::Cell(cell), successors);
        }
        graph.edges.insert(Node::Goal(Goal::Row9), BTreeSet::new());
        graph.edges.insert(Node::Goal(Goal::Row1), BTreeSet::new());
        graph
    }

    /// Builds the full graph for the given positions and walls.
    ///
    /// `positions[0]` belongs to player One and `positions[1]` to player Two;
    /// only the set of occupied cells matters to the edges, but goal
    /// sentinels are always wired for both rows.
    #[instrument(level = "debug", skip(walls), fields(positions = ?positions))]
    pub fn build<I>(positions: &[Cell], walls: I) -> Self
    where
        I: IntoIterator<Item = Wall>,
    {
        let mut base = Self::board();
        for wall in walls {
            base.remove_wall(&wall);
        }
        let mut graph = apply_occupancy(&base, positions);
        graph.add_goal_edges();
        debug!(edges = graph.edge_count(), "Built admissible-moves graph");
        graph
    }

    /// Removes the four edges `wall` crosses. Missing edges are ignored.
    pub fn remove_wall(&mut self, wall: &Wall) {
        for (from, to) in wall.blocked_edges() {
            self.remove_edge(Node::Cell(from), Node::Cell(to));
        }
    }

    /// Wires `(x, 9) -> Row9` and `(x, 1) -> Row1` for every column.
    pub fn add_goal_edges(&mut self) {
        for goal in [Goal::Row9, Goal::Row1] {
            for x in 1..=BOARD_SIZE {
                self.add_edge(Node::Cell(Cell::new(x, goal.row())), Node::Goal(goal));
            }
        }
    }

    /// Adds a directed edge.
    pub fn add_edge(&mut self, from: Node, to: Node) {
        self.edges.entry(to).or_default();
        self.edges.entry(from).or_default().insert(to);
    }

    /// Removes a directed edge, returning whether it existed.
    pub fn remove_edge(&mut self, from: Node, to: Node) -> bool {
        self.edges
            .get_mut(&from)
            .is_some_and(|successors| successors.remove(&to))
    }

    /// Returns true if the directed edge exists.
    pub fn has_edge(&self, from: Node, to: Node) -> bool {
        self.edges
            .get(&from)
            .is_some_and(|successors| successors.contains(&to))
    }

    /// Successors of `node` in ascending order.
    pub fn successors(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        self.edges.get(&node).into_iter().flatten().copied()
    }

    /// Cell successors of `cell`, sentinels skipped.
    pub fn cell_successors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        self.successors(Node::Cell(cell)).filter_map(|node| match node {
            Node::Cell(cell) => Some(cell),
            Node::Goal(_) => None,
        })
    }

    /// Every node with an edge into `node`.
    pub fn predecessors(&self, node: Node) -> Vec<Node> {
        self.edges
            .iter()
            .filter(|(_, successors)| successors.contains(&node))
            .map(|(from, _)| *from)
            .collect()
    }

    /// All edges in ascending `(from, to)` order.
    pub fn edges(&self) -> impl Iterator<Item = (Node, Node)> + '_ {
        self.edges
            .iter()
            .flat_map(|(from, successors)| successors.iter().map(move |to| (*from, *to)))
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }

    /// Number of token moves on a shortest path from `from` to `goal`.
    ///
    /// A cell already on the goal row is at distance 0. Returns `None` when
    /// the sentinel is unreachable.
    #[instrument(level = "trace", skip(self))]
    pub fn distance(&self, from: Cell, goal: Goal) -> Option<usize> {
        let start = Node::Cell(from);
        let target = Node::Goal(goal);
        if !self.edges.contains_key(&start) {
            return None;
        }

        let mut seen = BTreeSet::from([start]);
        let mut queue = VecDeque::from([(start, 0usize)]);
        while let Some((node, depth)) = queue.pop_front() {
            for next in self.successors(node) {
                if next == target {
                    trace!(depth, "Reached goal sentinel");
                    return Some(depth);
                }
                if seen.insert(next) {
                    queue.push_back((next, depth + 1));
                }
            }
        }
        None
    }

    /// Returns true if `goal` is reachable from `from`.
    pub fn path_exists(&self, from: Cell, goal: Goal) -> bool {
        self.distance(from, goal).is_some()
    }
}

/// Applies the occupied-cell rule to a wall-adjusted `base` graph.
///
/// Every edge into an occupied cell is dropped. Each dropped edge
/// `pred -> occupied` is replaced by a straight jump to the cell beyond, or,
/// when that landing is walled off, off the board or itself occupied, by
/// diagonal jumps to the occupied cell's other free successors.
///
/// All decisions read `base`, never the graph being edited, so two adjacent
/// tokens cannot leak jump edges into each other's rewrite.
#[instrument(level = "debug", skip(base))]
pub fn apply_occupancy(base: &MoveGraph, occupied: &[Cell]) -> MoveGraph {
    let mut adjusted = base.clone();
    for &cell in occupied {
        let target = Node::Cell(cell);
        for pred in base.predecessors(target) {
            let Node::Cell(from) = pred else {
                continue;
            };
            adjusted.remove_edge(pred, target);

            let straight = cell.beyond(from);
            if base.has_edge(target, Node::Cell(straight)) && !occupied.contains(&straight) {
                adjusted.add_edge(pred, Node::Cell(straight));
                continue;
            }
            for side in base.cell_successors(cell) {
                if side != from && !occupied.contains(&side) {
                    adjusted.add_edge(pred, Node::Cell(side));
                }
            }
        }
    }
    adjusted
}
