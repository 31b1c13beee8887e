//! Board geometry: cells, walls and the edges a wall blocks.
//!
//! Everything here is a pure function of coordinates. Cells use 1-based
//! `(x, y)` coordinates with `x` the column and `y` the row; row 1 is player
//! One's home row and row 9 is player Two's.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Number of cells along each side of the board.
pub const BOARD_SIZE: i8 = 9;

/// A square on the board.
///
/// Ordering is lexicographic on `(x, y)`, which the move selector relies on
/// for deterministic tie-breaking. Coordinates are signed so that jump
/// arithmetic can step off the board; such cells never become graph nodes.
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
    derive_more::Display,
)]
#[serde(from = "(i8, i8)", into = "(i8, i8)")]
#[display("({x}, {y})")]
pub struct Cell {
    /// Column, 1 on the left.
    pub x: i8,
    /// Row, 1 at the bottom.
    pub y: i8,
}

impl Cell {
    /// Creates a cell without checking that it lies on the board.
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Returns true if both coordinates are within `1..=9`.
    pub fn on_board(self) -> bool {
        (1..=BOARD_SIZE).contains(&self.x) && (1..=BOARD_SIZE).contains(&self.y)
    }

    /// The cell on the far side of `self` when stepping from `from`.
    pub fn beyond(self, from: Cell) -> Cell {
        Cell::new(2 * self.x - from.x, 2 * self.y - from.y)
    }

    /// All 81 board cells, column by column.
    pub fn all() -> impl Iterator<Item = Cell> {
        (1..=BOARD_SIZE).flat_map(|x| (1..=BOARD_SIZE).map(move |y| Cell::new(x, y)))
    }
}

impl From<(i8, i8)> for Cell {
    fn from((x, y): (i8, i8)) -> Self {
        Cell::new(x, y)
    }
}

impl From<Cell> for (i8, i8) {
    fn from(cell: Cell) -> Self {
        (cell.x, cell.y)
    }
}

/// A directed edge between two cells.
pub type Edge = (Cell, Cell);

/// Orthogonal neighbours of `cell`, clipped to the board.
///
/// Returned in a fixed order: left, right, down, up.
#[instrument(level = "trace")]
pub fn orthogonal_neighbors(cell: Cell) -> Vec<Cell> {
    [
        Cell::new(cell.x - 1, cell.y),
        Cell::new(cell.x + 1, cell.y),
        Cell::new(cell.x, cell.y - 1),
        Cell::new(cell.x, cell.y + 1),
    ]
    .into_iter()
    .filter(|c| c.on_board())
    .collect()
}

/// Orientation of a wall.
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
pub enum Orientation {
    /// Lies between two rows.
    #[display("horizontal")]
    Horizontal,
    /// Lies between two columns.
    #[display("vertical")]
    Vertical,
}

impl Orientation {
    /// Valid anchor ranges `(x, y)` for this orientation.
    pub fn anchor_ranges(self) -> (RangeInclusive<i8>, RangeInclusive<i8>) {
        match self {
            Orientation::Horizontal => (1..=BOARD_SIZE - 1, 2..=BOARD_SIZE),
            Orientation::Vertical => (2..=BOARD_SIZE, 1..=BOARD_SIZE - 1),
        }
    }
}

/// A two-cell wall.
///
/// A horizontal wall at `(x, y)` sits between rows `y - 1` and `y` and spans
/// columns `x` and `x + 1`. A vertical wall at `(x, y)` sits between columns
/// `x - 1` and `x` and spans rows `y` and `y + 1`.
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
    derive_more::Display,
)]
#[display("{orientation} wall at {anchor}")]
pub struct Wall {
    /// Lower-left reference cell.
    pub anchor: Cell,
    /// Orientation.
    pub orientation: Orientation,
}

impl Wall {
    /// Creates a wall.
    pub const fn new(anchor: Cell, orientation: Orientation) -> Self {
        Self {
            anchor,
            orientation,
        }
    }

    /// Horizontal wall anchored at `(x, y)`.
    pub const fn horizontal(x: i8, y: i8) -> Self {
        Self::new(Cell::new(x, y), Orientation::Horizontal)
    }

    /// Vertical wall anchored at `(x, y)`.
    pub const fn vertical(x: i8, y: i8) -> Self {
        Self::new(Cell::new(x, y), Orientation::Vertical)
    }

    /// Returns true if the anchor lies in this orientation's valid range.
    pub fn in_bounds(&self) -> bool {
        let (xs, ys) = self.orientation.anchor_ranges();
        xs.contains(&self.anchor.x) && ys.contains(&self.anchor.y)
    }

    /// The four directed edges this wall cuts.
    pub fn blocked_edges(&self) -> [Edge; 4] {
        match self.orientation {
            Orientation::Horizontal => horizontal_wall_blocked_edges(self),
            Orientation::Vertical => vertical_wall_blocked_edges(self),
        }
    }

    /// Every in-range wall: horizontal before vertical, then by x, then by y.
    pub fn all() -> impl Iterator<Item = Wall> {
        Orientation::iter().flat_map(|orientation| {
            let (xs, ys) = orientation.anchor_ranges();
            xs.flat_map(move |x| {
                ys.clone()
                    .map(move |y| Wall::new(Cell::new(x, y), orientation))
            })
        })
    }
}

/// Edges crossing a horizontal wall: `(x, y-1) <-> (x, y)` and
/// `(x+1, y-1) <-> (x+1, y)`.
pub fn horizontal_wall_blocked_edges(wall: &Wall) -> [Edge; 4] {
    let Cell { x, y } = wall.anchor;
    [
        (Cell::new(x, y - 1), Cell::new(x, y)),
        (Cell::new(x, y), Cell::new(x, y - 1)),
        (Cell::new(x + 1, y - 1), Cell::new(x + 1, y)),
        (Cell::new(x + 1, y), Cell::new(x + 1, y - 1)),
    ]
}

/// Edges crossing a vertical wall: `(x-1, y) <-> (x, y)` and
/// `(x-1, y+1) <-> (x, y+1)`.
pub fn vertical_wall_blocked_edges(wall: &Wall) -> [Edge; 4] {
    let Cell { x, y } = wall.anchor;
    [
        (Cell::new(x - 1, y), Cell::new(x, y)),
        (Cell::new(x, y), Cell::new(x - 1, y)),
        (Cell::new(x - 1, y + 1), Cell::new(x, y + 1)),
        (Cell::new(x, y + 1), Cell::new(x - 1, y + 1)),
    ]
}

/// Returns true if two walls cannot both stand on the board.
///
/// Parallel walls clash when they share a blocked edge. A horizontal wall at
/// `(x, y)` and a vertical wall at `(x + 1, y - 1)` cross at the same
/// midpoint.
#[instrument(level = "trace")]
pub fn wall_overlaps(existing: &Wall, candidate: &Wall) -> bool {
    let (a, b) = (existing.anchor, candidate.anchor);
    match (existing.orientation, candidate.orientation) {
        (Orientation::Horizontal, Orientation::Horizontal) => a.y == b.y && (a.x - b.x).abs() <= 1,
        (Orientation::Vertical, Orientation::Vertical) => a.x == b.x && (a.y - b.y).abs() <= 1,
        (Orientation::Horizontal, Orientation::Vertical) => b == Cell::new(a.x + 1, a.y - 1),
        (Orientation::Vertical, Orientation::Horizontal) => a == Cell::new(b.x + 1, b.y - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_has_two_neighbors() {
        let neighbors = orthogonal_neighbors(Cell::new(1, 1));
        assert_eq!(neighbors, vec![Cell::new(2, 1), Cell::new(1, 2)]);
    }

    #[test]
    fn test_center_has_four_neighbors() {
        assert_eq!(orthogonal_neighbors(Cell::new(5, 5)).len(), 4);
    }

    #[test]
    fn test_wall_anchor_ranges() {
        assert!(Wall::horizontal(1, 2).in_bounds());
        assert!(Wall::horizontal(8, 9).in_bounds());
        assert!(!Wall::horizontal(9, 5).in_bounds());
        assert!(!Wall::horizontal(4, 1).in_bounds());
        assert!(Wall::vertical(2, 1).in_bounds());
        assert!(Wall::vertical(9, 8).in_bounds());
        assert!(!Wall::vertical(1, 4).in_bounds());
        assert!(!Wall::vertical(4, 9).in_bounds());
    }

    #[test]
    fn test_horizontal_blocked_edges() {
        let edges = horizontal_wall_blocked_edges(&Wall::horizontal(5, 7));
        assert!(edges.contains(&(Cell::new(5, 6), Cell::new(5, 7))));
        assert!(edges.contains(&(Cell::new(5, 7), Cell::new(5, 6))));
        assert!(edges.contains(&(Cell::new(6, 6), Cell::new(6, 7))));
        assert!(edges.contains(&(Cell::new(6, 7), Cell::new(6, 6))));
    }

    #[test]
    fn test_vertical_blocked_edges() {
        let edges = vertical_wall_blocked_edges(&Wall::vertical(3, 4));
        assert!(edges.contains(&(Cell::new(2, 4), Cell::new(3, 4))));
        assert!(edges.contains(&(Cell::new(3, 5), Cell::new(2, 5))));
    }

    #[test]
    fn test_parallel_overlap() {
        let wall = Wall::horizontal(4, 5);
        assert!(wall_overlaps(&wall, &Wall::horizontal(4, 5)));
        assert!(wall_overlaps(&wall, &Wall::horizontal(5, 5)));
        assert!(wall_overlaps(&wall, &Wall::horizontal(3, 5)));
        assert!(!wall_overlaps(&wall, &Wall::horizontal(6, 5)));
        assert!(!wall_overlaps(&wall, &Wall::horizontal(4, 6)));

        let wall = Wall::vertical(4, 5);
        assert!(wall_overlaps(&wall, &Wall::vertical(4, 6)));
        assert!(!wall_overlaps(&wall, &Wall::vertical(4, 7)));
    }

    #[test]
    fn test_crossing_overlap_is_symmetric() {
        let h = Wall::horizontal(4, 5);
        let v = Wall::vertical(5, 4);
        assert!(wall_overlaps(&h, &v));
        assert!(wall_overlaps(&v, &h));
        assert!(!wall_overlaps(&h, &Wall::vertical(5, 5)));
        assert!(!wall_overlaps(&h, &Wall::vertical(4, 4)));
    }

    #[test]
    fn test_all_walls_order() {
        let walls: Vec<_> = Wall::all().collect();
        assert_eq!(walls.len(), 128);
        assert_eq!(walls[0], Wall::horizontal(1, 2));
        assert_eq!(walls[63], Wall::horizontal(8, 9));
        assert_eq!(walls[64], Wall::vertical(2, 1));
        assert!(walls.iter().all(Wall::in_bounds));
    }
}
