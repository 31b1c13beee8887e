//! ASCII rendering of the board.
//!
//! Row 9 is printed on top. Cells sit four columns apart with a spacer line
//! between rows, so horizontal walls land on spacer lines and vertical walls
//! in the gaps between cells.

use crate::geometry::{BOARD_SIZE, Cell, Orientation, Wall};
use crate::state::{GameState, PlayerId};
use strum::IntoEnumIterator;

const WIDTH: usize = 39;
const HEIGHT: usize = 20;

/// Line index of the row holding cells with this `y`.
fn row_line(y: i8) -> usize {
    1 + 2 * (BOARD_SIZE - y) as usize
}

/// Column index of cells with this `x`.
fn cell_column(x: i8) -> usize {
    4 * x as usize
}

fn blank_grid() -> Vec<Vec<char>> {
    let mut grid = vec![vec![' '; WIDTH]; HEIGHT];
    for column in 3..WIDTH - 1 {
        grid[0][column] = '-';
        grid[HEIGHT - 2][column] = '-';
    }
    grid[HEIGHT - 2][0] = '-';
    grid[HEIGHT - 2][1] = '-';
    grid[HEIGHT - 2][2] = '|';

    for line in &mut grid[1..HEIGHT - 2] {
        line[2] = '|';
        line[WIDTH - 1] = '|';
    }
    grid[HEIGHT - 1][2] = '|';

    for y in 1..=BOARD_SIZE {
        let line = &mut grid[row_line(y)];
        line[0] = char::from(b'0' + y as u8);
        for x in 1..=BOARD_SIZE {
            line[cell_column(x)] = '.';
        }
    }
    for x in 1..=BOARD_SIZE {
        grid[HEIGHT - 1][cell_column(x)] = char::from(b'0' + x as u8);
    }
    grid
}

fn draw_wall(grid: &mut [Vec<char>], wall: &Wall) {
    let Cell { x, y } = wall.anchor;
    match wall.orientation {
        Orientation::Horizontal => {
            let line = row_line(y) + 1;
            let start = cell_column(x) - 1;
            for column in start..start + 7 {
                grid[line][column] = '-';
            }
        }
        Orientation::Vertical => {
            let column = cell_column(x) - 2;
            let bottom = row_line(y);
            for line in bottom - 2..=bottom {
                grid[line][column] = '|';
            }
        }
    }
}

/// Renders the legend line and the board.
pub fn render(state: &GameState) -> String {
    let mut grid = blank_grid();
    for wall in state.walls().iter() {
        draw_wall(&mut grid, &wall);
    }
    for id in PlayerId::iter() {
        let Cell { x, y } = *state.player(id).position();
        grid[row_line(y)][cell_column(x)] = if id == PlayerId::One { '1' } else { '2' };
    }

    let one = state.player(PlayerId::One);
    let two = state.player(PlayerId::Two);
    let mut result = format!(
        "Legend: 1={} ({} walls), 2={} ({} walls)\n",
        one.name(),
        one.walls_remaining(),
        two.name(),
        two.walls_remaining()
    );
    let lines: Vec<String> = grid
        .iter()
        .map(|line| line.iter().collect::<String>().trim_end().to_string())
        .collect();
    result.push_str(&lines.join("\n"));
    result
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render(self))
    }
}
