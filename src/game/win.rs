//! Four-in-a-row detection for the piece that was just placed.
//!
//! Every axis through the placed cell is scanned end to end, so a run is found
//! wherever it sits on that line, not only when it touches the new piece.

use std::iter;

use tracing::instrument;

use super::board::{Board, Cell, Position, COLS, ROWS};
use super::player::Marker;

/// Length of the run that wins the game.
pub const WIN_LENGTH: usize = 4;

/// The two diagonal axes through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagonal {
    /// Bottom-left to top-right (`/`).
    Rising,
    /// Bottom-right to top-left (`\`).
    Falling,
}

impl Diagonal {
    /// Bottom end of the diagonal through `from`: where it meets row 5 or the
    /// side column it runs towards when walked downwards.
    pub fn start(self, from: Position) -> Position {
        let mut pos = from;
        match self {
            Diagonal::Rising => {
                while pos.row < ROWS - 1 && pos.column > 0 {
                    pos.row += 1;
                    pos.column -= 1;
                }
            }
            Diagonal::Falling => {
                while pos.row < ROWS - 1 && pos.column < COLS - 1 {
                    pos.row += 1;
                    pos.column += 1;
                }
            }
        }
        pos
    }

    /// Next cell when walking up the diagonal, `None` past the board edge.
    fn step_up(self, pos: Position) -> Option<Position> {
        let row = pos.row.checked_sub(1)?;
        let column = match self {
            Diagonal::Rising => Some(pos.column + 1).filter(|&c| c < COLS)?,
            Diagonal::Falling => pos.column.checked_sub(1)?,
        };
        Some(Position { row, column })
    }

    /// Cells from `start` up to the opposite edge of the board.
    pub fn cells(self, board: &Board, start: Position) -> impl Iterator<Item = Cell> + '_ {
        iter::successors(Some(start), move |&pos| self.step_up(pos)).map(move |pos| board.at(pos))
    }

    /// Longest run of `marker` walking up the diagonal from `start`.
    pub fn run_length(self, board: &Board, start: Position, marker: Marker) -> usize {
        longest_run(self.cells(board, start), marker)
    }
}

/// Longest stretch of consecutive `marker` cells; anything else resets the count.
pub fn longest_run(cells: impl IntoIterator<Item = Cell>, marker: Marker) -> usize {
    let mut best = 0;
    let mut current = 0;
    for cell in cells {
        if cell == Cell::Occupied(marker) {
            current += 1;
            best = best.max(current);
        } else {
            current = 0;
        }
    }
    best
}

pub fn horizontal_win(board: &Board, row: usize, marker: Marker) -> bool {
    longest_run(board.row(row).iter().copied(), marker) >= WIN_LENGTH
}

pub fn vertical_win(board: &Board, column: usize, marker: Marker) -> bool {
    longest_run(board.column(column), marker) >= WIN_LENGTH
}

pub fn diagonal_win(board: &Board, position: Position, marker: Marker) -> bool {
    [Diagonal::Rising, Diagonal::Falling].into_iter().any(|diagonal| {
        let start = diagonal.start(position);
        diagonal.run_length(board, start, marker) >= WIN_LENGTH
    })
}

/// Check whether the piece just placed at `position` completed a line.
#[instrument(level = "debug", skip(board), ret)]
pub fn is_winning_move(board: &Board, position: Position, marker: Marker) -> bool {
    horizontal_win(board, position.row, marker)
        || vertical_win(board, position.column, marker)
        || diagonal_win(board, position, marker)
}
