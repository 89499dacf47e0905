use std::fmt;

use tracing::instrument;

use super::player::Marker;
use crate::error::{BoardError, MoveError};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Marker),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Symbol used when printing the board; blank for an empty cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Occupied(marker) => marker.symbol(),
        }
    }
}

/// A cell coordinate. Row 0 is the top, row 5 is the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(row: usize, column: usize) -> Self {
        Position { row, column }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Build a board from one string per row, top row first. A space is an
    /// empty cell, any other character is a marker. Gravity is not checked,
    /// so arbitrary positions can be set up.
    pub fn from_rows(rows: [&str; ROWS]) -> Result<Self, BoardError> {
        let mut board = Board::new();
        for (row, text) in rows.iter().enumerate() {
            let len = text.chars().count();
            if len != COLS {
                return Err(BoardError::RowLength {
                    row,
                    len,
                    expected: COLS,
                });
            }
            for (col, symbol) in text.chars().enumerate() {
                if symbol != ' ' {
                    board.cells[row][col] = Cell::Occupied(Marker::new(symbol));
                }
            }
        }
        Ok(board)
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub fn at(&self, position: Position) -> Cell {
        self.cells[position.row][position.column]
    }

    /// One row of cells, left to right.
    pub fn row(&self, row: usize) -> &[Cell; COLS] {
        &self.cells[row]
    }

    /// Every row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; COLS]> + '_ {
        self.cells.iter()
    }

    /// One column of cells, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().map(move |row| row[col])
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        !self.cells[0][col].is_empty()
    }

    /// Row a piece dropped into `col` would come to rest in: the last empty
    /// cell before the first occupied one, scanning down from the top.
    pub fn landing_row(&self, col: usize) -> Result<usize, MoveError> {
        (0..ROWS)
            .take_while(|&row| self.cells[row][col].is_empty())
            .last()
            .ok_or(MoveError::ColumnFull(col))
    }

    /// Write a marker into an empty cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell is already occupied. Only rows returned by
    /// [`Board::landing_row`] are valid targets.
    pub fn place(&mut self, row: usize, col: usize, marker: Marker) {
        let cell = &mut self.cells[row][col];
        assert!(
            cell.is_empty(),
            "cell ({row}, {col}) is already occupied by '{}'",
            cell.symbol()
        );
        *cell = Cell::Occupied(marker);
    }

    /// Drop a piece in a column, returns the row where it landed
    #[instrument(level = "trace", skip(self))]
    pub fn drop_piece(&mut self, col: usize, marker: Marker) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::OutOfRange(col as i64 + 1));
        }
        let row = self.landing_row(col)?;
        self.place(row, col, marker);
        Ok(row)
    }

    /// True once no column can take another piece.
    pub fn is_top_row_full(&self) -> bool {
        self.cells[0].iter().all(|cell| !cell.is_empty())
    }

    /// Number of occupied cells.
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            write!(f, "|")?;
            for cell in row {
                write!(f, " {} |", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: Marker = Marker::new('#');
    const AT: Marker = Marker::new('@');

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    fn test_landing_row_on_empty_board() {
        let board = Board::new();
        for col in [0, 3, 6] {
            assert_eq!(board.landing_row(col), Ok(5));
        }
    }

    #[test]
    fn test_landing_row_above_stack() {
        let board = Board::from_rows([
            "       ",
            "       ",
            "       ",
            "#######",
            "#######",
            "#######",
        ])
        .unwrap();
        for col in [0, 3, 6] {
            assert_eq!(board.landing_row(col), Ok(2));
        }
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new();

        let row = board.drop_piece(3, HASH).unwrap();
        assert_eq!(row, 5);
        assert_eq!(board.get(5, 3), Cell::Occupied(HASH));

        let row = board.drop_piece(3, AT).unwrap();
        assert_eq!(row, 4);
        assert_eq!(board.get(4, 3), Cell::Occupied(AT));
    }

    #[test]
    fn test_drop_changes_exactly_one_cell() {
        let mut board = Board::new();
        board.drop_piece(2, HASH).unwrap();
        board.drop_piece(4, AT).unwrap();

        for col in 0..COLS {
            let before = board;
            let expected_row = board.landing_row(col).unwrap();
            let row = board.drop_piece(col, HASH).unwrap();
            assert_eq!(row, expected_row);

            for r in 0..ROWS {
                for c in 0..COLS {
                    if (r, c) == (row, col) {
                        assert_eq!(before.get(r, c), Cell::Empty);
                        assert_eq!(board.get(r, c), Cell::Occupied(HASH));
                    } else {
                        assert_eq!(before.get(r, c), board.get(r, c));
                    }
                }
            }
        }
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.drop_piece(0, HASH).unwrap();
        }

        assert!(board.is_column_full(0));
        let before = board;
        assert_eq!(board.landing_row(0), Err(MoveError::ColumnFull(0)));
        assert_eq!(board.drop_piece(0, AT), Err(MoveError::ColumnFull(0)));
        assert_eq!(board.drop_piece(0, AT), Err(MoveError::ColumnFull(0)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_drop_out_of_range_column() {
        let mut board = Board::new();
        assert_eq!(board.drop_piece(7, HASH), Err(MoveError::OutOfRange(8)));
        assert_eq!(board, Board::new());
    }

    #[test]
    #[should_panic(expected = "already occupied")]
    fn test_place_on_occupied_cell_panics() {
        let mut board = Board::new();
        board.place(3, 3, HASH);
        board.place(3, 3, AT);
    }

    #[test]
    fn test_place_writes_marker() {
        let mut board = Board::new();
        board.place(3, 3, HASH);
        assert_eq!(board.get(3, 3), Cell::Occupied(HASH));
    }

    #[test]
    fn test_top_row_full_ignores_lower_rows() {
        let board = Board::from_rows([
            "@@@@@@@",
            "       ",
            "       ",
            "       ",
            "       ",
            "       ",
        ])
        .unwrap();
        assert!(board.is_top_row_full());
        assert_eq!(board.landing_row(3), Err(MoveError::ColumnFull(3)));

        let board = Board::from_rows([
            "       ",
            "@@@@@@@",
            "@@@@@@@",
            "@@@@@@@",
            "@@@@@@@",
            "@@@@@@@",
        ])
        .unwrap();
        assert!(!board.is_top_row_full());
    }

    #[test]
    fn test_from_rows_rejects_short_row() {
        let err = Board::from_rows(["", "", "", "", "", ""]).unwrap_err();
        assert_eq!(
            err,
            BoardError::RowLength {
                row: 0,
                len: 0,
                expected: COLS
            }
        );
    }

    #[test]
    fn test_column_iterates_top_to_bottom() {
        let mut board = Board::new();
        board.drop_piece(1, HASH).unwrap();
        board.drop_piece(1, AT).unwrap();
        let cells: Vec<Cell> = board.column(1).collect();
        assert_eq!(cells[5], Cell::Occupied(HASH));
        assert_eq!(cells[4], Cell::Occupied(AT));
        assert!(cells[..4].iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_display_renders_rows() {
        let mut board = Board::new();
        board.drop_piece(0, HASH).unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), ROWS);
        assert_eq!(lines[0], "|   |   |   |   |   |   |   |");
        assert_eq!(lines[5], "| # |   |   |   |   |   |   |");
    }
}
