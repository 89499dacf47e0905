use tracing::{debug, info, instrument};

use super::board::{Board, Position, COLS};
use super::player::{Marker, Player, Seat};
use super::win::is_winning_move;
use crate::error::{GameError, MoveError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Marker),
    Tie,
}

/// Where the game stands. The seat to move is part of the in-progress state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress(Seat),
    Won(Marker),
    Tied,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }

    pub fn outcome(self) -> Option<GameOutcome> {
        match self {
            GameStatus::InProgress(_) => None,
            GameStatus::Won(marker) => Some(GameOutcome::Winner(marker)),
            GameStatus::Tied => Some(GameOutcome::Tie),
        }
    }
}

/// Result of one accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub position: Position,
    pub marker: Marker,
    pub status: GameStatus,
}

/// A game between two players. Owns the board and borrows the players, who
/// are created by the caller before the game starts.
#[derive(Debug, Clone)]
pub struct GameState<'p> {
    board: Board,
    players: [&'p Player; 2],
    status: GameStatus,
}

impl<'p> GameState<'p> {
    /// Start a game on an empty board with `first` to move.
    pub fn new(first: &'p Player, second: &'p Player) -> Result<Self, GameError> {
        Self::with_board(Board::new(), first, second)
    }

    /// Start from an existing position, `first` to move.
    pub fn with_board(
        board: Board,
        first: &'p Player,
        second: &'p Player,
    ) -> Result<Self, GameError> {
        if first.marker() == second.marker() {
            return Err(GameError::DuplicateMarker(first.marker().symbol()));
        }
        Ok(GameState {
            board,
            players: [first, second],
            status: GameStatus::InProgress(Seat::First),
        })
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.status.outcome()
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn player(&self, seat: Seat) -> &'p Player {
        self.players[seat.index()]
    }

    /// The player whose turn it is, `None` once the game is over.
    pub fn active_player(&self) -> Option<&'p Player> {
        match self.status {
            GameStatus::InProgress(seat) => Some(self.player(seat)),
            _ => None,
        }
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Validate a column typed by a player (numbered 1-7) and convert it to a
    /// board index. Nothing is changed.
    pub fn select_column(&self, raw: &str) -> Result<usize, MoveError> {
        let trimmed = raw.trim();
        let number: i64 = trimmed
            .parse()
            .map_err(|_| MoveError::NotANumber(trimmed.to_string()))?;
        if !(1..=COLS as i64).contains(&number) {
            return Err(MoveError::OutOfRange(number));
        }
        let column = (number - 1) as usize;
        if self.board.is_column_full(column) {
            return Err(MoveError::ColumnFull(column));
        }
        Ok(column)
    }

    /// Drop the active player's piece into `column` (0-based) and advance the
    /// game. A rejected move leaves the state untouched.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn play(&mut self, column: usize) -> Result<MoveRecord, MoveError> {
        let seat = match self.status {
            GameStatus::InProgress(seat) => seat,
            _ => return Err(MoveError::GameOver),
        };
        let marker = self.player(seat).marker();
        let row = self.board.drop_piece(column, marker)?;
        let position = Position::new(row, column);

        // Win first: a move that both fills the board and connects four is a win
        self.status = if is_winning_move(&self.board, position, marker) {
            info!(%marker, row, column, "winning move");
            GameStatus::Won(marker)
        } else if self.board.is_top_row_full() {
            info!("board full, game tied");
            GameStatus::Tied
        } else {
            GameStatus::InProgress(seat.other())
        };
        debug!(row, column, status = ?self.status, "move applied");

        Ok(MoveRecord {
            position,
            marker,
            status: self.status,
        })
    }
}
