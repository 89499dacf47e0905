//! Core Connect Four game logic: board representation, players, win detection
//! and the turn state machine.

mod board;
mod player;
mod state;
pub mod win;

pub use board::{Board, Cell, Position, COLS, ROWS};
pub use player::{Marker, Player, Seat};
pub use state::{GameOutcome, GameState, GameStatus, MoveRecord};
pub use win::{is_winning_move, Diagonal, WIN_LENGTH};
