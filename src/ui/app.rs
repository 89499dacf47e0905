use std::io;

use tracing::{debug, info, instrument};

use crate::error::SessionError;
use crate::game::{Board, GameOutcome, GameState};

pub const PROMPT: &str = "enter a number from 1-7";
pub const INVALID_INPUT: &str = "Invalid Input!";

/// Supplies raw column choices, one token per request.
pub trait MoveSource {
    /// Next token typed by the player, or `None` once input is exhausted.
    fn next_token(&mut self) -> io::Result<Option<String>>;
}

/// Receives everything the game shows to the players.
pub trait GameView {
    /// Show the board after a move (and once before the first move).
    fn show_board(&mut self, board: &Board) -> io::Result<()>;

    /// Show a line of text: prompts, notices and announcements.
    fn show_message(&mut self, message: &str) -> io::Result<()>;
}

pub fn turn_message(state: &GameState<'_>) -> Option<String> {
    state
        .active_player()
        .map(|player| format!("player {} 's turn", player.marker()))
}

pub fn outcome_message(outcome: GameOutcome) -> String {
    match outcome {
        GameOutcome::Winner(marker) => format!("player {marker} won!"),
        GameOutcome::Tie => "it's a tie!".to_string(),
    }
}

/// Prompt until the player names a playable column, returning its 0-based
/// index. Every rejection is reported the same way and asked again.
pub fn request_column(
    state: &GameState<'_>,
    source: &mut impl MoveSource,
    view: &mut impl GameView,
) -> Result<usize, SessionError> {
    loop {
        view.show_message(PROMPT)?;
        let token = source.next_token()?.ok_or(SessionError::InputClosed)?;
        match state.select_column(&token) {
            Ok(column) => return Ok(column),
            Err(err) => {
                debug!(%err, "rejected column selection");
                view.show_message(INVALID_INPUT)?;
            }
        }
    }
}

/// Play a game to the end: ask for moves, apply them, show the board after
/// each one and announce the result.
#[instrument(skip_all)]
pub fn run_game(
    state: &mut GameState<'_>,
    source: &mut impl MoveSource,
    view: &mut impl GameView,
) -> Result<GameOutcome, SessionError> {
    view.show_board(state.board())?;
    loop {
        if let Some(outcome) = state.outcome() {
            return Ok(outcome);
        }
        if let Some(message) = turn_message(state) {
            view.show_message(&message)?;
        }
        let column = request_column(state, source, view)?;
        let record = state.play(column)?;
        view.show_board(state.board())?;

        if let Some(outcome) = record.status.outcome() {
            info!(?outcome, moves = state.board().piece_count(), "game over");
            view.show_message(&outcome_message(outcome))?;
        }
    }
}
