//! Console front end: the input and display collaborators and the game loop
//! that drives them.

pub mod app;
pub mod console;

pub use app::{run_game, GameView, MoveSource, INVALID_INPUT, PROMPT};
pub use console::{LineSource, TextView};
