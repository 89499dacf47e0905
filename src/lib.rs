//! # Connect Four
//!
//! A two-player Connect Four engine for the terminal. Pieces fall to the
//! lowest free cell of the chosen column; the first line of four wins and a
//! full board without one is a tie.
//!
//! ## Modules
//!
//! - [`game`] - Core game logic: board, players, win detection, turn state machine
//! - [`ui`] - Console input/output collaborators and the game loop
//! - [`config`] - TOML configuration loading and validation
//! - [`error`] - Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
