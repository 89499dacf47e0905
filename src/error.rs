use std::path::PathBuf;

/// Reasons a move request is refused. None of them change the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("'{0}' is not a column number")]
    NotANumber(String),

    #[error("column {0} is outside 1-7")]
    OutOfRange(i64),

    #[error("column {} is full", .0 + 1)]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,
}

impl MoveError {
    /// True for the rejections a player fixes by choosing another column.
    pub fn is_invalid_selection(&self) -> bool {
        !matches!(self, MoveError::GameOver)
    }
}

/// Errors building a board from a textual layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("row {row} has {len} cells (expected {expected})")]
    RowLength {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// Errors that can occur while setting up a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("both players use the marker '{0}'")]
    DuplicateMarker(char),
}

/// Errors that end an interactive session early.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("input closed before the game finished")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("move rejected: {0}")]
    Move(#[from] MoveError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
