use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Player name must not be empty")]
    InvalidName,

    #[error("No move recorded for player {0}")]
    MissingHistoryEntry(String),

    #[error("Input stream closed")]
    InputClosed,

    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unrecognized move {input:?}, expected one of ROCK, PAPER, SCISSORS")]
pub struct ParseMoveError {
    pub input: String,
}
