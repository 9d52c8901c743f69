//! Error types for chess-rules

use crate::chess_boards::chess_board::{Color, Square};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid move: {0}")]
    InvalidMove(InvalidMoveReason),

    #[error("No {0} king on the board")]
    MissingKing(Color),

    #[error("Malformed notation: {0}")]
    MalformedNotation(String),

    #[error("Invalid square: {0}")]
    InvalidSquare(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidMoveReason {
    #[error("{0} is off the board")]
    OffBoard(Square),

    #[error("no piece on {0}")]
    EmptySquare(Square),

    #[error("piece on {square} does not belong to {expected}, the side to move")]
    WrongTurn { square: Square, expected: Color },

    #[error("{to} is not a destination for the piece on {from}")]
    IllegalDestination { from: Square, to: Square },
}

impl From<InvalidMoveReason> for Error {
    fn from(reason: InvalidMoveReason) -> Self {
        Error::InvalidMove(reason)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
