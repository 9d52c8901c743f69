//! Chess rules for two players sharing one board: pseudo-legal move generation,
//! check detection, board notation and a turn-taking session with undo.

pub mod chess_boards;
pub mod error;
pub mod session;

pub use chess_boards::chess_board::{
    apply, candidate_destinations, decode, encode, is_in_check, Color, HistoryStack, Move, MoveResult, Piece,
    PieceType, Position, Square, INITIAL_POSITION,
};
pub use chess_boards::Board;
pub use error::{Error, InvalidMoveReason, Result};
pub use session::{CapturedPieces, GameSession, UndoOutcome};
