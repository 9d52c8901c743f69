pub mod console;

use crate::chess_boards::chess_board::{
    apply, candidate_destinations, decode, encode, is_in_check, Color, HistoryStack, MoveResult, PieceType,
    Position, Square,
};
use crate::chess_boards::Board;
use crate::error::{InvalidMoveReason, Result};
use tracing::{info, warn};

/// What an undo resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoOutcome {
    /// The board was rebuilt from this encoded position.
    Restored(String),
    /// Nothing older was recorded, the board went back to the starting arrangement.
    Start,
}

/// Captured piece kinds, keyed by the colour that lost them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedPieces {
    pub white: Vec<PieceType>,
    pub black: Vec<PieceType>,
}

impl CapturedPieces {
    pub fn of(&self, color: Color) -> &[PieceType] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    fn push(&mut self, color: Color, kind: PieceType) {
        match color {
            Color::White => self.white.push(kind),
            Color::Black => self.black.push(kind),
        }
    }
}

/// One game: the board, whose turn it is, captured pieces and the undo history.
#[derive(Debug, Clone)]
pub struct GameSession {
    position: Position,
    turn: Color,
    captured: CapturedPieces,
    history: HistoryStack,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self::with_position(Position::standard(), Color::White)
    }

    pub fn with_position(position: Position, turn: Color) -> Self {
        GameSession {
            position,
            turn,
            captured: CapturedPieces::default(),
            history: HistoryStack::new(),
        }
    }

    /// Starts a session from an encoded board.
    pub fn from_notation(notation: &str, turn: Color) -> Result<Self> {
        Ok(Self::with_position(decode(notation)?, turn))
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn encoded(&self) -> String {
        encode(&self.position)
    }

    /// Candidate destinations, offered only for pieces of the side to move.
    pub fn legal_destinations(&self, square: Square) -> Vec<Square> {
        match self.position.piece_at(square) {
            Some(piece) if piece.color == self.turn => candidate_destinations(&self.position, square),
            _ => Vec::new(),
        }
    }

    pub fn is_in_check(&self, color: Color) -> Result<bool> {
        is_in_check(&self.position, color)
    }

    /// Validates and commits a move for the side to move. A rejected move changes nothing.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<MoveResult> {
        if let Err(reason) = self.validate(from, to) {
            warn!(from = %from, to = %to, %reason, "rejected move");
            return Err(reason.into());
        }

        let result = apply(&mut self.position, from, to)?;
        if let Some(kind) = result.captured {
            self.captured.push(self.turn.opposite(), kind);
        }
        self.turn = self.turn.opposite();
        self.history.push(encode(&self.position));

        info!(
            from = %from,
            to = %to,
            captured = ?result.captured,
            "move committed"
        );
        Ok(result)
    }

    fn validate(&self, from: Square, to: Square) -> std::result::Result<(), InvalidMoveReason> {
        if let Some(off) = [from, to].into_iter().find(|s| !s.is_on_board()) {
            return Err(InvalidMoveReason::OffBoard(off));
        }
        let piece = self
            .position
            .piece_at(from)
            .ok_or(InvalidMoveReason::EmptySquare(from))?;
        if piece.color != self.turn {
            return Err(InvalidMoveReason::WrongTurn {
                square: from,
                expected: self.turn,
            });
        }
        if !candidate_destinations(&self.position, from).contains(&to) {
            return Err(InvalidMoveReason::IllegalDestination { from, to });
        }
        Ok(())
    }

    /// Steps back one committed move. Only the board is restored, the side to move and
    /// the captured tallies stay as they are.
    pub fn undo(&mut self) -> Result<UndoOutcome> {
        let outcome = match self.history.undo() {
            Some(previous) => {
                let previous = previous.to_string();
                self.position = decode(&previous)?;
                UndoOutcome::Restored(previous)
            }
            None => {
                self.position = Position::standard();
                UndoOutcome::Start
            }
        };

        info!(outcome = ?outcome, turn = %self.turn, "undo");
        Ok(outcome)
    }

    /// Back to a fresh game from the standard setup.
    pub fn reset(&mut self) {
        self.position = Position::standard();
        self.captured = CapturedPieces::default();
        self.history.clear();
        self.turn = Color::White;
        info!("session reset");
    }
}
