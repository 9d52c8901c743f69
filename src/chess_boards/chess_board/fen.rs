use super::{Cell, Piece, Position, Square};
use crate::error::{Error, Result};
use tracing::{debug, warn};

pub const INITIAL_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

fn malformed(message: String) -> Error {
    warn!("{}", message);
    Error::MalformedNotation(message)
}

/// Parses the board field of a FEN string into a Position.
///
/// Anything after the first whitespace is ignored. Unknown piece letters become empty
/// squares, but every row must expand to exactly eight columns. Pieces come back
/// unmoved, the notation has no room for move history.
pub fn decode(notation: &str) -> Result<Position> {
    let board_field = notation.split_whitespace().next().unwrap_or("");
    let mut position = Position::new();

    let rows: Vec<&str> = board_field.split('/').collect();
    if rows.len() != 8 {
        return Err(malformed(format!("expected 8 rows, found {}", rows.len())));
    }

    for (row_index, row) in rows.iter().enumerate() {
        let mut col_index = 0usize;

        for c in row.chars() {
            let width = c.to_digit(10).map(|n| n as usize).unwrap_or(1);
            if col_index + width > 8 {
                return Err(malformed(format!("too many squares in row {}", row_index + 1)));
            }
            if !c.is_ascii_digit() {
                if let Some(piece) = Piece::from_char(c) {
                    position.set_piece(Square::new(row_index as u8, col_index as u8), piece);
                } else {
                    debug!(character = %c, row = row_index + 1, "treating unknown character as empty");
                }
            }
            col_index += width;
        }

        if col_index != 8 {
            return Err(malformed(format!(
                "row {} has {} squares, expected 8",
                row_index + 1,
                col_index
            )));
        }
    }

    debug!(notation = board_field, "decoded position");
    Ok(position)
}

/// Run-length board notation, top row first, rows joined by `/`.
pub fn encode(position: &Position) -> String {
    let mut rows = Vec::with_capacity(8);

    for row in position.squares.iter() {
        let mut board_representation = String::new();
        let mut empty_count = 0;

        for cell in row.iter() {
            match cell {
                Cell::Occupied(piece) => {
                    if empty_count > 0 {
                        board_representation.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    board_representation.push(piece.to_char());
                }
                Cell::Empty => {
                    empty_count += 1;
                }
            }
        }

        if empty_count > 0 {
            board_representation.push_str(&empty_count.to_string());
        }
        rows.push(board_representation);
    }

    rows.join("/")
}

impl Position {
    /// Delegates parsing to the `fen` module.
    pub fn from_fen(notation: &str) -> Result<Self> {
        decode(notation)
    }

    pub fn to_fen(&self) -> String {
        encode(self)
    }
}
