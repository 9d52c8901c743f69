pub mod chess_board;

use chess_board::{Color, Piece, Square};

/// Read access to board contents. Move generation and check detection only ever look
/// at a board through this trait.
pub trait Board {
    fn piece_at(&self, square: Square) -> Option<Piece>;

    fn is_empty_at(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// True if `square` holds a piece of the colour opposing `mover`.
    fn holds_opponent_of(&self, square: Square, mover: Color) -> bool {
        matches!(self.piece_at(square), Some(p) if p.color != mover)
    }

    fn pieces_with_coordinates(&self) -> Vec<(Square, Piece)> {
        let mut pieces = Vec::new();
        for row in 0..8 {
            for col in 0..8 {
                let square = Square::new(row, col);
                if let Some(piece) = self.piece_at(square) {
                    pieces.push((square, piece));
                }
            }
        }
        pieces
    }
}
