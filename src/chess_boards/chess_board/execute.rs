use super::{PieceType, Position, Square};
use crate::error::{InvalidMoveReason, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub captured: Option<PieceType>,
}

/// Relocates the piece on `from` to `to`.
///
/// Whatever stands on `to` is removed and reported as captured when it belongs to the
/// other colour. Legality of `to` is not re-derived here; the caller is expected to have
/// taken it from [`candidate_destinations`](super::candidate_destinations). Turn order and
/// history are left untouched.
pub fn apply(position: &mut Position, from: Square, to: Square) -> Result<MoveResult> {
    if let Some(off) = [from, to].into_iter().find(|s| !s.is_on_board()) {
        return Err(InvalidMoveReason::OffBoard(off).into());
    }
    let mut piece = position
        .take_piece(from)
        .ok_or(InvalidMoveReason::EmptySquare(from))?;

    let captured = position
        .take_piece(to)
        .filter(|target| target.color != piece.color)
        .map(|target| target.kind);

    piece.has_moved = true;
    position.set_piece(to, piece);

    Ok(MoveResult { captured })
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::board;
    use super::super::{Cell, Color, Piece};
    use super::*;
    use crate::chess_boards::Board;
    use crate::error::Error;

    fn sq(algebraic: &str) -> Square {
        Square::from_algebraic(algebraic).unwrap()
    }

    #[test]
    fn test_apply_quiet_move() {
        let mut position = Position::standard();
        let result = apply(&mut position, sq("e2"), sq("e4")).unwrap();
        assert_eq!(result.captured, None);
        assert_eq!(position.cell(sq("e2")), Cell::Empty);
        let pawn = position.piece_at(sq("e4")).unwrap();
        assert_eq!(pawn.kind, PieceType::Pawn);
        assert_eq!(pawn.color, Color::White);
        assert!(pawn.has_moved);
    }

    #[test]
    fn test_apply_capture() {
        let mut position = board("8/8/8/3p4/4P3/8/8/8");
        let result = apply(&mut position, sq("e4"), sq("d5")).unwrap();
        assert_eq!(result.captured, Some(PieceType::Pawn));
        assert_eq!(position.pieces_with_coordinates().len(), 1);
        assert_eq!(position.piece_at(sq("d5")).map(|p| p.color), Some(Color::White));
    }

    #[test]
    fn test_has_moved_stays_set() {
        let mut position = board("8/8/8/8/8/8/8/R7");
        apply(&mut position, sq("a1"), sq("a4")).unwrap();
        apply(&mut position, sq("a4"), sq("a1")).unwrap();
        assert!(position.piece_at(sq("a1")).unwrap().has_moved);
    }

    #[test]
    fn test_apply_from_empty_square() {
        let mut position = Position::standard();
        let before = position.clone();
        assert_eq!(
            apply(&mut position, sq("e4"), sq("e5")),
            Err(Error::InvalidMove(InvalidMoveReason::EmptySquare(sq("e4"))))
        );
        assert_eq!(position, before);
    }

    #[test]
    fn test_apply_off_board() {
        let mut position = Position::standard();
        let before = position.clone();
        assert_eq!(
            apply(&mut position, sq("a1"), Square::new(8, 0)),
            Err(Error::InvalidMove(InvalidMoveReason::OffBoard(Square::new(8, 0))))
        );
        assert_eq!(position, before);
    }

    #[test]
    fn test_own_piece_on_target_is_not_reported() {
        let mut position = Position::new();
        position.set_piece(sq("a1"), Piece::new(Color::White, PieceType::Rook));
        position.set_piece(sq("a2"), Piece::new(Color::White, PieceType::Pawn));
        let result = apply(&mut position, sq("a1"), sq("a2")).unwrap();
        assert_eq!(result.captured, None);
        assert_eq!(position.piece_at(sq("a2")).map(|p| p.kind), Some(PieceType::Rook));
    }
}
