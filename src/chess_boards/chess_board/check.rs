use super::rays::ray_destinations;
use super::{Axis, Color, PieceType, Position, Square, KING_OFFSETS, KNIGHT_OFFSETS};
use crate::chess_boards::Board;
use crate::error::{Error, Result};

/// Whether the king of `color` is attacked.
///
/// Adjacent enemy kings count as an attack even though two kings can never touch in a
/// legally reached position.
pub fn is_in_check(position: &Position, color: Color) -> Result<bool> {
    let king = position.find_king_position(color).ok_or(Error::MissingKing(color))?;
    let attacker = color.opposite();

    Ok(is_attacked_by_slider(position, king, color)
        || is_attacked_by_pawn(position, king, color)
        || check_attack(position, king, attacker, &KNIGHT_OFFSETS, PieceType::Knight)
        || check_attack(position, king, attacker, &KING_OFFSETS, PieceType::King))
}

fn is_attacked_by_slider(position: &Position, king: Square, color: Color) -> bool {
    [Axis::Orthogonal, Axis::Diagonal].into_iter().any(|axis| {
        ray_destinations(position, king, axis, color)
            .into_iter()
            .filter_map(|square| position.piece_at(square))
            .any(|piece| {
                piece.color != color
                    && match (axis, piece.kind) {
                        (_, PieceType::Queen) => true,
                        (Axis::Orthogonal, PieceType::Rook) => true,
                        (Axis::Diagonal, PieceType::Bishop) => true,
                        _ => false,
                    }
            })
    })
}

/// Enemy pawns attack from one row further along the king's own forward direction.
fn is_attacked_by_pawn(position: &Position, king: Square, color: Color) -> bool {
    let d_row = color.forward();
    check_attack(position, king, color.opposite(), &[(d_row, -1), (d_row, 1)], PieceType::Pawn)
}

fn check_attack(
    position: &Position,
    square: Square,
    attacker: Color,
    offsets: &[(i8, i8)],
    piece_type: PieceType,
) -> bool {
    offsets
        .iter()
        .filter_map(|&(d_row, d_col)| square.offset(d_row, d_col))
        .filter_map(|target| position.piece_at(target))
        .any(|piece| piece.color == attacker && piece.kind == piece_type)
}
