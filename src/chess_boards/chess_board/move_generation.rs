use super::rays::ray_destinations;
use super::{Axis, Piece, PieceType, Square, KING_OFFSETS, KNIGHT_OFFSETS};
use crate::chess_boards::Board;
use tracing::debug;

/// Candidate destinations for the piece on `square`.
///
/// Movement patterns only: the side to move is not consulted and a king may step onto an
/// attacked square. An empty `square` yields no destinations.
pub fn candidate_destinations<B: Board + ?Sized>(board: &B, square: Square) -> Vec<Square> {
    let piece = match board.piece_at(square) {
        Some(p) => p,
        None => return Vec::new(),
    };

    let destinations = match piece.kind {
        PieceType::Pawn => generate_pawn_moves(board, square, piece),
        PieceType::Knight => generate_moves_from_offsets(board, square, piece, &KNIGHT_OFFSETS),
        PieceType::Bishop => ray_destinations(board, square, Axis::Diagonal, piece.color),
        PieceType::Rook => ray_destinations(board, square, Axis::Orthogonal, piece.color),
        PieceType::Queen => generate_queen_moves(board, square, piece),
        PieceType::King => generate_moves_from_offsets(board, square, piece, &KING_OFFSETS),
    };

    debug!(
        square = %square,
        kind = piece.kind.name(),
        count = destinations.len(),
        "generated candidate destinations"
    );
    destinations
}

fn generate_pawn_moves<B: Board + ?Sized>(board: &B, square: Square, piece: Piece) -> Vec<Square> {
    let mut moves = Vec::new();
    let forward = piece.color.forward();

    // Regular forward move
    if let Some(one_step) = square.offset(forward, 0) {
        if board.is_empty_at(one_step) {
            moves.push(one_step);

            // Double move for an unmoved pawn, both squares must be free
            if !piece.has_moved {
                if let Some(two_step) = square.offset(2 * forward, 0) {
                    if board.is_empty_at(two_step) {
                        moves.push(two_step);
                    }
                }
            }
        }
    }

    // Capture diagonally
    for d_col in [-1, 1] {
        if let Some(target) = square.offset(forward, d_col) {
            if board.holds_opponent_of(target, piece.color) {
                moves.push(target);
            }
        }
    }

    moves
}

fn generate_queen_moves<B: Board + ?Sized>(board: &B, square: Square, piece: Piece) -> Vec<Square> {
    let mut moves = ray_destinations(board, square, Axis::Diagonal, piece.color);
    moves.extend(ray_destinations(board, square, Axis::Orthogonal, piece.color));
    moves
}

/// Fixed-offset pieces: every on-board target not held by the mover's own colour.
fn generate_moves_from_offsets<B: Board + ?Sized>(
    board: &B,
    square: Square,
    piece: Piece,
    offsets: &[(i8, i8)],
) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&(d_row, d_col)| square.offset(d_row, d_col))
        .filter(|&target| match board.piece_at(target) {
            None => true,
            Some(p) => p.color != piece.color,
        })
        .collect()
}
