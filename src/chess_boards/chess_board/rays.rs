use super::{Axis, Color, Square};
use crate::chess_boards::Board;

/// Walks the four rays of `axis` outward from `origin`.
///
/// Each ray stops at the board edge or at the first occupied square. An occupied square
/// is included only when it holds a piece of the colour opposing `mover`, so the result
/// is exactly the set of squares a slider of colour `mover` could reach or capture on.
pub fn ray_destinations<B: Board + ?Sized>(board: &B, origin: Square, axis: Axis, mover: Color) -> Vec<Square> {
    let mut squares = Vec::new();
    if !origin.is_on_board() {
        return squares;
    }

    for &(d_row, d_col) in axis.directions() {
        for distance in 1..8 {
            let target = match origin.offset(d_row * distance, d_col * distance) {
                Some(t) => t,
                None => break,
            };

            match board.piece_at(target) {
                None => squares.push(target),
                Some(p) => {
                    if p.color != mover {
                        squares.push(target);
                    }
                    break;
                }
            }
        }
    }

    squares
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::{assert_squares, board};
    use super::*;

    #[test]
    fn test_orthogonal_rays_on_empty_board() {
        let position = board("8/8/8/8/3R4/8/8/8");
        let origin = Square::from_algebraic("d4").unwrap();
        assert_squares(
            ray_destinations(&position, origin, Axis::Orthogonal, Color::White),
            vec![
                "d1", "d2", "d3", "d5", "d6", "d7", "d8", "a4", "b4", "c4", "e4", "f4", "g4", "h4",
            ],
        );
    }

    #[test]
    fn test_ray_stops_at_first_piece() {
        // own piece on f6 blocks, enemy rook on h8 is not reached past it
        let position = board("7r/8/5P2/8/3B4/8/1n6/8");
        let origin = Square::from_algebraic("d4").unwrap();
        assert_squares(
            ray_destinations(&position, origin, Axis::Diagonal, Color::White),
            vec!["e5", "c5", "b6", "a7", "c3", "b2", "e3", "f2", "g1"],
        );
    }

    #[test]
    fn test_mover_colour_decides_capture() {
        let position = board("8/8/8/8/R2r4/8/8/8");
        let origin = Square::from_algebraic("a4").unwrap();
        let as_white = ray_destinations(&position, origin, Axis::Orthogonal, Color::White);
        assert!(as_white.contains(&Square::from_algebraic("d4").unwrap()));
        let as_black = ray_destinations(&position, origin, Axis::Orthogonal, Color::Black);
        assert!(!as_black.contains(&Square::from_algebraic("d4").unwrap()));
        assert!(as_black.contains(&Square::from_algebraic("c4").unwrap()));
    }
}
