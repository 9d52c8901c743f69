pub mod check;
pub mod execute;
pub mod fen;
pub mod history;
pub mod model;
pub mod move_generation;
pub mod position;
pub mod rays;
#[cfg(test)]
pub mod test_utils;

pub use check::is_in_check;
pub use execute::{apply, MoveResult};
pub use fen::{decode, encode, INITIAL_POSITION};
pub use history::HistoryStack;
pub use model::{Axis, Cell, Color, Move, Piece, PieceType, Square, KING_OFFSETS, KNIGHT_OFFSETS};
pub use move_generation::candidate_destinations;
pub use position::{Position, STARTING_POSITION};
pub use rays::ray_destinations;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convertion_method() {
        assert_eq!(Square::from_algebraic("b2"), Ok(Square::new(6, 1)));
        assert_eq!(Square::from_algebraic("a8"), Ok(Square::new(0, 0)));
        assert_eq!(Square::from_algebraic("h1"), Ok(Square::new(7, 7)));
        assert_eq!(Square::from_algebraic("b2").unwrap().as_algebraic(), "b2");
        assert_eq!(Move::from_algebraic("e2e4").unwrap().as_algebraic(), "e2e4");
    }

    #[test]
    fn test_invalid_algebraic() {
        assert!(Square::from_algebraic("i1").is_err());
        assert!(Square::from_algebraic("a9").is_err());
        assert!(Square::from_algebraic("a").is_err());
        assert!(Square::from_algebraic("a10").is_err());
        assert!(Move::from_algebraic("e2e").is_err());
        assert!(Move::from_algebraic("e2e9").is_err());
    }

    #[test]
    fn test_square_offset_stays_on_board() {
        let corner = Square::new(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 1), Some(Square::new(1, 1)));
        assert_eq!(Square::new(7, 7).offset(1, 0), None);
        assert_eq!(Square::new(255, 0).offset(1, 0), None);
        assert!(!Square::new(8, 0).is_on_board());
        assert_eq!(Square::new(8, 0).to_string(), "(8,0)");
    }

    #[test]
    fn test_color_opposite_is_involution() {
        for color in [Color::White, Color::Black] {
            assert_ne!(color.opposite(), color);
            assert_eq!(color.opposite().opposite(), color);
        }
    }

    #[test]
    fn test_piece_chars() {
        for c in "PNBRQKpnbrqk".chars() {
            assert_eq!(Piece::from_char(c).map(|p| p.to_char()), Some(c));
        }
        assert_eq!(Piece::from_char('x'), None);
        assert_eq!(Piece::from_char('1'), None);
    }

    #[test]
    fn test_move_then_check() {
        // Scholar's mate pattern leaves black in check from the queen on f7
        let mut position = Position::from_fen("r1bqkbnr/pppp1ppp/2n5/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR").unwrap();
        let from = Square::from_algebraic("h5").unwrap();
        let to = Square::from_algebraic("f7").unwrap();
        assert!(candidate_destinations(&position, from).contains(&to));
        let result = apply(&mut position, from, to).unwrap();
        assert_eq!(result.captured, Some(PieceType::Pawn));
        assert_eq!(is_in_check(&position, Color::Black), Ok(true));
        assert_eq!(is_in_check(&position, Color::White), Ok(false));
    }
}
