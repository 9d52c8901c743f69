use super::{candidate_destinations, decode, Position, Square};

/// Decodes a board field, panicking on malformed input.
pub fn board(notation: &str) -> Position {
    decode(notation).expect("test position should decode")
}

pub fn destinations_from_algebraic(position: &Position, square: &str) -> Vec<Square> {
    let square = Square::from_algebraic(square).expect("test square should parse");
    candidate_destinations(position, square)
}

pub fn assert_squares(generated: Vec<Square>, mut expected: Vec<&str>) {
    let mut generated_converted: Vec<_> = generated.iter().map(|s| s.as_algebraic()).collect();
    generated_converted.sort();
    expected.sort();

    assert_eq!(generated_converted, expected);
}
