use super::{Cell, Color, Piece, PieceType, Square};
use crate::chess_boards::Board;
use lazy_static::lazy_static;

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

lazy_static! {
    pub static ref STARTING_POSITION: Position = Position::build_standard();
}

/// The 8x8 grid of cells. Owns every piece on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub squares: [[Cell; 8]; 8],
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// Creates an empty board
    pub fn new() -> Self {
        Self {
            squares: [[Cell::Empty; 8]; 8],
        }
    }

    /// The standard starting arrangement, every piece unmoved.
    pub fn standard() -> Self {
        STARTING_POSITION.clone()
    }

    fn build_standard() -> Self {
        let mut position = Self::new();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            position.set_piece(Square::new(0, col), Piece::new(Color::Black, *kind));
            position.set_piece(Square::new(1, col), Piece::new(Color::Black, PieceType::Pawn));
            position.set_piece(Square::new(6, col), Piece::new(Color::White, PieceType::Pawn));
            position.set_piece(Square::new(7, col), Piece::new(Color::White, *kind));
        }
        position
    }

    /// Off-board squares read as empty.
    pub fn cell(&self, square: Square) -> Cell {
        if !square.is_on_board() {
            return Cell::Empty;
        }
        self.squares[square.row as usize][square.col as usize]
    }

    /// Places `piece` on `square`, replacing whatever was there. Off-board squares are ignored.
    pub fn set_piece(&mut self, square: Square, piece: Piece) {
        if let Some(cell) = self.cell_mut(square) {
            *cell = Cell::Occupied(piece);
        }
    }

    /// Empties `square` and hands back its previous occupant.
    pub fn take_piece(&mut self, square: Square) -> Option<Piece> {
        let cell = self.cell_mut(square)?;
        let previous = cell.piece();
        *cell = Cell::Empty;
        previous
    }

    fn cell_mut(&mut self, square: Square) -> Option<&mut Cell> {
        if !square.is_on_board() {
            return None;
        }
        Some(&mut self.squares[square.row as usize][square.col as usize])
    }

    /// First king of `color` in row-major order.
    pub fn find_king_position(&self, color: Color) -> Option<Square> {
        self.pieces_with_coordinates()
            .into_iter()
            .find(|(_, p)| p.kind == PieceType::King && p.color == color)
            .map(|(square, _)| square)
    }

    /// Compares piece placement only; `has_moved` flags are ignored.
    pub fn same_placement(&self, other: &Position) -> bool {
        self.squares
            .iter()
            .flatten()
            .zip(other.squares.iter().flatten())
            .all(|(a, b)| match (a, b) {
                (Cell::Occupied(x), Cell::Occupied(y)) => x.same_placement(y),
                (Cell::Empty, Cell::Empty) => true,
                _ => false,
            })
    }

    pub fn render_to_string(&self) -> String {
        let mut board_representation = String::new();
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");
        board_representation.push_str("  ┌───┬───┬───┬───┬───┬───┬───┬───┐\n");

        for row in 0..8 {
            let rank = 8 - row;
            board_representation.push_str(&format!("{} │", rank));
            for col in 0..8 {
                let square = match &self.squares[row][col] {
                    Cell::Empty => ' ',
                    Cell::Occupied(piece) => piece.to_char(),
                };
                board_representation.push_str(&format!(" {} │", square));
            }
            board_representation.push_str(&format!(" {}\n", rank));

            if row < 7 {
                board_representation.push_str("  ├───┼───┼───┼───┼───┼───┼───┼───┤\n");
            }
        }

        board_representation.push_str("  └───┴───┴───┴───┴───┴───┴───┴───┘\n");
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");

        board_representation
    }
}

impl Board for Position {
    fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cell(square).piece()
    }
}
