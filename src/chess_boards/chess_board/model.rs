use crate::error::{Error, Result};
use std::fmt;

pub const BOARD_SIZE: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn step for this colour. White advances towards row 0.
    pub fn forward(&self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

impl std::str::FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Color::White),
            "black" | "b" => Ok(Color::Black),
            _ => Err(format!("unknown colour: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceType::Pawn => write!(f, "P"),
            PieceType::Knight => write!(f, "N"),
            PieceType::Bishop => write!(f, "B"),
            PieceType::Rook => write!(f, "R"),
            PieceType::Queen => write!(f, "Q"),
            PieceType::King => write!(f, "K"),
        }
    }
}

impl PieceType {
    pub fn name(&self) -> &'static str {
        match self {
            PieceType::Pawn => "pawn",
            PieceType::Knight => "knight",
            PieceType::Bishop => "bishop",
            PieceType::Rook => "rook",
            PieceType::Queen => "queen",
            PieceType::King => "king",
        }
    }
}

/// A piece as it sits on a cell. `has_moved` only ever goes from false to true.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceType,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(color: Color, kind: PieceType) -> Self {
        Self {
            color,
            kind,
            has_moved: false,
        }
    }

    pub fn to_char(&self) -> char {
        let c = match self.kind {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        };
        match self.color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        let kind = match c.to_ascii_uppercase() {
            'P' => PieceType::Pawn,
            'N' => PieceType::Knight,
            'B' => PieceType::Bishop,
            'R' => PieceType::Rook,
            'Q' => PieceType::Queen,
            'K' => PieceType::King,
            _ => return None,
        };
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        Some(Self::new(color, kind))
    }

    /// Two pieces are the same placement if colour and kind match, regardless of move history.
    pub fn same_placement(&self, other: &Piece) -> bool {
        self.color == other.color && self.kind == other.kind
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Occupied(Piece),
    Empty,
}

impl Cell {
    pub fn piece(&self) -> Option<Piece> {
        match self {
            Cell::Occupied(p) => Some(*p),
            Cell::Empty => None,
        }
    }
}

/// A board coordinate. Row 0 is rank 8, column 0 is file a.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the square at `(row, col)` if it lies on the board.
    pub fn checked(row: i16, col: i16) -> Option<Self> {
        let range = 0..i16::from(BOARD_SIZE);
        if range.contains(&row) && range.contains(&col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    pub fn is_on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    pub fn offset(&self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::checked(i16::from(self.row) + i16::from(d_row), i16::from(self.col) + i16::from(d_col))
    }

    pub fn from_algebraic(algebraic: &str) -> Result<Self> {
        let mut chars = algebraic.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file @ 'a'..='h'), Some(rank @ '1'..='8'), None) => {
                let col = file as u8 - b'a';
                let row = BOARD_SIZE - 1 - (rank as u8 - b'1');
                Ok(Self { row, col })
            }
            _ => Err(Error::InvalidSquare(algebraic.to_string())),
        }
    }

    pub fn as_algebraic(&self) -> String {
        to_algebraic_square(self.row, self.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_algebraic())
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    pub fn as_algebraic(&self) -> String {
        format!("{}{}", self.from.as_algebraic(), self.to.as_algebraic())
    }

    pub fn from_algebraic(algebraic: &str) -> Result<Self> {
        let algebraic = algebraic.trim();
        if algebraic.len() != 4 || !algebraic.is_ascii() {
            return Err(Error::InvalidSquare(algebraic.to_string()));
        }
        let from = Square::from_algebraic(&algebraic[0..2])?;
        let to = Square::from_algebraic(&algebraic[2..4])?;
        Ok(Self::new(from, to))
    }
}

/// The two families of rays a sliding piece walks along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Orthogonal,
    Diagonal,
}

impl Axis {
    pub fn directions(&self) -> &'static [(i8, i8); 4] {
        const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
        match self {
            Axis::Orthogonal => &ORTHOGONAL,
            Axis::Diagonal => &DIAGONAL,
        }
    }
}

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [(-2, -1), (-1, -2), (1, -2), (2, -1), (2, 1), (1, 2), (-1, 2), (-2, 1)];
pub const KING_OFFSETS: [(i8, i8); 8] = [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];

pub fn to_algebraic_square(row: u8, col: u8) -> String {
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return format!("({},{})", row, col);
    }
    let file = (b'a' + col) as char;
    let rank = BOARD_SIZE - row;
    format!("{}{}", file, rank)
}
