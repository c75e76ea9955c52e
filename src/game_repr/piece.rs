use std::fmt;

use super::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl Type {
    /// Pieces a pawn may promote to, in the order they are generated
    pub const PROMOTIONS: [Type; 4] = [Type::Queen, Type::Bishop, Type::Knight, Type::Rook];

    /// Lowercase letter used in FEN and long algebraic notation
    pub fn to_char(self) -> char {
        match self {
            Type::King => 'k',
            Type::Queen => 'q',
            Type::Rook => 'r',
            Type::Bishop => 'b',
            Type::Knight => 'n',
            Type::Pawn => 'p',
        }
    }

    pub fn from_char(c: char) -> Option<Type> {
        match c.to_ascii_lowercase() {
            'k' => Some(Type::King),
            'q' => Some(Type::Queen),
            'r' => Some(Type::Rook),
            'b' => Some(Type::Bishop),
            'n' => Some(Type::Knight),
            'p' => Some(Type::Pawn),
            _ => None,
        }
    }
}

/// Side of the board. `White` is owner 0 and advances toward rank 8,
/// `Black` is owner 1 and advances toward rank 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Owner number as used by the session layer (0 or 1)
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Self::White => 0,
            Self::Black => 1,
        }
    }

    pub fn from_owner(owner: u8) -> Option<Color> {
        match owner {
            0 => Some(Color::White),
            1 => Some(Color::Black),
            _ => None,
        }
    }

    /// Rank step a pawn of this color takes when pushed
    #[inline]
    pub fn forward(self) -> i32 {
        match self {
            Self::White => 1,
            Self::Black => -1,
        }
    }

    /// Rank the pieces start on
    #[inline]
    pub fn back_rank(self) -> i32 {
        match self {
            Self::White => 1,
            Self::Black => 8,
        }
    }

    /// Rank a pawn promotes on
    #[inline]
    pub fn promotion_rank(self) -> i32 {
        match self {
            Self::White => 8,
            Self::Black => 1,
        }
    }
}

/// Identity of a piece for its whole lifetime, as assigned by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u32);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A live piece in the board registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceRecord {
    pub id: PieceId,
    pub color: Color,
    pub piece_type: Type,
    pub square: Square,
    /// Set once the piece has left its square; gates castling and double pushes
    pub has_moved: bool,
}

impl PieceRecord {
    pub fn is(&self, color: Color, piece_type: Type) -> bool {
        self.color == color && self.piece_type == piece_type
    }

    /// FEN letter, uppercase for White
    pub fn to_char(&self) -> char {
        let c = self.piece_type.to_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}
