//! Piece representation.

use crate::Color;

/// The kinds of occupant a square can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
    /// The neutral duck. It appears in position notation but has no
    /// movement rule; move generation for it yields nothing.
    Duck = 6,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Duck,
    ];

    /// Returns the index of this kind (0-6).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns true if this kind moves along rays (bishop, rook, queen).
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
            PieceKind::Duck => "Duck",
        };
        write!(f, "{}", name)
    }
}

/// A piece occupying a square: a kind and a color.
///
/// Two pieces are equal when kind and color match; there is no other
/// identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    /// Creates a piece.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    /// Parses a FEN symbol. Uppercase letters are White, lowercase
    /// Black, and `D` is the neutral duck (there is no lowercase form).
    pub const fn from_fen_char(c: char) -> Option<Self> {
        let piece = match c {
            'P' => Piece::new(PieceKind::Pawn, Color::White),
            'N' => Piece::new(PieceKind::Knight, Color::White),
            'B' => Piece::new(PieceKind::Bishop, Color::White),
            'R' => Piece::new(PieceKind::Rook, Color::White),
            'Q' => Piece::new(PieceKind::Queen, Color::White),
            'K' => Piece::new(PieceKind::King, Color::White),
            'p' => Piece::new(PieceKind::Pawn, Color::Black),
            'n' => Piece::new(PieceKind::Knight, Color::Black),
            'b' => Piece::new(PieceKind::Bishop, Color::Black),
            'r' => Piece::new(PieceKind::Rook, Color::Black),
            'q' => Piece::new(PieceKind::Queen, Color::Black),
            'k' => Piece::new(PieceKind::King, Color::Black),
            'D' => Piece::new(PieceKind::Duck, Color::Neutral),
            _ => return None,
        };
        Some(piece)
    }

    /// Returns the FEN symbol for this piece.
    pub const fn to_fen_char(self) -> char {
        let c = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
            PieceKind::Duck => return 'D',
        };
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            _ => c,
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}
