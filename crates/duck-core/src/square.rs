//! Board square representation.

use std::fmt;
use thiserror::Error;

/// A coordinate pair was outside the 8x8 board.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("coordinate ({x}, {y}) is outside the board")]
pub struct OutOfBounds {
    pub x: i16,
    pub y: i16,
}

/// A square on the board, indexed 0-63.
///
/// Squares are indexed row-major from the top of the board as a renderer
/// sees it: row 0 is rank 8, row 7 is rank 1. So a8 = 0, h8 = 7,
/// a1 = 56, h1 = 63. Construction is bounds-checked; a `Square` value is
/// always on the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// Creates a square from x (file, 0 = a) and y (row, 0 = rank 8).
    #[inline]
    pub const fn from_xy(x: u8, y: u8) -> Option<Self> {
        if x < 8 && y < 8 {
            Some(Square(y * 8 + x))
        } else {
            None
        }
    }

    /// Creates a square from signed coordinates, rejecting anything
    /// outside [0,8)x[0,8).
    #[inline]
    pub const fn try_from_xy(x: i16, y: i16) -> Result<Self, OutOfBounds> {
        if x >= 0 && x < 8 && y >= 0 && y < 8 {
            Ok(Square((y as u8) * 8 + (x as u8)))
        } else {
            Err(OutOfBounds { x, y })
        }
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation (e.g. "e4").
    ///
    /// File letters a-h map to x 0-7; rank digits 8-1 map to y 0-7
    /// via y = 8 - rank.
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let x = match bytes[0] {
            b'a'..=b'h' => bytes[0] - b'a',
            _ => return None,
        };
        let y = match bytes[1] {
            b'1'..=b'8' => 8 - (bytes[1] - b'0'),
            _ => return None,
        };
        Square::from_xy(x, y)
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the file index (0-7, 0 = a-file).
    #[inline]
    pub const fn x(self) -> u8 {
        self.0 % 8
    }

    /// Returns the row index (0-7, 0 = rank 8).
    #[inline]
    pub const fn y(self) -> u8 {
        self.0 / 8
    }

    /// Returns the square offset by (dx, dy), or `None` if it would
    /// leave the board.
    #[inline]
    pub const fn offset(self, dx: i16, dy: i16) -> Option<Self> {
        match Self::try_from_xy(self.x() as i16 + dx, self.y() as i16 + dy) {
            Ok(sq) => Some(sq),
            Err(_) => None,
        }
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.x()) as char;
        let rank = (b'0' + (8 - self.y())) as char;
        format!("{}{}", file, rank)
    }

    /// All 64 squares in row-major order, a8 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
