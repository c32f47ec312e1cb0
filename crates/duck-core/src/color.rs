//! Occupant color representation.

/// The two players, plus the neutral color of the duck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
    /// The duck belongs to neither player.
    Neutral = 2,
}

impl Color {
    /// Returns the opposing player color. Neutral has no opponent.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
            Color::Neutral => Color::Neutral,
        }
    }

    /// Returns the forward row step for this color's pawns.
    ///
    /// Rows count down from rank 8, so White pawns advance toward
    /// smaller row indices.
    #[inline]
    pub const fn pawn_step(self) -> i16 {
        match self {
            Color::White => -1,
            Color::Black => 1,
            Color::Neutral => 0,
        }
    }

    /// Returns the row a pawn of this color double-steps from.
    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
            Color::Neutral => 0,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
            Color::Neutral => write!(f, "Neutral"),
        }
    }
}
