//! Move generation.
//!
//! [`generate_moves`] is a pure function over a board and a source
//! square: it never mutates the board or the occupant. Sliding pieces
//! walk outward along direction rays until blocked; the `attacking`
//! flag switches generation into the mode used to seed the board's
//! attacked-squares set.

use crate::Board;
use duck_core::{Color, PieceKind, Square};
use thiserror::Error;

/// Errors from explicit edits of a [`MoveSet`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveSetError {
    #[error("destination {0} is not in the move set")]
    NotInSet(Square),
}

/// An ordered set of destination squares produced by move generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSet {
    moves: Vec<Square>,
}

impl MoveSet {
    /// Creates an empty set.
    #[inline]
    pub const fn new() -> Self {
        MoveSet { moves: Vec::new() }
    }

    /// Appends a destination.
    #[inline]
    pub fn push(&mut self, sq: Square) {
        self.moves.push(sq);
    }

    /// Appends every destination from an iterator.
    pub fn extend<I: IntoIterator<Item = Square>>(&mut self, squares: I) {
        self.moves.extend(squares);
    }

    /// Removes the first exact match of `sq`, failing if it is absent.
    pub fn remove(&mut self, sq: Square) -> Result<(), MoveSetError> {
        match self.moves.iter().position(|&m| m == sq) {
            Some(i) => {
                self.moves.remove(i);
                Ok(())
            }
            None => Err(MoveSetError::NotInSet(sq)),
        }
    }

    /// Removes each destination in `squares`, failing on the first
    /// absent one. Destinations removed before the failure stay removed.
    pub fn remove_all(&mut self, squares: &[Square]) -> Result<(), MoveSetError> {
        for &sq in squares {
            self.remove(sq)?;
        }
        Ok(())
    }

    /// Returns true if `sq` is a generated destination.
    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        self.moves.contains(&sq)
    }

    /// Returns the number of destinations.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if there are no destinations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns the destinations in generation order.
    #[inline]
    pub fn as_slice(&self) -> &[Square] {
        &self.moves
    }

    /// Iterates the destinations by value.
    pub fn iter(&self) -> impl Iterator<Item = Square> + '_ {
        self.moves.iter().copied()
    }

    /// Drops all destinations.
    #[inline]
    pub fn clear(&mut self) {
        self.moves.clear();
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

const KNIGHT_OFFSETS: [(i16, i16); 8] = [
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
];

const ROOK_DIRS: [(i16, i16); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
const BISHOP_DIRS: [(i16, i16); 4] = [(-1, -1), (1, 1), (-1, 1), (1, -1)];
const QUEEN_DIRS: [(i16, i16); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
];

/// Generates the destination squares for the occupant of `from`.
///
/// In attacking mode the result is the set of squares the occupant
/// threatens: pawns report only their two capture diagonals regardless
/// of occupancy, and occupied squares of either color terminate but are
/// included in slider rays. An empty source square, or a duck, yields
/// an empty set.
pub fn generate_moves(board: &Board, from: Square, attacking: bool) -> MoveSet {
    let mut moves = MoveSet::new();
    let Some(piece) = board.piece_at(from) else {
        return moves;
    };

    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece.color, attacking, &mut moves),
        PieceKind::Knight => knight_moves(board, from, piece.color, attacking, &mut moves),
        PieceKind::Rook => slider_moves(board, from, piece.color, attacking, &ROOK_DIRS, &mut moves),
        PieceKind::Bishop => {
            slider_moves(board, from, piece.color, attacking, &BISHOP_DIRS, &mut moves)
        }
        PieceKind::Queen => {
            slider_moves(board, from, piece.color, attacking, &QUEEN_DIRS, &mut moves)
        }
        PieceKind::King => king_moves(board, from, piece.color, attacking, &mut moves),
        // No movement rule exists for the duck.
        PieceKind::Duck => {}
    }

    moves
}

/// Returns true if `sq` holds a piece of `color`.
fn is_own(board: &Board, sq: Square, color: Color) -> bool {
    board.piece_at(sq).is_some_and(|p| p.color == color)
}

fn pawn_moves(board: &Board, from: Square, color: Color, attacking: bool, moves: &mut MoveSet) {
    let step = color.pawn_step();

    if attacking {
        // Both capture diagonals, regardless of occupancy.
        for dx in [1, -1] {
            if let Some(sq) = from.offset(dx, step) {
                moves.push(sq);
            }
        }
        return;
    }

    for dx in -1..=1i16 {
        let Some(sq) = from.offset(dx, step) else {
            continue;
        };
        match board.piece_at(sq) {
            // Diagonal capture; the neutral duck counts as an enemy.
            Some(p) if dx != 0 && p.color != color => moves.push(sq),
            // Forward advance, with a double step from the start row.
            None if dx == 0 => {
                moves.push(sq);
                if from.y() == color.pawn_start_row() {
                    if let Some(two) = from.offset(0, step * 2) {
                        if board.piece_at(two).is_none() {
                            moves.push(two);
                        }
                    }
                }
            }
            // Diagonal step onto the en-passant target.
            _ => {
                if dx != 0 && board.en_passant_target() == Some(sq) {
                    moves.push(sq);
                }
            }
        }
    }
}

fn knight_moves(board: &Board, from: Square, color: Color, attacking: bool, moves: &mut MoveSet) {
    for (dx, dy) in KNIGHT_OFFSETS {
        if let Some(sq) = from.offset(dx, dy) {
            if attacking || !is_own(board, sq, color) {
                moves.push(sq);
            }
        }
    }
}

/// Walks each direction ray outward from `from`. An occupied square is
/// included when enemy-colored or in attacking mode, and always ends
/// the ray; empty squares are included and the walk continues.
fn slider_moves(
    board: &Board,
    from: Square,
    color: Color,
    attacking: bool,
    dirs: &[(i16, i16)],
    moves: &mut MoveSet,
) {
    for &(dx, dy) in dirs {
        let mut sq = from;
        while let Some(next) = sq.offset(dx, dy) {
            match board.piece_at(next) {
                Some(p) => {
                    if p.color != color || attacking {
                        moves.push(next);
                    }
                    break;
                }
                None => moves.push(next),
            }
            sq = next;
        }
    }
}

fn king_moves(board: &Board, from: Square, color: Color, attacking: bool, moves: &mut MoveSet) {
    for dx in -1..=1i16 {
        for dy in -1..=1i16 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let Some(sq) = from.offset(dx, dy) else {
                continue;
            };
            // The only check-avoidance rule: never step onto a square
            // the other side currently attacks.
            if board.attacked_squares().contains(&sq) {
                continue;
            }
            if attacking || !is_own(board, sq, color) {
                moves.push(sq);
            }
        }
    }
}
