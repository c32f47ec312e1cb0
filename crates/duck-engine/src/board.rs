//! The board aggregate: grid, turn, clocks, and move execution.

use crate::movegen::{generate_moves, MoveSet};
use duck_core::{Color, FenError, FenParser, Piece, PieceKind, Square};
use std::fmt;
use thiserror::Error;

/// Errors from move execution.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("no piece on {0}")]
    EmptySource(Square),
}

/// Terminal-state query result.
///
/// The game ends only when a king is physically captured; there is no
/// checkmate, stalemate, or draw detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// The side to move still has its king.
    Ongoing,
    /// The side to move has no king; the previous move captured it.
    Win,
}

/// Turn, rights, en-passant, and clock bookkeeping.
///
/// All of these fields change together, only through [`Board::from_fen`]
/// and [`Board::move_piece`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    /// The side to move.
    pub side_to_move: Color,
    /// Castling rights as parsed. Stored but never consulted: castling
    /// moves are not generated in this variant.
    pub castling: String,
    /// En passant target square, if any.
    pub en_passant: Option<Square>,
    /// Plies the en passant target remains valid (0, 1, or 2).
    pub en_passant_ttl: u8,
    /// Moves since the last pawn move or capture.
    pub halfmove_clock: u32,
    /// Starts at 1, increments after Black's move.
    pub fullmove_number: u32,
}

/// The mutable game aggregate: an 8x8 grid of pieces plus bookkeeping.
///
/// The grid is row-major from the top: index 0 is a8, index 63 is h1.
/// A single logical game owns one `Board`; mutation happens only through
/// [`Board::move_piece`] and [`Board::from_fen`], each of which ends by
/// recomputing the attacked-squares cache.
#[derive(Debug, Clone)]
pub struct Board {
    grid: [Option<Piece>; 64],
    state: BoardState,
    /// Squares threatened by the side not to move. Derived: valid only
    /// immediately after the most recent load or move.
    attacked: Vec<Square>,
}

impl Board {
    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        Self::from_fen(FenParser::STARTPOS).expect("STARTPOS is valid")
    }

    /// Creates a board from a FEN string and runs the attacked-squares
    /// pass.
    ///
    /// A loaded en-passant target carries no time-to-live: it survives
    /// exactly the next ply.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = FenParser::parse(fen)?;

        let mut grid = [None; 64];
        for (y, rank_str) in parsed.piece_placement.split('/').enumerate() {
            let mut x = 0u8;
            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    x += digit as u8;
                } else if let Some(piece) = Piece::from_fen_char(c) {
                    if let Some(sq) = Square::from_xy(x, y as u8) {
                        grid[sq.index()] = Some(piece);
                    }
                    x += 1;
                }
            }
        }

        let side_to_move = match parsed.side_to_move {
            'w' => Color::White,
            _ => Color::Black,
        };

        let en_passant = if parsed.en_passant == "-" {
            None
        } else {
            Square::from_algebraic(&parsed.en_passant)
        };

        let mut board = Board {
            grid,
            state: BoardState {
                side_to_move,
                castling: parsed.castling,
                en_passant,
                en_passant_ttl: 0,
                halfmove_clock: parsed.halfmove_clock,
                fullmove_number: parsed.fullmove_number,
            },
            attacked: Vec::new(),
        };
        board.recompute_attacked();
        Ok(board)
    }

    /// Serializes the position to a FEN string.
    ///
    /// The castling field is always the literal `KQkq`, regardless of
    /// the stored rights.
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for y in 0..8u8 {
            let mut empty_run = 0;
            for x in 0..8u8 {
                let sq = Square::from_xy(x, y).expect("x and y are in range");
                if let Some(piece) = self.grid[sq.index()] {
                    if empty_run > 0 {
                        fen.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    fen.push(piece.to_fen_char());
                } else {
                    empty_run += 1;
                }
            }
            if empty_run > 0 {
                fen.push_str(&empty_run.to_string());
            }
            if y < 7 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.state.side_to_move {
            Color::White => 'w',
            _ => 'b',
        });

        fen.push_str(" KQkq ");
        match self.state.en_passant {
            Some(sq) => fen.push_str(&sq.to_algebraic()),
            None => fen.push('-'),
        }

        fen.push(' ');
        fen.push_str(&self.state.halfmove_clock.to_string());
        fen.push(' ');
        fen.push_str(&self.state.fullmove_number.to_string());

        fen
    }

    /// Returns the occupant of a square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.index()]
    }

    /// Returns the full grid, row-major from a8.
    #[inline]
    pub fn grid(&self) -> &[Option<Piece>; 64] {
        &self.grid
    }

    /// Returns the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move
    }

    /// Returns the current en passant target square, if any.
    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.state.en_passant
    }

    /// Returns the bookkeeping record.
    #[inline]
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Returns the squares threatened by the side not to move, in the
    /// order the attacked-squares pass produced them (duplicates kept).
    #[inline]
    pub fn attacked_squares(&self) -> &[Square] {
        &self.attacked
    }

    /// Returns the legal destinations for the occupant of `from`.
    pub fn moves_from(&self, from: Square) -> MoveSet {
        generate_moves(self, from, false)
    }

    /// Returns every occupied square with its generated destinations,
    /// optionally filtered by color. This is the entry point for the
    /// brute-force counting harness.
    pub fn all_moves(&self, color: Option<Color>) -> Vec<(Square, MoveSet)> {
        let mut all = Vec::new();
        for sq in Square::all() {
            let Some(piece) = self.grid[sq.index()] else {
                continue;
            };
            if color.is_none() || color == Some(piece.color) {
                all.push((sq, self.moves_from(sq)));
            }
        }
        all
    }

    /// Finds the first square holding a piece equal to `piece`, in
    /// row-major scan order.
    pub fn find_piece(&self, piece: Piece) -> Option<Square> {
        Square::all().find(|&sq| self.grid[sq.index()] == Some(piece))
    }

    /// Reports whether the game has ended.
    ///
    /// The game is won exactly when the king of the side to move is
    /// absent from the grid: it was captured on the previous move.
    pub fn status(&self) -> GameStatus {
        let king = Piece::new(PieceKind::King, self.state.side_to_move);
        if self.find_piece(king).is_none() {
            GameStatus::Win
        } else {
            GameStatus::Ongoing
        }
    }

    /// Returns the winning color, if the game has ended.
    pub fn winner(&self) -> Option<Color> {
        match self.status() {
            GameStatus::Win => Some(self.state.side_to_move.opposite()),
            GameStatus::Ongoing => None,
        }
    }

    /// Executes a move from `from` to `to`.
    ///
    /// The move is applied unchecked beyond requiring an occupied
    /// source: callers are expected to pick destinations from
    /// [`moves_from`](Board::moves_from). Updates the halfmove clock,
    /// en-passant state, turn, and fullmove number, then reruns the
    /// attacked-squares pass.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<(), MoveError> {
        let piece = self.grid[from.index()].ok_or(MoveError::EmptySource(from))?;
        let color = piece.color;

        // Halfmove clock and en-passant setup.
        if piece.kind == PieceKind::Pawn {
            self.state.halfmove_clock = 0;
            let dy = to.y() as i16 - from.y() as i16;
            // The TTL differs by push direction; see move step 7 below.
            // A downward (Black) push gets 2, an upward (White) push 1.
            if dy == 2 {
                self.state.en_passant = from.offset(0, 1);
                self.state.en_passant_ttl = 2;
            } else if dy == -2 {
                self.state.en_passant = from.offset(0, -1);
                self.state.en_passant_ttl = 1;
            }
        } else if self.grid[to.index()].is_some() {
            self.state.halfmove_clock = 0;
        } else {
            self.state.halfmove_clock += 1;
        }

        // En-passant capture: a pawn landing diagonally on an empty
        // square takes the pawn vertically adjacent on its origin side.
        if piece.kind == PieceKind::Pawn
            && self.grid[to.index()].is_none()
            && to.x() != from.x()
        {
            let dy = if color == Color::White { 1 } else { -1 };
            if let Some(captured) = to.offset(0, dy) {
                self.grid[captured.index()] = None;
            }
        }

        // Relocate.
        self.grid[to.index()] = Some(piece);
        self.grid[from.index()] = None;

        // Turn and fullmove bookkeeping.
        self.state.side_to_move = self.state.side_to_move.opposite();
        if color == Color::Black {
            self.state.fullmove_number += 1;
        }

        // Expire the en-passant target. This runs on the pushing move
        // too, which is what makes the 2/1 TTL split above come out to
        // one capturable ply for a White push.
        if self.state.en_passant_ttl != 0 {
            self.state.en_passant_ttl -= 1;
        } else {
            self.state.en_passant = None;
        }

        self.recompute_attacked();
        Ok(())
    }

    /// Rebuilds the attacked-squares cache: attacking-mode generation
    /// for every piece whose color differs from the side to move,
    /// unioned in row-major scan order.
    ///
    /// The cache is cleared first and appended to piece by piece, so
    /// the enemy king's own generation sees the set as built so far.
    fn recompute_attacked(&mut self) {
        self.attacked.clear();
        for sq in Square::all() {
            let Some(piece) = self.grid[sq.index()] else {
                continue;
            };
            if piece.color == self.state.side_to_move {
                continue;
            }
            let moves = generate_moves(self, sq, true);
            self.attacked.extend(moves.iter());
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} to move", self.state.side_to_move)?;
        writeln!(
            f,
            "Castling: {}  En passant: {}  Halfmove: {}  Fullmove: {}",
            self.state.castling,
            match self.state.en_passant {
                Some(sq) => sq.to_algebraic(),
                None => "-".to_string(),
            },
            self.state.halfmove_clock,
            self.state.fullmove_number
        )?;
        for y in 0..8u8 {
            write!(f, "{} ", 8 - y)?;
            for x in 0..8u8 {
                let sq = Square::from_xy(x, y).expect("x and y are in range");
                match self.grid[sq.index()] {
                    Some(piece) => write!(f, " {}", piece.to_fen_char())?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
