//! Duck chess rules engine.
//!
//! This crate provides:
//! - [`Board`] - the mutable game aggregate: an 8x8 grid of pieces plus
//!   turn, castling-rights, en-passant, and clock bookkeeping
//! - [`generate_moves`] - per-piece destination generation, with an
//!   attacking mode used to compute threatened squares
//! - [`perft`](perft::perft) - brute-force move counting for validating
//!   the generator
//!
//! # Rules
//!
//! This is the duck-chess variant ruleset, not standard chess. The game
//! ends only when a king is physically captured; there is no check,
//! checkmate, or stalemate detection, and castling is never generated.
//! The only king-safety mechanism is that a king will not move onto a
//! square currently attacked by the other side.
//!
//! # Example
//!
//! ```
//! use duck_engine::Board;
//! use duck_core::Square;
//!
//! let mut board = Board::startpos();
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e4 = Square::from_algebraic("e4").unwrap();
//! assert!(board.moves_from(e2).contains(e4));
//! board.move_piece(e2, e4).unwrap();
//! ```

mod board;
mod movegen;
pub mod perft;

pub use board::{Board, BoardState, GameStatus, MoveError};
pub use movegen::{generate_moves, MoveSet, MoveSetError};
