//! Core types for duck chess.
//!
//! This crate provides the fundamental types used across the rules engine:
//! - [`Piece`], [`PieceKind`], and [`Color`] for occupant representation
//! - [`Square`] for board coordinates
//! - FEN parsing and serialization

mod color;
mod fen;
mod piece;
mod square;

pub use color::Color;
pub use fen::{FenError, FenParser};
pub use piece::{Piece, PieceKind};
pub use square::{OutOfBounds, Square};
