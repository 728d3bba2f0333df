//! Core data layer of a bitboard chess engine.
//!
//! - `square` / `piece`: indexing of squares (A1=0 … H8=63) and the 12 colored pieces.
//! - `bitboard`: 64-bit square sets and the set/clear/get/pop primitives.
//! - `attacks`: build-once pseudo-attack tables for knights, kings and pawns.
//! - `board`: per-piece bitboards, derived occupancies and game-state fields.
//! - `moves`: packed 32-bit move encoding with UCI text form.

pub mod square;
pub mod piece;
pub mod bitboard;
pub mod attacks;
pub mod castling;
pub mod board;
pub mod moves;
pub mod error;

pub use attacks::{attack_tables, AttackTables};
pub use bitboard::{clear_bit, get_bit, pop_lowest_set_bit, set_bit, Bitboard};
pub use board::Board;
pub use castling::CastlingRights;
pub use error::{ParseError, ParseResult};
pub use moves::{Move, Promotion};
pub use piece::{Piece, PieceKind};
pub use square::Square;

/// Side color. Discriminants are the occupancy/table indices (White=0, Black=1).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Color {
  White = 0,
  Black = 1,
}

impl Color {
  pub fn from_index(s: usize) -> Option<Color> {
    match s {
      0 => Some(Color::White),
      1 => Some(Color::Black),
      _ => None,
    }
  }

  #[inline]
  pub fn index(self) -> usize {
    self as usize
  }

  #[inline]
  pub fn opposite(self) -> Color {
    match self {
      Color::White => Color::Black,
      Color::Black => Color::White,
    }
  }
}
