//! Castling rights as a 4-bit set (bit 1=WK, 2=WQ, 4=BK, 8=BQ).

use std::fmt::{self, Display, Formatter};

use crate::Color;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct CastlingRights(pub u8);

impl CastlingRights {
  pub const NONE: CastlingRights = CastlingRights(0b0000);
  pub const WHITE_KING_SIDE: CastlingRights = CastlingRights(0b0001);
  pub const WHITE_QUEEN_SIDE: CastlingRights = CastlingRights(0b0010);
  pub const BLACK_KING_SIDE: CastlingRights = CastlingRights(0b0100);
  pub const BLACK_QUEEN_SIDE: CastlingRights = CastlingRights(0b1000);
  pub const ALL: CastlingRights = CastlingRights(0b1111);

  pub fn contains(self, other: CastlingRights) -> bool {
    self.0 & other.0 == other.0
  }

  pub fn insert(&mut self, other: CastlingRights) {
    self.0 |= other.0;
  }

  pub fn remove(&mut self, other: CastlingRights) {
    self.0 &= !other.0;
  }

  /// Both rights belonging to `color`.
  pub fn for_color(color: Color) -> CastlingRights {
    match color {
      Color::White => CastlingRights(0b0011),
      Color::Black => CastlingRights(0b1100),
    }
  }
}

// FEN castling field: "KQkq" subset, or "-" when empty.
impl Display for CastlingRights {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    if self.0 & 0b1111 == 0 {
      return write!(f, "-");
    }
    let flags = [
      (CastlingRights::WHITE_KING_SIDE, 'K'),
      (CastlingRights::WHITE_QUEEN_SIDE, 'Q'),
      (CastlingRights::BLACK_KING_SIDE, 'k'),
      (CastlingRights::BLACK_QUEEN_SIDE, 'q'),
    ];
    for (right, c) in flags {
      if self.contains(right) {
        write!(f, "{}", c)?;
      }
    }
    Ok(())
  }
}
