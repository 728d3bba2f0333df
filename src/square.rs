//! Square type: 0..=63 indexing where A1=0, H1=7, A8=56, H8=63.
//! From White's perspective: North=+8, South=-8, East=+1, West=-1.
//! This newtype wraps a `u8` to avoid mixing raw integers with board squares.
//! Index 64 is reserved for the `Square::NONE` sentinel.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::ParseError;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Square(u8);

impl Square {
  /// "No square": returned by `pop_lowest_set_bit` on an empty bitboard.
  pub const NONE: Square = Square(64);

  pub const A1: Square = Square(0);  pub const B1: Square = Square(1);  pub const C1: Square = Square(2);  pub const D1: Square = Square(3);
  pub const E1: Square = Square(4);  pub const F1: Square = Square(5);  pub const G1: Square = Square(6);  pub const H1: Square = Square(7);
  pub const A2: Square = Square(8);  pub const B2: Square = Square(9);  pub const C2: Square = Square(10); pub const D2: Square = Square(11);
  pub const E2: Square = Square(12); pub const F2: Square = Square(13); pub const G2: Square = Square(14); pub const H2: Square = Square(15);
  pub const A3: Square = Square(16); pub const B3: Square = Square(17); pub const C3: Square = Square(18); pub const D3: Square = Square(19);
  pub const E3: Square = Square(20); pub const F3: Square = Square(21); pub const G3: Square = Square(22); pub const H3: Square = Square(23);
  pub const A4: Square = Square(24); pub const B4: Square = Square(25); pub const C4: Square = Square(26); pub const D4: Square = Square(27);
  pub const E4: Square = Square(28); pub const F4: Square = Square(29); pub const G4: Square = Square(30); pub const H4: Square = Square(31);
  pub const A5: Square = Square(32); pub const B5: Square = Square(33); pub const C5: Square = Square(34); pub const D5: Square = Square(35);
  pub const E5: Square = Square(36); pub const F5: Square = Square(37); pub const G5: Square = Square(38); pub const H5: Square = Square(39);
  pub const A6: Square = Square(40); pub const B6: Square = Square(41); pub const C6: Square = Square(42); pub const D6: Square = Square(43);
  pub const E6: Square = Square(44); pub const F6: Square = Square(45); pub const G6: Square = Square(46); pub const H6: Square = Square(47);
  pub const A7: Square = Square(48); pub const B7: Square = Square(49); pub const C7: Square = Square(50); pub const D7: Square = Square(51);
  pub const E7: Square = Square(52); pub const F7: Square = Square(53); pub const G7: Square = Square(54); pub const H7: Square = Square(55);
  pub const A8: Square = Square(56); pub const B8: Square = Square(57); pub const C8: Square = Square(58); pub const D8: Square = Square(59);
  pub const E8: Square = Square(60); pub const F8: Square = Square(61); pub const G8: Square = Square(62); pub const H8: Square = Square(63);

  /// Create a square from a 0..=63 index. Returns `None` if out of range.
  pub fn from_index(i: u8) -> Option<Square> {
    if i > 63 {
      None
    }
    else {
      Some(Square(i))
    }
  }

  /// Create a square from file and rank (0..7). Returns `None` if out of range.
  pub fn from_file_rank(file: u8, rank: u8) -> Option<Square> {
    if file > 7 || rank > 7 {
      None
    }
    else {
      Some(Square(rank * 8 + file))
    }
  }

  /// Every real square in index order (A1, B1, … H8).
  pub fn all() -> impl Iterator<Item = Square> {
    (0..64u8).map(Square)
  }

  /// Packed move fields are 6 bits wide, so the mask keeps this total.
  pub(crate) fn from_bits(bits: u32) -> Square {
    Square((bits & 0x3f) as u8)
  }

  /// Return the underlying index (0..=63, or 64 for `NONE`).
  pub fn index(&self) -> u8 { self.0 }

  pub fn is_none(&self) -> bool { self.0 == Square::NONE.0 }

  /// Get the file (0..7) of the square.
  pub fn file(&self) -> u8 {
    self.0 % 8
  }

  /// Get the rank (0..7) of the square.
  pub fn rank(&self) -> u8 {
    self.0 / 8
  }

  /// Offset the square by a signed delta. Returns `None` if out of range.
  /// Only the index range is checked; file wrap is the caller's concern.
  pub fn offset(&self, delta: i8) -> Option<Square> {
    let new_index = self.0 as i16 + delta as i16;
    if !(0..=63).contains(&new_index) {
      None
    }
    else {
      Some(Square(new_index as u8))
    }
  }

  /// Absolute file difference between two squares.
  pub fn file_distance(&self, other: Square) -> u8 {
    self.file().abs_diff(other.file())
  }
}

impl Display for Square {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    if self.is_none() {
      return write!(f, "-");
    }
    let file_char = (b'a' + self.file()) as char; // algebraic uses lowercase a..h
    let rank_char = (b'1' + self.rank()) as char; // '1'..'8'
    write!(f, "{}{}", file_char, rank_char)
  }
}

impl FromStr for Square {
  type Err = ParseError;

  /// Parse algebraic notation such as `e4`.
  fn from_str(s: &str) -> Result<Square, ParseError> {
    let bytes = s.as_bytes();
    if bytes.len() != 2 {
      return Err(ParseError::InvalidSquare(s.to_string()));
    }
    match (bytes[0], bytes[1]) {
      (f @ b'a'..=b'h', r @ b'1'..=b'8') => Ok(Square((r - b'1') * 8 + (f - b'a'))),
      _ => Err(ParseError::InvalidSquare(s.to_string())),
    }
  }
}
