//! Bitboard: a 64-bit mask where each bit corresponds to a board square (A1=bit 0 … H8=bit 63).
//! Squares follow the same indexing as `Square`: A1=0, H1=7, A8=56, H8=63.
//! Common operations: build sets of squares, test membership, count bits, and iterate via pop.

use crate::square::Square;

use std::{fmt::{self, Display, Formatter}, ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, Not}};

/// Newtype wrapper around `u64` so we don't mix raw integers with bitboards.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Debug)]
pub struct Bitboard(pub u64);

/// Return `bb` with the bit for `sq` set. `sq` must be a real square (0..=63).
#[inline]
pub fn set_bit(bb: Bitboard, sq: Square) -> Bitboard {
  debug_assert!(!sq.is_none(), "set_bit on the no-square sentinel");
  Bitboard(bb.0 | (1u64 << sq.index()))
}

/// Return `bb` with the bit for `sq` cleared.
#[inline]
pub fn clear_bit(bb: Bitboard, sq: Square) -> Bitboard {
  debug_assert!(!sq.is_none(), "clear_bit on the no-square sentinel");
  Bitboard(bb.0 & !(1u64 << sq.index()))
}

/// True iff the bit for `sq` is set.
#[inline]
pub fn get_bit(bb: Bitboard, sq: Square) -> bool {
  debug_assert!(!sq.is_none(), "get_bit on the no-square sentinel");
  (bb.0 & (1u64 << sq.index())) != 0
}

/// Split off the least-significant set bit.
///
/// Returns the square of that bit and the bitboard with it cleared. An empty
/// bitboard is a normal input: the result is `(Square::NONE, bb)`.
#[inline]
pub fn pop_lowest_set_bit(bb: Bitboard) -> (Square, Bitboard) {
  match bb.lsb() {
    // x & (x - 1) drops the lowest set bit.
    Some(sq) => (sq, Bitboard(bb.0 & (bb.0 - 1))),
    None => (Square::NONE, bb),
  }
}

impl Bitboard {
  /// Create an empty bitboard (no bits set).
  pub const fn empty() -> Self { Bitboard(0) }

  /// Single-square bitboard.
  pub fn from_square(sq: Square) -> Self { set_bit(Bitboard(0), sq) }

  /// Returns true if any bit is set.
  pub fn any(self) -> bool { self.0 != 0 }

  /// Returns true if no bits are set.
  pub fn is_empty(self) -> bool { self.0 == 0 }

  /// Count of set bits (population count). Also called `popcnt` in engines.
  pub fn count(self) -> u32 { self.0.count_ones() }

  /// Square of the least-significant set bit, or None if empty.
  pub fn lsb(self) -> Option<Square> {
    if self.0 == 0 { None } else { Square::from_index(self.0.trailing_zeros() as u8) }
  }

  /// Pop the least-significant set bit: return its square and clear it.
  pub fn pop_lsb(&mut self) -> Option<Square> {
    let (sq, rest) = pop_lowest_set_bit(*self);
    *self = rest;
    if sq.is_none() { None } else { Some(sq) }
  }

  /// Set the bit corresponding to `sq`.
  pub fn set(&mut self, sq: Square) { *self = set_bit(*self, sq); }

  /// Clear the bit corresponding to `sq`.
  pub fn clear(&mut self, sq: Square) { *self = clear_bit(*self, sq); }

  /// Test if the bit for `sq` is set.
  pub fn test(self, sq: Square) -> bool { get_bit(self, sq) }

  /// Iterate set squares in ascending index order. `self` is copied, not consumed.
  pub fn squares(self) -> Squares { Squares(self) }
}

/// Iterator over the set squares of a bitboard, lowest first.
#[derive(Clone, Debug)]
pub struct Squares(Bitboard);

impl Iterator for Squares {
  type Item = Square;

  fn next(&mut self) -> Option<Square> {
    self.0.pop_lsb()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let n = self.0.count() as usize;
    (n, Some(n))
  }
}

impl ExactSizeIterator for Squares {}

impl FromIterator<Square> for Bitboard {
  fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
    iter.into_iter().fold(Bitboard::empty(), set_bit)
  }
}

impl BitOr for Bitboard {
  type Output = Self;

  fn bitor(self, rhs: Self) -> Self::Output {
    Bitboard(self.0 | rhs.0)
  }
}

impl BitAnd for Bitboard {
  type Output = Self;

  fn bitand(self, rhs: Self) -> Self::Output {
    Bitboard(self.0 & rhs.0)
  }
}

impl BitXor for Bitboard {
  type Output = Self;

  fn bitxor(self, rhs: Self) -> Self::Output {
    Bitboard(self.0 ^ rhs.0)
  }
}

impl BitOrAssign for Bitboard {
  fn bitor_assign(&mut self, rhs: Self) {
    self.0 |= rhs.0;
  }
}

impl BitAndAssign for Bitboard {
  fn bitand_assign(&mut self, rhs: Self) {
    self.0 &= rhs.0;
  }
}

impl Not for Bitboard {
  type Output = Self;

  fn not(self) -> Self::Output {
    Bitboard(!self.0)
  }
}

// Displays the bitboard as an 8x8 grid with rank/file labels.
// Top row is rank 8, bottom row is rank 1; files run a..h left to right.
impl Display for Bitboard {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    for rank in (0..8).rev() {
      write!(f, "{} ", rank + 1)?;
      for file in 0..8 {
        let ch = if self.0 & (1u64 << (rank * 8 + file)) != 0 { '1' } else { '0' };
        write!(f, "{} ", ch)?;
      }
      writeln!(f)?;
    }
    write!(f, "  a b c d e f g h")
  }
}
