//! Precomputed pseudo-attack tables for non-sliding pieces.
//! Targets come from raw index offsets; a candidate is kept only if it stays on the
//! board and its file distance from the origin rules out wrap across the a/h edge.
//! Indexing matches `Square`: A1=0..H8=63; N=+8, S=-8, E=+1, W=-1.
//!
//! Bishop, rook and queen tables are present but left empty: slider attacks depend
//! on occupancy and are produced elsewhere.

use once_cell::sync::Lazy;
use log::debug;

use crate::bitboard::{set_bit, Bitboard};
use crate::square::Square;
use crate::Color;

const KNIGHT_OFFSETS: [i8; 8] = [17, 15, 10, 6, -17, -15, -10, -6];
const KING_OFFSETS: [i8; 8] = [9, 8, 7, 1, -9, -8, -7, -1];
const WHITE_PAWN_OFFSETS: [i8; 2] = [9, 7];
const BLACK_PAWN_OFFSETS: [i8; 2] = [-7, -9];

/// One bitboard per origin square for each piece table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackTables {
  king: [Bitboard; 64],
  knight: [Bitboard; 64],
  pawn: [[Bitboard; 64]; 2], // [color][square]
  bishop: [Bitboard; 64],
  rook: [Bitboard; 64],
  queen: [Bitboard; 64],
}

static ATTACK_TABLES: Lazy<AttackTables> = Lazy::new(|| {
  debug!("initializing attack tables");
  let tables = AttackTables::new();
  debug!("attack tables initialized");
  tables
});

/// Process-wide tables, computed on first call and read-only afterwards.
pub fn attack_tables() -> &'static AttackTables {
  &ATTACK_TABLES
}

/// Squares reachable from `from` by `offsets` whose file distance passes `keep`.
fn leaper_targets(from: Square, offsets: &[i8], keep: impl Fn(u8) -> bool) -> Bitboard {
  offsets
    .iter()
    .filter_map(|&delta| from.offset(delta))
    .filter(|&to| keep(from.file_distance(to)))
    .fold(Bitboard::empty(), set_bit)
}

impl AttackTables {
  /// Compute every populated table. Deterministic, so rebuilding yields equal tables.
  pub fn new() -> Self {
    let mut tables = AttackTables {
      king: [Bitboard::empty(); 64],
      knight: [Bitboard::empty(); 64],
      pawn: [[Bitboard::empty(); 64]; 2],
      bishop: [Bitboard::empty(); 64],
      rook: [Bitboard::empty(); 64],
      queen: [Bitboard::empty(); 64],
    };

    for sq in Square::all() {
      let s = sq.index() as usize;
      tables.knight[s] = leaper_targets(sq, &KNIGHT_OFFSETS, |d| d <= 2);
      tables.king[s] = leaper_targets(sq, &KING_OFFSETS, |d| d <= 1);
      tables.pawn[Color::White.index()][s] = leaper_targets(sq, &WHITE_PAWN_OFFSETS, |d| d == 1);
      tables.pawn[Color::Black.index()][s] = leaper_targets(sq, &BLACK_PAWN_OFFSETS, |d| d == 1);
    }
    tables
  }

  /// King attack mask from `sq` (no blockers).
  pub fn king(&self, sq: Square) -> Bitboard {
    self.king[sq.index() as usize]
  }

  /// Knight attack mask from `sq` (no blockers).
  pub fn knight(&self, sq: Square) -> Bitboard {
    self.knight[sq.index() as usize]
  }

  /// Pawn capture mask from `sq` for `color` (diagonals only; no pushes).
  pub fn pawn(&self, color: Color, sq: Square) -> Bitboard {
    self.pawn[color.index()][sq.index() as usize]
  }

  /// Placeholder, always empty.
  pub fn bishop(&self, sq: Square) -> Bitboard {
    self.bishop[sq.index() as usize]
  }

  /// Placeholder, always empty.
  pub fn rook(&self, sq: Square) -> Bitboard {
    self.rook[sq.index() as usize]
  }

  /// Placeholder, always empty.
  pub fn queen(&self, sq: Square) -> Bitboard {
    self.queen[sq.index() as usize]
  }
}

impl Default for AttackTables {
  fn default() -> Self {
    AttackTables::new()
  }
}
