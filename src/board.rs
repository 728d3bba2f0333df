//! Board: per-piece bitboards, derived occupancies, and game-state fields.
//!
//! The piece boards are the source of truth; `occupancy` is derived from them and
//! is kept in step by `add_piece` / `remove_piece`, the only mutation primitives.
//! Neither checks chess rules. Their preconditions are caller contracts, asserted
//! in debug builds only.

use std::fmt::{self, Display, Formatter};

use crate::bitboard::{clear_bit, get_bit, set_bit, Bitboard};
use crate::castling::CastlingRights;
use crate::piece::Piece;
use crate::square::Square;
use crate::Color;

/// Starting-position bitboards, in `Piece` index order.
const START_PIECES: [u64; 12] = [
  0x0000_0000_0000_ff00, // white pawns, rank 2
  0x0000_0000_0000_0042, // white knights, b1 g1
  0x0000_0000_0000_0024, // white bishops, c1 f1
  0x0000_0000_0000_0081, // white rooks, a1 h1
  0x0000_0000_0000_0008, // white queen, d1
  0x0000_0000_0000_0010, // white king, e1
  0x00ff_0000_0000_0000, // black pawns, rank 7
  0x4200_0000_0000_0000, // black knights, b8 g8
  0x2400_0000_0000_0000, // black bishops, c8 f8
  0x8100_0000_0000_0000, // black rooks, a8 h8
  0x0800_0000_0000_0000, // black queen, d8
  0x1000_0000_0000_0000, // black king, e8
];

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
  pub pieces: [Bitboard; 12], // indexed by Piece::index()
  pub occupancy: [Bitboard; 3], // white, black, all
  pub side_to_move: Color,
  pub castling: CastlingRights,
  pub en_passant: Option<Square>,
  pub halfmove_clock: u32, // plies since last pawn move or capture
  pub fullmove_number: u32, // starts at 1, incremented after Black moves
}

impl Board {
  pub const WHITE_OCC: usize = 0;
  pub const BLACK_OCC: usize = 1;
  pub const ALL_OCC: usize = 2;

  /// Standard starting position, White to move with all castling rights.
  pub fn new() -> Self {
    let mut board = Board::empty();
    for (bb, mask) in board.pieces.iter_mut().zip(START_PIECES) {
      *bb = Bitboard(mask);
    }
    board.recompute_occupancy();
    board.castling = CastlingRights::ALL;
    board
  }

  /// Create an empty board (no pieces, no castling rights), White to move.
  pub fn empty() -> Self {
    Self {
      pieces: [Bitboard::empty(); 12],
      occupancy: [Bitboard::empty(); 3],
      side_to_move: Color::White,
      castling: CastlingRights::NONE,
      en_passant: None,
      halfmove_clock: 0,
      fullmove_number: 1,
    }
  }

  /// Place `piece` on `sq`. Updates the piece board, its color's occupancy, and overall occupancy.
  ///
  /// Precondition: `sq` does not already hold a `piece`. Collisions with other
  /// kinds are not detected; the caller must remove the captured piece first.
  pub fn add_piece(&mut self, piece: Piece, sq: Square) {
    debug_assert!(!get_bit(self.pieces[piece.index()], sq), "{:?} already on {}", piece, sq);
    let color = piece.color().index();
    self.pieces[piece.index()] = set_bit(self.pieces[piece.index()], sq);
    self.occupancy[color] = set_bit(self.occupancy[color], sq);
    self.occupancy[Board::ALL_OCC] = set_bit(self.occupancy[Board::ALL_OCC], sq);
  }

  /// Remove `piece` from `sq`, clearing the same three bits `add_piece` sets.
  ///
  /// Precondition: `piece` is on `sq`. Removing an absent piece would clear
  /// occupancy bits that belong to another piece.
  pub fn remove_piece(&mut self, piece: Piece, sq: Square) {
    debug_assert!(get_bit(self.pieces[piece.index()], sq), "{:?} not on {}", piece, sq);
    let color = piece.color().index();
    self.pieces[piece.index()] = clear_bit(self.pieces[piece.index()], sq);
    self.occupancy[color] = clear_bit(self.occupancy[color], sq);
    self.occupancy[Board::ALL_OCC] = clear_bit(self.occupancy[Board::ALL_OCC], sq);
  }

  /// Return the piece at `sq` if any, scanning the piece boards in index order.
  /// Reads only the piece boards, so a stale occupancy bit cannot hide a piece.
  pub fn piece_at(&self, sq: Square) -> Option<Piece> {
    Piece::ALL.into_iter().find(|p| get_bit(self.pieces[p.index()], sq))
  }

  /// Bitboard of every `piece` on the board.
  pub fn pieces(&self, piece: Piece) -> Bitboard {
    self.pieces[piece.index()]
  }

  /// Occupancy of one side.
  pub fn occupancy(&self, color: Color) -> Bitboard {
    self.occupancy[color.index()]
  }

  pub fn all_occupancy(&self) -> Bitboard {
    self.occupancy[Board::ALL_OCC]
  }

  /// Rebuild the three occupancy boards from the piece boards.
  pub fn recompute_occupancy(&mut self) {
    let white = self.pieces[..6].iter().fold(Bitboard::empty(), |acc, bb| acc | *bb);
    let black = self.pieces[6..].iter().fold(Bitboard::empty(), |acc, bb| acc | *bb);
    self.occupancy = [white, black, white | black];
  }

  /// Check the occupancy invariants and that no square holds two pieces.
  pub fn is_consistent(&self) -> bool {
    let mut expected = *self;
    expected.recompute_occupancy();
    let [white, black, all] = self.occupancy;
    let piece_total: u32 = self.pieces.iter().map(|bb| bb.count()).sum();

    expected.occupancy == self.occupancy
      && (white | black) == all
      && (white & black).is_empty()
      && piece_total == all.count()
  }
}

impl Default for Board {
  fn default() -> Self {
    Board::new()
  }
}

// Rank 8 at the top, then the state fields in FEN order.
impl Display for Board {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    for rank in (0..8u8).rev() {
      write!(f, "{} ", rank + 1)?;
      for file in 0..8u8 {
        let ch = Square::from_file_rank(file, rank)
          .and_then(|sq| self.piece_at(sq))
          .map_or('.', |p| p.to_char());
        write!(f, "{} ", ch)?;
      }
      writeln!(f)?;
    }
    writeln!(f, "  a b c d e f g h")?;
    let side = match self.side_to_move {
      Color::White => 'w',
      Color::Black => 'b',
    };
    writeln!(f, "side to move: {}", side)?;
    writeln!(f, "castling: {}", self.castling)?;
    match self.en_passant {
      Some(sq) => writeln!(f, "en passant: {}", sq)?,
      None => writeln!(f, "en passant: -")?,
    }
    write!(f, "halfmove clock: {}, fullmove number: {}", self.halfmove_clock, self.fullmove_number)
  }
}
