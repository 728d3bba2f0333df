//! Piece indexing: colorless `PieceKind` (0..=5) and the 12 colored `Piece`s.
//! `Piece` discriminants are the board's piece-bitboard indices: index / 6 is
//! the color, index % 6 the kind.

use crate::error::ParseError;
use crate::Color;

/// The logical kind of a chess piece (no color).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum PieceKind {
  Pawn = 0,
  Knight = 1,
  Bishop = 2,
  Rook = 3,
  Queen = 4,
  King = 5,
}

impl PieceKind {
  pub const ALL: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
  ];

  /// Map a 0..=5 index to a `PieceKind` (0=P,1=N,2=B,3=R,4=Q,5=K).
  pub fn from_index(s: usize) -> Option<PieceKind> {
    PieceKind::ALL.get(s).copied()
  }

  #[inline]
  pub fn index(self) -> usize {
    self as usize
  }
}

/// A concrete piece: one of {White, Black} x {Pawn .. King}.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Piece {
  WhitePawn = 0,
  WhiteKnight = 1,
  WhiteBishop = 2,
  WhiteRook = 3,
  WhiteQueen = 4,
  WhiteKing = 5,
  BlackPawn = 6,
  BlackKnight = 7,
  BlackBishop = 8,
  BlackRook = 9,
  BlackQueen = 10,
  BlackKing = 11,
}

impl Piece {
  /// Index used for "no piece" where a raw index is needed.
  pub const NONE_INDEX: usize = 12;

  pub const ALL: [Piece; 12] = [
    Piece::WhitePawn,
    Piece::WhiteKnight,
    Piece::WhiteBishop,
    Piece::WhiteRook,
    Piece::WhiteQueen,
    Piece::WhiteKing,
    Piece::BlackPawn,
    Piece::BlackKnight,
    Piece::BlackBishop,
    Piece::BlackRook,
    Piece::BlackQueen,
    Piece::BlackKing,
  ];

  pub fn new(color: Color, kind: PieceKind) -> Piece {
    Piece::ALL[color.index() * 6 + kind.index()]
  }

  /// Map a 0..=11 index to a `Piece`; 12 (the sentinel) and above give `None`.
  pub fn from_index(i: usize) -> Option<Piece> {
    Piece::ALL.get(i).copied()
  }

  #[inline]
  pub fn index(self) -> usize {
    self as usize
  }

  #[inline]
  pub fn color(self) -> Color {
    if self.index() < 6 { Color::White } else { Color::Black }
  }

  #[inline]
  pub fn kind(self) -> PieceKind {
    PieceKind::ALL[self.index() % 6]
  }

  /// FEN letter: uppercase for white, lowercase for black.
  pub fn to_char(self) -> char {
    let c = match self.kind() {
      PieceKind::Pawn => 'p',
      PieceKind::Knight => 'n',
      PieceKind::Bishop => 'b',
      PieceKind::Rook => 'r',
      PieceKind::Queen => 'q',
      PieceKind::King => 'k',
    };
    match self.color() {
      Color::White => c.to_ascii_uppercase(),
      Color::Black => c,
    }
  }

  pub fn from_char(c: char) -> Result<Piece, ParseError> {
    let kind = match c.to_ascii_lowercase() {
      'p' => PieceKind::Pawn,
      'n' => PieceKind::Knight,
      'b' => PieceKind::Bishop,
      'r' => PieceKind::Rook,
      'q' => PieceKind::Queen,
      'k' => PieceKind::King,
      _ => return Err(ParseError::InvalidPiece(c)),
    };
    let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
    Ok(Piece::new(color, kind))
  }
}
