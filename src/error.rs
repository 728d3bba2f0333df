//! Errors for the text forms (algebraic squares, piece letters, UCI moves).
//!
//! Board and bitboard operations do not return errors: their preconditions
//! are caller contracts checked with `debug_assert!`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
  /// Not two characters of the form `[a-h][1-8]`.
  #[error("invalid square: {0:?}")]
  InvalidSquare(String),

  /// Promotion suffix other than `n`, `b`, `r` or `q`.
  #[error("invalid promotion piece: {0:?}")]
  InvalidPromotion(char),

  /// UCI move text must be four or five characters.
  #[error("invalid UCI move length: {0:?}")]
  InvalidLength(String),

  /// Letter outside `PNBRQK` / `pnbrqk`.
  #[error("invalid piece letter: {0:?}")]
  InvalidPiece(char),
}

pub type ParseResult<T> = Result<T, ParseError>;
