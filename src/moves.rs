//! Packed move encoding.
//!
//! A `Move` is a `u32` with the layout:
//!
//! | bits  | field                                             |
//! |-------|---------------------------------------------------|
//! | 0-5   | origin square                                     |
//! | 6-11  | destination square                                |
//! | 12-14 | promotion type (0 none, 1 N, 2 B, 3 R, 4 Q)       |
//! | 16    | promotion                                         |
//! | 17    | capture (also set for en passant)                 |
//! | 18    | en passant                                        |
//! | 19    | king-side castle                                  |
//! | 20    | queen-side castle                                 |
//! | 21    | double pawn push                                  |
//!
//! Constructors do not look at any board, so a `Move` may describe an illegal
//! transition. Bit 15 is unused.

use std::fmt::{self, Display, Formatter};

use log::trace;

use crate::board::Board;
use crate::error::{ParseError, ParseResult};
use crate::piece::PieceKind;
use crate::square::Square;

const FROM_MASK: u32 = 0x3f;
const TO_SHIFT: u32 = 6;
const PROMO_SHIFT: u32 = 12;
const PROMO_MASK: u32 = 0b111 << PROMO_SHIFT;

const FLAG_PROMOTION: u32 = 1 << 16;
const FLAG_CAPTURE: u32 = 1 << 17;
const FLAG_EN_PASSANT: u32 = 1 << 18;
const FLAG_CASTLE_KING: u32 = 1 << 19;
const FLAG_CASTLE_QUEEN: u32 = 1 << 20;
const FLAG_DOUBLE_PUSH: u32 = 1 << 21;

/// Piece a pawn promotes to. Discriminants are the packed promotion type.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Promotion {
  Knight = 1,
  Bishop = 2,
  Rook = 3,
  Queen = 4,
}

impl Promotion {
  pub fn from_type(t: u8) -> Option<Promotion> {
    match t {
      1 => Some(Promotion::Knight),
      2 => Some(Promotion::Bishop),
      3 => Some(Promotion::Rook),
      4 => Some(Promotion::Queen),
      _ => None,
    }
  }

  pub fn piece_kind(self) -> PieceKind {
    match self {
      Promotion::Knight => PieceKind::Knight,
      Promotion::Bishop => PieceKind::Bishop,
      Promotion::Rook => PieceKind::Rook,
      Promotion::Queen => PieceKind::Queen,
    }
  }

  /// Lowercase UCI suffix letter.
  pub fn to_char(self) -> char {
    match self {
      Promotion::Knight => 'n',
      Promotion::Bishop => 'b',
      Promotion::Rook => 'r',
      Promotion::Queen => 'q',
    }
  }

  pub fn from_char(c: char) -> ParseResult<Promotion> {
    match c {
      'n' => Ok(Promotion::Knight),
      'b' => Ok(Promotion::Bishop),
      'r' => Ok(Promotion::Rook),
      'q' => Ok(Promotion::Queen),
      _ => Err(ParseError::InvalidPromotion(c)),
    }
  }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Move(u32);

impl Move {
  /// Quiet move.
  pub fn new(from: Square, to: Square) -> Move {
    debug_assert!(!from.is_none() && !to.is_none(), "move with the no-square sentinel");
    Move(from.index() as u32 | (to.index() as u32) << TO_SHIFT)
  }

  pub fn capture(from: Square, to: Square) -> Move {
    Move(Move::new(from, to).0 | FLAG_CAPTURE)
  }

  /// Quiet promotion.
  pub fn promotion(from: Square, to: Square, promo: Promotion) -> Move {
    Move(Move::new(from, to).0 | (promo as u32) << PROMO_SHIFT | FLAG_PROMOTION)
  }

  pub fn promotion_capture(from: Square, to: Square, promo: Promotion) -> Move {
    Move(Move::promotion(from, to, promo).0 | FLAG_CAPTURE)
  }

  /// En passant; `to` is the square passed over, not the captured pawn's square.
  pub fn en_passant(from: Square, to: Square) -> Move {
    Move(Move::new(from, to).0 | FLAG_CAPTURE | FLAG_EN_PASSANT)
  }

  /// King-side castle, encoded as the king's move.
  pub fn castle_king_side(from: Square, to: Square) -> Move {
    Move(Move::new(from, to).0 | FLAG_CASTLE_KING)
  }

  /// Queen-side castle, encoded as the king's move.
  pub fn castle_queen_side(from: Square, to: Square) -> Move {
    Move(Move::new(from, to).0 | FLAG_CASTLE_QUEEN)
  }

  pub fn double_pawn_push(from: Square, to: Square) -> Move {
    Move(Move::new(from, to).0 | FLAG_DOUBLE_PUSH)
  }

  /// Raw packed value.
  pub fn raw(self) -> u32 {
    self.0
  }

  pub fn from(self) -> Square {
    Square::from_bits(self.0 & FROM_MASK)
  }

  pub fn to(self) -> Square {
    Square::from_bits(self.0 >> TO_SHIFT)
  }

  /// Packed promotion type (1=N, 2=B, 3=R, 4=Q), or 0 when not a promotion.
  pub fn promotion_type(self) -> u8 {
    if !self.is_promotion() {
      return 0;
    }
    ((self.0 & PROMO_MASK) >> PROMO_SHIFT) as u8
  }

  pub fn promoted(self) -> Option<Promotion> {
    Promotion::from_type(self.promotion_type())
  }

  pub fn is_promotion(self) -> bool {
    self.0 & FLAG_PROMOTION != 0
  }

  pub fn is_capture(self) -> bool {
    self.0 & FLAG_CAPTURE != 0
  }

  pub fn is_en_passant(self) -> bool {
    self.0 & FLAG_EN_PASSANT != 0
  }

  pub fn is_castle_king_side(self) -> bool {
    self.0 & FLAG_CASTLE_KING != 0
  }

  pub fn is_castle_queen_side(self) -> bool {
    self.0 & FLAG_CASTLE_QUEEN != 0
  }

  /// Either castle flag.
  pub fn is_castle(self) -> bool {
    self.0 & (FLAG_CASTLE_KING | FLAG_CASTLE_QUEEN) != 0
  }

  pub fn is_double_pawn_push(self) -> bool {
    self.0 & FLAG_DOUBLE_PUSH != 0
  }

  /// Parse UCI text (`e2e4`, `e7e8q`) and recover the flag bits from `board`,
  /// the position the move is about to be played in.
  ///
  /// Flags are inferred from what stands on the squares, not from legality:
  /// a king stepping two files is a castle, a pawn moving diagonally onto the
  /// en passant square is en passant, a pawn moving two ranks is a double push,
  /// and an occupied destination is a capture.
  pub fn from_uci(text: &str, board: &Board) -> ParseResult<Move> {
    let (from, to, promo) = split_uci(text)
      .inspect_err(|e| trace!("rejecting UCI move {:?}: {}", text, e))?;

    let occupied = board.all_occupancy().test(to);
    let mover = board.piece_at(from).map(|p| p.kind());

    let mv = match (promo, mover) {
      (Some(p), _) if occupied => Move::promotion_capture(from, to, p),
      (Some(p), _) => Move::promotion(from, to, p),
      (None, Some(PieceKind::King)) if from.rank() == to.rank() && from.file_distance(to) == 2 => {
        if to.file() > from.file() {
          Move::castle_king_side(from, to)
        } else {
          Move::castle_queen_side(from, to)
        }
      }
      (None, Some(PieceKind::Pawn)) if !occupied && board.en_passant == Some(to) && from.file() != to.file() => {
        Move::en_passant(from, to)
      }
      (None, Some(PieceKind::Pawn)) if from.rank().abs_diff(to.rank()) == 2 && from.file() == to.file() => {
        Move::double_pawn_push(from, to)
      }
      _ if occupied => Move::capture(from, to),
      _ => Move::new(from, to),
    };
    Ok(mv)
  }
}

fn split_uci(text: &str) -> ParseResult<(Square, Square, Option<Promotion>)> {
  if text.len() != 4 && text.len() != 5 {
    return Err(ParseError::InvalidLength(text.to_string()));
  }
  let square_at = |range: std::ops::Range<usize>| -> ParseResult<Square> {
    text
      .get(range)
      .ok_or_else(|| ParseError::InvalidSquare(text.to_string()))?
      .parse()
  };
  let from = square_at(0..2)?;
  let to = square_at(2..4)?;
  let promo = match text.get(4..).and_then(|s| s.chars().next()) {
    Some(c) => Some(Promotion::from_char(c)?),
    None => None,
  };
  Ok((from, to, promo))
}

// UCI long algebraic: origin, destination, optional promotion letter.
impl Display for Move {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}{}", self.from(), self.to())?;
    if let Some(p) = self.promoted() {
      write!(f, "{}", p.to_char())?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn uci_text() {
        assert_eq!(Move::promotion_capture(Square::E7, Square::E8, Promotion::Queen).to_string(), "e7e8q");
        assert_eq!(Move::new(Square::E2, Square::E4).to_string(), "e2e4");
        assert_eq!(Move::promotion(Square::A2, Square::A1, Promotion::Knight).to_string(), "a2a1n");
        assert_eq!(Move::castle_king_side(Square::E1, Square::G1).to_string(), "e1g1");
        assert_eq!(Move::en_passant(Square::E5, Square::D6).to_string(), "e5d6");
    }

    #[test]
    fn degenerate_same_square() {
        let mv = Move::new(Square::A1, Square::A1);
        assert_eq!(mv.from(), Square::A1);
        assert_eq!(mv.to(), Square::A1);
        assert_eq!(mv.raw(), 0);
        assert_eq!(mv.to_string(), "a1a1");
    }

    #[test]
    fn fields_land_in_their_bits() {
        let mv = Move::promotion_capture(Square::B7, Square::A8, Promotion::Rook);
        assert_eq!(mv.raw() & 0x3f, 49);
        assert_eq!((mv.raw() >> 6) & 0x3f, 56);
        assert_eq!((mv.raw() >> 12) & 0b111, 3);
        assert_eq!(mv.raw() & (1 << 15), 0);
        assert_eq!(mv.raw() >> 16, 0b11);
        assert_eq!(Move::double_pawn_push(Square::H7, Square::H5).raw() >> 16, 0b10_0000);
    }

    #[test]
    fn promotion_type_zero_unless_promotion() {
        let non_promotions = [
            Move::new(Square::E2, Square::E4),
            Move::capture(Square::D4, Square::E5),
            Move::en_passant(Square::E5, Square::D6),
            Move::castle_king_side(Square::E1, Square::G1),
            Move::castle_queen_side(Square::E8, Square::C8),
            Move::double_pawn_push(Square::E2, Square::E4),
        ];
        for mv in non_promotions {
            assert_eq!(mv.promotion_type(), 0, "{}", mv);
            assert_eq!(mv.promoted(), None);
            assert!(!mv.is_promotion());
        }
        for (p, t) in [(Promotion::Knight, 1), (Promotion::Bishop, 2), (Promotion::Rook, 3), (Promotion::Queen, 4)] {
            assert_eq!(Move::promotion(Square::G7, Square::G8, p).promotion_type(), t);
        }
    }

    #[test]
    fn flag_predicates() {
        let ep = Move::en_passant(Square::D4, Square::E3);
        assert!(ep.is_en_passant() && ep.is_capture());
        assert!(!ep.is_castle() && !ep.is_promotion() && !ep.is_double_pawn_push());

        let ks = Move::castle_king_side(Square::E8, Square::G8);
        assert!(ks.is_castle() && ks.is_castle_king_side() && !ks.is_castle_queen_side());
        assert!(!ks.is_capture());

        let qs = Move::castle_queen_side(Square::E1, Square::C1);
        assert!(qs.is_castle() && qs.is_castle_queen_side() && !qs.is_castle_king_side());

        let pc = Move::promotion_capture(Square::E7, Square::D8, Promotion::Queen);
        assert!(pc.is_promotion() && pc.is_capture() && !pc.is_en_passant());
        assert_eq!(pc.promoted(), Some(Promotion::Queen));
        assert_eq!(pc.promoted().map(Promotion::piece_kind), Some(PieceKind::Queen));

        let quiet = Move::new(Square::G1, Square::F3);
        assert!(!quiet.is_capture() && !quiet.is_castle() && !quiet.is_double_pawn_push());
    }

    #[test]
    fn from_uci_quiet_and_double_push() {
        let board = Board::new();
        assert_eq!(Move::from_uci("g1f3", &board), Ok(Move::new(Square::G1, Square::F3)));
        assert_eq!(Move::from_uci("e2e4", &board), Ok(Move::double_pawn_push(Square::E2, Square::E4)));
        assert_eq!(Move::from_uci("e2e3", &board), Ok(Move::new(Square::E2, Square::E3)));
    }

    #[test]
    fn from_uci_capture_castle_en_passant() {
        let mut board = Board::empty();
        board.add_piece(Piece::WhiteKing, Square::E1);
        board.add_piece(Piece::WhiteRook, Square::H1);
        board.add_piece(Piece::WhitePawn, Square::E5);
        board.add_piece(Piece::BlackPawn, Square::D5);
        board.add_piece(Piece::BlackKnight, Square::F6);
        board.en_passant = Some(Square::D6);

        assert_eq!(Move::from_uci("e1g1", &board), Ok(Move::castle_king_side(Square::E1, Square::G1)));
        assert_eq!(Move::from_uci("e1c1", &board), Ok(Move::castle_queen_side(Square::E1, Square::C1)));
        assert_eq!(Move::from_uci("e5d6", &board), Ok(Move::en_passant(Square::E5, Square::D6)));
        assert_eq!(Move::from_uci("e5f6", &board), Ok(Move::capture(Square::E5, Square::F6)));
        assert_eq!(Move::from_uci("h1h8", &board), Ok(Move::new(Square::H1, Square::H8)));
    }

    #[test]
    fn from_uci_promotions() {
        let mut board = Board::empty();
        board.add_piece(Piece::WhitePawn, Square::E7);
        board.add_piece(Piece::BlackRook, Square::D8);
        assert_eq!(
            Move::from_uci("e7e8q", &board),
            Ok(Move::promotion(Square::E7, Square::E8, Promotion::Queen))
        );
        assert_eq!(
            Move::from_uci("e7d8n", &board),
            Ok(Move::promotion_capture(Square::E7, Square::D8, Promotion::Knight))
        );
    }

    #[test]
    fn from_uci_rejects_bad_text() {
        let board = Board::new();
        assert_eq!(Move::from_uci("e2", &board), Err(ParseError::InvalidLength("e2".to_string())));
        assert_eq!(Move::from_uci("e2e4qq", &board), Err(ParseError::InvalidLength("e2e4qq".to_string())));
        assert_eq!(Move::from_uci("z2e4", &board), Err(ParseError::InvalidSquare("z2".to_string())));
        assert_eq!(Move::from_uci("e7e8k", &board), Err(ParseError::InvalidPromotion('k')));
    }

    #[test]
    fn uci_roundtrip_through_text() {
        let board = Board::new();
        for text in ["b1c3", "d2d4", "h2h3"] {
            assert_eq!(Move::from_uci(text, &board).unwrap().to_string(), text);
        }
    }
}
