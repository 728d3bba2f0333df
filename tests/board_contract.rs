//! Drives the board the way a move generator / applier would: read the tables and
//! occupancies, then write back only through add_piece / remove_piece.

use std::thread;

use bitchess_core::{
    attack_tables, pop_lowest_set_bit, Bitboard, Board, CastlingRights, Color, Move, Piece, Square,
};

/// Apply `mv` with the two mutation primitives and update the state fields.
fn apply(board: &mut Board, mv: Move) {
    let mover = board.piece_at(mv.from()).expect("mover present");
    if mv.is_en_passant() {
        let victim_sq = match mover.color() {
            Color::White => mv.to().offset(-8),
            Color::Black => mv.to().offset(8),
        }
        .expect("victim square on board");
        let victim = board.piece_at(victim_sq).expect("victim present");
        board.remove_piece(victim, victim_sq);
    } else if mv.is_capture() {
        let victim = board.piece_at(mv.to()).expect("victim present");
        board.remove_piece(victim, mv.to());
    }
    board.remove_piece(mover, mv.from());
    board.add_piece(mover, mv.to());

    board.en_passant = if mv.is_double_pawn_push() {
        Square::from_index((mv.from().index() + mv.to().index()) / 2)
    } else {
        None
    };
    if board.side_to_move == Color::Black {
        board.fullmove_number += 1;
    }
    board.side_to_move = board.side_to_move.opposite();
}

#[test]
fn knight_targets_from_starting_position() {
    let board = Board::new();
    let tables = attack_tables();
    let own = board.occupancy(Color::White);

    let mut knights = board.pieces(Piece::WhiteKnight);
    let mut moves = Vec::new();
    loop {
        let (from, rest) = pop_lowest_set_bit(knights);
        if from == Square::NONE {
            break;
        }
        knights = rest;
        for to in (tables.knight(from) & !own).squares() {
            moves.push(Move::new(from, to).to_string());
        }
    }
    assert_eq!(moves, vec!["b1a3", "b1c3", "g1f3", "g1h3"]);
    // the source bitboard is untouched by iteration
    assert_eq!(board.pieces(Piece::WhiteKnight).count(), 2);
}

#[test]
fn pawn_attacks_find_capture_targets() {
    let mut board = Board::empty();
    board.add_piece(Piece::WhitePawn, Square::E4);
    board.add_piece(Piece::BlackPawn, Square::D5);
    board.add_piece(Piece::BlackKnight, Square::F5);
    board.add_piece(Piece::BlackRook, Square::E5);

    let targets = attack_tables().pawn(Color::White, Square::E4) & board.occupancy(Color::Black);
    let targets: Vec<Square> = targets.squares().collect();
    assert_eq!(targets, vec![Square::D5, Square::F5]);
}

#[test]
fn applied_game_keeps_invariants() {
    let mut board = Board::new();
    for text in ["e2e4", "d7d5", "e4d5", "c7c5", "d5c6", "b8c6", "g1f3"] {
        let mv = Move::from_uci(text, &board).expect("well-formed move");
        apply(&mut board, mv);
        assert!(board.is_consistent(), "after {}", text);
        let [white, black, all] = board.occupancy;
        assert_eq!(white | black, all);
        assert!((white & black).is_empty());
    }
    assert_eq!(board.piece_at(Square::C6), Some(Piece::BlackKnight));
    assert_eq!(board.piece_at(Square::F3), Some(Piece::WhiteKnight));
    assert_eq!(board.piece_at(Square::C5), None);
    assert_eq!(board.all_occupancy().count(), 29);
    assert_eq!(board.side_to_move, Color::Black);
    assert_eq!(board.fullmove_number, 4);
    assert_eq!(board.castling, CastlingRights::ALL);
}

#[test]
fn en_passant_inferred_after_double_push() {
    let mut board = Board::new();
    for text in ["e2e4", "a7a6", "e4e5", "d7d5"] {
        let mv = Move::from_uci(text, &board).expect("well-formed move");
        apply(&mut board, mv);
    }
    assert_eq!(board.en_passant, Some(Square::D6));
    let mv = Move::from_uci("e5d6", &board).expect("well-formed move");
    assert!(mv.is_en_passant());
    assert!(mv.is_capture());
    apply(&mut board, mv);
    assert_eq!(board.piece_at(Square::D5), None);
    assert_eq!(board.piece_at(Square::D6), Some(Piece::WhitePawn));
    assert!(board.is_consistent());
}

#[test]
fn tables_are_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(|| attack_tables().king(Square::D4)))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().expect("reader thread"), attack_tables().king(Square::D4));
    }
    assert_eq!(attack_tables().king(Square::D4).count(), 8);
}

#[test]
fn independent_boards_do_not_share_state() {
    let original = Board::new();
    let mut copy = original;
    copy.remove_piece(Piece::BlackQueen, Square::D8);
    assert_eq!(original.pieces(Piece::BlackQueen), Bitboard::from_square(Square::D8));
    assert!(copy.pieces(Piece::BlackQueen).is_empty());
}
