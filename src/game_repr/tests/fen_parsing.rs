// FEN Parsing Tests
//
// FEN is only a convenience loader here; sessions hand over snapshots.

use super::*;
use crate::error::EngineError;

// ==================== FEN PARSING TESTS ====================

#[test]
fn test_default_position_from_fen() {
    let pos = Position::default();

    let a1 = pos.piece_at(sq("a1")).unwrap();
    assert!(a1.is(Color::White, Type::Rook));
    assert!(!a1.has_moved);

    assert_eq!(pos.king_square(Color::White), sq("e1"));
    assert_eq!(pos.king_square(Color::Black), sq("e8"));
    assert_eq!(pos.total_pieces(), 32);
    assert_eq!(pos.side_to_move(), Color::White);

    for file in 1..=8 {
        let pawn = pos.piece_at(Square::new(file, 7).unwrap()).unwrap();
        assert!(pawn.is(Color::Black, Type::Pawn));
    }
}

#[test]
fn test_piece_ids_are_unique() {
    let pos = Position::default();
    let mut ids: Vec<_> = pos.pieces().map(|p| p.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 32);
}

#[test]
fn test_to_fen_round_trip() {
    let fens = [
        START_FEN,
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1",
        "r3k2r/8/8/8/8/8/8/R3K2R b Kq - 7 1",
    ];
    for fen in fens {
        assert_eq!(board(fen).to_fen(), fen);
    }
}

#[test]
fn test_to_fen_after_moves() {
    let mut pos = Position::default();
    play(&mut pos, &["e2e4"]);
    assert_eq!(
        pos.to_fen(),
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    );
}

#[test]
fn test_castling_field_sets_moved_flags() {
    let pos = board("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1");

    assert!(!pos.piece_at(sq("h1")).unwrap().has_moved);
    assert!(pos.piece_at(sq("a1")).unwrap().has_moved);
    assert!(!pos.piece_at(sq("e1")).unwrap().has_moved);
    assert!(pos.piece_at(sq("h8")).unwrap().has_moved);
    assert!(!pos.piece_at(sq("a8")).unwrap().has_moved);
}

#[test]
fn test_malformed_fen_rejected() {
    let bad = [
        "",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",
        "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w KQkq - 0 1",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e3 0 1",
    ];
    for fen in bad {
        assert!(
            matches!(Position::from_fen(fen), Err(EngineError::InvalidFen(_))),
            "'{}' should be rejected",
            fen
        );
    }
}

#[test]
fn test_king_count_checked() {
    assert_eq!(
        Position::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1"),
        Err(EngineError::KingCount {
            color: Color::Black,
            count: 0
        })
    );
    assert_eq!(
        Position::from_fen("4k3/8/8/8/8/8/8/3KK3 w - - 0 1"),
        Err(EngineError::KingCount {
            color: Color::White,
            count: 2
        })
    );
}

#[test]
fn test_side_not_to_move_cannot_be_in_check() {
    assert_eq!(
        Position::from_fen("4k3/8/8/8/8/8/8/4R1K1 w - - 0 1"),
        Err(EngineError::OpponentInCheck(Color::Black))
    );
}
