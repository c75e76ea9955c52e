use super::*;

// ==================== CASTLING TESTS ====================

#[test]
fn test_both_sides_can_castle() {
    let mut pos = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let moves = moves_from(&mut pos, "e1");

    assert_eq!(count_special(&moves, SpecialMove::Castle), 2);
    assert!(has_move(&moves, "e1", "g1"));
    assert!(has_move(&moves, "e1", "c1"));
}

#[test]
fn test_black_castling() {
    let mut pos = board("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
    let moves = moves_from(&mut pos, "e8");

    assert!(has_move(&moves, "e8", "g8"));
    assert!(has_move(&moves, "e8", "c8"));
}

#[test]
fn test_kingside_castle_moves_rook() {
    let mut pos = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let before = pos.clone();
    let castle = pos.find_move(Color::White, chosen("e1g1")).unwrap();

    {
        let after = pos.apply(castle);
        assert_eq!(after.piece_at(sq("f1")).unwrap().piece_type, Type::Rook);
        assert_eq!(after.piece_at(sq("g1")).unwrap().piece_type, Type::King);
        assert!(after.is_empty(sq("h1")));
        assert!(after.is_empty(sq("e1")));
        assert_eq!(after.king_square(Color::White), sq("g1"));
    }

    assert_eq!(pos, before);
    assert!(!pos.piece_at(sq("h1")).unwrap().has_moved);
}

#[test]
fn test_queenside_castle_moves_rook() {
    let mut pos = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    play(&mut pos, &["e1c1"]);

    assert_eq!(pos.piece_at(sq("d1")).unwrap().piece_type, Type::Rook);
    assert_eq!(pos.piece_at(sq("c1")).unwrap().piece_type, Type::King);
    assert!(pos.is_empty(sq("a1")));
}

#[test]
fn test_no_castling_without_rights() {
    let mut pos = board("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1");
    let moves = pos.moves(Color::White, true);
    assert_eq!(count_special(&moves, SpecialMove::Castle), 0);
}

#[test]
fn test_castling_only_with_legality_check() {
    let mut pos = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let moves = pos.moves(Color::White, false);
    assert_eq!(count_special(&moves, SpecialMove::Castle), 0);
}

#[test]
fn test_cannot_castle_through_attacked_square() {
    // Rook on f2 covers f1
    let mut pos = board("r3k2r/8/8/8/8/8/5r2/R3K2R w KQ - 0 1");
    let moves = moves_from(&mut pos, "e1");

    assert!(!has_move(&moves, "e1", "g1"));
    assert!(has_move(&moves, "e1", "c1"));
}

#[test]
fn test_cannot_castle_into_check() {
    let mut pos = board("4k1r1/8/8/8/8/8/8/4K2R w K - 0 1");
    let moves = moves_from(&mut pos, "e1");
    assert_eq!(count_special(&moves, SpecialMove::Castle), 0);
}

#[test]
fn test_cannot_castle_out_of_check() {
    let mut pos = board("4r1k1/8/8/8/8/8/8/4K2R w K - 0 1");
    let moves = moves_from(&mut pos, "e1");
    assert_eq!(count_special(&moves, SpecialMove::Castle), 0);
}

#[test]
fn test_castling_blocked_by_piece() {
    let mut pos = board("4k3/8/8/8/8/8/8/RN2K2R w KQ - 0 1");
    let moves = moves_from(&mut pos, "e1");

    assert!(has_move(&moves, "e1", "g1"));
    assert!(!has_move(&moves, "e1", "c1"));
}

#[test]
fn test_queenside_castle_allowed_when_only_b_file_attacked() {
    // The king never crosses b1
    let mut pos = board("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
    let moves = moves_from(&mut pos, "e1");
    assert!(has_move(&moves, "e1", "c1"));
}

#[test]
fn test_pawn_guarding_transit_square_prevents_castling() {
    // Black pawn on e2 attacks f1 without having a capture there
    let mut pos = board("4k3/8/8/8/8/8/4p3/4K2R w K - 0 1");
    let moves = moves_from(&mut pos, "e1");
    assert!(!has_move(&moves, "e1", "g1"));
}

#[test]
fn test_moved_rook_loses_castling() {
    let mut pos = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    play(&mut pos, &["h1h2", "a8a7", "h2h1", "a7a8"]);

    let moves = moves_from(&mut pos, "e1");
    assert!(!has_move(&moves, "e1", "g1"));
    assert!(has_move(&moves, "e1", "c1"));
}
