use super::*;

// ==================== EN PASSANT TESTS ====================

#[test]
fn test_en_passant_available_after_double_push() {
    let mut pos = board("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1");
    play(&mut pos, &["d7d5"]);

    let moves = moves_from(&mut pos, "e5");
    assert_eq!(count_special(&moves, SpecialMove::EnPassant), 1);

    let ep = moves
        .iter()
        .find(|m| m.special == SpecialMove::EnPassant)
        .unwrap();
    assert_eq!(ep.to, sq("d6"));
    assert_eq!(ep.captured, Some(Type::Pawn));
}

#[test]
fn test_en_passant_vacates_captured_square() {
    let mut pos = board("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1");
    play(&mut pos, &["d7d5"]);
    let before = pos.clone();

    let ep = pos.find_move(Color::White, chosen("e5d6")).unwrap();
    assert_eq!(ep.special, SpecialMove::EnPassant);

    {
        let after = pos.apply(ep);
        assert!(after.is_empty(sq("d5")), "captured pawn must leave d5");
        assert!(after.is_empty(sq("e5")));
        assert!(after.is_owned_by(sq("d6"), Color::White));
        assert_eq!(after.piece_count(Color::Black), 1);
        assert_eq!(after.half_move_clock(), 0);
    }

    assert_eq!(pos, before);
}

#[test]
fn test_en_passant_expires_after_one_move() {
    let mut pos = board("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1");
    play(&mut pos, &["d7d5", "e1e2", "e8e7"]);

    let moves = moves_from(&mut pos, "e5");
    assert_eq!(count_special(&moves, SpecialMove::EnPassant), 0);
}

#[test]
fn test_no_en_passant_after_single_step() {
    let mut pos = board("4k3/8/3p4/4P3/8/8/8/4K3 b - - 0 1");
    play(&mut pos, &["d6d5"]);

    let moves = moves_from(&mut pos, "e5");
    assert_eq!(count_special(&moves, SpecialMove::EnPassant), 0);
}

#[test]
fn test_en_passant_square_from_fen() {
    let mut pos = board("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
    let moves = moves_from(&mut pos, "e5");
    assert!(has_move(&moves, "e5", "d6"));
}

#[test]
fn test_en_passant_for_black() {
    let mut pos = board("4k3/8/8/8/5p2/8/4P3/4K3 w - - 0 1");
    play(&mut pos, &["e2e4"]);

    let moves = moves_from(&mut pos, "f4");
    assert_eq!(count_special(&moves, SpecialMove::EnPassant), 1);
    assert!(has_move(&moves, "f4", "e3"));
}

#[test]
fn test_en_passant_cannot_expose_king_on_rank() {
    // Taking on d6 removes both pawns from the fifth rank and opens h5-a5
    let mut pos = board("8/8/8/K2pP2r/8/8/8/4k3 w - d6 0 1");

    let legal = pos.moves(Color::White, true);
    assert_eq!(count_special(&legal, SpecialMove::EnPassant), 0);

    let pseudo = pos.moves(Color::White, false);
    assert_eq!(count_special(&pseudo, SpecialMove::EnPassant), 1);
}
