use super::*;

// ==================== KNIGHT / SLIDER MOVEMENT TESTS ====================

#[test]
fn test_knight_center_moves() {
    let mut pos = board("4k3/8/8/8/3N4/8/8/4K3 w - - 0 1");
    assert_eq!(moves_from(&mut pos, "d4").len(), 8);
}

#[test]
fn test_knight_corner_moves() {
    let mut pos = board("4k3/8/8/8/8/8/8/N3K3 w - - 0 1");
    let moves = moves_from(&mut pos, "a1");

    assert_eq!(moves.len(), 2);
    assert!(has_move(&moves, "a1", "b3"));
    assert!(has_move(&moves, "a1", "c2"));
}

#[test]
fn test_rook_open_board() {
    let mut pos = board("4k3/8/8/8/3R4/8/8/4K3 w - - 0 1");
    assert_eq!(moves_from(&mut pos, "d4").len(), 14);
}

#[test]
fn test_bishop_open_board() {
    let mut pos = board("4k3/8/8/8/3B4/8/8/4K3 w - - 0 1");
    assert_eq!(moves_from(&mut pos, "d4").len(), 13);
}

#[test]
fn test_queen_open_board() {
    let mut pos = board("4k3/8/8/8/3Q4/8/8/4K3 w - - 0 1");
    assert_eq!(moves_from(&mut pos, "d4").len(), 27);
}

#[test]
fn test_slider_stops_at_first_piece() {
    let mut pos = board("4k3/8/8/3p4/8/8/3R4/4K3 w - - 0 1");
    let moves = moves_from(&mut pos, "d2");

    assert_eq!(moves.len(), 11);
    assert!(has_move(&moves, "d2", "d5"));
    assert!(!has_move(&moves, "d2", "d6"));

    let capture = moves.iter().find(|m| m.to == sq("d5")).unwrap();
    assert_eq!(capture.captured, Some(Type::Pawn));
}

#[test]
fn test_own_pieces_block_without_capture() {
    let mut pos = Position::default();
    // Only the knights can leave the back rank
    let back_rank: Vec<_> = pos
        .moves(Color::White, true)
        .into_iter()
        .filter(|m| m.from.rank() == 1)
        .collect();

    assert_eq!(back_rank.len(), 4);
    assert!(back_rank.iter().all(|m| !m.is_capture()));
}
