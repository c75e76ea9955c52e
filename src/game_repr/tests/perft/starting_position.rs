use super::*;

#[test]
fn test_perft_starting_position_depth_1() {
    let mut pos = Position::default();
    assert_eq!(pos.perft(1), 20);
}

#[test]
fn test_perft_starting_position_depth_2() {
    let mut pos = Position::default();
    assert_eq!(pos.perft(2), 400);
}

#[test]
fn test_perft_starting_position_depth_3() {
    let mut pos = Position::default();
    assert_eq!(pos.perft(3), 8902);
}

#[test]
fn test_perft_starting_position_depth_4() {
    let mut pos = Position::default();
    assert_eq!(pos.perft(4), 197281);
}

#[test]
fn test_reply_count_after_e4() {
    let mut pos = Position::default();
    play(&mut pos, &["e2e4"]);
    assert_eq!(pos.moves(Color::Black, true).len(), 20);
}

#[test]
fn test_divide_sums_to_perft() {
    let mut pos = Position::default();
    let split = pos.divide(2);

    assert_eq!(split.len(), 20);
    assert!(split.iter().all(|(_, n)| *n == 20));
    assert_eq!(split.iter().map(|(_, n)| n).sum::<u64>(), 400);
}
