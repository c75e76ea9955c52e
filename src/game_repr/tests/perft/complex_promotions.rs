use super::*;

// ==================== PROMOTION-HEAVY PERFT TESTS ====================
// Position 4: r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1
// Position 5: rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8

const POSITION_4: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";
const POSITION_5: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

#[test]
fn test_perft_position_4_depth_1() {
    let mut pos = board(POSITION_4);
    assert_eq!(pos.perft(1), 6);
}

#[test]
fn test_perft_position_4_depth_2() {
    let mut pos = board(POSITION_4);
    assert_eq!(pos.perft(2), 264);
}

#[test]
fn test_perft_position_4_depth_3() {
    let mut pos = board(POSITION_4);
    assert_eq!(pos.perft(3), 9467);
}

#[test]
fn test_perft_position_5_depth_1() {
    let mut pos = board(POSITION_5);
    assert_eq!(pos.perft(1), 44);
}

#[test]
fn test_perft_position_5_depth_2() {
    let mut pos = board(POSITION_5);
    assert_eq!(pos.perft(2), 1486);
}

#[test]
fn test_perft_position_5_depth_3() {
    let mut pos = board(POSITION_5);
    assert_eq!(pos.perft(3), 62379);
}
