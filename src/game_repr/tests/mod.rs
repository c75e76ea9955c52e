use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Load a test position, panicking with the FEN on failure
pub fn board(fen: &str) -> Position {
    Position::from_fen(fen).unwrap_or_else(|e| panic!("bad test FEN '{}': {}", fen, e))
}

pub fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &[Move], from: &str, to: &str) -> bool {
    moves.iter().any(|m| m.from == sq(from) && m.to == sq(to))
}

/// Helper function to count moves of a specific kind
pub fn count_special(moves: &[Move], special: SpecialMove) -> usize {
    moves.iter().filter(|m| m.special == special).count()
}

/// Legal moves of the side to move that start on `from`
pub fn moves_from(pos: &mut Position, from: &str) -> Vec<Move> {
    let side = pos.side_to_move();
    pos.moves(side, true)
        .into_iter()
        .filter(|m| m.from == sq(from))
        .collect()
}

/// Parse long algebraic ("e2e4", "a7a8n") into a `ChosenMove`
pub fn chosen(uci: &str) -> ChosenMove {
    let promotion = uci
        .chars()
        .nth(4)
        .and_then(Type::from_char)
        .unwrap_or(Type::Queen);
    ChosenMove {
        from: sq(&uci[0..2]),
        to: sq(&uci[2..4]),
        promotion,
    }
}

/// Play a sequence of moves permanently
pub fn play(pos: &mut Position, line: &[&str]) {
    for uci in line {
        pos.play_move(chosen(uci))
            .unwrap_or_else(|e| panic!("{} should be legal: {}", uci, e));
    }
}

// ==================== TEST MODULES ====================

mod piece_movement;
mod en_passant;
mod castling;
mod fen_parsing;
mod perft;
