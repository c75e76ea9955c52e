use crate::game_repr::{ChosenMove, Color, Move, Position, Square, Type};

// ==================== HELPER FUNCTIONS ====================

pub fn board(fen: &str) -> Position {
    Position::from_fen(fen).unwrap_or_else(|e| panic!("bad test FEN '{}': {}", fen, e))
}

pub fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

/// Long algebraic ("e2e4", "a7a8n") to a `ChosenMove`
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

/// The legal move of `side` matching `uci`
pub fn legal(pos: &mut Position, side: Color, uci: &str) -> Move {
    pos.find_move(side, chosen(uci))
        .unwrap_or_else(|e| panic!("{} should be legal: {}", uci, e))
}

// ==================== TEST MODULES ====================
