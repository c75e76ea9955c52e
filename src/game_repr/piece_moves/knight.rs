use crate::game_repr::{MoveList, PieceRecord, Position};

use super::KNIGHT_JUMPS;

impl Position {
    pub fn knight_moves_into(&self, knight: &PieceRecord, moves: &mut MoveList) {
        self.step_moves_into(knight, &KNIGHT_JUMPS, moves);
    }
}
