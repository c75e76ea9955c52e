use crate::game_repr::{MoveList, PieceRecord, Position};

use super::DIAGONAL;

impl Position {
    /// Generate bishop moves into a provided buffer
    pub fn bishop_moves_into(&self, bishop: &PieceRecord, moves: &mut MoveList) {
        self.slide_moves_into(bishop, &DIAGONAL, moves);
    }
}
