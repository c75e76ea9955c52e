use crate::game_repr::{MoveList, PieceRecord, Position};

use super::ORTHOGONAL;

impl Position {
    /// Generate rook moves into a provided buffer
    pub fn rook_moves_into(&self, rook: &PieceRecord, moves: &mut MoveList) {
        self.slide_moves_into(rook, &ORTHOGONAL, moves);
    }
}
