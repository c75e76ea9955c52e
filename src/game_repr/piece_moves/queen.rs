use crate::game_repr::{MoveList, PieceRecord, Position};

impl Position {
    /// Generate queen moves into a provided buffer
    pub fn queen_moves_into(&self, queen: &PieceRecord, moves: &mut MoveList) {
        self.bishop_moves_into(queen, moves);
        self.rook_moves_into(queen, moves);
    }
}
