use crate::game_repr::{Move, MoveList, PieceRecord, Position, Type};

use super::KING_STEPS;

impl Position {
    pub fn king_moves_into(&self, king: &PieceRecord, moves: &mut MoveList) {
        self.step_moves_into(king, &KING_STEPS, moves);
    }

    /// Castling for an unmoved king on its home square. The landing square
    /// is left to the legality filter; here only the king's current square
    /// and the square it crosses are checked against enemy attacks.
    pub fn castling_moves_into(&self, king: &PieceRecord, moves: &mut MoveList) {
        let color = king.color;
        if king.has_moved || king.square.file() != 5 || king.square.rank() != color.back_rank() {
            return;
        }

        // Can't castle out of check
        if self.is_square_attacked(king.square, color.opposite()) {
            return;
        }

        // Kingside, then queenside
        for dir in [1, -1] {
            if !self.castling_path_clear(king, dir) {
                continue;
            }
            if let Some(to) = king.square.offset(2 * dir, 0) {
                moves.push(Move::castle(king.square, to));
            }
        }
    }

    /// Walk outward from the king: the first piece met must be an unmoved
    /// rook of the same color in the corner, and the square next to the
    /// king must not be attacked
    fn castling_path_clear(&self, king: &PieceRecord, dir: i32) -> bool {
        let enemy = king.color.opposite();
        let mut cur = king.square.offset(dir, 0);
        let mut step = 1;

        while let Some(sq) = cur {
            if let Some(piece) = self.piece_at(sq) {
                let in_corner = sq.file() == 1 || sq.file() == 8;
                return piece.is(king.color, Type::Rook) && !piece.has_moved && in_corner;
            }
            if step == 1 && self.is_square_attacked(sq, enemy) {
                return false;
            }
            cur = sq.offset(dir, 0);
            step += 1;
        }

        false
    }
}
