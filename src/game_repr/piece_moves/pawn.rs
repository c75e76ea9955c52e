use crate::game_repr::{Move, MoveList, PieceRecord, Position, Square, Type};

impl Position {
    /// Pushes, double pushes, diagonal captures, en passant and promotions
    pub fn pawn_moves_into(&self, pawn: &PieceRecord, moves: &mut MoveList) {
        let color = pawn.color;
        let forward = color.forward();
        let from = pawn.square;

        if let Some(one) = from.offset(0, forward) {
            if self.is_empty(one) {
                push_pawn_move(pawn, one, None, moves);

                let on_start_rank = from.rank() == color.back_rank() + forward;
                if !pawn.has_moved && on_start_rank {
                    if let Some(two) = from.offset(0, 2 * forward) {
                        if self.is_empty(two) {
                            moves.push(Move::new(from, two, None));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(to) = from.offset(df, forward) else {
                continue;
            };
            if let Some(target) = self.piece_at(to) {
                if target.color != color {
                    push_pawn_move(pawn, to, Some(target.piece_type), moves);
                }
            }
        }

        if let Some(to) = self.en_passant_target(pawn) {
            moves.push(Move::en_passant(from, to));
        }
    }

    /// Landing square for an en passant capture by `pawn`, if the last move
    /// was an enemy double push that ended right beside it
    fn en_passant_target(&self, pawn: &PieceRecord) -> Option<Square> {
        let color = pawn.color;
        let forward = color.forward();
        // Fifth rank from the pawn's own side
        if pawn.square.rank() != color.promotion_rank() - 3 * forward {
            return None;
        }

        let last = self.last_move()?;
        let pushed = self.piece_at(last.to)?;
        let double_push = pushed.is(color.opposite(), Type::Pawn)
            && (last.to.rank() - last.from.rank()).abs() == 2
            && last.from.file() == last.to.file();
        let adjacent = last.to.rank() == pawn.square.rank()
            && (last.to.file() - pawn.square.file()).abs() == 1;

        if !double_push || !adjacent {
            return None;
        }
        Square::new(last.to.file(), pawn.square.rank() + forward).filter(|sq| self.is_empty(*sq))
    }
}

/// Reaching the last rank fans out into one move per promotion piece
fn push_pawn_move(pawn: &PieceRecord, to: Square, captured: Option<Type>, moves: &mut MoveList) {
    if to.rank() == pawn.color.promotion_rank() {
        for promotion in Type::PROMOTIONS {
            moves.push(Move::promotion(pawn.square, to, captured, promotion));
        }
    } else {
        moves.push(Move::new(pawn.square, to, captured));
    }
}
