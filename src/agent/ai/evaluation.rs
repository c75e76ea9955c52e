// Position evaluation
// Returns score in centipawns (positive = good for the side asked about)
//
// The search never scores pieces itself; it asks a `Heuristic` for each
// piece and sums the results. `MaterialHeuristic` is the engine's own
// scoring, `MaterialOnly` exists to swap in when positional terms get in
// the way (tests, comparisons).

use crate::game_repr::{Color, PieceRecord, Position, Type};
use super::piece_square_tables::get_pst_value;

// Material values in centipawns
pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 320;
pub const BISHOP_VALUE: i32 = 330;
pub const ROOK_VALUE: i32 = 550;
pub const QUEEN_VALUE: i32 = 900;
pub const KING_VALUE: i32 = 0;

/// Pieces on the board at or below which the endgame tables are used
pub const ENDGAME_PIECE_THRESHOLD: u32 = 16;

/// Bonus for a pawn with a friendly piece on one of its forward diagonals
pub const PAWN_PROTECTION_BONUS: i32 = 5;

/// Get material value for a piece type
#[inline]
pub fn piece_value(piece_type: Type) -> i32 {
    match piece_type {
        Type::Pawn => PAWN_VALUE,
        Type::Knight => KNIGHT_VALUE,
        Type::Bishop => BISHOP_VALUE,
        Type::Rook => ROOK_VALUE,
        Type::Queen => QUEEN_VALUE,
        Type::King => KING_VALUE,
    }
}

/// Per-piece scoring strategy injected into the search
pub trait Heuristic: Send + Sync {
    /// Value of `piece` to its owner in the current position
    fn piece_score(&self, board: &Position, piece: &PieceRecord) -> i32;
}

/// Material + piece-square tables + pawn protection
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialHeuristic;

impl Heuristic for MaterialHeuristic {
    fn piece_score(&self, board: &Position, piece: &PieceRecord) -> i32 {
        let mut score = piece_value(piece.piece_type)
            + get_pst_value(piece.piece_type, piece.color, piece.square, board.is_endgame());

        if piece.piece_type == Type::Pawn && protects_friend(board, piece) {
            score += PAWN_PROTECTION_BONUS;
        }

        score
    }
}

/// Bare material count
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialOnly;

impl Heuristic for MaterialOnly {
    fn piece_score(&self, _board: &Position, piece: &PieceRecord) -> i32 {
        piece_value(piece.piece_type)
    }
}

fn protects_friend(board: &Position, pawn: &PieceRecord) -> bool {
    let forward = pawn.color.forward();
    [-1, 1].iter().any(|&df| {
        pawn.square
            .offset(df, forward)
            .map_or(false, |sq| board.is_owned_by(sq, pawn.color))
    })
}

impl Position {
    #[inline]
    pub fn is_endgame(&self) -> bool {
        self.total_pieces() <= ENDGAME_PIECE_THRESHOLD
    }

    /// Sum of `heuristic` over `side`'s pieces minus the opponent's
    pub fn worth(&self, side: Color, heuristic: &dyn Heuristic) -> i32 {
        self.pieces()
            .map(|piece| {
                let score = heuristic.piece_score(self, piece);
                if piece.color == side {
                    score
                } else {
                    -score
                }
            })
            .sum()
    }
}

/// Static evaluation with the engine's default heuristic
pub fn evaluate(pos: &Position, color: Color) -> i32 {
    pos.worth(color, &MaterialHeuristic)
}
