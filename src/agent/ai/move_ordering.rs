// Move ordering with the history heuristic
//
// A move that produced a cutoff (or was best) somewhere in the tree is
// likely to be good elsewhere too. The table remembers that per side and
// (from, to) pair; it lives for one turn and is passed explicitly to every
// node that sorts moves.

use crate::game_repr::{Color, Move, MoveList, Type};
use super::evaluation::piece_value;

/// Per-side 64x64 table of (from, to) scores
#[derive(Clone)]
pub struct HistoryTable {
    scores: Box<[[[u32; 64]; 64]; 2]>,
}

impl Default for HistoryTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HistoryTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.scores.iter().flatten().flatten().filter(|s| **s > 0).count();
        f.debug_struct("HistoryTable").field("entries", &used).finish()
    }
}

impl HistoryTable {
    pub fn new() -> Self {
        Self {
            scores: Box::new([[[0; 64]; 64]; 2]),
        }
    }

    /// Forget everything; called at the start of each turn
    pub fn clear(&mut self) {
        for side in self.scores.iter_mut() {
            for row in side.iter_mut() {
                row.fill(0);
            }
        }
    }

    #[inline]
    pub fn score(&self, side: Color, mv: &Move) -> u32 {
        self.scores[side.index()][mv.from.index()][mv.to.index()]
    }

    /// Credit `mv` for a cutoff or best move found `depth` plies from the leaves
    pub fn reward(&mut self, side: Color, mv: &Move, depth: i32) {
        let depth = depth.max(0) as u32;
        let entry = &mut self.scores[side.index()][mv.from.index()][mv.to.index()];
        *entry = entry.saturating_add(depth * depth + 1);
    }
}

/// Value of what a move wins: the captured piece, plus the promotion gain
#[inline]
fn gain(mv: &Move) -> i32 {
    let captured = mv.captured.map_or(0, piece_value);
    if mv.is_promotion() {
        captured + piece_value(mv.promotion) - piece_value(Type::Pawn)
    } else {
        captured
    }
}

/// Sort descending by history score; ties go to the bigger capture, then
/// keep generation order. `first`, if present in the list, is moved to the
/// front regardless of its score.
pub fn order_moves(moves: &mut MoveList, side: Color, history: &HistoryTable, first: Option<Move>) {
    moves.sort_by(|a, b| {
        history
            .score(side, b)
            .cmp(&history.score(side, a))
            .then_with(|| b.captured.map_or(0, piece_value).cmp(&a.captured.map_or(0, piece_value)))
    });

    if let Some(first) = first {
        if let Some(pos) = moves.iter().position(|m| *m == first) {
            moves[..=pos].rotate_right(1);
        }
    }
}

/// Most valuable victim first, for quiescence
pub fn order_tactical(moves: &mut MoveList) {
    moves.sort_by(|a, b| gain(b).cmp(&gain(a)));
}
