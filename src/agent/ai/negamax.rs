// Negamax Search with Alpha-Beta Pruning
//
// Negamax is a variant of the minimax algorithm that simplifies implementation
// by taking advantage of the zero-sum property of chess: max(a, b) = -min(-a, -b).
// Instead of separate maximizing and minimizing functions, we use one function
// that negates the score at each level.
//
// The search is fail-soft: the returned score may lie outside the (alpha, beta)
// window, in which case it is a bound rather than an exact value.
//
// Everything a node needs besides the board travels in `SearchContext`: the
// heuristic, the history table, the node counter and the two ways a search
// can be told to stop (a shared flag and a wall-clock deadline).
//
// The function returns (score, best_move) from the perspective of the side to move.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use crate::game_repr::{Color, Move, Position};
use super::evaluation::Heuristic;
use super::move_ordering::{order_moves, HistoryTable};
use super::quiescence::quiescence;

/// Checkmate score - use large value but leave room for mate distance
pub const MATE_SCORE: i32 = 30000;

/// Larger than any reachable score
pub const INFINITY: i32 = MATE_SCORE + 1;

/// Mates are scored `MATE_SCORE - ply`; anything this close is a mate
const MATE_WINDOW: i32 = 100;

/// The deadline is read from the clock once per this many nodes
const DEADLINE_POLL_INTERVAL: u64 = 1024;

#[inline]
pub fn is_mate_score(score: i32) -> bool {
    score.abs() >= MATE_SCORE - MATE_WINDOW
}

/// Plies until mate for a mate score, `None` otherwise
pub fn mate_distance(score: i32) -> Option<i32> {
    is_mate_score(score).then(|| MATE_SCORE - score.abs())
}

/// Per-search state shared by every node
pub struct SearchContext<'a> {
    heuristic: &'a dyn Heuristic,
    history: &'a mut HistoryTable,
    stop: Option<&'a AtomicBool>,
    deadline: Option<Instant>,
    nodes: u64,
    aborted: bool,
}

impl<'a> SearchContext<'a> {
    pub fn new(heuristic: &'a dyn Heuristic, history: &'a mut HistoryTable) -> Self {
        Self {
            heuristic,
            history,
            stop: None,
            deadline: None,
            nodes: 0,
            aborted: false,
        }
    }

    /// Abort as soon as `stop` is raised
    pub fn with_stop(mut self, stop: &'a AtomicBool) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Abort once `deadline` has passed
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    #[inline]
    pub fn heuristic(&self) -> &'a dyn Heuristic {
        self.heuristic
    }

    #[inline]
    pub fn history(&self) -> &HistoryTable {
        &*self.history
    }

    #[inline]
    pub fn history_mut(&mut self) -> &mut HistoryTable {
        &mut *self.history
    }

    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    #[inline]
    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    /// Count a node and poll for cancellation. Returns true if the search
    /// must unwind.
    #[inline]
    pub(crate) fn visit(&mut self) -> bool {
        self.nodes += 1;
        if self.aborted {
            return true;
        }
        if self.stop.map_or(false, |s| s.load(Ordering::Relaxed)) {
            self.aborted = true;
        } else if self.nodes % DEADLINE_POLL_INTERVAL == 0 {
            self.check_deadline();
        }
        self.aborted
    }

    /// Read the clock now; marks the search aborted if the deadline passed
    pub(crate) fn check_deadline(&mut self) -> bool {
        if self.deadline.map_or(false, |d| Instant::now() >= d) {
            self.aborted = true;
        }
        self.aborted
    }
}

/// Score of a node where `side` has no legal move
#[inline]
fn terminal_score(pos: &Position, side: Color, ply: i32) -> i32 {
    if pos.is_in_check(side) {
        -(MATE_SCORE - ply)
    } else {
        0
    }
}

/// Negamax search with alpha-beta pruning
///
/// # Arguments
///
/// * `ctx` - Heuristic, history table and cancellation for this search
/// * `pos` - Current position (moves are applied through scoped guards)
/// * `depth` - Remaining search depth (<= 0 hands over to quiescence)
/// * `ply` - Distance from the root, used to prefer shorter mates
/// * `alpha` - Lower bound (best score the side to move can already guarantee)
/// * `beta` - Upper bound (best score the opponent will allow)
/// * `side` - Side to move
///
/// # Returns
///
/// (score, best_move) - Score from perspective of `side`, and the best move found.
/// After an abort the result is meaningless and callers must discard it.
pub fn negamax(
    ctx: &mut SearchContext<'_>,
    pos: &mut Position,
    depth: i32,
    ply: i32,
    mut alpha: i32,
    beta: i32,
    side: Color,
) -> (i32, Option<Move>) {
    if ctx.visit() {
        return (0, None);
    }

    if ply > 0 && pos.is_draw_by_rule() {
        return (0, None);
    }

    if depth <= 0 {
        if !pos.has_legal_move(side) {
            return (terminal_score(pos, side, ply), None);
        }
        return (quiescence(ctx, pos, alpha, beta, side, 0), None);
    }

    let mut moves = pos.moves(side, true);
    if moves.is_empty() {
        return (terminal_score(pos, side, ply), None);
    }
    order_moves(&mut moves, side, ctx.history(), None);

    let mut best_score = -INFINITY;
    let mut best_move = None;

    for mv in moves {
        let score = {
            let mut child = pos.apply(mv);
            -negamax(ctx, &mut child, depth - 1, ply + 1, -beta, -alpha, side.opposite()).0
        };
        if ctx.is_aborted() {
            return (best_score, best_move);
        }

        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
        if score > alpha {
            alpha = score;
        }
        if alpha >= beta {
            // Fail high: the opponent will never allow this line
            ctx.history_mut().reward(side, &mv, depth);
            return (best_score, best_move);
        }
    }

    if let Some(mv) = best_move {
        ctx.history_mut().reward(side, &mv, depth);
    }

    (best_score, best_move)
}
