// Iterative Deepening Search Orchestrator
//
// This module implements iterative deepening search for chess move selection.
// It progressively searches deeper depths (1, 2, 3, ...) up to max_depth,
// using results from previous iterations to improve move ordering.
//
// An iteration that gets cut off (deadline or stop flag) is thrown away; the
// result always comes from the last depth that finished.

use std::time::{Duration, Instant};

use crate::agent::config::EngineConfig;
use crate::game_repr::{Color, Move, Position};
use super::evaluation::Heuristic;
use super::move_ordering::{order_moves, HistoryTable};
use super::negamax::{is_mate_score, negamax, SearchContext, INFINITY};

/// Remaining clock is divided by this to get the per-move allowance
pub const TIME_DIVISOR: u32 = 30;

/// Below this much remaining time the engine stops watching the clock and
/// plays one shallow fixed-depth search instead
pub const LOW_TIME_THRESHOLD: Duration = Duration::from_secs(5);

/// Result of a search operation
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
    /// Last fully completed depth (0 if none completed)
    pub depth: u32,
    pub nodes: u64,
    pub elapsed: Duration,
}

/// How far and how long to search this turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    pub max_depth: u32,
    /// `None` means no deadline
    pub allowance: Option<Duration>,
}

/// Per-move time allowance derived from the side's remaining clock
pub fn time_budget(remaining: Duration, config: &EngineConfig) -> SearchLimits {
    if remaining < LOW_TIME_THRESHOLD {
        SearchLimits {
            max_depth: config.pressure_depth.max(1),
            allowance: None,
        }
    } else {
        SearchLimits {
            max_depth: config.max_depth.max(1),
            allowance: Some(remaining / TIME_DIVISOR),
        }
    }
}

/// Perform iterative deepening search to find the best move
///
/// # Arguments
/// * `ctx` - Search context (heuristic, history, deadline / stop flag)
/// * `pos` - Position to search, left unchanged on return
/// * `side` - Color to move
/// * `max_depth` - Maximum search depth
///
/// # Returns
/// SearchResult of the deepest completed iteration. If not even depth 1
/// completed, the first move in ordering is returned with depth 0.
pub fn iterative_deepening_search(
    ctx: &mut SearchContext<'_>,
    pos: &mut Position,
    side: Color,
    max_depth: u32,
) -> SearchResult {
    let start_time = Instant::now();
    let mut best_result = SearchResult::default();

    let mut root_moves = pos.moves(side, true);
    if root_moves.is_empty() {
        return best_result;
    }

    // Best move from the previous iteration, searched first
    let mut pv_move: Option<Move> = None;

    for depth in 1..=max_depth.max(1) {
        order_moves(&mut root_moves, side, ctx.history(), pv_move);

        let mut alpha = -INFINITY;
        let beta = INFINITY;
        let mut best_score = -INFINITY;
        let mut best_move_this_depth: Option<Move> = None;

        for (i, &mv) in root_moves.iter().enumerate() {
            // Time is only checked between root moves
            if i > 0 && ctx.check_deadline() {
                break;
            }

            let score = {
                let mut child = pos.apply(mv);
                -negamax(ctx, &mut child, depth as i32 - 1, 1, -beta, -alpha, side.opposite()).0
            };
            if ctx.is_aborted() {
                break;
            }

            if score > best_score {
                best_score = score;
                best_move_this_depth = Some(mv);
            }
            if score > alpha {
                alpha = score;
            }
        }

        if ctx.is_aborted() {
            log::debug!("depth {} aborted after {} nodes", depth, ctx.nodes());
            break;
        }

        if let Some(mv) = best_move_this_depth {
            ctx.history_mut().reward(side, &mv, depth as i32);
        }

        best_result = SearchResult {
            best_move: best_move_this_depth,
            score: best_score,
            depth,
            nodes: ctx.nodes(),
            elapsed: start_time.elapsed(),
        };
        pv_move = best_move_this_depth;

        log::debug!(
            "depth {} score {} nodes {} time {:?} best {}",
            depth,
            best_score,
            ctx.nodes(),
            best_result.elapsed,
            best_move_this_depth.map_or_else(|| "-".to_string(), |m| m.to_string()),
        );

        // A forced mate will not get better with depth. Depth 2 alone can
        // report a mate that one more ply refutes, so it always goes on.
        if is_mate_score(best_score) && depth != 2 {
            break;
        }
    }

    if best_result.depth == 0 {
        // Nothing finished: play the move ordering likes best
        best_result.best_move = root_moves.first().copied();
        best_result.score = pos.worth(side, ctx.heuristic());
    }
    best_result.nodes = ctx.nodes();
    best_result.elapsed = start_time.elapsed();

    best_result
}

/// Convenience wrapper: search `pos` for its side to move with a fresh
/// context and no time limit
pub fn search_fixed_depth(
    pos: &mut Position,
    heuristic: &dyn Heuristic,
    max_depth: u32,
) -> SearchResult {
    let mut history = HistoryTable::new();
    let mut ctx = SearchContext::new(heuristic, &mut history);
    let side = pos.side_to_move();
    iterative_deepening_search(&mut ctx, pos, side, max_depth)
}
