// AI Agent - Negamax with Alpha-Beta Pruning
//
// This module implements a classical chess AI using the Negamax algorithm
// with alpha-beta pruning and iterative deepening.
//
// Key features:
// - Pluggable per-piece evaluation (`Heuristic`)
// - History heuristic for move ordering
// - Quiescence search to avoid horizon effect
// - Per-move time budget derived from the remaining clock
// - Pondering on the opponent's time

mod evaluation;
mod move_ordering;
mod negamax;
mod piece_square_tables;
mod ponder;
mod quiescence;
mod search;

pub use evaluation::{evaluate, piece_value, Heuristic, MaterialHeuristic, MaterialOnly, ENDGAME_PIECE_THRESHOLD};
pub use move_ordering::{order_moves, order_tactical, HistoryTable};
pub use negamax::{is_mate_score, mate_distance, negamax, SearchContext, INFINITY, MATE_SCORE};
pub use ponder::{PonderCoordinator, Prediction};
pub use quiescence::{quiescence, QUIESCENCE_DEPTH};
pub use search::{
    iterative_deepening_search, search_fixed_depth, time_budget, SearchLimits, SearchResult,
    LOW_TIME_THRESHOLD, TIME_DIVISOR,
};

#[cfg(test)]
mod tests;
