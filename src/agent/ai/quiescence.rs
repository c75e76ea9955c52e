// Quiescence Search - Tactical Stability Extension
//
// When the main search runs out of depth in the middle of an exchange, the
// static evaluation is misleading (we would think we are up a queen right
// before the recapture). Quiescence keeps searching captures and promotions
// only, for a small fixed number of extra plies, so leaves are scored in
// calmer positions.
//
// The side to move may always decline the tactical moves ("stand pat"), so
// the static evaluation is a lower bound on the node's value.

use crate::game_repr::{Color, Position};
use super::move_ordering::order_tactical;
use super::negamax::SearchContext;

/// Extra plies searched past the nominal depth
pub const QUIESCENCE_DEPTH: u32 = 2;

/// Quiescence search (fail-soft)
///
/// # Arguments
///
/// * `ctx` - Shared search state (heuristic, node count, cancellation)
/// * `pos` - Current position (mutated and restored through apply guards)
/// * `alpha`, `beta` - Search window from the perspective of `side`
/// * `side` - Side to move
/// * `qs_depth` - Quiescence plies already spent
///
/// # Returns
///
/// Score from the perspective of `side`
pub fn quiescence(
    ctx: &mut SearchContext<'_>,
    pos: &mut Position,
    mut alpha: i32,
    beta: i32,
    side: Color,
    qs_depth: u32,
) -> i32 {
    if ctx.visit() {
        return 0;
    }

    let stand_pat = pos.worth(side, ctx.heuristic());
    if stand_pat >= beta || qs_depth >= QUIESCENCE_DEPTH {
        return stand_pat;
    }

    let mut best = stand_pat;
    if stand_pat > alpha {
        alpha = stand_pat;
    }

    let mut moves = pos.tactical_moves(side);
    order_tactical(&mut moves);

    for mv in moves {
        let score = {
            let mut child = pos.apply(mv);
            -quiescence(ctx, &mut child, -beta, -alpha, side.opposite(), qs_depth + 1)
        };
        if ctx.is_aborted() {
            return best;
        }

        if score > best {
            best = score;
        }
        if score > alpha {
            alpha = score;
        }
        if alpha >= beta {
            break;
        }
    }

    best
}
