//! NegamaxPlayer - the per-turn engine facade
//!
//! Each turn the session hands over a `TurnSnapshot`. The player rebuilds its
//! private board from it, runs an iterative-deepening negamax search within a
//! time budget derived from its remaining clock and answers with one legal
//! move. With pondering enabled it then keeps thinking on the opponent's time
//! and, if it guessed the reply right, may answer the next turn without
//! searching again.
//!
//! # Turn sequence
//!
//! 1. Stop and join any pondering task (nothing touches the board before that)
//! 2. Rebuild the board from the snapshot, clear the history table
//! 3. No legal move: report checkmate/stalemate, answer `None`
//! 4. Derive depth and time allowance from the remaining clock
//! 5. Reuse a confirmed pondered result that is deep enough, otherwise search
//! 6. Optionally start pondering on a copy of the board after our move
//!
//! # Examples
//!
//! ```no_run
//! use negamax_ponder::agent::{Difficulty, NegamaxPlayer, Player};
//! use negamax_ponder::game_repr::Position;
//! use std::time::Duration;
//!
//! let mut ai = NegamaxPlayer::with_difficulty(Difficulty::Easy);
//! let snapshot = Position::default().snapshot([Duration::from_secs(60); 2]);
//! let mv = ai.choose_move(&snapshot).unwrap();
//! ```

use std::sync::Arc;
use std::time::Instant;

use crate::agent::ai::{
    iterative_deepening_search, time_budget, Heuristic, HistoryTable, MaterialHeuristic,
    PonderCoordinator, SearchContext, SearchResult,
};
use crate::agent::config::{Difficulty, EngineConfig};
use crate::agent::player::{GameResult, Player};
use crate::error::EngineResult;
use crate::game_repr::{ChosenMove, Move, Position, TurnSnapshot};

/// AI Player that uses Negamax algorithm with alpha-beta pruning
///
/// The player owns everything its search touches: the board it rebuilds each
/// turn, the history table and the pondering task. Nothing is shared with
/// the session except the snapshot it is handed and the move it returns.
pub struct NegamaxPlayer {
    /// Display name for this AI player
    name: String,

    config: EngineConfig,

    /// Per-piece scoring, shared with the pondering thread
    heuristic: Arc<dyn Heuristic>,

    /// Private board, rebuilt from every snapshot
    board: Position,

    /// Cleared at the start of every turn
    history: HistoryTable,

    ponder: PonderCoordinator,

    /// Statistics of the last move chosen
    last_result: Option<SearchResult>,

    /// Turns answered from a confirmed pondered search
    ponder_hits: u32,
}

impl NegamaxPlayer {
    /// Create a new NegamaxPlayer
    ///
    /// # Arguments
    ///
    /// * `config` - Search depth, time-pressure depth and pondering switch
    /// * `heuristic` - Per-piece evaluation used at the leaves
    /// * `name` - Display name for this player
    pub fn new(config: EngineConfig, heuristic: Arc<dyn Heuristic>, name: String) -> Self {
        Self {
            name,
            config,
            heuristic,
            board: Position::default(),
            history: HistoryTable::new(),
            ponder: PonderCoordinator::new(),
            last_result: None,
            ponder_hits: 0,
        }
    }

    /// Create a NegamaxPlayer with the default heuristic and a name
    /// generated as "AI ({difficulty})"
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        let name = format!("AI ({})", difficulty.name());
        Self::new(difficulty.into(), Arc::new(MaterialHeuristic), name)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Change the configuration for future turns. Turning pondering off stops
    /// a running task.
    pub fn set_config(&mut self, config: EngineConfig) {
        if !config.ponder {
            self.ponder.cancel();
        }
        self.config = config;
    }

    /// Statistics of the most recent search (or pondered result) used
    pub fn last_result(&self) -> Option<&SearchResult> {
        self.last_result.as_ref()
    }

    pub fn is_pondering(&self) -> bool {
        self.ponder.is_running()
    }

    /// Whether the pondering task has run out of work (or none is running)
    pub fn ponder_finished(&self) -> bool {
        self.ponder.is_finished()
    }

    /// The reply the pondering task expects from the opponent
    pub fn ponder_move(&self) -> Option<Move> {
        self.ponder.predicted_reply()
    }

    pub fn ponder_hits(&self) -> u32 {
        self.ponder_hits
    }

    /// A pondered result is used only if it went at least as deep as a fresh
    /// search would and its move is legal on the rebuilt board
    fn pondered_move(&mut self, pondered: Option<SearchResult>, max_depth: u32) -> Option<(Move, SearchResult)> {
        let result = pondered?;
        if result.depth < max_depth {
            log::debug!("pondered result too shallow ({} < {})", result.depth, max_depth);
            return None;
        }
        let side = self.board.side_to_move();
        let mv = self.board.find_move(side, ChosenMove::from(result.best_move?)).ok()?;
        Some((mv, result))
    }

    fn start_pondering(&mut self, mv: Move) {
        let mut board = self.board.clone();
        let _ = board.make_move(mv);
        self.ponder
            .start(board, self.config.max_depth, Arc::clone(&self.heuristic));
    }
}

impl Player for NegamaxPlayer {
    fn choose_move(&mut self, snapshot: &TurnSnapshot) -> EngineResult<Option<ChosenMove>> {
        let actual_reply = snapshot.last_move().and_then(|m| m.to_chosen().ok());
        let pondered = self.ponder.resolve(actual_reply);

        self.board.rebuild(snapshot)?;
        self.history.clear();

        let side = self.board.side_to_move();
        if !self.board.has_legal_move(side) {
            if self.board.is_in_check(side) {
                log::info!("[{}] checkmated, no move to make", self.name);
            } else {
                log::info!("[{}] stalemated, no move to make", self.name);
            }
            self.last_result = None;
            return Ok(None);
        }

        let limits = time_budget(snapshot.remaining_for(side), &self.config);

        let (mv, result) = match self.pondered_move(pondered, limits.max_depth) {
            Some(hit) => {
                self.ponder_hits += 1;
                hit
            }
            None => {
                let mut ctx = SearchContext::new(self.heuristic.as_ref(), &mut self.history);
                if let Some(allowance) = limits.allowance {
                    ctx = ctx.with_deadline(Instant::now() + allowance);
                }
                let result = iterative_deepening_search(&mut ctx, &mut self.board, side, limits.max_depth);
                // There is a legal move, so the search always returns one
                let Some(mv) = result.best_move else {
                    unreachable!("search returned no move in a position with legal moves");
                };
                (mv, result)
            }
        };

        log::info!(
            "[{}] {} (depth {}, score {}, {} nodes, {:?})",
            self.name,
            mv,
            result.depth,
            result.score,
            result.nodes,
            result.elapsed
        );
        self.last_result = Some(result);

        if self.config.ponder {
            self.start_pondering(mv);
        }

        Ok(Some(ChosenMove::from(mv)))
    }

    fn game_ended(&mut self, result: GameResult) {
        log::debug!("[{}] game over: {:?}", self.name, result);
        self.ponder.cancel();
    }

    fn name(&self) -> &str {
        &self.name
    }
}
