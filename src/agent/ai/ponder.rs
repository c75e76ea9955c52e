// Pondering: searching on the opponent's time
//
// After the engine commits to a move it hands a private copy of the board
// (with its own move already played) to a background thread. That thread
// first predicts the opponent's reply, publishes the prediction, then plays
// the reply on its copy and searches our continuation.
//
// The thread never sees the authoritative board. The only shared state is
// the prediction slot (a parking_lot mutex) and the stop flag. When the real
// reply arrives the coordinator always raises the flag and joins before
// anyone touches the board again; the continuation survives only if the
// prediction was right.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;

use crate::game_repr::{ChosenMove, Move, Position};
use super::evaluation::Heuristic;
use super::move_ordering::HistoryTable;
use super::negamax::SearchContext;
use super::search::{iterative_deepening_search, SearchResult};

/// What the background search has worked out so far
#[derive(Debug, Clone)]
pub struct Prediction {
    /// Expected opponent reply
    pub reply: Move,
    /// Our best answer to `reply`, once a depth has completed
    pub continuation: Option<SearchResult>,
}

type PredictionSlot = Arc<Mutex<Option<Prediction>>>;

struct PonderTask {
    handle: JoinHandle<()>,
    stop: Arc<AtomicBool>,
    slot: PredictionSlot,
}

/// Owns at most one pondering thread
#[derive(Default)]
pub struct PonderCoordinator {
    task: Option<PonderTask>,
}

impl PonderCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// The opponent reply the background search expects, once it has settled
    /// on one
    pub fn predicted_reply(&self) -> Option<Move> {
        let task = self.task.as_ref()?;
        let reply = task.slot.lock().as_ref().map(|p| p.reply);
        reply
    }

    /// True when idle or when the background search has run to completion
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, |t| t.handle.is_finished())
    }

    /// Start pondering on `board`, which must already have our move applied
    /// (its side to move is the opponent). A task still running is cancelled
    /// first.
    pub fn start(&mut self, board: Position, max_depth: u32, heuristic: Arc<dyn Heuristic>) {
        self.cancel();

        let stop = Arc::new(AtomicBool::new(false));
        let slot: PredictionSlot = Arc::new(Mutex::new(None));

        let spawned = {
            let stop = Arc::clone(&stop);
            let slot = Arc::clone(&slot);
            thread::Builder::new()
                .name("ponder".into())
                .spawn(move || ponder(board, max_depth, heuristic.as_ref(), &stop, &slot))
        };

        match spawned {
            Ok(handle) => self.task = Some(PonderTask { handle, stop, slot }),
            Err(e) => log::warn!("could not start pondering: {}", e),
        }
    }

    /// Stop the background search and wait for it. Returns the precomputed
    /// continuation if `actual` is the reply that was predicted.
    pub fn resolve(&mut self, actual: Option<ChosenMove>) -> Option<SearchResult> {
        let prediction = self.stop_and_join()?;

        match actual {
            Some(actual) if actual.matches(&prediction.reply) => {
                log::debug!("ponder hit on {}", prediction.reply);
                prediction.continuation
            }
            _ => {
                log::debug!(
                    "ponder miss: predicted {}, got {}",
                    prediction.reply,
                    actual.map_or_else(|| "nothing".to_string(), |m| m.to_string()),
                );
                None
            }
        }
    }

    /// Stop and join without looking at the result. No-op when idle.
    pub fn cancel(&mut self) {
        let _ = self.stop_and_join();
    }

    fn stop_and_join(&mut self) -> Option<Prediction> {
        let task = self.task.take()?;
        task.stop.store(true, Ordering::Relaxed);
        if task.handle.join().is_err() {
            log::warn!("pondering task panicked; its result is discarded");
            return None;
        }
        let prediction = task.slot.lock().take();
        prediction
    }
}

impl Drop for PonderCoordinator {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Body of the pondering thread
fn ponder(
    mut board: Position,
    max_depth: u32,
    heuristic: &dyn Heuristic,
    stop: &AtomicBool,
    slot: &Mutex<Option<Prediction>>,
) {
    let opponent = board.side_to_move();
    let mut history = HistoryTable::new();

    let predicted = {
        let mut ctx = SearchContext::new(heuristic, &mut history).with_stop(stop);
        iterative_deepening_search(&mut ctx, &mut board, opponent, max_depth)
    };
    let Some(reply) = predicted.best_move else {
        return;
    };
    if stop.load(Ordering::Relaxed) {
        return;
    }
    *slot.lock() = Some(Prediction {
        reply,
        continuation: None,
    });

    history.clear();
    let mut after_reply = board.apply(reply);
    let mut ctx = SearchContext::new(heuristic, &mut history).with_stop(stop);
    let continuation = iterative_deepening_search(&mut ctx, &mut after_reply, opponent.opposite(), max_depth);

    if continuation.depth > 0 {
        if let Some(prediction) = slot.lock().as_mut() {
            prediction.continuation = Some(continuation);
        }
    }
}
