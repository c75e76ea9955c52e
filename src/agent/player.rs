//! Player trait and associated types for chess game agents.
//!
//! A player is anything that, handed a `TurnSnapshot` of the live game, can
//! answer with a move. The engine (`NegamaxPlayer`) and the baseline
//! `RandomPlayer` both implement it, so drivers can pit any two against
//! each other.
//!
//! # Design Philosophy
//!
//! The `Player` trait focuses on **behavior** rather than construction. Each
//! implementation provides its own constructor tailored to what it needs.
//!
//! # Synchronous Design
//!
//! `choose_move()` is blocking. The engine does all of its thinking inside
//! the call, except for pondering, which runs on a thread the player owns and
//! joins before its next turn.

use crate::error::EngineResult;
use crate::game_repr::{ChosenMove, Color, TurnSnapshot};

/// Result of a completed chess game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// White player won the game (Black was checkmated)
    WhiteWins,
    /// Black player won the game (White was checkmated)
    BlackWins,
    /// Fifty-move rule, repetition or insufficient material
    Draw,
    /// Game ended in stalemate (player to move has no legal moves but is not in check)
    Stalemate,
}

impl GameResult {
    /// Create a GameResult from the winning color
    pub fn from_winner(winner: Color) -> Self {
        match winner {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }
}

/// Trait for entities that can provide chess moves.
///
/// # Method Behavior
///
/// ## `choose_move()`
/// - **Blocking**: returns once a move is chosen
/// - **Returns `Ok(None)`**: the side to move has no legal move
/// - **Returns `Err`**: the snapshot could not be turned into a board
/// - A returned move is always legal in the snapshot's position
///
/// ## `game_ended()`
/// - Default: Does nothing
/// - Override: to stop background work or record the result
pub trait Player {
    /// Pick a move for `snapshot.side_to_move`.
    fn choose_move(&mut self, snapshot: &TurnSnapshot) -> EngineResult<Option<ChosenMove>>;

    /// Notify this player that the game has ended.
    fn game_ended(&mut self, _result: GameResult) {
        // Default: do nothing
    }

    /// Get the display name of this player.
    fn name(&self) -> &str {
        "Player"
    }
}
