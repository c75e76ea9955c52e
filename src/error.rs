//! Error types for the engine
//!
//! Only caller-supplied input can fail: a malformed turn snapshot, a FEN
//! string that does not describe a position, or a move that is not legal
//! where it is played. Corruption of the board model itself is a panic.

use crate::game_repr::{Color, PieceId, Square};
use thiserror::Error;

/// Errors that can occur while loading a position or playing a move into it
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Coordinates outside files/ranks 1..=8
    #[error("Square ({file}, {rank}) is off the board")]
    OffBoard { file: i32, rank: i32 },

    /// The same piece id appears twice in a snapshot
    #[error("Duplicate piece id {0}")]
    DuplicatePieceId(PieceId),

    /// Two pieces claim the same square
    #[error("Square {0} is occupied by more than one piece")]
    SquareOccupied(Square),

    /// Every side must have exactly one king
    #[error("{color:?} has {count} kings (expected exactly one)")]
    KingCount { color: Color, count: usize },

    /// The side that just moved left its own king attacked
    #[error("{0:?} is in check but it is not their turn")]
    OpponentInCheck(Color),

    /// FEN string could not be parsed
    #[error("Invalid FEN: {0}")]
    InvalidFen(String),

    /// No legal move matches the requested from/to/promotion
    #[error("Illegal move {from}{to} for {side:?}")]
    IllegalMove { from: Square, to: Square, side: Color },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
