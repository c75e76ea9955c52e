// Per-turn data handed over by the session layer. The engine never sees the
// session's own piece objects, only this flat copy of them.

use std::time::Duration;

use super::*;
use crate::error::EngineResult;

/// A live piece as the session reports it. Coordinates are raw so that an
/// off-board value is caught when the board is rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceSnapshot {
    pub id: u32,
    pub owner: Color,
    pub piece_type: Type,
    pub file: i32,
    pub rank: i32,
    pub has_moved: bool,
}

/// A move already played in the game, as (file, rank) pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSnapshot {
    pub from: (i32, i32),
    pub to: (i32, i32),
    /// Set when the move promoted a pawn
    pub promotion: Option<Type>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TurnSnapshot {
    pub side_to_move: Color,
    pub pieces: Vec<PieceSnapshot>,
    /// Most recent first; eight entries are enough for repetition detection
    pub recent_moves: Vec<MoveSnapshot>,
    pub half_move_clock: u16,
    /// Remaining clock time, indexed by `Color::index`
    pub remaining: [Duration; 2],
}

impl TurnSnapshot {
    pub fn remaining_for(&self, side: Color) -> Duration {
        self.remaining[side.index()]
    }

    /// Most recent move, the opponent's reply when it is our turn
    pub fn last_move(&self) -> Option<&MoveSnapshot> {
        self.recent_moves.first()
    }
}

impl MoveSnapshot {
    pub fn to_move(&self) -> EngineResult<Move> {
        let from = Square::try_new(self.from.0, self.from.1)?;
        let to = Square::try_new(self.to.0, self.to.1)?;
        Ok(match self.promotion {
            Some(piece) => Move::promotion(from, to, None, piece),
            None => Move::new(from, to, None),
        })
    }

    /// The same move as a `ChosenMove`, for comparing against predictions
    pub fn to_chosen(&self) -> EngineResult<ChosenMove> {
        let mv = self.to_move()?;
        Ok(ChosenMove {
            from: mv.from,
            to: mv.to,
            promotion: self.promotion.unwrap_or(Type::Queen),
        })
    }
}

impl From<&Move> for MoveSnapshot {
    fn from(mv: &Move) -> Self {
        MoveSnapshot {
            from: (mv.from.file(), mv.from.rank()),
            to: (mv.to.file(), mv.to.rank()),
            promotion: mv.is_promotion().then_some(mv.promotion),
        }
    }
}

/// Queen is what `to_chosen` assumes when no promotion is recorded, so only
/// an underpromotion needs to be carried
impl From<ChosenMove> for MoveSnapshot {
    fn from(mv: ChosenMove) -> Self {
        MoveSnapshot {
            from: (mv.from.file(), mv.from.rank()),
            to: (mv.to.file(), mv.to.rank()),
            promotion: mv.underpromotion(),
        }
    }
}

impl Position {
    /// Build a fresh board from the session's snapshot
    pub fn from_snapshot(snapshot: &TurnSnapshot) -> EngineResult<Position> {
        let records = snapshot
            .pieces
            .iter()
            .map(|p| {
                Ok(PieceRecord {
                    id: PieceId(p.id),
                    color: p.owner,
                    piece_type: p.piece_type,
                    square: Square::try_new(p.file, p.rank)?,
                    has_moved: p.has_moved,
                })
            })
            .collect::<EngineResult<Vec<_>>>()?;

        let recent = snapshot
            .recent_moves
            .iter()
            .take(HISTORY_LEN)
            .map(MoveSnapshot::to_move)
            .collect::<EngineResult<Vec<_>>>()?;

        Position::from_records(records, snapshot.side_to_move, snapshot.half_move_clock, &recent)
    }

    /// Discard everything and load `snapshot`. On error the board is left
    /// untouched.
    pub fn rebuild(&mut self, snapshot: &TurnSnapshot) -> EngineResult<()> {
        *self = Position::from_snapshot(snapshot)?;
        Ok(())
    }

    /// The snapshot a session would send for this position
    pub fn snapshot(&self, remaining: [Duration; 2]) -> TurnSnapshot {
        TurnSnapshot {
            side_to_move: self.side_to_move(),
            pieces: self
                .pieces()
                .map(|p| PieceSnapshot {
                    id: p.id.0,
                    owner: p.color,
                    piece_type: p.piece_type,
                    file: p.square.file(),
                    rank: p.square.rank(),
                    has_moved: p.has_moved,
                })
                .collect(),
            recent_moves: self.history().map(MoveSnapshot::from).collect(),
            half_move_clock: self.half_move_clock(),
            remaining,
        }
    }
}
