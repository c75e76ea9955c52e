use std::collections::{HashMap, VecDeque};
use std::ops::{Deref, DerefMut};

use super::*;
use crate::error::{EngineError, EngineResult};

/*
 * MODULE IS RESPONSIBLE FOR
 * BOARD STATE, INCREMENTAL MOVE APPLICATION
 * AND THE TERMINAL (CHECK / MATE / DRAW) QUERIES
 */

/// Number of most recent moves kept for repetition detection
pub const HISTORY_LEN: usize = 8;

/// Plies without a capture or pawn move that end the game (fifty-move rule)
pub const FIFTY_MOVE_PLIES: u16 = 100;

/// The repetition window is only trusted once this many reversible plies
/// have been played, otherwise it would compare moves across a capture
pub const REPETITION_MIN_PLIES: u16 = 8;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Per-side counters and cached squares kept in step with the grid.
/// Restored wholesale on unapply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialCache {
    pub king_squares: [Square; 2],
    /// Live pieces per side, king included
    pub piece_counts: [u8; 2],
    pub knight_counts: [u8; 2],
    pub bishop_counts: [u8; 2],
    /// Square of the side's bishop; only meaningful while the side has exactly one
    pub bishop_squares: [Option<Square>; 2],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Square index -> occupying piece id
    grid: [Option<PieceId>; 64],
    /// Piece id -> record; holds exactly the pieces on the grid
    pieces: HashMap<PieceId, PieceRecord>,
    cache: MaterialCache,
    side_to_move: Color,
    last_move: Option<Move>,
    /// Most recent move first, at most `HISTORY_LEN` entries
    history: VecDeque<Move>,
    /// Plies since the last capture or pawn move
    half_move_clock: u16,
}

/// Everything `make_move` overwrote. Opaque outside this module.
#[derive(Debug, Clone)]
pub struct UndoInfo {
    mv: Move,
    mover: PieceRecord,
    captured: Option<PieceRecord>,
    rook_had_moved: bool,
    cache: MaterialCache,
    side_to_move: Color,
    last_move: Option<Move>,
    half_move_clock: u16,
    evicted: Option<Move>,
}

/// A move applied to a position for as long as the guard lives.
///
/// The guard dereferences to the position, so the search keeps working on
/// the board through it. Dropping the guard, on any exit path, unapplies the
/// move. Applying a second move through the guard borrows it mutably, so
/// nested guards can only be released in reverse order.
pub struct MoveGuard<'a> {
    position: &'a mut Position,
    mv: Move,
    undo: Option<UndoInfo>,
}

impl MoveGuard<'_> {
    /// The move this guard holds applied
    pub fn applied(&self) -> Move {
        self.mv
    }
}

impl Deref for MoveGuard<'_> {
    type Target = Position;

    fn deref(&self) -> &Position {
        self.position
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Position {
        self.position
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        if let Some(undo) = self.undo.take() {
            self.position.unmake_move(undo);
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::from_fen(START_FEN).expect("start position FEN is well formed")
    }
}

/// Square of the pawn removed by an en passant capture: the destination
/// file on the capturing pawn's rank
#[inline]
fn en_passant_victim(mv: &Move) -> Square {
    Square::from_index(mv.from.index() - (mv.from.file() as usize - 1) + (mv.to.file() as usize - 1))
}

/// (rook origin, rook destination) for a castling king move
#[inline]
pub(crate) fn castle_rook_squares(mv: &Move) -> (Square, Square) {
    let base = (mv.from.rank() as usize - 1) * 8;
    if mv.to.file() > mv.from.file() {
        (Square::from_index(base + 7), Square::from_index(base + 5))
    } else {
        (Square::from_index(base), Square::from_index(base + 3))
    }
}

impl Position {
    /// Build a board from a full piece list. This is the destructive
    /// per-turn rebuild: nothing of any previous board survives.
    ///
    /// `recent_moves` is most-recent-first; the first entry becomes the
    /// last move (en passant) and up to `HISTORY_LEN` entries seed the
    /// repetition window.
    pub fn from_records<I>(
        records: I,
        side_to_move: Color,
        half_move_clock: u16,
        recent_moves: &[Move],
    ) -> EngineResult<Position>
    where
        I: IntoIterator<Item = PieceRecord>,
    {
        let mut grid = [None; 64];
        let mut pieces = HashMap::new();
        let mut kings: [Vec<Square>; 2] = [Vec::new(), Vec::new()];
        let mut cache = MaterialCache {
            king_squares: [Square::from_index(0); 2],
            piece_counts: [0; 2],
            knight_counts: [0; 2],
            bishop_counts: [0; 2],
            bishop_squares: [None; 2],
        };

        for rec in records {
            if pieces.contains_key(&rec.id) {
                return Err(EngineError::DuplicatePieceId(rec.id));
            }
            let cell = &mut grid[rec.square.index()];
            if cell.is_some() {
                return Err(EngineError::SquareOccupied(rec.square));
            }
            *cell = Some(rec.id);

            let c = rec.color.index();
            cache.piece_counts[c] += 1;
            match rec.piece_type {
                Type::King => kings[c].push(rec.square),
                Type::Knight => cache.knight_counts[c] += 1,
                Type::Bishop => {
                    cache.bishop_counts[c] += 1;
                    cache.bishop_squares[c] = Some(rec.square);
                }
                _ => {}
            }
            pieces.insert(rec.id, rec);
        }

        for color in [Color::White, Color::Black] {
            let found = &kings[color.index()];
            if found.len() != 1 {
                return Err(EngineError::KingCount {
                    color,
                    count: found.len(),
                });
            }
            cache.king_squares[color.index()] = found[0];
        }

        let position = Position {
            grid,
            pieces,
            cache,
            side_to_move,
            last_move: recent_moves.first().copied(),
            history: recent_moves.iter().take(HISTORY_LEN).copied().collect(),
            half_move_clock,
        };

        // The side that just moved cannot have left its king attacked
        let waiting = side_to_move.opposite();
        if position.is_in_check(waiting) {
            return Err(EngineError::OpponentInCheck(waiting));
        }

        Ok(position)
    }

    // ==================== ACCESSORS ====================

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn piece_id_at(&self, sq: Square) -> Option<PieceId> {
        self.grid[sq.index()]
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<&PieceRecord> {
        self.grid[sq.index()].and_then(|id| self.pieces.get(&id))
    }

    pub fn piece(&self, id: PieceId) -> Option<&PieceRecord> {
        self.pieces.get(&id)
    }

    /// Live pieces in square order (a1, b1, ..., h8)
    pub fn pieces(&self) -> impl Iterator<Item = &PieceRecord> + '_ {
        self.grid
            .iter()
            .filter_map(move |cell| cell.and_then(|id| self.pieces.get(&id)))
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.cache.king_squares[color.index()]
    }

    #[inline]
    pub fn piece_count(&self, color: Color) -> u8 {
        self.cache.piece_counts[color.index()]
    }

    /// Pieces of both sides still on the board
    #[inline]
    pub fn total_pieces(&self) -> u32 {
        self.cache.piece_counts[0] as u32 + self.cache.piece_counts[1] as u32
    }

    pub fn material_cache(&self) -> &MaterialCache {
        &self.cache
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Recorded moves, most recent first
    pub fn history(&self) -> impl Iterator<Item = &Move> + '_ {
        self.history.iter()
    }

    #[inline]
    pub fn half_move_clock(&self) -> u16 {
        self.half_move_clock
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.grid[sq.index()].is_none()
    }

    /// True if `sq` holds a piece belonging to `color`
    #[inline]
    pub fn is_owned_by(&self, sq: Square, color: Color) -> bool {
        self.piece_at(sq).map_or(false, |p| p.color == color)
    }

    fn locate_bishop(&self, color: Color) -> Option<Square> {
        self.pieces
            .values()
            .find(|p| p.is(color, Type::Bishop))
            .map(|p| p.square)
    }

    // ==================== APPLY / UNAPPLY ====================

    /// Apply `mv` for the lifetime of the returned guard
    pub fn apply(&mut self, mv: Move) -> MoveGuard<'_> {
        let undo = self.make_move(mv);
        MoveGuard {
            position: self,
            mv,
            undo: Some(undo),
        }
    }

    /// Apply `mv` and return what is needed to take it back.
    /// Pairs must be unmade in strict reverse order; prefer [`Position::apply`].
    pub fn make_move(&mut self, mv: Move) -> UndoInfo {
        let mover_id = match self.grid[mv.from.index()] {
            Some(id) => id,
            None => panic!("make_move {}: no piece on {}", mv, mv.from),
        };
        let mover = match self.pieces.get(&mover_id) {
            Some(rec) => *rec,
            None => panic!("make_move {}: piece {} missing from registry", mv, mover_id),
        };
        let color = mover.color;
        let c = color.index();

        let mut undo = UndoInfo {
            mv,
            mover,
            captured: None,
            rook_had_moved: false,
            cache: self.cache,
            side_to_move: self.side_to_move,
            last_move: self.last_move,
            half_move_clock: self.half_move_clock,
            evicted: None,
        };

        // Capture (the en passant victim sits beside the destination)
        let capture_sq = if mv.special == SpecialMove::EnPassant {
            en_passant_victim(&mv)
        } else {
            mv.to
        };
        if let Some(victim_id) = self.grid[capture_sq.index()] {
            let victim = match self.pieces.remove(&victim_id) {
                Some(rec) => rec,
                None => panic!("make_move {}: piece {} missing from registry", mv, victim_id),
            };
            assert!(victim.color != color, "make_move {}: captures own piece", mv);
            self.grid[capture_sq.index()] = None;

            let v = victim.color.index();
            self.cache.piece_counts[v] -= 1;
            match victim.piece_type {
                Type::Knight => self.cache.knight_counts[v] -= 1,
                Type::Bishop => {
                    self.cache.bishop_counts[v] -= 1;
                    self.cache.bishop_squares[v] = self.locate_bishop(victim.color);
                }
                _ => {}
            }
            undo.captured = Some(victim);
        }

        // Relocate the mover
        self.grid[mv.from.index()] = None;
        self.grid[mv.to.index()] = Some(mover_id);
        if let Some(rec) = self.pieces.get_mut(&mover_id) {
            rec.square = mv.to;
            rec.has_moved = true;

            match rec.piece_type {
                Type::King => self.cache.king_squares[c] = mv.to,
                Type::Bishop if self.cache.bishop_counts[c] == 1 => {
                    self.cache.bishop_squares[c] = Some(mv.to)
                }
                _ => {}
            }

            if mv.special == SpecialMove::Promotion {
                rec.piece_type = mv.promotion;
                match mv.promotion {
                    Type::Knight => self.cache.knight_counts[c] += 1,
                    Type::Bishop => {
                        self.cache.bishop_counts[c] += 1;
                        if self.cache.bishop_counts[c] == 1 {
                            self.cache.bishop_squares[c] = Some(mv.to);
                        }
                    }
                    _ => {}
                }
            }
        }

        if mv.special == SpecialMove::Castle {
            let (rook_from, rook_to) = castle_rook_squares(&mv);
            let rook_id = match self.grid[rook_from.index()] {
                Some(id) => id,
                None => panic!("make_move {}: no rook on {}", mv, rook_from),
            };
            self.grid[rook_from.index()] = None;
            self.grid[rook_to.index()] = Some(rook_id);
            if let Some(rook) = self.pieces.get_mut(&rook_id) {
                undo.rook_had_moved = rook.has_moved;
                rook.square = rook_to;
                rook.has_moved = true;
            }
        }

        if undo.captured.is_some() || mover.piece_type == Type::Pawn {
            self.half_move_clock = 0;
        } else {
            self.half_move_clock = self.half_move_clock.saturating_add(1);
        }

        self.last_move = Some(mv);
        self.history.push_front(mv);
        if self.history.len() > HISTORY_LEN {
            undo.evicted = self.history.pop_back();
        }
        self.side_to_move = color.opposite();

        undo
    }

    /// Restore every field `make_move` changed
    pub fn unmake_move(&mut self, undo: UndoInfo) {
        let mv = undo.mv;

        if mv.special == SpecialMove::Castle {
            let (rook_from, rook_to) = castle_rook_squares(&mv);
            let rook_id = match self.grid[rook_to.index()] {
                Some(id) => id,
                None => panic!("unmake_move {}: no rook on {}", mv, rook_to),
            };
            self.grid[rook_to.index()] = None;
            self.grid[rook_from.index()] = Some(rook_id);
            if let Some(rook) = self.pieces.get_mut(&rook_id) {
                rook.square = rook_from;
                rook.has_moved = undo.rook_had_moved;
            }
        }

        assert_eq!(
            self.grid[mv.to.index()],
            Some(undo.mover.id),
            "unmake_move {}: moves released out of order",
            mv
        );
        self.grid[mv.to.index()] = None;
        self.grid[mv.from.index()] = Some(undo.mover.id);
        self.pieces.insert(undo.mover.id, undo.mover);

        if let Some(victim) = undo.captured {
            self.grid[victim.square.index()] = Some(victim.id);
            self.pieces.insert(victim.id, victim);
        }

        self.cache = undo.cache;
        self.side_to_move = undo.side_to_move;
        self.last_move = undo.last_move;
        self.half_move_clock = undo.half_move_clock;
        self.history.pop_front();
        if let Some(evicted) = undo.evicted {
            self.history.push_back(evicted);
        }

        debug_assert!(self.is_consistent(), "board inconsistent after unmaking {}", mv);
    }

    /// Find the legal move for `side` described by `chosen`
    pub fn find_move(&mut self, side: Color, chosen: ChosenMove) -> EngineResult<Move> {
        self.moves(side, true)
            .into_iter()
            .find(|mv| chosen.matches(mv))
            .ok_or(EngineError::IllegalMove {
                from: chosen.from,
                to: chosen.to,
                side,
            })
    }

    /// Play `chosen` for the side to move permanently (no undo)
    pub fn play_move(&mut self, chosen: ChosenMove) -> EngineResult<Move> {
        let mv = self.find_move(self.side_to_move, chosen)?;
        let _ = self.make_move(mv);
        Ok(mv)
    }

    /// Grid and registry agree, and every cache matches the pieces
    pub fn is_consistent(&self) -> bool {
        for (idx, cell) in self.grid.iter().enumerate() {
            if let Some(id) = cell {
                match self.pieces.get(id) {
                    Some(rec) if rec.square.index() == idx => {}
                    _ => return false,
                }
            }
        }
        if self
            .pieces
            .values()
            .any(|rec| self.grid[rec.square.index()] != Some(rec.id))
        {
            return false;
        }

        for color in [Color::White, Color::Black] {
            let c = color.index();
            let count = |t: Type| self.pieces.values().filter(|p| p.is(color, t)).count() as u8;
            let total = self.pieces.values().filter(|p| p.color == color).count() as u8;
            if total != self.cache.piece_counts[c]
                || count(Type::Knight) != self.cache.knight_counts[c]
                || count(Type::Bishop) != self.cache.bishop_counts[c]
            {
                return false;
            }
            if !self.is_owned_by(self.cache.king_squares[c], color)
                || self.piece_at(self.cache.king_squares[c]).map(|p| p.piece_type) != Some(Type::King)
            {
                return false;
            }
            if self.cache.bishop_counts[c] == 1
                && self.cache.bishop_squares[c] != self.locate_bishop(color)
            {
                return false;
            }
        }
        true
    }

    // ==================== TERMINAL QUERIES ====================

    /// True if any opposing piece attacks `side`'s king
    pub fn is_in_check(&self, side: Color) -> bool {
        self.is_square_attacked(self.king_square(side), side.opposite())
    }

    /// In check with no legal reply
    pub fn is_in_checkmate(&mut self, side: Color) -> bool {
        self.is_in_check(side) && !self.has_legal_move(side)
    }

    /// Drawn for `side`: fifty-move rule, repetition, dead material, or no
    /// legal move while not in check
    pub fn is_in_stalemate(&mut self, side: Color) -> bool {
        self.is_draw_by_rule() || self.is_no_legal_moves_stalemate(side)
    }

    /// The draw conditions that do not depend on whose turn it is
    pub fn is_draw_by_rule(&self) -> bool {
        self.is_fifty_move_draw() || self.is_repetition_draw() || self.is_insufficient_material()
    }

    pub fn is_no_legal_moves_stalemate(&mut self, side: Color) -> bool {
        !self.is_in_check(side) && !self.has_legal_move(side)
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.half_move_clock >= FIFTY_MOVE_PLIES
    }

    /// The last four moves repeat the four before them
    pub fn is_repetition_draw(&self) -> bool {
        if self.half_move_clock < REPETITION_MIN_PLIES || self.history.len() < HISTORY_LEN {
            return false;
        }
        (0..HISTORY_LEN / 2).all(|i| self.history[i].same_squares(&self.history[i + HISTORY_LEN / 2]))
    }

    /// K v K, K v K+minor, and K+B v K+B with bishops on the same color
    pub fn is_insufficient_material(&self) -> bool {
        let c = &self.cache;
        if c.piece_counts[0] > 2 || c.piece_counts[1] > 2 {
            return false;
        }

        // Each side is a lone king or a king plus one minor piece
        let king_and_minor = |i: usize| c.piece_counts[i] == 1 || c.knight_counts[i] + c.bishop_counts[i] == 1;
        if !king_and_minor(0) || !king_and_minor(1) {
            return false;
        }

        let minors = c.knight_counts[0] + c.bishop_counts[0] + c.knight_counts[1] + c.bishop_counts[1];
        match minors {
            0 | 1 => true,
            _ => match (c.bishop_counts, c.bishop_squares) {
                ([1, 1], [Some(a), Some(b)]) => a.is_dark() == b.is_dark(),
                _ => false,
            },
        }
    }

    // ==================== PERFT ====================

    /// Perft (Performance Test) - counts leaf nodes at a given depth
    /// Used to validate move generation correctness
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let side = self.side_to_move;
        let moves = self.moves(side, true);

        // Bulk counting at the frontier
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            let mut child = self.apply(mv);
            nodes += child.perft(depth - 1);
        }
        nodes
    }

    /// Divide - perft count under each root move (debugging tool)
    pub fn divide(&mut self, depth: u32) -> Vec<(Move, u64)> {
        let side = self.side_to_move;
        let moves = self.moves(side, true);
        let mut counts = Vec::with_capacity(moves.len());

        for mv in moves {
            let count = {
                let mut child = self.apply(mv);
                child.perft(depth.saturating_sub(1))
            };
            log::debug!("{}: {}", mv, count);
            counts.push((mv, count));
        }

        counts
    }
}
