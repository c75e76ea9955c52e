pub mod pawn;
pub mod knight;
pub mod bishop;
pub mod rook;
pub mod queen;
pub mod king;

use crate::game_repr::{Color, Move, MoveList, PieceRecord, Position, Square, Type};

pub(crate) const ORTHOGONAL: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub(crate) const DIAGONAL: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const KNIGHT_JUMPS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];
pub(crate) const KING_STEPS: [(i32, i32); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

impl Position {
    /// Moves for every piece `side` owns, in square order, before the
    /// own-king-safety filter. Castling is only produced on request since
    /// its generation already consults enemy attacks.
    pub fn pseudo_moves_into(&self, side: Color, include_castling: bool, moves: &mut MoveList) {
        for sq in Square::all() {
            let piece = match self.piece_at(sq) {
                Some(p) if p.color == side => *p,
                _ => continue,
            };
            match piece.piece_type {
                Type::Pawn => self.pawn_moves_into(&piece, moves),
                Type::Knight => self.knight_moves_into(&piece, moves),
                Type::Bishop => self.bishop_moves_into(&piece, moves),
                Type::Rook => self.rook_moves_into(&piece, moves),
                Type::Queen => self.queen_moves_into(&piece, moves),
                Type::King => {
                    self.king_moves_into(&piece, moves);
                    if include_castling {
                        self.castling_moves_into(&piece, moves);
                    }
                }
            }
        }
    }

    /// All moves for `side`. With `check_legality` the list is filtered to
    /// moves that do not leave `side`'s own king attacked (and includes
    /// castling); without it the raw piece moves are returned.
    ///
    /// Takes `&mut self` because legality is decided by trial application;
    /// the board is unchanged on return.
    pub fn moves(&mut self, side: Color, check_legality: bool) -> MoveList {
        let mut moves = MoveList::new();
        self.pseudo_moves_into(side, check_legality, &mut moves);
        if check_legality {
            moves.retain(|mv| !self.leaves_king_in_check(side, *mv));
        }
        moves
    }

    /// Legal captures and promotions only, for quiescence
    pub fn tactical_moves(&mut self, side: Color) -> MoveList {
        let mut moves = MoveList::new();
        self.pseudo_moves_into(side, false, &mut moves);
        moves.retain(|mv| mv.is_tactical() && !self.leaves_king_in_check(side, *mv));
        moves
    }

    /// Stops at the first legal move instead of building the whole list
    pub fn has_legal_move(&mut self, side: Color) -> bool {
        let mut moves = MoveList::new();
        self.pseudo_moves_into(side, true, &mut moves);
        moves.into_iter().any(|mv| !self.leaves_king_in_check(side, mv))
    }

    fn leaves_king_in_check(&mut self, side: Color, mv: Move) -> bool {
        let after = self.apply(mv);
        after.is_in_check(side)
    }

    /// True if any piece of `by` attacks `sq`, whether or not `sq` is
    /// occupied. Pawns attack their forward diagonals even when empty.
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        let attacker_on = |target: Option<Square>, types: &[Type]| {
            target
                .and_then(|t| self.piece_at(t))
                .map_or(false, |p| p.color == by && types.contains(&p.piece_type))
        };

        // A pawn of `by` sits one rank behind the square, from its point of view
        let behind = -by.forward();
        if attacker_on(sq.offset(-1, behind), &[Type::Pawn])
            || attacker_on(sq.offset(1, behind), &[Type::Pawn])
        {
            return true;
        }

        if KNIGHT_JUMPS
            .iter()
            .any(|&(df, dr)| attacker_on(sq.offset(df, dr), &[Type::Knight]))
        {
            return true;
        }

        if KING_STEPS
            .iter()
            .any(|&(df, dr)| attacker_on(sq.offset(df, dr), &[Type::King]))
        {
            return true;
        }

        let slider_hits = |dirs: &[(i32, i32)], types: &[Type]| {
            dirs.iter().any(|&(df, dr)| {
                let mut cur = sq.offset(df, dr);
                while let Some(s) = cur {
                    if let Some(p) = self.piece_at(s) {
                        return p.color == by && types.contains(&p.piece_type);
                    }
                    cur = s.offset(df, dr);
                }
                false
            })
        };

        slider_hits(&ORTHOGONAL, &[Type::Rook, Type::Queen])
            || slider_hits(&DIAGONAL, &[Type::Bishop, Type::Queen])
    }

    /// Single steps to each offset: empty squares and enemy pieces
    pub(crate) fn step_moves_into(
        &self,
        piece: &PieceRecord,
        offsets: &[(i32, i32)],
        moves: &mut MoveList,
    ) {
        for &(df, dr) in offsets {
            let Some(to) = piece.square.offset(df, dr) else {
                continue;
            };
            match self.piece_at(to) {
                None => moves.push(Move::new(piece.square, to, None)),
                Some(target) if target.color != piece.color => {
                    moves.push(Move::new(piece.square, to, Some(target.piece_type)))
                }
                _ => {}
            }
        }
    }

    /// Rays in each direction up to and including the first enemy piece
    pub(crate) fn slide_moves_into(
        &self,
        piece: &PieceRecord,
        directions: &[(i32, i32)],
        moves: &mut MoveList,
    ) {
        for &(df, dr) in directions {
            let mut cur = piece.square.offset(df, dr);
            while let Some(to) = cur {
                match self.piece_at(to) {
                    None => moves.push(Move::new(piece.square, to, None)),
                    Some(target) => {
                        if target.color != piece.color {
                            moves.push(Move::new(piece.square, to, Some(target.piece_type)));
                        }
                        break;
                    }
                }
                cur = to.offset(df, dr);
            }
        }
    }
}
