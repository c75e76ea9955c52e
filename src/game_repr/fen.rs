use super::*;
use crate::error::{EngineError, EngineResult};

impl Position {
    /// Load a position from FEN.
    ///
    /// Piece ids are assigned in reading order starting at 1. Castling
    /// rights become the moved flags of the king and corner rooks, a pawn
    /// is unmoved only on its starting rank, and an en passant square is
    /// turned back into the double push that produced it.
    pub fn from_fen(fen: &str) -> EngineResult<Position> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() < 2 {
            return Err(EngineError::InvalidFen(format!(
                "expected at least 2 fields, got {}",
                fields.len()
            )));
        }

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(EngineError::InvalidFen(format!(
                    "bad side to move '{}'",
                    other
                )))
            }
        };
        let castling = fields.get(2).copied().unwrap_or("-");
        if !castling.chars().all(|c| "KQkq-".contains(c)) {
            return Err(EngineError::InvalidFen(format!(
                "bad castling field '{}'",
                castling
            )));
        }

        let mut records = parse_placement(fields[0])?;
        for rec in records.iter_mut() {
            rec.has_moved = !starts_unmoved(rec, castling);
        }

        let mut recent = Vec::new();
        if let Some(&ep) = fields.get(3).filter(|f| **f != "-") {
            let target: Square = ep.parse()?;
            let mover = side_to_move.opposite();
            let from = target.offset(0, -mover.forward());
            let to = target.offset(0, mover.forward());
            let pushed = to.and_then(|sq| records.iter().find(|r| r.square == sq));
            match (from, to, pushed) {
                (Some(from), Some(to), Some(p)) if p.is(mover, Type::Pawn) => {
                    recent.push(Move::new(from, to, None))
                }
                _ => {
                    return Err(EngineError::InvalidFen(format!(
                        "no pawn behind en passant square {}",
                        ep
                    )))
                }
            }
        }

        let half_move_clock = match fields.get(4) {
            Some(f) => f
                .parse::<u16>()
                .map_err(|_| EngineError::InvalidFen(format!("bad half-move clock '{}'", f)))?,
            None => 0,
        };

        Position::from_records(records, side_to_move, half_move_clock, &recent)
    }

    /// FEN for this position. Castling rights are read back from the moved
    /// flags; the full-move number is not tracked and is always 1.
    pub fn to_fen(&self) -> String {
        let mut placement = String::new();
        for rank in (1..=8).rev() {
            let mut empty = 0;
            for file in 1..=8 {
                let piece = Square::new(file, rank).and_then(|sq| self.piece_at(sq));
                match piece {
                    Some(p) => {
                        if empty > 0 {
                            placement.push_str(&empty.to_string());
                            empty = 0;
                        }
                        placement.push(p.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                placement.push_str(&empty.to_string());
            }
            if rank > 1 {
                placement.push('/');
            }
        }

        let side = match self.side_to_move() {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling = String::new();
        for (color, letters) in [(Color::White, ['K', 'Q']), (Color::Black, ['k', 'q'])] {
            for (rook_file, letter) in [(8, letters[0]), (1, letters[1])] {
                if self.has_castling_right(color, rook_file) {
                    castling.push(letter);
                }
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let en_passant = self
            .last_move()
            .filter(|mv| {
                (mv.to.rank() - mv.from.rank()).abs() == 2
                    && self.piece_at(mv.to).map(|p| p.piece_type) == Some(Type::Pawn)
            })
            .and_then(|mv| Square::new(mv.to.file(), (mv.to.rank() + mv.from.rank()) / 2))
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} 1",
            placement,
            side,
            castling,
            en_passant,
            self.half_move_clock()
        )
    }

    fn has_castling_right(&self, color: Color, rook_file: i32) -> bool {
        let rank = color.back_rank();
        let unmoved = |file: i32, t: Type| {
            Square::new(file, rank)
                .and_then(|sq| self.piece_at(sq))
                .map_or(false, |p| p.is(color, t) && !p.has_moved)
        };
        unmoved(5, Type::King) && unmoved(rook_file, Type::Rook)
    }
}

fn parse_placement(placement: &str) -> EngineResult<Vec<PieceRecord>> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(EngineError::InvalidFen(format!(
            "expected 8 ranks, got {}",
            ranks.len()
        )));
    }

    let mut records = Vec::new();
    let mut next_id = 1;
    for (i, row) in ranks.iter().enumerate() {
        let rank = 8 - i as i32;
        let mut file = 1;
        for c in row.chars() {
            if let Some(skip) = c.to_digit(10) {
                file += skip as i32;
                continue;
            }
            let piece_type = Type::from_char(c)
                .ok_or_else(|| EngineError::InvalidFen(format!("bad piece '{}'", c)))?;
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            records.push(PieceRecord {
                id: PieceId(next_id),
                color,
                piece_type,
                square: Square::new(file, rank).ok_or_else(|| {
                    EngineError::InvalidFen(format!("rank {} is longer than 8 squares", rank))
                })?,
                has_moved: false,
            });
            next_id += 1;
            file += 1;
        }
        if file != 9 {
            return Err(EngineError::InvalidFen(format!(
                "rank {} does not cover 8 squares",
                rank
            )));
        }
    }

    Ok(records)
}

/// Whether a freshly parsed piece has never moved, given the castling field
fn starts_unmoved(rec: &PieceRecord, castling: &str) -> bool {
    let (king_side, queen_side) = match rec.color {
        Color::White => ('K', 'Q'),
        Color::Black => ('k', 'q'),
    };
    let home = rec.square.rank() == rec.color.back_rank();
    match rec.piece_type {
        Type::King => {
            home && rec.square.file() == 5
                && (castling.contains(king_side) || castling.contains(queen_side))
        }
        Type::Rook => {
            home && ((rec.square.file() == 8 && castling.contains(king_side))
                || (rec.square.file() == 1 && castling.contains(queen_side)))
        }
        Type::Pawn => rec.square.rank() == rec.color.back_rank() + rec.color.forward(),
        _ => true,
    }
}
