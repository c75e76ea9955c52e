use std::fmt;

use smallvec::SmallVec;

use super::{Square, Type};

/// Move list used throughout generation and search
pub type MoveList = SmallVec<[Move; 64]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialMove {
    None,
    EnPassant,
    Castle,
    Promotion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Type of the piece taken by this move, `None` for quiet moves
    pub captured: Option<Type>,
    /// Only meaningful for `SpecialMove::Promotion`; Queen otherwise
    pub promotion: Type,
    pub special: SpecialMove,
}

impl Move {
    pub fn new(from: Square, to: Square, captured: Option<Type>) -> Move {
        Move {
            from,
            to,
            captured,
            promotion: Type::Queen,
            special: SpecialMove::None,
        }
    }

    pub fn promotion(from: Square, to: Square, captured: Option<Type>, promotion: Type) -> Move {
        Move {
            from,
            to,
            captured,
            promotion,
            special: SpecialMove::Promotion,
        }
    }

    pub fn en_passant(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            captured: Some(Type::Pawn),
            promotion: Type::Queen,
            special: SpecialMove::EnPassant,
        }
    }

    pub fn castle(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            captured: None,
            promotion: Type::Queen,
            special: SpecialMove::Castle,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.special == SpecialMove::Promotion
    }

    /// Captures and promotions, the moves quiescence keeps searching
    #[inline]
    pub fn is_tactical(&self) -> bool {
        self.is_capture() || self.is_promotion()
    }

    /// Same origin and destination; what the repetition window compares
    #[inline]
    pub fn same_squares(&self, other: &Move) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if self.is_promotion() {
            write!(f, "{}", self.promotion.to_char())?;
        }
        Ok(())
    }
}

/// The move handed back to the session layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChosenMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Type,
}

impl From<Move> for ChosenMove {
    fn from(mv: Move) -> Self {
        ChosenMove {
            from: mv.from,
            to: mv.to,
            promotion: mv.promotion,
        }
    }
}

impl ChosenMove {
    /// Whether `mv` is the move this describes (promotion type only matters
    /// for promotions)
    pub fn matches(&self, mv: &Move) -> bool {
        mv.from == self.from
            && mv.to == self.to
            && (!mv.is_promotion() || mv.promotion == self.promotion)
    }

    /// The promotion piece when it is anything but the default queen
    pub fn underpromotion(&self) -> Option<Type> {
        (self.promotion != Type::Queen).then_some(self.promotion)
    }
}

/// Long algebraic; the promotion letter is only written for underpromotions
/// since a `ChosenMove` does not know whether it promotes at all
impl fmt::Display for ChosenMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(piece) = self.underpromotion() {
            write!(f, "{}", piece.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_long_algebraic() {
        assert_eq!(Move::new(sq("e2"), sq("e4"), None).to_string(), "e2e4");
        let promo = Move::promotion(sq("b7"), sq("a8"), Some(Type::Rook), Type::Knight);
        assert_eq!(promo.to_string(), "b7a8n");
    }

    #[test]
    fn test_tactical_classification() {
        assert!(!Move::new(sq("g1"), sq("f3"), None).is_tactical());
        assert!(Move::new(sq("g1"), sq("f3"), Some(Type::Pawn)).is_tactical());
        assert!(Move::en_passant(sq("e5"), sq("d6")).is_tactical());
        assert!(Move::promotion(sq("e7"), sq("e8"), None, Type::Queen).is_tactical());
        assert!(!Move::castle(sq("e1"), sq("g1")).is_tactical());
    }

    #[test]
    fn test_chosen_move_matches_promotion_type() {
        let under = Move::promotion(sq("e7"), sq("e8"), None, Type::Knight);
        let chosen = ChosenMove {
            from: sq("e7"),
            to: sq("e8"),
            promotion: Type::Queen,
        };
        assert!(!chosen.matches(&under));
        assert!(ChosenMove::from(under).matches(&under));
        // Promotion type is ignored for ordinary moves
        assert!(ChosenMove {
            from: sq("e2"),
            to: sq("e4"),
            promotion: Type::Rook
        }
        .matches(&Move::new(sq("e2"), sq("e4"), None)));
    }

    #[test]
    fn test_chosen_move_display_keeps_underpromotion() {
        let knight = ChosenMove::from(Move::promotion(sq("e7"), sq("e8"), None, Type::Knight));
        assert_eq!(knight.to_string(), "e7e8n");

        let queen = ChosenMove::from(Move::promotion(sq("e7"), sq("e8"), None, Type::Queen));
        assert_eq!(queen.to_string(), "e7e8");
        assert_eq!(ChosenMove::from(Move::new(sq("e2"), sq("e4"), None)).to_string(), "e2e4");
    }
}
