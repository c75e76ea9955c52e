use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// A board coordinate. Both `file` (a..h) and `rank` are 1-based and always
/// within 1..=8; the only way to build one is through the checked
/// constructors, so an off-board `Square` cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    pub fn new(file: i32, rank: i32) -> Option<Square> {
        if (1..=8).contains(&file) && (1..=8).contains(&rank) {
            Some(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// Same as [`Square::new`] but reports the bad coordinates
    pub fn try_new(file: i32, rank: i32) -> Result<Square, EngineError> {
        Square::new(file, rank).ok_or(EngineError::OffBoard { file, rank })
    }

    /// Square from a dense 0..64 index (a1 = 0, h1 = 7, a8 = 56)
    pub fn from_index(idx: usize) -> Square {
        assert!(idx < 64, "square index {} out of range", idx);
        Square {
            file: (idx % 8) as u8 + 1,
            rank: (idx / 8) as u8 + 1,
        }
    }

    #[inline]
    pub fn file(self) -> i32 {
        self.file as i32
    }

    #[inline]
    pub fn rank(self) -> i32 {
        self.rank as i32
    }

    #[inline]
    pub fn index(self) -> usize {
        (self.rank as usize - 1) * 8 + (self.file as usize - 1)
    }

    /// Step by (files, ranks); `None` once the step leaves the board
    #[inline]
    pub fn offset(self, df: i32, dr: i32) -> Option<Square> {
        Square::new(self.file() + df, self.rank() + dr)
    }

    /// True for dark squares (a1 is dark)
    pub fn is_dark(self) -> bool {
        (self.file + self.rank) % 2 == 0
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file_char = (b'a' + self.file - 1) as char;
        write!(f, "{}{}", file_char, self.rank)
    }
}

impl FromStr for Square {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(EngineError::InvalidFen(format!("bad square '{}'", s)));
        }
        let file = bytes[0] as i32 - b'a' as i32 + 1;
        let rank = bytes[1] as i32 - b'0' as i32;
        Square::try_new(file, rank)
    }
}
