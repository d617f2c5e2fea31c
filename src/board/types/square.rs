//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

pub(crate) fn file_to_index(file: char) -> usize {
    file as usize - ('a' as usize)
}

pub(crate) fn rank_to_index(rank: char) -> usize {
    (rank as usize) - ('0' as usize) - 1
}

/// A square on the chess board, represented as (rank, file).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square(pub usize, pub usize); // (rank, file)

impl Square {
    /// d4, e4, d5, e5
    pub const CENTER: [Square; 4] = [Square(3, 3), Square(3, 4), Square(4, 3), Square(4, 4)];

    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square(rank, file))
        } else {
            None
        }
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * 8 + self.1
    }

    /// Create a square from an index (0-63)
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx / 8, idx % 8)
    }

    /// Step by (rank delta, file delta), returning `None` off the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dr: isize, df: isize) -> Option<Self> {
        let r = self.0 as isize + dr;
        let f = self.1 as isize + df;
        if (0..8).contains(&r) && (0..8).contains(&f) {
            Some(Square(r as usize, f as usize))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub fn is_center(self) -> bool {
        Square::CENTER.contains(&self)
    }

    /// Iterate all 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, self.0 + 1)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_index().cmp(&other.as_index())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square(rank, file))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(invalid());
        }
        if !('a'..='h').contains(&chars[0]) || !('1'..='8').contains(&chars[1]) {
            return Err(invalid());
        }
        Ok(Square(rank_to_index(chars[1]), file_to_index(chars[0])))
    }
}
