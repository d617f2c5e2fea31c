//! Move types and move lists.

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;

/// A move relative to the `GameState` it was generated from.
///
/// Carries no board snapshot: the moving piece, castling and en passant are
/// all recovered from the state the move is applied to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub(crate) from: Square,
    pub(crate) to: Square,
    pub(crate) capture: bool,
    pub(crate) promotion: Option<Piece>,
}

impl Move {
    /// Create a quiet move (no capture, no promotion)
    #[inline]
    #[must_use]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            capture: false,
            promotion: None,
        }
    }

    /// Create a capture move (en passant captures included)
    #[inline]
    #[must_use]
    pub const fn capture(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            capture: true,
            promotion: None,
        }
    }

    /// Create a promotion, capturing or not
    #[inline]
    #[must_use]
    pub const fn promotion_to(from: Square, to: Square, capture: bool, piece: Piece) -> Self {
        Move {
            from,
            to,
            capture,
            promotion: Some(piece),
        }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.capture
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        self.promotion
    }

    /// Number of ranks travelled, ignoring direction
    #[inline]
    #[must_use]
    pub(crate) fn rank_distance(self) -> usize {
        self.from.rank().abs_diff(self.to.rank())
    }

    /// Number of files travelled, ignoring direction
    #[inline]
    #[must_use]
    pub(crate) fn file_distance(self) -> usize {
        self.from.file().abs_diff(self.to.file())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if self.capture {
            write!(f, " cap")?;
        }
        write!(f, ")")
    }
}

/// Coordinate notation, e.g. `e2e4` or `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

pub(crate) const MAX_MOVES: usize = 256;

const EMPTY_MOVE: Move = Move::quiet(Square(0, 0), Square(0, 0));

/// List of moves with fixed-size backing array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        if idx < self.len {
            Some(self.moves[idx])
        } else {
            None
        }
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.get(0)
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.as_slice().contains(mv)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}

/// A scored move for move ordering.
#[derive(Clone, Copy, Debug)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: i32,
}

/// Fixed-size list of scored moves to avoid heap allocation.
#[derive(Clone, Debug)]
pub struct ScoredMoveList {
    moves: [ScoredMove; MAX_MOVES],
    len: usize,
}

impl ScoredMoveList {
    /// Create a new empty scored move list.
    #[must_use]
    pub fn new() -> Self {
        ScoredMoveList {
            moves: [ScoredMove {
                mv: EMPTY_MOVE,
                score: 0,
            }; MAX_MOVES],
            len: 0,
        }
    }

    /// Add a scored move to the list.
    #[inline]
    pub fn push(&mut self, mv: Move, score: i32) {
        self.moves[self.len] = ScoredMove { mv, score };
        self.len += 1;
    }

    /// Get the number of moves in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get a slice of the scored moves.
    #[must_use]
    pub fn as_slice(&self) -> &[ScoredMove] {
        &self.moves[..self.len]
    }

    /// Sort moves by score in descending order. Equal scores keep their
    /// insertion order (`sort_by` is stable).
    pub fn sort_by_score_desc(&mut self) {
        self.moves[..self.len].sort_by(|a, b| b.score.cmp(&a.score));
    }

    /// Iterate over the moves alone, in list order.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.as_slice().iter().map(|s| s.mv)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredMove> {
        self.as_slice().iter()
    }
}

impl Default for ScoredMoveList {
    fn default() -> Self {
        ScoredMoveList::new()
    }
}
