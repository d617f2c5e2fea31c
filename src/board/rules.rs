//! Game-level rule queries the orchestration layer applies between plies.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Color, GameState, Move, Piece};

/// Exact identity of a position for repetition counting.
///
/// Encodes every field that affects legal move generation: all 64 squares,
/// the four castling flags, the en passant target and the side to move.
/// Equal keys mean the positions are indistinguishable.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PositionKey(String);

impl PositionKey {
    #[must_use]
    pub fn new(state: &GameState, side: Color) -> Self {
        let mut key = String::with_capacity(80);
        key.extend(state.board.to_chars());
        key.push('|');
        key.push_str(&state.castling.to_string());
        key.push('|');
        match state.en_passant {
            Some(sq) => key.push_str(&sq.to_string()),
            None => key.push('-'),
        }
        key.push('|');
        key.push(if side == Color::White { 'w' } else { 'b' });
        PositionKey(key)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Halfmove clock after `mv` is played from `state`: reset by any pawn move
/// or capture, otherwise incremented.
#[must_use]
pub fn next_halfmove_clock(clock: u32, state: &GameState, mv: Move) -> u32 {
    let pawn_move = matches!(state.board.piece_at(mv.from()), Some((_, Piece::Pawn)));
    if pawn_move || mv.is_capture() {
        0
    } else {
        clock + 1
    }
}

/// Whether the side to move can continue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Ongoing,
    Checkmate,
    Stalemate,
}

impl GameState {
    /// Classify the position for `side`: no legal moves is checkmate when
    /// its king is attacked, stalemate otherwise.
    #[must_use]
    pub fn status(&self, side: Color) -> Status {
        if !self.legal_moves(side).is_empty() {
            Status::Ongoing
        } else if self.board.is_in_check(side) {
            Status::Checkmate
        } else {
            Status::Stalemate
        }
    }
}
