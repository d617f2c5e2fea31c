//! Castling rights type.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::piece::Color;

const CASTLE_WHITE_K: u8 = 1 << 0;
const CASTLE_WHITE_Q: u8 = 1 << 1;
const CASTLE_BLACK_K: u8 = 1 << 2;
const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Four independent castling flags (white/black x kingside/queenside) as a bitmask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        self.0 & Self::bit_for(color, kingside) != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, kingside: bool) {
        self.0 |= Self::bit_for(color, kingside);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, kingside: bool) {
        self.0 &= !Self::bit_for(color, kingside);
    }

    /// Remove both rights of one color
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, true);
        self.remove(color, false);
    }

    #[inline]
    const fn bit_for(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, true) => CASTLE_WHITE_K,
            (Color::White, false) => CASTLE_WHITE_Q,
            (Color::Black, true) => CASTLE_BLACK_K,
            (Color::Black, false) => CASTLE_BLACK_Q,
        }
    }
}

/// FEN-style flags, `KQkq` with `-` for each missing right (always four chars).
impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = [
            (Color::White, true, 'K'),
            (Color::White, false, 'Q'),
            (Color::Black, true, 'k'),
            (Color::Black, false, 'q'),
        ];
        for (color, kingside, c) in flags {
            let shown = if self.has(color, kingside) { c } else { '-' };
            write!(f, "{shown}")?;
        }
        Ok(())
    }
}
