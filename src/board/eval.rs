//! Static scoring: material balance and the aggressive leaf evaluation.

use super::{Board, Color, GameState, Square};

/// Weight of one legal capture available to the side being scored.
pub const CAPTURE_WEIGHT: i32 = 800;

/// Weight of one center square (d4, e4, d5, e5) occupied by the side being scored.
pub const CENTER_WEIGHT: i32 = 120;

impl Board {
    /// White material minus Black material (P=1, N=B=3, R=5, Q=9).
    #[must_use]
    pub fn material_balance(&self) -> i32 {
        self.pieces()
            .map(|(_, color, piece)| color.sign() * piece.material())
            .sum()
    }
}

impl GameState {
    /// Leaf evaluation oriented to `side`: higher is always better for `side`.
    ///
    /// Counts only capture opportunities and center occupancy; there is no
    /// material or king safety term.
    #[must_use]
    pub fn aggressive_score(&self, side: Color) -> i32 {
        let captures = self
            .legal_moves(side)
            .iter()
            .filter(|mv| mv.is_capture())
            .count() as i32;
        let center = Square::CENTER
            .iter()
            .filter(|&&sq| self.board.color_at(sq) == Some(side))
            .count() as i32;
        captures * CAPTURE_WEIGHT + center * CENTER_WEIGHT
    }
}
