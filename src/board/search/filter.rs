//! One-ply look-ahead blunder check.

use super::super::{Color, GameState, Move};

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blunder {
    /// The move itself changes material against the mover by at least the threshold.
    MaterialLoss,
    /// The opponent has a legal capture back on the destination square that
    /// leaves the mover down by at least the threshold.
    Recapture,
}

/// Check `mv` (already applied as `next`) against the anti-blunder rules.
///
/// Swings are measured from `state`, before the move, in whole pawns from
/// `side`'s point of view; a swing `<= threshold` rejects the move.
#[must_use]
pub fn check_blunder(
    state: &GameState,
    next: &GameState,
    mv: Move,
    side: Color,
    threshold: i32,
) -> Option<Blunder> {
    let before = state.board.material_balance();
    let swing = |after: &GameState| side.sign() * (after.board.material_balance() - before);

    if swing(next) <= threshold {
        return Some(Blunder::MaterialLoss);
    }

    let recaptured = next
        .legal_moves(side.opponent())
        .iter()
        .filter(|reply| reply.is_capture() && reply.to() == mv.to())
        .any(|reply| swing(&next.apply(*reply)) <= threshold);
    recaptured.then_some(Blunder::Recapture)
}
