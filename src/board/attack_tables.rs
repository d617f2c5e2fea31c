//! Precomputed step targets for knights and kings, plus slider directions.
//!
//! Target lists keep the offset order below; move generation emits moves in
//! that order, which the stable move ordering relies on for tie-breaking.

use once_cell::sync::Lazy;

use super::Square;

/// (file delta, rank delta)
const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Diagonal rays as (file delta, rank delta)
pub(crate) const DIAGONALS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Orthogonal rays as (file delta, rank delta)
pub(crate) const ORTHOGONALS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

fn step_targets(deltas: &[(isize, isize)]) -> Vec<Vec<Square>> {
    Square::all()
        .map(|sq| {
            deltas
                .iter()
                .filter_map(|&(df, dr)| sq.offset(dr, df))
                .collect()
        })
        .collect()
}

pub(crate) static KNIGHT_TARGETS: Lazy<Vec<Vec<Square>>> =
    Lazy::new(|| step_targets(&KNIGHT_DELTAS));

pub(crate) static KING_TARGETS: Lazy<Vec<Vec<Square>>> = Lazy::new(|| {
    let mut deltas = Vec::with_capacity(8);
    for df in -1..=1 {
        for dr in -1..=1 {
            if df != 0 || dr != 0 {
                deltas.push((df, dr));
            }
        }
    }
    step_targets(&deltas)
});

#[inline]
pub(crate) fn knight_targets(sq: Square) -> &'static [Square] {
    &KNIGHT_TARGETS[sq.as_index()]
}

#[inline]
pub(crate) fn king_targets(sq: Square) -> &'static [Square] {
    &KING_TARGETS[sq.as_index()]
}
