//! Standard Algebraic Notation for committed moves.
//!
//! Examples: "e4", "Nf3", "Rad1", "exd6", "e8=Q#", "O-O-O".

use crate::board::{Color, GameState, Move, Piece};

/// Format `mv`, played by `side` from `state`, in SAN.
///
/// `mv` must be legal in `state`; the check suffix is computed by playing it.
#[must_use]
pub fn move_to_san(state: &GameState, side: Color, mv: Move) -> String {
    let mut san = String::new();
    let piece = state.board.piece_at(mv.from()).map(|(_, p)| p);

    match piece {
        Some(Piece::King) if mv.from().file().abs_diff(mv.to().file()) == 2 => {
            san.push_str(if mv.to().file() == 6 { "O-O" } else { "O-O-O" });
        }
        Some(Piece::Pawn) | None => {
            if mv.is_capture() {
                san.push(file_char(mv.from().file()));
                san.push('x');
            }
            san.push_str(&mv.to().to_string());
            if let Some(promo) = mv.promotion() {
                san.push('=');
                san.push(promo.to_char().to_ascii_uppercase());
            }
        }
        Some(p) => {
            san.push(p.to_char().to_ascii_uppercase());
            let (needs_file, needs_rank) = needs_disambiguation(state, side, mv, p);
            if needs_file {
                san.push(file_char(mv.from().file()));
            }
            if needs_rank {
                san.push(rank_char(mv.from().rank()));
            }
            if mv.is_capture() {
                san.push('x');
            }
            san.push_str(&mv.to().to_string());
        }
    }

    let next = state.apply(mv);
    let opponent = side.opponent();
    if next.board.is_in_check(opponent) {
        san.push(if next.legal_moves(opponent).is_empty() {
            '#'
        } else {
            '+'
        });
    }

    san
}

/// Returns (`needs_file`, `needs_rank`).
fn needs_disambiguation(state: &GameState, side: Color, mv: Move, piece: Piece) -> (bool, bool) {
    let rivals: Vec<Move> = state
        .legal_moves(side)
        .iter()
        .copied()
        .filter(|m| {
            m.to() == mv.to()
                && m.from() != mv.from()
                && state.board.has(m.from(), side, piece)
        })
        .collect();

    if rivals.is_empty() {
        return (false, false);
    }

    let same_file = rivals.iter().any(|m| m.from().file() == mv.from().file());
    let same_rank = rivals.iter().any(|m| m.from().rank() == mv.from().rank());

    match (same_file, same_rank) {
        (false, _) => (true, false),
        (true, false) => (false, true),
        (true, true) => (true, true),
    }
}

fn file_char(file: usize) -> char {
    (b'a' + file as u8) as char
}

fn rank_char(rank: usize) -> char {
    (b'1' + rank as u8) as char
}
