//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts for move generation
//! - `movegen.rs` - Generation order and per-piece rules
//! - `apply.rs` - Move application, castling rights and en passant
//! - `attacks.rs` - Attack detection
//! - `rules.rs` - Repetition keys, halfmove clock, mate and stalemate
//! - `edge_cases.rs` - Special positions and parsing edge cases
//! - `eval.rs` - Material and aggressive scoring, move ordering
//! - `search.rs` - Negamax, anti-blunder filter and pruning
//! - `proptest.rs` - Property-based tests

mod apply;
mod rules;

use super::GameState;

/// Parse a FEN known to be valid.
pub(super) fn position(fen: &str) -> (GameState, super::Color) {
    GameState::from_fen(fen).expect("valid fen")
}
