//! Chess rules and search core.
//!
//! A position is a `GameState` value (64-square `Board`, castling rights,
//! en passant target); the side to move is passed alongside it. Every
//! transition returns a new state, so search branches never share data.
//!
//! # Example
//! ```
//! use selfplay_chess::board::{search_best_move, Color, GameState, SearchConfig};
//!
//! let state = GameState::initial();
//! assert_eq!(state.legal_moves(Color::White).len(), 20);
//!
//! let mv = search_best_move(&state, Color::White, SearchConfig::new(1, -4)).unwrap();
//! let next = state.apply(mv);
//! assert!(!next.board.is_in_check(Color::White));
//! ```

mod apply;
mod attack_tables;
mod attacks;
mod error;
mod eval;
mod fen;
mod movegen;
mod rules;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError, SquareError};
pub use eval::{CAPTURE_WEIGHT, CENTER_WEIGHT};
pub use rules::{next_halfmove_clock, PositionKey, Status};
pub use state::{Board, GameState};
pub use types::{CastlingRights, Color, Move, MoveList, Piece, ScoredMove, ScoredMoveList, Square};

pub use search::{
    check_blunder, order_moves, score_move, search_best_move, Blunder, SearchConfig, SearchResult,
    SearchStats, Searcher, CAPTURE_BONUS, CENTER_BONUS, CENTER_PAWN_PUSH_BONUS,
    DEFENDED_CAPTURE_PENALTY, INFINITY, MATE_SCORE,
};

pub(crate) use types::{file_to_index, rank_to_index, PROMOTION_PIECES};
