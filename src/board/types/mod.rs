//! Core chess types.
//!
//! This module contains the fundamental value types used throughout the engine:
//! - `Piece` and `Color` - the tagged piece variant and side
//! - `Square` - (rank, file) board coordinate
//! - `Move` and `MoveList` - move representation
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{Move, MoveList, ScoredMove, ScoredMoveList};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
pub(crate) use square::{file_to_index, rank_to_index};
