//! Self-playing chess engine.
//!
//! - [`board`]: position model, move generation, evaluation and search
//! - [`game`]: the turn loop with repetition, 50-move and mate detection
//! - [`record`]: SAN, PGN export and JSON snapshots for the browser viewer

pub mod board;
pub mod game;
pub mod record;

pub use board::{Board, Color, GameState, Move, Piece, SearchConfig, Square};
pub use game::{Game, GameConfig, GameOutcome, GameResult};
