//! Game records: SAN move text, PGN files and viewer snapshots.

mod error;
mod pgn;
mod san;
mod viewer;

pub use error::RecordError;
pub use pgn::{next_pgn_path, render_pgn, write_next_pgn, PgnHeaders};
pub use san::move_to_san;
pub use viewer::{BoardSnapshot, GameSnapshot, ViewerExport, BOARD_FILE, GAME_FILE};
