//! JSON snapshots polled by the browser viewer.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::RecordError;
use crate::board::{Board, GameState};

pub const BOARD_FILE: &str = "board.json";
pub const GAME_FILE: &str = "game.json";

/// Current position: 64 one-character strings and the en passant index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub board: Vec<char>,
    /// Square index, or -1 when there is no target
    #[serde(rename = "enPassant")]
    pub en_passant: i32,
}

impl BoardSnapshot {
    #[must_use]
    pub fn new(state: &GameState) -> Self {
        BoardSnapshot {
            board: state.board.to_chars().to_vec(),
            en_passant: state.en_passant.map_or(-1, |sq| sq.as_index() as i32),
        }
    }
}

/// Every board of the game so far, initial position first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub positions: Vec<Vec<char>>,
}

impl GameSnapshot {
    #[must_use]
    pub fn new(positions: &[Board]) -> Self {
        GameSnapshot {
            positions: positions.iter().map(|b| b.to_chars().to_vec()).collect(),
        }
    }
}

/// Writes viewer snapshots into one directory.
#[derive(Clone, Debug)]
pub struct ViewerExport {
    dir: PathBuf,
}

impl ViewerExport {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        ViewerExport { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Overwrite `board.json` and `game.json`.
    pub fn write(&self, state: &GameState, positions: &[Board]) -> Result<(), RecordError> {
        fs::create_dir_all(&self.dir).map_err(|e| RecordError::io(&self.dir, e))?;
        self.write_json(BOARD_FILE, &BoardSnapshot::new(state))?;
        self.write_json(GAME_FILE, &GameSnapshot::new(positions))
    }

    fn write_json<T: Serialize>(&self, name: &str, value: &T) -> Result<(), RecordError> {
        let path = self.dir.join(name);
        let json = serde_json::to_string(value)?;
        fs::write(&path, json).map_err(|e| RecordError::io(&path, e))
    }
}
