use crate::board::SearchConfig;

/// Plies after which an undecided game is abandoned.
pub const DEFAULT_MAX_PLIES: usize = 1000;

/// Halfmove clock value that ends the game (50 moves by each side).
pub const FIFTY_MOVE_PLIES: u32 = 100;

/// Repetition count that ends the game.
pub const REPETITION_LIMIT: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub search: SearchConfig,
    pub max_plies: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            search: SearchConfig::default(),
            max_plies: DEFAULT_MAX_PLIES,
        }
    }
}
