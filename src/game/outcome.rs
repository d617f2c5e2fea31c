use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Color;

/// Result code recorded in the game record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Draw,
    InProgress,
}

impl GameResult {
    /// Win for the side that delivered mate to `loser`.
    #[must_use]
    pub const fn win_against(loser: Color) -> Self {
        match loser {
            Color::White => GameResult::BlackWins,
            Color::Black => GameResult::WhiteWins,
        }
    }

    /// PGN result token.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw => "1/2-1/2",
            GameResult::InProgress => "*",
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Why the game stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndReason {
    Checkmate,
    Stalemate,
    ThreefoldRepetition,
    FiftyMoveRule,
    /// The safety cap on plies was reached before any terminal condition.
    PlyLimit,
}

/// Terminal signal of a game: result code, reason and the side that was to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub result: GameResult,
    pub reason: EndReason,
    pub side_to_move: Color,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            EndReason::Checkmate => write!(f, "{} is checkmated!", self.side_to_move),
            EndReason::Stalemate => {
                write!(f, "{} has no legal moves (stalemate)!", self.side_to_move)
            }
            EndReason::ThreefoldRepetition => write!(f, "Draw by threefold repetition."),
            EndReason::FiftyMoveRule => write!(f, "Draw by 50-move rule."),
            EndReason::PlyLimit => write!(f, "Ply limit reached, game unfinished."),
        }
    }
}
