//! PGN export of a finished (or abandoned) game.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use log::debug;

use super::RecordError;
use crate::board::Color;
use crate::game::GameResult;

/// Seven-tag roster of the exported game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PgnHeaders {
    pub event: String,
    pub site: String,
    /// `YYYY.MM.DD`
    pub date: String,
    pub round: String,
    pub white: String,
    pub black: String,
    pub result: GameResult,
}

impl PgnHeaders {
    /// Default roster dated today (local time).
    #[must_use]
    pub fn today(result: GameResult) -> Self {
        PgnHeaders {
            event: "Friendly Game".to_string(),
            site: "Local".to_string(),
            date: Local::now().format("%Y.%m.%d").to_string(),
            round: "-".to_string(),
            white: "White".to_string(),
            black: "Black".to_string(),
            result,
        }
    }
}

/// Render a complete PGN document.
///
/// `first_mover` is the side that played `moves[0]`; a game starting with
/// Black opens its move text with `1...`.
#[must_use]
pub fn render_pgn(headers: &PgnHeaders, first_mover: Color, moves: &[String]) -> String {
    let mut out = String::new();
    let tags = [
        ("Event", headers.event.as_str()),
        ("Site", headers.site.as_str()),
        ("Date", headers.date.as_str()),
        ("Round", headers.round.as_str()),
        ("White", headers.white.as_str()),
        ("Black", headers.black.as_str()),
        ("Result", headers.result.code()),
    ];
    for (tag, value) in tags {
        let _ = writeln!(out, "[{tag} \"{value}\"]");
    }
    out.push('\n');

    let offset = usize::from(first_mover == Color::Black);
    for (i, san) in moves.iter().enumerate() {
        let ply = i + offset;
        if ply % 2 == 0 {
            let _ = write!(out, "{}. ", ply / 2 + 1);
        } else if i == 0 {
            out.push_str("1... ");
        }
        out.push_str(san);
        out.push(' ');
    }
    out.push_str(headers.result.code());
    out.push('\n');
    out
}

/// First `dir/pgnN.pgn` (N = 1, 2, ...) that does not exist yet.
#[must_use]
pub fn next_pgn_path(dir: &Path) -> PathBuf {
    (1..)
        .map(|n| dir.join(format!("pgn{n}.pgn")))
        .find(|path| !path.exists())
        .unwrap_or_else(|| dir.join("pgn.pgn"))
}

/// Write `pgn` to the next free file in `dir`, creating `dir` if needed.
pub fn write_next_pgn(dir: &Path, pgn: &str) -> Result<PathBuf, RecordError> {
    fs::create_dir_all(dir).map_err(|e| RecordError::io(dir, e))?;
    let path = next_pgn_path(dir);
    fs::write(&path, pgn).map_err(|e| RecordError::io(&path, e))?;
    debug!("wrote {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(result: GameResult) -> PgnHeaders {
        PgnHeaders {
            date: "2024.01.02".to_string(),
            ..PgnHeaders::today(result)
        }
    }

    #[test]
    fn roster_and_move_numbers() {
        let moves: Vec<String> = ["e4", "e5", "Nf3"].iter().map(|s| s.to_string()).collect();
        let pgn = render_pgn(&headers(GameResult::InProgress), Color::White, &moves);
        let expected = "[Event \"Friendly Game\"]\n\
                        [Site \"Local\"]\n\
                        [Date \"2024.01.02\"]\n\
                        [Round \"-\"]\n\
                        [White \"White\"]\n\
                        [Black \"Black\"]\n\
                        [Result \"*\"]\n\
                        \n\
                        1. e4 e5 2. Nf3 *\n";
        assert_eq!(pgn, expected);
    }

    #[test]
    fn black_first_mover() {
        let moves: Vec<String> = ["e5", "Nf3", "Nc6"].iter().map(|s| s.to_string()).collect();
        let pgn = render_pgn(&headers(GameResult::Draw), Color::Black, &moves);
        assert!(pgn.ends_with("1... e5 2. Nf3 Nc6 1/2-1/2\n"));
    }

    #[test]
    fn today_date_shape() {
        let h = PgnHeaders::today(GameResult::WhiteWins);
        assert_eq!(h.date.len(), 10);
        assert_eq!(h.date.as_bytes()[4], b'.');
        assert_eq!(h.date.as_bytes()[7], b'.');
    }
}
