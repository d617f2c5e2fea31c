//! Turn driver for a self-played game.
//!
//! `Game` owns the only mutable state of a run: the current position, the
//! side to move, the halfmove clock and the repetition table. The search
//! only ever sees immutable `GameState` values handed to it here.

mod config;
mod outcome;
mod repetition;

use log::{debug, info};

use crate::board::{
    next_halfmove_clock, Board, Color, GameState, Move, PositionKey, Searcher, Status,
};
use crate::record::move_to_san;

pub use config::{GameConfig, DEFAULT_MAX_PLIES, FIFTY_MOVE_PLIES, REPETITION_LIMIT};
pub use outcome::{EndReason, GameOutcome, GameResult};
pub use repetition::RepetitionTable;

/// One committed ply.
#[derive(Clone, Debug)]
pub struct PlyRecord {
    /// 1-based ply number
    pub ply: usize,
    pub side: Color,
    pub mv: Move,
    pub san: String,
    /// Position after the move
    pub state: GameState,
    pub halfmove_clock: u32,
}

/// Result of advancing the game by one step.
#[derive(Clone, Debug)]
pub enum Step {
    Played(PlyRecord),
    Finished(GameOutcome),
}

pub struct Game {
    config: GameConfig,
    searcher: Searcher,
    state: GameState,
    side_to_move: Color,
    halfmove_clock: u32,
    repetitions: RepetitionTable,
    plies: usize,
    san_moves: Vec<String>,
    positions: Vec<Board>,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// A game from the standard initial position, White to move.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Game::from_position(config, GameState::initial(), Color::White)
    }

    /// A game from an arbitrary position. The starting position counts as
    /// its first occurrence.
    #[must_use]
    pub fn from_position(config: GameConfig, state: GameState, side_to_move: Color) -> Self {
        let mut repetitions = RepetitionTable::new();
        repetitions.increment(PositionKey::new(&state, side_to_move));
        Game {
            config,
            searcher: Searcher::new(config.search),
            state,
            side_to_move,
            halfmove_clock: 0,
            repetitions,
            plies: 0,
            san_moves: Vec::new(),
            positions: vec![state.board],
            outcome: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn plies(&self) -> usize {
        self.plies
    }

    #[must_use]
    pub fn repetitions(&self) -> &RepetitionTable {
        &self.repetitions
    }

    /// SAN of every committed move, in order.
    #[must_use]
    pub fn san_moves(&self) -> &[String] {
        &self.san_moves
    }

    /// Board after every ply, starting with the initial board.
    #[must_use]
    pub fn positions(&self) -> &[Board] {
        &self.positions
    }

    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Result code so far: `InProgress` until the game has ended decisively.
    #[must_use]
    pub fn result(&self) -> GameResult {
        self.outcome.map_or(GameResult::InProgress, |o| o.result)
    }

    /// Play one ply, or report how the game ended.
    pub fn step(&mut self) -> Step {
        if let Some(outcome) = self.outcome {
            return Step::Finished(outcome);
        }
        if self.plies >= self.config.max_plies {
            return Step::Finished(self.finish(GameResult::InProgress, EndReason::PlyLimit));
        }

        let side = self.side_to_move;
        let terminal = match self.state.status(side) {
            Status::Checkmate => Some((GameResult::win_against(side), EndReason::Checkmate)),
            Status::Stalemate => Some((GameResult::Draw, EndReason::Stalemate)),
            Status::Ongoing => None,
        };
        if let Some((result, reason)) = terminal {
            return Step::Finished(self.finish(result, reason));
        }

        let Some(mv) = self.searcher.search(&self.state, side).best_move else {
            // status() just reported legal moves, so search always has one.
            return Step::Finished(self.finish(GameResult::Draw, EndReason::Stalemate));
        };

        let san = move_to_san(&self.state, side, mv);
        self.halfmove_clock = next_halfmove_clock(self.halfmove_clock, &self.state, mv);
        self.state = self.state.apply(mv);
        self.side_to_move = side.opponent();
        self.plies += 1;
        self.san_moves.push(san.clone());
        self.positions.push(self.state.board);

        debug!("ply {} {side} plays {san} ({mv})", self.plies);

        let record = PlyRecord {
            ply: self.plies,
            side,
            mv,
            san,
            state: self.state,
            halfmove_clock: self.halfmove_clock,
        };

        let key = PositionKey::new(&self.state, self.side_to_move);
        if self.repetitions.increment(key) >= REPETITION_LIMIT {
            self.finish(GameResult::Draw, EndReason::ThreefoldRepetition);
        } else if self.halfmove_clock >= FIFTY_MOVE_PLIES {
            self.finish(GameResult::Draw, EndReason::FiftyMoveRule);
        }

        Step::Played(record)
    }

    /// Play until the game ends.
    pub fn play(&mut self) -> GameOutcome {
        self.play_with(|_, _| {})
    }

    /// Play until the game ends, calling `on_ply` after every committed ply.
    pub fn play_with<F>(&mut self, mut on_ply: F) -> GameOutcome
    where
        F: FnMut(&Game, &PlyRecord),
    {
        loop {
            match self.step() {
                Step::Played(record) => on_ply(self, &record),
                Step::Finished(outcome) => return outcome,
            }
        }
    }

    fn finish(&mut self, result: GameResult, reason: EndReason) -> GameOutcome {
        let outcome = GameOutcome {
            result,
            reason,
            side_to_move: self.side_to_move,
        };
        if self.outcome.is_none() {
            info!("{outcome} Result {result} after {} plies", self.plies);
            self.outcome = Some(outcome);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SearchConfig;

    fn shallow(max_plies: usize) -> GameConfig {
        GameConfig {
            search: SearchConfig::new(1, -4),
            max_plies,
        }
    }

    #[test]
    fn initial_position_counted_once() {
        let game = Game::new(GameConfig::default());
        let key = PositionKey::new(&GameState::initial(), Color::White);
        assert_eq!(game.repetitions().get(&key), 1);
        assert_eq!(game.positions().len(), 1);
        assert_eq!(game.result(), GameResult::InProgress);
    }

    #[test]
    fn ply_limit_ends_game_in_progress() {
        let mut game = Game::new(shallow(4));
        let outcome = game.play();
        assert_eq!(outcome.reason, EndReason::PlyLimit);
        assert_eq!(outcome.result, GameResult::InProgress);
        assert_eq!(game.plies(), 4);
        assert_eq!(game.san_moves().len(), 4);
        assert_eq!(game.positions().len(), 5);
    }

    #[test]
    fn sides_alternate() {
        let mut game = Game::new(shallow(2));
        let mut sides = Vec::new();
        game.play_with(|_, record| sides.push(record.side));
        assert_eq!(sides, vec![Color::White, Color::Black]);
    }

    #[test]
    fn checkmated_side_loses() {
        // Fool's mate delivered; White to move and mated.
        let (state, side) =
            GameState::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
                .unwrap();
        let mut game = Game::from_position(shallow(10), state, side);
        let outcome = game.play();
        assert_eq!(outcome.reason, EndReason::Checkmate);
        assert_eq!(outcome.result, GameResult::BlackWins);
        assert_eq!(game.plies(), 0);
    }

    #[test]
    fn stalemate_is_draw() {
        let (state, side) = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        let mut game = Game::from_position(shallow(10), state, side);
        let outcome = game.play();
        assert_eq!(outcome.reason, EndReason::Stalemate);
        assert_eq!(outcome.result, GameResult::Draw);
    }

    #[test]
    fn finished_game_stays_finished() {
        let mut game = Game::new(shallow(1));
        let first = game.play();
        assert!(matches!(game.step(), Step::Finished(o) if o == first));
        assert_eq!(game.plies(), 1);
    }

    #[test]
    fn lone_kings_reach_fifty_move_rule_or_repetition() {
        let (state, side) = GameState::from_fen("8/8/8/3k4/8/8/8/K7 w - - 0 1").unwrap();
        let mut game = Game::from_position(shallow(400), state, side);
        let outcome = game.play();
        assert!(matches!(
            outcome.reason,
            EndReason::ThreefoldRepetition | EndReason::FiftyMoveRule
        ));
        assert_eq!(outcome.result, GameResult::Draw);
        assert!(game.plies() <= 100);
    }
}
