//! Fixed-depth negamax search with alpha-beta pruning.
//!
//! Features:
//! - Move ordering by a capture/center heuristic (stable sort)
//! - One-ply anti-blunder filter, with an unfiltered re-scan when it rejects every move
//! - Mate scores offset by distance from the root so faster mates win
//!
//! Each node owns the `GameState` values it creates; nothing is undone or shared.

mod filter;
mod move_order;
mod params;

use log::{debug, trace};

use super::{Color, GameState, Move, ScoredMoveList};

pub use filter::{check_blunder, Blunder};
pub use move_order::{
    order_moves, score_move, CAPTURE_BONUS, CENTER_BONUS, CENTER_PAWN_PUSH_BONUS,
    DEFENDED_CAPTURE_PENALTY,
};
pub use params::SearchConfig;

/// Base score for being checkmated (negated, then offset by ply).
pub const MATE_SCORE: i32 = 100_000;

/// Bound outside any reachable score.
pub const INFINITY: i32 = 1_000_000;

/// Counters gathered during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
    /// Moves skipped by the anti-blunder filter
    pub filtered: u64,
    /// Nodes where every move was filtered and the scan was repeated unfiltered
    pub fallbacks: u64,
}

/// Outcome of a root search.
#[derive(Clone, Copy, Debug)]
pub struct SearchResult {
    /// `None` only when the side to move has no legal move
    pub best_move: Option<Move>,
    /// Score of `best_move` from the mover's perspective
    pub score: i32,
    pub stats: SearchStats,
}

/// Runs searches under one configuration and accumulates statistics.
pub struct Searcher {
    config: SearchConfig,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Searcher {
            config,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    fn root_depth(&self) -> u32 {
        self.config.depth.max(1)
    }

    /// Pick a move for `side` at the configured depth.
    pub fn search(&mut self, state: &GameState, side: Color) -> SearchResult {
        self.stats = SearchStats::default();
        let depth = self.root_depth();

        let moves = state.legal_moves(side);
        let Some(first) = moves.first() else {
            return SearchResult {
                best_move: None,
                score: self.no_moves_score(state, side, depth),
                stats: self.stats,
            };
        };

        let ordered = order_moves(state, &moves);
        let (score, best) = self
            .scan_ordered(state, side, depth, -INFINITY, INFINITY, &ordered)
            .unwrap_or((-INFINITY, first));

        debug!(
            "{side} depth {depth}: best {best} score {score} nodes {} cutoffs {} filtered {} fallbacks {}",
            self.stats.nodes, self.stats.cutoffs, self.stats.filtered, self.stats.fallbacks
        );

        SearchResult {
            best_move: Some(best),
            score,
            stats: self.stats,
        }
    }

    /// Score of `state` for `side` searched to `depth`, within `(alpha, beta)`.
    ///
    /// Returns the best achievable score from `side`'s perspective.
    pub fn negamax(
        &mut self,
        state: &GameState,
        side: Color,
        depth: u32,
        alpha: i32,
        beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 {
            return state.aggressive_score(side);
        }

        let moves = state.legal_moves(side);
        if moves.is_empty() {
            return self.no_moves_score(state, side, depth);
        }

        let ordered = order_moves(state, &moves);
        self.scan_ordered(state, side, depth, alpha, beta, &ordered)
            .map_or(-INFINITY, |(score, _)| score)
    }

    /// Filtered scan, repeated without the filter if it rejected every move.
    fn scan_ordered(
        &mut self,
        state: &GameState,
        side: Color,
        depth: u32,
        alpha: i32,
        beta: i32,
        ordered: &ScoredMoveList,
    ) -> Option<(i32, Move)> {
        self.scan(state, side, depth, alpha, beta, ordered, true)
            .or_else(|| {
                self.stats.fallbacks += 1;
                trace!("{side}: every move filtered at depth {depth}, rescanning unfiltered");
                self.scan(state, side, depth, alpha, beta, ordered, false)
            })
    }

    /// Search `ordered` in turn; `None` when the filter skipped every move.
    #[allow(clippy::too_many_arguments)]
    fn scan(
        &mut self,
        state: &GameState,
        side: Color,
        depth: u32,
        mut alpha: i32,
        beta: i32,
        ordered: &ScoredMoveList,
        filtered: bool,
    ) -> Option<(i32, Move)> {
        let mut best: Option<(i32, Move)> = None;

        for mv in ordered.moves() {
            let next = state.apply(mv);
            if filtered {
                if let Some(reason) =
                    check_blunder(state, &next, mv, side, self.config.blunder_threshold)
                {
                    self.stats.filtered += 1;
                    trace!("{side}: skipping {mv} ({reason:?})");
                    continue;
                }
            }

            let score = -self.negamax(&next, side.opponent(), depth - 1, -beta, -alpha);
            if best.map_or(true, |(b, _)| score > b) {
                best = Some((score, mv));
            }
            alpha = alpha.max(score);
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }

    /// Checkmate (offset so nearer mates score lower for the mated side) or stalemate.
    fn no_moves_score(&self, state: &GameState, side: Color, depth: u32) -> i32 {
        if state.board.is_in_check(side) {
            let ply = self.root_depth().saturating_sub(depth) as i32;
            -MATE_SCORE + ply
        } else {
            0
        }
    }
}

/// Best move for `side` from `state` under `config`, or `None` without legal moves.
#[must_use]
pub fn search_best_move(state: &GameState, side: Color, config: SearchConfig) -> Option<Move> {
    Searcher::new(config).search(state, side).best_move
}
