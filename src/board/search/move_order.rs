//! Move ordering heuristic. Only sorts; never prunes.

use super::super::{GameState, Move, MoveList, Piece, ScoredMoveList};

pub const CAPTURE_BONUS: i32 = 20_000;
/// Taken back off a capture whose destination is still attacked afterwards.
pub const DEFENDED_CAPTURE_PENALTY: i32 = 15_000;
pub const CENTER_BONUS: i32 = 500;
/// Pawn double push on the c, d or e file.
pub const CENTER_PAWN_PUSH_BONUS: i32 = 5_000;

/// Ordering score for `mv` in `state`; higher is searched first.
#[must_use]
pub fn score_move(state: &GameState, mv: Move) -> i32 {
    let mover = state.board.piece_at(mv.from());
    let mut score = 0;

    if mv.is_capture() {
        score += CAPTURE_BONUS;
        if let Some((color, _)) = mover {
            let after = state.apply(mv);
            if after.board.is_attacked(mv.to(), color.opponent()) {
                score -= DEFENDED_CAPTURE_PENALTY;
            }
        }
    }

    if mv.to().is_center() {
        score += CENTER_BONUS;
    }

    let double_push = mv.rank_distance() == 2 && mv.file_distance() == 0;
    if double_push
        && matches!(mover, Some((_, Piece::Pawn)))
        && (2..=4).contains(&mv.from().file())
    {
        score += CENTER_PAWN_PUSH_BONUS;
    }

    score
}

/// Score every move and sort descending. Ties keep generation order.
#[must_use]
pub fn order_moves(state: &GameState, moves: &MoveList) -> ScoredMoveList {
    let mut scored = ScoredMoveList::new();
    for mv in moves {
        scored.push(*mv, score_move(state, *mv));
    }
    scored.sort_by_score_desc();
    scored
}
