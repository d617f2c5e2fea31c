use super::super::{Color, GameState, Move, MoveList, Square, PROMOTION_PIECES};

impl GameState {
    /// Pushes, double pushes, diagonal captures, en passant and all four promotions.
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();
        let promotion_rank = color.pawn_promotion_rank();

        if let Some(forward) = from.offset(dir, 0) {
            if self.board.is_empty(forward) {
                if forward.rank() == promotion_rank {
                    push_promotions(moves, from, forward, false);
                } else {
                    moves.push(Move::quiet(from, forward));
                }
                if from.rank() == color.pawn_start_rank() {
                    if let Some(double) = from.offset(2 * dir, 0) {
                        if self.board.is_empty(double) {
                            moves.push(Move::quiet(from, double));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset(dir, df) else {
                continue;
            };
            if self.board.color_at(target) == Some(color.opponent()) {
                if target.rank() == promotion_rank {
                    push_promotions(moves, from, target, true);
                } else {
                    moves.push(Move::capture(from, target));
                }
            }
            if self.en_passant == Some(target) {
                moves.push(Move::capture(from, target));
            }
        }
    }
}

fn push_promotions(moves: &mut MoveList, from: Square, to: Square, capture: bool) {
    for piece in PROMOTION_PIECES {
        moves.push(Move::promotion_to(from, to, capture, piece));
    }
}
