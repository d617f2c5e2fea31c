use super::super::attack_tables::king_targets;
use super::super::{Color, GameState, Move, MoveList, Square};

impl GameState {
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for &to in king_targets(from) {
            self.push_step(from, to, color, moves);
        }

        let back_rank = color.back_rank();
        if from != Square(back_rank, 4) {
            return;
        }
        let enemy = color.opponent();
        // Castling is the only generation step that consults the attack detector:
        // start, pass-through and destination must all be safe on the current board.
        let safe = |files: [usize; 3]| {
            files
                .iter()
                .all(|&f| !self.board.is_attacked(Square(back_rank, f), enemy))
        };
        let empty = |files: &[usize]| {
            files
                .iter()
                .all(|&f| self.board.is_empty(Square(back_rank, f)))
        };

        if self.castling.has(color, true) && empty(&[5, 6]) && safe([4, 5, 6]) {
            moves.push(Move::quiet(from, Square(back_rank, 6)));
        }
        if self.castling.has(color, false) && empty(&[3, 2, 1]) && safe([4, 3, 2]) {
            moves.push(Move::quiet(from, Square(back_rank, 2)));
        }
    }
}
