use super::super::attack_tables::knight_targets;
use super::super::{Color, GameState, MoveList, Square};

impl GameState {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for &to in knight_targets(from) {
            self.push_step(from, to, color, moves);
        }
    }
}
