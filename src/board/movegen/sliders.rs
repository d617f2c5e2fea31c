use super::super::{Color, GameState, Move, MoveList, Square};

impl GameState {
    /// Walk each ray until the edge or the first piece; an enemy piece is
    /// captured and ends the ray.
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        color: Color,
        rays: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        for &(df, dr) in rays {
            let mut cur = from.offset(dr, df);
            while let Some(to) = cur {
                match self.board.color_at(to) {
                    None => moves.push(Move::quiet(from, to)),
                    Some(occupant) => {
                        if occupant != color {
                            moves.push(Move::capture(from, to));
                        }
                        break;
                    }
                }
                cur = to.offset(dr, df);
            }
        }
    }
}
