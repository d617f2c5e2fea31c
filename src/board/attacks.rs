//! Attack detection and king lookup.

use super::attack_tables::{king_targets, knight_targets, DIAGONALS, ORTHOGONALS};
use super::{Board, Color, Piece, Square};

impl Board {
    /// Is `square` attacked by any piece of `by`?
    ///
    /// Pure query over this board; pass the post-move board when checking
    /// legality. Short-circuits on the first attacker found.
    #[must_use]
    pub fn is_attacked(&self, square: Square, by: Color) -> bool {
        // A pawn of `by` attacks from one rank behind, relative to its direction.
        let behind = -by.pawn_direction();
        for df in [-1, 1] {
            if let Some(from) = square.offset(behind, df) {
                if self.has(from, by, Piece::Pawn) {
                    return true;
                }
            }
        }

        if knight_targets(square)
            .iter()
            .any(|&from| self.has(from, by, Piece::Knight))
        {
            return true;
        }

        if self.ray_hits(square, by, &ORTHOGONALS, Piece::Rook) {
            return true;
        }
        if self.ray_hits(square, by, &DIAGONALS, Piece::Bishop) {
            return true;
        }

        king_targets(square)
            .iter()
            .any(|&from| self.has(from, by, Piece::King))
    }

    /// Scan each ray outward until the first occupied square; hit if it is
    /// `by`'s `slider` or queen.
    fn ray_hits(&self, square: Square, by: Color, rays: &[(isize, isize)], slider: Piece) -> bool {
        for &(df, dr) in rays {
            let mut cur = square.offset(dr, df);
            while let Some(sq) = cur {
                if let Some((color, piece)) = self.piece_at(sq) {
                    if color == by && (piece == slider || piece == Piece::Queen) {
                        return true;
                    }
                    break;
                }
                cur = sq.offset(dr, df);
            }
        }
        false
    }

    /// Lowest-indexed square holding `color`'s king, if any.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.has(sq, color, Piece::King))
    }

    /// Is `color`'s king attacked? A board without that king is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|king| self.is_attacked(king, color.opponent()))
    }
}
