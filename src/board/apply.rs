//! Move application: state in, new state out.

use super::{Color, GameState, Move, Piece, Square};

/// Home squares whose vacating or capture revokes castling rights:
/// (square, color, kingside). The king square revokes both sides.
const ROOK_HOMES: [(Square, Color, bool); 4] = [
    (Square(0, 0), Color::White, false),
    (Square(0, 7), Color::White, true),
    (Square(7, 0), Color::Black, false),
    (Square(7, 7), Color::Black, true),
];

const KING_HOMES: [(Square, Color); 2] = [(Square(0, 4), Color::White), (Square(7, 4), Color::Black)];

impl GameState {
    /// Produce the state reached by playing `mv`.
    ///
    /// Total for any move generated from this exact state. A move from an
    /// empty square only clears the en passant target.
    #[must_use]
    pub fn apply(&self, mv: Move) -> GameState {
        let mut next = *self;
        next.en_passant = None;

        let Some((color, piece)) = self.board.piece_at(mv.from) else {
            return next;
        };

        if piece == Piece::Pawn && mv.capture && Some(mv.to) == self.en_passant {
            // The captured pawn sits one rank behind the target, on the capturer's side of it.
            if let Some(victim) = mv.to.offset(-color.pawn_direction(), 0) {
                next.board.clear(victim);
            }
        }

        next.board.set(mv.to, color, mv.promotion.unwrap_or(piece));
        next.board.clear(mv.from);

        if piece == Piece::Pawn && mv.rank_distance() == 2 {
            next.en_passant = mv.from.offset(color.pawn_direction(), 0);
        }

        if piece == Piece::King && mv.file_distance() == 2 {
            let rank = mv.from.rank();
            let (rook_from, rook_to) = if mv.to.file() == 6 {
                (Square(rank, 7), Square(rank, 5))
            } else {
                (Square(rank, 0), Square(rank, 3))
            };
            next.board.clear(rook_from);
            next.board.set(rook_to, color, Piece::Rook);
            next.castling.remove_color(color);
        }

        for (home, owner) in KING_HOMES {
            if mv.from == home || mv.to == home {
                next.castling.remove_color(owner);
            }
        }
        for (home, owner, kingside) in ROOK_HOMES {
            if mv.from == home || mv.to == home {
                next.castling.remove(owner, kingside);
            }
        }

        next
    }
}
