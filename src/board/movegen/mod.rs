//! Pseudo-legal and legal move generation.
//!
//! Generation order is fixed: every pawn move first (squares scanned a1..h8),
//! then every other piece in the same square order. Search ordering is a
//! stable sort, so this order decides ties.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attack_tables::{DIAGONALS, ORTHOGONALS};
use super::{Color, GameState, Move, MoveList, Piece, Square};

const QUEEN_RAYS: [(isize, isize); 8] = [
    DIAGONALS[0],
    DIAGONALS[1],
    DIAGONALS[2],
    DIAGONALS[3],
    ORTHOGONALS[0],
    ORTHOGONALS[1],
    ORTHOGONALS[2],
    ORTHOGONALS[3],
];

impl GameState {
    /// Moves obeying piece movement rules for `side`, not yet checked for
    /// leaving the mover's king attacked. Castling candidates are already
    /// filtered for rights, empty path and unattacked king squares.
    #[must_use]
    pub fn pseudo_legal_moves(&self, side: Color) -> MoveList {
        let mut moves = MoveList::new();

        for (from, color, piece) in self.board.pieces() {
            if color == side && piece == Piece::Pawn {
                self.generate_pawn_moves(from, side, &mut moves);
            }
        }

        for (from, color, piece) in self.board.pieces() {
            if color != side {
                continue;
            }
            match piece {
                Piece::Pawn => {}
                Piece::Knight => self.generate_knight_moves(from, side, &mut moves),
                Piece::Bishop => self.generate_sliding_moves(from, side, &DIAGONALS, &mut moves),
                Piece::Rook => self.generate_sliding_moves(from, side, &ORTHOGONALS, &mut moves),
                Piece::Queen => self.generate_sliding_moves(from, side, &QUEEN_RAYS, &mut moves),
                Piece::King => self.generate_king_moves(from, side, &mut moves),
            }
        }

        moves
    }

    /// Pseudo-legal moves that do not leave `side`'s king attacked.
    ///
    /// A move whose resulting board has no `side` king is dropped, so a
    /// kingless side has no legal moves.
    #[must_use]
    pub fn legal_moves(&self, side: Color) -> MoveList {
        let mut legal = MoveList::new();
        for mv in self.pseudo_legal_moves(side).iter() {
            let next = self.apply(*mv);
            let Some(king) = next.board.find_king(side) else {
                continue;
            };
            if !next.board.is_attacked(king, side.opponent()) {
                legal.push(*mv);
            }
        }
        legal
    }

    /// Single-step target for knights and kings: empty square or enemy piece.
    pub(crate) fn push_step(&self, from: Square, to: Square, color: Color, moves: &mut MoveList) {
        match self.board.color_at(to) {
            None => moves.push(Move::quiet(from, to)),
            Some(occupant) if occupant != color => moves.push(Move::capture(from, to)),
            Some(_) => {}
        }
    }

    /// Count leaf nodes of the legal move tree to `depth` plies.
    #[must_use]
    pub fn perft(&self, side: Color, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves(side);
        if depth == 1 {
            return moves.len() as u64;
        }

        moves
            .iter()
            .map(|mv| self.apply(*mv).perft(side.opponent(), depth - 1))
            .sum()
    }
}
