use std::fmt;

use super::{CastlingRights, Color, Piece, Square};

/// 64 square contents indexed `rank * 8 + file`, rank 0 being White's back rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<(Color, Piece)>; 64],
}

impl Board {
    /// A board with no pieces on it.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// The standard starting arrangement.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (i, piece) in back_rank.iter().enumerate() {
            board.set(Square(0, i), Color::White, *piece);
            board.set(Square(7, i), Color::Black, *piece);
            board.set(Square(1, i), Color::White, Piece::Pawn);
            board.set(Square(6, i), Color::Black, Piece::Pawn);
        }
        board
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.as_index()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.as_index()].is_none()
    }

    /// True if `sq` holds exactly this colored piece.
    #[inline]
    #[must_use]
    pub fn has(&self, sq: Square, color: Color, piece: Piece) -> bool {
        self.squares[sq.as_index()] == Some((color, piece))
    }

    #[inline]
    #[must_use]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.squares[sq.as_index()].map(|(c, _)| c)
    }

    #[inline]
    pub fn set(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.as_index()] = Some((color, piece));
    }

    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.squares[sq.as_index()] = None;
    }

    /// Occupied squares in index order (a1 first).
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(i, sq)| sq.map(|(c, p)| (Square::from_index(i), c, p)))
    }

    /// Single-character code for a square: FEN letter, or `.` when empty.
    #[inline]
    #[must_use]
    pub fn char_at(&self, sq: Square) -> char {
        self.piece_at(sq)
            .map_or('.', |(color, piece)| piece.to_fen_char(color))
    }

    /// All 64 square codes in index order.
    #[must_use]
    pub fn to_chars(&self) -> [char; 64] {
        let mut out = ['.'; 64];
        for (i, c) in out.iter_mut().enumerate() {
            *c = self.char_at(Square::from_index(i));
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

/// Rank 8 at the top, one row per rank.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            for file in 0..8 {
                write!(f, "{} ", self.char_at(Square(rank, file)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A position: board contents, castling rights and en passant target.
///
/// The side to move is deliberately not part of the state; every query
/// takes it explicitly. States are values: `apply` returns a new one and
/// never mutates the receiver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    pub board: Board,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
}

impl GameState {
    /// The standard initial position with all castling rights.
    #[must_use]
    pub fn initial() -> Self {
        GameState {
            board: Board::standard(),
            castling: CastlingRights::all(),
            en_passant: None,
        }
    }

    /// A state over `board` with no castling rights and no en passant target.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        GameState {
            board,
            castling: CastlingRights::none(),
            en_passant: None,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::initial()
    }
}
