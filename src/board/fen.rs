use super::error::{FenError, MoveParseError};
use super::{
    file_to_index, rank_to_index, Board, CastlingRights, Color, GameState, Move, Piece, Square,
};

impl GameState {
    /// Parse a position from FEN notation, returning it with the side to move.
    ///
    /// Halfmove and fullmove fields are accepted but ignored: the halfmove
    /// clock belongs to the game loop, not the state.
    pub fn from_fen(fen: &str) -> Result<(Self, Color), FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut board = Board::empty();
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRank { rank: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if file >= 8 {
                    return Err(FenError::BadFileCount {
                        rank: rank_idx,
                        files: file + 1,
                    });
                }
                board.set(Square(7 - rank_idx, file), color, piece);
                file += 1;
            }
            if file != 8 {
                return Err(FenError::BadFileCount {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        let side = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut castling = CastlingRights::none();
        for c in parts[2].chars() {
            match c {
                'K' => castling.set(Color::White, true),
                'Q' => castling.set(Color::White, false),
                'k' => castling.set(Color::Black, true),
                'q' => castling.set(Color::Black, false),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        let en_passant = if parts[3] == "-" {
            None
        } else {
            Some(
                parts[3]
                    .parse::<Square>()
                    .map_err(|_| FenError::InvalidEnPassant {
                        found: parts[3].to_string(),
                    })?,
            )
        };

        Ok((
            GameState {
                board,
                castling,
                en_passant,
            },
            side,
        ))
    }

    /// FEN for this state with `side` to move; clocks are written as `0 1`.
    #[must_use]
    pub fn to_fen(&self, side: Color) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.board.piece_at(Square(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = if side == Color::White { "w" } else { "b" };
        let mut castling: String = self
            .castling
            .to_string()
            .chars()
            .filter(|&c| c != '-')
            .collect();
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!("{} {} {} {} 0 1", rows.join("/"), active, castling, ep)
    }

    /// Resolve coordinate notation (`e2e4`, `e7e8q`) against `side`'s legal moves.
    ///
    /// A promotion without a suffix resolves to the queen.
    pub fn parse_move(&self, side: Color, text: &str) -> Result<Move, MoveParseError> {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() < 4 || chars.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: chars.len() });
        }
        if !('a'..='h').contains(&chars[0])
            || !('1'..='8').contains(&chars[1])
            || !('a'..='h').contains(&chars[2])
            || !('1'..='8').contains(&chars[3])
        {
            return Err(MoveParseError::InvalidSquare {
                notation: text.to_string(),
            });
        }

        let from = Square(rank_to_index(chars[1]), file_to_index(chars[0]));
        let to = Square(rank_to_index(chars[3]), file_to_index(chars[2]));
        let promotion = match chars.get(4) {
            None => None,
            Some(&c) => match Piece::from_char(c) {
                Some(p @ (Piece::Queen | Piece::Rook | Piece::Bishop | Piece::Knight)) => Some(p),
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };

        self.legal_moves(side)
            .iter()
            .filter(|mv| mv.from() == from && mv.to() == to)
            .find(|mv| match mv.promotion() {
                None => promotion.is_none(),
                Some(p) => p == promotion.unwrap_or(Piece::Queen),
            })
            .copied()
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
    }
}
