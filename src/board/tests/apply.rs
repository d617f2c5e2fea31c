//! Move application: piece movement, castling, en passant and rights bookkeeping.

use super::position;
use crate::board::{CastlingRights, Color, GameState, Move, Piece, Square};

fn play(state: &GameState, side: Color, text: &str) -> GameState {
    let mv = state.parse_move(side, text).expect("legal move");
    state.apply(mv)
}

#[test]
fn test_apply_leaves_original_untouched() {
    let state = GameState::initial();
    let next = play(&state, Color::White, "e2e4");
    assert_eq!(state, GameState::initial());
    assert_eq!(next.board.piece_at(Square(3, 4)), Some((Color::White, Piece::Pawn)));
    assert!(next.board.is_empty(Square(1, 4)));
}

#[test]
fn test_double_push_sets_en_passant_target() {
    let state = GameState::initial();
    let next = play(&state, Color::White, "e2e4");
    assert_eq!(next.en_passant, Some(Square(2, 4)));

    let after = play(&next, Color::Black, "d7d5");
    assert_eq!(after.en_passant, Some(Square(5, 3)));

    let quiet = play(&after, Color::White, "g1f3");
    assert_eq!(quiet.en_passant, None);
}

#[test]
fn test_en_passant_removes_correct_pawn() {
    let (state, side) =
        position("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 1");
    let moves = state.legal_moves(side);
    let ep = Move::capture(Square(4, 4), Square(5, 3));
    assert!(moves.contains(&ep), "En passant should be available");

    let next = state.apply(ep);
    assert_eq!(next.board.piece_at(Square(5, 3)), Some((Color::White, Piece::Pawn)));
    assert!(next.board.is_empty(Square(4, 3)), "captured pawn removed");
    assert!(next.board.is_empty(Square(4, 4)));
    assert_eq!(next.board.material_balance(), 1);
}

#[test]
fn test_black_en_passant() {
    let (state, side) = position("4k3/8/8/8/3pP3/8/8/4K3 b - e3 0 1");
    let next = play(&state, side, "d4e3");
    assert_eq!(next.board.piece_at(Square(2, 4)), Some((Color::Black, Piece::Pawn)));
    assert!(next.board.is_empty(Square(3, 4)));
}

#[test]
fn test_en_passant_expires_after_one_ply() {
    let (state, _) = position("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
    let waited = play(&state, Color::White, "e1d1");
    let back = play(&waited, Color::Black, "e8e7");
    assert!(!back
        .legal_moves(Color::White)
        .contains(&Move::capture(Square(4, 4), Square(5, 3))));
}

#[test]
fn test_kingside_castle_moves_rook() {
    let (state, side) = position("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let next = play(&state, side, "e1g1");
    assert_eq!(next.board.piece_at(Square(0, 6)), Some((Color::White, Piece::King)));
    assert_eq!(next.board.piece_at(Square(0, 5)), Some((Color::White, Piece::Rook)));
    assert!(next.board.is_empty(Square(0, 7)));
    assert!(next.board.is_empty(Square(0, 4)));
    assert!(!next.castling.has(Color::White, true));
    assert!(!next.castling.has(Color::White, false));
    assert!(next.castling.has(Color::Black, true));
    assert!(next.castling.has(Color::Black, false));
}

#[test]
fn test_queenside_castle_moves_rook() {
    let (state, side) = position("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
    let next = play(&state, side, "e8c8");
    assert_eq!(next.board.piece_at(Square(7, 2)), Some((Color::Black, Piece::King)));
    assert_eq!(next.board.piece_at(Square(7, 3)), Some((Color::Black, Piece::Rook)));
    assert!(next.board.is_empty(Square(7, 0)));
    assert_eq!(next.castling.to_string(), "KQ--");
}

#[test]
fn test_king_move_revokes_both_rights() {
    let (state, side) = position("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let next = play(&state, side, "e1e2");
    assert_eq!(next.castling.to_string(), "--kq");
}

#[test]
fn test_rook_move_revokes_one_right() {
    let (state, side) = position("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let next = play(&state, side, "h1h5");
    assert!(!next.castling.has(Color::White, true));
    assert!(next.castling.has(Color::White, false));
}

#[test]
fn test_capturing_rook_on_home_square_revokes_right() {
    let (state, side) = position("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let next = play(&state, side, "a1a8");
    assert!(!next.castling.has(Color::Black, false));
    assert!(next.castling.has(Color::Black, true));
    assert!(!next.castling.has(Color::White, false));
}

#[test]
fn test_promotion_replaces_pawn() {
    let (state, side) = position("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let next = play(&state, side, "a7a8n");
    assert_eq!(next.board.piece_at(Square(7, 0)), Some((Color::White, Piece::Knight)));
    assert!(next.board.is_empty(Square(6, 0)));
}

#[test]
fn test_apply_from_empty_square_only_clears_en_passant() {
    let mut state = GameState::initial();
    state.en_passant = Some(Square(2, 4));
    let next = state.apply(Move::quiet(Square(3, 3), Square(4, 3)));
    assert_eq!(next.board, state.board);
    assert_eq!(next.en_passant, None);
    assert_eq!(next.castling, CastlingRights::all());
}
