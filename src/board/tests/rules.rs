//! Repetition keys, halfmove clock and game status.

use super::position;
use crate::board::{next_halfmove_clock, Color, GameState, Move, PositionKey, Square, Status};

#[test]
fn test_key_distinguishes_side_to_move() {
    let state = GameState::initial();
    assert_ne!(
        PositionKey::new(&state, Color::White),
        PositionKey::new(&state, Color::Black)
    );
}

#[test]
fn test_key_distinguishes_castling_and_en_passant() {
    let state = GameState::initial();
    let mut no_rights = state;
    no_rights.castling.remove(Color::White, true);
    assert_ne!(
        PositionKey::new(&state, Color::White),
        PositionKey::new(&no_rights, Color::White)
    );

    let mut with_ep = state;
    with_ep.en_passant = Some(Square(2, 4));
    assert_ne!(
        PositionKey::new(&state, Color::White),
        PositionKey::new(&with_ep, Color::White)
    );
}

#[test]
fn test_key_layout() {
    let key = PositionKey::new(&GameState::initial(), Color::White);
    assert_eq!(key.as_str().len(), 64 + 1 + 4 + 1 + 1 + 1 + 1);
    assert!(key.as_str().starts_with("RNBQKBNRPPPPPPPP"));
    assert!(key.as_str().ends_with("|KQkq|-|w"));
}

#[test]
fn test_knight_shuffle_repeats_key() {
    let start = GameState::initial();
    let mut state = start;
    let mut side = Color::White;
    for text in ["g1f3", "g8f6", "f3g1", "f6g8"] {
        let mv = state.parse_move(side, text).unwrap();
        state = state.apply(mv);
        side = side.opponent();
    }
    assert_eq!(
        PositionKey::new(&state, side),
        PositionKey::new(&start, Color::White)
    );
}

#[test]
fn test_halfmove_clock() {
    let state = GameState::initial();
    let knight = state.parse_move(Color::White, "g1f3").unwrap();
    let pawn = state.parse_move(Color::White, "e2e4").unwrap();
    assert_eq!(next_halfmove_clock(7, &state, knight), 8);
    assert_eq!(next_halfmove_clock(7, &state, pawn), 0);

    let (state, side) = position("4k3/8/8/3p4/8/2N5/8/4K3 w - - 0 1");
    let capture = state.parse_move(side, "c3d5").unwrap();
    assert_eq!(next_halfmove_clock(42, &state, capture), 0);
    let quiet = Move::quiet(Square(2, 2), Square(4, 1));
    assert_eq!(next_halfmove_clock(42, &state, quiet), 43);
}

#[test]
fn test_status() {
    assert_eq!(GameState::initial().status(Color::White), Status::Ongoing);

    let (mated, side) =
        position("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
    assert_eq!(mated.status(side), Status::Checkmate);

    let (stale, side) = position("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert_eq!(stale.status(side), Status::Stalemate);
}
