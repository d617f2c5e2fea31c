//! Full game loop tests through the public API.

use selfplay_chess::board::{PositionKey, SearchConfig};
use selfplay_chess::game::{EndReason, Game, GameConfig, GameResult, Step};
use selfplay_chess::{Color, GameState};

fn config(depth: u32, max_plies: usize) -> GameConfig {
    GameConfig {
        search: SearchConfig::new(depth, -4),
        max_plies,
    }
}

#[test]
fn shallow_game_runs_to_a_terminal_state() {
    let mut game = Game::new(config(1, 300));
    let mut plies = 0;
    let outcome = game.play_with(|_, record| {
        plies += 1;
        assert_eq!(record.ply, plies);
    });

    assert_eq!(game.plies(), plies);
    assert_eq!(game.san_moves().len(), plies);
    assert_eq!(game.positions().len(), plies + 1);
    assert!(game.plies() <= 300);
    assert_eq!(game.outcome(), Some(outcome));

    match outcome.reason {
        EndReason::Checkmate => assert_ne!(outcome.result, GameResult::Draw),
        EndReason::PlyLimit => assert_eq!(outcome.result, GameResult::InProgress),
        _ => assert_eq!(outcome.result, GameResult::Draw),
    }
}

#[test]
fn observer_sees_state_after_each_ply() {
    let mut game = Game::new(config(1, 6));
    game.play_with(|game, record| {
        assert_eq!(game.state(), &record.state);
        assert_eq!(game.positions().last(), Some(&record.state.board));
        assert_eq!(game.side_to_move(), record.side.opponent());
        assert_eq!(game.san_moves().last(), Some(&record.san));
    });
}

#[test]
fn game_is_deterministic() {
    let mut a = Game::new(config(2, 12));
    let mut b = Game::new(config(2, 12));
    a.play();
    b.play();
    assert_eq!(a.san_moves(), b.san_moves());
    assert_eq!(a.positions(), b.positions());
}

#[test]
fn step_reports_each_ply_then_finishes() {
    let mut game = Game::new(config(1, 2));
    assert!(matches!(game.step(), Step::Played(r) if r.side == Color::White));
    assert!(matches!(game.step(), Step::Played(r) if r.side == Color::Black));
    match game.step() {
        Step::Finished(outcome) => {
            assert_eq!(outcome.reason, EndReason::PlyLimit);
            assert_eq!(outcome.result.code(), "*");
        }
        Step::Played(_) => panic!("ply cap should end the game"),
    }
}

#[test]
fn mate_in_one_is_played_and_detected() {
    let (state, side) = GameState::from_fen("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1").unwrap();
    let mut game = Game::from_position(config(2, 10), state, side);
    let outcome = game.play();
    assert_eq!(game.san_moves(), ["Qe8#"]);
    assert_eq!(outcome.reason, EndReason::Checkmate);
    assert_eq!(outcome.result, GameResult::WhiteWins);
    assert_eq!(outcome.side_to_move, Color::Black);
    assert_eq!(outcome.to_string(), "Black is checkmated!");
}

#[test]
fn repetition_counts_positions_reached() {
    let mut game = Game::new(config(1, 4));
    game.play();
    let key = PositionKey::new(game.state(), game.side_to_move());
    assert!(game.repetitions().get(&key) >= 1);
    assert!(game.repetitions().len() <= game.plies() + 1);
}

#[test]
fn halfmove_clock_tracks_last_ply() {
    let mut game = Game::new(config(1, 1));
    let Step::Played(record) = game.step() else {
        panic!("start position has moves");
    };
    assert_eq!(game.halfmove_clock(), record.halfmove_clock);
}
