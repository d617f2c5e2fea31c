use std::error::Error;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Parser;
use log::{info, warn};

use selfplay_chess::board::SearchConfig;
use selfplay_chess::game::{Game, GameConfig, DEFAULT_MAX_PLIES};
use selfplay_chess::record::{render_pgn, write_next_pgn, PgnHeaders, ViewerExport};
use selfplay_chess::{Color, GameState};

/// Let the engine play a full game against itself.
#[derive(Parser, Debug)]
#[command(name = "selfplay", version, about)]
struct Args {
    /// Search depth in plies
    #[arg(long, default_value_t = 3)]
    depth: u32,

    /// Material swing at or below which a move is filtered as a blunder
    #[arg(long, default_value_t = -4, allow_hyphen_values = true)]
    blunder_threshold: i32,

    /// Plies after which the game is abandoned
    #[arg(long, default_value_t = DEFAULT_MAX_PLIES)]
    max_plies: usize,

    /// Pause after each ply so the viewer can keep up
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,

    /// Start from this FEN instead of the initial position
    #[arg(long)]
    fen: Option<String>,

    /// Directory receiving board.json and game.json
    #[arg(long, default_value = "web")]
    web_dir: PathBuf,

    /// Directory receiving pgnN.pgn
    #[arg(long, default_value = "pgns")]
    pgn_dir: PathBuf,

    /// Skip viewer snapshots
    #[arg(long)]
    no_viewer: bool,

    /// Skip the PGN file
    #[arg(long)]
    no_pgn: bool,

    /// Do not print boards after each ply
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = GameConfig {
        search: SearchConfig::new(args.depth, args.blunder_threshold),
        max_plies: args.max_plies,
    };
    let (state, side) = match &args.fen {
        Some(fen) => GameState::from_fen(fen)?,
        None => (GameState::initial(), Color::White),
    };
    info!(
        "depth {} blunder threshold {} max plies {}",
        config.search.depth, config.search.blunder_threshold, config.max_plies
    );

    let viewer = (!args.no_viewer).then(|| ViewerExport::new(args.web_dir.clone()));
    let delay = Duration::from_millis(args.delay_ms);

    let mut game = Game::from_position(config, state, side);
    if let Some(viewer) = &viewer {
        viewer.write(game.state(), game.positions())?;
        thread::sleep(delay);
    }
    print!("{}", game.state().board);

    let outcome = game.play_with(|game, ply| {
        println!("\n{} plays: {} -> {}", ply.side, ply.mv.from(), ply.mv.to());
        if !args.quiet {
            print!("{}", ply.state.board);
        }
        if let Some(viewer) = &viewer {
            if let Err(err) = viewer.write(game.state(), game.positions()) {
                warn!("viewer snapshot failed: {err}");
            }
            thread::sleep(delay);
        }
    });
    println!("{outcome}");

    if !args.no_pgn && !game.san_moves().is_empty() {
        let pgn = render_pgn(&PgnHeaders::today(outcome.result), side, game.san_moves());
        match write_next_pgn(&args.pgn_dir, &pgn) {
            Ok(path) => println!("Wrote PGN to {}", path.display()),
            Err(err) => println!("Failed to write PGN: {err}"),
        }
    }

    Ok(())
}
