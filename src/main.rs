use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use dama_host::{AlphaBetaPlayer, GameConfig, PlayerConfig, parse_start, play_game};
use tracing::info;

/// Play a game of international draughts between two search players.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Deepest iteration either player may start
    #[arg(short, long, default_value_t = 8)]
    depth: u8,

    /// Thinking time per move in milliseconds
    #[arg(short = 't', long, default_value_t = 1000)]
    think_ms: u64,

    /// Evaluator for White (material or positional)
    #[arg(long, default_value = "positional")]
    white: String,

    /// Evaluator for Black (material or positional)
    #[arg(long, default_value = "material")]
    black: String,

    /// Stop the game after this many plies
    #[arg(long, default_value_t = 200)]
    max_plies: usize,

    /// Starting position in draughts FEN (defaults to the standard setup)
    #[arg(long)]
    fen: Option<String>,

    /// Seed for the fallback move pickers
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let white_config = PlayerConfig::new(args.depth, &args.white, args.seed)?;
    // Distinct seeds so the two fallbacks do not mirror each other
    let black_seed = args.seed.map(|seed| seed.wrapping_add(1));
    let black_config = PlayerConfig::new(args.depth, &args.black, black_seed)?;
    let game_config = GameConfig {
        think_time: Duration::from_millis(args.think_ms),
        max_plies: args.max_plies,
    };
    let start = parse_start(args.fen.as_deref())?;

    info!(depth = args.depth, think_ms = args.think_ms, "dama starting");
    println!("{}", start.pretty());

    let mut white = AlphaBetaPlayer::from_config(&white_config);
    let mut black = AlphaBetaPlayer::from_config(&black_config);
    let record = play_game(&mut white, &mut black, start, &game_config)?;

    println!();
    println!("{}", record.final_board.pretty());
    println!("moves: {}", record.notation());
    println!("result: {} after {} plies", record.outcome, record.moves.len());
    Ok(())
}
