use std::path::PathBuf;

use clap::Parser;
use drake_judge::{play_game, GameOutcome, Recorder, SetupConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use thedrake::PlayingSide;
use tracing::{debug, info, warn};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Plays random games of The Drake from a setup file and checks that the
/// rules engine stays consistent.
#[derive(Parser)]
struct Args {
    /// Path to the JSON setup file
    setup: PathBuf,

    /// How many games to play
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Stop a game after this many moves
    #[arg(short, long, default_value_t = 500)]
    max_turns: usize,

    /// Stop as soon as one game breaks an invariant
    #[arg(short, long, default_value_t = false)]
    stop_on_violation: bool,

    /// Record the games as JSON files into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Default)]
struct Score {
    // Indexed by `side_idx`
    wins: [usize; 2],
    resignations: [usize; 2],
    unfinished: usize,
    violations: usize,
}

fn side_idx(side: PlayingSide) -> usize {
    match side {
        PlayingSide::Blue => 0,
        PlayingSide::Orange => 1,
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut recorder = if let Some(dir_path) = args.record_games_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    let initial = SetupConfig::load(&args.setup)?.build()?;

    let mut score = Score::default();
    for game_idx in 0..args.num_games {
        let record = play_game(&mut rng, &initial, args.max_turns);
        if let Some(rec) = &mut recorder {
            rec.write_game_recording(&record)?;
        }

        match record.outcome {
            GameOutcome::Won {
                side,
                by_resignation,
            } => {
                debug!(winner = %side, game_idx, by_resignation, num_moves = record.moves.len());
                score.wins[side_idx(side)] += 1;
                if by_resignation {
                    score.resignations[side_idx(side.opponent())] += 1;
                }
            }
            GameOutcome::Unfinished => {
                debug!(game_idx, "Unfinished");
                score.unfinished += 1;
            }
            GameOutcome::InvariantViolated { err } => {
                warn!(game_idx, "Invariant violated");
                let mut err_dyn = &err as &dyn std::error::Error;
                while let Some(src_err) = err_dyn.source() {
                    warn!("{}", err_dyn);
                    err_dyn = src_err;
                }
                warn!("{}", err_dyn);
                score.violations += 1;
                if args.stop_on_violation {
                    break;
                }
            }
        }
    }

    eprintln!(
        "End result:\n- {} wins by blue ({} through resignation by orange)\n- {} wins by orange ({} through resignation by blue)\n- {} unfinished\n- {} invariant violations",
        score.wins[0],
        score.resignations[1],
        score.wins[1],
        score.resignations[0],
        score.unfinished,
        score.violations,
    );

    if score.violations > 0 {
        anyhow::bail!("{} games broke an invariant", score.violations);
    }
    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
