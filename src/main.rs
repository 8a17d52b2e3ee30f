//! Escapa headless driver
//!
//! Plays rounds against a simulated 20ms clock with a scripted player and
//! reports each round's survival time. Stands in for the window, timer and
//! dialog collaborators of a graphical frontend.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use escapa::GameConfig;
use escapa::sim::{RoundController, RoundEvent, TickOutcome};

#[derive(Parser, Debug)]
#[command(name = "escapa")]
#[command(about = "Run Escapa rounds headlessly with a scripted player")]
struct Args {
    /// RNG seed for enemy layout and the scripted player
    #[arg(short, long, default_value_t = 1)]
    seed: u64,

    /// Number of rounds to play
    #[arg(short, long, default_value_t = 3)]
    rounds: u32,

    /// Give up on a round after this many ticks
    #[arg(long, default_value_t = 30_000)]
    max_ticks: u64,

    /// JSON config file (missing fields use defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Max pointer drift per tick; 0 holds the square still
    #[arg(long, default_value_t = 3.0)]
    wander: f64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };
    let interval = config.tick_interval_ms;

    let mut game = RoundController::new(config, args.seed).context("setting up arena")?;
    let mut pilot = Pcg32::seed_from_u64(args.seed.wrapping_add(1));
    let mut now: u64 = 0;

    for round in 1..=args.rounds {
        // Grab the square by its centre to start the round
        let grab = game.player().pos + game.player().size() / 2.0;
        game.pointer_down(grab.x, grab.y, now);
        let mut pointer = grab;

        let mut ended = false;
        for _ in 0..args.max_ticks {
            now += interval;

            if args.wander > 0.0 {
                pointer.x += pilot.random_range(-args.wander..=args.wander);
                pointer.y += pilot.random_range(-args.wander..=args.wander);
                game.pointer_move(pointer.x, pointer.y);
            }

            let outcome = game.tick(now)?;
            for event in game.drain_events() {
                if let RoundEvent::SpeedIncreased { speed, elapsed_ms } = event {
                    log::info!("Speed up to {speed:.1} at {:.1}s", elapsed_ms as f64 / 1000.0);
                }
            }

            if let TickOutcome::RoundEnded(summary) = outcome {
                println!("Round {round}: {} ({:?})", summary.message(), summary.cause);
                ended = true;
                break;
            }
        }

        if !ended {
            println!(
                "Round {round}: survived {} ticks, stopping",
                args.max_ticks
            );
            game.pointer_up();
            game.reset()?;
        }
    }

    Ok(())
}
