//! Chroma Arena headless driver
//!
//! Runs the simulation without a renderer and logs the color census, which
//! is enough to watch an infection take over the arena from a terminal.
//!
//! Usage: chroma-arena [--seed N] [--ticks N] [--config PATH]

use std::path::PathBuf;
use std::process::ExitCode;

use chroma_arena::{ArenaConfig, SimState, TickInput, census, tick};

struct Args {
    seed: u64,
    ticks: u64,
    config: Option<PathBuf>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        seed: 0,
        ticks: 5_000,
        config: None,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(flag) = iter.next() {
        let mut value = |name: &str| {
            iter.next()
                .ok_or_else(|| format!("{name} requires a value"))
        };
        match flag.as_str() {
            "--seed" => {
                args.seed = value("--seed")?
                    .parse()
                    .map_err(|e| format!("--seed: {e}"))?;
            }
            "--ticks" => {
                args.ticks = value("--ticks")?
                    .parse()
                    .map_err(|e| format!("--ticks: {e}"))?;
            }
            "--config" => {
                args.config = Some(PathBuf::from(value("--config")?));
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(args)
}

fn run(args: Args) -> chroma_arena::Result<()> {
    let config = match &args.config {
        Some(path) => ArenaConfig::load(path)?,
        None => ArenaConfig::default(),
    };

    let mut state = SimState::new(&config, args.seed)?;
    log::info!(
        "spawned {} particles in {}x{} arena (seed {})",
        state.num_particles(),
        config.width,
        config.height,
        args.seed
    );

    let input = TickInput::default();
    let report_every = (args.ticks / 20).max(1);

    for _ in 0..args.ticks {
        tick(&mut state, &input);

        if state.time_ticks.is_multiple_of(report_every) {
            let counts = census(&state.particles);
            log::info!("tick {}: {}", state.time_ticks, counts);
            if counts.fully_infected() {
                log::info!("population fully infected at tick {}", state.time_ticks);
                break;
            }
        }
    }

    log::info!("final census: {}", census(&state.particles));
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("usage: chroma-arena [--seed N] [--ticks N] [--config PATH]");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = run(args) {
        log::error!("{err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
