//! `sortviz` command-line player: generates the frames for one algorithm
//! and replays them on the terminal at the configured speed.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sortviz::engine::{PlayRequest, SortingEngine};
use sortviz::options::EngineOptions;
use sortviz::playback::FrameEvent;
use sortviz::util::values::parse_values;
use sortviz::Algorithm;
use web_time::Instant;

#[derive(Parser)]
#[command(name = "sortviz", about = "Replay a sorting algorithm frame by frame")]
struct Args {
    /// Algorithm to run (bubble, insertion, selection, merge, quick).
    #[arg(short, long)]
    algorithm: Option<Algorithm>,
    /// Comma/space separated values to sort instead of a random array.
    #[arg(long)]
    values: Option<String>,
    /// TOML options file.
    #[arg(long)]
    options: Option<PathBuf>,
    /// Random array length.
    #[arg(short = 'n', long)]
    length: Option<usize>,
    /// Delay per frame in milliseconds.
    #[arg(short, long)]
    speed: Option<u64>,
    /// RNG seed for reproducible arrays.
    #[arg(long)]
    seed: Option<u64>,
    /// Write the frame sequence as JSON to this path instead of playing it.
    #[arg(long)]
    export: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut options = match &args.options {
        Some(path) => EngineOptions::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => EngineOptions::default(),
    };
    if let Some(algorithm) = args.algorithm {
        options.algorithm = algorithm;
    }
    if let Some(length) = args.length {
        options.array.length = length;
    }
    if args.seed.is_some() {
        options.array.seed = args.seed;
    }

    let mut engine = match args.values.as_deref() {
        Some(text) => SortingEngine::with_values(options, parse_values(text)?)?,
        None => SortingEngine::new(options)?,
    };
    if let Some(speed) = args.speed {
        let applied = engine.set_speed(speed);
        if applied != speed {
            log::warn!("speed {speed}ms clamped to {applied}ms");
        }
    }

    if let Some(path) = &args.export {
        let sequence = engine.generate();
        let json = serde_json::to_string_pretty(&sequence)?;
        std::fs::write(path, json)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("wrote {} frames to {}", sequence.len(), path.display());
        return Ok(());
    }

    play(&mut engine)
}

/// Replay the selected algorithm, sleeping until each frame is due.
fn play(engine: &mut SortingEngine) -> anyhow::Result<()> {
    log::info!(
        "{} sort over {} values at {}ms/frame",
        engine.algorithm().label(),
        engine.array().len(),
        engine.speed().delay_ms()
    );

    let request = engine.request_play(print_frame, Instant::now());
    if !matches!(request, PlayRequest::Started { .. }) {
        anyhow::bail!("playback did not start: {request:?}");
    }

    while let Some(step) = engine.pending() {
        std::thread::sleep(step.remaining(Instant::now()));
        let _ = engine.fire(step, Instant::now());
    }

    log::info!("finished: {:?}", engine.progress());
    Ok(())
}

fn print_frame(event: &FrameEvent<'_>) {
    let values: Vec<String> =
        event.frame.values().iter().map(u32::to_string).collect();
    let marker = if event.frame.is_marker() { '*' } else { ' ' };
    let mut out = io::stdout().lock();
    if writeln!(out, "{:>5} {marker} {}", event.index, values.join(" "))
        .is_err()
    {
        log::error!("stdout closed at frame {}", event.index);
    }
}
