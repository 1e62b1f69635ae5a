use std::{
    io::Write,
    path::{Path, PathBuf},
    thread,
    time::Duration,
};

use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use serde::Serialize;
use sort_visualiser_core::{AppConfig, Indices, InputConfig, SortRun, StepEvent, Strategy};
use tracing_subscriber::EnvFilter;

fn main() -> sort_visualiser_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            strategy,
            length,
            seed,
            interval_ms,
            config,
        } => run_live(strategy, length, seed, interval_ms, config.as_deref()),
        Commands::Trace {
            strategy,
            length,
            seed,
            output,
        } => run_trace(strategy, length, seed, &output),
    }
}

fn run_live(
    strategy: Strategy,
    length: Option<usize>,
    seed: Option<u64>,
    interval_ms: Option<u64>,
    config: Option<&Path>,
) -> sort_visualiser_core::Result<()> {
    let config = match config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    let length = length.unwrap_or(config.input.length);
    let seed = seed.or(config.input.seed);
    let interval = Duration::from_millis(interval_ms.unwrap_or(config.playback.interval_ms));

    tracing::info!(%strategy, length, ?seed, "starting live run");

    let mut values = shuffled_input(length, seed);
    let mut run = SortRun::new(strategy, &mut values);
    while let Some(event) = run.next_step() {
        paint_frame(strategy, &event);
        thread::sleep(interval);
    }

    let summary = run.summary();
    tracing::info!(
        events = summary.events,
        comparisons = summary.comparisons,
        mutations = summary.mutations,
        "sort complete"
    );
    Ok(())
}

fn run_trace(
    strategy: Strategy,
    length: Option<usize>,
    seed: Option<u64>,
    output: &PathBuf,
) -> sort_visualiser_core::Result<()> {
    let defaults = InputConfig::default();
    let length = length.unwrap_or(defaults.length);

    tracing::info!(%strategy, length, ?output, "tracing run");

    let mut values = shuffled_input(length, seed.or(defaults.seed));
    let mut run = SortRun::new(strategy, &mut values);
    let mut records = Vec::new();
    while let Some(event) = run.next_step() {
        records.push(TraceRecord {
            comparing: event.comparing(),
            modified: event.modified(),
            snapshot: event.snapshot.to_vec(),
        });
    }

    std::fs::write(output, serde_json::to_string_pretty(&records)?)?;
    tracing::info!(events = run.summary().events, "trace written");
    Ok(())
}

/// Builds a shuffled permutation of `1..=length`. Without a seed every run
/// gets a fresh arrangement.
fn shuffled_input(length: usize, seed: Option<u64>) -> Vec<u32> {
    let mut values: Vec<u32> = (1..=length as u32).collect();
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    values.shuffle(&mut rng);
    values
}

/// Repaints the terminal with one bar per element. The indices under
/// comparison are marked `?`, freshly written ones `!`.
fn paint_frame(strategy: Strategy, event: &StepEvent<'_, u32>) {
    let comparing = event.comparing();
    let modified = event.modified();

    let mut frame = String::new();
    frame.push_str("\x1b[2J\x1b[H");
    frame.push_str(&format!("{strategy} sort\n\n"));
    for (index, value) in event.snapshot.iter().enumerate() {
        let marker = if comparing.contains(index) {
            '?'
        } else if modified.contains(index) {
            '!'
        } else {
            ' '
        };
        frame.push_str(&format!("{marker} {}\n", "#".repeat(*value as usize)));
    }

    let mut stdout = std::io::stdout();
    let _ = stdout.write_all(frame.as_bytes());
    let _ = stdout.flush();
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

/// One entry of the exported trace file.
#[derive(Debug, Serialize)]
struct TraceRecord {
    comparing: Indices,
    modified: Indices,
    snapshot: Vec<u32>,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Terminal sorting algorithm visualiser", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Animate a sort run in the terminal.
    Run {
        /// Strategy to animate: bubble, insertion, selection, merge, quick or heap.
        strategy: Strategy,
        /// Number of elements in the generated input.
        #[arg(short, long)]
        length: Option<usize>,
        /// Shuffle seed for a reproducible input.
        #[arg(short, long)]
        seed: Option<u64>,
        /// Delay between frames in milliseconds.
        #[arg(short, long)]
        interval_ms: Option<u64>,
        /// Optional configuration file to load on startup.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Run a sort to completion and persist its event stream as JSON.
    Trace {
        /// Strategy to trace.
        strategy: Strategy,
        /// Output path for the generated trace file.
        output: PathBuf,
        /// Number of elements in the generated input.
        #[arg(short, long)]
        length: Option<usize>,
        /// Shuffle seed for a reproducible input.
        #[arg(short, long)]
        seed: Option<u64>,
    },
}
