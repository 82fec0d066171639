use std::time::Instant;

use anyhow::{anyhow, Context};
use clap::Parser;
use env_logger::Builder;
use log::{info, LevelFilter};
use parity::{format_solution, parity_game_to_game, parse_parity_game};

#[derive(Parser)]
#[command(name = "parity")]
#[command(about = "Solve a parity game in the PGSolver format")]
struct Args {
    /// Path to the parity game file
    #[arg(value_name = "FILE")]
    file: String,

    /// Only print the winner of the node with this id
    #[arg(long, require_equals = true)]
    node: Option<usize>,

    /// Logging verbosity (use -v for info, or -v=LEVEL for a specific level)
    #[arg(long, short = 'v', value_name = "LEVEL", num_args = 0..=1, default_missing_value = "info", require_equals = true)]
    verbose: Option<Option<LogLevel>>,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
        }
    }
}

/// Level requested on the command line. Without `-v` the level is left to `RUST_LOG`.
fn log_level(verbose: Option<Option<LogLevel>>) -> Option<LevelFilter> {
    match verbose {
        None => None,
        Some(None) => Some(LevelFilter::Info),
        Some(Some(level)) => Some(level.into()),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut builder = Builder::from_default_env();
    if let Some(level) = log_level(args.verbose) {
        builder.filter_level(level);
    }
    builder.init();

    let now = Instant::now();

    let file = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read parity game file {}", args.file))?;
    let pg = parse_parity_game(&file).map_err(|errs| {
        let errs = errs.iter().map(ToString::to_string).collect::<Vec<_>>();
        anyhow!("Failed to parse parity game file {}: {}", args.file, errs.join("; "))
    })?;
    let (game, mapping) = parity_game_to_game(&pg)?;

    info!("Parsed {} nodes in {:?}", game.node_count(), now.elapsed());

    let now = Instant::now();

    let solution = solver::solve(&game).context("Invalid parity game")?;

    info!("Solve took {:?}", now.elapsed());

    match args.node {
        Some(id) => {
            let node = mapping.node(id).with_context(|| format!("No node with id {id}"))?;
            println!("Winner: player {}", solution.winner(node));
        }
        None => print!("{}", format_solution(&mapping, &solution)),
    }

    Ok(())
}
