//! dungen: generate a dungeon floor and print it
//!
//! Options come from built-in defaults, then an optional JSON file, then
//! command-line flags, each layer overriding the one before.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, debug};
use serde::Serialize;
use thiserror::Error;

use dg_core::dungeon::Room;
use dg_core::{Dungeon, GameRng, GenerateError, GenerateOpts, GenerationStats, generate};

/// Maze-and-rooms dungeon generator
#[derive(Parser, Debug)]
#[command(name = "dungen")]
#[command(author, version, about = "Generate a maze-and-rooms dungeon floor", long_about = None)]
struct Args {
    /// JSON file with generation options
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Width in tiles
    #[arg(short = 'W', long = "width")]
    width: Option<usize>,

    /// Height in tiles
    #[arg(short = 'H', long = "height")]
    height: Option<usize>,

    /// Percent of tiles pruned back to rock (0-100)
    #[arg(short = 's', long = "sparseness")]
    sparseness: Option<u32>,

    /// Percent chance per step of changing direction (0-100)
    #[arg(short = 'd', long = "direction-bias")]
    direction_bias: Option<u32>,

    /// Number of rooms to place
    #[arg(short = 'r', long = "rooms")]
    rooms: Option<usize>,

    /// Smallest room side
    #[arg(long = "room-min")]
    room_min: Option<usize>,

    /// Largest room side
    #[arg(long = "room-max")]
    room_max: Option<usize>,

    /// RNG seed (random if omitted)
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Print a JSON report instead of the map
    #[arg(long = "json")]
    json: bool,

    /// Print generation statistics and per-phase logs to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

/// Command-line errors
#[derive(Debug, Error)]
enum CliError {
    #[error("could not read {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid options file {path}: {source}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// Machine-readable description of one floor
#[derive(Debug, Serialize)]
struct FloorReport<'a> {
    seed: u64,
    options: GenerateOpts,
    stats: GenerationStats,
    rooms: &'a [Room],
    map: Vec<String>,
}

fn load_opts(path: &Path) -> Result<GenerateOpts, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    let opts = serde_json::from_str(&text).map_err(|source| CliError::ParseConfig {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loaded options from {}", path.display());
    Ok(opts)
}

/// Layer file options and flags over the defaults
fn resolve_opts(args: &Args) -> Result<GenerateOpts, CliError> {
    let mut opts = match &args.config {
        Some(path) => load_opts(path)?,
        None => GenerateOpts::default(),
    };

    if let Some(width) = args.width {
        opts.width = width;
    }
    if let Some(height) = args.height {
        opts.height = height;
    }
    if let Some(sparseness) = args.sparseness {
        opts.sparseness = sparseness;
    }
    if let Some(bias) = args.direction_bias {
        opts.direction_bias = bias;
    }
    if let Some(rooms) = args.rooms {
        opts.room_count = rooms;
    }
    if let Some(min) = args.room_min {
        opts.room_min = min;
    }
    if let Some(max) = args.room_max {
        opts.room_max = max;
    }

    opts.validate()?;
    Ok(opts)
}

fn write_report(
    out: &mut impl Write,
    dungeon: &Dungeon,
    opts: GenerateOpts,
    seed: u64,
) -> Result<(), CliError> {
    let report = FloorReport {
        seed,
        options: opts,
        stats: dungeon.stats(),
        rooms: dungeon.rooms(),
        map: dungeon.map().rows(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

fn run(args: &Args) -> Result<(), CliError> {
    let opts = resolve_opts(args)?;
    let mut rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    let seed = rng.seed();

    let dungeon = generate(&opts, &mut rng)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        write_report(&mut out, &dungeon, opts, seed)?;
    } else {
        write!(out, "{}", dungeon.map())?;
    }

    if args.verbose {
        let stats = dungeon.stats();
        eprintln!(
            "seed {seed}: {}x{} tiles, {} carved, {} jumps, {} pruned, {} rooms placed, {} skipped",
            opts.width,
            opts.height,
            stats.carved,
            stats.jumps,
            stats.pruned,
            stats.rooms_placed,
            stats.rooms_skipped
        );
    }

    Ok(())
}

/// Send log output to stderr
///
/// `--verbose` shows the generator's debug logs; `RUST_LOG` overrides either level.
fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let result = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
    if let Err(err) = result {
        eprintln!("dungen: logging disabled: {err}");
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dungen: {err}");
            ExitCode::FAILURE
        }
    }
}
