//! Virtual-memory paging simulator CLI.
//!
//! This binary wires the simulation library to the command line. It performs:
//! 1. **Configuration:** Resolves the one-letter algorithm code, the output
//!    option string, the frame-pool size, and an optional JSON cost-model
//!    override into a validated `Config`.
//! 2. **Loading:** Parses the declarations + trace input file and the
//!    random number table.
//! 3. **Run:** Replays the trace and writes the enabled reports to stdout.
//!
//! Diagnostics go to stderr; set `RUST_LOG=vmsim_core=trace` to watch fault
//! handling without disturbing the report stream.

use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::process;

use vmsim_core::Config;
use vmsim_core::common::SimError;
use vmsim_core::config::{Algorithm, OutputOptions};
use vmsim_core::rng::RandomSource;
use vmsim_core::sim::{Engine, loader};

#[derive(Parser, Debug)]
#[command(
    name = "vmsim",
    version,
    about = "Virtual-memory paging simulator",
    long_about = "Replay a memory-reference trace against a shared frame pool under a \
                  selectable page-replacement policy, producing deterministic reports.\n\n\
                  Examples:\n  \
                  vmsim -a f -o OPFS -f 16 infile rfile\n  \
                  vmsim -a c -o S -f 32 --config costs.json infile rfile"
)]
struct Cli {
    /// Replacement algorithm: f FIFO, s SecondChance, r Random, n NRU, c Clock, a Aging.
    #[arg(short = 'a', value_name = "ALGO")]
    algorithm: char,

    /// Output options: any combination of O (trace), P (page tables), F (frame table), S (summary).
    #[arg(short = 'o', value_name = "OPTIONS", default_value = "")]
    options: String,

    /// Number of physical frames in the pool.
    #[arg(short = 'f', value_name = "FRAMES")]
    frames: usize,

    /// JSON file overriding the default cost model.
    #[arg(long, value_name = "FILE")]
    config: Option<String>,

    /// Input file: process/VMA declarations followed by the instruction trace.
    input: String,

    /// Random number table file.
    rfile: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("vmsim: {e}");
        process::exit(1);
    }
}

/// Builds the configuration, loads the inputs, and replays the trace.
fn run(cli: Cli) -> Result<(), SimError> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| SimError::Read {
                path: path.clone(),
                source,
            })?;
            Config::from_json(&text)?
        }
        None => Config::default(),
    };
    config.algorithm = Algorithm::from_code(cli.algorithm)?;
    config.output = OutputOptions::from_flags(&cli.options)?;
    config.num_frames = cli.frames;
    config.validate()?;

    let input = loader::load_input(&cli.input)?;
    let rng = RandomSource::from_file(&cli.rfile)?;

    let stdout = io::stdout();
    let mut engine = Engine::new(
        config,
        input.processes,
        rng,
        io::BufWriter::new(stdout.lock()),
    );
    engine.run(&input.instructions)?;
    engine.into_output().flush()?;
    Ok(())
}
