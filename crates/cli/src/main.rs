//! LC-2K pipeline simulator CLI.
//!
//! This binary loads a machine-code file and runs it to HALT. It performs:
//! 1. **Listing:** Prints every loaded word with its hex, decimal and assembly forms.
//! 2. **Tracing:** Prints the full machine state before every cycle (unless `--quiet`).
//! 3. **Summary:** Prints the cycle count and final state, plus statistics on request.
//!
//! Everything on stdout is the diagnostic report; logging and statistics go to stderr.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lc2k_core::config::Config;
use lc2k_core::sim::loader::load_program;
use lc2k_core::sim::report::{HaltSummary, ProgramListing, StateDump};
use lc2k_core::sim::Simulator;

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "LC-2K cycle-accurate pipeline simulator",
    long_about = "Run an LC-2K machine-code file on the five-stage pipeline.\n\nThe file holds one decimal word per line. The state before every cycle is printed to stdout.\n\nExamples:\n  sim program.mc\n  sim program.mc --quiet --stats\n  sim program.mc --config sim.json"
)]
struct Cli {
    /// Machine-code file (one decimal integer per line).
    file: PathBuf,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip the per-cycle state dump.
    #[arg(short, long)]
    quiet: bool,

    /// Print simulation statistics to stderr after halting.
    #[arg(short, long)]
    stats: bool,
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `trace` with instruction
/// tracing enabled and `warn` without.
fn init_logging(trace_instructions: bool) {
    let default_level = if trace_instructions { "trace" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let config = match cli.config.as_deref().map(Config::from_json_file) {
        None => Config::default(),
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };
    init_logging(config.general.trace_instructions);

    let program = load_program(&cli.file).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        process::exit(1);
    });
    let mut sim = Simulator::new(&program, &config).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        process::exit(1);
    });

    print!("{}", ProgramListing(program.words()));

    let print_state = config.general.print_state && !cli.quiet;
    let result = sim.run(|state| {
        if print_state {
            print!("{}", StateDump(state));
        }
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        print!("{}", StateDump(sim.state()));
        if cli.stats {
            sim.stats().print();
        }
        process::exit(1);
    }

    print!("{}", HaltSummary(sim.state()));
    if cli.stats {
        sim.stats().print();
    }
}
