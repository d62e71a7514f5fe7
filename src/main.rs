//! Barrel CLI - solve triangular peg solitaire from the command line.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use barrel::{DEFAULT_EDGE_SIZE, Location};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Barrel - exhaustive solver for the cracker barrel peg puzzle
#[derive(Parser, Debug)]
#[command(name = "barrel")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// List the distinct single-hole starting boards
    Starts {
        /// Edge size of the triangle (default: 5)
        #[arg(short, long, default_value_t = DEFAULT_EDGE_SIZE)]
        edge: u8,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::StartsFormat,
    },

    /// Find every way to finish with a single peg
    Solve {
        /// Edge size of the triangle (default: 5)
        #[arg(short, long, default_value_t = DEFAULT_EDGE_SIZE)]
        edge: u8,

        /// Solve the board with a single hole at ROW,COL
        #[arg(long, value_parser = cli::parse_location, conflicts_with = "board")]
        hole: Option<Location>,

        /// Solve a literal board, rows separated by '/' (e.g. "./oo/ooo")
        #[arg(long)]
        board: Option<String>,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Tree levels searched in parallel (default: 2)
        #[arg(long)]
        parallel_depth: Option<u8>,

        /// Give up after this many seconds
        #[arg(short, long)]
        time_limit: Option<u64>,

        /// Disable the dead-end cache
        #[arg(long)]
        no_prune: bool,

        /// Output format: text, summary, or json
        #[arg(short, long, default_value = "text")]
        format: cli::SolveFormat,

        /// Solutions to print per start in text format
        #[arg(long, default_value = "1")]
        show: usize,

        /// Save the full report to a JSON file
        #[arg(long)]
        save: Option<PathBuf>,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,
    },

    /// Replay every solution in a saved report
    Verify {
        /// Report file written by `solve --save`
        #[arg(required = true)]
        report: PathBuf,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Starts { edge, format } => cli::starts::execute(edge, format),

        Commands::Solve {
            edge,
            hole,
            board,
            threads,
            parallel_depth,
            time_limit,
            no_prune,
            format,
            show,
            save,
            progress,
        } => cli::solve::execute(cli::solve::SolveArgs {
            edge,
            hole,
            board,
            threads,
            parallel_depth,
            time_limit,
            no_prune,
            format,
            show,
            save,
            progress,
        }),

        Commands::Verify { report } => cli::verify::execute(&report),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
