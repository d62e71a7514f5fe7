//! Solve command implementation.

use super::output::{describe_start, format_summary, format_text};
use super::{CliError, SolveFormat};
use barrel::report::SolutionReport;
use barrel::{Board, Location, Solver, SolverConfig, canonical_starts};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Arguments for the solve command.
#[derive(Debug)]
pub(crate) struct SolveArgs {
    pub(crate) edge: u8,
    pub(crate) hole: Option<Location>,
    pub(crate) board: Option<String>,
    pub(crate) threads: Option<usize>,
    pub(crate) parallel_depth: Option<u8>,
    pub(crate) time_limit: Option<u64>,
    pub(crate) no_prune: bool,
    pub(crate) format: SolveFormat,
    pub(crate) show: usize,
    pub(crate) save: Option<PathBuf>,
    pub(crate) progress: bool,
}

/// Execute the solve command.
///
/// # Errors
///
/// Returns an error if the starting board is invalid or the report cannot
/// be written.
pub(crate) fn execute(args: SolveArgs) -> Result<(), CliError> {
    let starts = starting_boards(&args)?;

    // Set thread pool size if specified
    if let Some(num_threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    let mut config = SolverConfig::default();
    if let Some(depth) = args.parallel_depth {
        config.parallel_depth = depth;
    }
    if let Some(secs) = args.time_limit {
        config.time_limit = Some(Duration::from_secs(secs));
    }
    config.prune_dead_ends = !args.no_prune;
    let solver = Solver::new(config);

    let pb = if args.progress {
        let pb = ProgressBar::new(starts.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} starts {msg}")
                .map_err(|e| CliError::new(format!("Invalid progress template: {e}")))?
                .progress_chars("=>-"),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();
    let mut report = SolutionReport::new();

    for board in starts {
        if let Some(pb) = &pb {
            pb.set_message(describe_start(&board));
        }
        let outcome = solver.solve_board(&board);
        if outcome.interrupted {
            eprintln!(
                "Time limit reached while solving {}; results are partial",
                describe_start(&board)
            );
        }
        report.push(board, outcome);
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }
    let duration = start.elapsed();

    if let Some(save_path) = &args.save {
        report.save(save_path).map_err(|e| {
            CliError::new(format!("Failed to save report to {}: {e}", save_path.display()))
        })?;
        eprintln!("Report saved to: {}", save_path.display());
    }

    match args.format {
        SolveFormat::Text => {
            print!("{}", format_text(&report, args.show));
            println!("Duration: {:.2}s", duration.as_secs_f64());
        }
        SolveFormat::Summary => print!("{}", format_summary(&report)),
        SolveFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

/// Boards selected by the command line: a literal board, a single hole, or
/// every distinct single-hole start.
fn starting_boards(args: &SolveArgs) -> Result<Vec<Board>, CliError> {
    if let Some(text) = &args.board {
        let board: Board = text
            .parse()
            .map_err(|e| CliError::new(format!("Invalid board {text:?}: {e}")))?;
        return Ok(vec![board]);
    }

    if let Some(hole) = args.hole {
        let board = Board::new(args.edge, hole)?;
        if !board.is_valid_location(hole) {
            return Err(CliError::new(format!(
                "Hole {hole} is not on a board of edge size {}",
                args.edge
            )));
        }
        return Ok(vec![board]);
    }

    Ok(canonical_starts(args.edge)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> SolveArgs {
        SolveArgs {
            edge: 5,
            hole: None,
            board: None,
            threads: None,
            parallel_depth: None,
            time_limit: None,
            no_prune: false,
            format: SolveFormat::Summary,
            show: 1,
            save: None,
            progress: false,
        }
    }

    #[test]
    fn test_default_selects_canonical_starts() {
        assert_eq!(starting_boards(&args()).unwrap().len(), 5);
    }

    #[test]
    fn test_hole_off_board_rejected() {
        let mut args = args();
        args.hole = Some(Location::new(2, 3));
        assert!(starting_boards(&args).is_err());
    }

    #[test]
    fn test_literal_board() {
        let mut args = args();
        args.board = Some("./oo./...".into());
        assert!(starting_boards(&args).is_err());
        args.board = Some("./o./oo.".into());
        let boards = starting_boards(&args).unwrap();
        assert_eq!(boards[0].edge_size(), 3);
    }
}
