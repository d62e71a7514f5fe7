//! Output formatting utilities for CLI.

use barrel::report::{SolutionReport, StartReport};
use barrel::Board;
use std::fmt::Write;

/// Short label such as `hole (1, 1)` or `3 holes`.
pub(super) fn describe_start(board: &Board) -> String {
    match board.single_hole() {
        Some(hole) => format!("hole {hole}"),
        None => format!("{} holes", board.empty_count()),
    }
}

/// Format a list of starting boards.
pub(super) fn format_starts(starts: &[Board]) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{} distinct starting boards\n", starts.len());
    for (i, board) in starts.iter().enumerate() {
        let _ = writeln!(output, "Start {} ({}):", i + 1, describe_start(board));
        let _ = writeln!(output, "{board}");
    }
    output
}

/// Format a solve report as human-readable text.
pub(super) fn format_text(report: &SolutionReport, show: usize) -> String {
    let mut output = String::new();

    for (i, start) in report.starts.iter().enumerate() {
        let _ = writeln!(
            output,
            "Start {} of {} ({}):",
            i + 1,
            report.starts.len(),
            describe_start(&start.board)
        );
        let _ = writeln!(output, "{}", start.board);
        let _ = writeln!(output, "  Solutions: {}", start.solutions.len());
        let _ = writeln!(output, "  Search:    {}", start.stats);
        if start.interrupted {
            output.push_str("  [stopped early, counts are partial]\n");
        }
        for (n, solution) in start.solutions.iter().take(show).enumerate() {
            let _ = writeln!(output, "\n  Solution {}:", n + 1);
            format_moves(&mut output, solution);
        }
        output.push('\n');
    }

    let _ = writeln!(
        output,
        "Total: {} solutions from {} starts",
        report.total_solutions(),
        report.starts.len()
    );
    output
}

/// Format one line per start.
pub(super) fn format_summary(report: &SolutionReport) -> String {
    let mut output = String::new();
    for start in &report.starts {
        summary_line(&mut output, start);
    }
    let _ = writeln!(output, "total: {}", report.total_solutions());
    output
}

fn summary_line(output: &mut String, start: &StartReport) {
    let _ = write!(
        output,
        "{:<16} {:>8} solutions  {:>10} nodes",
        describe_start(&start.board),
        start.solutions.len(),
        start.stats.nodes
    );
    if start.interrupted {
        output.push_str("  (partial)");
    }
    output.push('\n');
}

fn format_moves(output: &mut String, moves: &[barrel::Move]) {
    for (step, mv) in moves.iter().enumerate() {
        let _ = writeln!(output, "  {:>3}. {mv}", step + 1);
    }
}
