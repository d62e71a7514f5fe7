//! Report verification command implementation.

use super::CliError;
use barrel::report::SolutionReport;
use std::path::Path;

/// Execute the verify command.
///
/// # Errors
///
/// Returns an error if the report cannot be loaded or a solution fails to
/// replay.
pub(crate) fn execute(path: &Path) -> Result<(), CliError> {
    let report = SolutionReport::load(path)
        .map_err(|e| CliError::new(format!("Failed to load {}: {e}", path.display())))?;

    println!("Verifying: {}", path.display());
    let checked = report.verify()?;

    let partial = report.starts.iter().filter(|s| s.interrupted).count();
    println!(
        "  ✓ {checked} solutions from {} starts replay to a single peg",
        report.starts.len()
    );
    if partial > 0 {
        println!("  ! {partial} starts were stopped early and may be incomplete");
    }

    Ok(())
}
