//! Starts command implementation.

use super::output::format_starts;
use super::{CliError, StartsFormat};
use barrel::canonical_starts;

/// Execute the starts command.
///
/// # Errors
///
/// Returns an error if the edge size is not supported.
pub(crate) fn execute(edge: u8, format: StartsFormat) -> Result<(), CliError> {
    let starts = canonical_starts(edge)?;

    match format {
        StartsFormat::Text => print!("{}", format_starts(&starts)),
        StartsFormat::Json => println!("{}", serde_json::to_string_pretty(&starts)?),
    }

    Ok(())
}
