//! Result rendering.

use crate::engine::CorrelationResult;
use crate::error::CliResult;

/// Writes the correlation mapping to stdout as pretty JSON.
///
/// Stdout carries only the result; all diagnostics go to stderr via
/// tracing.
pub fn print_correlations(result: &CorrelationResult) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}
