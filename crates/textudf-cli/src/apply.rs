//! Apply an operation to literal values, one call per value.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, trace};
use textudf_transform::{Operation, evaluate_with};

use crate::logging::redact_value;

/// Token printed for an absent result and read back as an absent input.
pub const DEFAULT_NULL_TOKEN: &str = "NULL";

/// How results are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One result per line.
    #[default]
    Text,
    /// A JSON array of `{input, output}` objects.
    Json,
}

/// Input and output of a single call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowResult {
    pub input: Option<String>,
    pub output: Option<String>,
}

/// Evaluate `operation` for every value, mapping `null_token` to an absent input.
pub fn apply_values<I, S>(operation: Option<Operation>, values: I, null_token: &str) -> Vec<RowResult>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let name = operation.map(|op| op.as_str());
    debug!(operation = name.unwrap_or("clean"), "applying operation to values");
    let results: Vec<RowResult> = values
        .into_iter()
        .map(|value| {
            let value = value.as_ref();
            let input = (value != null_token).then(|| value.to_string());
            let output = evaluate_with(input.as_deref(), name);
            trace!(
                input = input.as_deref().map(redact_value),
                output = output.as_deref().map(redact_value),
                "evaluated value"
            );
            RowResult { input, output }
        })
        .collect();
    info!(values = results.len(), "applied operation");
    results
}

/// Write results in the requested format.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_results<W: Write>(
    results: &[RowResult],
    format: OutputFormat,
    null_token: &str,
    mut out: W,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for result in results {
                writeln!(out, "{}", result.output.as_deref().unwrap_or(null_token))
                    .context("write result")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, results).context("serialize results")?;
            writeln!(out).context("write result")?;
        }
    }
    out.flush().context("flush output")
}
