//! Per-row transformation of one CSV column.
//!
//! Mirrors how the host engine calls the UDF: once per row, with an empty
//! cell standing in for SQL NULL. Absent results are written as empty cells.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use tracing::{info, info_span, trace, warn};
use textudf_transform::Operation;

use crate::logging::redact_value;

/// Options for a CSV column transform.
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Source column name (exact match first, then ASCII case-insensitive).
    pub column: String,
    /// Operation applied to every cell.
    pub operation: Operation,
    /// Write results to this new column instead of replacing the source.
    pub target: Option<String>,
    /// Field delimiter for both input and output.
    pub delimiter: u8,
}

impl CsvOptions {
    pub fn new(column: impl Into<String>, operation: Operation) -> Self {
        Self {
            column: column.into(),
            operation,
            target: None,
            delimiter: b',',
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: Option<String>) -> Self {
        self.target = target;
        self
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Counts reported after a CSV transform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CsvSummary {
    /// Data rows processed.
    pub rows: usize,
    /// Rows whose input cell was empty.
    pub null_inputs: usize,
    /// Rows whose result was absent.
    pub null_outputs: usize,
    /// Rows whose result differs from the input.
    pub changed: usize,
}

/// Resolve a header name, preferring an exact match.
fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header == name)
        .or_else(|| {
            headers
                .iter()
                .position(|header| header.eq_ignore_ascii_case(name))
        })
}

/// Transform one column of a headed CSV stream.
///
/// Rows shorter than the header are padded with empty cells. Rows longer
/// than the header keep their extra fields; a target column is inserted
/// right after the header-width fields, ahead of the extras.
///
/// # Errors
///
/// Returns an error if the column does not exist, the target column already
/// exists, or reading / writing CSV fails.
pub fn transform_csv<R: Read, W: Write>(
    reader: R,
    writer: W,
    options: &CsvOptions,
) -> Result<CsvSummary> {
    let span = info_span!("csv", column = %options.column, operation = %options.operation);
    let _guard = span.enter();

    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .flexible(true)
        .from_reader(reader);
    let mut writer = WriterBuilder::new()
        .delimiter(options.delimiter)
        .flexible(true)
        .from_writer(writer);

    let mut headers = reader.headers().context("read CSV header")?.clone();
    let source = find_column(&headers, &options.column).ok_or_else(|| {
        anyhow!(
            "column '{}' not found (available: {})",
            options.column,
            headers.iter().collect::<Vec<_>>().join(", ")
        )
    })?;
    let width = headers.len();
    let destination = match &options.target {
        Some(target) => {
            if find_column(&headers, target).is_some() {
                bail!("target column '{target}' already exists");
            }
            headers.push_field(target);
            width
        }
        None => source,
    };
    writer.write_record(&headers).context("write CSV header")?;

    let mut summary = CsvSummary::default();
    for (index, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("read CSV row {}", index + 1))?;
        if record.len() != width {
            warn!(row = index + 1, fields = record.len(), expected = width, "row length mismatch");
        }
        let mut fields: Vec<&str> = record.iter().collect();
        if fields.len() < width {
            fields.resize(width, "");
        }

        let input = Some(fields[source]).filter(|value| !value.is_empty());
        let output = input.and_then(|value| options.operation.apply(value));
        trace!(
            row = index + 1,
            input = input.map(redact_value),
            output = output.as_deref().map(redact_value),
            "transformed cell"
        );

        summary.rows += 1;
        if input.is_none() {
            summary.null_inputs += 1;
        }
        if output.is_none() {
            summary.null_outputs += 1;
        }
        if output.as_deref() != input {
            summary.changed += 1;
        }

        let cell = output.as_deref().unwrap_or("");
        if destination == width {
            fields.insert(width, cell);
        } else {
            fields[destination] = cell;
        }
        writer.write_record(&fields).context("write CSV row")?;
    }
    writer.flush().context("flush CSV output")?;

    info!(
        rows = summary.rows,
        changed = summary.changed,
        null_outputs = summary.null_outputs,
        "transformed column"
    );
    Ok(summary)
}

/// Transform a CSV file, writing to `output` or stdout.
///
/// # Errors
///
/// Returns an error if either file cannot be opened or the transform fails.
pub fn transform_csv_file(
    input: &Path,
    output: Option<&Path>,
    options: &CsvOptions,
) -> Result<CsvSummary> {
    let reader = BufReader::new(
        File::open(input).with_context(|| format!("open {}", input.display()))?,
    );
    match output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
            transform_csv(reader, BufWriter::new(file), options)
        }
        None => transform_csv(reader, io::stdout().lock(), options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str, options: &CsvOptions) -> (String, CsvSummary) {
        let mut out = Vec::new();
        let summary = transform_csv(input.as_bytes(), &mut out, options).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn replaces_column_in_place() {
        let options = CsvOptions::new("name", Operation::Clean);
        let (output, summary) = run("id,name\n1,  ada  LOVELACE\n2,\n", &options);

        assert_eq!(output, "id,name\n1,Ada Lovelace\n2,\n");
        assert_eq!(summary.rows, 2);
        assert_eq!(summary.null_inputs, 1);
        assert_eq!(summary.null_outputs, 1);
        assert_eq!(summary.changed, 1);
    }

    #[test]
    fn writes_to_new_column() {
        let options =
            CsvOptions::new("EMAIL", Operation::MaskEmail).with_target(Some("masked".to_string()));
        let (output, _) = run("email\nuser@example.com\n", &options);

        assert_eq!(output, "email,masked\nuser@example.com,u**r@e*****e.com\n");
    }

    #[test]
    fn short_rows_are_padded() {
        let options = CsvOptions::new("b", Operation::Upper);
        let (output, _) = run("a,b\nx\n", &options);

        assert_eq!(output, "a,b\nx,\n");
    }

    #[test]
    fn long_rows_keep_extra_fields() {
        let options = CsvOptions::new("b", Operation::Upper);
        let (output, _) = run("a,b\nx,y,z\n", &options);
        assert_eq!(output, "a,b\nx,Y,z\n");

        let options =
            CsvOptions::new("a", Operation::Upper).with_target(Some("upper".to_string()));
        let (output, _) = run("a,b\nx,y,z\nw\n", &options);
        assert_eq!(output, "a,b,upper\nx,y,X,z\nw,,W\n");
    }

    #[test]
    fn missing_column_is_an_error() {
        let options = CsvOptions::new("phone", Operation::MaskPhone);
        let error = transform_csv("id,name\n1,a\n".as_bytes(), Vec::new(), &options).unwrap_err();

        assert!(error.to_string().contains("column 'phone' not found"));
    }

    #[test]
    fn existing_target_is_an_error() {
        let options =
            CsvOptions::new("a", Operation::Upper).with_target(Some("B".to_string()));
        let error = transform_csv("a,b\nx,y\n".as_bytes(), Vec::new(), &options).unwrap_err();

        assert!(error.to_string().contains("already exists"));
    }
}
