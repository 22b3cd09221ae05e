use std::io::{self, BufRead};

use anyhow::{Context, Result};
use tracing::info;

use textudf_analytics::{CleanKind, analyze, similarity};
use textudf_cli::apply::{OutputFormat, apply_values, write_results};
use textudf_cli::csv_column::{CsvOptions, CsvSummary, transform_csv_file};
use textudf_cli::summary::{csv_summary_table, operations_table, report_table};

use crate::cli::{AnalyzeArgs, ApplyArgs, CsvArgs, OutputFormatArg};

pub fn run_apply(args: &ApplyArgs) -> Result<()> {
    let values = if args.values.is_empty() {
        read_stdin_lines()?
    } else {
        args.values.clone()
    };
    let results = apply_values(Some(args.operation), &values, &args.null_token);
    let format = match args.format {
        OutputFormatArg::Text => OutputFormat::Text,
        OutputFormatArg::Json => OutputFormat::Json,
    };
    write_results(&results, format, &args.null_token, io::stdout().lock())
}

pub fn run_csv(args: &CsvArgs) -> Result<CsvSummary> {
    let delimiter = u8::try_from(args.delimiter).context("delimiter must be ASCII")?;
    let options = CsvOptions::new(args.column.as_str(), args.operation)
        .with_target(args.target.clone())
        .with_delimiter(delimiter);
    let summary = transform_csv_file(&args.input, args.output.as_deref(), &options)?;
    if let Some(path) = &args.output {
        info!(path = %path.display(), "wrote CSV output");
        println!("{}", csv_summary_table(&summary));
    }
    Ok(summary)
}

pub fn run_ops() {
    println!("{}", operations_table());
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    let report = analyze(&args.text);
    if args.json {
        let json = serde_json::to_string_pretty(&report).context("serialize report")?;
        println!("{json}");
    } else {
        println!("{}", report_table(&report));
    }
    Ok(())
}

pub fn run_similarity(first: &str, second: &str) {
    println!("{:.4}", similarity(first, second));
}

pub fn run_clean_text(kind: CleanKind, text: &str) {
    println!("{}", kind.apply(text));
}

fn read_stdin_lines() -> Result<Vec<String>> {
    io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("read values from stdin")
}
