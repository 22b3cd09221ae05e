//! CLI argument definitions for the textudf harness.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use textudf_analytics::CleanKind;
use textudf_transform::Operation;

#[derive(Parser)]
#[command(
    name = "textudf",
    version,
    about = "Run the textudf string functions outside the query engine",
    long_about = "Run the textudf string and text-analytics functions locally.\n\n\
                  Applies one operation per value, exactly as the query engine would\n\
                  call the UDF once per row."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Prefix log lines with timestamps (pretty and compact formats).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include row values in trace logs (they are redacted by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Apply an operation to each value (or each stdin line).
    Apply(ApplyArgs),

    /// Apply an operation to one column of a CSV file, row by row.
    Csv(CsvArgs),

    /// List all supported operations.
    Ops,

    /// Report sentiment, keywords, language, and word counts for a text.
    Analyze(AnalyzeArgs),

    /// Jaccard similarity of two texts' word sets.
    Similarity {
        first: String,
        second: String,
    },

    /// Remove HTML, emails, phones, URLs, punctuation, numbers, or whitespace.
    CleanText {
        /// Cleaning type.
        #[arg(value_parser = parse_clean_kind)]
        kind: CleanKind,
        text: String,
    },
}

#[derive(Args)]
pub struct ApplyArgs {
    /// Operation name (case-insensitive). See `textudf ops`.
    #[arg(value_name = "OPERATION", value_parser = parse_operation)]
    pub operation: Operation,

    /// Values to transform. Reads stdin lines when omitted.
    #[arg(value_name = "VALUES")]
    pub values: Vec<String>,

    /// Token standing for NULL, both in input and output.
    #[arg(long = "null", default_value = textudf_cli::apply::DEFAULT_NULL_TOKEN)]
    pub null_token: String,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct CsvArgs {
    /// Input CSV file with a header row.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Column to transform.
    #[arg(long = "column", value_name = "NAME")]
    pub column: String,

    /// Operation name (case-insensitive).
    #[arg(long = "op", value_name = "OPERATION", value_parser = parse_operation)]
    pub operation: Operation,

    /// Write results to a new column instead of replacing the source column.
    #[arg(long = "target", value_name = "NAME")]
    pub target: Option<String>,

    /// Output file (default: stdout).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Field delimiter.
    #[arg(long = "delimiter", default_value_t = ',', value_parser = parse_delimiter)]
    pub delimiter: char,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    pub text: String,

    /// Print the report as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Text,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_operation(value: &str) -> Result<Operation, String> {
    value.parse::<Operation>().map_err(|error| {
        let known: Vec<&str> = Operation::ALL.iter().map(Operation::as_str).collect();
        format!("{error} (expected one of: {})", known.join(", "))
    })
}

fn parse_clean_kind(value: &str) -> Result<CleanKind, String> {
    value.parse::<CleanKind>().map_err(|error| {
        let known: Vec<&str> = CleanKind::ALL.iter().map(CleanKind::as_str).collect();
        format!("{error} (expected one of: {})", known.join(", "))
    })
}

fn parse_delimiter(value: &str) -> Result<char, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii() => Ok(ch),
        _ => Err(format!("delimiter must be a single ASCII character, got '{value}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn unknown_operation_lists_valid_names() {
        let error = Cli::try_parse_from(["textudf", "apply", "bogus", "x"])
            .err()
            .expect("unknown operation should be rejected");
        let message = error.to_string();
        assert!(message.contains("unknown operation: bogus"), "{message}");
        assert!(message.contains("expected one of:"), "{message}");
        assert!(message.contains("extract_numbers"), "{message}");
    }

    #[test]
    fn unknown_clean_kind_lists_valid_names() {
        let error = Cli::try_parse_from(["textudf", "clean-text", "sparkle", "x"])
            .err()
            .expect("unknown clean kind should be rejected");
        let message = error.to_string();
        assert!(message.contains("expected one of:"), "{message}");
        assert!(message.contains("punctuation"), "{message}");
    }

    #[test]
    fn operation_names_parse_case_insensitively() {
        let cli = Cli::try_parse_from(["textudf", "apply", "MASK_EMAIL", "a@b.io"]).unwrap();
        match cli.command {
            Command::Apply(args) => {
                assert_eq!(args.operation, Operation::MaskEmail);
                assert_eq!(args.values, vec!["a@b.io".to_string()]);
            }
            _ => panic!("expected apply command"),
        }
    }

    #[test]
    fn delimiter_must_be_single_ascii_char() {
        let args = [
            "textudf",
            "csv",
            "in.csv",
            "--column",
            "a",
            "--op",
            "upper",
            "--delimiter",
            ";;",
        ];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
