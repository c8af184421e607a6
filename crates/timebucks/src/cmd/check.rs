//! Implementation of the tb-check command.

use crate::cmd::init_tracing;
use crate::report;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use timebucks_parser::ParseError;

/// Output format for diagnostics.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// JSON output for tooling integration
    Json,
}

/// A diagnostic message in JSON format.
#[derive(Debug, Serialize)]
pub struct JsonDiagnostic {
    /// The rejected notation
    pub input: String,
    /// Start byte offset of the problem
    pub start: usize,
    /// End byte offset of the problem
    pub end: usize,
    /// Error code (e.g., "P0004")
    pub code: String,
    /// Error message
    pub message: String,
    /// Short label for the offending span
    pub label: String,
    /// Optional hint for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl From<&ParseError> for JsonDiagnostic {
    fn from(error: &ParseError) -> Self {
        Self {
            input: error.input.clone(),
            start: error.span.start,
            end: error.span.end,
            code: report::error_code(error),
            message: error.message(),
            label: error.label().to_string(),
            hint: error.hint.clone(),
        }
    }
}

/// JSON output structure for all diagnostics.
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    /// List of diagnostics
    pub diagnostics: Vec<JsonDiagnostic>,
    /// Number of notations checked
    pub checked: usize,
    /// Number of invalid notations
    pub error_count: usize,
}

/// Validate TimeBucks notations and report errors.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Notations to check
    #[arg(value_name = "NOTATION", required = true)]
    pub notations: Vec<String>,

    /// Print the canonical form of each valid notation
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output (just use exit code)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format (text or json)
    #[arg(long, short = 'f', value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Run the command. Exits with 1 when any notation is invalid.
///
/// `color` enables ANSI colors in diagnostics.
pub fn run<W: Write>(args: &Args, color: bool, out: &mut W) -> Result<ExitCode> {
    let mut errors = Vec::new();

    for (i, notation) in args.notations.iter().enumerate() {
        match timebucks_parser::parse(notation) {
            Ok(value) => {
                tracing::debug!(%value, "valid notation");
                if args.verbose && !args.quiet && matches!(args.format, OutputFormat::Text) {
                    writeln!(out, "{notation} => {value}")?;
                }
            }
            Err(error) => {
                tracing::debug!(input = %notation, code = error.kind_code(), "invalid notation");
                errors.push((i, error));
            }
        }
    }

    if !args.quiet {
        match args.format {
            OutputFormat::Json => {
                let output = JsonOutput {
                    diagnostics: errors.iter().map(|(_, e)| JsonDiagnostic::from(e)).collect(),
                    checked: args.notations.len(),
                    error_count: errors.len(),
                };
                serde_json::to_writer_pretty(&mut *out, &output)?;
                writeln!(out)?;
            }
            OutputFormat::Text => {
                for (i, error) in &errors {
                    let name = format!("notation #{}", i + 1);
                    report::report_parse_error(error, &name, color, out)?;
                }
                report::print_summary(args.notations.len(), errors.len(), color, out)?;
            }
        }
    }

    if errors.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

/// Main entry point for the check command.
pub fn main() -> ExitCode {
    main_with_name("tb-check")
}

/// Main entry point with custom binary name.
pub fn main_with_name(bin_name: &str) -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);
    tracing::debug!(bin = bin_name, "starting");

    let color = io::stdout().is_terminal();
    match run(&args, color, &mut io::stdout().lock()) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
