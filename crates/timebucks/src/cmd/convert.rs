//! Implementation of the tb-convert command.

use crate::cmd::{index_file, init_tracing};
use crate::report;
use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use timebucks_core::{Conversion, Method, TemporalDate, TransformationRegistry};

/// Convert a TimeBucks value to another date.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The value to convert, e.g. '$100@1970'
    #[arg(value_name = "NOTATION", required_unless_present = "list_methods")]
    pub notation: Option<String>,

    /// Target date: YYYY, YYYY-MM or YYYY-MM-DD
    #[arg(long, short = 't', value_name = "DATE", required_unless_present = "list_methods")]
    pub to: Option<TemporalDate>,

    /// Transformation method (can be specified multiple times)
    #[arg(long = "method", short = 'm', value_name = "METHOD", default_value = "CPI")]
    pub methods: Vec<String>,

    /// Load custom methods from a JSON index file (can be specified multiple times)
    #[arg(long = "index-file", short = 'i', value_name = "FILE")]
    pub index_files: Vec<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Show the rate applied by each method and debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// List the available methods and exit
    #[arg(long)]
    pub list_methods: bool,
}

/// JSON output for a conversion run.
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    /// The input notation in canonical form.
    pub input: String,
    /// The target date.
    pub target: TemporalDate,
    /// One entry per requested method, in request order.
    pub conversions: Vec<JsonConversion>,
}

/// One method's conversion in JSON output.
#[derive(Debug, Serialize)]
pub struct JsonConversion {
    /// The method applied.
    pub method: Method,
    /// The converted value in canonical notation.
    pub notation: String,
    /// Original, result and rate.
    #[serde(flatten)]
    pub conversion: Conversion,
}

/// Run the command, writing results to `out` and diagnostics to `err`.
///
/// `color` enables ANSI colors in notation diagnostics.
pub fn run<W: Write, E: Write>(
    args: &Args,
    color: bool,
    out: &mut W,
    err: &mut E,
) -> Result<ExitCode> {
    let registry = TransformationRegistry::new();
    for path in &args.index_files {
        index_file::load(path, &registry)?;
    }

    if args.list_methods {
        for summary in registry.describe() {
            let (method, description) = (&summary.method, &summary.description);
            match summary.coverage {
                Some((first, last)) => {
                    writeln!(out, "{method:<16} {description} ({first}-{last})")?;
                }
                None => writeln!(out, "{method:<16} {description}")?,
            }
        }
        return Ok(ExitCode::SUCCESS);
    }

    let notation = args.notation.as_deref().context("missing NOTATION")?;
    let target = args.to.context("missing --to")?;

    let value = match timebucks_parser::parse(notation) {
        Ok(value) => value,
        Err(parse_error) => {
            report::report_parse_error(&parse_error, "NOTATION", color, err)?;
            return Ok(ExitCode::from(1));
        }
    };
    tracing::debug!(%value, %target, methods = ?args.methods, "converting");

    let mut conversions = Vec::with_capacity(args.methods.len());
    for method in &args.methods {
        let conversion = registry
            .explain(&value, method, target)
            .with_context(|| format!("cannot convert {value} with {method}"))?;
        conversions.push(JsonConversion {
            method: Method::new(method.as_str()),
            notation: conversion.result.to_string(),
            conversion,
        });
    }

    if args.json {
        let output = JsonOutput {
            input: value.to_string(),
            target,
            conversions,
        };
        serde_json::to_writer_pretty(&mut *out, &output)?;
        writeln!(out)?;
    } else {
        for c in &conversions {
            if args.verbose {
                let rate = c
                    .conversion
                    .rate
                    .map_or_else(|| "n/a".to_string(), |r| r.round_dp(6).normalize().to_string());
                writeln!(out, "{:<8} {}  (rate {rate})", c.method, c.notation)?;
            } else {
                writeln!(out, "{}", c.notation)?;
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Main entry point for the convert command.
pub fn main() -> ExitCode {
    main_with_name("tb-convert")
}

/// Main entry point with custom binary name.
pub fn main_with_name(bin_name: &str) -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);
    tracing::debug!(bin = bin_name, "starting");

    let color = io::stderr().is_terminal();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    match run(&args, color, &mut stdout, &mut stderr) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
