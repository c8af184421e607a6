//! Error reporting with source diagnostics.
//!
//! Uses ariadne to point at the offending part of a notation.

use ariadne::{Color, Config, Fmt, Label, Report, ReportKind, Source};
use std::io::Write;
use timebucks_parser::ParseError;

/// Diagnostic code for a parse error, e.g. `P0004`.
pub fn error_code(error: &ParseError) -> String {
    format!("P{:04}", error.kind_code())
}

/// Report a notation parse error to the given writer.
///
/// `source_name` labels the input in the report (an argument position or
/// a file name).
pub fn report_parse_error<W: Write>(
    error: &ParseError,
    source_name: &str,
    color: bool,
    writer: &mut W,
) -> std::io::Result<()> {
    let span = clamp_span(error, &error.input);

    let mut label = Label::new((source_name, span.clone())).with_message(error.label());
    if color {
        label = label.with_color(Color::Red);
    }

    let mut report = Report::build(ReportKind::Error, (source_name, span))
        .with_code(error_code(error))
        .with_message(error.message())
        .with_label(label)
        .with_config(Config::default().with_color(color).with_compact(false));
    if let Some(hint) = &error.hint {
        report = report.with_help(hint);
    }

    report
        .finish()
        .write((source_name, Source::from(error.input.as_str())), &mut *writer)
}

/// The error span as a character range, widened so empty spans stay visible.
///
/// ariadne counts characters, while parse errors carry byte offsets.
fn clamp_span(error: &ParseError, input: &str) -> std::ops::Range<usize> {
    let to_chars = |byte: usize| input.char_indices().take_while(|&(i, _)| i < byte).count();
    let start = to_chars(error.span.start);
    let end = to_chars(error.span.end).max(start + 1);
    start..end
}

/// Print a summary line for a batch of checked notations.
pub fn print_summary<W: Write>(
    checked: usize,
    failed: usize,
    color: bool,
    writer: &mut W,
) -> std::io::Result<()> {
    let noun = if checked == 1 { "notation" } else { "notations" };
    if failed == 0 {
        let mark = '\u{2713}'.fg(color.then_some(Color::Green));
        writeln!(writer, "{mark} {checked} {noun} valid")
    } else {
        let mark = '\u{2717}'.fg(color.then_some(Color::Red));
        writeln!(writer, "{mark} {failed} of {checked} {noun} invalid")
    }
}
