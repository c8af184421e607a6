//! Parse error types.

use crate::Span;
use thiserror::Error;
use timebucks_core::DateError;

/// A notation that could not be parsed.
///
/// The `Display` output names the whole input; [`kind`](Self::kind) and
/// [`span`](Self::span) say what went wrong and where.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid TimeBucks notation: {input}")]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// The span where the error occurred.
    pub span: Span,
    /// The rejected input, verbatim.
    pub input: String,
    /// Optional hint for fixing the error.
    pub hint: Option<String>,
}

impl ParseError {
    /// Create a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, span: Span, input: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            input: input.into(),
            hint: None,
        }
    }

    /// Add a hint for fixing this error.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Get a numeric code for the error kind.
    #[must_use]
    pub const fn kind_code(&self) -> u32 {
        match &self.kind {
            ParseErrorKind::Empty => 1,
            ParseErrorKind::UnknownCurrency(_) => 2,
            ParseErrorKind::MissingAmount => 3,
            ParseErrorKind::InvalidAmount(_) => 4,
            ParseErrorKind::Expected(_) => 5,
            ParseErrorKind::InvalidDate(_) => 6,
            ParseErrorKind::InvalidMethod(_) => 7,
            ParseErrorKind::UnclosedBracket => 8,
            ParseErrorKind::TrailingInput(_) => 9,
            ParseErrorKind::Syntax(_) => 10,
        }
    }

    /// Get the detailed error message.
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Get a short label for the error.
    #[must_use]
    pub const fn label(&self) -> &str {
        match &self.kind {
            ParseErrorKind::Empty => "empty input",
            ParseErrorKind::UnknownCurrency(_) => "unknown currency",
            ParseErrorKind::MissingAmount => "expected amount",
            ParseErrorKind::InvalidAmount(_) => "invalid amount",
            ParseErrorKind::Expected(_) => "unexpected input",
            ParseErrorKind::InvalidDate(_) => "invalid date",
            ParseErrorKind::InvalidMethod(_) => "invalid method",
            ParseErrorKind::UnclosedBracket => "unclosed bracket",
            ParseErrorKind::TrailingInput(_) => "trailing input",
            ParseErrorKind::Syntax(_) => "syntax error",
        }
    }
}

/// Kinds of parse errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The input is empty.
    #[error("empty notation")]
    Empty,
    /// The input does not start with a supported currency symbol.
    #[error("unknown currency symbol '{0}'")]
    UnknownCurrency(String),
    /// No digits follow the currency symbol.
    #[error("expected an amount after the currency symbol")]
    MissingAmount,
    /// The amount is malformed, e.g. one or three fraction digits.
    #[error("invalid amount '{0}'")]
    InvalidAmount(String),
    /// A specific piece of syntax was expected.
    #[error("expected {0}")]
    Expected(&'static str),
    /// The date fields do not form a valid date.
    #[error("invalid date: {0}")]
    InvalidDate(DateError),
    /// The method name is not `NAME` or `NAME:QUALIFIER`.
    #[error("invalid method '{0}'")]
    InvalidMethod(String),
    /// A `[` with no matching `]`.
    #[error("unclosed '[' in provenance")]
    UnclosedBracket,
    /// Characters remain after a complete notation.
    #[error("unexpected trailing input '{0}'")]
    TrailingInput(String),
    /// The grammar itself rejected the input.
    #[error("syntax error: {0}")]
    Syntax(String),
}
