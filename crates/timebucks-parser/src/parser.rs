//! Notation grammar.
//!
//! ```text
//! <symbol><amount>@<date>[ '[' <method>:<date> ']' ]
//! <date> = YYYY [-MM [-DD]]
//! ```
//!
//! Parsing runs in two passes. The chumsky grammar splits the input into
//! spanned raw pieces and accepts any input, leaving widths, digits and
//! calendar checks to the lowering pass, which reports the first problem in
//! reading order. The whole input must match; nothing is trimmed.

use chumsky::prelude::*;
use rust_decimal::Decimal;
use timebucks_core::{currency::SYMBOLS, Currency, Method, Provenance, TemporalDate};

use crate::{ParseError, ParseErrorKind, Span};

type ParserInput<'a> = &'a str;
type ParserExtra<'a> = extra::Err<Rich<'a, char>>;

const EXAMPLE_HINT: &str = "a notation looks like $100@1970 or $799.74@2024[CPI:1970]";
const FRACTION_HINT: &str = "fractional amounts need exactly two digits, e.g. 100.50";
const PRECISION_HINT: &str = "amounts beyond 28 significant digits cannot be represented exactly";
const METHOD_HINT: &str = "methods are upper case, e.g. CPI or CUSTOM:RENT";

/// Fields of a successfully parsed notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Fields {
    pub currency: Currency,
    pub amount: Decimal,
    pub date: TemporalDate,
    pub provenance: Option<Provenance>,
}

/// Parse a complete notation.
pub(crate) fn parse_fields(input: &str) -> Result<Fields, ParseError> {
    if input.is_empty() {
        return Err(
            ParseError::new(ParseErrorKind::Empty, Span::point(0), input).with_hint(EXAMPLE_HINT)
        );
    }

    let raw = notation()
        .parse(input)
        .into_result()
        .map_err(|errs| syntax_error(errs, input, 0))?;
    raw.lower(input)
}

// ============================================================================
// Raw pieces
// ============================================================================

/// A slice of the input and where it sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Piece<'a> {
    text: &'a str,
    span: Span,
}

impl Piece<'_> {
    const fn shifted(self, offset: usize) -> Self {
        Self {
            text: self.text,
            span: Span::new(self.span.start + offset, self.span.end + offset),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct RawAmount<'a> {
    integral: Piece<'a>,
    /// Digits after the `.`, if there was one.
    fraction: Option<Piece<'a>>,
    span: Span,
}

#[derive(Debug, Clone, Copy)]
struct RawDate<'a> {
    year: Piece<'a>,
    month: Option<Piece<'a>>,
    day: Option<Piece<'a>>,
}

impl RawDate<'_> {
    fn span(&self) -> Span {
        let last = self.day.or(self.month).unwrap_or(self.year);
        self.year.span.merge(&last.span)
    }

    fn shifted(self, offset: usize) -> Self {
        Self {
            year: self.year.shifted(offset),
            month: self.month.map(|m| m.shifted(offset)),
            day: self.day.map(|d| d.shifted(offset)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct RawProvenance<'a> {
    open: Span,
    content: Piece<'a>,
    closed: bool,
}

#[derive(Debug, Clone, Copy)]
struct RawNotation<'a> {
    currency: Option<Currency>,
    currency_span: Span,
    amount: RawAmount<'a>,
    /// Whether the `@` was present, and where it was looked for.
    at: (bool, Span),
    date: RawDate<'a>,
    provenance: Option<RawProvenance<'a>>,
    rest: Piece<'a>,
}

// ============================================================================
// Grammar
// ============================================================================

/// Convert a `SimpleSpan` to our Span type.
const fn to_span(s: SimpleSpan) -> Span {
    Span::new(s.start, s.end)
}

/// The slice matched by `parser`, with its span.
fn spanned<'a, O>(
    parser: impl Parser<'a, ParserInput<'a>, O, ParserExtra<'a>> + Clone,
) -> impl Parser<'a, ParserInput<'a>, Piece<'a>, ParserExtra<'a>> + Clone {
    parser.to_slice().map_with(|text: &'a str, e| Piece {
        text,
        span: to_span(e.span()),
    })
}

/// Zero or more ASCII digits.
fn digit_run<'a>() -> impl Parser<'a, ParserInput<'a>, Piece<'a>, ParserExtra<'a>> + Clone {
    spanned(one_of("0123456789").repeated())
}

/// Currency symbol, longest first.
fn currency<'a>() -> impl Parser<'a, ParserInput<'a>, Currency, ParserExtra<'a>> + Clone {
    choice((
        just("CN¥").to(Currency::Cny),
        just("CHF").to(Currency::Chf),
        just("C$").to(Currency::Cad),
        just("A$").to(Currency::Aud),
        just("€").to(Currency::Eur),
        just("£").to(Currency::Gbp),
        just("¥").to(Currency::Jpy),
        just("$").to(Currency::Usd),
    ))
}

/// Digits and commas, then an optional `.` and fraction digits.
fn amount<'a>() -> impl Parser<'a, ParserInput<'a>, RawAmount<'a>, ParserExtra<'a>> + Clone {
    spanned(one_of("0123456789,").repeated())
        .then(just('.').ignore_then(digit_run()).or_not())
        .map_with(|(integral, fraction), e| RawAmount {
            integral,
            fraction,
            span: to_span(e.span()),
        })
}

/// `YYYY[-MM[-DD]]`, with each field any number of digits.
fn date<'a>() -> impl Parser<'a, ParserInput<'a>, RawDate<'a>, ParserExtra<'a>> + Clone {
    let day = just('-').ignore_then(digit_run());
    let month = just('-').ignore_then(digit_run()).then(day.or_not());

    digit_run()
        .then(month.or_not())
        .map(|(year, month_day)| {
            let (month, day) = match month_day {
                Some((month, day)) => (Some(month), day),
                None => (None, None),
            };
            RawDate { year, month, day }
        })
}

/// `[` up to the first `]`, or the end of the input if there is none.
fn provenance<'a>() -> impl Parser<'a, ParserInput<'a>, RawProvenance<'a>, ParserExtra<'a>> + Clone
{
    just('[')
        .map_with(|_, e| to_span(e.span()))
        .then(spanned(none_of("]").repeated()))
        .then(just(']').or_not())
        .map(|((open, content), close)| RawProvenance {
            open,
            content,
            closed: close.is_some(),
        })
}

fn notation<'a>() -> impl Parser<'a, ParserInput<'a>, RawNotation<'a>, ParserExtra<'a>> {
    currency()
        .or_not()
        .map_with(|currency, e| (currency, to_span(e.span())))
        .then(amount())
        .then(
            just('@')
                .or_not()
                .map_with(|at, e| (at.is_some(), to_span(e.span()))),
        )
        .then(date())
        .then(provenance().or_not())
        .then(spanned(any().repeated()))
        .then_ignore(end())
        .map(
            |(((((currency, amount), at), date), provenance), rest)| RawNotation {
                currency: currency.0,
                currency_span: currency.1,
                amount,
                at,
                date,
                provenance,
                rest,
            },
        )
}

/// A source date and whatever follows it inside the brackets.
fn source_date<'a>() -> impl Parser<'a, ParserInput<'a>, (RawDate<'a>, Piece<'a>), ParserExtra<'a>>
{
    date().then(spanned(any().repeated())).then_ignore(end())
}

// ============================================================================
// Lowering
// ============================================================================

/// Span of the character at `offset`, or an empty span at the end.
fn next_char_span(input: &str, offset: usize) -> Span {
    let len = input
        .get(offset..)
        .and_then(|rest| rest.chars().next())
        .map_or(0, char::len_utf8);
    Span::new(offset, offset + len)
}

/// A span to point at for a possibly empty piece.
fn point_at(input: &str, piece: Piece<'_>) -> Span {
    if piece.span.is_empty() {
        next_char_span(input, piece.span.start)
    } else {
        piece.span
    }
}

fn syntax_error(errs: Vec<Rich<'_, char>>, input: &str, offset: usize) -> ParseError {
    match errs.into_iter().next() {
        Some(e) => {
            let span = to_span(*e.span());
            ParseError::new(
                ParseErrorKind::Syntax(e.to_string()),
                Span::new(span.start + offset, span.end + offset),
                input,
            )
        }
        None => ParseError::new(
            ParseErrorKind::Syntax("unrecognized input".to_string()),
            Span::new(offset, input.len()),
            input,
        ),
    }
}

fn fixed_digits(
    input: &str,
    piece: Piece<'_>,
    width: usize,
    what: &'static str,
) -> Result<u32, ParseError> {
    if piece.text.len() != width {
        return Err(ParseError::new(
            ParseErrorKind::Expected(what),
            point_at(input, piece),
            input,
        ));
    }
    Ok(piece
        .text
        .bytes()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0')))
}

impl RawAmount<'_> {
    fn lower(&self, input: &str) -> Result<Decimal, ParseError> {
        if !self.integral.text.bytes().any(|b| b.is_ascii_digit()) {
            return Err(ParseError::new(
                ParseErrorKind::MissingAmount,
                point_at(input, self.integral),
                input,
            ));
        }

        let text = self.span.text(input).unwrap_or_default();
        let invalid = |hint: &'static str| {
            ParseError::new(
                ParseErrorKind::InvalidAmount(text.to_string()),
                self.span,
                input,
            )
            .with_hint(hint)
        };

        if self.fraction.is_some_and(|f| f.text.len() != 2) {
            return Err(invalid(FRACTION_HINT));
        }

        let cleaned: String = text.chars().filter(|&c| c != ',').collect();
        Decimal::from_str_exact(&cleaned).map_err(|_| invalid(PRECISION_HINT))
    }
}

impl RawDate<'_> {
    fn lower(&self, input: &str) -> Result<TemporalDate, ParseError> {
        let year = fixed_digits(input, self.year, 4, "a four digit year")?;
        let month = self
            .month
            .map(|m| fixed_digits(input, m, 2, "a two digit month"))
            .transpose()?;
        let day = self
            .day
            .map(|d| fixed_digits(input, d, 2, "a two digit day"))
            .transpose()?;

        TemporalDate::new(year as i32, month, day)
            .map_err(|err| ParseError::new(ParseErrorKind::InvalidDate(err), self.span(), input))
    }
}

impl RawProvenance<'_> {
    /// `<method>:<date>`, with the method itself allowed one `:`.
    fn lower(&self, input: &str) -> Result<Provenance, ParseError> {
        let content = self.content;
        if !self.closed {
            return Err(ParseError::new(
                ParseErrorKind::UnclosedBracket,
                Span::new(self.open.start, content.span.end),
                input,
            ));
        }

        let Some(colon) = content.text.rfind(':') else {
            return Err(ParseError::new(
                ParseErrorKind::Expected("'<method>:<date>' inside the brackets"),
                content.span,
                input,
            )
            .with_hint(EXAMPLE_HINT));
        };

        let method = Method::new(&content.text[..colon]);
        if !method.is_notation_safe() {
            return Err(ParseError::new(
                ParseErrorKind::InvalidMethod(method.to_string()),
                Span::new(content.span.start, content.span.start + colon),
                input,
            )
            .with_hint(METHOD_HINT));
        }

        let offset = content.span.start + colon + 1;
        let (date, tail) = source_date()
            .parse(&content.text[colon + 1..])
            .into_result()
            .map_err(|errs| syntax_error(errs, input, offset))?;
        let source = date.shifted(offset).lower(input)?;

        let tail = tail.shifted(offset);
        if !tail.text.is_empty() {
            return Err(ParseError::new(
                ParseErrorKind::Expected("']' after the source date"),
                tail.span,
                input,
            ));
        }

        Ok(Provenance::new(method, source))
    }
}

impl RawNotation<'_> {
    fn lower(&self, input: &str) -> Result<Fields, ParseError> {
        let Some(currency) = self.currency else {
            let span = next_char_span(input, self.currency_span.start);
            let found = span.text(input).unwrap_or_default().to_string();
            let symbols: Vec<&str> = SYMBOLS.iter().map(|&(s, _)| s).collect();
            return Err(
                ParseError::new(ParseErrorKind::UnknownCurrency(found), span, input)
                    .with_hint(format!("supported symbols: {}", symbols.join(" "))),
            );
        };

        let amount = self.amount.lower(input)?;

        let (has_at, at_span) = self.at;
        if !has_at {
            return Err(ParseError::new(
                ParseErrorKind::Expected("'@' before the date"),
                next_char_span(input, at_span.start),
                input,
            ));
        }

        let date = self.date.lower(input)?;
        let provenance = self.provenance.map(|p| p.lower(input)).transpose()?;

        if !self.rest.text.is_empty() {
            return Err(ParseError::new(
                ParseErrorKind::TrailingInput(self.rest.text.to_string()),
                self.rest.span,
                input,
            ));
        }

        Ok(Fields {
            currency,
            amount,
            date,
            provenance,
        })
    }
}
