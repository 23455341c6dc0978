//! Keyword vocabulary and token matching utilities.
//!
//! Every enumeration-valued attribute handler goes through [`match_keyword`]:
//! an ordered `(keyword, value)` table probed case-insensitively, first match
//! wins. The tables below are the complete DSL vocabulary for field types,
//! aggregate functions, time units, and mark kinds; a few entries keep
//! inherited spellings (`STEDEVP`, `STEDERR`, `MILISECONDS`) that are fixed
//! by the wire vocabulary.

use vegaplot_chart::{Aggregate, FieldType, MarkKind, TimeUnit};

use crate::error::ParseError;

/// Case-insensitive first-match lookup in an ordered keyword table.
pub fn match_keyword<T: Copy>(token: &str, table: &[(&str, T)]) -> Option<T> {
    table
        .iter()
        .find(|(keyword, _)| keyword.eq_ignore_ascii_case(token))
        .map(|&(_, value)| value)
}

/// TRUE/FALSE lookup, used everywhere a flag is expected.
pub fn parse_bool(token: &str) -> Option<bool> {
    match_keyword(token, &[("TRUE", true), ("FALSE", false)])
}

/// Parse a token as a floating-point value, naming the command on failure.
pub(crate) fn parse_number(command: &'static str, token: &str) -> Result<f64, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidNumber {
        command,
        value: token.to_string(),
    })
}

/// Parse a token as an unsigned integer, naming the command on failure.
pub(crate) fn parse_integer(command: &'static str, token: &str) -> Result<u32, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidNumber {
        command,
        value: token.to_string(),
    })
}

/// Semantic types accepted after `TYPE`.
pub(crate) const FIELD_TYPES: &[(&str, FieldType)] = &[
    ("QUANTITATIVE", FieldType::Quantitative),
    ("NOMINAL", FieldType::Nominal),
    ("ORDINAL", FieldType::Ordinal),
    ("TEMPORAL", FieldType::Temporal),
];

/// Aggregate functions accepted after `AGGREGATE`.
pub(crate) const AGGREGATES: &[(&str, Aggregate)] = &[
    ("COUNT", Aggregate::Count),
    ("VALID", Aggregate::Valid),
    ("MISSING", Aggregate::Missing),
    ("DISTINCT", Aggregate::Distinct),
    ("SUM", Aggregate::Sum),
    ("PRODUCT", Aggregate::Product),
    ("MEAN", Aggregate::Mean),
    ("AVERAGE", Aggregate::Average),
    ("VARIANCE", Aggregate::Variance),
    ("VARIANCEP", Aggregate::Variancep),
    ("STDEV", Aggregate::Stdev),
    ("STEDEVP", Aggregate::Stedevp),
    ("STEDERR", Aggregate::Stederr),
    ("MEDIAN", Aggregate::Median),
    ("Q1", Aggregate::Q1),
    ("Q3", Aggregate::Q3),
    ("CI0", Aggregate::Ci0),
    ("CI1", Aggregate::Ci1),
    ("MIN", Aggregate::Min),
    ("MAX", Aggregate::Max),
    ("ARGMIN", Aggregate::Argmin),
    ("ARGMAX", Aggregate::Argmax),
];

/// Time units accepted after `TIME_UNIT`.
pub(crate) const TIME_UNITS: &[(&str, TimeUnit)] = &[
    ("YEAR", TimeUnit::Year),
    ("QUARTER", TimeUnit::Quarter),
    ("MONTH", TimeUnit::Month),
    ("DAY", TimeUnit::Day),
    ("DATE", TimeUnit::Date),
    ("HOURS", TimeUnit::Hours),
    ("MINUTES", TimeUnit::Minutes),
    ("SECONDS", TimeUnit::Seconds),
    ("MILISECONDS", TimeUnit::Miliseconds),
];

/// Mark kinds accepted as the first token after `MARK`.
pub(crate) const MARK_KINDS: &[(&str, MarkKind)] = &[
    ("ARC", MarkKind::Arc),
    ("AREA", MarkKind::Area),
    ("BAR", MarkKind::Bar),
    ("CIRCLE", MarkKind::Circle),
    ("LINE", MarkKind::Line),
    ("POINT", MarkKind::Point),
    ("RECT", MarkKind::Rect),
    ("RULE", MarkKind::Rule),
    ("SQUARE", MarkKind::Square),
    ("TICK", MarkKind::Tick),
    ("TRAIL", MarkKind::Trail),
];
