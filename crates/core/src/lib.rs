//! vegaplot core library.
//!
//! Parses a pre-tokenized stream of chart DSL commands (e.g. `MARK BAR
//! COLOR RED X_FIELD sales TYPE QUANTITATIVE BIN TRUE`) into a populated
//! [`Chart`] specification. The main entry points are [`parse_tokens`] and
//! [`parse_tokens_with`]; the latter reports structured [`ParseEvent`]s to
//! an injected [`Observer`].

#![warn(missing_docs)]

/// Parse errors.
pub mod error;
/// Parse-event observation hooks.
pub mod observe;
/// The dispatch engine and the concrete sub-parsers.
pub mod parse;

// ── Convenience re-exports ──────────────────────────────────────────────────
// Flat imports for the most common entry points. The full module paths
// remain available for less common types.

// Parser
pub use parse::{parse_tokens, parse_tokens_with};

// Dispatch engine
pub use parse::engine::{Command, CommandTable, FixedFn, Handler, RangedFn, SubParser};

// Token utilities
pub use parse::vocab::{match_keyword, parse_bool};

// Errors
pub use error::ParseError;

// Observation
pub use observe::{Observer, ParseEvent, Silent, Trace};

// Chart model (re-exported from the chart crate)
pub use vegaplot_chart::{
    Aggregate, AxisConfig, Bin, BinSetting, Chart, ChartConfig, DataFrame, Encoding,
    FieldEncoding, FieldType, Mark, MarkKind, TimeUnit, to_pretty_json,
};
