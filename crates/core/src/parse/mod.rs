//! Token-command parsing.
//!
//! One generic dispatch engine ([`engine::SubParser`] driving a
//! [`engine::CommandTable`]) composed into a small hierarchy of cooperating
//! sub-parsers: the top-level chart parser delegates contiguous sub-ranges of
//! the stream to field, mark, and binning sub-parsers, all mutating the one
//! chart specification threaded through the call chain.

/// Binning attribute sub-parser.
mod bin;
/// Top-level chart parser and the public entry points.
mod chart;
/// Generic command-table dispatch engine.
pub mod engine;
/// Axis-encoding attribute sub-parser.
mod field;
/// Mark selection sub-parser.
mod mark;
/// Keyword vocabulary and token matching utilities.
pub mod vocab;

pub use chart::{parse_tokens, parse_tokens_with};
