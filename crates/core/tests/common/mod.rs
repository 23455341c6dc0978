//! Shared test helpers for `vegaplot_core` integration tests.

#![allow(unreachable_pub)]

use serde_json::json;
use vegaplot_core::{Chart, DataFrame, ParseError, parse_tokens};

/// Split a command line into tokens the way the upstream tokenizer does.
#[allow(dead_code)]
pub fn toks(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_owned).collect()
}

/// Sample rows attached to every test chart.
#[allow(dead_code)]
pub fn sample_data() -> DataFrame {
    DataFrame::new(json!([
        {"category": "a", "sales": 30},
        {"category": "b", "sales": 55},
    ]))
}

/// Parse a command line against the sample data.
#[allow(dead_code)]
pub fn parse(line: &str) -> Result<Chart, ParseError> {
    parse_tokens(&toks(line), sample_data())
}
