//! Tests for the top-level chart parser.
//!
//! Covers: top-level commands, arity and number validation, the grid
//! default, case insensitivity, trailing-token rejection, observer events,
//! and the serialized shape of a fully parsed chart.
//!
//! Encoding-specific tests live in `encodings.rs`, mark tests in `marks.rs`.

mod common;

use common::{parse, sample_data, toks};
use serde_json::json;
use vegaplot_core::{ParseError, Trace, parse_tokens_with};

// ─── Sizing ─────────────────────────────────────────────────────────────────

#[test]
fn width_and_height_are_set() {
    let chart = parse("WIDTH 400 HEIGHT 300").unwrap();
    assert_eq!(chart.width, Some(400));
    assert_eq!(chart.height, Some(300));
}

#[test]
fn width_without_argument_is_an_arity_error() {
    let err = parse("WIDTH").unwrap_err();
    assert_eq!(
        err,
        ParseError::MissingArguments {
            command: "WIDTH",
            expected: 1,
            found: 0,
        }
    );
}

#[test]
fn non_numeric_width_is_rejected() {
    let err = parse("WIDTH wide").unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidNumber {
            command: "WIDTH",
            value: "wide".into(),
        }
    );
}

// ─── Display configuration ──────────────────────────────────────────────────

#[test]
fn grid_defaults_to_enabled() {
    let chart = parse("").unwrap();
    let grid = chart.config.and_then(|c| c.axis).and_then(|a| a.grid);
    assert_eq!(grid, Some(true), "preamble must enable the grid");
}

#[test]
fn grid_false_disables_the_grid() {
    let chart = parse("GRID FALSE").unwrap();
    let grid = chart.config.and_then(|c| c.axis).and_then(|a| a.grid);
    assert_eq!(grid, Some(false));
}

#[test]
fn grid_requires_a_boolean() {
    let err = parse("GRID sideways").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnknownKeyword {
            attribute: "GRID",
            token: "sideways".into(),
        }
    );
}

#[test]
fn title_is_applied() {
    let chart = parse("TITLE Quarterly").unwrap();
    assert_eq!(chart.title.as_deref(), Some("Quarterly"));
}

// ─── Stream discipline ──────────────────────────────────────────────────────

#[test]
fn trailing_garbage_is_rejected() {
    let err = parse("WIDTH 400 NOT_A_COMMAND").unwrap_err();
    assert_eq!(
        err,
        ParseError::TrailingTokens {
            token: "NOT_A_COMMAND".into(),
            at: 2,
        }
    );
}

#[test]
fn leading_garbage_is_rejected() {
    let err = parse("PLOT WIDTH 400").unwrap_err();
    assert_eq!(
        err,
        ParseError::TrailingTokens {
            token: "PLOT".into(),
            at: 0,
        }
    );
}

#[test]
fn data_is_carried_through_untouched() {
    let chart = parse("WIDTH 120").unwrap();
    assert_eq!(chart.data, sample_data());
}

// ─── Case insensitivity ─────────────────────────────────────────────────────

#[test]
fn command_case_is_irrelevant() {
    let upper = parse("MARK BAR COLOR RED X_FIELD sales TYPE NOMINAL").unwrap();
    let lower = parse("mark Bar color Red x_field sales type nominal").unwrap();
    assert_eq!(upper, lower);
}

#[test]
fn field_names_keep_their_case() {
    let chart = parse("X_FIELD Sales").unwrap();
    assert_eq!(chart.encoding.x.unwrap().field, "Sales");
}

// ─── Observation ────────────────────────────────────────────────────────────

#[test]
fn observer_sees_recognized_commands() {
    let mut trace = Trace::default();
    parse_tokens_with(&toks("WIDTH 400 MARK BAR"), sample_data(), &mut trace).unwrap();
    assert!(
        trace.lines.contains(&"command WIDTH at 0".to_string()),
        "missing WIDTH event: {:?}",
        trace.lines
    );
    assert!(
        trace.lines.contains(&"command MARK at 2".to_string()),
        "missing MARK event: {:?}",
        trace.lines
    );
}

#[test]
fn silent_parse_equals_observed_parse() {
    let mut trace = Trace::default();
    let observed =
        parse_tokens_with(&toks("HEIGHT 250"), sample_data(), &mut trace).unwrap();
    let silent = parse("HEIGHT 250").unwrap();
    assert_eq!(observed, silent);
}

// ─── Serialized shape ───────────────────────────────────────────────────────

#[test]
fn full_command_line_serializes_to_a_vega_lite_spec() {
    let chart = parse("MARK BAR COLOR RED X_FIELD sales TYPE QUANTITATIVE BIN TRUE").unwrap();
    let v = serde_json::to_value(&chart).unwrap();
    assert_eq!(v["mark"], json!({"type": "bar", "color": "red"}));
    assert_eq!(
        v["encoding"]["x"],
        json!({"field": "sales", "type": "quantitative", "bin": true})
    );
    assert_eq!(v["config"], json!({"axis": {"grid": true}}));
    assert!(v.get("width").is_none());
}
