//! Chart specification data model for the vegaplot DSL.
//!
//! A [`Chart`] is the output of a successful parse: inline data plus the
//! mark, encodings, sizing, and display configuration accumulated from the
//! command stream. The serde representation of a populated `Chart` follows
//! the Vega-Lite property names, so serializing one yields a spec a
//! Vega-Lite renderer can consume directly.

#![warn(missing_docs)]

/// Axis encodings, field types, aggregates, time units, and binning.
pub mod encoding;
/// Mark kinds and their shape-specific payloads.
pub mod mark;

use serde::{Deserialize, Serialize};

pub use encoding::{Aggregate, Bin, BinSetting, Encoding, FieldEncoding, FieldType, TimeUnit};
pub use mark::{Mark, MarkKind};

// ─── Chart ──────────────────────────────────────────────────────────────────

/// A chart specification under construction or completed.
///
/// Created empty around an externally supplied [`DataFrame`], then mutated
/// attribute by attribute as the command stream is parsed. Optional
/// attributes that were never set are omitted from the serialized form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chart {
    /// Inline data values the chart is drawn from. Attached before parsing
    /// begins and never altered by the parser.
    pub data: DataFrame,
    /// Chart width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Chart height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Chart title text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The visual mark drawn for each datum.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark: Option<Mark>,
    /// Mapping of data fields to the x and y axes.
    #[serde(default, skip_serializing_if = "Encoding::is_empty")]
    pub encoding: Encoding,
    /// Display configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<ChartConfig>,
}

impl Chart {
    /// Create an empty chart around the given data.
    pub fn new(data: DataFrame) -> Self {
        Self {
            data,
            width: None,
            height: None,
            title: None,
            mark: None,
            encoding: Encoding::default(),
            config: None,
        }
    }
}

/// Inline tabular data attached to a chart.
///
/// The payload is opaque to this crate: whatever JSON value the caller
/// supplies (typically an array of row objects) is carried through verbatim
/// and serialized as Vega-Lite inline data.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DataFrame {
    /// The data rows, as produced by the upstream data source.
    pub values: serde_json::Value,
}

impl DataFrame {
    /// Wrap a JSON value as inline chart data.
    pub fn new(values: serde_json::Value) -> Self {
        Self { values }
    }
}

// ─── Display configuration ──────────────────────────────────────────────────

/// Top-level display configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ChartConfig {
    /// Axis styling applied to both axes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis: Option<AxisConfig>,
}

/// Axis styling options.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AxisConfig {
    /// Whether grid lines are drawn.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<bool>,
}

// ─── Serialization helpers ──────────────────────────────────────────────────

/// Serialize a chart to a pretty-printed JSON string.
pub fn to_pretty_json(chart: &Chart) -> String {
    serde_json::to_string_pretty(chart).expect("Chart serialization cannot fail")
}
