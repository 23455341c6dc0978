use serde::{Deserialize, Serialize};

// ─── Encodings ──────────────────────────────────────────────────────────────

/// The chart's axis encodings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Encoding {
    /// X-axis encoding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<FieldEncoding>,
    /// Y-axis encoding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<FieldEncoding>,
}

impl Encoding {
    /// True when neither axis has been encoded.
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none()
    }
}

/// Mapping of one data field to a visual axis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldEncoding {
    /// Name of the data field, stored verbatim.
    pub field: String,
    /// Semantic type of the field. Defaults to quantitative.
    pub r#type: FieldType,
    /// Binning of continuous values into discrete buckets: either a plain
    /// on/off flag or a full parameter object, never both.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin: Option<BinSetting>,
    /// Aggregate function applied to the field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate: Option<Aggregate>,
    /// Time unit the field is truncated to before encoding.
    #[serde(rename = "timeUnit", skip_serializing_if = "Option::is_none")]
    pub time_unit: Option<TimeUnit>,
}

impl FieldEncoding {
    /// Create an encoding for the named field with the default type.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ..Self::default()
        }
    }
}

impl Default for FieldEncoding {
    fn default() -> Self {
        Self {
            field: String::new(),
            r#type: FieldType::Quantitative,
            bin: None,
            aggregate: None,
            time_unit: None,
        }
    }
}

/// Semantic type of an encoded field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Continuous numeric data.
    Quantitative,
    /// Unordered categorical data.
    Nominal,
    /// Ordered categorical data.
    Ordinal,
    /// Dates and times.
    Temporal,
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FieldType::Quantitative => "quantitative",
            FieldType::Nominal => "nominal",
            FieldType::Ordinal => "ordinal",
            FieldType::Temporal => "temporal",
        };
        write!(f, "{s}")
    }
}

// ─── Aggregates and time units ──────────────────────────────────────────────

/// Aggregate function applied to a field before encoding.
///
/// The spelling of each serialized name is fixed by the wire vocabulary,
/// including the inherited `stedevp` and `stederr` forms.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Aggregate {
    /// Count of all rows.
    Count,
    /// Count of non-null, non-NaN values.
    Valid,
    /// Count of null or NaN values.
    Missing,
    /// Count of distinct values.
    Distinct,
    /// Sum of values.
    Sum,
    /// Product of values.
    Product,
    /// Arithmetic mean.
    Mean,
    /// Alias of mean.
    Average,
    /// Sample variance.
    Variance,
    /// Population variance.
    Variancep,
    /// Sample standard deviation.
    Stdev,
    /// Population standard deviation.
    Stedevp,
    /// Standard error of the mean.
    Stederr,
    /// Median value.
    Median,
    /// Lower quartile boundary.
    Q1,
    /// Upper quartile boundary.
    Q3,
    /// Lower confidence interval boundary.
    Ci0,
    /// Upper confidence interval boundary.
    Ci1,
    /// Minimum value.
    Min,
    /// Maximum value.
    Max,
    /// Input datum holding the minimum value.
    Argmin,
    /// Input datum holding the maximum value.
    Argmax,
}

impl std::fmt::Display for Aggregate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Aggregate::Count => "count",
            Aggregate::Valid => "valid",
            Aggregate::Missing => "missing",
            Aggregate::Distinct => "distinct",
            Aggregate::Sum => "sum",
            Aggregate::Product => "product",
            Aggregate::Mean => "mean",
            Aggregate::Average => "average",
            Aggregate::Variance => "variance",
            Aggregate::Variancep => "variancep",
            Aggregate::Stdev => "stdev",
            Aggregate::Stedevp => "stedevp",
            Aggregate::Stederr => "stederr",
            Aggregate::Median => "median",
            Aggregate::Q1 => "q1",
            Aggregate::Q3 => "q3",
            Aggregate::Ci0 => "ci0",
            Aggregate::Ci1 => "ci1",
            Aggregate::Min => "min",
            Aggregate::Max => "max",
            Aggregate::Argmin => "argmin",
            Aggregate::Argmax => "argmax",
        };
        write!(f, "{s}")
    }
}

/// Time unit a temporal field is truncated to.
///
/// `Miliseconds` keeps the inherited single-l wire spelling.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Calendar year.
    Year,
    /// Quarter of the year.
    Quarter,
    /// Month of the year.
    Month,
    /// Day of the week.
    Day,
    /// Date within the month.
    Date,
    /// Hour of the day.
    Hours,
    /// Minute of the hour.
    Minutes,
    /// Second of the minute.
    Seconds,
    /// Millisecond of the second.
    Miliseconds,
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TimeUnit::Year => "year",
            TimeUnit::Quarter => "quarter",
            TimeUnit::Month => "month",
            TimeUnit::Day => "day",
            TimeUnit::Date => "date",
            TimeUnit::Hours => "hours",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Seconds => "seconds",
            TimeUnit::Miliseconds => "miliseconds",
        };
        write!(f, "{s}")
    }
}

// ─── Binning ────────────────────────────────────────────────────────────────

/// Binning of a field: a bare flag or a full parameter object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum BinSetting {
    /// Binning switched on or off with defaults.
    Flag(bool),
    /// Explicit binning parameters.
    Params(Bin),
}

/// Parameters controlling how continuous values are grouped into buckets.
///
/// Every parameter is independently optional; only the ones given in the
/// command stream are set.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Bin {
    /// Value the bin boundaries are anchored to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<f64>,
    /// Base of the allowed bin step sizes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<f64>,
    /// Marks the data as already binned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binned: Option<bool>,
    /// Maximum number of bins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxbins: Option<f64>,
    /// Minimum allowed bin step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minstep: Option<f64>,
    /// Snap bin boundaries to human-friendly values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nice: Option<bool>,
    /// Exact bin step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_encoding_defaults_to_quantitative() {
        let enc = FieldEncoding::new("sales");
        assert_eq!(enc.field, "sales");
        assert_eq!(enc.r#type, FieldType::Quantitative);
        assert!(enc.bin.is_none());
    }

    #[test]
    fn field_encoding_serializes_vega_lite_names() {
        let enc = FieldEncoding {
            time_unit: Some(TimeUnit::Month),
            aggregate: Some(Aggregate::Mean),
            ..FieldEncoding::new("date")
        };
        let v = serde_json::to_value(&enc).unwrap();
        assert_eq!(
            v,
            json!({
                "field": "date",
                "type": "quantitative",
                "aggregate": "mean",
                "timeUnit": "month",
            })
        );
    }

    #[test]
    fn bin_flag_serializes_as_bare_bool() {
        let enc = FieldEncoding {
            bin: Some(BinSetting::Flag(true)),
            ..FieldEncoding::new("age")
        };
        let v = serde_json::to_value(&enc).unwrap();
        assert_eq!(v["bin"], json!(true));
    }

    #[test]
    fn bin_params_serialize_as_object() {
        let enc = FieldEncoding {
            bin: Some(BinSetting::Params(Bin {
                anchor: Some(0.0),
                step: Some(5.0),
                ..Bin::default()
            })),
            ..FieldEncoding::new("age")
        };
        let v = serde_json::to_value(&enc).unwrap();
        assert_eq!(v["bin"], json!({"anchor": 0.0, "step": 5.0}));
    }

    #[test]
    fn bin_setting_deserializes_both_shapes() {
        let flag: BinSetting = serde_json::from_value(json!(false)).unwrap();
        assert_eq!(flag, BinSetting::Flag(false));
        let params: BinSetting = serde_json::from_value(json!({"maxbins": 10.0})).unwrap();
        assert_eq!(
            params,
            BinSetting::Params(Bin {
                maxbins: Some(10.0),
                ..Bin::default()
            })
        );
    }

    #[test]
    fn inherited_spellings_survive_serialization() {
        assert_eq!(
            serde_json::to_value(Aggregate::Stedevp).unwrap(),
            json!("stedevp")
        );
        assert_eq!(
            serde_json::to_value(Aggregate::Stederr).unwrap(),
            json!("stederr")
        );
        assert_eq!(
            serde_json::to_value(TimeUnit::Miliseconds).unwrap(),
            json!("miliseconds")
        );
    }

    #[test]
    fn encoding_is_empty() {
        assert!(Encoding::default().is_empty());
        let enc = Encoding {
            x: Some(FieldEncoding::new("a")),
            y: None,
        };
        assert!(!enc.is_empty());
    }
}
