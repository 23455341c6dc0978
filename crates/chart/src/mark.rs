use serde::{Deserialize, Serialize};

/// The eleven mark kinds a chart can draw.
///
/// Selection happens once per parse; the kind cannot be switched afterwards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MarkKind {
    /// Circular wedge, for pie and donut charts.
    Arc,
    /// Filled area under a line.
    Area,
    /// Rectangular bar.
    Bar,
    /// Circle with a filled interior.
    Circle,
    /// Connected line.
    Line,
    /// Point symbol.
    Point,
    /// General rectangle.
    Rect,
    /// Horizontal or vertical rule line.
    Rule,
    /// Square symbol.
    Square,
    /// Short tick line.
    Tick,
    /// Line with variable thickness.
    Trail,
}

impl std::fmt::Display for MarkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MarkKind::Arc => "arc",
            MarkKind::Area => "area",
            MarkKind::Bar => "bar",
            MarkKind::Circle => "circle",
            MarkKind::Line => "line",
            MarkKind::Point => "point",
            MarkKind::Rect => "rect",
            MarkKind::Rule => "rule",
            MarkKind::Square => "square",
            MarkKind::Tick => "tick",
            MarkKind::Trail => "trail",
        };
        write!(f, "{s}")
    }
}

/// A mark with its shape-specific payload.
///
/// Serializes as a Vega-Lite mark definition object, e.g.
/// `{"type": "bar", "color": "red"}`. The set of kinds is closed: attributes
/// shared by every kind (currently only `color`) are applied through an
/// exhaustive match, so adding a kind forces every shared accessor to handle
/// it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Mark {
    /// Arc mark.
    Arc(ArcMark),
    /// Area mark.
    Area(AreaMark),
    /// Bar mark.
    Bar(BarMark),
    /// Circle mark.
    Circle(CircleMark),
    /// Line mark.
    Line(LineMark),
    /// Point mark.
    Point(PointMark),
    /// Rect mark.
    Rect(RectMark),
    /// Rule mark.
    Rule(RuleMark),
    /// Square mark.
    Square(SquareMark),
    /// Tick mark.
    Tick(TickMark),
    /// Trail mark.
    Trail(TrailMark),
}

impl Mark {
    /// Create a mark of the given kind with default payload.
    pub fn new(kind: MarkKind) -> Self {
        match kind {
            MarkKind::Arc => Mark::Arc(ArcMark::default()),
            MarkKind::Area => Mark::Area(AreaMark::default()),
            MarkKind::Bar => Mark::Bar(BarMark::default()),
            MarkKind::Circle => Mark::Circle(CircleMark::default()),
            MarkKind::Line => Mark::Line(LineMark::default()),
            MarkKind::Point => Mark::Point(PointMark::default()),
            MarkKind::Rect => Mark::Rect(RectMark::default()),
            MarkKind::Rule => Mark::Rule(RuleMark::default()),
            MarkKind::Square => Mark::Square(SquareMark::default()),
            MarkKind::Tick => Mark::Tick(TickMark::default()),
            MarkKind::Trail => Mark::Trail(TrailMark::default()),
        }
    }

    /// The kind of this mark.
    pub fn kind(&self) -> MarkKind {
        match self {
            Mark::Arc(_) => MarkKind::Arc,
            Mark::Area(_) => MarkKind::Area,
            Mark::Bar(_) => MarkKind::Bar,
            Mark::Circle(_) => MarkKind::Circle,
            Mark::Line(_) => MarkKind::Line,
            Mark::Point(_) => MarkKind::Point,
            Mark::Rect(_) => MarkKind::Rect,
            Mark::Rule(_) => MarkKind::Rule,
            Mark::Square(_) => MarkKind::Square,
            Mark::Tick(_) => MarkKind::Tick,
            Mark::Trail(_) => MarkKind::Trail,
        }
    }

    /// The mark color, shared by every kind.
    pub fn color(&self) -> Option<&str> {
        match self {
            Mark::Arc(m) => m.color.as_deref(),
            Mark::Area(m) => m.color.as_deref(),
            Mark::Bar(m) => m.color.as_deref(),
            Mark::Circle(m) => m.color.as_deref(),
            Mark::Line(m) => m.color.as_deref(),
            Mark::Point(m) => m.color.as_deref(),
            Mark::Rect(m) => m.color.as_deref(),
            Mark::Rule(m) => m.color.as_deref(),
            Mark::Square(m) => m.color.as_deref(),
            Mark::Tick(m) => m.color.as_deref(),
            Mark::Trail(m) => m.color.as_deref(),
        }
    }

    /// Mutable access to the mark color regardless of the concrete kind.
    pub fn color_mut(&mut self) -> &mut Option<String> {
        match self {
            Mark::Arc(m) => &mut m.color,
            Mark::Area(m) => &mut m.color,
            Mark::Bar(m) => &mut m.color,
            Mark::Circle(m) => &mut m.color,
            Mark::Line(m) => &mut m.color,
            Mark::Point(m) => &mut m.color,
            Mark::Rect(m) => &mut m.color,
            Mark::Rule(m) => &mut m.color,
            Mark::Square(m) => &mut m.color,
            Mark::Tick(m) => &mut m.color,
            Mark::Trail(m) => &mut m.color,
        }
    }
}

// ─── Shape payloads ─────────────────────────────────────────────────────────
// One struct per kind. Property names follow Vega-Lite, so the few camelCase
// ones carry explicit renames.

/// Payload for [`MarkKind::Arc`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ArcMark {
    /// Fill color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Inner radius in pixels (0 for a pie, >0 for a donut).
    #[serde(rename = "innerRadius", skip_serializing_if = "Option::is_none")]
    pub inner_radius: Option<f64>,
    /// Outer radius in pixels.
    #[serde(rename = "outerRadius", skip_serializing_if = "Option::is_none")]
    pub outer_radius: Option<f64>,
}

/// Payload for [`MarkKind::Area`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AreaMark {
    /// Fill color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Whether the area's upper boundary line is drawn.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<bool>,
    /// Fill opacity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

/// Payload for [`MarkKind::Bar`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BarMark {
    /// Fill color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Corner radius of the bar ends in pixels.
    #[serde(rename = "cornerRadius", skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    /// Bar width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

/// Payload for [`MarkKind::Circle`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CircleMark {
    /// Fill color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Symbol area in square pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

/// Payload for [`MarkKind::Line`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LineMark {
    /// Stroke color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Interpolation method between points (e.g. `"monotone"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpolate: Option<String>,
    /// Whether point symbols are overlaid on the line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point: Option<bool>,
}

/// Payload for [`MarkKind::Point`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PointMark {
    /// Symbol color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Symbol area in square pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    /// Symbol shape name (e.g. `"diamond"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    /// Whether the symbol is filled rather than stroked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filled: Option<bool>,
}

/// Payload for [`MarkKind::Rect`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RectMark {
    /// Fill color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Fixed rectangle width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Fixed rectangle height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

/// Payload for [`MarkKind::Rule`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RuleMark {
    /// Stroke color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Stroke width in pixels.
    #[serde(rename = "strokeWidth", skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
}

/// Payload for [`MarkKind::Square`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SquareMark {
    /// Symbol color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Symbol area in square pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

/// Payload for [`MarkKind::Tick`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TickMark {
    /// Tick color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Tick thickness in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
}

/// Payload for [`MarkKind::Trail`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TrailMark {
    /// Stroke color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Maximum trail width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}
