use vegaplot_chart::{AxisConfig, Chart, ChartConfig, DataFrame, FieldEncoding};

use super::engine::{CommandTable, SubParser};
use super::field::FieldParser;
use super::mark::MarkParser;
use super::vocab::{parse_bool, parse_integer};
use crate::error::ParseError;
use crate::observe::{Observer, Silent};

/// The top-level parser, owner of the chart specification being built.
///
/// Width, height, grid, and title are handled in place; `X_FIELD`,
/// `Y_FIELD`, and `MARK` each delegate a sub-range of the stream to a
/// transient sub-parser targeting the corresponding slice of the chart.
pub(crate) struct ChartParser<'c, 'o> {
    chart: &'c mut Chart,
    observer: &'o mut dyn Observer,
    table: CommandTable<Self>,
}

impl<'c, 'o> ChartParser<'c, 'o> {
    pub(crate) fn new(chart: &'c mut Chart, observer: &'o mut dyn Observer) -> Self {
        Self {
            chart,
            observer,
            table: CommandTable::new()
                .fixed("WIDTH", 1, Self::width)
                .fixed("HEIGHT", 1, Self::height)
                .ranged("X_FIELD", 1, Self::x_field)
                .ranged("Y_FIELD", 1, Self::y_field)
                .ranged("MARK", 1, Self::mark)
                .fixed("GRID", 1, Self::grid)
                .fixed("TITLE", 1, Self::title),
        }
    }

    fn width(&mut self, token: &str) -> Result<(), ParseError> {
        self.chart.width = Some(parse_integer("WIDTH", token)?);
        Ok(())
    }

    fn height(&mut self, token: &str) -> Result<(), ParseError> {
        self.chart.height = Some(parse_integer("HEIGHT", token)?);
        Ok(())
    }

    fn x_field(
        &mut self,
        tokens: &[String],
        cursor: usize,
        end: usize,
    ) -> Result<usize, ParseError> {
        let mut encoding = FieldEncoding::default();
        let next =
            FieldParser::new(&mut encoding, &mut *self.observer).parse_loop(tokens, cursor, end)?;
        self.chart.encoding.x = Some(encoding);
        Ok(next)
    }

    fn y_field(
        &mut self,
        tokens: &[String],
        cursor: usize,
        end: usize,
    ) -> Result<usize, ParseError> {
        let mut encoding = FieldEncoding::default();
        let next =
            FieldParser::new(&mut encoding, &mut *self.observer).parse_loop(tokens, cursor, end)?;
        self.chart.encoding.y = Some(encoding);
        Ok(next)
    }

    fn mark(&mut self, tokens: &[String], cursor: usize, end: usize) -> Result<usize, ParseError> {
        MarkParser::new(&mut *self.chart, &mut *self.observer).parse_loop(tokens, cursor, end)
    }

    fn grid(&mut self, token: &str) -> Result<(), ParseError> {
        let value = parse_bool(token).ok_or_else(|| ParseError::UnknownKeyword {
            attribute: "GRID",
            token: token.to_string(),
        })?;
        self.chart
            .config
            .get_or_insert_with(ChartConfig::default)
            .axis
            .get_or_insert_with(AxisConfig::default)
            .grid = Some(value);
        Ok(())
    }

    fn title(&mut self, token: &str) -> Result<(), ParseError> {
        self.chart.title = Some(token.to_string());
        Ok(())
    }
}

impl SubParser for ChartParser<'_, '_> {
    fn table(&self) -> &CommandTable<Self> {
        &self.table
    }

    fn observer(&mut self) -> &mut dyn Observer {
        &mut *self.observer
    }

    fn parse_init(
        &mut self,
        _tokens: &[String],
        cursor: usize,
        _end: usize,
    ) -> Result<usize, ParseError> {
        // Display defaults precede any command: grid lines start enabled.
        self.chart.config = Some(ChartConfig {
            axis: Some(AxisConfig { grid: Some(true) }),
        });
        Ok(cursor)
    }
}

// ─── Entry points ───────────────────────────────────────────────────────────

/// Parse a complete token stream into a chart built around `data`.
///
/// The stream must be consumed in full: a token no parser scope recognizes
/// aborts with [`ParseError::TrailingTokens`]. On success the returned chart
/// is complete and internally consistent.
pub fn parse_tokens(tokens: &[String], data: DataFrame) -> Result<Chart, ParseError> {
    parse_tokens_with(tokens, data, &mut Silent)
}

/// Like [`parse_tokens`], reporting parse progress to `observer`.
pub fn parse_tokens_with(
    tokens: &[String],
    data: DataFrame,
    observer: &mut dyn Observer,
) -> Result<Chart, ParseError> {
    let mut chart = Chart::new(data);
    let end = tokens.len();
    let last = ChartParser::new(&mut chart, observer).parse_loop(tokens, 0, end)?;
    if last != end {
        return Err(ParseError::TrailingTokens {
            token: tokens[last].clone(),
            at: last,
        });
    }
    Ok(chart)
}
