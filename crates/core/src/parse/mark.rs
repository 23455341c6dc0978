use vegaplot_chart::{Chart, Mark};

use super::engine::{CommandTable, SubParser};
use super::vocab::{MARK_KINDS, match_keyword};
use crate::error::ParseError;
use crate::observe::Observer;

/// Selects the chart's mark kind and sets shared mark attributes.
///
/// The preamble consumes exactly one positional token naming one of the
/// eleven kinds; the selection is mandatory and final for the rest of the
/// parse. `COLOR` then applies to whichever kind was selected, through the
/// exhaustive accessor on [`Mark`].
pub(crate) struct MarkParser<'c, 'o> {
    chart: &'c mut Chart,
    observer: &'o mut dyn Observer,
    table: CommandTable<Self>,
}

impl<'c, 'o> MarkParser<'c, 'o> {
    pub(crate) fn new(chart: &'c mut Chart, observer: &'o mut dyn Observer) -> Self {
        Self {
            chart,
            observer,
            table: CommandTable::new().fixed("COLOR", 1, Self::color),
        }
    }

    fn color(&mut self, token: &str) -> Result<(), ParseError> {
        // The preamble always selects a mark before COLOR can be reached.
        if let Some(mark) = self.chart.mark.as_mut() {
            *mark.color_mut() = Some(token.to_ascii_lowercase());
        }
        Ok(())
    }
}

impl SubParser for MarkParser<'_, '_> {
    fn table(&self) -> &CommandTable<Self> {
        &self.table
    }

    fn observer(&mut self) -> &mut dyn Observer {
        &mut *self.observer
    }

    fn parse_init(
        &mut self,
        tokens: &[String],
        cursor: usize,
        _end: usize,
    ) -> Result<usize, ParseError> {
        let token = &tokens[cursor];
        let kind = match_keyword(token, MARK_KINDS).ok_or_else(|| ParseError::UnknownKeyword {
            attribute: "MARK",
            token: token.clone(),
        })?;
        self.chart.mark = Some(Mark::new(kind));
        Ok(cursor + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observe::Silent;
    use vegaplot_chart::{DataFrame, MarkKind};

    fn toks(line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_owned).collect()
    }

    fn parse_mark(line: &str) -> Result<(Chart, usize), ParseError> {
        let tokens = toks(line);
        let mut chart = Chart::new(DataFrame::default());
        let mut silent = Silent;
        let last =
            MarkParser::new(&mut chart, &mut silent).parse_loop(&tokens, 0, tokens.len())?;
        Ok((chart, last))
    }

    #[test]
    fn kind_selection_is_mandatory() {
        let err = parse_mark("SPLINE").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownKeyword {
                attribute: "MARK",
                token: "SPLINE".into(),
            }
        );
    }

    #[test]
    fn color_is_lowercased() {
        let (chart, last) = parse_mark("BAR COLOR Red").unwrap();
        let mark = chart.mark.expect("mark selected");
        assert_eq!(mark.kind(), MarkKind::Bar);
        assert_eq!(mark.color(), Some("red"));
        assert_eq!(last, 3);
    }

    #[test]
    fn bare_kind_has_no_color() {
        let (chart, _) = parse_mark("tick").unwrap();
        let mark = chart.mark.expect("mark selected");
        assert_eq!(mark.kind(), MarkKind::Tick);
        assert_eq!(mark.color(), None);
    }

    #[test]
    fn foreign_token_ends_the_scope() {
        let (chart, last) = parse_mark("LINE COLOR blue WIDTH 300").unwrap();
        assert_eq!(last, 3, "WIDTH belongs to the chart scope");
        assert_eq!(chart.mark.unwrap().kind(), MarkKind::Line);
    }
}
