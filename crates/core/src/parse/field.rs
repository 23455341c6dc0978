use vegaplot_chart::{Bin, BinSetting, FieldEncoding, FieldType};

use super::bin::BinParser;
use super::engine::{CommandTable, SubParser};
use super::vocab::{AGGREGATES, FIELD_TYPES, TIME_UNITS, match_keyword, parse_bool};
use crate::error::ParseError;
use crate::observe::Observer;

/// Parses the attributes of one axis encoding.
///
/// The preamble consumes exactly one positional token, the field name, and
/// resets the semantic type to its quantitative default; the caller's arity
/// check on `X_FIELD`/`Y_FIELD` guarantees that token exists.
pub(crate) struct FieldParser<'e, 'o> {
    encoding: &'e mut FieldEncoding,
    observer: &'o mut dyn Observer,
    table: CommandTable<Self>,
}

impl<'e, 'o> FieldParser<'e, 'o> {
    pub(crate) fn new(encoding: &'e mut FieldEncoding, observer: &'o mut dyn Observer) -> Self {
        Self {
            encoding,
            observer,
            table: CommandTable::new()
                .fixed("TYPE", 1, Self::field_type)
                .ranged("BIN", 1, Self::bin)
                .ranged("AGGREGATE", 1, Self::aggregate)
                .fixed("TIME_UNIT", 1, Self::time_unit),
        }
    }

    fn field_type(&mut self, token: &str) -> Result<(), ParseError> {
        self.encoding.r#type =
            match_keyword(token, FIELD_TYPES).ok_or_else(|| ParseError::UnknownKeyword {
                attribute: "TYPE",
                token: token.to_string(),
            })?;
        Ok(())
    }

    /// `BIN` takes either a bare boolean or a run of binning attributes,
    /// never both. A boolean ends the command after one token; anything else
    /// is delegated to a transient [`BinParser`], which must parse at least
    /// one attribute for the command to mean something.
    fn bin(&mut self, tokens: &[String], cursor: usize, end: usize) -> Result<usize, ParseError> {
        if let Some(flag) = parse_bool(&tokens[cursor]) {
            self.encoding.bin = Some(BinSetting::Flag(flag));
            return Ok(cursor + 1);
        }

        let mut bin = Bin::default();
        let mut parser = BinParser::new(&mut bin, &mut *self.observer);
        let next = parser.parse_loop(tokens, cursor, end)?;
        if parser.parsed() == 0 {
            return Err(ParseError::EmptyBin);
        }
        self.encoding.bin = Some(BinSetting::Params(bin));
        Ok(next)
    }

    fn aggregate(
        &mut self,
        tokens: &[String],
        cursor: usize,
        _end: usize,
    ) -> Result<usize, ParseError> {
        let token = &tokens[cursor];
        self.encoding.aggregate =
            Some(
                match_keyword(token, AGGREGATES).ok_or_else(|| ParseError::UnknownKeyword {
                    attribute: "AGGREGATE",
                    token: token.clone(),
                })?,
            );
        Ok(cursor + 1)
    }

    fn time_unit(&mut self, token: &str) -> Result<(), ParseError> {
        self.encoding.time_unit =
            Some(
                match_keyword(token, TIME_UNITS).ok_or_else(|| ParseError::UnknownKeyword {
                    attribute: "TIME_UNIT",
                    token: token.to_string(),
                })?,
            );
        Ok(())
    }
}

impl SubParser for FieldParser<'_, '_> {
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
        self.encoding.field = tokens[cursor].clone();
        self.encoding.r#type = FieldType::Quantitative;
        Ok(cursor + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observe::Silent;
    use vegaplot_chart::{Aggregate, TimeUnit};

    fn toks(line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_owned).collect()
    }

    fn parse_field(line: &str) -> Result<(FieldEncoding, usize), ParseError> {
        let tokens = toks(line);
        let mut encoding = FieldEncoding::default();
        let mut silent = Silent;
        let last = FieldParser::new(&mut encoding, &mut silent).parse_loop(
            &tokens,
            0,
            tokens.len(),
        )?;
        Ok((encoding, last))
    }

    #[test]
    fn preamble_takes_the_field_name() {
        let (enc, last) = parse_field("sales").unwrap();
        assert_eq!(enc.field, "sales");
        assert_eq!(enc.r#type, FieldType::Quantitative);
        assert_eq!(last, 1);
    }

    #[test]
    fn type_overrides_the_default() {
        let (enc, _) = parse_field("region TYPE NOMINAL").unwrap();
        assert_eq!(enc.r#type, FieldType::Nominal);
    }

    #[test]
    fn invalid_type_is_rejected() {
        let err = parse_field("region TYPE categorical").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownKeyword {
                attribute: "TYPE",
                token: "categorical".into(),
            }
        );
    }

    #[test]
    fn bare_boolean_bin() {
        let (enc, last) = parse_field("age BIN TRUE").unwrap();
        assert_eq!(enc.bin, Some(BinSetting::Flag(true)));
        assert_eq!(last, 3);
    }

    #[test]
    fn bin_parameters_build_an_object() {
        let (enc, _) = parse_field("age BIN ANCHOR 0 STEP 5").unwrap();
        let Some(BinSetting::Params(bin)) = enc.bin else {
            panic!("expected binning parameters");
        };
        assert_eq!(bin.anchor, Some(0.0));
        assert_eq!(bin.step, Some(5.0));
        assert_eq!(bin.binned, None);
    }

    #[test]
    fn dangling_bin_is_an_error() {
        let err = parse_field("age BIN whatever").unwrap_err();
        assert_eq!(err, ParseError::EmptyBin);
    }

    #[test]
    fn aggregate_and_time_unit() {
        let (enc, _) = parse_field("when TYPE TEMPORAL AGGREGATE MEAN TIME_UNIT MONTH").unwrap();
        assert_eq!(enc.r#type, FieldType::Temporal);
        assert_eq!(enc.aggregate, Some(Aggregate::Mean));
        assert_eq!(enc.time_unit, Some(TimeUnit::Month));
    }

    #[test]
    fn unknown_aggregate_is_rejected() {
        let err = parse_field("n AGGREGATE total").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownKeyword {
                attribute: "AGGREGATE",
                token: "total".into(),
            }
        );
    }

    #[test]
    fn foreign_token_ends_the_scope() {
        let (enc, last) = parse_field("sales TYPE ORDINAL MARK BAR").unwrap();
        assert_eq!(enc.r#type, FieldType::Ordinal);
        assert_eq!(last, 3, "MARK belongs to the chart scope");
    }
}
