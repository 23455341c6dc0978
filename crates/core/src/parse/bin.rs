use vegaplot_chart::Bin;

use super::engine::{CommandTable, SubParser};
use super::vocab::{parse_bool, parse_number};
use crate::error::ParseError;
use crate::observe::Observer;

/// Parses the attributes of one binning parameter object.
///
/// Lives for a single delegated token range. Tracks how many attributes were
/// successfully applied so the caller can tell an absent configuration from
/// a malformed one: an unmatched `BINNED`/`NICE` boolean is tolerated and
/// leaves the attribute unset, but it does not count as parsed.
pub(crate) struct BinParser<'b, 'o> {
    bin: &'b mut Bin,
    parsed: usize,
    observer: &'o mut dyn Observer,
    table: CommandTable<Self>,
}

impl<'b, 'o> BinParser<'b, 'o> {
    pub(crate) fn new(bin: &'b mut Bin, observer: &'o mut dyn Observer) -> Self {
        Self {
            bin,
            parsed: 0,
            observer,
            table: CommandTable::new()
                .fixed("ANCHOR", 1, Self::anchor)
                .fixed("BASE", 1, Self::base)
                .fixed("BINNED", 1, Self::binned)
                .fixed("MAXBINS", 1, Self::maxbins)
                .fixed("MINSTEP", 1, Self::minstep)
                .fixed("NICE", 1, Self::nice)
                .fixed("STEP", 1, Self::step),
        }
    }

    /// Number of attributes successfully applied so far.
    pub(crate) fn parsed(&self) -> usize {
        self.parsed
    }

    fn anchor(&mut self, token: &str) -> Result<(), ParseError> {
        self.bin.anchor = Some(parse_number("ANCHOR", token)?);
        self.parsed += 1;
        Ok(())
    }

    fn base(&mut self, token: &str) -> Result<(), ParseError> {
        self.bin.base = Some(parse_number("BASE", token)?);
        self.parsed += 1;
        Ok(())
    }

    fn binned(&mut self, token: &str) -> Result<(), ParseError> {
        if let Some(value) = parse_bool(token) {
            self.bin.binned = Some(value);
            self.parsed += 1;
        }
        Ok(())
    }

    fn maxbins(&mut self, token: &str) -> Result<(), ParseError> {
        self.bin.maxbins = Some(parse_number("MAXBINS", token)?);
        self.parsed += 1;
        Ok(())
    }

    fn minstep(&mut self, token: &str) -> Result<(), ParseError> {
        self.bin.minstep = Some(parse_number("MINSTEP", token)?);
        self.parsed += 1;
        Ok(())
    }

    fn nice(&mut self, token: &str) -> Result<(), ParseError> {
        if let Some(value) = parse_bool(token) {
            self.bin.nice = Some(value);
            self.parsed += 1;
        }
        Ok(())
    }

    fn step(&mut self, token: &str) -> Result<(), ParseError> {
        self.bin.step = Some(parse_number("STEP", token)?);
        self.parsed += 1;
        Ok(())
    }
}

impl SubParser for BinParser<'_, '_> {
    fn table(&self) -> &CommandTable<Self> {
        &self.table
    }

    fn observer(&mut self) -> &mut dyn Observer {
        &mut *self.observer
    }
}
