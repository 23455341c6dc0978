use thiserror::Error;

/// Errors that abort a parse.
///
/// Every variant is a hard failure: the parse unwinds immediately to the
/// outermost caller and the partially populated chart is discarded. The
/// deliberately tolerated cases (an unmatched boolean after `BINNED` or
/// `NICE`) never reach this type; they leave the attribute unset instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A recognized command was followed by fewer tokens than it requires.
    #[error("{command} expects at least {expected} argument(s), found {found}")]
    MissingArguments {
        /// The command missing its arguments.
        command: &'static str,
        /// How many trailing tokens the command requires.
        expected: usize,
        /// How many tokens actually remained.
        found: usize,
    },

    /// A token could not be parsed as the number a command requires.
    #[error("{command} expects a numeric value, found {value:?}")]
    InvalidNumber {
        /// The command whose argument was malformed.
        command: &'static str,
        /// The offending token.
        value: String,
    },

    /// A token did not match any keyword accepted for a mandatory attribute.
    #[error("unrecognized {attribute} keyword {token:?}")]
    UnknownKeyword {
        /// The attribute whose vocabulary was violated (e.g. `TYPE`, `MARK`).
        attribute: &'static str,
        /// The offending token.
        token: String,
    },

    /// `BIN` was given, but neither a boolean nor any binning attribute
    /// followed it.
    #[error("BIN expects a boolean or at least one binning attribute")]
    EmptyBin,

    /// The top-level parse stopped before consuming the whole stream.
    #[error("unparseable input starting with {token:?} at position {at}")]
    TrailingTokens {
        /// The first token that could not be consumed.
        token: String,
        /// Its position in the stream.
        at: usize,
    },
}
