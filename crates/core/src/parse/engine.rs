use crate::error::ParseError;
use crate::observe::{Observer, ParseEvent};

// ─── Handler shapes ─────────────────────────────────────────────────────────

/// Handler for a command that consumes exactly one argument token.
///
/// The engine advances the cursor past the command name and past the single
/// argument; the handler never decides how far to move.
pub type FixedFn<P> = fn(&mut P, &str) -> Result<(), ParseError>;

/// Handler for a command that decides itself how many tokens it consumes.
///
/// Invoked with the cursor positioned on the first token after the command
/// name and the exclusive end of the stream; returns the cursor where
/// parsing resumes.
pub type RangedFn<P> = fn(&mut P, &[String], usize, usize) -> Result<usize, ParseError>;

/// The two handler shapes a command table entry can carry.
pub enum Handler<P> {
    /// Fixed lookahead of one token.
    Fixed(FixedFn<P>),
    /// Variable lookahead; the handler returns the resumption cursor.
    Ranged(RangedFn<P>),
}

// Derived Copy/Clone would bound `P: Copy`; function pointers are always
// copyable regardless of `P`.
impl<P> Clone for Handler<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Handler<P> {}

// ─── Command tables ─────────────────────────────────────────────────────────

/// One entry in a parser's command table.
pub struct Command<P> {
    /// Canonical (upper-case) command name.
    pub name: &'static str,
    /// Minimum number of tokens that must follow the command name.
    pub min_args: usize,
    /// Handler invoked when the command is recognized.
    pub handler: Handler<P>,
}

impl<P> Clone for Command<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Command<P> {}

/// Command-name → handler mapping for one parser scope.
///
/// Names are compared ignoring ASCII case and must be unique within one
/// table. Lookup is a linear scan over the handful of entries a scope has;
/// no per-lookup allocation or case folding of the probe token is needed.
pub struct CommandTable<P> {
    commands: Vec<Command<P>>,
}

impl<P> CommandTable<P> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Register a fixed-lookahead command.
    pub fn fixed(self, name: &'static str, min_args: usize, handler: FixedFn<P>) -> Self {
        debug_assert!(min_args >= 1, "fixed command {name} consumes one argument");
        self.push(Command {
            name,
            min_args,
            handler: Handler::Fixed(handler),
        })
    }

    /// Register a ranged-lookahead command.
    pub fn ranged(self, name: &'static str, min_args: usize, handler: RangedFn<P>) -> Self {
        self.push(Command {
            name,
            min_args,
            handler: Handler::Ranged(handler),
        })
    }

    fn push(mut self, command: Command<P>) -> Self {
        debug_assert!(
            self.get(command.name).is_none(),
            "duplicate command {}",
            command.name
        );
        self.commands.push(command);
        self
    }

    /// Look up the entry for a token, ignoring ASCII case.
    pub fn get(&self, token: &str) -> Option<Command<P>> {
        self.commands
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(token))
            .copied()
    }
}

impl<P> Default for CommandTable<P> {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Parse driver ───────────────────────────────────────────────────────────

/// A parser over one contiguous scope of the token stream.
///
/// Implementations supply a command table and, where the scope starts with
/// required positional tokens (a field's name, a mark's kind), a
/// [`SubParser::parse_init`] preamble. The provided loop then drives table
/// dispatch until the scope ends: either the cursor reaches `end`, or the
/// token under the cursor is outside this parser's vocabulary, in which case
/// the loop stops without consuming it and hands control back to the caller.
pub trait SubParser: Sized {
    /// The command table for this parser's scope.
    fn table(&self) -> &CommandTable<Self>;

    /// The observer receiving parse events.
    fn observer(&mut self) -> &mut dyn Observer;

    /// Consume required positional tokens before command dispatch begins.
    ///
    /// The default consumes nothing.
    fn parse_init(
        &mut self,
        tokens: &[String],
        cursor: usize,
        end: usize,
    ) -> Result<usize, ParseError> {
        let _ = (tokens, end);
        Ok(cursor)
    }

    /// Dispatch the command under the cursor, if it is one of ours.
    ///
    /// Returns the cursor past everything the command consumed, or `cursor`
    /// unchanged when the token is not in this parser's vocabulary. Callers
    /// must ensure `cursor < end`.
    fn parse_step(
        &mut self,
        tokens: &[String],
        cursor: usize,
        end: usize,
    ) -> Result<usize, ParseError> {
        let token = tokens[cursor].as_str();
        self.observer().event(ParseEvent::Step { token, at: cursor });

        let Some(command) = self.table().get(token) else {
            return Ok(cursor);
        };

        // Arity is checked on the tokens strictly after the command name,
        // before the handler runs.
        let found = end - (cursor + 1);
        if found < command.min_args {
            return Err(ParseError::MissingArguments {
                command: command.name,
                expected: command.min_args,
                found,
            });
        }

        self.observer().event(ParseEvent::Command {
            name: command.name,
            at: cursor,
        });

        let cursor = cursor + 1;
        match command.handler {
            Handler::Fixed(f) => {
                f(self, &tokens[cursor])?;
                Ok(cursor + 1)
            }
            Handler::Ranged(f) => f(self, tokens, cursor, end),
        }
    }

    /// Run the preamble, then step until this scope ends.
    ///
    /// Returns the cursor past the last token this parser consumed. Stopping
    /// short of `end` is not an error here; whether leftover tokens are
    /// acceptable is the outermost caller's decision.
    fn parse_loop(
        &mut self,
        tokens: &[String],
        begin: usize,
        end: usize,
    ) -> Result<usize, ParseError> {
        let mut cursor = self.parse_init(tokens, begin, end)?;
        while cursor < end {
            let next = self.parse_step(tokens, cursor, end)?;
            if next == cursor {
                break;
            }
            cursor = next;
        }
        Ok(cursor)
    }
}
