//! Parse-event observation.
//!
//! The engine reports its progress as structured [`ParseEvent`]s through an
//! injected [`Observer`] instead of printing. [`Silent`] discards everything;
//! [`Trace`] records rendered event lines so tests and debugging sessions can
//! inspect what the engine looked at and which commands it dispatched.

/// One step of parse progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseEvent<'a> {
    /// The engine examined the token at position `at` for dispatch.
    Step {
        /// The token under the cursor.
        token: &'a str,
        /// Position of the token in the stream.
        at: usize,
    },
    /// A command was recognized and its handler is about to run.
    Command {
        /// Canonical name of the recognized command.
        name: &'static str,
        /// Position of the command token in the stream.
        at: usize,
    },
}

impl std::fmt::Display for ParseEvent<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseEvent::Step { token, at } => write!(f, "step {at}: {token:?}"),
            ParseEvent::Command { name, at } => write!(f, "command {name} at {at}"),
        }
    }
}

/// Receives parse events from the engine.
pub trait Observer {
    /// Called once per event, in stream order.
    fn event(&mut self, event: ParseEvent<'_>);
}

/// Observer that discards every event.
#[derive(Debug, Default)]
pub struct Silent;

impl Observer for Silent {
    fn event(&mut self, _event: ParseEvent<'_>) {}
}

/// Observer that records one rendered line per event.
#[derive(Debug, Default)]
pub struct Trace {
    /// Rendered event lines, in the order they were emitted.
    pub lines: Vec<String>,
}

impl Observer for Trace {
    fn event(&mut self, event: ParseEvent<'_>) {
        self.lines.push(event.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_display() {
        let step = ParseEvent::Step {
            token: "WIDTH",
            at: 0,
        };
        assert_eq!(step.to_string(), "step 0: \"WIDTH\"");
        let cmd = ParseEvent::Command {
            name: "WIDTH",
            at: 0,
        };
        assert_eq!(cmd.to_string(), "command WIDTH at 0");
    }

    #[test]
    fn trace_records_in_order() {
        let mut trace = Trace::default();
        trace.event(ParseEvent::Step { token: "a", at: 0 });
        trace.event(ParseEvent::Command { name: "A", at: 0 });
        assert_eq!(trace.lines, vec!["step 0: \"a\"", "command A at 0"]);
    }
}
