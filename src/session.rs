use crate::{
    error::CalcError,
    evaluate,
    interpreter::{
        assignment::{assign, is_assignment},
        scope::VariableScope,
    },
};

/// Text printed in response to `/help`.
pub const HELP: &str = "The program evaluates integer expressions with + - * / ^ and parentheses.\n\
                        Assign variables with `name = value`, then use them in expressions.\n\
                        Type /exit to quit.";

/// Text printed in response to `/exit`.
pub const GOODBYE: &str = "Bye!";

/// What the driver should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to print.
    Skip,
    /// Print this line and keep reading.
    Reply(String),
    /// Print this line and stop.
    Exit(String),
}

/// A calculator session.
///
/// Owns the variable scope and dispatches each input line to the command
/// handler, the assignment handler or the expression pipeline. Failures are
/// turned into replies; no input ends the session except `/exit`.
#[derive(Debug, Default)]
pub struct Session {
    scope: VariableScope,
}

impl Session {
    /// Creates a session with an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The variables assigned so far.
    #[must_use]
    pub const fn scope(&self) -> &VariableScope {
        &self.scope
    }

    /// Handles one line of input.
    ///
    /// # Example
    /// ```
    /// use reckon::session::{Outcome, Session};
    ///
    /// let mut session = Session::new();
    /// assert_eq!(session.handle("a = 5"), Outcome::Skip);
    /// assert_eq!(session.handle("a + 3"), Outcome::Reply("8".to_owned()));
    /// assert_eq!(session.handle("b + 1"), Outcome::Reply("Unknown variable".to_owned()));
    /// ```
    pub fn handle(&mut self, line: &str) -> Outcome {
        let line = line.trim();

        if line.is_empty() {
            return Outcome::Skip;
        }
        if let Some(command) = line.strip_prefix('/') {
            return self.command(command);
        }

        if is_assignment(line) {
            match assign(line, &mut self.scope) {
                Ok(_) => Outcome::Skip,
                Err(e) => Self::failure(line, &e),
            }
        } else {
            match evaluate(line, &self.scope) {
                Ok(value) => Outcome::Reply(value.to_string()),
                Err(e) => Self::failure(line, &e),
            }
        }
    }

    fn command(&self, command: &str) -> Outcome {
        match command {
            "help" => Outcome::Reply(HELP.to_owned()),
            "exit" => {
                for (name, value) in self.scope.iter() {
                    tracing::debug!(name, value, "binding at exit");
                }
                Outcome::Exit(GOODBYE.to_owned())
            },
            _ => {
                tracing::debug!(command, "unknown command");
                Outcome::Reply("Unknown command".to_owned())
            },
        }
    }

    fn failure(line: &str, error: &CalcError) -> Outcome {
        tracing::debug!(line, kind = %error.kind(), ?error, "line rejected");
        Outcome::Reply(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(text: &str) -> Outcome {
        Outcome::Reply(text.to_owned())
    }

    #[test]
    fn blank_lines_are_skipped() {
        let mut session = Session::new();
        assert_eq!(session.handle(""), Outcome::Skip);
        assert_eq!(session.handle("   \t"), Outcome::Skip);
    }

    #[test]
    fn commands() {
        let mut session = Session::new();
        assert_eq!(session.handle("/help"), reply(HELP));
        assert_eq!(session.handle("/go"), reply("Unknown command"));
        assert_eq!(session.handle(" /exit "), Outcome::Exit(GOODBYE.to_owned()));
    }

    #[test]
    fn failures_do_not_end_the_session() {
        let mut session = Session::new();
        assert_eq!(session.handle("5 / 0"), reply("Division by zero"));
        assert_eq!(session.handle("1 +"), reply("Invalid expression"));
        assert_eq!(session.handle("a1 = 3"), reply("Invalid identifier"));
        assert_eq!(session.handle("a = 3b"), reply("Invalid assignment"));
        assert_eq!(session.handle("a = b"), reply("Unknown variable"));
        assert_eq!(session.handle("9223372036854775807 + 1"), reply("Integer overflow"));
        assert_eq!(session.handle("2 + 2"), reply("4"));
    }

    #[test]
    fn assignments_update_the_scope() {
        let mut session = Session::new();
        assert_eq!(session.handle("n = 4"), Outcome::Skip);
        assert_eq!(session.handle("m = n"), Outcome::Skip);
        assert_eq!(session.scope().get("m"), Ok(4));
    }

    #[test]
    fn exit_after_assignments() {
        let mut session = Session::new();
        session.handle("a = 1");
        session.handle("b = 2");

        assert_eq!(session.handle("/exit"), Outcome::Exit(GOODBYE.to_owned()));
        assert_eq!(session.scope().iter().collect::<Vec<_>>(), vec![("a", 1), ("b", 2)]);
    }
}
