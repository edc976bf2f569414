//! Diagnostic sink shared by every pipeline stage.

use std::fmt::Display;
use std::io::Write;

use crate::interpreter::RuntimeError;
use crate::token::Token;

/// Session-wide error flags.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ErrorState {
    /// A lexical or syntax error was reported for the current unit.
    pub had_error: bool,
    /// A runtime error was reported at some point in the session.
    pub had_runtime_error: bool,
}

/// Formats diagnostics onto the diagnostic stream and records them in an
/// [`ErrorState`]. Writing is best-effort: a reporter never fails.
pub struct Reporter<'a> {
    state: &'a mut ErrorState,
    sink: &'a mut dyn Write,
}

impl<'a> Reporter<'a> {
    pub fn new(state: &'a mut ErrorState, sink: &'a mut dyn Write) -> Self {
        Reporter { state, sink }
    }

    pub fn had_error(&self) -> bool {
        self.state.had_error
    }

    /// Reports an error that has a line but no token, such as a bad lexeme.
    pub fn error(&mut self, line: usize, message: impl Display) {
        self.report(line, "", message);
    }

    pub fn report(&mut self, line: usize, location: &str, message: impl Display) {
        self.emit(format_args!("[line {}] Error{}: {}", line, location, message));
        self.state.had_error = true;
    }

    pub fn token_error(&mut self, token: &Token, message: impl Display) {
        if token.is_eof() {
            self.report(token.line, " at end", message);
        } else {
            self.report(token.line, &format!(" at '{}'", token.lexeme), message);
        }
    }

    pub fn runtime_error(&mut self, err: &RuntimeError) {
        self.emit(format_args!("{}\n[line {}]", err.message, err.token.line));
        self.state.had_runtime_error = true;
    }

    fn emit(&mut self, args: std::fmt::Arguments) {
        if let Err(err) = writeln!(self.sink, "{}", args).and_then(|_| self.sink.flush()) {
            tracing::warn!(error = %err, "failed to write diagnostic");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Kind;

    fn with_reporter(f: impl FnOnce(&mut Reporter)) -> (ErrorState, String) {
        let mut state = ErrorState::default();
        let mut diag = Vec::new();
        f(&mut Reporter::new(&mut state, &mut diag));
        (state, String::from_utf8(diag).unwrap())
    }

    #[test]
    fn plain_error_has_empty_location() {
        let (state, diag) = with_reporter(|r| r.error(2, "Unexpected character."));
        assert_eq!(diag, "[line 2] Error: Unexpected character.\n");
        assert!(state.had_error);
        assert!(!state.had_runtime_error);
    }

    #[test]
    fn token_error_at_end() {
        let (_, diag) = with_reporter(|r| r.token_error(&Token::eof(7), "Expect expression."));
        assert_eq!(diag, "[line 7] Error at end: Expect expression.\n");
    }

    #[test]
    fn token_error_quotes_lexeme() {
        let token = Token::new(Kind::RightParen, ")", 4);
        let (_, diag) = with_reporter(|r| r.token_error(&token, "Expect expression."));
        assert_eq!(diag, "[line 4] Error at ')': Expect expression.\n");
    }

    #[test]
    fn runtime_error_puts_line_on_second_line() {
        let err = RuntimeError::new(Token::new(Kind::Minus, "-", 3), "Operand must be a number.");
        let (state, diag) = with_reporter(|r| r.runtime_error(&err));
        assert_eq!(diag, "Operand must be a number.\n[line 3]\n");
        assert!(state.had_runtime_error);
        assert!(!state.had_error);
    }

    #[test]
    fn every_report_is_written() {
        let (_, diag) = with_reporter(|r| {
            r.error(1, "first");
            r.error(1, "first");
            r.error(2, "second");
        });
        assert_eq!(diag.lines().count(), 3);
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failing_sink_still_sets_flag() {
        let mut state = ErrorState::default();
        let mut sink = Broken;
        Reporter::new(&mut state, &mut sink).error(1, "lost");
        assert!(state.had_error);
    }
}
