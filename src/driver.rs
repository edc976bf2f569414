use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, trace};

use crate::config::Config;
use crate::exit::ExitOutcome;
use crate::interpreter::Interpreter;
use crate::parse::Parser;
use crate::repl::{self, Input, LineSource};
use crate::report::{ErrorState, Reporter};
use crate::token::scan_tokens;

/// Failures outside the language's own error model.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Input(#[from] repl::Error),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Owns one session: its error flags, the interpreter, and the output and
/// diagnostic streams.
pub struct Driver<O, E> {
    config: Config,
    state: ErrorState,
    interpreter: Interpreter,
    out: O,
    diag: E,
}

impl<O: Write, E: Write> Driver<O, E> {
    pub fn new(config: Config, out: O, diag: E) -> Self {
        Driver {
            config,
            state: ErrorState::default(),
            interpreter: Interpreter::new(),
            out,
            diag,
        }
    }

    pub fn state(&self) -> ErrorState {
        self.state
    }

    /// Gives back the output and diagnostic streams.
    pub fn into_parts(self) -> (O, E) {
        (self.out, self.diag)
    }

    /// Runs a script file once and maps the resulting flags to an outcome.
    pub fn run_batch(&mut self, path: &Path) -> Result<ExitOutcome> {
        info!(path = %path.display(), "running script");
        let bytes = fs::read(path).map_err(|source| Error::Read {
            path: path.to_owned(),
            source,
        })?;
        let source = String::from_utf8_lossy(&bytes);
        self.run(&source)?;
        self.out.flush()?;
        let outcome = ExitOutcome::from(self.state);
        debug!(?outcome, state = ?self.state, "script finished");
        Ok(outcome)
    }

    /// Evaluates one line at a time until `source` runs dry. Errors in a
    /// line never end the session.
    pub fn run_interactive(&mut self, source: &mut dyn LineSource) -> Result<ExitOutcome> {
        info!("starting interactive session");
        loop {
            match source.read_line(&self.config.prompt, &mut self.out)? {
                Input::Line(line) => {
                    self.run(&line)?;
                    self.state.had_error = false;
                }
                Input::Interrupted => trace!("line interrupted"),
                Input::Exhausted => break,
            }
        }
        debug!("end of input");
        self.out.flush()?;
        Ok(ExitOutcome::Success)
    }

    /// Feeds one source unit through scanner, parser and interpreter.
    /// Evaluation is skipped when scanning or parsing reported an error.
    pub fn run(&mut self, source: &str) -> Result<()> {
        let mut reporter = Reporter::new(&mut self.state, &mut self.diag);

        let tokens = scan_tokens(source, &mut reporter);
        trace!(count = tokens.len(), "scanned");

        let expr = Parser::new(tokens).parse(&mut reporter);
        let expr = match expr {
            Some(expr) if !reporter.had_error() => expr,
            _ => {
                debug!("skipping evaluation after syntax error");
                return Ok(());
            }
        };
        trace!(%expr, "parsed");

        self.interpreter
            .interpret(&expr, &mut reporter, &mut self.out)?;
        Ok(())
    }
}
