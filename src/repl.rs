//! Sources of interactive input.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("line editor failed: {0}")]
    Readline(#[from] ReadlineError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Outcome of asking for one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// The user abandoned the line (Ctrl-C).
    Interrupted,
    /// No more input will arrive.
    Exhausted,
}

pub trait LineSource {
    /// Shows `prompt` and blocks until a line, an interrupt, or end of input.
    /// Sources that do not draw their own prompt write it to `out`.
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> Result<Input>;
}

/// Reads lines from any buffered reader, e.g. piped stdin.
pub struct Lines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> Lines<R> {
    pub fn new(reader: R) -> Self {
        Lines {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> LineSource for Lines<R> {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> Result<Input> {
        write!(out, "{}", prompt)?;
        out.flush()?;
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(Input::Exhausted);
        }
        let bytes = self.buf.strip_suffix(b"\n").unwrap_or(&self.buf);
        let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
        Ok(Input::Line(String::from_utf8_lossy(bytes).into_owned()))
    }
}

/// Terminal line editing with history.
pub struct Editor {
    editor: DefaultEditor,
    history: Option<PathBuf>,
}

impl Editor {
    pub fn new(history: Option<PathBuf>) -> Result<Self> {
        let mut editor = DefaultEditor::new()?;
        if let Some(path) = &history {
            if let Err(err) = editor.load_history(path) {
                tracing::debug!(path = %path.display(), error = %err, "no history loaded");
            }
        }
        Ok(Editor { editor, history })
    }
}

impl LineSource for Editor {
    fn read_line(&mut self, prompt: &str, _out: &mut dyn Write) -> Result<Input> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Input::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => Ok(Input::Exhausted),
            Err(err) => Err(err.into()),
        }
    }
}

impl Drop for Editor {
    fn drop(&mut self) {
        if let Some(path) = &self.history {
            if let Err(err) = self.editor.save_history(path) {
                tracing::warn!(path = %path.display(), error = %err, "failed to save history");
            }
        }
    }
}
