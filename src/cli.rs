use std::ffi::OsString;
use std::path::PathBuf;

pub const USAGE: &str = "Usage: oxlox [script]";

/// What the process was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Interactive,
    Batch(PathBuf),
    Usage,
}

impl Invocation {
    /// Classifies the arguments that follow the program name.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        match (args.next(), args.next()) {
            (None, _) => Invocation::Interactive,
            (Some(path), None) => Invocation::Batch(PathBuf::from(path)),
            (Some(_), Some(_)) => Invocation::Usage,
        }
    }
}
