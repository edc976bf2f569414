use std::env;
use std::path::PathBuf;

pub const DEFAULT_PROMPT: &str = "> ";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Session settings. Builder-style so tests can override single fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Shown before every interactive line.
    pub prompt: String,
    /// Line editor history file, if any.
    pub history: Option<PathBuf>,
    /// `tracing` filter directive.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: DEFAULT_PROMPT.to_owned(),
            history: None,
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `OXLOX_PROMPT`, `OXLOX_HISTORY` and `OXLOX_LOG`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::new();
        if let Some(prompt) = lookup("OXLOX_PROMPT") {
            config = config.prompt(prompt);
        }
        if let Some(history) = lookup("OXLOX_HISTORY").filter(|h| !h.is_empty()) {
            config = config.history(history);
        }
        if let Some(filter) = lookup("OXLOX_LOG").filter(|f| !f.is_empty()) {
            config = config.log_filter(filter);
        }
        config
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn history(mut self, path: impl Into<PathBuf>) -> Self {
        self.history = Some(path.into());
        self
    }

    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }
}
