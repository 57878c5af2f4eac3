//! Crate-level error types.

use std::fmt;

/// Errors produced by the doorkit crate.
///
/// The interaction core itself is infallible; these cover the edges that
/// touch the outside world (option files, windowing, DOM listeners).
#[derive(Debug)]
pub enum DoorkitError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Options parsed but violate a constraint (e.g. inverted zoom bounds).
    InvalidOptions(String),
    /// Viewer event-loop failure.
    Viewer(String),
    /// Registering a DOM event listener failed.
    Listener(String),
}

impl fmt::Display for DoorkitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOptions(msg) => {
                write!(f, "invalid options: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
            Self::Listener(msg) => {
                write!(f, "failed to register listener: {msg}")
            }
        }
    }
}

impl std::error::Error for DoorkitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DoorkitError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
