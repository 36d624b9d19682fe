//! Error types for groupswitch.

use std::fmt;

/// Result type alias for groupswitch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for groupswitch operations.
#[derive(Debug)]
pub enum Error {
    /// Host process unreachable or returned an error condition.
    Host(String),
    /// Malformed wire message to or from the host.
    Codec(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Host(s) => write!(f, "host bridge error: {s}"),
            Self::Codec(e) => write!(f, "wire codec error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Codec(e) => Some(e),
            Self::Host(_) => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Codec(e)
    }
}
