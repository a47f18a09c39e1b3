use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// Failures surfaced by the generator. Every variant is fatal: a partially
/// written robot program must not be silently patched or resumed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum KrlError {
    /// The destination could not be created, written, or flushed.
    Io(String),
    /// A statement or close call was issued after the program was finalized.
    Closed,
}

impl Error for KrlError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

impl fmt::Display for KrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            KrlError::Io(ref msg) => write!(f, "I/O error: {}", msg),
            KrlError::Closed => write!(f, "program already finalized, stream is closed"),
        }
    }
}

impl From<std::io::Error> for KrlError {
    fn from(err: std::io::Error) -> Self {
        KrlError::Io(err.to_string())
    }
}
