//! Crate-level error types.

use std::fmt;

/// Errors produced by the sortviz crate.
#[derive(Debug)]
pub enum SortvizError {
    /// An array element could not be read as an unsigned magnitude.
    InvalidValue {
        /// Zero-based position of the offending element.
        position: usize,
        /// The text that failed to parse.
        token: String,
    },
    /// Options that contradict their own bounds.
    InvalidOptions(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Algorithm name outside the supported set.
    UnknownAlgorithm(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for SortvizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { position, token } => {
                write!(f, "invalid value {token:?} at position {position}")
            }
            Self::InvalidOptions(msg) => write!(f, "invalid options: {msg}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::UnknownAlgorithm(name) => {
                write!(f, "unknown sorting algorithm: {name:?}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for SortvizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SortvizError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
