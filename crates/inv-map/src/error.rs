//! City-map error type.

use thiserror::Error;

/// Errors produced while loading a city map.
#[derive(Debug, Error)]
pub enum MapError {
    /// A malformed line.  `line` is 1-based.
    #[error("city map line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("city map contains no cities")]
    Empty,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type MapResult<T> = Result<T, MapError>;
