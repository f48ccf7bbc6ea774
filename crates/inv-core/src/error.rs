//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `InvError` as one
//! variant where they surface core failures (e.g. a bad direction token).

use thiserror::Error;

/// The base error type for `inv-core` and a common variant for sub-crates.
#[derive(Debug, Error)]
pub enum InvError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `inv-*` crates.
pub type InvResult<T> = Result<T, InvError>;
