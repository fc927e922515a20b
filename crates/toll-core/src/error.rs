//! Shared error type.
//!
//! Pipeline crates return `TollError` directly; the output crate keeps its
//! own enum because its failures (CSV, JSON) never reach the pipeline.

use thiserror::Error;

/// The error type for `toll-core` and the pipeline crates built on it.
#[derive(Debug, Error)]
pub enum TollError {
    /// A location name is absent from the location table.  The request is
    /// rejected; nothing is computed.
    #[error("unknown location {0:?}")]
    UnknownLocation(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `toll-*` crates.
pub type TollResult<T> = Result<T, TollError>;
