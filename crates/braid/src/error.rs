//! Error types for Braid operations.

use std::io;

use thiserror::Error;

use braid_parser::error::ParseError;

/// The main error type for Braid operations.
///
/// Layout and rendering never fail; errors come from reading documents and
/// configuration.
#[derive(Debug, Error)]
pub enum BraidError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document failed to parse or validate. `src` is kept so the
    /// diagnostics can be rendered against it.
    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl BraidError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
