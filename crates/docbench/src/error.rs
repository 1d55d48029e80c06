//! Typed error surface for loading, validating, and saving test sets.
//!
//! Matcher logic never raises: a `run` always returns a `(bool, String)` value
//! (see [`crate::runner`]). Everything in here is load/save-time and fatal.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: failed to parse JSON: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line}: {reason}")]
    Validation { line: usize, reason: String },

    #[error("duplicate test id '{0}' found while loading tests")]
    DuplicateId(String),

    #[error("failed to serialize test set: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("test file not found: {0}")]
    TestFileNotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
