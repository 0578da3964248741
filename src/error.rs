//! Error types shared by the index, the query service and the HTTP layer

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to build a [`WordIndex`](crate::index::WordIndex)
///
/// Always fatal: the process must not serve queries from a partial index.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("word source {} is unavailable: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Caller-supplied query input that cannot be matched
///
/// A client error. None of these variants touch the shared index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("letters list cannot be empty")]
    EmptyLetters,

    #[error("letters must be single characters, got {0:?}")]
    InvalidLetter(String),

    #[error("limit must be a non-negative integer, got {0:?}")]
    InvalidLimit(String),
}
