//! One-shot query command
//!
//! Matches a single bag of letters and reports the words found.

use crate::core::LetterBag;
use crate::error::QueryError;
use crate::service::QueryService;
use std::cmp::Reverse;
use std::time::{Duration, Instant};

/// Options for a single query
pub struct QueryConfig {
    pub letters: String,
    pub limit: Option<usize>,
    /// Order results longest first, then alphabetically
    pub sorted: bool,
}

impl QueryConfig {
    #[must_use]
    pub const fn new(letters: String) -> Self {
        Self {
            letters,
            limit: None,
            sorted: false,
        }
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub const fn sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }
}

/// Result of running a query
pub struct QueryResult {
    pub letters: String,
    pub limit: Option<usize>,
    pub words: Vec<String>,
    pub duration: Duration,
}

/// Match every character of `config.letters` as one letter
///
/// # Errors
///
/// Returns `QueryError::EmptyLetters` if no letters were given.
pub fn run_query(config: &QueryConfig, service: &QueryService) -> Result<QueryResult, QueryError> {
    let bag = LetterBag::parse(&config.letters);

    let start = Instant::now();
    let found = service.find(&bag, config.limit)?;
    let duration = start.elapsed();

    let mut words: Vec<String> = found.iter().map(|w| w.text().to_string()).collect();
    if config.sorted {
        // Display order only: matching itself has no ordering
        words.sort_unstable_by(|a, b| {
            (Reverse(a.chars().count()), a).cmp(&(Reverse(b.chars().count()), b))
        });
    }

    Ok(QueryResult {
        letters: config.letters.clone(),
        limit: config.limit,
        words,
        duration,
    })
}
