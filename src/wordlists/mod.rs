//! Word sources
//!
//! A word list is either a file on disk or the dictionary embedded in the binary.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::error::IndexError;
use std::fmt;
use std::path::PathBuf;

/// Where the index takes its words from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WordSource {
    /// The dictionary compiled into the binary
    #[default]
    Embedded,
    /// A line-oriented text file, one word per line
    File(PathBuf),
}

impl WordSource {
    /// Use `path` when given, otherwise the embedded dictionary
    #[must_use]
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Embedded, Self::File)
    }

    /// Read every non-blank line of the source
    ///
    /// # Errors
    ///
    /// Returns `IndexError::SourceUnavailable` if a file source cannot be read.
    /// The embedded source cannot fail.
    pub fn load(&self) -> Result<Vec<String>, IndexError> {
        match self {
            Self::Embedded => Ok(loader::words_from_slice(WORDS)),
            Self::File(path) => loader::load_from_file(path),
        }
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded dictionary"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_not_empty() {
        for &word in WORDS {
            assert!(!word.is_empty(), "empty entry in embedded list");
        }
    }

    #[test]
    fn embedded_words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn embedded_source_loads_all_words() {
        let words = WordSource::Embedded.load().unwrap();
        assert_eq!(words.len(), WORDS_COUNT);
        assert!(words.iter().any(|w| w == "cat"));
    }

    #[test]
    fn from_path_selects_source() {
        assert_eq!(WordSource::from_path(None), WordSource::Embedded);
        assert_eq!(
            WordSource::from_path(Some(PathBuf::from("words.txt"))),
            WordSource::File(PathBuf::from("words.txt"))
        );
    }

    #[test]
    fn missing_file_source_fails() {
        let source = WordSource::File(PathBuf::from("/definitely/not/here.txt"));
        assert!(matches!(
            source.load(),
            Err(IndexError::SourceUnavailable { .. })
        ));
    }

    #[test]
    fn source_display() {
        assert_eq!(WordSource::Embedded.to_string(), "embedded dictionary");
        assert_eq!(
            WordSource::File(PathBuf::from("dict.txt")).to_string(),
            "dict.txt"
        );
    }
}
