//! Immutable word index with sub-multiset matching

use crate::core::{LetterBag, Word};
use crate::error::IndexError;
use crate::wordlists::WordSource;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Every known word with its letter counts, precomputed once
///
/// The index never changes after construction, so any number of threads may
/// query it at once through a shared reference or an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    words: Box<[Word]>,
    texts: FxHashSet<Box<str>>,
}

impl WordIndex {
    /// Build an index from lines of a word source
    ///
    /// Each non-empty line is one word, taken exactly as written: surrounding
    /// spaces are part of the word. Empty lines are skipped and a word listed
    /// more than once is stored once.
    ///
    /// # Examples
    /// ```
    /// use scrabble_helper::index::WordIndex;
    ///
    /// let index = WordIndex::build(["cat", "", "dog", "cat"]);
    /// assert_eq!(index.len(), 2);
    /// assert!(index.contains("cat"));
    /// ```
    pub fn build<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut texts: FxHashSet<Box<str>> = FxHashSet::default();
        let mut words = Vec::new();

        for line in lines {
            let text = line.as_ref();
            if texts.contains(text) {
                continue;
            }
            // Empty text is the only thing Word::new rejects, so this skips empty lines
            let Ok(word) = Word::new(text) else {
                continue;
            };
            texts.insert(text.into());
            words.push(word);
        }

        Self {
            words: words.into_boxed_slice(),
            texts,
        }
    }

    /// Load a source and build the index from it
    ///
    /// # Errors
    ///
    /// Returns `IndexError::SourceUnavailable` if the source cannot be read.
    /// No partial index is ever returned.
    pub fn load(source: &WordSource) -> Result<Self, IndexError> {
        let lines = source.load()?;
        let index = Self::build(&lines);
        tracing::info!(
            source = %source,
            lines = lines.len(),
            words = index.len(),
            "word index built"
        );
        Ok(index)
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check whether `text` is an indexed word
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.texts.contains(text)
    }

    /// Iterate over all indexed words
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// Every word that can be spelled from `letters`
    ///
    /// Result order is unspecified.
    ///
    /// # Examples
    /// ```
    /// use scrabble_helper::core::LetterBag;
    /// use scrabble_helper::index::WordIndex;
    ///
    /// let index = WordIndex::build(["cat", "at", "a", "tac", "dog"]);
    /// let mut found: Vec<&str> = index
    ///     .find_matches(&LetterBag::parse("cat"))
    ///     .iter()
    ///     .map(|w| w.text())
    ///     .collect();
    /// found.sort_unstable();
    /// assert_eq!(found, vec!["a", "at", "cat", "tac"]);
    /// ```
    #[must_use]
    pub fn find_matches(&self, letters: &LetterBag) -> Vec<&Word> {
        self.words
            .par_iter()
            .filter(|word| word.spelled_from(letters))
            .collect()
    }

    /// At most `limit` words that can be spelled from `letters`
    ///
    /// Stops as soon as `limit` matches are found. When more words qualify,
    /// which of them are returned is unspecified.
    #[must_use]
    pub fn find_matches_limited(&self, letters: &LetterBag, limit: usize) -> Vec<&Word> {
        if limit == 0 {
            return Vec::new();
        }

        self.words
            .par_iter()
            .filter(|word| word.spelled_from(letters))
            .take_any(limit)
            .collect()
    }
}
