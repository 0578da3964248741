//! Indexed word representation
//!
//! A Word stores its text alongside the letter multiset derived from it once at load time.

use super::letters::{LetterBag, LetterCounts};
use std::fmt;
use thiserror::Error;

/// A dictionary word with its precomputed letter counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: Box<str>,
    letters: LetterCounts,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must contain at least one letter")]
    Empty,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is kept exactly as given: no trimming, no case folding.
    ///
    /// # Errors
    /// Returns `WordError::Empty` for an empty string.
    ///
    /// # Examples
    /// ```
    /// use scrabble_helper::core::Word;
    ///
    /// let word = Word::new("cat").unwrap();
    /// assert_eq!(word.text(), "cat");
    /// assert_eq!(word.letters().count('a'), 1);
    ///
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();
        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let letters = LetterCounts::from_letters(text.chars());
        Ok(Self {
            text: text.into_boxed_str(),
            letters,
        })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterCounts {
        &self.letters
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: a Word cannot be built from empty text
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check whether the word can be spelled from `bag`
    ///
    /// # Examples
    /// ```
    /// use scrabble_helper::core::{LetterBag, Word};
    ///
    /// let word = Word::new("aa").unwrap();
    /// assert!(!word.spelled_from(&LetterBag::parse("a")));
    /// assert!(word.spelled_from(&LetterBag::parse("aa")));
    /// ```
    #[inline]
    #[must_use]
    pub fn spelled_from(&self, bag: &LetterBag) -> bool {
        self.letters.is_subset_of(bag.counts())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("tac").unwrap();
        assert_eq!(word.text(), "tac");
        assert_eq!(word.len(), 3);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_empty() {
        assert!(matches!(Word::new(""), Err(WordError::Empty)));
    }

    #[test]
    fn word_keeps_case_and_spacing() {
        let word = Word::new("Hello World").unwrap();
        assert_eq!(word.text(), "Hello World");
        assert_eq!(word.letters().count('H'), 1);
        assert_eq!(word.letters().count('h'), 0);
        assert_eq!(word.letters().count(' '), 1);
    }

    #[test]
    fn word_letters_match_text() {
        let word = Word::new("letter").unwrap();
        let letters = word.letters();
        assert_eq!(letters.count('l'), 1);
        assert_eq!(letters.count('e'), 2);
        assert_eq!(letters.count('t'), 2);
        assert_eq!(letters.count('r'), 1);
        assert_eq!(letters.len(), 6);
    }

    #[test]
    fn word_len_counts_chars_not_bytes() {
        let word = Word::new("café").unwrap();
        assert_eq!(word.len(), 4);
    }

    #[test]
    fn word_spelled_from() {
        let word = Word::new("cat").unwrap();
        assert!(word.spelled_from(&LetterBag::parse("act")));
        assert!(word.spelled_from(&LetterBag::parse("tacks")));
        assert!(!word.spelled_from(&LetterBag::parse("ca")));
        assert!(!word.spelled_from(&LetterBag::parse("")));
    }

    #[test]
    fn word_display() {
        let word = Word::new("crate").unwrap();
        assert_eq!(format!("{word}"), "crate");
    }

    #[test]
    fn word_equality() {
        assert_eq!(Word::new("cat").unwrap(), Word::new("cat").unwrap());
        assert_ne!(Word::new("cat").unwrap(), Word::new("Cat").unwrap());
        assert_ne!(Word::new("cat").unwrap(), Word::new("act").unwrap());
    }
}
