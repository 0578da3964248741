//! Letter matching over a shared word index

use crate::core::{LetterBag, Word};
use crate::error::QueryError;
use crate::index::WordIndex;
use std::sync::Arc;

/// Answers "which words can be spelled from these letters?"
///
/// Holds the index behind an `Arc`, so clones are cheap and every clone
/// queries the same immutable data.
#[derive(Debug, Clone)]
pub struct QueryService {
    index: Arc<WordIndex>,
}

impl QueryService {
    pub const fn new(index: Arc<WordIndex>) -> Self {
        Self { index }
    }

    /// The index this service queries
    #[must_use]
    pub fn index(&self) -> &WordIndex {
        &self.index
    }

    /// Words that can be spelled from `letters`, at most `limit` of them if given
    ///
    /// # Errors
    ///
    /// Returns `QueryError::EmptyLetters` if `letters` is empty. The index is
    /// not consulted in that case.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use scrabble_helper::core::LetterBag;
    /// use scrabble_helper::index::WordIndex;
    /// use scrabble_helper::service::QueryService;
    ///
    /// let service = QueryService::new(Arc::new(WordIndex::build(["cat", "dog"])));
    /// let found = service.find(&LetterBag::parse("tac"), None).unwrap();
    /// assert_eq!(found.len(), 1);
    /// assert_eq!(found[0].text(), "cat");
    ///
    /// assert!(service.find(&LetterBag::parse(""), None).is_err());
    /// ```
    pub fn find(
        &self,
        letters: &LetterBag,
        limit: Option<usize>,
    ) -> Result<Vec<&Word>, QueryError> {
        if letters.is_empty() {
            return Err(QueryError::EmptyLetters);
        }

        let words = match limit {
            Some(limit) => self.index.find_matches_limited(letters, limit),
            None => self.index.find_matches(letters),
        };

        tracing::debug!(
            letters = %letters,
            limit = ?limit,
            matches = words.len(),
            "matched letters"
        );

        Ok(words)
    }

    /// Parse raw letter parameters and match them
    ///
    /// Empty entries are placeholders and are dropped. Each remaining entry
    /// must be exactly one character.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::InvalidLetter` for an entry of more than one
    /// character and `QueryError::EmptyLetters` if nothing is left after
    /// dropping placeholders.
    pub fn find_raw<S: AsRef<str>>(
        &self,
        letters: &[S],
        limit: Option<usize>,
    ) -> Result<Vec<&Word>, QueryError> {
        let bag = parse_letters(letters)?;
        self.find(&bag, limit)
    }
}

/// Build a letter bag from per-letter parameters
///
/// # Errors
///
/// Returns `QueryError::InvalidLetter` if an entry holds more than one character.
///
/// # Examples
/// ```
/// use scrabble_helper::service::parse_letters;
///
/// let bag = parse_letters(&["a", "", "t"]).unwrap();
/// assert_eq!(bag.letters(), &['a', 't']);
/// assert!(parse_letters(&["ab"]).is_err());
/// ```
pub fn parse_letters<S: AsRef<str>>(letters: &[S]) -> Result<LetterBag, QueryError> {
    let mut bag = Vec::with_capacity(letters.len());
    for raw in letters {
        let raw = raw.as_ref();
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (None, _) => {}
            (Some(letter), None) => bag.push(letter),
            (Some(_), Some(_)) => return Err(QueryError::InvalidLetter(raw.to_string())),
        }
    }
    Ok(LetterBag::new(bag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn service(words: &[&str]) -> QueryService {
        QueryService::new(Arc::new(WordIndex::build(words)))
    }

    fn texts(words: &[&Word]) -> BTreeSet<String> {
        words.iter().map(|w| w.text().to_string()).collect()
    }

    #[test]
    fn find_without_limit_returns_all_matches() {
        let service = service(&["cat", "at", "a", "tac"]);
        let found = service.find(&LetterBag::parse("cat"), None).unwrap();
        assert_eq!(found.len(), 4);
    }

    #[test]
    fn find_with_limit() {
        let service = service(&["cat", "at", "a", "tac"]);
        let found = service.find(&LetterBag::parse("cat"), Some(2)).unwrap();
        assert_eq!(found.len(), 2);

        let none = service.find(&LetterBag::parse("cat"), Some(0)).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn empty_letters_rejected() {
        let service = service(&["a"]);
        assert_eq!(
            service.find(&LetterBag::default(), None),
            Err(QueryError::EmptyLetters)
        );
        assert_eq!(
            service.find(&LetterBag::default(), Some(3)),
            Err(QueryError::EmptyLetters)
        );
    }

    #[test]
    fn no_matches_is_success() {
        let service = service(&["dog"]);
        let found = service.find(&LetterBag::parse("cat"), None).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn find_raw_strips_placeholders() {
        let service = service(&["at", "cat"]);
        let found = service.find_raw(&["a", "", "t"], None).unwrap();
        assert_eq!(texts(&found), BTreeSet::from(["at".to_string()]));
    }

    #[test]
    fn find_raw_only_placeholders_is_empty_query() {
        let service = service(&["at"]);
        assert_eq!(
            service.find_raw(&["", ""], None),
            Err(QueryError::EmptyLetters)
        );
        assert_eq!(
            service.find_raw::<&str>(&[], None),
            Err(QueryError::EmptyLetters)
        );
    }

    #[test]
    fn parse_letters_rejects_multi_char_entries() {
        assert_eq!(
            parse_letters(&["a", "bc"]),
            Err(QueryError::InvalidLetter("bc".to_string()))
        );
    }

    #[test]
    fn parse_letters_accepts_non_ascii() {
        let bag = parse_letters(&["é", "ß"]).unwrap();
        assert_eq!(bag.letters(), &['é', 'ß']);
    }

    #[test]
    fn concurrent_queries_share_index() {
        let service = service(&["cat", "at", "a", "tac", "dog", "god"]);

        std::thread::scope(|scope| {
            let handles: Vec<_> = ["cat", "dog", "tca", "odg"]
                .into_iter()
                .map(|letters| {
                    let service = service.clone();
                    scope.spawn(move || {
                        let found = service.find(&LetterBag::parse(letters), None).unwrap();
                        texts(&found)
                    })
                })
                .collect();

            let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
            assert_eq!(results[0], results[2]);
            assert_eq!(results[1], results[3]);
            assert_eq!(results[1].len(), 2);
        });
    }
}
