//! Letter multisets
//!
//! A [`LetterBag`] is what a player holds; [`LetterCounts`] is the multiset form
//! used for matching. Letters are Unicode scalar values compared exactly: no case
//! folding, no normalization.

use std::fmt;

/// A single letter. Case-sensitive: `'A'` and `'a'` are different letters.
pub type Letter = char;

/// Multiset of letters stored as sorted `(letter, count)` runs
///
/// Sorting once at construction lets the sub-multiset test run as a single
/// linear merge over both operands, with no hashing and no per-comparison copy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterCounts {
    runs: Box<[(Letter, u32)]>,
    total: usize,
}

impl LetterCounts {
    /// Count the letters of any letter sequence
    ///
    /// # Examples
    /// ```
    /// use scrabble_helper::core::LetterCounts;
    ///
    /// let counts = LetterCounts::from_letters("banana".chars());
    /// assert_eq!(counts.count('a'), 3);
    /// assert_eq!(counts.count('n'), 2);
    /// assert_eq!(counts.count('z'), 0);
    /// assert_eq!(counts.len(), 6);
    /// ```
    pub fn from_letters<I: IntoIterator<Item = Letter>>(letters: I) -> Self {
        let mut sorted: Vec<Letter> = letters.into_iter().collect();
        sorted.sort_unstable();

        let total = sorted.len();
        let mut runs: Vec<(Letter, u32)> = Vec::new();
        for letter in sorted {
            match runs.last_mut() {
                Some((last, count)) if *last == letter => *count += 1,
                _ => runs.push((letter, 1)),
            }
        }

        Self {
            runs: runs.into_boxed_slice(),
            total,
        }
    }

    /// Number of occurrences of `letter`
    #[must_use]
    pub fn count(&self, letter: Letter) -> u32 {
        self.runs
            .binary_search_by_key(&letter, |&(l, _)| l)
            .map_or(0, |i| self.runs[i].1)
    }

    /// Total number of letters, counting repeats
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.total
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.runs.len()
    }

    /// Iterate `(letter, count)` pairs in ascending letter order
    pub fn iter(&self) -> impl Iterator<Item = (Letter, u32)> + '_ {
        self.runs.iter().copied()
    }

    /// Check whether every letter of `self` can be taken from a distinct letter of `bag`
    ///
    /// True iff for every letter value `v`, `count(v in self) <= count(v in bag)`.
    ///
    /// # Examples
    /// ```
    /// use scrabble_helper::core::LetterCounts;
    ///
    /// let bag = LetterCounts::from_letters("aab".chars());
    /// assert!(LetterCounts::from_letters("aa".chars()).is_subset_of(&bag));
    /// assert!(LetterCounts::from_letters("ab".chars()).is_subset_of(&bag));
    /// assert!(!LetterCounts::from_letters("aaa".chars()).is_subset_of(&bag));
    /// assert!(!LetterCounts::from_letters("abb".chars()).is_subset_of(&bag));
    /// ```
    #[must_use]
    pub fn is_subset_of(&self, bag: &Self) -> bool {
        if self.total > bag.total || self.runs.len() > bag.runs.len() {
            return false;
        }

        let mut available = bag.runs.iter();
        'needed: for &(letter, needed) in &*self.runs {
            for &(have, count) in available.by_ref() {
                if have == letter {
                    if count < needed {
                        return false;
                    }
                    continue 'needed;
                }
                if have > letter {
                    return false;
                }
            }
            // Bag exhausted before this letter was found
            return false;
        }
        true
    }
}

/// Letters supplied by a caller, in the order received
///
/// Order is kept for display; matching only ever looks at the multiset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterBag {
    letters: Vec<Letter>,
    counts: LetterCounts,
}

impl LetterBag {
    pub fn new<I: IntoIterator<Item = Letter>>(letters: I) -> Self {
        let letters: Vec<Letter> = letters.into_iter().collect();
        let counts = LetterCounts::from_letters(letters.iter().copied());
        Self { letters, counts }
    }

    /// Treat every character of `text` as one letter
    ///
    /// # Examples
    /// ```
    /// use scrabble_helper::core::LetterBag;
    ///
    /// let bag = LetterBag::parse("tao");
    /// assert_eq!(bag.letters(), &['t', 'a', 'o']);
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::new(text.chars())
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub const fn counts(&self) -> &LetterCounts {
        &self.counts
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl FromIterator<Letter> for LetterBag {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for LetterBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(text: &str) -> LetterCounts {
        LetterCounts::from_letters(text.chars())
    }

    #[test]
    fn counts_runs_are_sorted_and_merged() {
        let c = counts("mississippi");
        let runs: Vec<_> = c.iter().collect();
        assert_eq!(runs, vec![('i', 4), ('m', 1), ('p', 2), ('s', 4)]);
        assert_eq!(c.len(), 11);
        assert_eq!(c.distinct(), 4);
    }

    #[test]
    fn counts_empty() {
        let c = counts("");
        assert!(c.is_empty());
        assert_eq!(c.count('a'), 0);
        assert!(c.is_subset_of(&counts("abc")));
        assert!(c.is_subset_of(&counts("")));
    }

    #[test]
    fn subset_respects_duplicates() {
        let word = counts("aa");
        assert!(!word.is_subset_of(&counts("a")));
        assert!(word.is_subset_of(&counts("aa")));
        assert!(word.is_subset_of(&counts("aaa")));
    }

    #[test]
    fn subset_ignores_order() {
        let word = counts("cat");
        assert!(word.is_subset_of(&counts("tac")));
        assert!(word.is_subset_of(&counts("act")));
        assert!(word.is_subset_of(&counts("xtycza")));
    }

    #[test]
    fn subset_missing_letter() {
        assert!(!counts("dog").is_subset_of(&counts("cat")));
        // Missing letter sorts after everything in the bag
        assert!(!counts("az").is_subset_of(&counts("abc")));
        // Missing letter sorts between bag letters
        assert!(!counts("ab").is_subset_of(&counts("ac")));
    }

    #[test]
    fn subset_is_case_sensitive() {
        assert!(!counts("Cat").is_subset_of(&counts("cat")));
        assert!(counts("Cat").is_subset_of(&counts("Cta")));
    }

    #[test]
    fn subset_handles_non_ascii() {
        assert!(counts("été").is_subset_of(&counts("téé")));
        assert!(!counts("été").is_subset_of(&counts("ete")));
    }

    #[test]
    fn subset_matches_per_letter_count_rule() {
        let bags = ["", "a", "aab", "abc", "ccat", "tacocat", "zzz"];
        let words = ["a", "aa", "ab", "abb", "cat", "taco", "coca", "zz"];

        for bag in bags {
            let bag_counts = counts(bag);
            for word in words {
                let expected = word
                    .chars()
                    .all(|c| word.matches(c).count() <= bag.matches(c).count());
                assert_eq!(
                    counts(word).is_subset_of(&bag_counts),
                    expected,
                    "word {word:?} against bag {bag:?}"
                );
            }
        }
    }

    #[test]
    fn bag_keeps_input_order() {
        let bag = LetterBag::parse("oat");
        assert_eq!(bag.letters(), &['o', 'a', 't']);
        assert_eq!(bag.to_string(), "oat");
        assert_eq!(bag.counts(), &counts("tao"));
    }

    #[test]
    fn bag_from_iterator() {
        let bag: LetterBag = ['a', 'a', 'b'].into_iter().collect();
        assert_eq!(bag.len(), 3);
        assert_eq!(bag.counts().count('a'), 2);
    }
}
