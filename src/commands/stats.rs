//! Index statistics command
//!
//! Summarizes the loaded dictionary: size, word lengths and letter usage.

use crate::core::Letter;
use crate::index::WordIndex;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Summary of an index
pub struct IndexStats {
    pub total_words: usize,
    pub total_letters: usize,
    pub longest_word: Option<String>,
    /// Word length -> number of words of that length
    pub length_distribution: BTreeMap<usize, usize>,
    /// Letters by total occurrences, most frequent first
    pub letter_frequencies: Vec<(Letter, usize)>,
}

impl IndexStats {
    #[must_use]
    pub fn average_length(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.total_letters as f64 / self.total_words as f64
        }
    }

    /// Distinct letters appearing anywhere in the index
    #[must_use]
    pub fn alphabet(&self) -> Vec<Letter> {
        self.letter_frequencies.iter().map(|&(l, _)| l).collect()
    }
}

/// Compute statistics over every word in `index`
#[must_use]
pub fn index_stats(index: &WordIndex) -> IndexStats {
    let mut total_letters = 0;
    let mut longest: Option<(usize, &str)> = None;
    let mut length_distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut frequencies: FxHashMap<Letter, usize> = FxHashMap::default();

    for word in index.words() {
        let len = word.len();
        total_letters += len;
        *length_distribution.entry(len).or_insert(0) += 1;

        // Ties keep the alphabetically first word
        if longest.is_none_or(|(best, text)| len > best || (len == best && word.text() < text)) {
            longest = Some((len, word.text()));
        }

        for (letter, count) in word.letters().iter() {
            *frequencies.entry(letter).or_insert(0) += count as usize;
        }
    }

    let mut letter_frequencies: Vec<(Letter, usize)> = frequencies.into_iter().collect();
    letter_frequencies.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    IndexStats {
        total_words: index.len(),
        total_letters,
        longest_word: longest.map(|(_, text)| text.to_string()),
        length_distribution,
        letter_frequencies,
    }
}
