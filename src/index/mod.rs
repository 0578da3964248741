//! The word index
//!
//! Built once from a word source, then shared read-only by every query.

mod word_index;

pub use word_index::WordIndex;
