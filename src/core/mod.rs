//! Core domain types for letter matching
//!
//! This module contains the fundamental domain types with no I/O.
//! Letters, letter multisets and words are pure values.

mod letters;
mod word;

pub use letters::{Letter, LetterBag, LetterCounts};
pub use word::{Word, WordError};
