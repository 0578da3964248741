//! Scrabble Helper
//!
//! Finds every known word that can be spelled from a bag of letters. Each letter
//! in a word must be covered by a distinct letter of the bag, so duplicates count.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use scrabble_helper::core::LetterBag;
//! use scrabble_helper::index::WordIndex;
//! use scrabble_helper::service::QueryService;
//!
//! let index = WordIndex::build(["cat", "at", "a", "tac", "dog"]);
//! let service = QueryService::new(Arc::new(index));
//!
//! let words = service.find(&LetterBag::parse("tca"), None).unwrap();
//! assert_eq!(words.len(), 4);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Word sources
pub mod wordlists;

// Immutable word index
pub mod index;

// Query entry point
pub mod service;

// HTTP interface
pub mod api;

// YAML configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{IndexError, QueryError};
