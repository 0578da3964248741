//! Query service
//!
//! The single entry point the HTTP layer and the CLI use to match letters.

mod query;

pub use query::{QueryService, parse_letters};
