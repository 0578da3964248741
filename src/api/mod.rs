//! HTTP interface
//!
//! `GET /words?letters=a&letters=t&limit=3` and a health probe.

mod routes;

pub use routes::{WordRecord, WordsParams, build_router};
