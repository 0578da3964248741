//! Command implementations

pub mod benchmark;
pub mod query;
pub mod serve;
pub mod stats;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use query::{QueryConfig, QueryResult, run_query};
pub use serve::{run_server, serve};
pub use stats::{IndexStats, index_stats};
