//! Benchmark command
//!
//! Times matching against random letter bags drawn from the index's own letters.

use crate::core::{Letter, LetterBag};
use crate::service::QueryService;
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Options for a benchmark run
pub struct BenchmarkConfig {
    /// Number of queries to run
    pub queries: usize,
    /// Letters per random bag
    pub bag_size: usize,
    pub limit: Option<usize>,
    /// Fixed RNG seed for repeatable runs
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            queries: 1000,
            bag_size: 7,
            limit: None,
            seed: None,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub queries: usize,
    pub bag_size: usize,
    pub index_size: usize,
    pub total_matches: usize,
    pub average_matches: f64,
    pub max_matches: usize,
    pub best_bag: Option<String>,
    pub duration: Duration,
    pub queries_per_second: f64,
}

/// Run `config.queries` random queries against `service`
///
/// Bags are drawn like tiles from a bag: each letter is picked from the pool of
/// every letter occurrence in the index, so common letters come up more often.
#[must_use]
pub fn run_benchmark(service: &QueryService, config: &BenchmarkConfig) -> BenchmarkResult {
    let pool: Vec<Letter> = service
        .index()
        .words()
        .flat_map(|w| w.text().chars())
        .collect();

    let mut rng = config
        .seed
        .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);

    let pb = if config.show_progress {
        ProgressBar::new(config.queries as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {per_sec}",
    ) {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let mut total_matches = 0;
    let mut max_matches = 0;
    let mut best_bag = None;
    let mut elapsed = Duration::ZERO;

    for _ in 0..config.queries {
        let bag = random_bag(&pool, config.bag_size, &mut rng);

        let start = Instant::now();
        // Bags are non-empty unless the pool or bag size is empty
        let matches = service.find(&bag, config.limit).map_or(0, |w| w.len());
        elapsed += start.elapsed();

        total_matches += matches;
        if matches > max_matches || best_bag.is_none() {
            max_matches = max_matches.max(matches);
            best_bag = Some(bag.to_string());
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let queries = config.queries;
    BenchmarkResult {
        queries,
        bag_size: config.bag_size,
        index_size: service.index().len(),
        total_matches,
        average_matches: if queries == 0 {
            0.0
        } else {
            total_matches as f64 / queries as f64
        },
        max_matches,
        best_bag,
        duration: elapsed,
        queries_per_second: if elapsed.is_zero() {
            0.0
        } else {
            queries as f64 / elapsed.as_secs_f64()
        },
    }
}

fn random_bag<R: Rng>(pool: &[Letter], size: usize, rng: &mut R) -> LetterBag {
    (0..size)
        .filter_map(|_| pool.choose(rng).copied())
        .collect()
}
