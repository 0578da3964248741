//! Scrabble Helper - CLI
//!
//! Serve the words API over HTTP, or query, inspect and benchmark a word list
//! from the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scrabble_helper::{
    commands::{BenchmarkConfig, QueryConfig, index_stats, run_benchmark, run_query, run_server},
    config::Config,
    index::WordIndex,
    output::{print_benchmark_result, print_query_result, print_stats},
    service::QueryService,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "scrabble_helper",
    about = "Find every word that can be spelled from a bag of Scrabble letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list file, one word per line (default: embedded dictionary)
    #[arg(short = 'w', long, global = true, env = "SCRABBLE_WORDS")]
    words: Option<PathBuf>,

    /// YAML config file
    #[arg(short, long, global = true, env = "SCRABBLE_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the words API over HTTP
    Serve {
        /// Address to listen on (overrides config)
        #[arg(short, long)]
        bind: Option<SocketAddr>,
    },

    /// Find the words that can be spelled from some letters
    Query {
        /// Letters in hand; every character is one letter
        letters: String,

        /// Maximum number of words to return
        #[arg(short, long)]
        limit: Option<usize>,

        /// Show longest words first
        #[arg(short, long)]
        sorted: bool,
    },

    /// Show statistics about the word list
    Stats,

    /// Benchmark matching with random letter bags
    Benchmark {
        /// Number of random queries
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Letters per bag
        #[arg(short, long, default_value = "7")]
        bag_size: usize,

        /// Maximum number of words per query
        #[arg(short, long)]
        limit: Option<usize>,

        /// RNG seed for repeatable runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scrabble_helper=info,tower_http=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Load the config file if given, then apply command-line overrides
fn load_config(cli: &Cli, bind: Option<SocketAddr>) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    Ok(config.with_overrides(cli.words.clone(), bind))
}

/// Build the index once; a missing word source aborts startup
fn load_service(config: &Config) -> Result<QueryService> {
    let source = config.word_source();
    let index = WordIndex::load(&source)
        .with_context(|| format!("Cannot start without a word list ({source})"))?;
    Ok(QueryService::new(Arc::new(index)))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let bind = match &cli.command {
        Commands::Serve { bind } => *bind,
        _ => None,
    };
    let config = load_config(&cli, bind)?;
    let service = load_service(&config)?;

    match cli.command {
        Commands::Serve { .. } => run_server(service, config.server.bind),
        Commands::Query {
            letters,
            limit,
            sorted,
        } => run_query_command(letters, limit, sorted, &service),
        Commands::Stats => {
            print_stats(&index_stats(service.index()));
            Ok(())
        }
        Commands::Benchmark {
            count,
            bag_size,
            limit,
            seed,
        } => {
            run_benchmark_command(count, bag_size, limit, seed, &service);
            Ok(())
        }
    }
}

fn run_query_command(
    letters: String,
    limit: Option<usize>,
    sorted: bool,
    service: &QueryService,
) -> Result<()> {
    let config = QueryConfig::new(letters).with_limit(limit).sorted(sorted);
    let result = run_query(&config, service)?;
    print_query_result(&result);
    Ok(())
}

fn run_benchmark_command(
    count: usize,
    bag_size: usize,
    limit: Option<usize>,
    seed: Option<u64>,
    service: &QueryService,
) {
    println!(
        "Running {count} random queries of {bag_size} letters against {} words...",
        service.index().len()
    );

    let config = BenchmarkConfig {
        queries: count,
        bag_size,
        limit,
        seed,
        show_progress: true,
    };
    let result = run_benchmark(service, &config);
    print_benchmark_result(&result);
}
