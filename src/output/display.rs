//! Display functions for command results

use super::formatters::{columns, create_progress_bar, display_letter, letter_tiles};
use crate::commands::{BenchmarkResult, IndexStats, QueryResult};
use colored::Colorize;

/// Print the result of a query
pub fn print_query_result(result: &QueryResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Letters: {}", letter_tiles(&result.letters).bright_yellow().bold());
    if let Some(limit) = result.limit {
        println!("Limit:   {limit}");
    }
    println!("{}", "─".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\n{}", "No words can be spelled from these letters".yellow());
        return;
    }

    println!();
    for row in columns(&result.words, 6) {
        println!("  {row}");
    }

    println!(
        "\n{} in {:.2}ms",
        format!("✅ {} words", result.words.len()).green().bold(),
        result.duration.as_secs_f64() * 1000.0
    );
}

/// Print statistics of the loaded index
pub fn print_stats(stats: &IndexStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD INDEX".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📚 {}", "Dictionary:".bright_cyan().bold());
    println!(
        "   Words:           {}",
        format!("{}", stats.total_words).bright_yellow().bold()
    );
    println!("   Average length:  {:.2}", stats.average_length());
    if let Some(longest) = &stats.longest_word {
        println!("   Longest word:    {longest}");
    }
    println!("   Distinct letters: {}", stats.letter_frequencies.len());

    println!("\n📏 {}", "Lengths:".bright_cyan().bold());
    for (&len, &count) in &stats.length_distribution {
        let pct = (count as f64 / stats.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {len:>3}: {} {count:6} ({pct:5.1}%)", bar.green());
    }

    println!("\n🔤 {}", "Most common letters:".bright_cyan().bold());
    let max = stats.letter_frequencies.first().map_or(0, |&(_, n)| n);
    for &(letter, count) in stats.letter_frequencies.iter().take(10) {
        let bar = create_progress_bar(count as f64, max as f64, 30);
        println!("   {:>3}: {} {count}", display_letter(letter), bar.green());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Index size:       {} words", result.index_size);
    println!("   Queries:          {}", result.queries);
    println!("   Letters per bag:  {}", result.bag_size);
    println!(
        "   Queries/second:   {}",
        format!("{:.1}", result.queries_per_second)
            .bright_yellow()
            .bold()
    );
    println!("   Matching time:    {:.3}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Matches:".bright_cyan().bold());
    println!("   Total:            {}", result.total_matches);
    println!("   Average per bag:  {:.2}", result.average_matches);
    println!(
        "   Best bag:         {} ({} words)",
        result
            .best_bag
            .as_deref()
            .map_or_else(|| "-".to_string(), letter_tiles)
            .green(),
        result.max_matches
    );
}
