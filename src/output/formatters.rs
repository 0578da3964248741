//! Formatting utilities for terminal output

use crate::core::Letter;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Render letters as Scrabble-style tiles: `[C][A][T]`
#[must_use]
pub fn letter_tiles(letters: &str) -> String {
    letters
        .chars()
        .map(|c| format!("[{}]", c.to_uppercase()))
        .collect()
}

/// Lay words out in columns of equal width
#[must_use]
pub fn columns(words: &[String], per_row: usize) -> Vec<String> {
    let width = words.iter().map(|w| w.chars().count()).max().unwrap_or(0);
    words
        .chunks(per_row.max(1))
        .map(|row| {
            row.iter()
                .map(|w| format!("{w:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Format a letter for display, making whitespace visible
#[must_use]
pub fn display_letter(letter: Letter) -> String {
    if letter.is_whitespace() {
        format!("{letter:?}")
    } else {
        letter.to_string()
    }
}
