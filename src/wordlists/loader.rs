//! Word source loading
//!
//! Reads line-oriented word sources: one word per line, blank lines skipped.

use crate::error::IndexError;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Load the words of a file
///
/// # Errors
///
/// Returns `IndexError::SourceUnavailable` if the file cannot be opened or read,
/// including when it is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use scrabble_helper::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, IndexError> {
    let path = path.as_ref();
    let unavailable = |source| IndexError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unavailable)?;
    read_words(BufReader::new(file)).map_err(unavailable)
}

/// Read words from any buffered reader
///
/// Each non-empty line is one word, kept exactly as written. Only the line
/// terminator (`\n` or `\r\n`) is removed; empty lines are skipped.
///
/// # Errors
///
/// Returns the first I/O error raised by the reader.
pub fn read_words<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.is_empty() {
            words.push(line);
        }
    }
    Ok(words)
}

/// Convert embedded string slice to owned words, skipping empty entries
///
/// # Examples
/// ```
/// use scrabble_helper::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["cat", "", "dog"]);
/// assert_eq!(words, vec!["cat", "dog"]);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .filter(|s| !s.is_empty())
        .map(|&s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn read_words_skips_blank_lines() {
        let words = read_words(Cursor::new("cat\n\ndog\n")).unwrap();
        assert_eq!(words, vec!["cat", "dog"]);
    }

    #[test]
    fn read_words_keeps_whitespace_in_lines() {
        let words = read_words(Cursor::new(" cat\n  \ndog \n\n")).unwrap();
        assert_eq!(words, vec![" cat", "  ", "dog "]);
    }

    #[test]
    fn read_words_handles_crlf() {
        let words = read_words(Cursor::new("cat\r\ndog\r\n")).unwrap();
        assert_eq!(words, vec!["cat", "dog"]);
    }

    #[test]
    fn read_words_keeps_duplicates_and_case() {
        let words = read_words(Cursor::new("Cat\ncat\ncat\n")).unwrap();
        assert_eq!(words, vec!["Cat", "cat", "cat"]);
    }

    #[test]
    fn read_words_empty_source() {
        let words = read_words(Cursor::new("")).unwrap();
        assert!(words.is_empty());
    }

    #[test]
    fn read_words_rejects_invalid_utf8() {
        let bytes: &[u8] = b"cat\n\xff\xfe\n";
        assert!(read_words(Cursor::new(bytes)).is_err());
    }

    #[test]
    fn load_from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cat").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "dog").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words, vec!["cat", "dog"]);
    }

    #[test]
    fn load_from_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = load_from_file(&path).unwrap_err();
        let IndexError::SourceUnavailable { path: reported, source } = err;
        assert_eq!(reported, path);
        assert_eq!(source.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn words_from_slice_skips_empty_entries() {
        let words = words_from_slice(&["a", " ", "", "at"]);
        assert_eq!(words, vec!["a", " ", "at"]);
    }
}
