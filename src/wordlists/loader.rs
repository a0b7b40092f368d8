//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error raised while loading a word list file
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list {} contains no usable words", path.display())]
    Empty { path: PathBuf },
}

/// Load words from a file
///
/// Words are separated by whitespace, normally one per line. Tokens that are
/// not valid words are skipped.
///
/// # Errors
///
/// Returns [`WordListError::Io`] if the file cannot be read, or
/// [`WordListError::Empty`] if it holds no valid word.
///
/// # Examples
/// ```no_run
/// use wordless::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words: Vec<Word> = content
        .split_whitespace()
        .filter_map(|token| Word::new(token).ok())
        .collect();

    if words.is_empty() {
        return Err(WordListError::Empty {
            path: path.to_path_buf(),
        });
    }

    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordless::wordlists::loader::words_from_slice;
/// use wordless::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
