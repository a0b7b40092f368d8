//! Word representation
//!
//! A Word stores an uppercase word of any supported length along with the set
//! of letters it contains, so candidate filtering can test must-contain
//! letters without rescanning the text.

use std::fmt;

use thiserror::Error;

use super::letters::LetterSet;

/// Longest word a [`Pattern`](super::Pattern) can encode (3^40 fits in a `u64`)
pub const MAX_WORD_LENGTH: usize = 40;

/// Shortest word length the game supports
pub const MIN_WORD_LENGTH: usize = 3;

/// A word from a word list, normalized to uppercase ASCII
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: LetterSet,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be 1 to {max} letters, got {0}", max = MAX_WORD_LENGTH)]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is zero or above [`MAX_WORD_LENGTH`]
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordless::core::Word;
    ///
    /// let word = Word::new("today").unwrap();
    /// assert_eq!(word.text(), "TODAY");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("two words").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.is_empty() || text.len() > MAX_WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        let text = text.to_ascii_uppercase();
        let letters = text.bytes().collect();

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The distinct letters of the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    /// Get the count of each letter in the word, indexed by `letter - b'A'`
    ///
    /// Used for feedback scoring with duplicate letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> [u8; 26] {
        let mut counts = [0u8; 26];
        for &ch in self.chars() {
            counts[usize::from(ch - b'A')] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word.chars(), b"CRANE");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "CRANE");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_other_lengths() {
        assert_eq!(Word::new("cat").unwrap().len(), 3);
        assert_eq!(Word::new("bakery").unwrap().len(), 6);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
        assert!(matches!(
            Word::new("a".repeat(MAX_WORD_LENGTH + 1)),
            Err(WordError::InvalidLength(41))
        ));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("crâne"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("speed").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts[usize::from(b'S' - b'A')], 1);
        assert_eq!(counts[usize::from(b'E' - b'A')], 2);
        assert_eq!(counts[usize::from(b'Z' - b'A')], 0);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), 5);
    }

    #[test]
    fn word_display() {
        let word = Word::new("today").unwrap();
        assert_eq!(format!("{word}"), "TODAY");
    }
}
