//! Feedback simulation and compact pattern keys
//!
//! [`simulate_guess`] scores a guess against an answer the way the game does.
//! A [`Pattern`] encodes the same feedback as a base-3 number so outcomes can
//! be grouped and hashed cheaply:
//! - 0 = Gray (letter not in word)
//! - 1 = Yellow (letter in word, wrong position)
//! - 2 = Green (letter in correct position)
//!
//! Each position contributes digit × 3^position to the total.

use super::feedback::{LetterGuess, LetterResult, WordGuess};
use super::word::{MAX_WORD_LENGTH, Word};

/// Feedback pattern for a guess, as a base-3 number plus the word length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    value: u64,
    len: u8,
}

/// Score `guess` against `answer` into `result`, one entry per guess letter
///
/// 1. First pass: mark exact matches (greens) and remove them from the pool
/// 2. Second pass: mark present-but-misplaced (yellows) from what is left
fn score(guess: &Word, answer: &Word, result: &mut [LetterResult]) {
    let mut available = answer.char_counts();

    for (i, (&g, slot)) in guess.chars().iter().zip(result.iter_mut()).enumerate() {
        if answer.chars().get(i) == Some(&g) {
            *slot = LetterResult::Correct;
            available[usize::from(g - b'A')] -= 1;
        } else {
            *slot = LetterResult::Absent;
        }
    }

    for (&g, slot) in guess.chars().iter().zip(result.iter_mut()) {
        if *slot == LetterResult::Absent {
            let count = &mut available[usize::from(g - b'A')];
            if *count > 0 {
                *slot = LetterResult::Present;
                *count -= 1;
            }
        }
    }
}

/// Compute the feedback row `guess` would receive if `answer` were the solution
///
/// Duplicate letters are handled like the game: a letter guessed twice but
/// occurring once (unconsumed) in the answer yields one yellow and one gray.
///
/// # Examples
/// ```
/// use wordless::core::{Word, simulate_guess};
///
/// let guess = Word::new("speed").unwrap();
/// let answer = Word::new("erase").unwrap();
///
/// assert_eq!(simulate_guess(&guess, &answer).to_string(), "+SP+E+ED");
/// ```
#[must_use]
pub fn simulate_guess(guess: &Word, answer: &Word) -> WordGuess {
    let mut result = vec![LetterResult::Absent; guess.len()];
    score(guess, answer, &mut result);

    guess
        .chars()
        .iter()
        .zip(result)
        .filter_map(|(&letter, result)| LetterGuess::new(letter as char, result))
        .collect()
}

impl Pattern {
    /// Create a pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if `value >= 3^len`
    #[inline]
    #[must_use]
    pub const fn new(value: u64, len: usize) -> Self {
        debug_assert!(len <= MAX_WORD_LENGTH, "pattern too long");
        debug_assert!(value < 3u64.pow(len as u32), "pattern value out of range");
        Self {
            value,
            len: len as u8,
        }
    }

    /// Get the raw pattern value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.value
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// Same rules as [`simulate_guess`], without allocating a feedback row.
    ///
    /// # Examples
    /// ```
    /// use wordless::core::{Word, Pattern};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// // C(gray) R(gray) A(green) N(gray) E(green)
    /// // 0 + 0×3 + 2×9 + 0×27 + 2×81 = 180
    /// assert_eq!(pattern.value(), 180);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut result = [LetterResult::Absent; MAX_WORD_LENGTH];
        let result = &mut result[..guess.len()];
        score(guess, answer, result);
        Self::encode(result.iter().copied())
    }

    /// Encode an existing feedback row; `Unknown` tiles count as gray
    ///
    /// Returns `None` for rows longer than [`MAX_WORD_LENGTH`], which do not
    /// fit in a pattern.
    #[must_use]
    pub fn from_guess(guess: &WordGuess) -> Option<Self> {
        (guess.len() <= MAX_WORD_LENGTH)
            .then(|| Self::encode(guess.iter().map(|tile| tile.result())))
    }

    /// Callers guarantee at most [`MAX_WORD_LENGTH`] results
    fn encode(results: impl Iterator<Item = LetterResult>) -> Self {
        let mut value = 0u64;
        let mut multiplier = 1u64;
        let mut len = 0;
        for result in results {
            value += u64::from(result.digit()) * multiplier;
            multiplier = multiplier.saturating_mul(3);
            len += 1;
        }
        Self::new(value, len)
    }

    /// Iterate the per-position digits (0 gray, 1 yellow, 2 green)
    pub fn digits(self) -> impl Iterator<Item = u8> {
        let mut val = self.value;
        (0..self.len).map(move |_| {
            let digit = (val % 3) as u8;
            val /= 3;
            digit
        })
    }

    /// Convert pattern to emoji string, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.digits()
            .map(|digit| match digit {
                2 => '🟩',
                1 => '🟨',
                _ => '⬜',
            })
            .collect()
    }
}
