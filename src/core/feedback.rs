//! Per-letter feedback types
//!
//! A [`WordGuess`] is one submitted row: each tile pairs a letter with the
//! colour the game gave it.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use super::parse::{GuessError, parse_guess};

/// Feedback for a single tile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LetterResult {
    /// Not yet marked. Never part of a finalized guess.
    #[default]
    Unknown,
    /// Letter does not occur (beyond already-accounted occurrences)
    Absent,
    /// Letter occurs, but not at this position
    Present,
    /// Letter occurs at this position
    Correct,
}

impl LetterResult {
    /// The next state in the tile colour cycle
    ///
    /// `Unknown → Absent → Present → Correct → Unknown`
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Unknown => Self::Absent,
            Self::Absent => Self::Present,
            Self::Present => Self::Correct,
            Self::Correct => Self::Unknown,
        }
    }

    /// The annotation character that precedes a letter with this result
    #[must_use]
    pub const fn modifier(self) -> Option<char> {
        match self {
            Self::Correct => Some('='),
            Self::Present => Some('+'),
            Self::Absent | Self::Unknown => None,
        }
    }

    /// Base-3 digit used by [`Pattern`](super::Pattern) (gray=0, yellow=1, green=2)
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::Unknown | Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }
}

/// An immutable (letter, result) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterGuess {
    letter: u8,
    result: LetterResult,
}

impl LetterGuess {
    /// Create a tile from an ASCII letter, normalizing it to uppercase
    ///
    /// Returns `None` for anything that is not an ASCII letter.
    #[must_use]
    pub fn new(letter: char, result: LetterResult) -> Option<Self> {
        letter.is_ascii_alphabetic().then(|| Self {
            letter: letter.to_ascii_uppercase() as u8,
            result,
        })
    }

    /// Uppercase ASCII byte of the letter
    #[inline]
    #[must_use]
    pub const fn letter(self) -> u8 {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn result(self) -> LetterResult {
        self.result
    }

    /// A copy of this tile with a different result
    #[must_use]
    pub const fn with_result(self, result: LetterResult) -> Self {
        Self {
            letter: self.letter,
            result,
        }
    }
}

impl fmt::Display for LetterGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(modifier) = self.result.modifier() {
            write!(f, "{modifier}")?;
        }
        write!(f, "{}", self.letter as char)
    }
}

/// One row of feedback, in position order
///
/// `Display` writes the canonical annotated form (`F=OUN+D`) which
/// [`parse_guess`] reads back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WordGuess(Vec<LetterGuess>);

impl WordGuess {
    #[must_use]
    pub const fn new(letters: Vec<LetterGuess>) -> Self {
        Self(letters)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LetterGuess> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[LetterGuess] {
        &self.0
    }

    /// The guessed word itself, without annotations
    #[must_use]
    pub fn word(&self) -> String {
        self.0.iter().map(|tile| tile.letter as char).collect()
    }

    /// True when every tile has been given a result
    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.0
            .iter()
            .all(|tile| tile.result != LetterResult::Unknown)
    }

    /// True when every tile is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty()
            && self
                .0
                .iter()
                .all(|tile| tile.result == LetterResult::Correct)
    }
}

impl Index<usize> for WordGuess {
    type Output = LetterGuess;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a WordGuess {
    type Item = &'a LetterGuess;
    type IntoIter = std::slice::Iter<'a, LetterGuess>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<LetterGuess> for WordGuess {
    fn from_iter<I: IntoIterator<Item = LetterGuess>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for WordGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.0 {
            write!(f, "{tile}")?;
        }
        Ok(())
    }
}

impl FromStr for WordGuess {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_guess(s)
    }
}
