//! Compact set of uppercase ASCII letters
//!
//! Each letter `A..=Z` owns one bit of a `u32`, so membership, union and
//! subset checks are single instructions. Used for per-position exclusions,
//! must-contain letters, and the distinct letters of a word.

use std::fmt;

/// A set of uppercase ASCII letters stored as a 26-bit mask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    #[inline]
    const fn bit(letter: u8) -> u32 {
        1 << (letter - b'A')
    }

    /// Insert a letter, returning `true` if it was not already present
    ///
    /// Letters outside `A..=Z` are ignored.
    #[inline]
    pub fn insert(&mut self, letter: u8) -> bool {
        if !letter.is_ascii_uppercase() {
            return false;
        }
        let before = self.0;
        self.0 |= Self::bit(letter);
        before != self.0
    }

    /// Check whether a letter is in the set
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        letter.is_ascii_uppercase() && self.0 & Self::bit(letter) != 0
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every letter of `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Iterate the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'A'..=b'Z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_contains() {
        let mut set = LetterSet::EMPTY;
        assert!(set.insert(b'D'));
        assert!(!set.insert(b'D'));
        assert!(set.insert(b'A'));

        assert!(set.contains(b'A'));
        assert!(set.contains(b'D'));
        assert!(!set.contains(b'Z'));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn ignores_non_letters() {
        let mut set = LetterSet::EMPTY;
        assert!(!set.insert(b'a'));
        assert!(!set.insert(b'='));
        assert!(set.is_empty());
        assert!(!set.contains(b'a'));
    }

    #[test]
    fn subset() {
        let small: LetterSet = b"OD".iter().copied().collect();
        let large: LetterSet = b"TODAY".iter().copied().collect();

        assert!(small.is_subset(large));
        assert!(!large.is_subset(small));
        assert!(LetterSet::EMPTY.is_subset(small));
    }

    #[test]
    fn display_is_alphabetical() {
        let set: LetterSet = b"NUF".iter().copied().collect();
        assert_eq!(set.to_string(), "FNU");
        assert_eq!(set.iter().collect::<Vec<_>>(), b"FNU".to_vec());
    }
}
