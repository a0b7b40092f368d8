//! Candidate filtering
//!
//! Applies a [`MatchState`] to a word list with a direct per-letter check.

use super::constraints::{MatchState, build_match_state};
use crate::core::{Word, WordGuess};
use crate::wordlists::WordList;

impl MatchState {
    /// Check a word against the constraints
    ///
    /// Every position must hold its fixed letter, or (when none is fixed) a
    /// letter not excluded there, and every present letter must occur
    /// somewhere in the word. Only existence is checked: a letter marked
    /// present twice is satisfied by a single occurrence.
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        word.len() == self.word_length()
            && word
                .chars()
                .iter()
                .enumerate()
                .all(|(i, &letter)| match self.correct_at(i) {
                    Some(fixed) => fixed == letter,
                    None => !self.absent_at(i).contains(letter),
                })
            && self.present_letters().is_subset(word.letters())
    }
}

/// Find the words of `list` consistent with every guess
///
/// Words come back in list order. An empty history yields no candidates:
/// nothing is suggested before any feedback exists.
///
/// # Examples
/// ```
/// use wordless::core::parse_guess;
/// use wordless::solver::find_candidates;
/// use wordless::wordlists::WordList;
///
/// let list = WordList::from_strs(&["today", "toady", "codas", "found"]);
/// let guesses = [parse_guess("f=oun+d").unwrap(), parse_guess("m=o=d=al").unwrap()];
///
/// let found: Vec<&str> = find_candidates(&guesses, 5, &list)
///     .into_iter()
///     .map(|w| w.text())
///     .collect();
/// assert_eq!(found, ["TODAY", "CODAS"]);
/// ```
#[must_use]
pub fn find_candidates<'a>(
    guesses: &[WordGuess],
    word_length: usize,
    list: &'a WordList,
) -> Vec<&'a Word> {
    if guesses.is_empty() {
        return Vec::new();
    }

    let state = build_match_state(guesses, word_length);
    filter_words(&state, list.words(word_length))
}

/// Keep the words of `words` admitted by `state`, preserving order
#[must_use]
pub fn filter_words<'a>(state: &MatchState, words: &'a [Word]) -> Vec<&'a Word> {
    words.iter().filter(|word| state.admits(word)).collect()
}
