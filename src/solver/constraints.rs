//! Constraint aggregation
//!
//! Folds a guess history into the position-level and letter-level facts the
//! candidate filter checks. The result is a view: it is rebuilt from the
//! history on every query and never updated in place.

use crate::core::{LetterResult, LetterSet, WordGuess};

/// Two different letters were marked correct at the same position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintConflict {
    pub position: usize,
    /// Letter recorded first, which is the one kept
    pub kept: u8,
    /// Later letter that was ignored
    pub rejected: u8,
    /// Index of the guess that carried the rejected letter
    pub guess_index: usize,
}

/// Constraints derived from a sequence of guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    correct: Vec<Option<u8>>,
    absent: Vec<LetterSet>,
    present: LetterSet,
    conflicts: Vec<ConstraintConflict>,
}

impl MatchState {
    /// Word length the constraints were built for
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.correct.len()
    }

    /// Letter fixed at `position`, if any guess marked it correct
    #[must_use]
    pub fn correct_at(&self, position: usize) -> Option<u8> {
        self.correct.get(position).copied().flatten()
    }

    /// Letters excluded at `position`
    #[must_use]
    pub fn absent_at(&self, position: usize) -> LetterSet {
        self.absent.get(position).copied().unwrap_or_default()
    }

    /// Letters known to occur somewhere in the answer
    #[must_use]
    pub const fn present_letters(&self) -> LetterSet {
        self.present
    }

    /// Contradictory correct markings seen while building
    #[must_use]
    pub fn conflicts(&self) -> &[ConstraintConflict] {
        &self.conflicts
    }
}

/// Build the constraints implied by `guesses` for words of `word_length`
///
/// Guesses are processed in order and each guess left to right:
/// - **Correct**: fixes the letter at that position (the first letter
///   recorded for a position wins; a different later one is a conflict) and
///   marks the letter present.
/// - **Present**: marks the letter present and excludes it at this position.
/// - **Absent**: excludes the letter everywhere, unless it is already known
///   to be present, in which case only this position is excluded.
///
/// Presence is checked at the moment the absent tile is processed, so a
/// letter learned later in the history does not widen an earlier exclusion.
///
/// # Examples
/// ```
/// use wordless::core::parse_guess;
/// use wordless::solver::build_match_state;
///
/// let guesses = [parse_guess("f=oun+d").unwrap()];
/// let state = build_match_state(&guesses, 5);
///
/// assert_eq!(state.correct_at(1), Some(b'O'));
/// assert_eq!(state.absent_at(0).to_string(), "FNU");
/// assert_eq!(state.absent_at(4).to_string(), "DFNU");
/// assert!(state.present_letters().contains(b'D'));
/// ```
#[must_use]
pub fn build_match_state(guesses: &[WordGuess], word_length: usize) -> MatchState {
    let mut state = MatchState {
        correct: vec![None; word_length],
        absent: vec![LetterSet::EMPTY; word_length],
        present: LetterSet::EMPTY,
        conflicts: Vec::new(),
    };

    for (guess_index, guess) in guesses.iter().enumerate() {
        for (position, tile) in guess.iter().take(word_length).enumerate() {
            let letter = tile.letter();

            match tile.result() {
                LetterResult::Correct => {
                    match state.correct[position] {
                        Some(kept) if kept != letter => {
                            log::warn!(
                                "conflicting feedback: position {} is already {} but guess {} marks {} correct",
                                position + 1,
                                kept as char,
                                guess_index + 1,
                                letter as char
                            );
                            state.conflicts.push(ConstraintConflict {
                                position,
                                kept,
                                rejected: letter,
                                guess_index,
                            });
                        }
                        Some(_) => {}
                        None => state.correct[position] = Some(letter),
                    }
                    state.present.insert(letter);
                }
                LetterResult::Present => {
                    state.present.insert(letter);
                    state.absent[position].insert(letter);
                }
                LetterResult::Absent => {
                    if state.present.contains(letter) {
                        state.absent[position].insert(letter);
                    } else {
                        for excluded in &mut state.absent {
                            excluded.insert(letter);
                        }
                    }
                }
                LetterResult::Unknown => {}
            }
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_guess;

    fn guesses(texts: &[&str]) -> Vec<WordGuess> {
        texts.iter().map(|t| parse_guess(t).unwrap()).collect()
    }

    #[test]
    fn empty_history_has_no_constraints() {
        let state = build_match_state(&[], 5);
        assert_eq!(state.word_length(), 5);
        for i in 0..5 {
            assert_eq!(state.correct_at(i), None);
            assert!(state.absent_at(i).is_empty());
        }
        assert!(state.present_letters().is_empty());
    }

    #[test]
    fn absent_letters_excluded_everywhere() {
        let state = build_match_state(&guesses(&["f=oun+d"]), 5);

        for i in 0..5 {
            assert!(state.absent_at(i).contains(b'F'));
            assert!(state.absent_at(i).contains(b'U'));
            assert!(state.absent_at(i).contains(b'N'));
        }
    }

    #[test]
    fn present_letter_excluded_at_its_position_only() {
        let state = build_match_state(&guesses(&["f=oun+d"]), 5);

        assert!(state.present_letters().contains(b'D'));
        assert!(state.absent_at(4).contains(b'D'));
        assert!(!state.absent_at(0).contains(b'D'));
    }

    #[test]
    fn correct_letters_count_as_present() {
        let state = build_match_state(&guesses(&["m=o=d=al"]), 5);

        assert_eq!(state.correct_at(1), Some(b'O'));
        assert_eq!(state.correct_at(2), Some(b'D'));
        assert_eq!(state.correct_at(3), Some(b'A'));
        assert_eq!(state.present_letters().to_string(), "ADO");
    }

    #[test]
    fn absent_after_present_only_excludes_position() {
        // Second E is gray, but E is already known present from the first tile
        let state = build_match_state(&guesses(&["sp+eed"]), 5);

        assert!(state.absent_at(2).contains(b'E'));
        assert!(state.absent_at(3).contains(b'E'));
        assert!(!state.absent_at(0).contains(b'E'));
        assert!(!state.absent_at(4).contains(b'E'));
    }

    #[test]
    fn absent_before_present_excludes_everywhere() {
        // Tiles are processed left to right: the gray E comes first
        let state = build_match_state(&guesses(&["spe+ed"]), 5);

        for i in 0..5 {
            assert!(state.absent_at(i).contains(b'E'));
        }
        assert!(state.present_letters().contains(b'E'));
    }

    #[test]
    fn later_presence_does_not_narrow_earlier_absence() {
        let state = build_match_state(&guesses(&["crane", "+eerie"]), 5);
        assert!(state.absent_at(1).contains(b'E'));
        assert!(state.present_letters().contains(b'E'));
    }

    #[test]
    fn conflicting_correct_keeps_first() {
        let state = build_match_state(&guesses(&["=crane", "=slate"]), 5);

        assert_eq!(state.correct_at(0), Some(b'C'));
        assert_eq!(
            state.conflicts(),
            [ConstraintConflict {
                position: 0,
                kept: b'C',
                rejected: b'S',
                guess_index: 1,
            }]
        );
    }

    #[test]
    fn repeated_correct_is_not_a_conflict() {
        let state = build_match_state(&guesses(&["=crane", "=cloud"]), 5);
        assert!(state.conflicts().is_empty());
    }

    #[test]
    fn rebuilding_is_idempotent() {
        let history = guesses(&["f=oun+d", "m=o=d=al", "=crane", "=slate"]);
        assert_eq!(build_match_state(&history, 5), build_match_state(&history, 5));
    }

    #[test]
    fn extra_positions_are_ignored() {
        let state = build_match_state(&guesses(&["abcdef=g"]), 5);
        assert_eq!(state.word_length(), 5);
        assert!(!state.present_letters().contains(b'G'));
        assert!(!state.absent_at(0).contains(b'F'));
    }
}
