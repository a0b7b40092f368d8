//! Annotated guess parsing
//!
//! A guess is written as the word itself with a modifier in front of each
//! coloured letter:
//! - `=` marks the next letter correct (green)
//! - `+` marks the next letter present (yellow)
//! - letters without a modifier are absent (gray)
//!
//! Whitespace is ignored and letters are case-insensitive, so `f=oun+d`,
//! `F =O U N +D` and `F=OUN+D` are the same guess.

use thiserror::Error;

use super::feedback::{LetterGuess, LetterResult, WordGuess};
use super::word::MAX_WORD_LENGTH;

/// Why an annotated guess was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatIssue {
    #[error("unexpected character {found:?} at offset {offset}")]
    UnexpectedCharacter { found: char, offset: usize },
    #[error("dangling modifier {0:?} with no letter after it")]
    DanglingModifier(char),
    #[error("{0} letters, at most {max} allowed", max = MAX_WORD_LENGTH)]
    TooLong(usize),
}

/// Error returned when reading annotated guesses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("invalid guess {input:?}: {issue}")]
    InvalidGuessFormat { input: String, issue: FormatIssue },

    #[error("guess {input:?} has {found} letters, expected {expected}")]
    WrongLength {
        input: String,
        expected: usize,
        found: usize,
    },
}

impl GuessError {
    fn format(input: &str, issue: FormatIssue) -> Self {
        Self::InvalidGuessFormat {
            input: input.to_string(),
            issue,
        }
    }
}

/// Parse an annotated guess into per-letter feedback
///
/// # Errors
/// Returns [`GuessError::InvalidGuessFormat`] if the text contains anything
/// other than letters, whitespace, `=` and `+`, ends with a modifier, or has
/// more than [`MAX_WORD_LENGTH`] letters.
///
/// # Examples
/// ```
/// use wordless::core::{LetterResult, parse_guess};
///
/// let guess = parse_guess("+gu+ess").unwrap();
/// assert_eq!(guess.word(), "GUESS");
/// assert_eq!(guess[0].result(), LetterResult::Present);
/// assert_eq!(guess[1].result(), LetterResult::Absent);
///
/// assert!(parse_guess("guess+").is_err());
/// ```
pub fn parse_guess(text: &str) -> Result<WordGuess, GuessError> {
    let mut letters = Vec::with_capacity(text.len());
    let mut pending: Option<char> = None;

    for (offset, ch) in text.char_indices() {
        match ch {
            c if c.is_whitespace() => {}
            '=' | '+' => pending = Some(ch),
            c if c.is_ascii_alphabetic() => {
                let result = match pending.take() {
                    Some('=') => LetterResult::Correct,
                    Some(_) => LetterResult::Present,
                    None => LetterResult::Absent,
                };
                if let Some(tile) = LetterGuess::new(c, result) {
                    letters.push(tile);
                }
            }
            found => {
                return Err(GuessError::format(
                    text,
                    FormatIssue::UnexpectedCharacter { found, offset },
                ));
            }
        }
    }

    if let Some(modifier) = pending {
        return Err(GuessError::format(
            text,
            FormatIssue::DanglingModifier(modifier),
        ));
    }

    if letters.len() > MAX_WORD_LENGTH {
        return Err(GuessError::format(text, FormatIssue::TooLong(letters.len())));
    }

    Ok(WordGuess::new(letters))
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterResult::{Absent, Correct, Present};

    fn results(guess: &WordGuess) -> Vec<LetterResult> {
        guess.iter().map(|tile| tile.result()).collect()
    }

    #[test]
    fn parses_simple_word() {
        let guess = parse_guess("guess").unwrap();
        assert_eq!(guess.word(), "GUESS");
        assert_eq!(results(&guess), [Absent; 5]);
    }

    #[test]
    fn parses_present_letters() {
        let guess = parse_guess("+gu+ess").unwrap();
        assert_eq!(guess.word(), "GUESS");
        assert_eq!(results(&guess), [Present, Absent, Present, Absent, Absent]);
    }

    #[test]
    fn parses_correct_letters() {
        let guess = parse_guess("=gu=ess").unwrap();
        assert_eq!(results(&guess), [Correct, Absent, Correct, Absent, Absent]);
    }

    #[test]
    fn allows_spaces_and_mixed_case() {
        let spaced = parse_guess("=g u =e s s").unwrap();
        let mixed = parse_guess("=G u =E s s").unwrap();
        let compact = parse_guess("=gu=ess").unwrap();

        assert_eq!(spaced, compact);
        assert_eq!(mixed, compact);
    }

    #[test]
    fn modifier_applies_to_next_letter_only() {
        let guess = parse_guess("=ab").unwrap();
        assert_eq!(results(&guess), [Correct, Absent]);
    }

    #[test]
    fn later_modifier_replaces_pending_one() {
        let guess = parse_guess("+=a").unwrap();
        assert_eq!(results(&guess), [Correct]);
    }

    #[test]
    fn fails_dangling_modifier() {
        let err = parse_guess("=G u =E s s +").unwrap_err();
        assert_eq!(
            err,
            GuessError::InvalidGuessFormat {
                input: "=G u =E s s +".to_string(),
                issue: FormatIssue::DanglingModifier('+'),
            }
        );
    }

    #[test]
    fn fails_bogus_characters() {
        let err = parse_guess("=G u =E s * s +").unwrap_err();
        assert!(matches!(
            err,
            GuessError::InvalidGuessFormat {
                issue: FormatIssue::UnexpectedCharacter { found: '*', offset: 10 },
                ..
            }
        ));
        assert!(parse_guess("cran3").is_err());
        assert!(parse_guess("-abc").is_err());
    }

    #[test]
    fn fails_overlong_guess() {
        let longest = "=a".repeat(MAX_WORD_LENGTH);
        assert_eq!(parse_guess(&longest).unwrap().len(), MAX_WORD_LENGTH);

        let overlong = "=a".repeat(MAX_WORD_LENGTH + 1);
        assert_eq!(
            parse_guess(&overlong).unwrap_err(),
            GuessError::InvalidGuessFormat {
                input: overlong.clone(),
                issue: FormatIssue::TooLong(MAX_WORD_LENGTH + 1),
            }
        );
    }

    #[test]
    fn empty_input_is_empty_guess() {
        assert!(parse_guess("").unwrap().is_empty());
        assert!(parse_guess("   ").unwrap().is_empty());
    }

    #[test]
    fn canonical_text_round_trips() {
        for text in ["f=oun+d", "m=o=d=al", "+gu+ess", "B=ANDA", " = c r a n = e "] {
            let guess = parse_guess(text).unwrap();
            assert_eq!(parse_guess(&guess.to_string()).unwrap(), guess, "{text}");
        }
    }
}
