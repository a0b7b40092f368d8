//! Word lists
//!
//! Provides the embedded dictionary and answer set compiled into the binary,
//! file loading for replacements, and the length-partitioned [`WordList`].

mod embedded;
mod list;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT, DICTIONARY, DICTIONARY_COUNT};
pub use list::{WordList, WordLists, WordSource};
pub use loader::WordListError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn words_are_uppercase_letters() {
        for &word in ANSWERS.iter().chain(DICTIONARY) {
            assert!(word.len() >= 3, "Word '{word}' is shorter than 3 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn answers_subset_of_dictionary() {
        let dictionary: std::collections::HashSet<_> = DICTIONARY.iter().collect();

        for answer in ANSWERS {
            assert!(
                dictionary.contains(answer),
                "Answer '{answer}' not in dictionary"
            );
        }
    }

    #[test]
    fn dictionary_contains_anagram_family() {
        for word in ["TODAY", "TOADY", "CODAS", "SODAS", "FOUND"] {
            assert!(DICTIONARY.contains(&word), "missing {word}");
        }
    }
}
