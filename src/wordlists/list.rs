//! Length-partitioned word lists

use std::path::Path;

use rustc_hash::{FxHashMap, FxHashSet};

use super::embedded::{ANSWERS, DICTIONARY};
use super::loader::{WordListError, load_from_file, words_from_slice};
use crate::core::Word;

/// Which of the two word lists to draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum WordSource {
    /// Curated answer set
    Answers,
    /// Broad dictionary of accepted guesses
    Dictionary,
}

/// An immutable word collection, partitioned by word length
///
/// Words keep the order they were supplied in; duplicates are dropped.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    by_length: FxHashMap<usize, Vec<Word>>,
    index: FxHashSet<String>,
}

impl WordList {
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut list = Self::default();
        for word in words {
            if list.index.insert(word.text().to_string()) {
                list.by_length.entry(word.len()).or_default().push(word);
            }
        }
        list
    }

    /// Build a list from string slices, skipping invalid entries
    #[must_use]
    pub fn from_strs(words: &[&str]) -> Self {
        Self::new(words_from_slice(words))
    }

    /// All words of the given length, in list order
    #[must_use]
    pub fn words(&self, word_length: usize) -> &[Word] {
        self.by_length
            .get(&word_length)
            .map_or(&[], Vec::as_slice)
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&word.to_ascii_uppercase())
    }

    /// Total number of words across all lengths
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Word lengths present in the list, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.by_length.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }
}

/// The dictionary and answer set used for one session
///
/// Loaded once and read-only afterwards, so it can be shared by reference
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct WordLists {
    dictionary: WordList,
    answers: WordList,
}

impl WordLists {
    #[must_use]
    pub const fn new(dictionary: WordList, answers: WordList) -> Self {
        Self {
            dictionary,
            answers,
        }
    }

    /// The lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(WordList::from_strs(DICTIONARY), WordList::from_strs(ANSWERS))
    }

    /// Embedded lists, with either one replaced by the contents of a file
    ///
    /// # Errors
    /// Returns an error if a given file cannot be read or holds no words.
    pub fn load(
        dictionary: Option<&Path>,
        answers: Option<&Path>,
    ) -> Result<Self, WordListError> {
        let dictionary = match dictionary {
            Some(path) => WordList::new(load_from_file(path)?),
            None => WordList::from_strs(DICTIONARY),
        };
        let answers = match answers {
            Some(path) => WordList::new(load_from_file(path)?),
            None => WordList::from_strs(ANSWERS),
        };
        log::debug!(
            "word lists ready: {} dictionary words, {} answers",
            dictionary.len(),
            answers.len()
        );
        Ok(Self::new(dictionary, answers))
    }

    #[must_use]
    pub const fn dictionary(&self) -> &WordList {
        &self.dictionary
    }

    #[must_use]
    pub const fn answers(&self) -> &WordList {
        &self.answers
    }

    #[must_use]
    pub const fn source(&self, source: WordSource) -> &WordList {
        match source {
            WordSource::Answers => &self.answers,
            WordSource::Dictionary => &self.dictionary,
        }
    }

    /// Whether a submitted row spells a dictionary word
    #[must_use]
    pub fn is_word(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }
}
