//! Main Wordle assistant interface

use std::sync::atomic::AtomicBool;

use super::entropy::{
    Cancelled, GuessMetrics, calculate_metrics, select_best_guess, select_best_guess_cancellable,
};
use super::filter::find_candidates;
use crate::core::{Word, WordGuess};
use crate::wordlists::{WordLists, WordSource};

/// A recommended guess with the numbers behind it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recommendation<'a> {
    pub word: &'a Word,
    pub metrics: GuessMetrics,
    /// Number of candidate answers the guess was scored against
    pub candidates: usize,
}

/// Main Wordle solver
///
/// Answers questions about a guess history against one pair of word lists.
/// Every query rebuilds its constraints from the history it is given, so a
/// solver can be shared freely between threads.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    lists: &'a WordLists,
}

impl<'a> Solver<'a> {
    #[must_use]
    pub const fn new(lists: &'a WordLists) -> Self {
        Self { lists }
    }

    #[must_use]
    pub const fn lists(&self) -> &'a WordLists {
        self.lists
    }

    /// Words of `source` consistent with the history, in list order
    #[must_use]
    pub fn candidates(
        &self,
        guesses: &[WordGuess],
        word_length: usize,
        source: WordSource,
    ) -> Vec<&'a Word> {
        find_candidates(guesses, word_length, self.lists.source(source))
    }

    /// The guess expected to narrow the answer candidates the most
    ///
    /// Returns `None` before any feedback exists or when no answer fits it.
    #[must_use]
    pub fn find_best_guess(&self, guesses: &[WordGuess], word_length: usize) -> Option<&'a Word> {
        self.recommend(guesses, word_length).map(|r| r.word)
    }

    /// [`Solver::find_best_guess`] with metrics attached
    #[must_use]
    pub fn recommend(
        &self,
        guesses: &[WordGuess],
        word_length: usize,
    ) -> Option<Recommendation<'a>> {
        self.recommend_with(guesses, word_length, None)
            .unwrap_or_default()
    }

    /// [`Solver::recommend`], abandoned when `cancel` is raised
    ///
    /// # Errors
    /// Returns [`Cancelled`] if the flag was raised before scoring finished.
    pub fn recommend_cancellable(
        &self,
        guesses: &[WordGuess],
        word_length: usize,
        cancel: &AtomicBool,
    ) -> Result<Option<Recommendation<'a>>, Cancelled> {
        self.recommend_with(guesses, word_length, Some(cancel))
    }

    /// Best guess against the whole answer set, for a game with no history
    #[must_use]
    pub fn opening_guess(&self, word_length: usize) -> Option<Recommendation<'a>> {
        let candidates: Vec<&'a Word> = self.lists.answers().words(word_length).iter().collect();
        let pool: Vec<&'a Word> = self.lists.dictionary().words(word_length).iter().collect();
        choose(&candidates, &pool, None).unwrap_or_default()
    }

    /// Whether `word` is in the dictionary
    #[must_use]
    pub fn is_word(&self, word: &str) -> bool {
        self.lists.is_word(word)
    }

    fn recommend_with(
        &self,
        guesses: &[WordGuess],
        word_length: usize,
        cancel: Option<&AtomicBool>,
    ) -> Result<Option<Recommendation<'a>>, Cancelled> {
        if guesses.is_empty() {
            return Ok(None);
        }

        let candidates = self.candidates(guesses, word_length, WordSource::Answers);
        let pool = self.candidates(guesses, word_length, WordSource::Dictionary);
        choose(&candidates, &pool, cancel)
    }
}

/// Pick from `pool` the guess that best splits `candidates`
fn choose<'a>(
    candidates: &[&'a Word],
    pool: &[&'a Word],
    cancel: Option<&AtomicBool>,
) -> Result<Option<Recommendation<'a>>, Cancelled> {
    let best = match candidates {
        [] => return Ok(None),
        [only] => Some(*only),
        _ => {
            // Custom lists may leave no dictionary word standing
            let pool = if pool.is_empty() { candidates } else { pool };
            log::debug!(
                "scoring {} guesses against {} candidates",
                pool.len(),
                candidates.len()
            );
            let best = match cancel {
                Some(flag) => select_best_guess_cancellable(pool, candidates, flag)?,
                None => select_best_guess(pool, candidates),
            };
            best.map(|(word, _)| word)
        }
    };

    Ok(best.map(|word| Recommendation {
        word,
        metrics: calculate_metrics(word, candidates),
        candidates: candidates.len(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_guess;
    use crate::wordlists::WordList;

    fn guesses(texts: &[&str]) -> Vec<WordGuess> {
        texts.iter().map(|t| parse_guess(t).unwrap()).collect()
    }

    fn small_lists(dictionary: &[&str], answers: &[&str]) -> WordLists {
        WordLists::new(WordList::from_strs(dictionary), WordList::from_strs(answers))
    }

    #[test]
    fn recommends_dictionary_word_after_banda() {
        let lists = WordLists::embedded();
        let solver = Solver::new(&lists);

        let best = solver.find_best_guess(&guesses(&["b=anda"]), 5).unwrap();

        assert_eq!(best.len(), 5);
        assert!(lists.is_word(best.text()));
        assert_ne!(best.text(), "BANDA");
    }

    #[test]
    fn no_guesses_means_no_recommendation() {
        let lists = WordLists::embedded();
        let solver = Solver::new(&lists);
        assert!(solver.find_best_guess(&[], 5).is_none());
        assert!(solver.recommend(&[], 5).is_none());
    }

    #[test]
    fn no_candidates_means_no_recommendation() {
        let lists = small_lists(&["codas", "sodas", "today"], &["codas", "sodas", "today"]);
        let solver = Solver::new(&lists);
        assert!(solver.find_best_guess(&guesses(&["=z=z=z=z=z"]), 5).is_none());
    }

    #[test]
    fn single_candidate_is_returned_directly() {
        let lists = small_lists(
            &["codas", "sodas", "today", "crane"],
            &["codas", "sodas", "today"],
        );
        let solver = Solver::new(&lists);

        let rec = solver.recommend(&guesses(&["c=o=d=a=s"]), 5).unwrap();

        assert_eq!(rec.word.text(), "SODAS");
        assert_eq!(rec.candidates, 1);
        assert_eq!(rec.metrics.max_partition, 1);
    }

    #[test]
    fn tie_goes_to_first_dictionary_word() {
        // CODAS and SODAS both split the three candidates into singletons
        let lists = small_lists(
            &["sodas", "today", "codas", "found", "modal"],
            &["codas", "sodas", "today"],
        );
        let solver = Solver::new(&lists);

        let rec = solver
            .recommend(&guesses(&["f=oun+d", "m=o=d=al"]), 5)
            .unwrap();

        assert_eq!(rec.word.text(), "SODAS");
        assert_eq!(rec.candidates, 3);
        assert_eq!(rec.metrics.max_partition, 1);
        assert!((rec.metrics.entropy - 3f64.log2()).abs() < 0.001);
    }

    #[test]
    fn empty_pool_falls_back_to_candidates() {
        let lists = small_lists(&["crane"], &["codas", "sodas", "today"]);
        let solver = Solver::new(&lists);

        let best = solver
            .find_best_guess(&guesses(&["f=oun+d", "m=o=d=al"]), 5)
            .unwrap();
        assert_eq!(best.text(), "CODAS");
    }

    #[test]
    fn cancelled_recommendation_reports_it() {
        let lists = small_lists(
            &["sodas", "today", "codas"],
            &["codas", "sodas", "today"],
        );
        let solver = Solver::new(&lists);
        let history = guesses(&["f=oun+d", "m=o=d=al"]);

        let raised = AtomicBool::new(true);
        assert_eq!(
            solver.recommend_cancellable(&history, 5, &raised),
            Err(Cancelled)
        );

        let lowered = AtomicBool::new(false);
        let rec = solver
            .recommend_cancellable(&history, 5, &lowered)
            .unwrap()
            .unwrap();
        assert_eq!(rec.word.text(), "SODAS");
    }

    #[test]
    fn candidates_follow_source() {
        let lists = small_lists(
            &["codas", "sodas", "today", "toady"],
            &["today"],
        );
        let solver = Solver::new(&lists);
        let history = guesses(&["f=oun+d"]);

        assert_eq!(solver.candidates(&history, 5, WordSource::Answers).len(), 1);
        assert_eq!(
            solver.candidates(&history, 5, WordSource::Dictionary).len(),
            4
        );
    }

    #[test]
    fn opening_guess_scores_full_answer_set() {
        let lists = small_lists(&["aaaaa", "stale", "slate"], &["slate", "stale"]);
        let solver = Solver::new(&lists);

        let rec = solver.opening_guess(5).unwrap();
        assert_eq!(rec.word.text(), "STALE");
        assert_eq!(rec.candidates, 2);

        assert!(solver.opening_guess(7).is_none());
    }
}
