//! Pure entropy-based word selection
//!
//! Selects words that maximize Shannon entropy (expected information gain).

use std::cmp::Ordering;
use std::sync::atomic::{self, AtomicBool};

use super::calculator::calculate_entropy;
use crate::core::Word;
use rayon::prelude::*;

/// A recommendation was abandoned because its cancel flag was raised
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("recommendation cancelled")]
pub struct Cancelled;

#[derive(Clone, Copy)]
struct Scored<'a> {
    index: usize,
    word: &'a Word,
    entropy: f64,
}

/// Higher entropy wins; equal entropy keeps the earlier pool position
///
/// Comparing indices makes the result independent of how rayon splits and
/// combines the work.
fn keep_best<'a>(a: Scored<'a>, b: Scored<'a>) -> Scored<'a> {
    match b.entropy.total_cmp(&a.entropy) {
        Ordering::Greater => b,
        Ordering::Less => a,
        Ordering::Equal if b.index < a.index => b,
        Ordering::Equal => a,
    }
}

/// Select best guess by maximizing entropy
///
/// Returns the word with highest entropy and its entropy value,
/// or `None` if the guess pool is empty. Ties go to the word that comes
/// first in `guess_pool`.
///
/// # Examples
/// ```
/// use wordless::core::Word;
/// use wordless::solver::entropy::select_best_guess;
///
/// let guesses = vec![
///     Word::new("aaaaa").unwrap(),
///     Word::new("aeros").unwrap(),
/// ];
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let guess_refs: Vec<&Word> = guesses.iter().collect();
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let (best, entropy) = select_best_guess(&guess_refs, &candidate_refs).unwrap();
/// assert_eq!(best.text(), "AEROS"); // AEROS has higher entropy than AAAAA
/// assert!(entropy > 0.0);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &[&'a Word],
    candidates: &[&Word],
) -> Option<(&'a Word, f64)> {
    guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, &word)| Scored {
            index,
            word,
            entropy: calculate_entropy(word, candidates),
        })
        .reduce_with(keep_best)
        .map(|best| (best.word, best.entropy))
}

/// [`select_best_guess`], abandoned as soon as `cancel` is raised
///
/// Words still queued when the flag goes up are never scored.
///
/// # Errors
/// Returns [`Cancelled`] if the flag was raised before the result was
/// produced.
pub fn select_best_guess_cancellable<'a>(
    guess_pool: &[&'a Word],
    candidates: &[&Word],
    cancel: &AtomicBool,
) -> Result<Option<(&'a Word, f64)>, Cancelled> {
    let best = guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, &word)| {
            if cancel.load(atomic::Ordering::Relaxed) {
                return None;
            }
            Some(Scored {
                index,
                word,
                entropy: calculate_entropy(word, candidates),
            })
        })
        .while_some()
        .reduce_with(keep_best);

    if cancel.load(atomic::Ordering::Relaxed) {
        return Err(Cancelled);
    }

    Ok(best.map(|best| (best.word, best.entropy)))
}
