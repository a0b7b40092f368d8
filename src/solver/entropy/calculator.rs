//! Shannon entropy calculation for Wordle patterns
//!
//! A guess splits the remaining candidates into groups, one per feedback
//! pattern it could receive. The shape of that split is what gets scored.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Candidates grouped by the feedback they would give a guess
struct Partition {
    sizes: Vec<usize>,
    total: usize,
}

impl Partition {
    fn new(guess: &Word, candidates: &[&Word]) -> Self {
        let mut groups: FxHashMap<Pattern, usize> = FxHashMap::default();
        for &candidate in candidates {
            *groups.entry(Pattern::calculate(guess, candidate)).or_default() += 1;
        }
        // Map order depends on the pattern keys; sorted sizes make equal
        // splits sum to bit-identical entropies
        let mut sizes: Vec<usize> = groups.into_values().collect();
        sizes.sort_unstable();
        Self {
            sizes,
            total: candidates.len(),
        }
    }

    fn entropy(&self) -> f64 {
        sorted_entropy(&self.sizes)
    }

    /// Each group is hit with probability size/total and leaves size words
    fn expected_remaining(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let squares: usize = self.sizes.iter().map(|&n| n * n).sum();
        squares as f64 / self.total as f64
    }

    fn largest(&self) -> usize {
        self.sizes.iter().copied().max().unwrap_or(0)
    }
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the fraction of candidates that would produce pattern x.
///
/// # Examples
/// ```
/// use wordless::core::Word;
/// use wordless::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![Word::new("slate").unwrap(), Word::new("irate").unwrap()];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let entropy = calculate_entropy(&guess, &candidate_refs);
/// assert!(entropy > 0.0 && entropy <= 1.0);
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[&Word]) -> f64 {
    Partition::new(guess, candidates).entropy()
}

/// Shannon entropy of a distribution given as group sizes
///
/// Empty groups contribute nothing; an empty distribution has no entropy.
/// The order of `sizes` does not matter, down to the last bit.
///
/// ```
/// use wordless::solver::entropy::shannon_entropy;
///
/// assert!((shannon_entropy(&[25, 25, 25, 25]) - 2.0).abs() < 1e-9);
/// assert!(shannon_entropy(&[10]).abs() < 1e-9);
/// ```
#[must_use]
pub fn shannon_entropy(sizes: &[usize]) -> f64 {
    let mut sorted = sizes.to_vec();
    sorted.sort_unstable();
    sorted_entropy(&sorted)
}

/// Shannon entropy of group sizes already in ascending order
fn sorted_entropy(sizes: &[usize]) -> f64 {
    let total: usize = sizes.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;

    sizes
        .iter()
        .filter(|&&n| n > 0)
        .map(|&n| {
            let p = n as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Entropy, expected remaining candidates and worst case for a guess
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[&Word]) -> GuessMetrics {
    let partition = Partition::new(guess, candidates);
    GuessMetrics {
        entropy: partition.entropy(),
        expected_remaining: partition.expected_remaining(),
        max_partition: partition.largest(),
    }
}
