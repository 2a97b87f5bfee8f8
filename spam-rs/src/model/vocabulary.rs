//! Vocabulary feature selection
//!
//! A word takes part in class totals and in scoring only when its combined
//! ham+spam count reaches the threshold. The same test drives both, so the
//! filtered totals always equal the sum over the words the classifier scores.

use super::counts::WordCounts;
use super::types::{FilteredTotals, VocabularyStats};

/// Default minimum combined occurrence count
pub const DEFAULT_THRESHOLD: u64 = 300;

/// Combined-count vocabulary pruning policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSelector {
    threshold: u64,
}

impl FeatureSelector {
    pub fn new(threshold: u64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    /// Whether `word` clears the threshold on its combined count
    pub fn is_included(&self, word: &str, ham: &WordCounts, spam: &WordCounts) -> bool {
        ham.get(word) + spam.get(word) >= self.threshold
    }

    /// Per-class sums restricted to included words
    pub fn filtered_totals(&self, ham: &WordCounts, spam: &WordCounts) -> FilteredTotals {
        let ham_total = ham
            .iter()
            .filter(|(word, _)| self.is_included(word, ham, spam))
            .map(|(_, count)| count)
            .sum();
        let spam_total = spam
            .iter()
            .filter(|(word, _)| self.is_included(word, ham, spam))
            .map(|(_, count)| count)
            .sum();

        FilteredTotals {
            ham: ham_total,
            spam: spam_total,
        }
    }

    /// Distinct vocabulary size before and after pruning
    pub fn stats(&self, ham: &WordCounts, spam: &WordCounts) -> VocabularyStats {
        let spam_only = spam.iter().filter(|(word, _)| ham.get(word) == 0);

        let mut distinct_words = 0;
        let mut included_words = 0;
        for (word, _) in ham.iter().chain(spam_only) {
            distinct_words += 1;
            if self.is_included(word, ham, spam) {
                included_words += 1;
            }
        }

        VocabularyStats {
            distinct_words,
            included_words,
            threshold: self.threshold,
        }
    }
}

impl Default for FeatureSelector {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

/// Filtered class totals together with the inclusion predicate they were
/// computed with
pub fn compute_filtered_totals<'a>(
    ham: &'a WordCounts,
    spam: &'a WordCounts,
    threshold: u64,
) -> (FilteredTotals, impl Fn(&str) -> bool + 'a) {
    let selector = FeatureSelector::new(threshold);
    let totals = selector.filtered_totals(ham, spam);
    (totals, move |word: &str| selector.is_included(word, ham, spam))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(entries: &[(&str, u64)]) -> WordCounts {
        let mut counts = WordCounts::new();
        for &(word, n) in entries {
            counts.add(word, n);
        }
        counts
    }

    #[test]
    fn test_inclusion_uses_combined_count() {
        let ham = counts(&[("INVOICE", 50), ("MEETING", 10), ("ENRON", 299)]);
        let spam = counts(&[("INVOICE", 400), ("MEETING", 5), ("VIAGRA", 300)]);
        let selector = FeatureSelector::new(300);

        assert!(selector.is_included("INVOICE", &ham, &spam));
        assert!(!selector.is_included("MEETING", &ham, &spam));
        // one class alone, just under and exactly at the bar
        assert!(!selector.is_included("ENRON", &ham, &spam));
        assert!(selector.is_included("VIAGRA", &ham, &spam));
        assert!(!selector.is_included("UNSEEN", &ham, &spam));
    }

    #[test]
    fn test_filtered_totals_restricted_to_included_words() {
        let ham = counts(&[("INVOICE", 50), ("MEETING", 10), ("ENRON", 299)]);
        let spam = counts(&[("INVOICE", 400), ("MEETING", 5), ("VIAGRA", 300)]);
        let totals = FeatureSelector::new(300).filtered_totals(&ham, &spam);

        assert_eq!(totals.ham, 50);
        assert_eq!(totals.spam, 700);
        assert_eq!(totals.corpus(), 750);
    }

    #[test]
    fn test_predicate_agrees_with_totals() {
        let ham = counts(&[("A", 3), ("B", 1), ("C", 2)]);
        let spam = counts(&[("A", 1), ("C", 0), ("D", 4)]);
        let (totals, included) = compute_filtered_totals(&ham, &spam, 3);

        for word in ["A", "B", "C", "D", "E"] {
            assert_eq!(included(word), ham.get(word) + spam.get(word) >= 3);
        }

        let expected_ham: u64 = ham.iter().filter(|(w, _)| included(*w)).map(|(_, c)| c).sum();
        let expected_spam: u64 = spam.iter().filter(|(w, _)| included(*w)).map(|(_, c)| c).sum();
        assert_eq!(totals.ham, expected_ham);
        assert_eq!(totals.spam, expected_spam);
        assert_eq!(totals.ham, 3);
        assert_eq!(totals.spam, 5);
    }

    #[test]
    fn test_zero_threshold_includes_everything() {
        let ham = counts(&[("A", 1)]);
        let spam = counts(&[("B", 2)]);
        let totals = FeatureSelector::new(0).filtered_totals(&ham, &spam);

        assert_eq!(totals.ham, ham.total());
        assert_eq!(totals.spam, spam.total());
    }

    #[test]
    fn test_stats() {
        let ham = counts(&[("A", 5), ("B", 1)]);
        let spam = counts(&[("A", 1), ("C", 6)]);
        let stats = FeatureSelector::new(5).stats(&ham, &spam);

        assert_eq!(stats.distinct_words, 3);
        assert_eq!(stats.included_words, 2);
        assert_eq!(stats.threshold, 5);
    }
}
