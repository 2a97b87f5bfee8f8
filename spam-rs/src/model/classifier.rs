//! Naive-Bayes ham/spam classifier
//!
//! Scores are kept in log space. Each class score is the log prior (the
//! class's share of included word occurrences) plus, for every distinct
//! included word of the document, the log of the word's relative frequency
//! in that class. A word a class never saw adds nothing to that class.

use std::collections::BTreeSet;

use tracing::{debug, info};

use super::counts::{DocumentBag, WordCounts};
use super::types::{Classification, FilteredTotals, Label, VocabularyStats};
use super::vocabulary::FeatureSelector;
use crate::error::{Result, SpamError};

/// Trained two-class model, read-only after construction
#[derive(Debug, Clone)]
pub struct TrainedModel {
    ham: WordCounts,
    spam: WordCounts,
    selector: FeatureSelector,
    totals: FilteredTotals,
}

impl TrainedModel {
    /// Build a model from fully accumulated class counts.
    ///
    /// Fails when pruning leaves either class without any counted words,
    /// since the priors and word likelihoods would divide by zero.
    pub fn train(ham: WordCounts, spam: WordCounts, threshold: u64) -> Result<Self> {
        let selector = FeatureSelector::new(threshold);
        let totals = selector.filtered_totals(&ham, &spam);

        for label in [Label::Ham, Label::Spam] {
            if totals.get(label) == 0 {
                return Err(SpamError::InsufficientTrainingData { label, threshold });
            }
        }

        info!(
            "Model trained: ham total {}, spam total {}, threshold {}",
            totals.ham, totals.spam, threshold
        );

        Ok(Self {
            ham,
            spam,
            selector,
            totals,
        })
    }

    pub fn ham_counts(&self) -> &WordCounts {
        &self.ham
    }

    pub fn spam_counts(&self) -> &WordCounts {
        &self.spam
    }

    pub fn totals(&self) -> FilteredTotals {
        self.totals
    }

    pub fn threshold(&self) -> u64 {
        self.selector.threshold()
    }

    pub fn is_included(&self, word: &str) -> bool {
        self.selector.is_included(word, &self.ham, &self.spam)
    }

    pub fn vocabulary_stats(&self) -> VocabularyStats {
        self.selector.stats(&self.ham, &self.spam)
    }

    /// Score a tokenized document against both classes
    pub fn score<I, S>(&self, tokens: I) -> Classification
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let document: DocumentBag = tokens.into_iter().collect();
        score_document(
            &document,
            &self.ham,
            &self.spam,
            self.totals,
            |word| self.is_included(word),
        )
    }

    /// Label a tokenized document
    pub fn classify<I, S>(&self, tokens: I) -> Label
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.score(tokens).label
    }
}

/// Decide a label for a document from trained counts and filtered totals.
///
/// Fails when any total is zero or when `corpus_total` is not
/// `ham_total + spam_total`.
pub fn classify<F>(
    document: &DocumentBag,
    ham: &WordCounts,
    ham_total: u64,
    spam: &WordCounts,
    spam_total: u64,
    corpus_total: u64,
    included: F,
) -> Result<Label>
where
    F: Fn(&str) -> bool,
{
    if corpus_total == 0 {
        return Err(SpamError::ZeroTotal("corpus"));
    }
    if ham_total == 0 {
        return Err(SpamError::ZeroTotal("ham"));
    }
    if spam_total == 0 {
        return Err(SpamError::ZeroTotal("spam"));
    }
    if ham_total.checked_add(spam_total) != Some(corpus_total) {
        return Err(SpamError::TotalMismatch {
            ham: ham_total,
            spam: spam_total,
            corpus: corpus_total,
        });
    }

    let totals = FilteredTotals {
        ham: ham_total,
        spam: spam_total,
    };
    Ok(score_document(document, ham, spam, totals, included).label)
}

fn score_document<F>(
    document: &DocumentBag,
    ham: &WordCounts,
    spam: &WordCounts,
    totals: FilteredTotals,
    included: F,
) -> Classification
where
    F: Fn(&str) -> bool,
{
    let corpus_total = totals.corpus() as f64;
    let ham_total = totals.ham as f64;
    let spam_total = totals.spam as f64;

    // Sorted so the floating point sums do not depend on hash order
    let words: BTreeSet<&str> = document.iter().map(|(word, _)| word).collect();

    let mut ham_evidence = 0.0f64;
    let mut spam_evidence = 0.0f64;
    let mut scored_words = 0;

    for word in words.into_iter().filter(|&word| included(word)) {
        scored_words += 1;

        let spam_count = spam.get(word);
        if spam_count > 0 {
            spam_evidence += (spam_count as f64 / spam_total).ln();
        }

        let ham_count = ham.get(word);
        if ham_count > 0 {
            ham_evidence += (ham_count as f64 / ham_total).ln();
        }
    }

    let ham_score = ham_evidence + (ham_total / corpus_total).ln();
    let spam_score = spam_evidence + (spam_total / corpus_total).ln();

    let label = if spam_score > ham_score {
        Label::Spam
    } else {
        Label::Ham
    };

    debug!(
        "Scored {} words: ham {:.4}, spam {:.4} -> {}",
        scored_words, ham_score, spam_score, label
    );

    Classification {
        label,
        ham_score,
        spam_score,
        scored_words,
    }
}
