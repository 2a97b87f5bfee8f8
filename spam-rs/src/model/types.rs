//! Model types and data structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// Class label assigned to a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Legitimate mail
    Ham,
    /// Unsolicited mail
    Spam,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Ham => write!(f, "ham"),
            Label::Spam => write!(f, "spam"),
        }
    }
}

/// Per-class word totals restricted to included vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilteredTotals {
    pub ham: u64,
    pub spam: u64,
}

impl FilteredTotals {
    /// Sum of both class totals, the denominator of the class priors
    pub fn corpus(&self) -> u64 {
        self.ham + self.spam
    }

    pub fn get(&self, label: Label) -> u64 {
        match label {
            Label::Ham => self.ham,
            Label::Spam => self.spam,
        }
    }
}

/// Scoring result for a single document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    /// Decided label
    pub label: Label,
    /// Log-space ham score (prior + evidence)
    pub ham_score: f64,
    /// Log-space spam score (prior + evidence)
    pub spam_score: f64,
    /// Distinct document words that passed the vocabulary threshold
    pub scored_words: usize,
}

/// Vocabulary size before and after pruning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyStats {
    /// Distinct words seen in either class
    pub distinct_words: usize,
    /// Distinct words whose combined count clears the threshold
    pub included_words: usize,
    /// Threshold the stats were computed with
    pub threshold: u64,
}
