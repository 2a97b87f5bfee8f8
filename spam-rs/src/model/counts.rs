//! Bag-of-words accumulation
//!
//! Term-frequency counting per class. Ingestion is purely additive, so the
//! final mapping is independent of document order and partial mappings built
//! by separate workers can be merged.

use std::collections::HashMap;

/// Word occurrence counts for one class
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounts {
    counts: HashMap<String, u64>,
}

impl WordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token of a document, repeats included
    pub fn ingest<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for token in tokens {
            self.add(token, 1);
        }
    }

    /// Add `count` occurrences of a single word
    pub fn add(&mut self, word: impl Into<String>, count: u64) {
        *self.counts.entry(word.into()).or_insert(0) += count;
    }

    /// Count every document of a labeled set
    pub fn ingest_corpus<D, I, S>(&mut self, documents: D)
    where
        D: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for document in documents {
            self.ingest(document);
        }
    }

    /// Add a partial mapping into this one
    pub fn merge(&mut self, other: WordCounts) {
        for (word, count) in other.counts {
            self.add(word, count);
        }
    }

    /// Occurrences of `word`, zero when never seen
    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Unfiltered sum of all occurrences
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }
}

impl<S: Into<String>> FromIterator<S> for WordCounts {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut counts = WordCounts::new();
        counts.ingest(iter);
        counts
    }
}

/// Word multiset of a single document
pub type DocumentBag = WordCounts;

/// Accumulate a class's training documents into word counts
pub fn train_class<D, I, S>(documents: D) -> WordCounts
where
    D: IntoIterator<Item = I>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut counts = WordCounts::new();
    counts.ingest_corpus(documents);
    counts
}
