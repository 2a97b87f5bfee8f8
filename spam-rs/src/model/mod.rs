//! Statistical model
//!
//! Bag-of-words accumulation per class, vocabulary pruning by combined
//! occurrence count, and log-space Naive-Bayes scoring.

pub mod classifier;
pub mod counts;
pub mod types;
pub mod vocabulary;

pub use classifier::{classify, TrainedModel};
pub use counts::{train_class, DocumentBag, WordCounts};
pub use types::*;
pub use vocabulary::{compute_filtered_totals, FeatureSelector, DEFAULT_THRESHOLD};
