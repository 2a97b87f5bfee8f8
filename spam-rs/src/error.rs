//! Error types for spam-rs

use thiserror::Error;

use crate::model::Label;

/// Result type alias for classifier operations
pub type Result<T> = std::result::Result<T, SpamError>;

/// Classifier error types
#[derive(Error, Debug)]
pub enum SpamError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Corpus directory missing or unusable
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// A class has no vocabulary left after pruning
    #[error("Insufficient training data: {label} total is zero after applying threshold {threshold}")]
    InsufficientTrainingData { label: Label, threshold: u64 },

    /// A class or corpus total handed to scoring is zero
    #[error("Insufficient training data: {0} total is zero")]
    ZeroTotal(&'static str),

    /// Corpus total handed to scoring is not the sum of the class totals
    #[error("Corpus total {corpus} does not equal ham total {ham} plus spam total {spam}")]
    TotalMismatch { ham: u64, spam: u64, corpus: u64 },

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
