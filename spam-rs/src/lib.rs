//! spam-rs: Naive-Bayes ham/spam text classifier
//!
//! Learns per-class word frequencies from directories of labeled documents
//! and labels unseen documents by comparing log-space class scores.
//!
//! # Features
//!
//! - Term-frequency bag-of-words per class
//! - Vocabulary pruning on combined ham+spam word counts
//! - Log-space scoring with word-occurrence class priors
//! - Concurrent corpus loading on Tokio
//!
//! # Example
//!
//! ```
//! use spam_rs::model::{Label, TrainedModel, WordCounts};
//!
//! let mut ham = WordCounts::new();
//! ham.ingest(["MEETING", "MEETING", "MEETING", "FREE"]);
//! let mut spam = WordCounts::new();
//! spam.ingest(["FREE", "FREE", "FREE", "MEETING"]);
//!
//! let model = TrainedModel::train(ham, spam, 1).unwrap();
//! assert_eq!(model.classify(["FREE"]), Label::Spam);
//! assert_eq!(model.classify(["MEETING"]), Label::Ham);
//! ```
//!
//! # Modules
//!
//! - [`model`]: Counting, feature selection and classification
//! - [`corpus`]: Directory walking, file reading and tokenization
//! - [`pipeline`]: Train-then-classify over directories
//! - [`report`]: Label tallies
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling

pub mod config;
pub mod corpus;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod report;

pub use config::Config;
pub use error::{Result, SpamError};
pub use model::{Label, TrainedModel};
pub use report::ClassificationReport;
