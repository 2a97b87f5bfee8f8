//! Corpus loading
//!
//! Walks a directory tree, reads every file as a document and tokenizes it.
//! Files that cannot be read are logged and contribute no tokens.

pub mod loader;
pub mod tokenizer;

pub use loader::{list_documents, load_corpus, read_document, train_from_dir, Document};
pub use tokenizer::tokenize;
