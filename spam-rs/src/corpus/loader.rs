//! Directory walking and concurrent document reading

use futures::stream::{self, StreamExt};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::tokenizer::tokenize;
use crate::error::{Result, SpamError};
use crate::model::WordCounts;

/// A tokenized document
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub tokens: Vec<String>,
}

/// Every non-directory entry below `dir`, sorted by path
pub fn list_documents(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(SpamError::Corpus(format!(
            "Not a directory: {}",
            dir.display()
        )));
    }

    let mut paths: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", dir.display(), e);
                None
            }
        })
        .filter(|entry| !entry.file_type().is_dir())
        .map(|entry| entry.into_path())
        .collect();

    paths.sort();
    Ok(paths)
}

/// Read and tokenize one file. Bytes that are not valid UTF-8 are replaced;
/// an unreadable file yields no tokens.
pub async fn read_document(path: &Path) -> Vec<String> {
    match fs::read(path).await {
        Ok(bytes) => tokenize(&String::from_utf8_lossy(&bytes)),
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

fn documents(paths: Vec<PathBuf>, concurrency: usize) -> impl stream::Stream<Item = Document> {
    stream::iter(paths)
        .map(|path| async move {
            let tokens = read_document(&path).await;
            Document { path, tokens }
        })
        .buffer_unordered(concurrency.max(1))
}

/// Load every document below `dir`, reading up to `concurrency` files at once.
/// Documents are returned in path order.
pub async fn load_corpus(dir: &Path, concurrency: usize) -> Result<Vec<Document>> {
    let paths = list_documents(dir)?;
    debug!("Loading {} documents from {}", paths.len(), dir.display());

    let mut docs: Vec<Document> = documents(paths, concurrency).collect().await;
    docs.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(docs)
}

/// Accumulate the word counts of every document below `dir`
pub async fn train_from_dir(dir: &Path, concurrency: usize) -> Result<WordCounts> {
    let paths = list_documents(dir)?;
    let file_count = paths.len();

    let counts = documents(paths, concurrency)
        .fold(WordCounts::new(), |mut counts, doc| async move {
            counts.ingest(doc.tokens);
            counts
        })
        .await;

    info!(
        "Trained on {} files from {}: {} distinct words, {} occurrences",
        file_count,
        dir.display(),
        counts.len(),
        counts.total()
    );

    Ok(counts)
}
