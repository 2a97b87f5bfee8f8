//! Train-then-classify pipeline over directories of documents

use futures::StreamExt;
use std::path::Path;
use tracing::{debug, info};

use crate::config::Config;
use crate::corpus::{list_documents, read_document, train_from_dir};
use crate::error::Result;
use crate::model::TrainedModel;
use crate::report::ClassificationReport;

/// Train a model from the configured ham and spam directories.
///
/// Both corpora are read concurrently.
pub async fn train(config: &Config) -> Result<TrainedModel> {
    let concurrency = config.corpus.concurrency;

    info!(
        "Training from ham={} spam={}",
        config.corpus.ham_dir.display(),
        config.corpus.spam_dir.display()
    );

    let (ham, spam) = tokio::try_join!(
        train_from_dir(&config.corpus.ham_dir, concurrency),
        train_from_dir(&config.corpus.spam_dir, concurrency),
    )?;

    TrainedModel::train(ham, spam, config.model.threshold)
}

/// Classify every document below `dir` and tally the labels
pub async fn classify_dir(
    model: &TrainedModel,
    dir: &Path,
    concurrency: usize,
) -> Result<ClassificationReport> {
    let paths = list_documents(dir)?;
    info!("Classifying {} documents from {}", paths.len(), dir.display());

    let report = futures::stream::iter(paths)
        .map(|path| async move {
            let tokens = read_document(&path).await;
            let label = model.classify(tokens);
            debug!("{} -> {}", path.display(), label);
            label
        })
        .buffer_unordered(concurrency.max(1))
        .fold(ClassificationReport::new(), |mut report, label| async move {
            report.record(label);
            report
        })
        .await;

    info!(
        "Classified {} documents: {} ham, {} spam",
        report.total(),
        report.ham,
        report.spam
    );

    Ok(report)
}

/// Train on the configured corpora, then classify the test directory
pub async fn run(config: &Config) -> Result<ClassificationReport> {
    let model = train(config).await?;
    classify_dir(&model, &config.corpus.test_dir, config.corpus.concurrency).await
}
