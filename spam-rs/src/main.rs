//! spam-rs: Naive-Bayes ham/spam classifier
//!
//! # Usage
//!
//! ```bash
//! # Train on enron1 and classify enron2/ham (the defaults)
//! spam-rs classify
//!
//! # Explicit corpora and threshold, JSON output
//! spam-rs classify --ham enron1/ham --spam enron1/spam --test enron2/spam --threshold 100 --json
//!
//! # Vocabulary statistics of the trained model
//! spam-rs --config spam-rs.toml stats
//! ```

use clap::{Args, Parser, Subcommand};
use spam_rs::{pipeline, Config};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "spam-rs")]
#[command(about = "Classify documents as ham or spam", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct TrainArgs {
    /// Directory of ham training documents
    #[arg(long)]
    ham: Option<PathBuf>,
    /// Directory of spam training documents
    #[arg(long)]
    spam: Option<PathBuf>,
    /// Minimum combined ham+spam count for a word to be scored
    #[arg(long)]
    threshold: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Train, then classify every document in the test directory
    Classify {
        #[command(flatten)]
        train: TrainArgs,
        /// Directory of documents to classify
        #[arg(long)]
        test: Option<PathBuf>,
        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },
    /// Train and print vocabulary statistics
    Stats {
        #[command(flatten)]
        train: TrainArgs,
    },
}

impl TrainArgs {
    fn apply(self, config: &mut Config) {
        if let Some(ham) = self.ham {
            config.corpus.ham_dir = ham;
        }
        if let Some(spam) = self.spam {
            config.corpus.spam_dir = spam;
        }
        if let Some(threshold) = self.threshold {
            config.model.threshold = threshold;
        }
    }
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("spam_rs={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Classify { train, test, json } => {
            train.apply(&mut config);
            if let Some(test) = test {
                config.corpus.test_dir = test;
            }
            config.validate()?;
            init_logging(&config);
            info!("Starting spam-rs v{}", env!("CARGO_PKG_VERSION"));

            let report = pipeline::run(&config).await?;
            if json {
                println!("{}", report.to_json()?);
            } else {
                println!("{}", report);
            }
        }
        Commands::Stats { train } => {
            train.apply(&mut config);
            config.validate()?;
            init_logging(&config);

            let model = pipeline::train(&config).await?;
            let stats = model.vocabulary_stats();
            let totals = model.totals();

            println!("THRESHOLD: {}", stats.threshold);
            println!("DISTINCT WORDS: {}", stats.distinct_words);
            println!("INCLUDED WORDS: {}", stats.included_words);
            println!("HAM TOTAL: {}", totals.ham);
            println!("SPAM TOTAL: {}", totals.spam);
            println!("CORPUS TOTAL: {}", totals.corpus());
        }
    }

    Ok(())
}
