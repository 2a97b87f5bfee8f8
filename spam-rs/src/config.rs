//! Configuration for spam-rs

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, SpamError};
use crate::model::DEFAULT_THRESHOLD;

/// Main classifier configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Training and test corpora
    #[serde(default)]
    pub corpus: CorpusConfig,
    /// Model parameters
    #[serde(default)]
    pub model: ModelConfig,
    /// Logging output
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Corpus locations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    /// Directory of ham training documents
    #[serde(default = "default_ham_dir")]
    pub ham_dir: PathBuf,
    /// Directory of spam training documents
    #[serde(default = "default_spam_dir")]
    pub spam_dir: PathBuf,
    /// Directory of documents to classify
    #[serde(default = "default_test_dir")]
    pub test_dir: PathBuf,
    /// Maximum number of files read at once
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

/// Model parameters
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    /// Minimum combined ham+spam count for a word to be scored
    #[serde(default = "default_threshold")]
    pub threshold: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_ham_dir() -> PathBuf {
    PathBuf::from("./enron1/ham")
}

fn default_spam_dir() -> PathBuf {
    PathBuf::from("./enron1/spam")
}

fn default_test_dir() -> PathBuf {
    PathBuf::from("enron2/ham")
}

fn default_concurrency() -> usize {
    64
}

fn default_threshold() -> u64 {
    DEFAULT_THRESHOLD
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            ham_dir: default_ham_dir(),
            spam_dir: default_spam_dir(),
            test_dir: default_test_dir(),
            concurrency: default_concurrency(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SpamError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| SpamError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.corpus.concurrency == 0 {
            return Err(SpamError::Config(
                "corpus.concurrency must be at least 1".to_string(),
            ));
        }

        match self.logging.format.as_str() {
            "pretty" | "json" => Ok(()),
            other => Err(SpamError::Config(format!(
                "Unknown logging format '{}', expected 'pretty' or 'json'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.model.threshold, 300);
        assert_eq!(config.corpus.ham_dir, PathBuf::from("./enron1/ham"));
        assert_eq!(config.corpus.test_dir, PathBuf::from("enron2/ham"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
[corpus]
ham_dir = "/data/train/ham"
concurrency = 8

[model]
threshold = 50
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.corpus.ham_dir, PathBuf::from("/data/train/ham"));
        assert_eq!(config.corpus.spam_dir, PathBuf::from("./enron1/spam"));
        assert_eq!(config.corpus.concurrency, 8);
        assert_eq!(config.model.threshold, 50);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_example_config_parses() {
        let config: Config = toml::from_str(include_str!("../config.example.toml")).unwrap();
        assert_eq!(config.model.threshold, 300);
        assert_eq!(config.corpus.concurrency, 64);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let mut config = Config::default();
        config.corpus.concurrency = 0;
        assert!(matches!(config.validate(), Err(SpamError::Config(_))));
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        let mut config = Config::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spam-rs.toml");
        std::fs::write(&path, "[model]\nthreshold = 7\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.model.threshold, 7);
    }

    #[test]
    fn test_from_missing_file() {
        let result = Config::from_file("/nonexistent/spam-rs.toml");
        assert!(matches!(result, Err(SpamError::Config(_))));
    }
}
