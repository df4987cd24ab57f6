//! Configuration utilities

use crate::nlp::{StopWordPruner, Tokenizer, DEFAULT_TOP_K};
use crate::sentiment::NaiveBayesTrainer;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Dataset locations
    pub data: DataSettings,
    /// Model settings
    pub model: ModelSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Locations of the three labeled tables
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    pub train_path: PathBuf,
    pub dev_path: PathBuf,
    pub test_path: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            train_path: PathBuf::from("tweets_train.csv"),
            dev_path: PathBuf::from("tweets_dev.csv"),
            test_path: PathBuf::from("tweets_test.csv"),
        }
    }
}

/// Training settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    /// How many top tokens per class are compared when pruning stock words
    pub stop_word_top_k: usize,
    /// Keep emoticons as tokens
    pub preserve_emoticons: bool,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            stop_word_top_k: DEFAULT_TOP_K,
            preserve_emoticons: true,
        }
    }
}

impl ModelSettings {
    /// Build a trainer from these settings
    pub fn trainer(&self) -> NaiveBayesTrainer {
        NaiveBayesTrainer::new()
            .with_tokenizer(Tokenizer::new().preserve_emoticons(self.preserve_emoticons))
            .with_pruner(StopWordPruner::new().with_top_k(self.stop_word_top_k))
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Load configuration from a `.toml` or `.json` file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path.as_ref())
        .map_err(|e| ConfigError::FileError(e.to_string()))?;

    match extension(path.as_ref()) {
        "json" => serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(e.to_string())),
        "toml" => toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(e.to_string())),
        ext => Err(ConfigError::UnsupportedFormat(ext.to_string())),
    }
}

/// Save configuration to a `.toml` or `.json` file
pub fn save_config<P: AsRef<Path>>(config: &AppConfig, path: P) -> Result<(), ConfigError> {
    let content = match extension(path.as_ref()) {
        "json" => serde_json::to_string_pretty(config)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?,
        "toml" => toml::to_string_pretty(config)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?,
        ext => return Err(ConfigError::UnsupportedFormat(ext.to_string())),
    };

    std::fs::write(path, content)
        .map_err(|e| ConfigError::FileError(e.to_string()))
}

fn extension(path: &Path) -> &str {
    path.extension().and_then(|e| e.to_str()).unwrap_or("")
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("File error: {0}")]
    FileError(String),
    /// Parse error
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Serialization error
    #[error("Serialize error: {0}")]
    SerializeError(String),
    /// Unsupported format
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}
