//! Error types

use thiserror::Error;

/// Errors that can occur while loading data, fitting or evaluating the model
#[derive(Error, Debug)]
pub enum SentimentError {
    #[error("Label sequences differ in length: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Token {token:?} missing from the {vocabulary} vocabulary")]
    UnknownToken { token: String, vocabulary: &'static str },

    #[error("Cannot fit a model on an empty training set")]
    EmptyTrainingSet,

    #[error("Cannot score an empty evaluation set")]
    EmptyEvaluationSet,

    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, SentimentError>;
