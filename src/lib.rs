//! # Rust Tweet Sentiment
//!
//! Naive Bayes sentiment classification for short social-media posts.
//!
//! ## Modules
//!
//! - `nlp` - Tokenization, corpus construction, stock-word pruning
//! - `sentiment` - Vocabularies, model fitting and prediction
//! - `metrics` - Accuracy and classification report
//! - `data` - CSV loading of labeled posts
//! - `models` - Shared data types
//! - `config` - Application configuration
//!
//! ## Example
//!
//! ```
//! use rust_tweet_sentiment::{fit, Label, LabeledRow};
//!
//! let training = vec![
//!     LabeledRow::new(Label::Positive, "what a lovely day :)"),
//!     LabeledRow::new(Label::Negative, "awful rainy day :("),
//! ];
//! let model = fit(&training).unwrap();
//! assert_eq!(model.predict("lovely").unwrap(), Label::Positive);
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod metrics;
pub mod models;
pub mod nlp;
pub mod sentiment;

pub use config::AppConfig;
pub use data::DataLoader;
pub use error::{Result, SentimentError};
pub use metrics::{accuracy, ConfusionMatrix, EvaluationReport};
pub use models::{ClassScores, Label, LabeledRow, Prediction};
pub use nlp::{build_corpus, tokenize, StopWordPruner, Tokenizer};
pub use sentiment::{fit, FittedModel, NaiveBayesTrainer, Vocabulary};
