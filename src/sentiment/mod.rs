//! Sentiment classification
//!
//! Includes:
//! - Per-class and pooled vocabularies
//! - The Naive Bayes trainer and fitted model

mod naive_bayes;
mod vocabulary;

pub use naive_bayes::{fit, FittedModel, NaiveBayesTrainer};
pub use vocabulary::Vocabulary;
