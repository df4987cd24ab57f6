//! Natural language processing
//!
//! Includes:
//! - Tokenization with emoticon preservation
//! - Corpus construction per class
//! - Stock-word pruning across classes

mod corpus;
mod pruner;
mod tokenizer;

pub use corpus::build_corpus;
pub use pruner::{StopWordPruner, DEFAULT_TOP_K};
pub use tokenizer::{tokenize, Tokenizer, EMOTICON_SYMBOLS};
