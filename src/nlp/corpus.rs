//! Corpus construction
//!
//! A class corpus is the flat concatenation of the tokens of every text in
//! the class, duplicates included.

use super::tokenizer::Tokenizer;

/// Tokenize every text and concatenate the results in input order
pub fn build_corpus<S: AsRef<str>>(tokenizer: &Tokenizer, texts: &[S]) -> Vec<String> {
    texts.iter().fold(Vec::new(), |mut corpus, text| {
        corpus.extend(tokenizer.tokenize(text.as_ref()));
        corpus
    })
}
