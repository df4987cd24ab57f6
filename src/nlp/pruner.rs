//! Stock-word pruning
//!
//! Tokens that rank among the most frequent in *both* class corpora carry
//! no discriminative signal and are removed from both. A token frequent in
//! only one class is kept.

use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Default number of top tokens compared between the classes
pub const DEFAULT_TOP_K: usize = 50;

/// Removes tokens shared between the per-class top-k frequency lists
#[derive(Debug, Clone)]
pub struct StopWordPruner {
    top_k: usize,
}

impl StopWordPruner {
    pub fn new() -> Self {
        Self { top_k: DEFAULT_TOP_K }
    }

    /// Set how many top tokens per class are compared
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// The `top_k` most frequent distinct tokens, most frequent first.
    ///
    /// Equal counts keep first-encounter order, so the result is stable for
    /// a given corpus order.
    pub fn most_frequent(&self, tokens: &[String]) -> Vec<String> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<(&str, usize)> = Vec::new();

        for token in tokens {
            match index.get(token.as_str()) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(token.as_str(), counts.len());
                    counts.push((token.as_str(), 1));
                }
            }
        }

        // stable sort keeps encounter order among ties
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        counts
            .into_iter()
            .take(self.top_k)
            .map(|(token, _)| token.to_string())
            .collect()
    }

    /// Tokens in the top-k list of both corpora
    pub fn shared_frequent(&self, positive: &[String], negative: &[String]) -> HashSet<String> {
        let negative_top: HashSet<String> = self.most_frequent(negative).into_iter().collect();

        self.most_frequent(positive)
            .into_iter()
            .filter(|token| negative_top.contains(token))
            .collect()
    }

    /// Remove every occurrence of the shared frequent tokens from both corpora
    pub fn prune(&self, positive: &[String], negative: &[String]) -> (Vec<String>, Vec<String>) {
        let stock_words = self.shared_frequent(positive, negative);
        debug!(count = stock_words.len(), "Removing stock words");

        let keep = |tokens: &[String]| -> Vec<String> {
            tokens
                .iter()
                .filter(|token| !stock_words.contains(*token))
                .cloned()
                .collect()
        };

        (keep(positive), keep(negative))
    }
}

impl Default for StopWordPruner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_most_frequent_order_and_ties() {
        let pruner = StopWordPruner::new().with_top_k(3);
        let tokens = words("b a c a d c a e");
        // a=3, c=2, then b and d and e tie at 1; b was seen first
        assert_eq!(pruner.most_frequent(&tokens), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_shared_word_removed_from_both() {
        let pruner = StopWordPruner::new();
        let positive = words("the happy the joy the");
        let negative = words("the sad the");

        let (pos, neg) = pruner.prune(&positive, &negative);

        assert_eq!(pos, vec!["happy", "joy"]);
        assert_eq!(neg, vec!["sad"]);
    }

    #[test]
    fn test_one_sided_frequent_word_survives() {
        let pruner = StopWordPruner::new();
        let mut positive = vec!["love".to_string(); 100];
        positive.extend(words("the the"));
        let negative = words("the hate");

        let (pos, neg) = pruner.prune(&positive, &negative);

        assert_eq!(pos.iter().filter(|t| *t == "love").count(), 100);
        assert!(!pos.contains(&"the".to_string()));
        assert_eq!(neg, vec!["hate"]);
    }

    #[test]
    fn test_word_outside_one_top_k_is_kept() {
        // "common" is top-1 on the positive side but not on the negative side
        let pruner = StopWordPruner::new().with_top_k(1);
        let positive = words("common common other");
        let negative = words("bad bad bad common");

        let (pos, neg) = pruner.prune(&positive, &negative);

        assert_eq!(pos, positive);
        assert_eq!(neg, negative);
    }

    #[test]
    fn test_preserves_relative_order() {
        let pruner = StopWordPruner::new();
        let positive = words("x a y a z");
        let negative = words("a q");
        let (pos, _) = pruner.prune(&positive, &negative);
        assert_eq!(pos, vec!["x", "y", "z"]);
    }
}
