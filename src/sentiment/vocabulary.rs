//! Token vocabularies with occurrence counts

use std::collections::HashMap;

/// Distinct tokens of a corpus mapped to their occurrence counts.
///
/// Every stored count is at least 1, and `total` is the length of the
/// corpus the vocabulary was built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    counts: HashMap<String, usize>,
    total: usize,
}

impl Vocabulary {
    /// Count every token of a corpus
    pub fn from_tokens(tokens: &[String]) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for token in tokens {
            *counts.entry(token.clone()).or_insert(0) += 1;
        }

        Self {
            counts,
            total: tokens.len(),
        }
    }

    /// Pool two vocabularies: counts are summed, sizes are added
    pub fn pooled(a: &Vocabulary, b: &Vocabulary) -> Self {
        let mut counts = a.counts.clone();
        for (token, count) in &b.counts {
            *counts.entry(token.clone()).or_insert(0) += count;
        }

        Self {
            counts,
            total: a.total + b.total,
        }
    }

    /// Occurrence count of a token, `None` if unseen
    pub fn count(&self, token: &str) -> Option<usize> {
        self.counts.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    /// Relative frequency `count / total`, `None` if unseen
    pub fn frequency(&self, token: &str) -> Option<f64> {
        self.count(token)
            .map(|count| count as f64 / self.total as f64)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Size of the source corpus
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(token, &count)| (token.as_str(), count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_counts_match_occurrences() {
        let vocab = Vocabulary::from_tokens(&words("a b a c a"));
        assert_eq!(vocab.count("a"), Some(3));
        assert_eq!(vocab.count("b"), Some(1));
        assert_eq!(vocab.count("z"), None);
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.total(), 5);
        assert!(vocab.iter().all(|(_, count)| count >= 1));
    }

    #[test]
    fn test_frequency() {
        let vocab = Vocabulary::from_tokens(&words("a b a c"));
        assert_eq!(vocab.frequency("a"), Some(0.5));
        assert_eq!(vocab.frequency("c"), Some(0.25));
        assert_eq!(vocab.frequency("z"), None);
    }

    #[test]
    fn test_pooled_sums_counts() {
        let pos = Vocabulary::from_tokens(&words("good good shared"));
        let neg = Vocabulary::from_tokens(&words("bad shared shared"));
        let pooled = Vocabulary::pooled(&pos, &neg);

        assert_eq!(pooled.count("good"), Some(2));
        assert_eq!(pooled.count("bad"), Some(1));
        assert_eq!(pooled.count("shared"), Some(3));
        assert_eq!(pooled.len(), 3);
        assert_eq!(pooled.total(), 6);
    }

    #[test]
    fn test_empty() {
        let vocab = Vocabulary::from_tokens(&[]);
        assert!(vocab.is_empty());
        assert_eq!(vocab.total(), 0);
    }
}
