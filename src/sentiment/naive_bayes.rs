//! Naive Bayes sentiment classifier
//!
//! Training builds an immutable [`FittedModel`] from labeled rows. The model
//! scores a text per class as `prior * P(text | class) / P(text)` using raw
//! relative frequencies: tokens unknown to a class are skipped for that
//! class, and no smoothing is applied.

use crate::data::split_labels;
use crate::error::{Result, SentimentError};
use crate::metrics::EvaluationReport;
use crate::models::{ClassScores, Label, LabeledRow};
use crate::nlp::{build_corpus, StopWordPruner, Tokenizer};
use crate::sentiment::vocabulary::Vocabulary;
use tracing::{debug, info};

/// Builds a [`FittedModel`] from training rows
#[derive(Debug, Clone, Default)]
pub struct NaiveBayesTrainer {
    tokenizer: Tokenizer,
    pruner: StopWordPruner,
}

impl NaiveBayesTrainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom tokenizer
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Use a custom stock-word pruner
    pub fn with_pruner(mut self, pruner: StopWordPruner) -> Self {
        self.pruner = pruner;
        self
    }

    /// Fit the model
    pub fn fit(&self, rows: &[LabeledRow]) -> Result<FittedModel> {
        if rows.is_empty() {
            return Err(SentimentError::EmptyTrainingSet);
        }

        let (positive_texts, negative_texts): (Vec<&LabeledRow>, Vec<&LabeledRow>) =
            rows.iter().partition(|row| row.label == Label::Positive);
        let positive_texts: Vec<&str> = positive_texts.iter().map(|r| r.text.as_str()).collect();
        let negative_texts: Vec<&str> = negative_texts.iter().map(|r| r.text.as_str()).collect();

        let total = rows.len() as f64;
        let prior_positive = positive_texts.len() as f64 / total;
        let prior_negative = negative_texts.len() as f64 / total;

        let positive_corpus = build_corpus(&self.tokenizer, &positive_texts);
        let negative_corpus = build_corpus(&self.tokenizer, &negative_texts);
        debug!(
            positive = positive_corpus.len(),
            negative = negative_corpus.len(),
            "Built class corpora"
        );

        let (positive_corpus, negative_corpus) =
            self.pruner.prune(&positive_corpus, &negative_corpus);

        let positive = Vocabulary::from_tokens(&positive_corpus);
        let negative = Vocabulary::from_tokens(&negative_corpus);
        let pooled = Vocabulary::pooled(&positive, &negative);

        info!(
            rows = rows.len(),
            prior_positive,
            prior_negative,
            vocabulary = pooled.len(),
            corpus_size = pooled.total(),
            "Fitted Naive Bayes model"
        );

        Ok(FittedModel {
            tokenizer: self.tokenizer.clone(),
            prior_positive,
            prior_negative,
            positive,
            negative,
            pooled,
        })
    }
}

/// Fit a model with the default tokenizer and pruner
pub fn fit(rows: &[LabeledRow]) -> Result<FittedModel> {
    NaiveBayesTrainer::new().fit(rows)
}

/// Trained model. Read-only once built.
#[derive(Debug, Clone)]
pub struct FittedModel {
    tokenizer: Tokenizer,
    prior_positive: f64,
    prior_negative: f64,
    positive: Vocabulary,
    negative: Vocabulary,
    pooled: Vocabulary,
}

impl FittedModel {
    /// P(positive) over the training rows
    pub fn prior_positive(&self) -> f64 {
        self.prior_positive
    }

    /// P(negative) over the training rows
    pub fn prior_negative(&self) -> f64 {
        self.prior_negative
    }

    /// Vocabulary of the pruned class corpus
    pub fn class_vocabulary(&self, label: Label) -> &Vocabulary {
        match label {
            Label::Positive => &self.positive,
            Label::Negative => &self.negative,
        }
    }

    /// Vocabulary of both pruned corpora together
    pub fn pooled_vocabulary(&self) -> &Vocabulary {
        &self.pooled
    }

    /// Relative posterior score of each class
    pub fn scores(&self, text: &str) -> Result<ClassScores> {
        let tokens = self.tokenizer.tokenize(text);

        Ok(ClassScores {
            positive: self.class_score(&tokens, Label::Positive)?,
            negative: self.class_score(&tokens, Label::Negative)?,
        })
    }

    /// Predict the label of a text. Ties go to negative.
    pub fn predict(&self, text: &str) -> Result<Label> {
        Ok(self.scores(text)?.label())
    }

    /// Predict labels for several texts
    pub fn predict_batch<S: AsRef<str>>(&self, texts: &[S]) -> Result<Vec<Label>> {
        texts.iter().map(|text| self.predict(text.as_ref())).collect()
    }

    /// Predict every row and compare against its label
    pub fn evaluate(&self, rows: &[LabeledRow]) -> Result<EvaluationReport> {
        let (texts, truth) = split_labels(rows);
        let predicted = self.predict_batch(&texts)?;

        EvaluationReport::from_labels(&truth, &predicted)
    }

    fn class_score(&self, tokens: &[String], label: Label) -> Result<f64> {
        let (prior, vocabulary) = match label {
            Label::Positive => (self.prior_positive, &self.positive),
            Label::Negative => (self.prior_negative, &self.negative),
        };

        // P(text | class) / P(text) as one product of per-token ratios, so long
        // texts do not underflow both sides to 0/0. An empty product is 1 and a
        // text with no known tokens scores its prior.
        let mut ratio = 1.0;

        for token in tokens {
            let Some(class_frequency) = vocabulary.frequency(token) else {
                continue;
            };
            let pooled_frequency =
                self.pooled
                    .frequency(token)
                    .ok_or_else(|| SentimentError::UnknownToken {
                        token: token.clone(),
                        vocabulary: "pooled",
                    })?;

            ratio *= class_frequency / pooled_frequency;
        }

        Ok(prior * ratio)
    }
}
