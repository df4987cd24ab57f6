//! Evaluation metrics
//!
//! Accuracy as a percentage, plus a binary confusion matrix with
//! per-class precision, recall and F1.

use crate::error::{Result, SentimentError};
use crate::models::Label;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Percentage of positions where the predicted label matches the true one
pub fn accuracy(truth: &[Label], predicted: &[Label]) -> Result<f64> {
    check_lengths(truth, predicted)?;

    let correct = truth
        .iter()
        .zip(predicted.iter())
        .filter(|(t, p)| t == p)
        .count();

    Ok(100.0 * correct as f64 / truth.len() as f64)
}

fn check_lengths(truth: &[Label], predicted: &[Label]) -> Result<()> {
    if truth.len() != predicted.len() {
        return Err(SentimentError::LengthMismatch {
            expected: truth.len(),
            actual: predicted.len(),
        });
    }
    if truth.is_empty() {
        return Err(SentimentError::EmptyEvaluationSet);
    }
    Ok(())
}

/// Binary confusion matrix, positive is the reference class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub true_positive: usize,
    pub false_positive: usize,
    pub false_negative: usize,
    pub true_negative: usize,
}

impl ConfusionMatrix {
    pub fn from_labels(truth: &[Label], predicted: &[Label]) -> Result<Self> {
        check_lengths(truth, predicted)?;

        let mut matrix = Self::default();
        for (t, p) in truth.iter().zip(predicted.iter()) {
            match (t, p) {
                (Label::Positive, Label::Positive) => matrix.true_positive += 1,
                (Label::Negative, Label::Positive) => matrix.false_positive += 1,
                (Label::Positive, Label::Negative) => matrix.false_negative += 1,
                (Label::Negative, Label::Negative) => matrix.true_negative += 1,
            }
        }
        Ok(matrix)
    }

    /// (correct, predicted as, actually) counts for one class
    fn counts(&self, label: Label) -> (usize, usize, usize) {
        match label {
            Label::Positive => (
                self.true_positive,
                self.true_positive + self.false_positive,
                self.true_positive + self.false_negative,
            ),
            Label::Negative => (
                self.true_negative,
                self.true_negative + self.false_negative,
                self.true_negative + self.false_positive,
            ),
        }
    }

    /// precision = TP / (TP + FP)
    pub fn precision(&self, label: Label) -> f64 {
        let (hits, predicted, _) = self.counts(label);
        ratio(hits, predicted)
    }

    /// recall = TP / (TP + FN)
    pub fn recall(&self, label: Label) -> f64 {
        let (hits, _, actual) = self.counts(label);
        ratio(hits, actual)
    }

    /// F1 = 2 * (precision * recall) / (precision + recall)
    pub fn f1_score(&self, label: Label) -> f64 {
        let precision = self.precision(label);
        let recall = self.recall(label);

        if precision + recall == 0.0 {
            0.0
        } else {
            2.0 * precision * recall / (precision + recall)
        }
    }

    pub fn total(&self) -> usize {
        self.true_positive + self.false_positive + self.false_negative + self.true_negative
    }
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

/// Result of scoring a labeled evaluation set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Accuracy in percent
    pub accuracy: f64,
    pub confusion: ConfusionMatrix,
}

impl EvaluationReport {
    pub fn from_labels(truth: &[Label], predicted: &[Label]) -> Result<Self> {
        Ok(Self {
            accuracy: accuracy(truth, predicted)?,
            confusion: ConfusionMatrix::from_labels(truth, predicted)?,
        })
    }

    pub fn total(&self) -> usize {
        self.confusion.total()
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Accuracy: {:.2}% ({} examples)", self.accuracy, self.total())?;
        writeln!(f, "{:10} {:>10} {:>10} {:>10}", "class", "precision", "recall", "f1")?;
        for label in [Label::Positive, Label::Negative] {
            writeln!(
                f,
                "{:10} {:>10.3} {:>10.3} {:>10.3}",
                label.as_str(),
                self.confusion.precision(label),
                self.confusion.recall(label),
                self.confusion.f1_score(label)
            )?;
        }
        Ok(())
    }
}
