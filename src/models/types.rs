//! Core data types shared across the pipeline

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentiment class of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Positive,
    Negative,
}

impl Label {
    /// Parse a raw label field.
    ///
    /// Only the exact string `"positive"` maps to [`Label::Positive`];
    /// anything else is treated as negative.
    pub fn from_raw(raw: &str) -> Self {
        if raw == "positive" {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl From<&str> for Label {
    fn from(raw: &str) -> Self {
        Self::from_raw(raw)
    }
}

/// One labeled input row: a post and its sentiment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledRow {
    pub label: Label,
    pub text: String,
}

impl LabeledRow {
    pub fn new(label: Label, text: impl Into<String>) -> Self {
        Self {
            label,
            text: text.into(),
        }
    }
}

/// Relative posterior scores for both classes.
///
/// These are not calibrated probabilities: each class is scored on its own
/// subset of tokens, so the two values are only meaningful compared with
/// each other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassScores {
    pub positive: f64,
    pub negative: f64,
}

impl ClassScores {
    /// Positive wins only on a strict inequality; ties go to negative.
    pub fn label(&self) -> Label {
        if self.positive > self.negative {
            Label::Positive
        } else {
            Label::Negative
        }
    }
}

/// A classified text with the scores behind its label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub text: String,
    pub label: Label,
    pub scores: ClassScores,
}

impl Prediction {
    pub fn new(text: impl Into<String>, scores: ClassScores) -> Self {
        Self {
            text: text.into(),
            label: scores.label(),
            scores,
        }
    }
}
