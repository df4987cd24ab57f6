//! Data models

mod types;

pub use types::{ClassScores, Label, LabeledRow, Prediction};
