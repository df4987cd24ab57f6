//! Labeled dataset loading

pub mod loader;

pub use loader::{split_labels, DataLoader, DataSplits};
