//! Loading labeled posts from CSV files
//!
//! Files have no header. Each record is `label,text`, fields may be
//! `"`-quoted, and spaces right after a separator are skipped before the
//! quote check, so `positive, "a, b"` is a two-field record.

use crate::config::DataSettings;
use crate::error::{Result, SentimentError};
use crate::models::{Label, LabeledRow};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Training, development and test tables
#[derive(Debug, Clone, Default)]
pub struct DataSplits {
    pub train: Vec<LabeledRow>,
    pub dev: Vec<LabeledRow>,
    pub test: Vec<LabeledRow>,
}

/// Data loader for labeled CSV files
pub struct DataLoader;

impl DataLoader {
    /// Load labeled rows from a CSV file
    pub fn load_rows<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledRow>> {
        let file = File::open(&path)?;
        let rows = Self::read_rows(file)?;
        info!(path = ?path.as_ref(), rows = rows.len(), "Loaded labeled rows");
        Ok(rows)
    }

    /// Parse labeled rows from any reader
    pub fn read_rows<R: Read>(mut reader: R) -> Result<Vec<LabeledRow>> {
        let mut raw = Vec::new();
        reader.read_to_end(&mut raw)?;
        let cleaned = skip_initial_space(&raw);

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quote(b'"')
            .from_reader(cleaned.as_slice());

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            match (record.get(0), record.get(1)) {
                (Some(label), Some(text)) => {
                    rows.push(LabeledRow::new(Label::from_raw(label), text));
                }
                _ => {
                    return Err(SentimentError::MalformedRow {
                        line,
                        reason: format!("expected label and text, got {} field(s)", record.len()),
                    });
                }
            }
        }

        Ok(rows)
    }

    /// Load the three tables named in the settings
    pub fn load_splits(settings: &DataSettings) -> Result<DataSplits> {
        Ok(DataSplits {
            train: Self::load_rows(&settings.train_path)?,
            dev: Self::load_rows(&settings.dev_path)?,
            test: Self::load_rows(&settings.test_path)?,
        })
    }
}

/// Drop spaces at the start of every field, outside quotes
fn skip_initial_space(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len());
    let mut in_quotes = false;
    let mut field_start = true;

    for &byte in raw {
        if !in_quotes && field_start && byte == b' ' {
            continue;
        }
        field_start = false;

        match byte {
            b'"' => in_quotes = !in_quotes,
            b',' | b'\n' | b'\r' if !in_quotes => field_start = true,
            _ => {}
        }
        out.push(byte);
    }

    out
}

/// Separate a table into parallel texts and labels
pub fn split_labels(rows: &[LabeledRow]) -> (Vec<String>, Vec<Label>) {
    rows.iter()
        .map(|row| (row.text.clone(), row.label))
        .unzip()
}
