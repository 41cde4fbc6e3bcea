//! Report model
//!
//! The frequency map is converted into a `WordReport` before rendering: rows
//! sorted alphabetically (case-insensitive), with a case-sensitive secondary
//! comparison so that case-only duplicates have a deterministic order.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::core::counter::FrequencyMap;

/// One line of the report: a distinct word and its occurrence count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub word: String,
    pub count: u64,
}

/// The complete report: destination name plus sorted rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordReport {
    /// Destination name as given by the user; appears verbatim in the title
    pub destination: String,
    pub rows: Vec<ReportRow>,
}

impl WordReport {
    /// Build a report from a frequency map, sorting rows alphabetically
    pub fn from_counts(destination: impl Into<String>, counts: &FrequencyMap) -> Self {
        let mut rows: Vec<ReportRow> = counts
            .iter()
            .map(|(word, count)| ReportRow {
                word: word.to_string(),
                count,
            })
            .collect();
        rows.sort_by(|a, b| alpha_order(&a.word, &b.word));

        Self {
            destination: destination.into(),
            rows,
        }
    }

    /// The fixed title template, used for both `<title>` and `<h2>`
    pub fn title(&self) -> String {
        format!("<Words Counted in {}>", self.destination)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Alphabetical report order: case-insensitive comparison first, exact
/// comparison as the tie-break for case-only duplicates.
pub fn alpha_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
