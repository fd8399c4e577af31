//! Analytics type definitions
//!
//! Contains the aggregation result and the summary statistics shown in
//! the dashboard's summary card.

use serde::{Deserialize, Serialize};

use crate::models::Commit;

/// Placeholder rendered for metrics that have no value on an empty
/// subset
pub const EMPTY_VALUE: &str = "—";

/// Result of aggregating the flat dataset into commits
#[derive(Debug, Clone, Default)]
pub struct AggregateResult {
    /// Commits sorted ascending by datetime
    pub commits: Vec<Commit>,

    /// Ids of commit groups excluded because their first record had no
    /// parsable timestamp. Reported as a count discrepancy, never as a
    /// failure.
    pub dropped_commits: Vec<String>,
}

impl AggregateResult {
    /// Number of commits excluded from the sorted sequence
    pub fn dropped_count(&self) -> usize {
        self.dropped_commits.len()
    }
}

/// Summary counters derived from the currently filtered dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SummaryStats {
    /// Total lines of code in the filtered subset
    pub total_lines: usize,

    /// Number of commits in the filtered subset
    pub total_commits: usize,

    /// Number of distinct files touched
    pub file_count: usize,

    /// Maximum nesting depth observed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<u32>,

    /// Longest line length observed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longest_line: Option<u32>,

    /// Maximum line number observed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<u32>,
}

/// One labeled metric in the summary card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SummaryItem {
    /// Display label
    pub label: String,

    /// Formatted value, `—` when the metric has no value
    pub value: String,
}

impl SummaryStats {
    /// The fixed, ordered list of labeled metrics for display
    pub fn labeled(&self) -> Vec<SummaryItem> {
        let opt = |value: Option<u32>| {
            value.map_or_else(|| EMPTY_VALUE.to_string(), |v| v.to_string())
        };
        vec![
            SummaryItem {
                label: "COMMITS".to_string(),
                value: self.total_commits.to_string(),
            },
            SummaryItem {
                label: "FILES".to_string(),
                value: self.file_count.to_string(),
            },
            SummaryItem {
                label: "TOTAL LOC".to_string(),
                value: self.total_lines.to_string(),
            },
            SummaryItem {
                label: "MAX DEPTH".to_string(),
                value: opt(self.max_depth),
            },
            SummaryItem {
                label: "LONGEST LINE".to_string(),
                value: opt(self.longest_line),
            },
            SummaryItem {
                label: "MAX LINES".to_string(),
                value: opt(self.max_lines),
            },
        ]
    }
}
