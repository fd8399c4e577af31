//! Commit aggregate type
//!
//! A `Commit` aggregates every `LineRecord` sharing one commit id. The
//! aggregator is the only producer of commits; once the collection is
//! built it is never mutated, and all filtering produces derived
//! sequences.

use std::fmt;

use chrono::{DateTime, FixedOffset, Timelike};
use serde::{Deserialize, Serialize};

use super::LineRecord;

/// Aggregate of all line records sharing a commit identity
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Commit {
    /// Commit identifier
    pub id: String,

    /// Browse URL for the commit
    pub url: String,

    /// Author, taken from the commit's first line record
    pub author: String,

    /// Commit timestamp
    pub datetime: DateTime<FixedOffset>,

    /// Hour of day plus minute fraction, in `[0, 24)`
    pub hour_frac: f64,

    /// Number of line records owned by this commit
    pub total_lines: usize,

    /// Owned back-reference to the commit's line records. Excluded from
    /// serialization and from `Debug` output so diagnostic dumps stay
    /// readable; use the field directly for aggregation.
    #[serde(skip)]
    pub lines: Vec<LineRecord>,
}

impl Commit {
    /// Compute the `[0, 24)` hour fraction for a timestamp
    pub fn hour_frac_of(datetime: &DateTime<FixedOffset>) -> f64 {
        f64::from(datetime.hour()) + f64::from(datetime.minute()) / 60.0
    }

    /// Whether the commit falls in the daytime window `[6, 18)`
    pub fn is_daytime(&self) -> bool {
        (6.0..18.0).contains(&self.hour_frac)
    }

    /// Number of distinct files touched by this commit
    pub fn file_count(&self) -> usize {
        let mut files: Vec<&str> = self.lines.iter().map(|l| l.file.as_str()).collect();
        files.sort_unstable();
        files.dedup();
        files.len()
    }
}

// Manual Debug keeps the line back-reference out of log output.
impl fmt::Debug for Commit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Commit")
            .field("id", &self.id)
            .field("author", &self.author)
            .field("datetime", &self.datetime)
            .field("hour_frac", &self.hour_frac)
            .field("total_lines", &self.total_lines)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit_at(rfc3339: &str) -> Commit {
        let datetime = DateTime::parse_from_rfc3339(rfc3339).unwrap();
        Commit {
            id: "abc123".to_string(),
            url: "https://github.com/mantra-dev/commit-lens/commit/abc123".to_string(),
            author: "boyang".to_string(),
            hour_frac: Commit::hour_frac_of(&datetime),
            datetime,
            total_lines: 3,
            lines: vec![
                LineRecord {
                    file: "src/main.js".to_string(),
                    kind: "js".to_string(),
                    line: 1,
                    depth: 0,
                    length: 10,
                    commit_id: "abc123".to_string(),
                    author: "boyang".to_string(),
                    datetime: Some(datetime),
                },
                LineRecord {
                    file: "style.css".to_string(),
                    kind: "css".to_string(),
                    line: 4,
                    depth: 1,
                    length: 22,
                    commit_id: "abc123".to_string(),
                    author: "boyang".to_string(),
                    datetime: Some(datetime),
                },
            ],
        }
    }

    #[test]
    fn test_hour_frac_range() {
        let commit = commit_at("2024-03-05T14:30:00+08:00");
        assert_eq!(commit.hour_frac, 14.5);

        let midnight = commit_at("2024-03-05T00:00:00+08:00");
        assert_eq!(midnight.hour_frac, 0.0);

        let late = commit_at("2024-03-05T23:59:00+08:00");
        assert!(late.hour_frac < 24.0);
    }

    #[test]
    fn test_daytime_window() {
        assert!(commit_at("2024-03-05T06:00:00+08:00").is_daytime());
        assert!(commit_at("2024-03-05T17:59:00+08:00").is_daytime());
        assert!(!commit_at("2024-03-05T18:00:00+08:00").is_daytime());
        assert!(!commit_at("2024-03-05T02:15:00+08:00").is_daytime());
    }

    #[test]
    fn test_lines_hidden_from_serialization_and_debug() {
        let commit = commit_at("2024-03-05T14:30:00+08:00");

        let json = serde_json::to_string(&commit).unwrap();
        assert!(!json.contains("main.js"));
        assert!(json.contains("\"total_lines\":3"));

        let debug = format!("{:?}", commit);
        assert!(!debug.contains("main.js"));
        assert!(debug.contains("abc123"));
    }

    #[test]
    fn test_file_count_dedupes() {
        let commit = commit_at("2024-03-05T14:30:00+08:00");
        assert_eq!(commit.file_count(), 2);
    }
}
