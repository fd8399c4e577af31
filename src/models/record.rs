//! Line record type definitions
//!
//! One `LineRecord` is one line of source code as observed in one commit
//! of the analyzed repository. Records are immutable once loaded; every
//! derived view works on borrowed or cloned records, never on mutation.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One observed line of code with its file, category and commit association
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LineRecord {
    /// Path of the file this line belongs to
    pub file: String,

    /// Category tag, usually the language or extension (js, css, html)
    #[serde(rename = "type")]
    pub kind: String,

    /// 1-based line number within the file
    pub line: u32,

    /// Nesting depth of the line
    pub depth: u32,

    /// Character count of the line
    pub length: u32,

    /// Identifier of the commit that produced this observation
    pub commit_id: String,

    /// Author of the owning commit
    pub author: String,

    /// Commit timestamp. `None` when the source row carried an
    /// unparsable timestamp; such records stay in the flat dataset but
    /// are excluded from any datetime-ordered aggregation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime: Option<DateTime<FixedOffset>>,
}

impl LineRecord {
    /// Whether this record can participate in time-ordered aggregation
    pub fn has_valid_datetime(&self) -> bool {
        self.datetime.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LineRecord {
        LineRecord {
            file: "src/main.js".to_string(),
            kind: "js".to_string(),
            line: 12,
            depth: 2,
            length: 48,
            commit_id: "abc123".to_string(),
            author: "boyang".to_string(),
            datetime: DateTime::parse_from_rfc3339("2024-03-05T14:30:00+08:00").ok(),
        }
    }

    #[test]
    fn test_serializes_type_field_name() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"type\":\"js\""));
        assert!(!json.contains("kind"));
    }

    #[test]
    fn test_invalid_datetime_is_flagged() {
        let mut record = sample();
        assert!(record.has_valid_datetime());
        record.datetime = None;
        assert!(!record.has_valid_datetime());
    }
}
