//! Per-commit tooltip payload
//!
//! Display strings supplied to the renderer when the pointer enters a
//! scatter point. Formatting happens here so the renderer only places
//! text.

use serde::Serialize;

use crate::models::Commit;

/// Author shown when the dataset carries no author for a commit
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Hover payload for one commit
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TooltipPayload {
    /// Commit id, also the link text
    pub commit_id: String,

    /// Browse URL for the commit
    pub url: String,

    /// Full-format date, `Tuesday, March 5, 2024`
    pub date: String,

    /// Short-format time, `02:30 PM`
    pub time: String,

    /// Author name, `Unknown` when absent
    pub author: String,

    /// Total line count of the commit
    pub total_lines: usize,
}

impl TooltipPayload {
    pub fn for_commit(commit: &Commit) -> Self {
        Self {
            commit_id: commit.id.clone(),
            url: commit.url.clone(),
            date: commit.datetime.format("%A, %B %-d, %Y").to_string(),
            time: commit.datetime.format("%I:%M %p").to_string(),
            author: if commit.author.trim().is_empty() {
                UNKNOWN_AUTHOR.to_string()
            } else {
                commit.author.clone()
            },
            total_lines: commit.total_lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;

    fn commit(author: &str) -> Commit {
        let datetime = DateTime::parse_from_rfc3339("2024-03-05T14:30:00+08:00").unwrap();
        Commit {
            id: "abc123".to_string(),
            url: "https://github.com/mantra-dev/commit-lens/commit/abc123".to_string(),
            author: author.to_string(),
            hour_frac: Commit::hour_frac_of(&datetime),
            datetime,
            total_lines: 17,
            lines: Vec::new(),
        }
    }

    #[test]
    fn test_formats_display_strings() {
        let tooltip = TooltipPayload::for_commit(&commit("boyang"));
        assert_eq!(tooltip.date, "Tuesday, March 5, 2024");
        assert_eq!(tooltip.time, "02:30 PM");
        assert_eq!(tooltip.author, "boyang");
        assert_eq!(tooltip.total_lines, 17);
    }

    #[test]
    fn test_blank_author_falls_back_to_unknown() {
        let tooltip = TooltipPayload::for_commit(&commit("  "));
        assert_eq!(tooltip.author, UNKNOWN_AUTHOR);
    }
}
