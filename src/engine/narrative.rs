//! Narrative step texts
//!
//! The scrollytelling column shows one step per commit, in ascending
//! time order; scrolling a step into view drives the time horizon. The
//! step index doubles as the opaque identifier reported back by the
//! scroll observer.

use serde::Serialize;

use crate::models::Commit;

/// Display data for one narrative step
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct NarrativeStep {
    /// Step index, equal to the commit's position in time order
    pub index: usize,

    /// Commit this step is bound to
    pub commit_id: String,

    /// Browse URL for the commit link
    pub url: String,

    /// `long date, short time` label of the commit
    pub when: String,

    /// Lines edited in the commit
    pub total_lines: usize,

    /// Distinct files touched by the commit
    pub file_count: usize,
}

impl NarrativeStep {
    /// The step's story sentence
    pub fn sentence(&self) -> String {
        format!(
            "On {}, I edited {} lines across {} files.",
            self.when, self.total_lines, self.file_count
        )
    }
}

/// Build the 1:1 step list for the sorted commit collection
pub fn steps(commits: &[Commit]) -> Vec<NarrativeStep> {
    commits
        .iter()
        .enumerate()
        .map(|(index, commit)| NarrativeStep {
            index,
            commit_id: commit.id.clone(),
            url: commit.url.clone(),
            when: commit.datetime.format("%B %-d, %Y %-I:%M %p").to_string(),
            total_lines: commit.total_lines,
            file_count: commit.file_count(),
        })
        .collect()
}
