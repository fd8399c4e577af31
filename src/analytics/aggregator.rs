//! Aggregation logic
//!
//! Functions for grouping line records into commits and computing the
//! summary counters over a filtered subset.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::models::{Commit, LineRecord};

use super::{AggregateResult, SummaryStats};

/// Group line records into the sorted commit collection.
///
/// Records are grouped by commit id in first-seen order; the first
/// record of each group supplies the commit's author and timestamp
/// (every record of a commit shares these by construction). The result
/// is stable-sorted ascending by datetime, so commits sharing a
/// timestamp keep their first-seen order.
///
/// A group whose first record has no parsable timestamp is excluded
/// from the sorted sequence and reported in
/// [`AggregateResult::dropped_commits`].
///
/// # Arguments
/// * `records` - the full flat dataset
/// * `repo_base_url` - prefix the commit id is appended to for the
///   commit's browse URL
pub fn aggregate_commits(records: &[LineRecord], repo_base_url: &str) -> AggregateResult {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<LineRecord>> = HashMap::new();

    for record in records {
        if !groups.contains_key(&record.commit_id) {
            order.push(record.commit_id.clone());
        }
        groups
            .entry(record.commit_id.clone())
            .or_default()
            .push(record.clone());
    }

    let mut result = AggregateResult::default();

    for id in order {
        let lines = groups.remove(&id).unwrap_or_default();
        let first = match lines.first() {
            Some(first) => first,
            None => continue,
        };
        let datetime = match first.datetime {
            Some(datetime) => datetime,
            None => {
                warn!(commit = %id, "commit dropped, first record has no timestamp");
                result.dropped_commits.push(id);
                continue;
            }
        };
        result.commits.push(Commit {
            url: format!("{repo_base_url}{id}"),
            id,
            author: first.author.clone(),
            hour_frac: Commit::hour_frac_of(&datetime),
            datetime,
            total_lines: lines.len(),
            lines,
        });
    }

    // Stable sort keeps first-seen order for equal timestamps
    result.commits.sort_by_key(|c| c.datetime);
    result
}

/// Compute the summary counters over a filtered subset.
///
/// The maxima are `None` on an empty subset so the view can render
/// placeholder dashes instead of zeros that were never observed.
pub fn compute_summary<'a>(
    lines: impl IntoIterator<Item = &'a LineRecord>,
    commit_count: usize,
) -> SummaryStats {
    let mut stats = SummaryStats {
        total_commits: commit_count,
        ..Default::default()
    };
    let mut files: HashSet<&str> = HashSet::new();

    for line in lines {
        stats.total_lines += 1;
        files.insert(line.file.as_str());
        stats.max_depth = Some(stats.max_depth.unwrap_or(0).max(line.depth));
        stats.longest_line = Some(stats.longest_line.unwrap_or(0).max(line.length));
        stats.max_lines = Some(stats.max_lines.unwrap_or(0).max(line.line));
    }

    stats.file_count = files.len();
    stats
}
