//! Shared time-horizon filter state
//!
//! `FilterState` is the single owner of the dashboard's filtering
//! state: the slider progress, the horizon timestamp and the
//! progress-to-time scale. Views read derived subsets from it; only the
//! engine mutates it, through `set_progress` and `set_horizon`. Both
//! representations are kept consistent on every mutation.

use chrono::{DateTime, FixedOffset};
use tracing::debug;

use crate::analytics::EMPTY_VALUE;
use crate::models::{Commit, LineRecord};
use crate::scale::TimeScale;

/// Owner of progress, horizon and the global time scale
#[derive(Debug)]
pub struct FilterState {
    commits: Vec<Commit>,
    scale: Option<TimeScale>,
    progress: f64,
    horizon: Option<DateTime<FixedOffset>>,
}

impl FilterState {
    /// Take ownership of the sorted commit collection and establish the
    /// time scale over its full range. The scale is never rebuilt.
    pub fn new(commits: Vec<Commit>, initial_progress: f64) -> Self {
        let scale = match (commits.first(), commits.last()) {
            (Some(first), Some(last)) => Some(TimeScale::new(first.datetime, last.datetime)),
            _ => None,
        };
        let progress = initial_progress.clamp(0.0, 100.0);
        let horizon = scale.as_ref().map(|s| s.invert(progress));
        Self {
            commits,
            scale,
            progress,
            horizon,
        }
    }

    /// The full sorted commit collection
    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    /// Commit bound to a narrative step index
    pub fn commit_at(&self, index: usize) -> Option<&Commit> {
        self.commits.get(index)
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn horizon(&self) -> Option<DateTime<FixedOffset>> {
        self.horizon
    }

    /// Move the horizon by slider progress
    pub fn set_progress(&mut self, progress: f64) {
        self.progress = progress.clamp(0.0, 100.0);
        if let Some(scale) = &self.scale {
            self.horizon = Some(scale.invert(self.progress));
        }
        debug!(progress = self.progress, "progress changed");
    }

    /// Move the horizon to a timestamp directly, keeping progress
    /// consistent. Entry point for the scroll cursor.
    pub fn set_horizon(&mut self, horizon: DateTime<FixedOffset>) {
        if let Some(scale) = &self.scale {
            self.progress = scale.scale(&horizon);
        }
        self.horizon = Some(horizon);
        debug!(progress = self.progress, "horizon changed");
    }

    /// Commits at or before the horizon. The collection is sorted, so
    /// this is a prefix found by binary search.
    pub fn filtered_commits(&self) -> &[Commit] {
        match self.horizon {
            Some(horizon) => {
                let end = self.commits.partition_point(|c| c.datetime <= horizon);
                &self.commits[..end]
            }
            None => &[],
        }
    }

    /// Line records of the filtered commits, in commit order
    pub fn filtered_lines(&self) -> impl Iterator<Item = &LineRecord> {
        self.filtered_commits().iter().flat_map(|c| c.lines.iter())
    }

    /// Horizon in `long date, short time` style, a dash when no data is
    /// loaded
    pub fn horizon_label(&self) -> String {
        match self.horizon {
            Some(horizon) => horizon.format("%B %-d, %Y %-I:%M %p").to_string(),
            None => EMPTY_VALUE.to_string(),
        }
    }
}
