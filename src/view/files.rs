//! File composition view model
//!
//! Groups the currently filtered lines by file and emits one unit
//! marker per line, colored by the line's category. Files are ordered
//! largest first. Grouping is keyed by file path and diffed against the
//! previous render so unrelated files keep their existing markers when
//! the filtered set changes.

use serde::Serialize;

use crate::models::LineRecord;
use crate::reconcile::{reconcile, KeyedDiff};
use crate::scale::OrdinalScale;

/// One line's marker in a file's unit row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct UnitMarker {
    /// Category tag of the line
    pub kind: String,

    /// Palette color assigned to the tag
    pub color: String,
}

/// One file's row in the composition diagram
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileGroup {
    /// File path, the diff key
    pub name: String,

    /// Number of filtered lines in the file
    pub line_count: usize,

    /// One marker per line, in record order
    pub units: Vec<UnitMarker>,
}

/// One recomputation of the file view
#[derive(Debug, Clone, PartialEq)]
pub struct FileDisplay {
    /// All groups, largest file first
    pub groups: Vec<FileGroup>,

    /// Diff against the previous render, keyed by file path
    pub diff: KeyedDiff<FileGroup>,
}

/// Stateful file view model. The color scale persists across renders
/// so a category keeps its color for the whole session.
#[derive(Debug, Default)]
pub struct FileUnitModel {
    colors: OrdinalScale,
    prev_keys: Vec<String>,
}

impl FileUnitModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-group the filtered lines into file rows.
    ///
    /// Files are sorted by descending line count; ties keep first-seen
    /// order.
    pub fn update<'a>(&mut self, lines: impl IntoIterator<Item = &'a LineRecord>) -> FileDisplay {
        let mut files: Vec<(String, Vec<&'a LineRecord>)> = Vec::new();
        for line in lines {
            match files.iter_mut().find(|(name, _)| *name == line.file) {
                Some((_, members)) => members.push(line),
                None => files.push((line.file.clone(), vec![line])),
            }
        }
        files.sort_by(|a, b| b.1.len().cmp(&a.1.len()));

        let groups: Vec<FileGroup> = files
            .into_iter()
            .map(|(name, members)| FileGroup {
                name,
                line_count: members.len(),
                units: members
                    .iter()
                    .map(|line| UnitMarker {
                        kind: line.kind.clone(),
                        color: self.colors.color(&line.kind).to_string(),
                    })
                    .collect(),
            })
            .collect();

        let (diff, keys) = reconcile(&self.prev_keys, groups.clone(), |g| g.name.clone());
        self.prev_keys = keys;
        FileDisplay { groups, diff }
    }
}
