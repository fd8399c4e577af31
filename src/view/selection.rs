//! Brush selection engine
//!
//! Given a selection rectangle in screen coordinates, computes which of
//! the currently visible commits fall inside it and aggregates their
//! line records into the per-language breakdown. The selection is
//! independent of the time horizon: it always reads whatever subset the
//! scatter most recently rendered.

use serde::{Deserialize, Serialize};

use crate::models::Commit;

use super::ScatterModel;

/// Label shown when nothing is selected
pub const NO_SELECTION_LABEL: &str = "No commits selected";

/// Screen-space selection rectangle, corners in any order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BrushRect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl BrushRect {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Corner-ordered copy with `(x0, y0)` at the minimum
    pub fn normalized(&self) -> Self {
        Self {
            x0: self.x0.min(self.x1),
            y0: self.y0.min(self.y1),
            x1: self.x0.max(self.x1),
            y1: self.y0.max(self.y1),
        }
    }

    /// Axis-aligned containment, edges inclusive
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let r = self.normalized();
        r.x0 <= x && x <= r.x1 && r.y0 <= y && y <= r.y1
    }
}

/// One language's share of the selected lines
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BreakdownEntry {
    /// Category tag of the lines
    pub language: String,

    /// Number of selected lines with this tag
    pub count: usize,

    /// Share of the selection, formatted to one decimal place with
    /// trailing zeros trimmed
    pub percent: String,
}

/// Display state of the current brush selection
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SelectionView {
    /// Ids of the selected commits, for per-point styling
    pub selected_ids: Vec<String>,

    /// `<n> commits selected` or the no-selection label
    pub label: String,

    /// Per-language counts and percentages. Empty when nothing is
    /// selected; the view clears instead of rendering zero entries.
    pub breakdown: Vec<BreakdownEntry>,
}

impl SelectionView {
    /// Compute the selection over the currently rendered subset.
    ///
    /// `None` means no rectangle exists (brush cleared); the result is
    /// then the empty zero-state.
    pub fn compute(rect: Option<&BrushRect>, commits: &[Commit], scatter: &ScatterModel) -> Self {
        let selected: Vec<&Commit> = match rect {
            Some(rect) => commits
                .iter()
                .filter(|commit| {
                    scatter
                        .position_of(commit)
                        .is_some_and(|(x, y)| rect.contains(x, y))
                })
                .collect(),
            None => Vec::new(),
        };

        if selected.is_empty() {
            return Self {
                label: NO_SELECTION_LABEL.to_string(),
                ..Self::default()
            };
        }

        let total_lines: usize = selected.iter().map(|c| c.lines.len()).sum();

        // Group selected lines by language, first-seen order
        let mut languages: Vec<(String, usize)> = Vec::new();
        for line in selected.iter().flat_map(|c| c.lines.iter()) {
            match languages.iter_mut().find(|(kind, _)| *kind == line.kind) {
                Some((_, count)) => *count += 1,
                None => languages.push((line.kind.clone(), 1)),
            }
        }

        let breakdown = languages
            .into_iter()
            .map(|(language, count)| BreakdownEntry {
                percent: format_percent(count as f64 / total_lines as f64),
                language,
                count,
            })
            .collect();

        Self {
            selected_ids: selected.iter().map(|c| c.id.clone()).collect(),
            label: format!("{} commits selected", selected.len()),
            breakdown,
        }
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.selected_ids.is_empty()
    }
}

/// Format a proportion as a percentage with one decimal place,
/// trimming a trailing `.0`
pub fn format_percent(proportion: f64) -> String {
    let formatted = format!("{:.1}", proportion * 100.0);
    let trimmed = formatted.strip_suffix(".0").unwrap_or(&formatted);
    format!("{trimmed}%")
}
