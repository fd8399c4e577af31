//! Dashboard engine
//!
//! The reactive controller tying everything together. The engine owns
//! the filter state and the view models, consumes input events and
//! keeps every dependent view consistent through one synchronous update
//! cascade.
//!
//! ## Ordering
//!
//! When the horizon changes, from either the slider or a scroll step,
//! the cascade always runs: filtered subsets, summary counters, scatter
//! (axis scales rebuilt), file composition. A handler completes its
//! whole cascade before returning, so no observer ever sees a partially
//! updated subset. The brush selection is independent: it re-derives
//! from whatever subset is rendered at the moment the brush event
//! arrives.

pub mod events;
pub mod filter;
pub mod narrative;

#[cfg(test)]
mod tests;

pub use events::InputEvent;
pub use filter::FilterState;
pub use narrative::NarrativeStep;

use chrono::{DateTime, FixedOffset};
use tracing::{debug, warn};

use crate::analytics::{aggregate_commits, compute_summary, SummaryStats};
use crate::config::EngineConfig;
use crate::error::AppError;
use crate::loader::LocParser;
use crate::models::{Commit, LineRecord};
use crate::render::Renderer;
use crate::view::{BrushRect, FileUnitModel, ScatterModel, SelectionView, TooltipPayload};

/// Reactive controller for the commit-history dashboard
pub struct DashboardEngine<R: Renderer> {
    renderer: R,
    records: Vec<LineRecord>,
    dropped_commits: Vec<String>,
    filter: FilterState,
    scatter: ScatterModel,
    files: FileUnitModel,
    steps: Vec<NarrativeStep>,
    brush: Option<BrushRect>,
    summary: SummaryStats,
}

impl<R: Renderer> DashboardEngine<R> {
    /// Build the engine from a loaded dataset and render the initial
    /// state (all commits visible by default).
    pub fn new(records: Vec<LineRecord>, config: &EngineConfig, renderer: R) -> Self {
        let aggregated = aggregate_commits(&records, &config.repo_base_url);
        let filter = FilterState::new(aggregated.commits, config.initial_progress);
        let steps = narrative::steps(filter.commits());

        let mut engine = Self {
            renderer,
            records,
            dropped_commits: aggregated.dropped_commits,
            filter,
            scatter: ScatterModel::new(&config.layout, config.radius_range),
            files: FileUnitModel::new(),
            steps,
            brush: None,
            summary: SummaryStats::default(),
        };
        engine.renderer.render_narrative(&engine.steps);
        engine.run_cascade();
        engine
    }

    /// Load the dataset from a CSV file and build the engine
    pub fn from_csv_file(
        path: impl AsRef<std::path::Path>,
        config: &EngineConfig,
        renderer: R,
    ) -> Result<Self, AppError> {
        let records = LocParser::new().parse_file(path)?;
        Ok(Self::new(records, config, renderer))
    }

    /// Consume one input event. The handler runs its full cascade
    /// before returning.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::SliderChanged { progress } => {
                self.filter.set_progress(progress);
                self.run_cascade();
            }
            InputEvent::StepEntered { index } => match self.filter.commit_at(index) {
                Some(commit) => {
                    let horizon = commit.datetime;
                    self.set_horizon(horizon);
                }
                None => warn!(index, "scroll step without a bound commit"),
            },
            InputEvent::BrushChanged { rect } => {
                self.brush = rect;
                self.apply_selection();
            }
            InputEvent::PointerEntered { commit_id } => {
                let payload = self
                    .filter
                    .filtered_commits()
                    .iter()
                    .find(|c| c.id == commit_id)
                    .map(TooltipPayload::for_commit);
                self.renderer.render_tooltip(payload.as_ref());
            }
            InputEvent::PointerMoved => {}
            InputEvent::PointerLeft => self.renderer.render_tooltip(None),
        }
    }

    /// Move the horizon to a timestamp and cascade. Scroll steps funnel
    /// through here; it produces the identical cascade as a slider
    /// change.
    pub fn set_horizon(&mut self, horizon: DateTime<FixedOffset>) {
        self.filter.set_horizon(horizon);
        self.run_cascade();
    }

    /// The mandated update order: filtered subsets, summary, scatter,
    /// file composition.
    fn run_cascade(&mut self) {
        let commits = self.filter.filtered_commits();
        debug!(filtered = commits.len(), "running update cascade");

        self.renderer
            .sync_slider(self.filter.progress(), &self.filter.horizon_label());

        self.summary = compute_summary(self.filter.filtered_lines(), commits.len());
        self.renderer.render_summary(&self.summary.labeled());

        let update = self.scatter.update(commits);
        self.renderer.render_axes(&update.axes);
        for id in &update.diff.exit {
            self.renderer.exit_point(id);
        }
        for point in &update.diff.enter {
            self.renderer.enter_point(point);
        }
        for point in &update.diff.update {
            self.renderer.update_point(point);
        }

        let lines: Vec<&LineRecord> = self.filter.filtered_lines().collect();
        let display = self.files.update(lines);
        self.renderer.render_files(&display);
    }

    /// Recompute the brush selection over the currently rendered subset
    fn apply_selection(&mut self) {
        let view = SelectionView::compute(
            self.brush.as_ref(),
            self.filter.filtered_commits(),
            &self.scatter,
        );
        for point in self.scatter.points() {
            self.renderer
                .set_point_selected(&point.id, view.selected_ids.contains(&point.id));
        }
        self.renderer.render_selection(&view);
    }

    /// Commits currently within the horizon
    pub fn filtered_commits(&self) -> &[Commit] {
        self.filter.filtered_commits()
    }

    /// Summary of the last cascade
    pub fn summary(&self) -> &SummaryStats {
        &self.summary
    }

    /// Current selection state, derived on demand
    pub fn selection(&self) -> SelectionView {
        SelectionView::compute(
            self.brush.as_ref(),
            self.filter.filtered_commits(),
            &self.scatter,
        )
    }

    /// Narrative steps, one per commit
    pub fn narrative_steps(&self) -> &[NarrativeStep] {
        &self.steps
    }

    /// Plotted position of a visible commit under the current scales
    pub fn point_position(&self, commit_id: &str) -> Option<(f64, f64)> {
        self.filter
            .filtered_commits()
            .iter()
            .find(|c| c.id == commit_id)
            .and_then(|c| self.scatter.position_of(c))
    }

    /// The flat dataset, including rows excluded from aggregation
    pub fn dataset(&self) -> &[LineRecord] {
        &self.records
    }

    /// Commit ids excluded because their timestamp never parsed
    pub fn dropped_commits(&self) -> &[String] {
        &self.dropped_commits
    }

    pub fn progress(&self) -> f64 {
        self.filter.progress()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
