//! Renderer seam
//!
//! The core never draws. It emits declarative, keyed instructions to a
//! [`Renderer`] supplied by the embedding shell (SVG, canvas, a test
//! recorder). Animated transitions are entirely the renderer's concern:
//! the core only ever emits current targets, so an instruction arriving
//! mid-transition replaces the visual target without touching model
//! state.

use crate::analytics::SummaryItem;
use crate::engine::NarrativeStep;
use crate::view::{AxisSpec, FileDisplay, PointSpec, SelectionView, TooltipPayload};

/// Display surface driven by the dashboard engine
pub trait Renderer {
    /// Reflect the current progress and horizon label on the slider
    fn sync_slider(&mut self, progress: f64, horizon_label: &str);

    /// Replace the summary card metrics
    fn render_summary(&mut self, items: &[SummaryItem]);

    /// Replace the scatter axes and gridlines
    fn render_axes(&mut self, axes: &AxisSpec);

    /// Create a scatter point. Conventionally drawn at radius zero and
    /// grown to the target radius.
    fn enter_point(&mut self, point: &PointSpec);

    /// Move an existing point to its new position and radius
    fn update_point(&mut self, point: &PointSpec);

    /// Shrink a point to radius zero and remove it
    fn exit_point(&mut self, id: &str);

    /// Replace the file composition rows
    fn render_files(&mut self, display: &FileDisplay);

    /// Replace the selection count and language breakdown
    fn render_selection(&mut self, selection: &SelectionView);

    /// Toggle the selected styling of one point
    fn set_point_selected(&mut self, id: &str, selected: bool);

    /// Show a commit tooltip, or hide it with `None`
    fn render_tooltip(&mut self, tooltip: Option<&TooltipPayload>);

    /// Populate the narrative column; called once at startup
    fn render_narrative(&mut self, steps: &[NarrativeStep]);
}
