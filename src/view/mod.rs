//! Per-view models
//!
//! Each view model turns the currently filtered subset into declarative
//! display data for the renderer: scatter points with a keyed diff, the
//! file composition groups, the brush selection breakdown and the
//! per-commit tooltip payload. View models never draw and never mutate
//! the filtered data.

pub mod files;
pub mod scatter;
pub mod selection;
pub mod tooltip;


pub use files::{FileDisplay, FileGroup, FileUnitModel, UnitMarker};
pub use scatter::{AxisSpec, PointSpec, ScatterModel, ScatterUpdate};
pub use selection::{BreakdownEntry, BrushRect, SelectionView};
pub use tooltip::TooltipPayload;
