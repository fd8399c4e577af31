//! Scatter view model
//!
//! Computes per-commit visual encodings (position, radius, color) for
//! the commits-by-time-of-day scatter and diffs each render against the
//! previous one, keyed by commit id. A commit present in both subsets
//! is an update that repositions in place; only genuinely new and
//! removed commits enter and exit.
//!
//! Scale policy: the x axis re-nices to the filtered extent on every
//! update, the y axis is fixed to the 24-hour day, and the radius is a
//! square-root encoding so visual area tracks line count.

use serde::Serialize;

use crate::config::{ChartLayout, UsableArea};
use crate::models::Commit;
use crate::reconcile::{reconcile, KeyedDiff};
use crate::scale::{LinearScale, PixelTimeScale, SqrtScale};

/// Fill for commits in the daytime window `[6, 18)`
pub const DAY_COLOR: &str = "#ffb347";
/// Fill for nighttime commits
pub const NIGHT_COLOR: &str = "#4682b4";
/// Resting fill opacity of scatter points
pub const FILL_OPACITY: f64 = 0.7;

/// Declarative description of one scatter point
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PointSpec {
    /// Commit id, the diff key
    pub id: String,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: String,
    pub fill_opacity: f64,
}

/// Axis ticks and gridlines for the current filtered window
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AxisSpec {
    /// x positions and labels along the time axis
    pub x_ticks: Vec<(f64, String)>,
    /// y positions and `HH:00` labels for the hour axis
    pub y_ticks: Vec<(f64, String)>,
    /// Width of the horizontal gridlines
    pub gridline_width: f64,
}

/// One scatter recomputation: the keyed point diff plus rebuilt axes
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterUpdate {
    pub diff: KeyedDiff<PointSpec>,
    pub axes: AxisSpec,
}

/// Stateful scatter model holding the scales of the last render
#[derive(Debug)]
pub struct ScatterModel {
    area: UsableArea,
    radius_range: (f64, f64),
    x: Option<PixelTimeScale>,
    y: LinearScale,
    r: Option<SqrtScale>,
    prev_keys: Vec<String>,
    points: Vec<PointSpec>,
}

impl ScatterModel {
    pub fn new(layout: &ChartLayout, radius_range: (f64, f64)) -> Self {
        let area = layout.usable();
        Self {
            area,
            radius_range,
            x: None,
            y: LinearScale::new((0.0, 24.0), (area.bottom, area.top)),
            r: None,
            prev_keys: Vec::new(),
            points: Vec::new(),
        }
    }

    /// Recompute encodings for a freshly filtered subset.
    ///
    /// Points are emitted in descending `total_lines` order so large
    /// circles are laid down first and do not occlude small ones.
    pub fn update(&mut self, commits: &[Commit]) -> ScatterUpdate {
        if commits.is_empty() {
            self.x = None;
            self.r = None;
            self.points.clear();
            let (diff, keys) = reconcile(&self.prev_keys, Vec::new(), |p: &PointSpec| p.id.clone());
            self.prev_keys = keys;
            return ScatterUpdate {
                diff,
                axes: AxisSpec::default(),
            };
        }

        let fallback = commits[0].datetime;
        let min_time = commits.iter().map(|c| c.datetime).min().unwrap_or(fallback);
        let max_time = commits.iter().map(|c| c.datetime).max().unwrap_or(fallback);
        let x = PixelTimeScale::new(min_time, max_time, (self.area.left, self.area.right)).nice();

        let min_lines = commits.iter().map(|c| c.total_lines).min().unwrap_or(0) as f64;
        let max_lines = commits.iter().map(|c| c.total_lines).max().unwrap_or(0) as f64;
        let r = SqrtScale::new((min_lines, max_lines), self.radius_range);

        let mut ordered: Vec<&Commit> = commits.iter().collect();
        ordered.sort_by(|a, b| b.total_lines.cmp(&a.total_lines));

        self.points = ordered
            .iter()
            .map(|commit| PointSpec {
                id: commit.id.clone(),
                cx: x.scale(&commit.datetime),
                cy: self.y.scale(commit.hour_frac),
                radius: r.scale(commit.total_lines as f64),
                fill: fill_for(commit).to_string(),
                fill_opacity: FILL_OPACITY,
            })
            .collect();

        let axes = AxisSpec {
            x_ticks: x.ticks(8),
            y_ticks: (0..=24)
                .step_by(2)
                .map(|h| (self.y.scale(f64::from(h)), format!("{:02}:00", h % 24)))
                .collect(),
            gridline_width: self.area.width(),
        };

        self.x = Some(x);
        self.r = Some(r);

        let (diff, keys) = reconcile(&self.prev_keys, self.points.clone(), |p| p.id.clone());
        self.prev_keys = keys;
        ScatterUpdate { diff, axes }
    }

    /// Plotted position of a commit under the current scales, `None`
    /// before the first non-empty render
    pub fn position_of(&self, commit: &Commit) -> Option<(f64, f64)> {
        self.x
            .as_ref()
            .map(|x| (x.scale(&commit.datetime), self.y.scale(commit.hour_frac)))
    }

    /// Points of the current render, in draw order
    pub fn points(&self) -> &[PointSpec] {
        &self.points
    }
}

fn fill_for(commit: &Commit) -> &'static str {
    if commit.is_daytime() {
        DAY_COLOR
    } else {
        NIGHT_COLOR
    }
}
