//! Integration tests for the dashboard engine
//!
//! A recording renderer captures every instruction the engine emits so
//! the tests can assert on cascade ordering and on the final display
//! state without a real surface.

use std::collections::HashMap;

use chrono::DateTime;

use crate::analytics::SummaryItem;
use crate::config::EngineConfig;
use crate::models::LineRecord;
use crate::render::Renderer;
use crate::view::{AxisSpec, BrushRect, FileDisplay, PointSpec, SelectionView, TooltipPayload};

use super::{DashboardEngine, InputEvent, NarrativeStep};

#[derive(Default)]
struct RecordingRenderer {
    ops: Vec<String>,
    summary: Vec<SummaryItem>,
    points: HashMap<String, PointSpec>,
    selected: HashMap<String, bool>,
    selection: Option<SelectionView>,
    tooltip: Option<TooltipPayload>,
    slider: Option<(f64, String)>,
    file_names: Vec<String>,
    narrative_len: usize,
}

impl Renderer for RecordingRenderer {
    fn sync_slider(&mut self, progress: f64, horizon_label: &str) {
        self.ops.push("slider".to_string());
        self.slider = Some((progress, horizon_label.to_string()));
    }

    fn render_summary(&mut self, items: &[SummaryItem]) {
        self.ops.push("summary".to_string());
        self.summary = items.to_vec();
    }

    fn render_axes(&mut self, _axes: &AxisSpec) {
        self.ops.push("axes".to_string());
    }

    fn enter_point(&mut self, point: &PointSpec) {
        self.ops.push(format!("enter:{}", point.id));
        self.points.insert(point.id.clone(), point.clone());
    }

    fn update_point(&mut self, point: &PointSpec) {
        self.ops.push(format!("update:{}", point.id));
        self.points.insert(point.id.clone(), point.clone());
    }

    fn exit_point(&mut self, id: &str) {
        self.ops.push(format!("exit:{id}"));
        self.points.remove(id);
        self.selected.remove(id);
    }

    fn render_files(&mut self, display: &FileDisplay) {
        self.ops.push("files".to_string());
        self.file_names = display.groups.iter().map(|g| g.name.clone()).collect();
    }

    fn render_selection(&mut self, selection: &SelectionView) {
        self.ops.push("selection".to_string());
        self.selection = Some(selection.clone());
    }

    fn set_point_selected(&mut self, id: &str, selected: bool) {
        self.selected.insert(id.to_string(), selected);
    }

    fn render_tooltip(&mut self, tooltip: Option<&TooltipPayload>) {
        self.ops
            .push(if tooltip.is_some() { "tooltip:show" } else { "tooltip:hide" }.to_string());
        self.tooltip = tooltip.cloned();
    }

    fn render_narrative(&mut self, steps: &[NarrativeStep]) {
        self.ops.push("narrative".to_string());
        self.narrative_len = steps.len();
    }
}

fn records_for(commit_id: &str, rfc3339: &str, kinds: &[&str]) -> Vec<LineRecord> {
    let datetime = DateTime::parse_from_rfc3339(rfc3339).ok();
    kinds
        .iter()
        .enumerate()
        .map(|(i, kind)| LineRecord {
            file: format!("src/{commit_id}.{kind}"),
            kind: kind.to_string(),
            line: i as u32 + 1,
            depth: i as u32,
            length: (i as u32 + 1) * 8,
            commit_id: commit_id.to_string(),
            author: "boyang".to_string(),
            datetime,
        })
        .collect()
}

/// Three commits at 10:00, 14:30 and 23:15 with 5, 12 and 3 lines
fn scenario_records() -> Vec<LineRecord> {
    let mut records = records_for("morning", "2024-03-05T10:00:00+08:00", &["js"; 5]);
    records.extend(records_for("afternoon", "2024-03-05T14:30:00+08:00", &["js"; 12]));
    records.extend(records_for("night", "2024-03-05T23:15:00+08:00", &["css"; 3]));
    records
}

fn engine() -> DashboardEngine<RecordingRenderer> {
    DashboardEngine::new(
        scenario_records(),
        &EngineConfig::default(),
        RecordingRenderer::default(),
    )
}

fn summary_value(renderer: &RecordingRenderer, label: &str) -> String {
    renderer
        .summary
        .iter()
        .find(|i| i.label == label)
        .map(|i| i.value.clone())
        .unwrap_or_default()
}

#[test]
fn test_initial_render_shows_everything() {
    let engine = engine();
    let renderer = engine.renderer();

    assert_eq!(renderer.narrative_len, 3);
    assert_eq!(renderer.points.len(), 3);
    assert_eq!(summary_value(renderer, "COMMITS"), "3");
    assert_eq!(summary_value(renderer, "TOTAL LOC"), "20");
    assert_eq!(renderer.slider.as_ref().unwrap().0, 100.0);
}

#[test]
fn test_cascade_runs_in_mandated_order() {
    let mut engine = engine();
    engine.renderer_mut().ops.clear();

    engine.handle_event(InputEvent::SliderChanged { progress: 50.0 });

    let ops = &engine.renderer().ops;
    let index_of = |name: &str| ops.iter().position(|o| o == name).unwrap();
    assert!(index_of("slider") < index_of("summary"));
    assert!(index_of("summary") < index_of("axes"));
    assert!(index_of("axes") < index_of("files"));
    // Every point instruction sits between the axes and the file view
    for (i, op) in ops.iter().enumerate() {
        if op.starts_with("enter") || op.starts_with("update") || op.starts_with("exit") {
            assert!(i > index_of("axes") && i < index_of("files"));
        }
    }
}

#[test]
fn test_scroll_step_drives_the_horizon() {
    let mut engine = engine();
    engine.handle_event(InputEvent::StepEntered { index: 1 });

    let ids: Vec<&str> = engine
        .filtered_commits()
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(ids, vec!["morning", "afternoon"]);
    assert_eq!(engine.summary().total_lines, 17);
    assert_eq!(engine.renderer().points.len(), 2);
}

#[test]
fn test_scroll_step_matches_equivalent_slider_change() {
    let mut by_step = engine();
    by_step.handle_event(InputEvent::StepEntered { index: 1 });

    let mut by_slider = engine();
    by_slider.handle_event(InputEvent::SliderChanged {
        progress: by_step.progress(),
    });

    assert_eq!(
        by_step
            .filtered_commits()
            .iter()
            .map(|c| c.id.as_str())
            .collect::<Vec<_>>(),
        by_slider
            .filtered_commits()
            .iter()
            .map(|c| c.id.as_str())
            .collect::<Vec<_>>()
    );
    assert_eq!(by_step.summary(), by_slider.summary());
    assert_eq!(by_step.renderer().summary, by_slider.renderer().summary);
}

#[test]
fn test_horizon_before_earliest_commit_is_the_zero_state() {
    let mut engine = engine();
    engine.set_horizon(DateTime::parse_from_rfc3339("2024-03-05T09:00:00+08:00").unwrap());

    assert!(engine.filtered_commits().is_empty());
    let renderer = engine.renderer();
    assert!(renderer.points.is_empty());
    assert!(renderer.file_names.is_empty());
    assert_eq!(summary_value(renderer, "COMMITS"), "0");
    assert_eq!(summary_value(renderer, "TOTAL LOC"), "0");
    assert_eq!(summary_value(renderer, "MAX DEPTH"), "—");

    let selection = engine.selection();
    assert_eq!(selection.label, "No commits selected");
}

#[test]
fn test_repeated_event_is_idempotent() {
    let mut engine = engine();
    engine.handle_event(InputEvent::SliderChanged { progress: 50.0 });
    let first_ids: Vec<String> = engine
        .filtered_commits()
        .iter()
        .map(|c| c.id.clone())
        .collect();
    let first_summary = engine.summary().clone();

    engine.handle_event(InputEvent::SliderChanged { progress: 50.0 });
    let second_ids: Vec<String> = engine
        .filtered_commits()
        .iter()
        .map(|c| c.id.clone())
        .collect();

    assert_eq!(first_ids, second_ids);
    assert_eq!(&first_summary, engine.summary());
}

#[test]
fn test_brush_selects_a_single_commit() {
    let mut engine = engine();
    let (x, y) = engine.point_position("afternoon").unwrap();
    engine.handle_event(InputEvent::BrushChanged {
        rect: Some(BrushRect::new(x - 1.0, y - 1.0, x + 1.0, y + 1.0)),
    });

    let selection = engine.renderer().selection.clone().unwrap();
    assert_eq!(selection.label, "1 commits selected");
    let total: usize = selection.breakdown.iter().map(|e| e.count).sum();
    assert_eq!(total, 12);
    assert_eq!(selection.breakdown[0].language, "js");
    assert_eq!(selection.breakdown[0].percent, "100%");

    assert_eq!(engine.renderer().selected.get("afternoon"), Some(&true));
    assert_eq!(engine.renderer().selected.get("morning"), Some(&false));
}

#[test]
fn test_clearing_the_brush_clears_everything() {
    let mut engine = engine();
    engine.handle_event(InputEvent::BrushChanged {
        rect: Some(BrushRect::new(0.0, 0.0, 1000.0, 600.0)),
    });
    assert_eq!(
        engine.renderer().selection.as_ref().unwrap().label,
        "3 commits selected"
    );

    engine.handle_event(InputEvent::BrushChanged { rect: None });
    let selection = engine.renderer().selection.clone().unwrap();
    assert_eq!(selection.label, "No commits selected");
    assert!(selection.breakdown.is_empty());
    assert!(engine.renderer().selected.values().all(|s| !s));
}

#[test]
fn test_brush_reads_the_latest_filtered_subset() {
    let mut engine = engine();
    let everything = BrushRect::new(0.0, 0.0, 1000.0, 600.0);
    engine.handle_event(InputEvent::BrushChanged {
        rect: Some(everything),
    });
    assert_eq!(
        engine.renderer().selection.as_ref().unwrap().label,
        "3 commits selected"
    );

    // Shrink the horizon, then brush again over the same area
    engine.handle_event(InputEvent::StepEntered { index: 0 });
    engine.handle_event(InputEvent::BrushChanged {
        rect: Some(everything),
    });
    assert_eq!(
        engine.renderer().selection.as_ref().unwrap().label,
        "1 commits selected"
    );
}

#[test]
fn test_hover_produces_a_tooltip() {
    let mut engine = engine();
    engine.handle_event(InputEvent::PointerEntered {
        commit_id: "afternoon".to_string(),
    });
    let tooltip = engine.renderer().tooltip.clone().unwrap();
    assert_eq!(tooltip.commit_id, "afternoon");
    assert_eq!(tooltip.total_lines, 12);
    assert_eq!(tooltip.time, "02:30 PM");

    engine.handle_event(InputEvent::PointerLeft);
    assert!(engine.renderer().tooltip.is_none());
}

#[test]
fn test_hover_outside_the_filtered_subset_hides_the_tooltip() {
    let mut engine = engine();
    engine.handle_event(InputEvent::StepEntered { index: 0 });
    engine.handle_event(InputEvent::PointerEntered {
        commit_id: "night".to_string(),
    });
    assert!(engine.renderer().tooltip.is_none());
}

#[test]
fn test_step_without_commit_is_ignored() {
    let mut engine = engine();
    let before: Vec<String> = engine
        .filtered_commits()
        .iter()
        .map(|c| c.id.clone())
        .collect();
    engine.handle_event(InputEvent::StepEntered { index: 99 });
    let after: Vec<String> = engine
        .filtered_commits()
        .iter()
        .map(|c| c.id.clone())
        .collect();
    assert_eq!(before, after);
}

#[test]
fn test_commits_without_timestamps_are_reported_not_fatal() {
    let mut records = scenario_records();
    records.extend(records_for("broken", "not-a-date", &["js", "js"]));

    let engine = DashboardEngine::new(
        records,
        &EngineConfig::default(),
        RecordingRenderer::default(),
    );
    assert_eq!(engine.dropped_commits(), &["broken".to_string()]);
    assert_eq!(engine.filtered_commits().len(), 3);
    // The flat dataset still carries the broken rows
    assert_eq!(engine.dataset().len(), 22);
}

#[test]
fn test_empty_dataset_renders_the_zero_state() {
    let engine = DashboardEngine::new(
        records_for("broken", "not-a-date", &["js"]),
        &EngineConfig::default(),
        RecordingRenderer::default(),
    );
    let renderer = engine.renderer();
    assert!(renderer.points.is_empty());
    assert_eq!(summary_value(renderer, "COMMITS"), "0");
    assert_eq!(summary_value(renderer, "LONGEST LINE"), "—");
    assert_eq!(renderer.slider.as_ref().unwrap().1, "—");
    assert_eq!(renderer.narrative_len, 0);
}
