//! Engine configuration
//!
//! Tuning knobs an embedding shell may override: chart geometry, the
//! circle radius range and the repository URL commits link to. All
//! fields have working defaults matching the reference dashboard.

use serde::{Deserialize, Serialize};

/// Chart geometry in pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 600.0,
            margin_top: 20.0,
            margin_right: 20.0,
            margin_bottom: 40.0,
            margin_left: 60.0,
        }
    }
}

/// Plot area remaining inside the margins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsableArea {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl UsableArea {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

impl ChartLayout {
    /// Compute the plot area inside the margins
    pub fn usable(&self) -> UsableArea {
        UsableArea {
            left: self.margin_left,
            right: self.width - self.margin_right,
            top: self.margin_top,
            bottom: self.height - self.margin_bottom,
        }
    }
}

/// Dashboard engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct EngineConfig {
    /// Prefix commit ids are appended to for browse URLs
    pub repo_base_url: String,

    /// Scatter chart geometry
    pub layout: ChartLayout,

    /// Minimum and maximum circle radius in pixels
    pub radius_range: (f64, f64),

    /// Initial slider progress; 100 shows the full history
    pub initial_progress: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            repo_base_url: "https://github.com/your-name/your-repo/commit/".to_string(),
            layout: ChartLayout::default(),
            radius_range: (2.0, 30.0),
            initial_progress: 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_area() {
        let area = ChartLayout::default().usable();
        assert_eq!(area.left, 60.0);
        assert_eq!(area.right, 980.0);
        assert_eq!(area.top, 20.0);
        assert_eq!(area.bottom, 560.0);
        assert_eq!(area.width(), 920.0);
        assert_eq!(area.height(), 540.0);
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());

        let config: EngineConfig =
            serde_json::from_str(r#"{"initial_progress": 40.0}"#).unwrap();
        assert_eq!(config.initial_progress, 40.0);
        assert_eq!(config.layout, ChartLayout::default());
    }
}
