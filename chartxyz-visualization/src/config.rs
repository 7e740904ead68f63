//! Chart configuration

use crate::context::{Justification, Pen, TextProperty};
use chartxyz_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which transform moves points into the space the clip planes live in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipSpace {
    /// The full point transform, zoom included. Zooming in pushes points out
    /// of the fixed box and they are clipped.
    #[default]
    PointTransform,
    /// The point transform with zoom left out. Clipping ignores zoom.
    Unscaled,
}

/// Appearance and interaction settings for an
/// [`InteractiveChartXyz`](crate::InteractiveChartXyz)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub point_pen: Pen,
    pub selected_pen: Pen,
    pub axis_pen: Pen,
    pub label_text: TextProperty,
    /// Gap between the box and an axis title, in pixels
    pub label_offset: f32,
    /// Degrees of rotation for a drag across the whole viewport
    pub rotate_sensitivity: f64,
    /// Zoom factor for a drag across the whole viewport height
    pub zoom_drag_base: f64,
    /// Wheel notches needed to double (or halve) the zoom
    pub wheel_notches_per_doubling: f64,
    pub clip_space: ClipSpace,
    pub interactive: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            point_pen: Pen::new([0, 0, 0, 255], 5.0),
            selected_pen: Pen::new([255, 50, 0, 150], 6.0),
            axis_pen: Pen::new([0, 0, 0, 255], 1.0),
            label_text: TextProperty {
                justification: Justification::Left,
                ..TextProperty::default()
            },
            label_offset: 5.0,
            rotate_sensitivity: 200.0,
            zoom_drag_base: 4.0,
            wheel_notches_per_doubling: 10.0,
            clip_space: ClipSpace::PointTransform,
            interactive: true,
        }
    }
}

impl ChartConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidData(format!("chart config: {}", e)))
    }

    /// Load a JSON config file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        log::debug!(target: "chartxyz", "loaded chart config from {}", path.display());
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::InvalidData(format!("chart config: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let config =
            ChartConfig::from_json_str(r#"{ "clip_space": "unscaled", "interactive": false }"#).unwrap();
        assert_eq!(config.clip_space, ClipSpace::Unscaled);
        assert!(!config.interactive);
        assert_eq!(config.wheel_notches_per_doubling, 10.0);
        assert_eq!(config.axis_pen, ChartConfig::default().axis_pen);
    }

    #[test]
    fn test_json_file_round_trip() {
        let path = "test_chart_config.json";
        let mut config = ChartConfig::default();
        config.point_pen.width = 3.0;
        config.clip_space = ClipSpace::Unscaled;
        std::fs::write(path, config.to_json_string().unwrap()).unwrap();
        let loaded = ChartConfig::from_json_file(path).unwrap();
        let _ = std::fs::remove_file(path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_malformed_json_is_invalid_data() {
        let err = ChartConfig::from_json_str("{ \"rotate_sensitivity\": \"fast\" }").unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }
}
