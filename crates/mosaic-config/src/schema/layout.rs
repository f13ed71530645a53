//! Mosaic layout configuration types.

use mosaic_tiling::{LayoutEngine, SplitDirection};
use serde::{Deserialize, Serialize};

/// Mosaic layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Gap between tiles in pixels (valid range: 0-40).
    pub gap: u32,
    /// Padding around the mosaic in pixels (valid range: 0-80).
    pub outer_padding: u32,
    /// Minimum tile extent in pixels (valid range: 0.0-1000.0).
    pub min_tile_size: f64,
    /// Percentage points per keyboard resize step (valid range: 1-50).
    pub resize_step: u32,
    /// Direction of the root split for generated layouts.
    pub start_direction: SplitDirection,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            gap: 4,
            outer_padding: 0,
            min_tile_size: 50.0,
            resize_step: 5,
            start_direction: SplitDirection::Row,
        }
    }
}

impl LayoutConfig {
    pub fn engine(&self) -> LayoutEngine {
        LayoutEngine {
            gap: self.gap as f64,
            outer_padding: self.outer_padding as f64,
            min_tile_size: self.min_tile_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_config_defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.gap, 4);
        assert_eq!(config.outer_padding, 0);
        assert!((config.min_tile_size - 50.0).abs() < f64::EPSILON);
        assert_eq!(config.resize_step, 5);
        assert_eq!(config.start_direction, SplitDirection::Row);
    }

    #[test]
    fn layout_config_partial_toml() {
        let toml_str = r#"
gap = 12
start_direction = "column"
"#;
        let config: LayoutConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gap, 12);
        assert_eq!(config.start_direction, SplitDirection::Column);
        // Defaults preserved
        assert_eq!(config.outer_padding, 0);
        assert_eq!(config.resize_step, 5);
    }

    #[test]
    fn engine_mirrors_config() {
        let config = LayoutConfig {
            gap: 8,
            outer_padding: 16,
            min_tile_size: 32.0,
            ..LayoutConfig::default()
        };
        let engine = config.engine();
        assert_eq!(engine.gap, 8.0);
        assert_eq!(engine.outer_padding, 16.0);
        assert_eq!(engine.min_tile_size, 32.0);
    }
}
