//! Mosaic configuration system.
//!
//! Provides TOML-based configuration for the workspace mosaic. All
//! sections use defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mosaic_config::{config_to_json, load_config};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{MosaicConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use mosaic_common::ConfigError;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default file is created from the documented template if missing.
/// The result is validated; any out-of-range value is an error.
pub fn load_config(path: Option<&Path>) -> Result<MosaicConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &MosaicConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&MosaicConfig::default());
        assert!(json.contains("\"layout\""));
        assert!(json.contains("\"tiles\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn load_config_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[layout]\ngap = 500\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("layout.gap"));
    }

    #[test]
    fn load_config_reads_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[tiles]\ntoolbar_controls = [\"expand\"]\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.tiles.toolbar_controls.len(), 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = MosaicConfig::default();
        let json = config_to_json(&config);
        let parsed: MosaicConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.layout.gap, config.layout.gap);
        assert_eq!(parsed.logging.level, config.logging.level);
    }
}
