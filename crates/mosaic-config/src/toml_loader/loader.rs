//! Reading config files.

use std::path::Path;

use mosaic_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};
use crate::schema::MosaicConfig;
use crate::validation;

/// Parse config TOML. Absent sections and keys take their defaults.
pub fn parse_config(content: &str) -> Result<MosaicConfig, ConfigError> {
    toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("invalid config TOML: {e}")))
}

/// Load the config at `path`.
///
/// Out-of-range values are only warned about here; `crate::load_config`
/// rejects them.
pub fn load_from_path(path: &Path) -> Result<MosaicConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("cannot read {}: {e}", path.display())),
    })?;
    let config = parse_config(&content)?;

    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), "{e}");
    }
    info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Load the config at the platform default path, writing the default
/// file first when there is none.
pub fn load_default() -> Result<MosaicConfig, ConfigError> {
    let path = default_config_path()?;
    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            create_default_config(&path)?;
            Ok(MosaicConfig::default())
        }
        other => other,
    }
}
