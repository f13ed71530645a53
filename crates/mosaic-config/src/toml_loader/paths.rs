//! Where the config file lives, and writing the default one.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use mosaic_common::ConfigError;
use tracing::{debug, info};

use super::template::DEFAULT_CONFIG_TOML;

const APP_DIR: &str = "mosaic";
const CONFIG_FILE: &str = "config.toml";

/// `<platform config dir>/mosaic/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

fn io_error(action: &str, path: &Path, e: std::io::Error) -> ConfigError {
    ConfigError::ParseError(format!("cannot {action} {}: {e}", path.display()))
}

/// Write the documented default config to `path`, creating parent
/// directories. An existing file is left untouched.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_error("create", parent, e))?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!(path = %path.display(), "config exists, not overwriting");
            return Ok(());
        }
        Err(e) => return Err(io_error("create", path, e)),
    };
    file.write_all(DEFAULT_CONFIG_TOML.as_bytes())
        .map_err(|e| io_error("write", path, e))?;

    info!(path = %path.display(), "created default config");
    Ok(())
}
