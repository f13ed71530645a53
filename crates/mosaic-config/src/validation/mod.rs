//! Configuration validation.
//!
//! Checks numeric ranges and collects every error into a single
//! `ConfigError`.

mod helpers;
mod layout;


use crate::schema::MosaicConfig;
use mosaic_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &MosaicConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    layout::validate_layout(&mut errors, &config.layout);
    validate_tiles(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_tiles(errors: &mut Vec<String>, config: &MosaicConfig) {
    let controls = &config.tiles.toolbar_controls;
    for (i, control) in controls.iter().enumerate() {
        if controls[..i].contains(control) {
            errors.push(format!("tiles.toolbar_controls lists {control:?} more than once"));
        }
    }
}
