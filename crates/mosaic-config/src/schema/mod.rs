//! Configuration schema types for the mosaic.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod layout;
mod system;
mod tiles;

pub use layout::*;
pub use system::*;
pub use tiles::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MosaicConfig {
    pub layout: LayoutConfig,
    pub tiles: TileConfig,
    pub logging: LoggingConfig,
}
