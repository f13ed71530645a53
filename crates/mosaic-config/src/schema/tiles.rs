//! Tile chrome configuration.

use mosaic_common::ToolbarControl;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TileConfig {
    /// Controls shown in every tile's toolbar. Empty by default.
    pub toolbar_controls: Vec<ToolbarControl>,
    /// Text of the view shown when the workspace has no windows.
    pub zero_state_text: String,
}
