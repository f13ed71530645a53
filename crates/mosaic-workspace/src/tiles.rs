//! Rendered output of the mosaic.

use std::fmt;

use mosaic_common::{Rect, ToolbarControl, Window, WindowId, WorkspaceId};
use mosaic_tiling::MosaicPath;

/// Identity of a tile's content. Includes the workspace id so a new
/// workspace remounts every window.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TileKey {
    pub window_id: WindowId,
    pub workspace_id: WorkspaceId,
}

impl fmt::Display for TileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.window_id, self.workspace_id)
    }
}

/// Renders what goes inside a tile.
pub trait TileContent {
    type Output;

    /// What is shown while the tile is being dragged.
    fn render_preview(&self, window_id: &WindowId) -> Self::Output;

    fn render_window(&self, key: &TileKey, window: &Window) -> Self::Output;
}

/// One bordered tile of the mosaic.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile<T> {
    pub window_id: WindowId,
    pub path: MosaicPath,
    pub key: TileKey,
    pub rect: Rect,
    pub toolbar_controls: Vec<ToolbarControl>,
    pub preview: T,
    pub content: T,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MosaicView<T> {
    /// Nothing to lay out.
    ZeroState { text: String },
    Tiles(Vec<Tile<T>>),
}

impl<T> MosaicView<T> {
    pub fn tiles(&self) -> &[Tile<T>] {
        match self {
            MosaicView::ZeroState { .. } => &[],
            MosaicView::Tiles(tiles) => tiles,
        }
    }

    pub fn is_zero_state(&self) -> bool {
        matches!(self, MosaicView::ZeroState { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_key_joins_window_and_workspace() {
        let key = TileKey {
            window_id: WindowId::from("w1"),
            workspace_id: WorkspaceId::from("ws9"),
        };
        assert_eq!(key.to_string(), "w1-ws9");
    }

    #[test]
    fn zero_state_has_no_tiles() {
        let view: MosaicView<()> = MosaicView::ZeroState { text: String::new() };
        assert!(view.is_zero_state());
        assert!(view.tiles().is_empty());
    }
}
