//! Render pass: tile production and path bookkeeping.

use mosaic_common::{Rect, WindowId};
use mosaic_tiling::MosaicPath;
use tracing::debug;

use crate::sink::LayoutSink;
use crate::tiles::{MosaicView, Tile, TileContent, TileKey};

use super::WorkspaceMosaic;

impl<S: LayoutSink> WorkspaceMosaic<S> {
    /// Lay out and render every tile within `viewport`.
    ///
    /// Rebuilds the path table from the displayed layout. Leaves whose
    /// window is unknown render nothing.
    pub fn render<C: TileContent>(&mut self, content: &C, viewport: Rect) -> MosaicView<C::Output> {
        self.window_paths.clear();

        let layout = self.displayed_layout();
        let Some(root) = layout.root() else {
            return MosaicView::ZeroState {
                text: self.settings.zero_state_text.clone(),
            };
        };

        let placed = self.settings.engine.compute(root, viewport);
        let tiles = placed
            .into_iter()
            .filter_map(|tile| self.render_tile(content, &tile.id, tile.path, tile.rect))
            .collect();
        MosaicView::Tiles(tiles)
    }

    /// Render the tile for window `id` at `path`, recording the path.
    /// Returns `None` when the window is not open.
    pub fn render_tile<C: TileContent>(
        &mut self,
        content: &C,
        id: &WindowId,
        path: MosaicPath,
        rect: Rect,
    ) -> Option<Tile<C::Output>> {
        let Some(window) = self.props.windows.get(id) else {
            debug!(window = %id, "no window for tile, rendering nothing");
            return None;
        };

        let key = TileKey {
            window_id: window.id.clone(),
            workspace_id: self.props.workspace.id.clone(),
        };
        let tile = Tile {
            window_id: window.id.clone(),
            path: path.clone(),
            preview: content.render_preview(&window.id),
            content: content.render_window(&key, window),
            key,
            rect,
            toolbar_controls: self.settings.toolbar_controls.clone(),
        };
        self.window_paths.record(window.id.clone(), path);
        Some(tile)
    }
}
