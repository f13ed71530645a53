//! Forwarding user layout edits to application state.

use mosaic_common::{ToolbarControl, WindowId};
use mosaic_tiling::{Branch, MosaicEdit, MosaicLayout};
use tracing::{debug, warn};

use crate::sink::LayoutSink;

use super::WorkspaceMosaic;

/// Share of each enclosing split an expanded tile takes.
const EXPAND_PERCENTAGE: f64 = 70.0;

impl<S: LayoutSink> WorkspaceMosaic<S> {
    /// Forward a layout produced by direct interaction, unchanged.
    pub fn mosaic_change(&mut self, layout: MosaicLayout) {
        debug!(leaves = layout.leaves().len(), "mosaic changed");
        self.push(layout);
    }

    /// Resolve `edit` against the displayed layout and forward the result.
    /// Returns `false` if the edit does not apply.
    pub fn apply_edit(&mut self, edit: &MosaicEdit) -> bool {
        match edit.apply(&self.displayed_layout()) {
            Ok(layout) => {
                self.mosaic_change(layout);
                true
            }
            Err(e) => {
                warn!(?edit, "dropping layout edit: {e}");
                false
            }
        }
    }

    /// Run a toolbar control of the tile showing `window_id`.
    pub fn toolbar_action(&mut self, window_id: &WindowId, control: ToolbarControl) -> bool {
        let Some(path) = self.window_paths.get(window_id).cloned() else {
            warn!(window = %window_id, "toolbar action on a tile that was not rendered");
            return false;
        };
        let edit = match control {
            ToolbarControl::Expand => MosaicEdit::Expand {
                path,
                percentage: EXPAND_PERCENTAGE,
            },
            ToolbarControl::Hide => MosaicEdit::Hide { path },
            ToolbarControl::Remove => MosaicEdit::Remove { path },
        };
        self.apply_edit(&edit)
    }

    /// Grow (or shrink) the tile of `window_id` by one resize step within
    /// its parent split.
    pub fn resize_tile(&mut self, window_id: &WindowId, grow: bool) -> bool {
        let Some(path) = self.window_paths.get(window_id) else {
            return false;
        };
        let (Some(parent), Some(branch)) = (path.parent(), path.last()) else {
            return false;
        };
        let step = if grow {
            self.settings.resize_step
        } else {
            -self.settings.resize_step
        };
        let delta = match branch {
            Branch::First => step,
            Branch::Second => -step,
        };
        self.apply_edit(&MosaicEdit::ResizeBy { path: parent, delta })
    }
}
