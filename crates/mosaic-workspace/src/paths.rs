//! Window id to tree path bookkeeping.

use std::collections::HashMap;

use mosaic_common::WindowId;
use mosaic_tiling::MosaicPath;

/// Where each rendered window sat in the layout on the last render pass.
///
/// Cleared and refilled by every render; read when windows are removed
/// to address their leaves.
#[derive(Debug, Clone, Default)]
pub struct PathTable {
    paths: HashMap<WindowId, MosaicPath>,
}

impl PathTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, id: WindowId, path: MosaicPath) {
        self.paths.insert(id, path);
    }

    pub fn get(&self, id: &WindowId) -> Option<&MosaicPath> {
        self.paths.get(id)
    }

    pub fn clear(&mut self) {
        self.paths.clear();
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
