//! Inputs of the mosaic, as held by application state.

use mosaic_common::{WindowMap, WorkspaceId};
use mosaic_tiling::MosaicLayout;
use serde::{Deserialize, Serialize};

/// A state file without a workspace id gets a fresh one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    #[serde(default)]
    pub id: WorkspaceId,
    #[serde(default)]
    pub layout: MosaicLayout,
}

impl Workspace {
    pub fn new(id: impl Into<WorkspaceId>) -> Self {
        Self {
            id: id.into(),
            layout: MosaicLayout::empty(),
        }
    }

    pub fn with_layout(mut self, layout: impl Into<MosaicLayout>) -> Self {
        self.layout = layout.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MosaicProps {
    #[serde(default)]
    pub windows: WindowMap,
    #[serde(default)]
    pub workspace: Workspace,
}
