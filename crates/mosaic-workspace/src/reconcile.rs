//! Deciding whether the layout still fits the open windows.

use std::collections::HashSet;

use mosaic_common::{WindowId, WindowMap};
use mosaic_tiling::{create_balanced_tree, MosaicLayout, MosaicNode, SplitDirection};
use tracing::debug;

/// Outcome of comparing a layout against the open windows.
#[derive(Debug, Clone, PartialEq)]
pub enum Reconciled {
    /// Every window already has a leaf; keep the layout as it is.
    Unchanged,
    /// A freshly generated tree covering every window.
    Rebuilt(MosaicNode),
}

impl Reconciled {
    /// The layout to display: `current` when unchanged, else the new tree.
    pub fn into_layout(self, current: &MosaicLayout) -> MosaicLayout {
        match self {
            Reconciled::Unchanged => current.clone(),
            Reconciled::Rebuilt(tree) => tree.into(),
        }
    }
}

/// Compare `layout` with `windows` and generate a new layout if some
/// window has no leaf.
///
/// New windows are not placed next to existing tiles: any missing
/// window rebuilds a balanced tree over all window ids in sorted order.
pub fn determine_workspace_layout(
    windows: &WindowMap,
    layout: &MosaicLayout,
    start_direction: SplitDirection,
) -> Reconciled {
    let leaves: HashSet<WindowId> = layout.leaves().into_iter().collect();
    if windows.keys().all(|id| leaves.contains(id)) {
        return Reconciled::Unchanged;
    }

    let ids: Vec<WindowId> = windows.keys().cloned().collect();
    if leaves.is_empty() {
        debug!(windows = ids.len(), "no layout yet, generating a balanced one");
    } else {
        debug!(
            windows = ids.len(),
            leaves = leaves.len(),
            "windows without tiles, rebuilding layout"
        );
    }

    match create_balanced_tree(&ids, start_direction) {
        Some(tree) => Reconciled::Rebuilt(tree),
        None => Reconciled::Unchanged,
    }
}
