//! Mount and props-update handling: reconciling after windows come and go.

use mosaic_common::WindowId;
use mosaic_tiling::{create_remove_update, update_tree, MosaicLayout, MosaicNode, MosaicPath};
use tracing::{debug, warn};

use crate::props::MosaicProps;
use crate::reconcile::determine_workspace_layout;
use crate::sink::LayoutSink;

use super::WorkspaceMosaic;

impl<S: LayoutSink> WorkspaceMosaic<S> {
    /// Called once when the mosaic is first shown. Pushes the layout to
    /// display unless there is nothing to show.
    pub fn did_mount(&mut self) {
        let layout = determine_workspace_layout(
            &self.props.windows,
            &self.props.workspace.layout,
            self.settings.start_direction,
        )
        .into_layout(&self.props.workspace.layout);
        if !layout.is_empty() {
            debug!(leaves = layout.leaves().len(), "pushing initial layout");
            self.push(layout);
        }
    }

    /// Replace the props and react to the difference.
    pub fn set_props(&mut self, props: MosaicProps) {
        let prev = std::mem::replace(&mut self.props, props);
        self.did_update(&prev);
    }

    /// Reconcile after a props change.
    ///
    /// Removed windows are pruned from the layout (or the layout is reset
    /// to empty when none remain); added windows trigger a rebuild. At most
    /// one layout is pushed.
    pub fn did_update(&mut self, prev: &MosaicProps) {
        let windows = &self.props.windows;
        let removed: Vec<WindowId> = prev
            .windows
            .keys()
            .filter(|id| !windows.contains_key(*id))
            .cloned()
            .collect();
        let added = windows.keys().any(|id| !prev.windows.contains_key(id));
        if removed.is_empty() && !added {
            return;
        }

        if !removed.is_empty() && windows.is_empty() {
            debug!(removed = removed.len(), "all windows removed, clearing layout");
            self.push(MosaicLayout::empty());
            return;
        }

        let current = self.props.workspace.layout.clone();
        let pruned = if removed.is_empty() {
            current.clone()
        } else {
            self.remove_windows(&current, &removed)
        };
        let next =
            determine_workspace_layout(&self.props.windows, &pruned, self.settings.start_direction)
                .into_layout(&pruned);

        if next != current {
            debug!(
                removed = removed.len(),
                added,
                leaves = next.leaves().len(),
                "pushing reconciled layout"
            );
            self.push(next);
        }
    }

    /// Remove the leaves of `removed` from `layout` as one batch.
    fn remove_windows(&self, layout: &MosaicLayout, removed: &[WindowId]) -> MosaicLayout {
        let Some(root) = layout.root() else {
            return MosaicLayout::empty();
        };

        let mut updates = Vec::with_capacity(removed.len());
        for id in removed {
            let Some(path) = self.removal_path(root, id) else {
                continue;
            };
            if path.is_empty() {
                // The removed window was the only tile.
                return MosaicLayout::empty();
            }
            match create_remove_update(root, &path) {
                Ok(update) => updates.push(update),
                Err(e) => warn!(window = %id, "skipping removal: {e}"),
            }
        }

        match update_tree(root, &updates) {
            Ok(tree) => MosaicLayout::from(tree),
            Err(e) => {
                warn!("failed to apply window removals: {e}");
                layout.clone()
            }
        }
    }

    /// Path of `id`'s leaf: the one recorded on the last render when it
    /// still points at that leaf, otherwise found by searching the tree.
    fn removal_path(&self, root: &MosaicNode, id: &WindowId) -> Option<MosaicPath> {
        if let Some(path) = self.window_paths.get(id) {
            if root.node_at_path(path).and_then(MosaicNode::as_leaf) == Some(id) {
                return Some(path.clone());
            }
        }
        match root.path_of(id) {
            Some(path) => {
                warn!(
                    window = %id,
                    "no current recorded path for removed window, located it in the tree"
                );
                Some(path)
            }
            None => {
                debug!(window = %id, "removed window has no tile");
                None
            }
        }
    }
}
