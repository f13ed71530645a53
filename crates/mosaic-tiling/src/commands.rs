//! User-level layout edits and their resolution into tree updates.

use mosaic_common::{TreeError, WindowId};

use crate::tree::{
    create_drag_to_updates, create_expand_update, create_hide_update, create_remove_update,
    update_tree, DropPosition, MosaicLayout, MosaicNode, MosaicPath, MosaicSplit, MosaicUpdate,
    SplitDirection,
};

#[derive(Debug, Clone, PartialEq)]
pub enum MosaicEdit {
    /// Drag a split's divider to an absolute percentage.
    Resize { path: MosaicPath, split_percentage: f64 },
    /// Nudge a split's divider by `delta` percentage points.
    ResizeBy { path: MosaicPath, delta: f64 },
    Expand { path: MosaicPath, percentage: f64 },
    Hide { path: MosaicPath },
    DragTo {
        source: MosaicPath,
        destination: MosaicPath,
        position: DropPosition,
    },
    Remove { path: MosaicPath },
    /// Split the tile at `path`, the new window taking the `second` half.
    Split {
        path: MosaicPath,
        new_leaf: WindowId,
        direction: SplitDirection,
    },
}

impl MosaicEdit {
    /// The tree updates this edit stands for, resolved against `root`.
    pub fn updates(&self, root: &MosaicNode) -> Result<Vec<MosaicUpdate>, TreeError> {
        match self {
            MosaicEdit::Resize {
                path,
                split_percentage,
            } => Ok(vec![MosaicUpdate::SplitPercentage {
                path: path.clone(),
                percentage: *split_percentage,
            }]),
            MosaicEdit::ResizeBy { path, delta } => {
                let split = split_at(root, path)?;
                Ok(vec![MosaicUpdate::SplitPercentage {
                    path: path.clone(),
                    percentage: split.percentage() + delta,
                }])
            }
            MosaicEdit::Expand { path, percentage } => Ok(create_expand_update(path, *percentage)),
            MosaicEdit::Hide { path } => Ok(vec![create_hide_update(root, path)?]),
            MosaicEdit::DragTo {
                source,
                destination,
                position,
            } => create_drag_to_updates(root, source, destination, *position),
            MosaicEdit::Remove { path } => Ok(vec![create_remove_update(root, path)?]),
            MosaicEdit::Split {
                path,
                new_leaf,
                direction,
            } => {
                if root.contains_leaf(new_leaf) {
                    return Err(TreeError::DuplicateLeaf(new_leaf.to_string()));
                }
                let existing = root
                    .node_at_path(path)
                    .ok_or_else(|| TreeError::PathNotFound(path.to_string()))?
                    .clone();
                Ok(vec![MosaicUpdate::Set {
                    path: path.clone(),
                    node: MosaicNode::split(
                        *direction,
                        existing,
                        MosaicNode::Leaf(new_leaf.clone()),
                    ),
                }])
            }
        }
    }

    /// Compute the layout that results from applying this edit.
    ///
    /// Removing the root tile empties the layout.
    pub fn apply(&self, layout: &MosaicLayout) -> Result<MosaicLayout, TreeError> {
        let root = layout.root().ok_or(TreeError::EmptyTree)?;
        if let MosaicEdit::Remove { path } = self {
            if path.is_empty() {
                return Ok(MosaicLayout::empty());
            }
        }
        let updates = self.updates(root)?;
        Ok(update_tree(root, &updates)?.into())
    }
}

fn split_at<'a>(root: &'a MosaicNode, path: &MosaicPath) -> Result<&'a MosaicSplit, TreeError> {
    match root.node_at_path(path) {
        Some(MosaicNode::Split(split)) => Ok(split),
        Some(MosaicNode::Leaf(_)) => Err(TreeError::NotASplit(path.to_string())),
        None => Err(TreeError::PathNotFound(path.to_string())),
    }
}
