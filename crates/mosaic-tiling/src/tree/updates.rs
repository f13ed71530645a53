//! Tree edits: update generation and batch application.
//!
//! Updates never touch the input tree; `update_tree` returns a new one.

use std::collections::HashSet;

use mosaic_common::TreeError;

use super::{Branch, MosaicNode, MosaicPath, MosaicSplit};

/// A single edit addressed by path.
#[derive(Debug, Clone, PartialEq)]
pub enum MosaicUpdate {
    /// Replace the node at `path`.
    Set { path: MosaicPath, node: MosaicNode },
    /// Remove the node at `path`; its sibling takes the parent's place.
    Remove { path: MosaicPath },
    /// Set the split percentage of the split at `path` (clamped to 0-100).
    SplitPercentage { path: MosaicPath, percentage: f64 },
}

impl MosaicUpdate {
    pub fn path(&self) -> &MosaicPath {
        match self {
            MosaicUpdate::Set { path, .. }
            | MosaicUpdate::Remove { path }
            | MosaicUpdate::SplitPercentage { path, .. } => path,
        }
    }
}

/// Where a dragged tile lands relative to its drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropPosition {
    Top,
    Bottom,
    Left,
    Right,
}

/// Build the update removing the node at `path`.
pub fn create_remove_update(
    root: &MosaicNode,
    path: &MosaicPath,
) -> Result<MosaicUpdate, TreeError> {
    if path.is_empty() {
        return Err(TreeError::EmptyPath);
    }
    if root.node_at_path(path).is_none() {
        return Err(TreeError::PathNotFound(path.to_string()));
    }
    Ok(MosaicUpdate::Remove { path: path.clone() })
}

/// Updates growing the node at `path` to `percentage` of every split
/// above it.
pub fn create_expand_update(path: &MosaicPath, percentage: f64) -> Vec<MosaicUpdate> {
    let mut updates = Vec::with_capacity(path.len());
    let mut parent = path.clone();
    while let Some(branch) = parent.pop() {
        let share = match branch {
            Branch::First => percentage,
            Branch::Second => 100.0 - percentage,
        };
        updates.push(MosaicUpdate::SplitPercentage {
            path: parent.clone(),
            percentage: share,
        });
    }
    updates
}

/// Update collapsing the node at `path` to zero size within its parent.
pub fn create_hide_update(root: &MosaicNode, path: &MosaicPath) -> Result<MosaicUpdate, TreeError> {
    let (parent, branch) = match (path.parent(), path.last()) {
        (Some(parent), Some(branch)) => (parent, branch),
        _ => return Err(TreeError::EmptyPath),
    };
    if root.node_at_path(path).is_none() {
        return Err(TreeError::PathNotFound(path.to_string()));
    }
    let percentage = match branch {
        Branch::First => 0.0,
        Branch::Second => 100.0,
    };
    Ok(MosaicUpdate::SplitPercentage {
        path: parent,
        percentage,
    })
}

/// Updates moving the subtree at `source` next to the node at
/// `destination`, on the side given by `position`.
pub fn create_drag_to_updates(
    root: &MosaicNode,
    source: &MosaicPath,
    destination: &MosaicPath,
    position: DropPosition,
) -> Result<Vec<MosaicUpdate>, TreeError> {
    let source_parent = source.parent().ok_or(TreeError::EmptyPath)?;
    if destination.starts_with(source) {
        return Err(TreeError::InvalidMove(source.to_string()));
    }
    let source_node = root
        .node_at_path(source)
        .ok_or_else(|| TreeError::PathNotFound(source.to_string()))?
        .clone();
    let mut destination_node = root
        .node_at_path(destination)
        .ok_or_else(|| TreeError::PathNotFound(destination.to_string()))?
        .clone();

    let mut destination_path = destination.clone();
    let mut updates = Vec::new();

    if source.starts_with(destination) {
        // The source lives inside the drop target: take it out of the
        // target's own copy instead of the whole tree.
        let local = MosaicPath::from(source.branches()[destination.len()..].to_vec());
        destination_node = update_tree(&destination_node, &[MosaicUpdate::Remove { path: local }])?
            .ok_or(TreeError::EmptyTree)?;
    } else {
        updates.push(MosaicUpdate::Remove {
            path: source.clone(),
        });
        // Removing the source collapses its parent, shifting any
        // destination below that parent up one level.
        let depth = source_parent.len();
        if destination_path.len() > depth && destination_path.starts_with(&source_parent) {
            destination_path.remove(depth);
        }
    }

    let (first, second) = match position {
        DropPosition::Left | DropPosition::Top => (source_node, destination_node),
        DropPosition::Right | DropPosition::Bottom => (destination_node, source_node),
    };
    let node = match position {
        DropPosition::Left | DropPosition::Right => MosaicNode::row(first, second),
        DropPosition::Top | DropPosition::Bottom => MosaicNode::column(first, second),
    };
    updates.push(MosaicUpdate::Set {
        path: destination_path,
        node,
    });
    Ok(updates)
}

/// Apply `updates` to a copy of `root`, in order.
///
/// Consecutive removals form one batch: all their paths are resolved
/// against the same tree and pruned together, so removing any set of
/// disjoint nodes gives the same result in any order. Returns `None`
/// when every leaf was removed.
pub fn update_tree(
    root: &MosaicNode,
    updates: &[MosaicUpdate],
) -> Result<Option<MosaicNode>, TreeError> {
    let mut current = Some(root.clone());
    let mut pending: Vec<MosaicPath> = Vec::new();

    for update in updates {
        match update {
            MosaicUpdate::Remove { path } => pending.push(path.clone()),
            MosaicUpdate::Set { path, node } => {
                let mut tree = flush_removals(current, &mut pending)?.ok_or(TreeError::EmptyTree)?;
                let target = tree
                    .node_at_path_mut(path)
                    .ok_or_else(|| TreeError::PathNotFound(path.to_string()))?;
                *target = node.clone();
                current = Some(tree);
            }
            MosaicUpdate::SplitPercentage { path, percentage } => {
                let mut tree = flush_removals(current, &mut pending)?.ok_or(TreeError::EmptyTree)?;
                match tree.node_at_path_mut(path) {
                    Some(MosaicNode::Split(split)) => {
                        split.split_percentage = Some(percentage.clamp(0.0, 100.0));
                    }
                    Some(MosaicNode::Leaf(_)) => return Err(TreeError::NotASplit(path.to_string())),
                    None => return Err(TreeError::PathNotFound(path.to_string())),
                }
                current = Some(tree);
            }
        }
    }

    flush_removals(current, &mut pending)
}

fn flush_removals(
    current: Option<MosaicNode>,
    pending: &mut Vec<MosaicPath>,
) -> Result<Option<MosaicNode>, TreeError> {
    if pending.is_empty() {
        return Ok(current);
    }
    let tree = current.ok_or(TreeError::EmptyTree)?;
    let mut removed = HashSet::with_capacity(pending.len());
    for path in pending.drain(..) {
        if path.is_empty() {
            return Err(TreeError::EmptyPath);
        }
        if tree.node_at_path(&path).is_none() {
            return Err(TreeError::PathNotFound(path.to_string()));
        }
        removed.insert(path);
    }
    let mut path = MosaicPath::root();
    Ok(prune(tree, &mut path, &removed))
}

fn prune(
    node: MosaicNode,
    path: &mut MosaicPath,
    removed: &HashSet<MosaicPath>,
) -> Option<MosaicNode> {
    if removed.contains(path) {
        return None;
    }
    match node {
        MosaicNode::Leaf(_) => Some(node),
        MosaicNode::Split(split) => {
            let MosaicSplit {
                direction,
                first,
                second,
                split_percentage,
            } = split;

            path.push(Branch::First);
            let first = prune(*first, path, removed);
            path.pop();
            path.push(Branch::Second);
            let second = prune(*second, path, removed);
            path.pop();

            match (first, second) {
                (Some(first), Some(second)) => Some(MosaicNode::Split(MosaicSplit {
                    direction,
                    first: Box::new(first),
                    second: Box::new(second),
                    split_percentage,
                })),
                (Some(survivor), None) | (None, Some(survivor)) => Some(survivor),
                (None, None) => None,
            }
        }
    }
}
