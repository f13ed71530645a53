//! Read-only traversal: leaves, path lookup and leaf paths.

use mosaic_common::WindowId;

use super::{Branch, MosaicNode, MosaicPath};

impl MosaicNode {
    pub fn leaf_count(&self) -> usize {
        match self {
            MosaicNode::Leaf(_) => 1,
            MosaicNode::Split(split) => split.first.leaf_count() + split.second.leaf_count(),
        }
    }

    pub fn contains_leaf(&self, id: &WindowId) -> bool {
        match self {
            MosaicNode::Leaf(leaf) => leaf == id,
            MosaicNode::Split(split) => {
                split.first.contains_leaf(id) || split.second.contains_leaf(id)
            }
        }
    }

    /// Collect all leaf ids in depth-first order, `first` before `second`.
    pub fn leaves(&self) -> Vec<WindowId> {
        let mut ids = Vec::new();
        self.collect_leaves_into(&mut ids);
        ids
    }

    fn collect_leaves_into(&self, out: &mut Vec<WindowId>) {
        match self {
            MosaicNode::Leaf(id) => out.push(id.clone()),
            MosaicNode::Split(split) => {
                split.first.collect_leaves_into(out);
                split.second.collect_leaves_into(out);
            }
        }
    }

    pub fn node_at_path(&self, path: &MosaicPath) -> Option<&MosaicNode> {
        let mut node = self;
        for branch in path.branches() {
            node = node.as_split()?.child(*branch);
        }
        Some(node)
    }

    pub(crate) fn node_at_path_mut(&mut self, path: &MosaicPath) -> Option<&mut MosaicNode> {
        let mut node = self;
        for branch in path.branches() {
            node = match node {
                MosaicNode::Leaf(_) => return None,
                MosaicNode::Split(split) => split.child_mut(*branch),
            };
        }
        Some(node)
    }

    /// Every leaf paired with its path, in depth-first order.
    pub fn leaf_paths(&self) -> Vec<(WindowId, MosaicPath)> {
        let mut out = Vec::new();
        let mut path = MosaicPath::root();
        self.collect_paths_into(&mut path, &mut out);
        out
    }

    fn collect_paths_into(&self, path: &mut MosaicPath, out: &mut Vec<(WindowId, MosaicPath)>) {
        match self {
            MosaicNode::Leaf(id) => out.push((id.clone(), path.clone())),
            MosaicNode::Split(split) => {
                path.push(Branch::First);
                split.first.collect_paths_into(path, out);
                path.pop();
                path.push(Branch::Second);
                split.second.collect_paths_into(path, out);
                path.pop();
            }
        }
    }

    /// Path of the leaf holding `id`, if it is in the tree.
    pub fn path_of(&self, id: &WindowId) -> Option<MosaicPath> {
        self.leaf_paths()
            .into_iter()
            .find(|(leaf, _)| leaf == id)
            .map(|(_, path)| path)
    }
}
