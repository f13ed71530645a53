//! Balanced tree construction from an ordered list of leaves.

use mosaic_common::WindowId;

use super::{MosaicNode, SplitDirection};

/// Build a balanced binary tree over `leaves`.
///
/// The sequence is halved recursively (the first half takes the extra
/// leaf when the count is odd) and the split direction alternates per
/// level, starting with `start_direction` at the root. Depth-first leaf
/// order equals the input order. Returns `None` for no leaves.
pub fn create_balanced_tree(
    leaves: &[WindowId],
    start_direction: SplitDirection,
) -> Option<MosaicNode> {
    if leaves.is_empty() {
        None
    } else {
        Some(build(leaves, start_direction))
    }
}

fn build(leaves: &[WindowId], direction: SplitDirection) -> MosaicNode {
    if leaves.len() == 1 {
        return MosaicNode::Leaf(leaves[0].clone());
    }
    let mid = leaves.len().div_ceil(2);
    MosaicNode::split(
        direction,
        build(&leaves[..mid], direction.other()),
        build(&leaves[mid..], direction.other()),
    )
}
