//! Core types for the layout tree: directions, paths, nodes and layouts.

use std::fmt;

use mosaic_common::WindowId;
use serde::{Deserialize, Serialize};

/// Share of the `first` child when a split carries no explicit percentage.
pub const DEFAULT_SPLIT_PERCENTAGE: f64 = 50.0;

/// How a split divides its area. `Row` places children side by side,
/// `Column` stacks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitDirection {
    Row,
    Column,
}

impl SplitDirection {
    pub fn other(self) -> Self {
        match self {
            SplitDirection::Row => SplitDirection::Column,
            SplitDirection::Column => SplitDirection::Row,
        }
    }
}

/// One step of a path through the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    First,
    Second,
}

impl Branch {
    pub fn other(self) -> Self {
        match self {
            Branch::First => Branch::Second,
            Branch::Second => Branch::First,
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Branch::First => f.write_str("first"),
            Branch::Second => f.write_str("second"),
        }
    }
}

/// Location of a node, as branch choices from the root. The empty path
/// is the root itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MosaicPath(Vec<Branch>);

impl MosaicPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn branches(&self) -> &[Branch] {
        &self.0
    }

    pub fn last(&self) -> Option<Branch> {
        self.0.last().copied()
    }

    /// Path of the child reached by taking `branch` from this node.
    pub fn child(&self, branch: Branch) -> Self {
        let mut branches = self.0.clone();
        branches.push(branch);
        Self(branches)
    }

    /// Path of the enclosing split, `None` at the root.
    pub fn parent(&self) -> Option<Self> {
        if self.0.is_empty() {
            None
        } else {
            Some(Self(self.0[..self.0.len() - 1].to_vec()))
        }
    }

    /// Path of the node sharing this node's parent, `None` at the root.
    pub fn sibling(&self) -> Option<Self> {
        let last = self.last()?;
        self.parent().map(|parent| parent.child(last.other()))
    }

    pub fn starts_with(&self, prefix: &MosaicPath) -> bool {
        self.0.starts_with(&prefix.0)
    }

    pub(crate) fn push(&mut self, branch: Branch) {
        self.0.push(branch);
    }

    pub(crate) fn pop(&mut self) -> Option<Branch> {
        self.0.pop()
    }

    pub(crate) fn remove(&mut self, index: usize) -> Branch {
        self.0.remove(index)
    }
}

impl From<Vec<Branch>> for MosaicPath {
    fn from(branches: Vec<Branch>) -> Self {
        Self(branches)
    }
}

impl fmt::Display for MosaicPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, branch) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{branch}")?;
        }
        f.write_str("]")
    }
}

/// A node of the layout tree. Serializes the way mosaic layouts are
/// stored in workspace state: a leaf is its window id string, a split is
/// an object with `direction`, `first`, `second` and an optional
/// `splitPercentage`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MosaicNode {
    Leaf(WindowId),
    Split(MosaicSplit),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MosaicSplit {
    pub direction: SplitDirection,
    pub first: Box<MosaicNode>,
    pub second: Box<MosaicNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_percentage: Option<f64>,
}

impl MosaicSplit {
    /// Share of the area given to `first`, in percent.
    pub fn percentage(&self) -> f64 {
        self.split_percentage.unwrap_or(DEFAULT_SPLIT_PERCENTAGE)
    }

    pub fn child(&self, branch: Branch) -> &MosaicNode {
        match branch {
            Branch::First => &self.first,
            Branch::Second => &self.second,
        }
    }

    pub fn child_mut(&mut self, branch: Branch) -> &mut MosaicNode {
        match branch {
            Branch::First => &mut self.first,
            Branch::Second => &mut self.second,
        }
    }
}

impl MosaicNode {
    pub fn leaf(id: impl Into<WindowId>) -> Self {
        MosaicNode::Leaf(id.into())
    }

    pub fn split(direction: SplitDirection, first: MosaicNode, second: MosaicNode) -> Self {
        MosaicNode::Split(MosaicSplit {
            direction,
            first: Box::new(first),
            second: Box::new(second),
            split_percentage: None,
        })
    }

    pub fn row(first: MosaicNode, second: MosaicNode) -> Self {
        Self::split(SplitDirection::Row, first, second)
    }

    pub fn column(first: MosaicNode, second: MosaicNode) -> Self {
        Self::split(SplitDirection::Column, first, second)
    }

    pub fn as_leaf(&self) -> Option<&WindowId> {
        match self {
            MosaicNode::Leaf(id) => Some(id),
            MosaicNode::Split(_) => None,
        }
    }

    pub fn as_split(&self) -> Option<&MosaicSplit> {
        match self {
            MosaicNode::Leaf(_) => None,
            MosaicNode::Split(split) => Some(split),
        }
    }
}

/// The layout value kept in workspace state: a tree, or the explicit
/// empty layout (stored as `{}`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MosaicLayout(Option<MosaicNode>);

impl MosaicLayout {
    pub fn empty() -> Self {
        Self(None)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn root(&self) -> Option<&MosaicNode> {
        self.0.as_ref()
    }

    pub fn into_root(self) -> Option<MosaicNode> {
        self.0
    }

    /// Window ids of all leaves, depth-first. Empty for the empty layout.
    pub fn leaves(&self) -> Vec<WindowId> {
        self.0.as_ref().map(MosaicNode::leaves).unwrap_or_default()
    }
}

impl From<MosaicNode> for MosaicLayout {
    fn from(node: MosaicNode) -> Self {
        Self(Some(node))
    }
}

impl From<Option<MosaicNode>> for MosaicLayout {
    fn from(node: Option<MosaicNode>) -> Self {
        Self(node)
    }
}
