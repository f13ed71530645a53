//! Layout calculation: recursive tree-to-rect computation.

use mosaic_common::Rect;

use crate::tree::{Branch, MosaicNode, MosaicPath, SplitDirection};

use super::{LayoutEngine, TileRect};

impl LayoutEngine {
    pub fn compute(&self, root: &MosaicNode, bounds: Rect) -> Vec<TileRect> {
        let mut results = Vec::new();
        let mut path = MosaicPath::root();
        self.layout_node(root, bounds.inset(self.outer_padding), &mut path, &mut results);
        results
    }

    fn layout_node(
        &self,
        node: &MosaicNode,
        bounds: Rect,
        path: &mut MosaicPath,
        out: &mut Vec<TileRect>,
    ) {
        match node {
            MosaicNode::Leaf(id) => out.push(TileRect {
                id: id.clone(),
                path: path.clone(),
                rect: bounds,
            }),
            MosaicNode::Split(split) => {
                let share = split.percentage() / 100.0;
                let (a, b) = match split.direction {
                    SplitDirection::Row => {
                        let (w1, w2) = self.divide(bounds.width, share);
                        (
                            Rect {
                                x: bounds.x,
                                y: bounds.y,
                                width: w1,
                                height: bounds.height,
                            },
                            Rect {
                                x: bounds.x + w1 + self.gap,
                                y: bounds.y,
                                width: w2,
                                height: bounds.height,
                            },
                        )
                    }
                    SplitDirection::Column => {
                        let (h1, h2) = self.divide(bounds.height, share);
                        (
                            Rect {
                                x: bounds.x,
                                y: bounds.y,
                                width: bounds.width,
                                height: h1,
                            },
                            Rect {
                                x: bounds.x,
                                y: bounds.y + h1 + self.gap,
                                width: bounds.width,
                                height: h2,
                            },
                        )
                    }
                };
                path.push(Branch::First);
                self.layout_node(&split.first, a, path, out);
                path.pop();
                path.push(Branch::Second);
                self.layout_node(&split.second, b, path, out);
                path.pop();
            }
        }
    }

    /// Split `extent` minus the gap into two parts, the first getting
    /// `share` of it. Both parts keep `min_tile_size` when there is room.
    fn divide(&self, extent: f64, share: f64) -> (f64, f64) {
        let available = (extent - self.gap).max(0.0);
        let mut first = available * share.clamp(0.0, 1.0);
        if available >= 2.0 * self.min_tile_size {
            first = first.clamp(self.min_tile_size, available - self.min_tile_size);
        }
        (first, (available - first).max(0.0))
    }
}
