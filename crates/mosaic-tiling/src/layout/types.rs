//! Layout engine types and configuration.

use mosaic_common::{Rect, WindowId};

use crate::tree::MosaicPath;

/// Configuration for the layout engine that computes tile positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEngine {
    /// Gap in pixels between tiles.
    pub gap: f64,
    /// Outer padding in pixels around the entire mosaic.
    pub outer_padding: f64,
    /// Minimum extent of a tile along a split axis, when space allows.
    pub min_tile_size: f64,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            gap: 4.0,
            outer_padding: 0.0,
            min_tile_size: 50.0,
        }
    }
}

/// A placed leaf: its window, its path and its on-screen bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct TileRect {
    pub id: WindowId,
    pub path: MosaicPath,
    pub rect: Rect,
}
