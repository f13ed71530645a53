pub mod commands;
pub mod layout;
pub mod tree;

pub use commands::MosaicEdit;
pub use layout::{LayoutEngine, TileRect};
pub use tree::{
    create_balanced_tree, create_remove_update, update_tree, Branch, DropPosition, MosaicLayout,
    MosaicNode, MosaicPath, MosaicSplit, MosaicUpdate, SplitDirection,
};
