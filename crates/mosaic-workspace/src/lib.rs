//! The workspace mosaic: keeps a tiling layout in step with the set of
//! open windows and forwards layout edits to application state.

pub mod mosaic;
pub mod paths;
pub mod props;
pub mod reconcile;
pub mod sink;
pub mod tiles;

pub use mosaic::{MosaicSettings, WorkspaceMosaic};
pub use paths::PathTable;
pub use props::{MosaicProps, Workspace};
pub use reconcile::{determine_workspace_layout, Reconciled};
pub use sink::{LayoutLog, LayoutSink};
pub use tiles::{MosaicView, Tile, TileContent, TileKey};
