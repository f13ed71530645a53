pub mod errors;
pub mod id;
pub mod types;

pub use errors::{ConfigError, MosaicError, TreeError};
pub use id::{new_id, WorkspaceId};
pub use types::{Rect, ToolbarControl, Window, WindowId, WindowMap};

pub type Result<T> = std::result::Result<T, MosaicError>;
