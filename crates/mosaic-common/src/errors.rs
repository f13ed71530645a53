use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures of the layout tree primitives.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("cannot remove the root of a layout tree")]
    EmptyPath,

    #[error("no node at path {0}")]
    PathNotFound(String),

    #[error("layout tree is empty")]
    EmptyTree,

    #[error("node at path {0} is not a split")]
    NotASplit(String),

    #[error("cannot move {0} into its own subtree")]
    InvalidMove(String),

    #[error("window {0} is already in the layout")]
    DuplicateLeaf(String),
}

#[derive(Debug, thiserror::Error)]
pub enum MosaicError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("state error: {0}")]
    State(String),

    #[error("{0}")]
    Other(String),
}
