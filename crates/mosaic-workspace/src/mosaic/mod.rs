//! The `WorkspaceMosaic` component: reconciles the layout with the open
//! windows, renders tiles and forwards layout edits.

mod changes;
mod lifecycle;
mod render;
mod types;

#[cfg(test)]
mod tests;

pub use types::*;
