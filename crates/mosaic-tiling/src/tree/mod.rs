mod balanced;
mod layout_value;
mod traversal;
mod types;
mod updates;

pub use balanced::create_balanced_tree;
pub use types::*;
pub use updates::*;
