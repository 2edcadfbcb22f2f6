//! Domain layer: tree entities, synthesis and layout
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod layout;

pub use arena::{DecisionTree, NodeKind, TreeIterator, TreeNode};
pub use builder::{TreeBuilder, DEFAULT_LEAF_COUNT, FALLBACK_PHRASES};
pub use layout::{Layout, Placement};
