//! Synthesizes a small decision tree from sampled text fragments, lays it out
//! level by level and draws it as an annotated diagram on a 2D surface.
//!
//! ```ignore
//! let tree = TreeBuilder::new(phrases).build(10, &mut rng);
//! let layout = Layout::compute(&tree);
//! Renderer::default().render(&tree, &layout, &mut surface);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod render;
pub mod tree_traits;
pub mod util;

pub use domain::{DecisionTree, Layout, Placement, TreeBuilder};
pub use render::{Renderer, Surface, SvgSurface};
