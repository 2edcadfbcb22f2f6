//! Overlay session: one tree, laid out once, repainted on demand.

use rand::Rng;
use tracing::{debug, info, instrument};

use crate::domain::{DecisionTree, Layout, TreeBuilder};
use crate::render::{RenderStyle, Renderer, Surface};

/// Holds the synthesized tree and its layout for the lifetime of an overlay.
///
/// The tree and layout are computed once at setup; every viewport-settled
/// signal triggers a full clear-and-redraw against that same layout.
#[derive(Debug)]
pub struct OverlaySession {
    tree: DecisionTree,
    layout: Layout,
    renderer: Renderer,
    redraws: usize,
}

impl OverlaySession {
    /// Build and lay out a tree with `leaf_count` leaves from `phrases`.
    #[instrument(level = "debug", skip(phrases, style, rng))]
    pub fn new<R: Rng + ?Sized>(
        phrases: &[String],
        leaf_count: usize,
        style: RenderStyle,
        rng: &mut R,
    ) -> Self {
        let tree = TreeBuilder::new(phrases.iter().cloned()).build(leaf_count, rng);
        let layout = Layout::compute(&tree);
        info!(
            nodes = tree.len(),
            levels = layout.rows().len(),
            "Overlay tree ready"
        );
        Self::from_parts(tree, layout, Renderer::new(style))
    }

    pub fn from_parts(tree: DecisionTree, layout: Layout, renderer: Renderer) -> Self {
        Self {
            tree,
            layout,
            renderer,
            redraws: 0,
        }
    }

    /// Initial paint after setup.
    pub fn show<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.renderer.render(&self.tree, &self.layout, surface);
    }

    /// Repaint after the underlying view has settled.
    pub fn viewport_settled<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.redraws += 1;
        debug!(redraws = self.redraws, "Viewport settled, repainting");
        self.renderer.render(&self.tree, &self.layout, surface);
    }

    pub fn tree(&self) -> &DecisionTree {
        &self.tree
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Number of repaints triggered by viewport-settled signals.
    pub fn redraws(&self) -> usize {
        self.redraws
    }
}
