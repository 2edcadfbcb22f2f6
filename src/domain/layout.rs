//! Normalized placement of tree nodes.
//!
//! Placements live in a mapping keyed by arena index instead of on the nodes,
//! so a tree can be laid out (and inspected) independently of rendering.

use std::collections::HashMap;

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::domain::arena::DecisionTree;

/// Depth and normalized position of one node. `x` and `y` are in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub depth: usize,
    pub x: f64,
    pub y: f64,
}

/// Result of laying out a [`DecisionTree`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    placements: HashMap<Index, Placement>,
    rows: Vec<Vec<Index>>,
}

impl Layout {
    /// Lay out `tree` level by level.
    ///
    /// Rows are filled in pre-order visitation order across the whole tree,
    /// and each row is spread evenly with symmetric margins regardless of
    /// label length or subtree size. An empty tree gives an empty layout.
    #[instrument(level = "debug", skip(tree))]
    pub fn compute(tree: &DecisionTree) -> Self {
        let mut rows: Vec<Vec<Index>> = Vec::new();
        for (idx, depth, _) in tree.iter() {
            if rows.len() <= depth {
                rows.resize_with(depth + 1, Vec::new);
            }
            rows[depth].push(idx);
        }

        let max_depth = rows.len().saturating_sub(1);
        let mut placements = HashMap::with_capacity(rows.iter().map(Vec::len).sum());
        for (depth, row) in rows.iter().enumerate() {
            let slots = (row.len() + 1) as f64;
            let y = if max_depth > 0 {
                depth as f64 / (max_depth + 1) as f64
            } else {
                0.5
            };
            for (i, &idx) in row.iter().enumerate() {
                let x = (i + 1) as f64 / slots;
                placements.insert(idx, Placement { depth, x, y });
            }
        }

        debug!(levels = rows.len(), nodes = placements.len(), "Layout computed");
        Self { placements, rows }
    }

    pub fn placement(&self, idx: Index) -> Option<Placement> {
        self.placements.get(&idx).copied()
    }

    /// Node indices per depth, in visitation order.
    pub fn rows(&self) -> &[Vec<Index>] {
        &self.rows
    }

    /// Greatest depth found, 0 for an empty layout.
    pub fn max_depth(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}
