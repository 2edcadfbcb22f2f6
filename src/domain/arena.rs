use generational_arena::{Arena, Index};
use std::fmt;
use tracing::instrument;

/// Payload of a tree node: a display label on leaves, a synthetic decision
/// identifier on internal nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Leaf { label: String },
    Decision { attr: String },
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Leaf { label } => write!(f, "{}", label),
            NodeKind::Decision { attr } => write!(f, "{}", attr),
        }
    }
}

/// Tree node in the arena-based decision tree.
#[derive(Debug)]
pub struct TreeNode {
    pub kind: NodeKind,
    /// Index of the child taken when the decision holds
    pub true_branch: Option<Index>,
    /// Index of the child taken otherwise
    pub false_branch: Option<Index>,
}

impl TreeNode {
    pub fn leaf(label: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Leaf {
                label: label.into(),
            },
            true_branch: None,
            false_branch: None,
        }
    }

    pub fn decision(attr: impl Into<String>, true_branch: Index, false_branch: Index) -> Self {
        Self {
            kind: NodeKind::Decision { attr: attr.into() },
            true_branch: Some(true_branch),
            false_branch: Some(false_branch),
        }
    }

    /// Present children, true branch first.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = Index> {
        self.true_branch.into_iter().chain(self.false_branch)
    }

    pub fn is_leaf(&self) -> bool {
        self.true_branch.is_none() && self.false_branch.is_none()
    }

    /// Text drawn inside the node box.
    pub fn caption(&self) -> String {
        self.kind.to_string()
    }
}

/// Arena-backed binary decision tree.
///
/// Nodes are only ever added, never shared: every index is referenced by at
/// most one parent, so the structure is a tree by construction. An empty
/// arena (no root) stands for an absent tree and renders as nothing.
#[derive(Debug)]
pub struct DecisionTree {
    arena: Arena<TreeNode>,
    root: Option<Index>,
}

impl Default for DecisionTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, node: TreeNode) -> Index {
        self.arena.insert(node)
    }

    pub fn set_root(&mut self, root: Index) {
        self.root = Some(root);
    }

    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes reachable from the root.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator::new(self)
    }

    /// Number of levels, 0 for an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn height(&self) -> usize {
        self.iter().map(|(_, depth, _)| depth + 1).max().unwrap_or(0)
    }

    /// Leaf nodes in pre-order.
    #[instrument(level = "debug", skip(self))]
    pub fn leaves(&self) -> Vec<&TreeNode> {
        self.iter()
            .filter(|(_, _, node)| node.is_leaf())
            .map(|(_, _, node)| node)
            .collect()
    }
}

/// Pre-order walk, true branch before false branch, yielding
/// `(index, depth, node)`.
pub struct TreeIterator<'a> {
    tree: &'a DecisionTree,
    stack: Vec<(Index, usize)>,
}

impl<'a> TreeIterator<'a> {
    fn new(tree: &'a DecisionTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push((root, 0));
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, usize, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, depth)) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                // Push children in reverse order for true-before-false traversal
                for child in node.children().rev() {
                    self.stack.push((child, depth + 1));
                }
                return Some((current_idx, depth, node));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_node_tree() -> DecisionTree {
        let mut tree = DecisionTree::new();
        let a = tree.insert_node(TreeNode::leaf("a"));
        let b = tree.insert_node(TreeNode::leaf("b"));
        let root = tree.insert_node(TreeNode::decision("q1", a, b));
        tree.set_root(root);
        tree
    }

    #[test]
    fn given_empty_tree_when_iterating_then_yields_nothing() {
        let tree = DecisionTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.iter().count(), 0);
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn given_decision_node_when_iterating_then_visits_true_branch_first() {
        let tree = three_node_tree();
        let captions: Vec<_> = tree
            .iter()
            .map(|(_, depth, node)| (node.caption(), depth))
            .collect();
        assert_eq!(
            captions,
            vec![
                ("q1".to_string(), 0),
                ("a".to_string(), 1),
                ("b".to_string(), 1)
            ]
        );
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.leaves().len(), 2);
    }
}
