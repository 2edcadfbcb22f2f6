//! Text rendering of a decision tree for terminal output.

use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::{DecisionTree, Layout, NodeKind};

pub trait TreeNodeConvert {
    /// Convert into a printable tree, annotating nodes with their placement
    /// when a layout is given.
    fn to_tree_string(&self, layout: Option<&Layout>) -> Tree<String>;
}

impl TreeNodeConvert for DecisionTree {
    #[instrument(level = "debug", skip_all)]
    fn to_tree_string(&self, layout: Option<&Layout>) -> Tree<String> {
        let Some(root_idx) = self.root() else {
            return Tree::new("Empty tree".to_string());
        };

        fn describe(tree: &DecisionTree, layout: Option<&Layout>, idx: Index) -> String {
            let Some(node) = tree.get_node(idx) else {
                return String::new();
            };
            let caption = match &node.kind {
                NodeKind::Leaf { label } => format!("\"{}\"", label),
                NodeKind::Decision { attr } => format!("{}?", attr),
            };
            match layout.and_then(|l| l.placement(idx)) {
                Some(p) => format!("{caption}  (depth {}, x {:.3}, y {:.3})", p.depth, p.x, p.y),
                None => caption,
            }
        }

        fn build_tree(
            tree: &DecisionTree,
            layout: Option<&Layout>,
            node_idx: Index,
            parent_tree: &mut Tree<String>,
        ) {
            if let Some(node) = tree.get_node(node_idx) {
                for child_idx in node.children() {
                    let mut child_tree = Tree::new(describe(tree, layout, child_idx));
                    build_tree(tree, layout, child_idx, &mut child_tree);
                    parent_tree.push(child_tree);
                }
            }
        }

        let mut root = Tree::new(describe(self, layout, root_idx));
        build_tree(self, layout, root_idx, &mut root);
        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TreeNode;

    #[test]
    fn given_tree_when_converting_then_lists_true_branch_first() {
        let mut tree = DecisionTree::new();
        let yes = tree.insert_node(TreeNode::leaf("cafe"));
        let no = tree.insert_node(TreeNode::leaf("park"));
        let root = tree.insert_node(TreeNode::decision("q42", yes, no));
        tree.set_root(root);

        let text = tree.to_tree_string(None).to_string();

        let cafe = text.find("\"cafe\"").unwrap();
        let park = text.find("\"park\"").unwrap();
        assert!(text.starts_with("q42?"));
        assert!(cafe < park);
    }

    #[test]
    fn given_layout_when_converting_then_annotates_placement() {
        let mut tree = DecisionTree::new();
        let root = tree.insert_node(TreeNode::leaf("solo"));
        tree.set_root(root);
        let layout = Layout::compute(&tree);

        let text = tree.to_tree_string(Some(&layout)).to_string();

        assert!(text.contains("(depth 0, x 0.500, y 0.500)"));
    }

    #[test]
    fn given_empty_tree_when_converting_then_placeholder() {
        let text = DecisionTree::new().to_tree_string(None).to_string();
        assert!(text.starts_with("Empty tree"));
    }
}
