//! Tests for TreeBuilder

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rstest::rstest;

use maptree::domain::{DecisionTree, NodeKind, TreeBuilder, FALLBACK_PHRASES};
use maptree::util::testing::init_test_setup;

fn leaf_depths(tree: &DecisionTree) -> Vec<usize> {
    tree.iter()
        .filter(|(_, _, node)| node.is_leaf())
        .map(|(_, depth, _)| depth)
        .collect()
}

fn leaf_labels(tree: &DecisionTree) -> Vec<String> {
    tree.leaves()
        .into_iter()
        .map(|node| match &node.kind {
            NodeKind::Leaf { label } => label.clone(),
            NodeKind::Decision { attr } => panic!("decision node {attr} without children"),
        })
        .collect()
}

#[rstest]
fn given_phrases_when_building_then_exact_leaf_count(
    #[values(1, 2, 3, 4, 5, 7, 10, 16, 33)] leaf_count: usize,
    #[values(1, 99)] seed: u64,
) {
    init_test_setup();
    let mut rng = StdRng::seed_from_u64(seed);

    let tree = TreeBuilder::new(["Main St", "Riverside Park", "Café"]).build(leaf_count, &mut rng);

    assert_eq!(tree.leaves().len(), leaf_count);
    // every pairing adds exactly one decision node
    assert_eq!(tree.len(), 2 * leaf_count - 1);
}

#[test]
fn given_built_tree_then_every_decision_node_has_two_children() {
    let mut rng = StdRng::seed_from_u64(5);
    let tree = TreeBuilder::new(["a b c"]).build(11, &mut rng);

    for (_, _, node) in tree.iter() {
        match node.kind {
            NodeKind::Leaf { .. } => assert!(node.is_leaf()),
            NodeKind::Decision { .. } => {
                assert!(node.true_branch.is_some());
                assert!(node.false_branch.is_some());
            }
        }
    }
}

#[test]
fn given_built_tree_then_no_node_is_shared() {
    let mut rng = StdRng::seed_from_u64(11);
    let tree = TreeBuilder::new(["x"]).build(25, &mut rng);

    let mut seen = HashSet::new();
    for (idx, _, _) in tree.iter() {
        assert!(seen.insert(idx), "node visited twice");
    }
    assert_eq!(seen.len(), 49);
}

#[test]
fn given_no_phrases_when_building_then_labels_from_fallback_vocabulary() {
    let mut rng = StdRng::seed_from_u64(3);

    let tree = TreeBuilder::new(Vec::<String>::new()).build(8, &mut rng);

    let labels = leaf_labels(&tree);
    assert_eq!(labels.len(), 8);
    for label in labels {
        let words: Vec<&str> = label.split(' ').collect();
        assert!(words.len() == 1 || words.len() == 2, "label: {label}");
        assert!(words.iter().all(|w| FALLBACK_PHRASES.contains(w)), "label: {label}");
    }
}

#[test]
fn given_two_phrases_and_four_leaves_when_building_then_balanced_tree() {
    let allowed = [
        "cafe",
        "park",
        "cafe cafe",
        "park park",
        "cafe park",
        "park cafe",
    ];
    let mut rng = StdRng::seed_from_u64(42);

    let tree = TreeBuilder::new(["cafe", "park"]).build(4, &mut rng);

    assert_eq!(leaf_depths(&tree), vec![2, 2, 2, 2]);
    for label in leaf_labels(&tree) {
        assert!(allowed.contains(&label.as_str()), "label: {label}");
    }
    let root = tree.get_node(tree.root().unwrap()).unwrap();
    assert!(matches!(root.kind, NodeKind::Decision { .. }));
    for child in root.children() {
        let child = tree.get_node(child).unwrap();
        assert!(matches!(child.kind, NodeKind::Decision { .. }));
    }
}

#[test]
fn given_five_leaves_when_building_then_last_leaf_is_carried_up() {
    let mut rng = StdRng::seed_from_u64(8);

    let tree = TreeBuilder::new(["x"]).build(5, &mut rng);

    // 5 -> 3 -> 2 -> 1: the fifth leaf skips two pairing rounds
    assert_eq!(leaf_depths(&tree), vec![3, 3, 3, 3, 1]);
    let root = tree.get_node(tree.root().unwrap()).unwrap();
    let carried = tree.get_node(root.false_branch.unwrap()).unwrap();
    assert!(carried.is_leaf());
    for label in leaf_labels(&tree) {
        assert!(label == "x" || label == "x x", "label: {label}");
    }
}

#[test]
fn given_single_leaf_when_building_then_root_is_leaf() {
    let mut rng = StdRng::seed_from_u64(0);

    let tree = TreeBuilder::new(["solo"]).build(1, &mut rng);

    assert_eq!(tree.len(), 1);
    assert!(tree.get_node(tree.root().unwrap()).unwrap().is_leaf());
}

#[test]
fn given_same_seed_when_building_twice_then_same_labels() {
    let builder = TreeBuilder::new(["north", "south", "east", "west"]);

    let a = builder.build(10, &mut StdRng::seed_from_u64(77));
    let b = builder.build(10, &mut StdRng::seed_from_u64(77));

    assert_eq!(leaf_labels(&a), leaf_labels(&b));
}
