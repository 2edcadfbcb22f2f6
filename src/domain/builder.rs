//! Tree builder: synthesizes a decision tree from sampled phrases.

use generational_arena::Index;
use rand::Rng;
use tracing::{debug, instrument};

use crate::domain::arena::{DecisionTree, TreeNode};

/// Vocabulary used when no phrases were sampled.
pub const FALLBACK_PHRASES: [&str; 4] = ["here", "there", "now", "elsewhere"];

/// Number of leaves produced when nothing else is configured.
pub const DEFAULT_LEAF_COUNT: usize = 10;

/// Probability that a leaf label gets a second phrase appended.
const SECOND_PHRASE_PROBABILITY: f64 = 0.4;

/// Exclusive upper bound of the numeric part of synthetic identifiers.
const ATTR_RANGE: u32 = 9999;

/// Constructs randomized decision trees, leaves first.
///
/// Leaves are paired left to right in strides of two; every pair gets a fresh
/// decision parent. A trailing unpaired node moves to the next round as is,
/// so it ends up shallower than its siblings.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    phrases: Vec<String>,
}

impl TreeBuilder {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            debug!("No phrases sampled, using fallback vocabulary");
            phrases = FALLBACK_PHRASES.iter().map(|s| s.to_string()).collect();
        }
        Self { phrases }
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Build a tree with exactly `leaf_count` leaves.
    ///
    /// A leaf count of zero yields an empty tree.
    #[instrument(level = "debug", skip(self, rng))]
    pub fn build<R: Rng + ?Sized>(&self, leaf_count: usize, rng: &mut R) -> DecisionTree {
        let mut tree = DecisionTree::new();
        let mut round: Vec<Index> = (0..leaf_count)
            .map(|_| tree.insert_node(TreeNode::leaf(self.leaf_label(rng))))
            .collect();

        while round.len() > 1 {
            debug!(nodes = round.len(), "Pairing round");
            round = round
                .chunks(2)
                .map(|pair| match *pair {
                    [a, b] => tree.insert_node(TreeNode::decision(synthetic_attr(rng), a, b)),
                    [carried] => carried,
                    _ => unreachable!("chunks(2) yields one or two elements"),
                })
                .collect();
        }

        if let Some(&root) = round.first() {
            tree.set_root(root);
        }
        tree
    }

    fn leaf_label<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let first = self.pick(rng);
        let label = if rng.gen_bool(SECOND_PHRASE_PROBABILITY) {
            format!("{} {}", first, self.pick(rng))
        } else {
            first.to_string()
        };
        label.trim().to_string()
    }

    fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.phrases[rng.gen_range(0..self.phrases.len())]
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}

fn synthetic_attr<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("q{}", rng.gen_range(0..ATTR_RANGE))
}
