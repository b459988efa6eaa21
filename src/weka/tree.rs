//! Decision-tree data structures
//!
//! A [`Tree`] is either an internal node (a feature compared to a threshold,
//! with a low and a high branch) or a leaf carrying the output class. On a
//! given sample, if the feature value is lower than or equal to the
//! threshold we move to the low branch, otherwise to the high branch, until
//! a leaf gives the class.
//!
//! Modeling the two shapes as enum variants makes invalid trees (a leaf with
//! children, a node without a threshold) unrepresentable. Trees are built
//! once by [`crate::weka::builder::build_tree`] and never mutated.

use serde::{Deserialize, Serialize};

/// A subtree of a parsed decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Tree {
    /// A terminal node carrying the output class.
    Leaf { class: String },
    /// An internal node routing samples by `feature <= threshold`.
    Node {
        feature: String,
        threshold: f64,
        low: Box<Tree>,
        high: Box<Tree>,
    },
}

impl Tree {
    pub fn leaf(class: impl Into<String>) -> Tree {
        Tree::Leaf {
            class: class.into(),
        }
    }

    pub fn node(feature: impl Into<String>, threshold: f64, low: Tree, high: Tree) -> Tree {
        Tree::Node {
            feature: feature.into(),
            threshold,
            low: Box::new(low),
            high: Box::new(high),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Tree::Leaf { .. })
    }

    /// The output class, for leaves.
    pub fn class(&self) -> Option<&str> {
        match self {
            Tree::Leaf { class } => Some(class),
            Tree::Node { .. } => None,
        }
    }

    /// The compared feature, for internal nodes.
    pub fn feature(&self) -> Option<&str> {
        match self {
            Tree::Node { feature, .. } => Some(feature),
            Tree::Leaf { .. } => None,
        }
    }

    pub fn threshold(&self) -> Option<f64> {
        match self {
            Tree::Node { threshold, .. } => Some(*threshold),
            Tree::Leaf { .. } => None,
        }
    }

    /// The `feature <= threshold` branch, for internal nodes.
    pub fn low(&self) -> Option<&Tree> {
        match self {
            Tree::Node { low, .. } => Some(low),
            Tree::Leaf { .. } => None,
        }
    }

    /// The `feature > threshold` branch, for internal nodes.
    pub fn high(&self) -> Option<&Tree> {
        match self {
            Tree::Node { high, .. } => Some(high),
            Tree::Leaf { .. } => None,
        }
    }

    /// Total number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Tree::Leaf { .. } => 1,
            Tree::Node { low, high, .. } => low.leaf_count() + high.leaf_count(),
        }
    }
}
