//! Property-based round-trip tests for the tree builder
//!
//! Generates random binary decision trees, renders them back to the Weka
//! dump format, and reconstructs them: the result must be isomorphic to the
//! original. Thresholds are assigned uniquely per split, since the sibling
//! matching rule only guarantees a deterministic reconstruction when every
//! low line has exactly one matching high line.

use proptest::prelude::*;
use wekatree::weka::formats::to_weka_str;
use wekatree::weka::processor::{decode_source, parse_tree};
use wekatree::weka::{Side, Tree};

/// Random trees rooted at a split, with placeholder thresholds.
fn split_tree() -> impl Strategy<Value = Tree> {
    let leaf = "[A-Z][a-z]{0,6}".prop_map(|class| Tree::leaf(class));
    let subtree = leaf.prop_recursive(5, 32, 2, |inner| {
        ("[a-z][a-zA-Z0-9_]{0,7}", inner.clone(), inner)
            .prop_map(|(feature, low, high)| Tree::node(feature, 0.0, low, high))
    });
    ("[a-z][a-zA-Z0-9_]{0,7}", subtree.clone(), subtree)
        .prop_map(|(feature, low, high)| Tree::node(feature, 0.0, low, high))
}

/// Give every split a distinct threshold so each low line has exactly one
/// matching high line.
fn with_unique_thresholds(tree: Tree, next: &mut f64) -> Tree {
    match tree {
        Tree::Leaf { .. } => tree,
        Tree::Node {
            feature, low, high, ..
        } => {
            let threshold = *next + 0.5;
            *next += 1.0;
            let low = with_unique_thresholds(*low, next);
            let high = with_unique_thresholds(*high, next);
            Tree::node(feature, threshold, low, high)
        }
    }
}

fn split_count(tree: &Tree) -> usize {
    match tree {
        Tree::Leaf { .. } => 0,
        Tree::Node { low, high, .. } => 1 + split_count(low) + split_count(high),
    }
}

proptest! {
    #[test]
    fn dump_then_rebuild_is_isomorphic(tree in split_tree()) {
        let tree = with_unique_thresholds(tree, &mut 0.0);
        let text = to_weka_str(&tree).expect("root is a split");
        let rebuilt = parse_tree(&text).unwrap();
        prop_assert_eq!(rebuilt, tree);
    }

    #[test]
    fn one_split_per_matched_low_line(tree in split_tree()) {
        let tree = with_unique_thresholds(tree, &mut 0.0);
        let text = to_weka_str(&tree).expect("root is a split");
        let lines = decode_source(&text).unwrap();
        let low_lines = lines.iter().filter(|l| l.side == Side::Low).count();
        let high_lines = lines.len() - low_lines;
        prop_assert_eq!(low_lines, high_lines);
        prop_assert_eq!(split_count(&parse_tree(&text).unwrap()), low_lines);
    }

    #[test]
    fn json_round_trip_preserves_the_tree(tree in split_tree()) {
        let tree = with_unique_thresholds(tree, &mut 0.0);
        let json = serde_json::to_string_pretty(&tree).unwrap();
        let back: Tree = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, tree);
    }

    #[test]
    fn decoding_any_dump_line_never_panics(raw in "\\PC{0,60}") {
        let _ = wekatree::weka::decode(&raw);
    }
}
