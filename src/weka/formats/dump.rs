//! Inverse serializer: decision tree back to Weka dump text
//!
//! Regenerates the line-oriented source form of a tree: one `<=` line and
//! one `>` line per split, nested branches indented with `|   ` markers,
//! and terminal branches suffixed with `: label`. Feeding the output back
//! through the decoder and builder reproduces the tree, provided features
//! and labels contain no whitespace (which the dump format cannot carry).

use crate::weka::formats::format_threshold;
use crate::weka::line::Side;
use crate::weka::tree::Tree;

const DEPTH_PREFIX: &str = "|   ";

/// Serialize a tree to Weka dump text.
///
/// Returns `None` for a bare leaf: the format has no way to write a tree
/// without at least one split.
pub fn to_weka_str(tree: &Tree) -> Option<String> {
    match tree {
        Tree::Leaf { .. } => None,
        Tree::Node { .. } => {
            let mut result = String::new();
            append_split(tree, 0, &mut result);
            Some(result)
        }
    }
}

fn append_split(tree: &Tree, depth: usize, output: &mut String) {
    let (feature, threshold, low, high) = match tree {
        Tree::Node {
            feature,
            threshold,
            low,
            high,
        } => (feature, *threshold, low, high),
        Tree::Leaf { .. } => unreachable!("append_split is only called on nodes"),
    };
    append_branch(feature, threshold, Side::Low, low, depth, output);
    append_branch(feature, threshold, Side::High, high, depth, output);
}

fn append_branch(
    feature: &str,
    threshold: f64,
    side: Side,
    branch: &Tree,
    depth: usize,
    output: &mut String,
) {
    let prefix = DEPTH_PREFIX.repeat(depth);
    let op = match side {
        Side::Low => "<=",
        Side::High => ">",
    };
    match branch {
        Tree::Leaf { class } => {
            output.push_str(&format!(
                "{}{} {} {}: {}\n",
                prefix,
                feature,
                op,
                format_threshold(threshold),
                class
            ));
        }
        Tree::Node { .. } => {
            output.push_str(&format!(
                "{}{} {} {}\n",
                prefix,
                feature,
                op,
                format_threshold(threshold)
            ));
            append_split(branch, depth + 1, output);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weka::builder::build_tree;
    use crate::weka::line::decode;

    #[test]
    fn a_bare_leaf_has_no_dump_form() {
        assert_eq!(to_weka_str(&Tree::leaf("A")), None);
    }

    #[test]
    fn dumps_a_single_split() {
        let tree = Tree::node("F", 1.0, Tree::leaf("A"), Tree::leaf("B"));
        assert_eq!(
            to_weka_str(&tree).unwrap(),
            "F <= 1.0: A\nF > 1.0: B\n"
        );
    }

    #[test]
    fn nested_branches_gain_a_depth_marker() {
        let tree = Tree::node(
            "F",
            1.0,
            Tree::node("G", 2.5, Tree::leaf("A"), Tree::leaf("B")),
            Tree::leaf("C"),
        );
        insta::assert_snapshot!(to_weka_str(&tree).unwrap(), @r"
        F <= 1.0
        |   G <= 2.5: A
        |   G > 2.5: B
        F > 1.0: C
        ");
    }

    #[test]
    fn dump_round_trips_through_the_builder() {
        let tree = Tree::node(
            "sdAccel",
            0.6235,
            Tree::node("pitch", -12.0, Tree::leaf("Sitting"), Tree::leaf("Standing")),
            Tree::node("roll", 3.5, Tree::leaf("Walking"), Tree::leaf("Running")),
        );
        let text = to_weka_str(&tree).unwrap();
        let lines: Vec<_> = text.lines().map(|l| decode(l).unwrap()).collect();
        assert_eq!(build_tree(&lines).unwrap(), tree);
    }
}
