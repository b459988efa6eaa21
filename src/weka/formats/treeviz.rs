//! Treeviz formatter for decision trees
//!
//! Box-drawing visualization of the parsed tree, mainly a debugging aid:
//!
//! ```text
//! node: F <= 1.0
//! ├─ node: G <= 2.0
//! │  ├─ leaf: A
//! │  └─ leaf: B
//! └─ leaf: C
//! ```

use crate::weka::formats::format_threshold;
use crate::weka::tree::Tree;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn display_label(tree: &Tree) -> String {
    match tree {
        Tree::Leaf { class } => truncate(class, 30),
        Tree::Node {
            feature, threshold, ..
        } => truncate(
            &format!("{} <= {}", feature, format_threshold(*threshold)),
            30,
        ),
    }
}

fn node_type(tree: &Tree) -> &'static str {
    if tree.is_leaf() {
        "leaf"
    } else {
        "node"
    }
}

pub fn to_treeviz_str(tree: &Tree) -> String {
    let mut result = String::new();
    result.push_str(&format!("{}: {}\n", node_type(tree), display_label(tree)));
    if let Tree::Node { low, high, .. } = tree {
        append_subtree(&mut result, low, "", false);
        append_subtree(&mut result, high, "", true);
    }
    result
}

fn append_subtree(result: &mut String, tree: &Tree, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    result.push_str(&format!(
        "{}{} {}: {}\n",
        prefix,
        connector,
        node_type(tree),
        display_label(tree)
    ));

    if let Tree::Node { low, high, .. } = tree {
        let new_prefix = format!("{}{}", prefix, if is_last { "   " } else { "│  " });
        append_subtree(result, low, &new_prefix, false);
        append_subtree(result, high, &new_prefix, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_low_branch_first() {
        let tree = Tree::node(
            "F",
            1.0,
            Tree::node("G", 2.0, Tree::leaf("A"), Tree::leaf("B")),
            Tree::leaf("C"),
        );
        insta::assert_snapshot!(to_treeviz_str(&tree), @r"
        node: F <= 1.0
        ├─ node: G <= 2.0
        │  ├─ leaf: A
        │  └─ leaf: B
        └─ leaf: C
        ");
    }

    #[test]
    fn truncates_long_labels() {
        let long = "a".repeat(40);
        let tree = Tree::leaf(long);
        let viz = to_treeviz_str(&tree);
        assert!(viz.contains(&format!("{}...", "a".repeat(30))));
    }
}
