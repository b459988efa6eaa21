//! XML serialization of decision trees
//!
//! The reference output format. Every tree node becomes one element: the
//! root is tagged `<root>`, and each split nests a `<left>` (low) and a
//! `<right>` (high) element, in that order. A `type` attribute
//! distinguishes `node` from `leaf`; nodes carry `feature` and `threshold`
//! attributes, leaves carry `class`.
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <root type="node" feature="F" threshold="1.0">
//!     <left type="leaf" class="A"/>
//!     <right type="leaf" class="B"/>
//! </root>
//! ```

use crate::weka::formats::format_threshold;
use crate::weka::tree::Tree;

const TAG_ROOT: &str = "root";
const TAG_LEFT: &str = "left";
const TAG_RIGHT: &str = "right";
const TYPE_NODE: &str = "node";
const TYPE_LEAF: &str = "leaf";

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";
const INDENT: &str = "    ";

/// Serialize a tree to an indented XML document.
pub fn to_xml_str(tree: &Tree) -> String {
    let mut result = String::new();
    result.push_str(XML_DECLARATION);
    result.push('\n');
    serialize_element(tree, TAG_ROOT, 0, &mut result);
    result
}

fn serialize_element(tree: &Tree, tag: &str, level: usize, output: &mut String) {
    let indent = INDENT.repeat(level);
    match tree {
        Tree::Leaf { class } => {
            output.push_str(&format!(
                "{}<{} type=\"{}\" class=\"{}\"/>\n",
                indent,
                tag,
                TYPE_LEAF,
                escape_xml(class)
            ));
        }
        Tree::Node {
            feature,
            threshold,
            low,
            high,
        } => {
            output.push_str(&format!(
                "{}<{} type=\"{}\" feature=\"{}\" threshold=\"{}\">\n",
                indent,
                tag,
                TYPE_NODE,
                escape_xml(feature),
                format_threshold(*threshold)
            ));
            serialize_element(low, TAG_LEFT, level + 1, output);
            serialize_element(high, TAG_RIGHT, level + 1, output);
            output.push_str(&format!("{}</{}>\n", indent, tag));
        }
    }
}

/// Escape XML special characters in attribute values.
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_a_single_split() {
        let tree = Tree::node("F", 1.0, Tree::leaf("A"), Tree::leaf("B"));
        insta::assert_snapshot!(to_xml_str(&tree), @r#"
        <?xml version="1.0" encoding="UTF-8"?>
        <root type="node" feature="F" threshold="1.0">
            <left type="leaf" class="A"/>
            <right type="leaf" class="B"/>
        </root>
        "#);
    }

    #[test]
    fn nests_left_before_right() {
        let tree = Tree::node(
            "F",
            1.0,
            Tree::node("G", 2.5, Tree::leaf("A"), Tree::leaf("B")),
            Tree::leaf("C"),
        );
        insta::assert_snapshot!(to_xml_str(&tree), @r#"
        <?xml version="1.0" encoding="UTF-8"?>
        <root type="node" feature="F" threshold="1.0">
            <left type="node" feature="G" threshold="2.5">
                <left type="leaf" class="A"/>
                <right type="leaf" class="B"/>
            </left>
            <right type="leaf" class="C"/>
        </root>
        "#);
    }

    #[test]
    fn escapes_attribute_values() {
        let tree = Tree::node("a<b", 1.0, Tree::leaf("x\"y"), Tree::leaf("p&q"));
        let xml = to_xml_str(&tree);
        assert!(xml.contains("feature=\"a&lt;b\""));
        assert!(xml.contains("class=\"x&quot;y\""));
        assert!(xml.contains("class=\"p&amp;q\""));
    }

    #[test]
    fn a_bare_leaf_is_still_representable() {
        let xml = to_xml_str(&Tree::leaf("A"));
        assert!(xml.ends_with("<root type=\"leaf\" class=\"A\"/>\n"));
    }
}
