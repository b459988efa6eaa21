//! Tree reconstruction from decoded dump lines
//!
//! A Weka dump has no line for a split itself, only one line per branch, and
//! the low (`<=`) branch always comes first. The builder therefore reads the
//! first line as the current split, scans forward for the sibling line that
//! completes it (same feature, same threshold, opposite side), and recurses:
//! the lines between the two siblings describe the low subtree, the lines
//! after the sibling describe the high subtree. A terminal line ends its
//! branch in a leaf immediately, with no descendant lines to consume.
//!
//! Each recursive call works on an immutable sub-slice of the input, so no
//! state is shared across calls. Pairing is done purely by feature/threshold
//! matching; the decoded depth markers are never consulted.

use crate::weka::line::TreeLine;
use crate::weka::tree::Tree;
use std::fmt;

/// Errors signaling a structurally invalid line sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildError {
    /// A subtree was asked to build from zero lines: either the input was
    /// empty, or a non-terminal branch ran out of lines (typically because
    /// a low line's matching high sibling never appeared).
    EmptyInput,
    /// A subtree's first line is a high (`>`) line; every well-formed
    /// subtree starts with its low (`<=`) branch.
    HighSideFirst { feature: String, threshold: f64 },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::EmptyInput => {
                write!(f, "cannot build a subtree from an empty line sequence")
            }
            BuildError::HighSideFirst { feature, threshold } => {
                write!(
                    f,
                    "expected a low (<=) side line first, got '{} > {}'",
                    feature, threshold
                )
            }
        }
    }
}

impl std::error::Error for BuildError {}

/// Reconstruct the decision tree from the full ordered line sequence.
///
/// The returned tree is always an internal node: the first low line stands
/// in for the root split, which the dump format never writes out.
pub fn build_tree(lines: &[TreeLine]) -> Result<Tree, BuildError> {
    let (first, rest) = lines.split_first().ok_or(BuildError::EmptyInput)?;
    if !first.is_low() {
        return Err(BuildError::HighSideFirst {
            feature: first.feature.clone(),
            threshold: first.threshold,
        });
    }

    // One scan locates the sibling; its position determines both branch
    // spans. Lines between the siblings belong to the low subtree, lines
    // after the sibling belong to the high subtree. A missing sibling
    // leaves the high span empty, which fails below as EmptyInput.
    let (low_lines, sibling, high_lines) =
        match rest.iter().position(|line| line.is_sibling_of(first)) {
            Some(at) => (&rest[..at], Some(&rest[at]), &rest[at + 1..]),
            None => (rest, None, &rest[..0]),
        };

    let low = match &first.terminal {
        Some(class) => Tree::leaf(class.clone()),
        None => build_tree(low_lines)?,
    };
    let high = match sibling.and_then(|line| line.terminal.as_deref()) {
        Some(class) => Tree::leaf(class),
        None => build_tree(high_lines)?,
    };

    Ok(Tree::node(first.feature.clone(), first.threshold, low, high))
}
