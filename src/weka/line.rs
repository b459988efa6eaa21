//! Line decoder for the Weka tree-dump format
//!
//! Each line of a Weka dump describes one branch of a split:
//!
//! ```text
//! |   |   feature <= 1.25
//! |   |   feature > 1.25: Running (35.0/3.0)
//! ```
//!
//! Leading `|` markers encode the nesting depth, `<=` marks the low (left)
//! branch and `>` the high (right) branch, and a trailing `: label` marks a
//! branch that ends in a leaf. Tokenization splits on runs of spaces/tabs and
//! on a colon immediately followed by whitespace, so `1.25: Running` breaks
//! apart even without a space before the colon.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Splits on whitespace runs, or on a colon that is followed by whitespace.
/// A colon with no whitespace after it stays inside its token.
static TOKEN_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]+|:[ \t]+").expect("token split pattern is valid"));

/// The depth marker glyph Weka indents branch lines with.
const DEPTH_MARKER: &str = "|";

const OP_LOW: &str = "<=";
const OP_HIGH: &str = ">";

/// Which side of a split a line describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// `feature <= threshold`, the first (left) branch of the split.
    Low,
    /// `feature > threshold`, the second (right) branch of the split.
    High,
}

/// One decoded line of a Weka tree dump.
///
/// A terminal line still carries its feature and threshold: it means "this
/// branch, after the comparison, immediately ends in a leaf", not "this line
/// has no comparison".
#[derive(Debug, Clone, PartialEq)]
pub struct TreeLine {
    /// Number of leading `|` markers. Informational only: the tree builder
    /// pairs lines by feature/threshold, never by depth.
    pub depth: usize,
    pub side: Side,
    pub feature: String,
    pub threshold: f64,
    /// Leaf label, present when the branch terminates here.
    pub terminal: Option<String>,
}

impl TreeLine {
    pub fn is_low(&self) -> bool {
        self.side == Side::Low
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal.is_some()
    }

    /// Whether `other` is the sibling that completes this line's split:
    /// same feature, exactly equal threshold, opposite side.
    pub fn is_sibling_of(&self, other: &TreeLine) -> bool {
        self.feature == other.feature
            && self.threshold == other.threshold
            && self.side != other.side
    }
}

/// Errors produced when a raw line fails tokenization or field parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum MalformedLineError {
    /// Fewer than `feature op threshold` tokens after the depth markers.
    MissingFields { line: String },
    /// The comparison operator is neither `<=` nor `>`.
    UnknownOperator { token: String },
    /// The threshold token does not parse as a 64-bit float.
    InvalidThreshold { token: String },
}

impl fmt::Display for MalformedLineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedLineError::MissingFields { line } => {
                write!(
                    f,
                    "expected 'feature <=|> threshold' after the depth markers in '{}'",
                    line
                )
            }
            MalformedLineError::UnknownOperator { token } => {
                write!(f, "incorrect token '{}', operator <= or > expected", token)
            }
            MalformedLineError::InvalidThreshold { token } => {
                write!(f, "threshold '{}' is not a number", token)
            }
        }
    }
}

impl std::error::Error for MalformedLineError {}

/// Decode one raw line of a Weka tree dump.
///
/// The line is right-trimmed first (tolerates CRLF input and trailing
/// blanks), then split into tokens. Leading `|` tokens are counted as the
/// depth; the next three tokens are feature, operator and threshold; a
/// fourth token, if present, is the leaf label. Anything after the fourth
/// token (Weka's purity counts like `(35.0/3.0)`) is ignored.
pub fn decode(raw: &str) -> Result<TreeLine, MalformedLineError> {
    let trimmed = raw.trim_end();
    let tokens: Vec<&str> = TOKEN_SPLIT.split(trimmed).collect();

    let depth = tokens
        .iter()
        .take_while(|token| **token == DEPTH_MARKER)
        .count();
    let fields = &tokens[depth..];
    if fields.len() < 3 {
        return Err(MalformedLineError::MissingFields {
            line: trimmed.to_string(),
        });
    }

    let side = match fields[1] {
        OP_LOW => Side::Low,
        OP_HIGH => Side::High,
        other => {
            return Err(MalformedLineError::UnknownOperator {
                token: other.to_string(),
            })
        }
    };
    let threshold = fields[2]
        .parse::<f64>()
        .map_err(|_| MalformedLineError::InvalidThreshold {
            token: fields[2].to_string(),
        })?;

    Ok(TreeLine {
        depth,
        side,
        feature: fields[0].to_string(),
        threshold,
        terminal: fields.get(3).map(|label| label.to_string()),
    })
}
