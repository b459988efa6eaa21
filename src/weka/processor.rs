//! File processing API for Weka tree dumps
//!
//! Ties the stages together: read source text, decode every line, build the
//! tree, render it in the requested output format. Used by the CLI and by
//! integration tests. Rendering failures never leave a partially written
//! output file: [`convert_file`] writes the destination only after the whole
//! conversion succeeded.

use crate::weka::builder::{build_tree, BuildError};
use crate::weka::formats;
use crate::weka::line::{decode, MalformedLineError, TreeLine};
use crate::weka::tree::Tree;
use std::fmt;
use std::fs;
use std::path::Path;

/// The output format to render a parsed tree in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented XML document (the reference output).
    Xml,
    /// Pretty-printed JSON via serde.
    Json,
    /// Box-drawing tree visualization.
    Treeviz,
    /// The Weka dump text form itself.
    Weka,
}

impl OutputFormat {
    /// Parse a format name like `xml` or `treeviz`.
    pub fn from_string(name: &str) -> Result<OutputFormat, ProcessingError> {
        match name {
            "xml" => Ok(OutputFormat::Xml),
            "json" => Ok(OutputFormat::Json),
            "treeviz" => Ok(OutputFormat::Treeviz),
            "weka" => Ok(OutputFormat::Weka),
            other => Err(ProcessingError::InvalidFormat(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Xml => "xml",
            OutputFormat::Json => "json",
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Weka => "weka",
        }
    }

    /// All available formats with a short description, for CLI help output.
    pub fn available_formats() -> Vec<(&'static str, &'static str)> {
        vec![
            ("xml", "indented XML document (default)"),
            ("json", "pretty-printed JSON"),
            ("treeviz", "box-drawing tree visualization"),
            ("weka", "the Weka dump text form"),
        ]
    }
}

/// Errors that can occur during processing.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    Io(String),
    /// A raw line failed to decode; `line` is 1-based.
    MalformedLine {
        line: usize,
        source: MalformedLineError,
    },
    /// The decoded lines do not describe a well-formed tree.
    Structure(BuildError),
    InvalidFormat(String),
    /// The tree cannot be expressed in the requested format.
    Unrepresentable(String),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::Io(msg) => write!(f, "IO error: {}", msg),
            ProcessingError::MalformedLine { line, source } => {
                write!(f, "malformed line {}: {}", line, source)
            }
            ProcessingError::Structure(err) => write!(f, "invalid tree structure: {}", err),
            ProcessingError::InvalidFormat(name) => write!(f, "unknown output format '{}'", name),
            ProcessingError::Unrepresentable(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ProcessingError {}

impl From<BuildError> for ProcessingError {
    fn from(err: BuildError) -> Self {
        ProcessingError::Structure(err)
    }
}

/// Decode every line of the source, annotating failures with the 1-based
/// line number. The whole sequence must decode before tree construction
/// starts; any malformed line aborts the conversion.
pub fn decode_source(source: &str) -> Result<Vec<TreeLine>, ProcessingError> {
    source
        .lines()
        .enumerate()
        .map(|(index, raw)| {
            decode(raw).map_err(|source| ProcessingError::MalformedLine {
                line: index + 1,
                source,
            })
        })
        .collect()
}

/// Decode the source and reconstruct the tree.
pub fn parse_tree(source: &str) -> Result<Tree, ProcessingError> {
    let lines = decode_source(source)?;
    Ok(build_tree(&lines)?)
}

/// Render a tree in the given output format.
pub fn render(tree: &Tree, format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Xml => Ok(formats::to_xml_str(tree)),
        OutputFormat::Json => serde_json::to_string_pretty(tree)
            .map_err(|e| ProcessingError::Io(e.to_string())),
        OutputFormat::Treeviz => Ok(formats::to_treeviz_str(tree)),
        OutputFormat::Weka => formats::to_weka_str(tree).ok_or_else(|| {
            ProcessingError::Unrepresentable(
                "a bare leaf has no Weka dump form".to_string(),
            )
        }),
    }
}

/// Parse the source text and render it in the given format.
pub fn process_source(source: &str, format: OutputFormat) -> Result<String, ProcessingError> {
    let tree = parse_tree(source)?;
    render(&tree, format)
}

/// Read a dump file and render it in the given format.
pub fn process_file<P: AsRef<Path>>(
    path: P,
    format: OutputFormat,
) -> Result<String, ProcessingError> {
    let content =
        fs::read_to_string(path.as_ref()).map_err(|e| ProcessingError::Io(e.to_string()))?;
    process_source(&content, format)
}

/// Convert a dump file into an output file.
///
/// The destination is written only after the whole conversion succeeded, so
/// a failed conversion leaves it absent or untouched.
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    format: OutputFormat,
) -> Result<(), ProcessingError> {
    let rendered = process_file(input, format)?;
    fs::write(output.as_ref(), rendered).map_err(|e| ProcessingError::Io(e.to_string()))
}
