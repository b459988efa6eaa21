//! Main module for the wekatree library functionality

pub mod builder;
pub mod formats;
pub mod line;
pub mod processor;
pub mod tree;

pub use builder::{build_tree, BuildError};
pub use line::{decode, MalformedLineError, Side, TreeLine};
pub use tree::Tree;
