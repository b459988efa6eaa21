//! # wekatree
//!
//! A parser for Weka's textual decision-tree output.
//!
//! Weka dumps a trained binary decision tree as indented text: one line per
//! branch of a split, nesting encoded with leading `|` markers, and no
//! explicit root. This crate reconstructs the tree from that dump and
//! serializes it to XML (and a few other formats).
//!
//! Pipeline: raw lines → [`weka::line::decode`] → ordered [`weka::line::TreeLine`]
//! records → [`weka::builder::build_tree`] → [`weka::tree::Tree`] → serializers
//! in [`weka::formats`]. The [`weka::processor`] module ties the stages
//! together for file-to-file conversion.

pub mod weka;
