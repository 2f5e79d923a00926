//! Vector markup tree, parsing and serialization
//!
//! Fragments travel through the pipeline as [`SvgElement`] trees; nothing is
//! written to disk between stages.

pub mod config;
pub mod parse;
pub mod serialize;
pub mod tree;

pub use config::OutputConfig;
pub use parse::parse_fragment;
pub use serialize::{serialize, serialize_element};
pub use tree::{SvgElement, SvgNode, SVG_NS};
