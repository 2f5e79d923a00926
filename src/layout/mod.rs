//! Layout engine for code/logo composition
//!
//! Takes the rendered code fragment and the logo fragment, scales both by
//! the size class factor and computes the merged canvas and the position
//! of each fragment on it.

pub mod engine;
pub mod types;

pub use engine::compute_layout;
pub use types::*;
