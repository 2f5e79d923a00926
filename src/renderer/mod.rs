//! Matrix renderer
//!
//! Turns a code matrix into an unscaled vector fragment, one filled unit
//! square per "on" module.

pub mod matrix;

pub use matrix::render_matrix;
