//! Formatting helpers shared by the CLI and the terminal renderer

pub mod display;

pub use display::{Color, ColorOutput, GridFormatter};
