//! Formatted terminal output for predictions.

pub mod format;

pub use format::*;
