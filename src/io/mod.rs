//! Input/output helpers.
//!
//! - curve JSON read/write (`curve`)
//! - curve CSV export (`export`)

pub mod curve;
pub mod export;

pub use curve::*;
pub use export::*;
