//! Terminal plotting for the decline curve.

pub mod ascii;

pub use ascii::*;
