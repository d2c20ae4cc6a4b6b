//! RFD decay model.
//!
//! The model is implemented as small, pure functions so that the CLI, TUI, and
//! export code can stay generic over how predictions are consumed.

pub mod decay;

pub use decay::*;
