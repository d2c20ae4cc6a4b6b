//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - model inputs (`ModelParams`, `CurveDomain`)
//! - model outputs (`Prediction`)
//! - run configuration derived from CLI flags (`SimConfig`)
//! - the saved-curve file schema (`CurveFile`, `CurveGrid`)

pub mod types;

pub use types::*;
