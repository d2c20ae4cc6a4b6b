//! Command-line parsing for the RFD decline calculator.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the modeling code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "rfdsim",
    version,
    about = "Nonlinear RFD prediction model (exponential decay after aerobic exercise)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Predict RFD at one duration and print the results block.
    Predict(PredictArgs),
    /// Print the results block plus an ASCII plot of the full decline curve,
    /// and optionally export the curve to CSV/JSON.
    Curve(PredictArgs),
    /// Plot a previously exported curve JSON.
    Plot(PlotArgs),
    /// Launch the interactive TUI.
    ///
    /// This uses the same underlying model as `rfdsim predict`, but renders
    /// results in a terminal UI using Ratatui.
    Tui(PredictArgs),
}

/// Model inputs shared by `predict`, `curve`, and `tui`.
#[derive(Debug, Parser, Clone)]
pub struct PredictArgs {
    /// Baseline peak RFD (N/s).
    #[arg(long, default_value_t = 10_000.0)]
    pub peak: f64,

    /// Aerobic exercise duration (minutes).
    #[arg(short = 'd', long, default_value_t = 20.0)]
    pub duration: f64,

    /// Scaling factor k_RFD: asymptotic maximum fractional decline, in [0, 1].
    #[arg(short = 'k', long = "k-rfd", default_value_t = 0.8)]
    pub k_rfd: f64,

    /// Decay rate constant a (1/min).
    #[arg(short = 'a', long = "rate", default_value_t = 0.25)]
    pub rate: f64,

    /// Onset time d0 (minutes): no decline at or below this duration.
    #[arg(long = "onset", default_value_t = 2.0)]
    pub onset: f64,

    /// First plotted duration (minutes).
    #[arg(long, default_value_t = 0.0)]
    pub domain_start: f64,

    /// Last plotted duration (minutes).
    #[arg(long, default_value_t = 60.0)]
    pub domain_end: f64,

    /// Number of curve samples across the plotted domain.
    #[arg(long, default_value_t = 200)]
    pub points: usize,

    /// Disable the terminal plot (only meaningful for `curve`).
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export the sampled curve to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the run (params + prediction + curve grid) to JSON.
    #[arg(long = "export-curve")]
    pub export_curve: Option<PathBuf>,
}

/// Options for plotting a saved curve.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Curve JSON file produced by `rfdsim curve --export-curve`.
    #[arg(long, value_name = "JSON")]
    pub curve: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}
