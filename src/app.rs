//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the prediction pipeline
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, PlotArgs, PredictArgs};
use crate::domain::{CurveDomain, ModelParams, SimConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `rfdsim` binary.
pub fn run() -> Result<(), AppError> {
    // We want `rfdsim` and `rfdsim -d 30` to behave like `rfdsim tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing. This preserves a clean clap structure while
    // retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Predict(args) => handle_predict(args, OutputMode::TextOnly),
        Command::Curve(args) => handle_predict(args, OutputMode::WithPlot),
        Command::Plot(args) => handle_plot(args),
        Command::Tui(args) => handle_tui(args),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    TextOnly,
    WithPlot,
}

fn handle_predict(args: PredictArgs, mode: OutputMode) -> Result<(), AppError> {
    let config = sim_config_from_args(&args);
    config.validate()?;
    let run = pipeline::run_model(&config);

    println!("{}", crate::report::format_prediction(&config, &run.prediction));

    if mode == OutputMode::WithPlot && config.plot {
        let plot = crate::plot::render_ascii_plot(
            &run.curve,
            config.duration,
            run.prediction.rfd_pred,
            config.plot_width,
            config.plot_height,
        );
        println!("{plot}");
    }

    // Optional exports.
    if let Some(path) = &config.export_csv {
        crate::io::export::write_curve_csv(path, &config.params, &run.curve)?;
    }
    if let Some(path) = &config.export_curve {
        crate::io::curve::write_curve_json(path, &config, &run)?;
    }

    Ok(())
}

fn handle_tui(args: PredictArgs) -> Result<(), AppError> {
    let config = sim_config_from_args(&args);
    config.validate()?;
    crate::tui::run(config)
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let curve = crate::io::curve::read_curve_json(&args.curve)?;
    let plot = crate::plot::render_ascii_plot_from_curve_file(&curve, args.width, args.height);
    println!("{plot}");
    Ok(())
}

pub fn sim_config_from_args(args: &PredictArgs) -> SimConfig {
    SimConfig {
        params: ModelParams {
            rfd_peak: args.peak,
            k_rfd: args.k_rfd,
            a: args.rate,
            d0: args.onset,
        },
        duration: args.duration,
        domain: CurveDomain {
            start: args.domain_start,
            end: args.domain_end,
            count: args.points,
        },
        plot: !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        export_csv: args.export.clone(),
        export_curve: args.export_curve.clone(),
    }
}

/// Rewrite argv so `rfdsim` defaults to `rfdsim tui`.
///
/// Rules:
/// - `rfdsim`                  -> `rfdsim tui`
/// - `rfdsim -d 30 ...`        -> `rfdsim tui -d 30 ...`
/// - `rfdsim --help/--version` -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "predict" | "curve" | "plot" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_tui() {
        assert_eq!(rewrite_args(argv(&["rfdsim"])), argv(&["rfdsim", "tui"]));
    }

    #[test]
    fn leading_flag_routes_to_tui() {
        assert_eq!(
            rewrite_args(argv(&["rfdsim", "-d", "30"])),
            argv(&["rfdsim", "tui", "-d", "30"])
        );
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        assert_eq!(
            rewrite_args(argv(&["rfdsim", "predict", "-d", "30"])),
            argv(&["rfdsim", "predict", "-d", "30"])
        );
        assert_eq!(rewrite_args(argv(&["rfdsim", "--help"])), argv(&["rfdsim", "--help"]));
    }
}
