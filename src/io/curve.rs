//! Read/write curve JSON files.
//!
//! Curve JSON is the "portable" representation of a run:
//! - model parameters
//! - the selected duration and its headline prediction
//! - a precomputed curve grid for quick plotting
//!
//! The schema is defined by `domain::CurveFile`.

use std::fs::File;
use std::path::Path;

use crate::app::pipeline::RunOutput;
use crate::domain::{CurveFile, CurveGrid, SimConfig};
use crate::error::AppError;

/// Write a curve JSON file.
pub fn write_curve_json(path: &Path, config: &SimConfig, run: &RunOutput) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::usage(format!(
            "Failed to create curve JSON '{}': {e}",
            path.display()
        ))
    })?;

    let (duration_min, rfd) = run.curve.iter().copied().unzip();

    let curve = CurveFile {
        tool: "rfdsim".to_string(),
        params: config.params,
        duration: config.duration,
        prediction: run.prediction,
        grid: CurveGrid { duration_min, rfd },
    };

    serde_json::to_writer_pretty(file, &curve)
        .map_err(|e| AppError::usage(format!("Failed to write curve JSON: {e}")))?;

    Ok(())
}

/// Read a curve JSON file.
pub fn read_curve_json(path: &Path) -> Result<CurveFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::usage(format!("Failed to open curve JSON '{}': {e}", path.display()))
    })?;
    let curve: CurveFile = serde_json::from_reader(file)
        .map_err(|e| AppError::usage(format!("Invalid curve JSON: {e}")))?;
    Ok(curve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_model;
    use crate::domain::{CurveDomain, ModelParams};

    #[test]
    fn curve_json_round_trip() {
        let config = SimConfig {
            params: ModelParams::defaults(),
            duration: 20.0,
            domain: CurveDomain {
                start: 0.0,
                end: 60.0,
                count: 50,
            },
            plot: false,
            plot_width: 100,
            plot_height: 25,
            export_csv: None,
            export_curve: None,
        };
        let run = run_model(&config);

        let dir = std::env::temp_dir();
        let path = dir.join("rfdsim_curve_roundtrip_test.json");
        write_curve_json(&path, &config, &run).unwrap();
        let loaded = read_curve_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.tool, "rfdsim");
        assert_eq!(loaded.params, config.params);
        assert_eq!(loaded.duration, config.duration);
        assert_eq!(loaded.prediction, run.prediction);
        assert_eq!(loaded.grid.duration_min.len(), 50);
        assert_eq!(loaded.grid.rfd.len(), 50);
        assert_eq!(loaded.grid.duration_min[0], 0.0);
        assert_eq!(loaded.grid.rfd[0], config.params.rfd_peak);
    }

    #[test]
    fn missing_file_is_a_usage_error() {
        let err = read_curve_json(Path::new("/nonexistent/rfdsim.json")).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_USAGE);
    }
}
