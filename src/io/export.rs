//! Export the sampled curve to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::ModelParams;
use crate::error::AppError;
use crate::model::predict;

/// Write the sampled curve to a CSV file.
///
/// Each row carries the duration, the predicted RFD, and the percent loss at
/// that duration (recomputed from the parameters so the CSV is self-contained).
pub fn write_curve_csv(
    path: &Path,
    params: &ModelParams,
    curve: &[(f64, f64)],
) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::usage(format!(
            "Failed to create export CSV '{}': {e}",
            path.display()
        ))
    })?;

    // Header
    writeln!(file, "duration_min,rfd_pred,loss_percent")
        .map_err(|e| AppError::usage(format!("Failed to write export CSV header: {e}")))?;

    for &(duration, rfd_pred) in curve {
        let loss = predict(params, duration).loss_percent;
        writeln!(file, "{duration:.6},{rfd_pred:.6},{loss:.6}")
            .map_err(|e| AppError::usage(format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_curve;

    #[test]
    fn csv_has_header_and_one_row_per_point() {
        let params = ModelParams::defaults();
        let curve = sample_curve(&params, 0.0, 60.0, 10);

        let path = std::env::temp_dir().join("rfdsim_export_csv_test.csv");
        write_curve_csv(&path, &params, &curve).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "duration_min,rfd_pred,loss_percent");
        assert_eq!(lines.len(), 11);
        // First sample is at duration 0: full peak, zero loss.
        assert_eq!(lines[1], "0.000000,10000.000000,0.000000");
    }
}
