//! Shared "model run" logic used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! params -> headline prediction -> sampled curve
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use crate::domain::{Prediction, SimConfig};
use crate::model;

/// All computed outputs of a single model run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Prediction at the selected duration.
    pub prediction: Prediction,
    /// Sampled (duration, rfd_pred) curve over the configured domain.
    pub curve: Vec<(f64, f64)>,
}

/// Evaluate the model at the selected duration and sample the full curve.
///
/// Pure: the same config always yields the same output, so callers are free
/// to re-run it on every interaction.
pub fn run_model(config: &SimConfig) -> RunOutput {
    let prediction = model::predict(&config.params, config.duration);
    let curve = model::sample_curve(
        &config.params,
        config.domain.start,
        config.domain.end,
        config.domain.count,
    );
    RunOutput { prediction, curve }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CurveDomain, ModelParams};

    fn config() -> SimConfig {
        SimConfig {
            params: ModelParams::defaults(),
            duration: 20.0,
            domain: CurveDomain::defaults(),
            plot: false,
            plot_width: 100,
            plot_height: 25,
            export_csv: None,
            export_curve: None,
        }
    }

    #[test]
    fn run_produces_prediction_and_curve() {
        let run = run_model(&config());
        assert_eq!(run.curve.len(), 200);
        assert!(run.prediction.rfd_pred > 0.0);
        assert!(run.prediction.loss_percent > 0.0);
    }

    #[test]
    fn run_is_deterministic() {
        let a = run_model(&config());
        let b = run_model(&config());
        assert_eq!(a.prediction, b.prediction);
        assert_eq!(a.curve, b.curve);
    }
}
