//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the model code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{ModelParams, Prediction, SimConfig};

/// Format the results block for one prediction.
///
/// Layout: baseline peak, duration, predicted RFD, percent loss, then a
/// parameter caption.
pub fn format_prediction(config: &SimConfig, prediction: &Prediction) -> String {
    let mut out = String::new();

    out.push_str("=== rfdsim - Nonlinear RFD Prediction ===\n");
    out.push_str(&format!(
        "Baseline Peak RFD:            {:.1} N/s\n",
        config.params.rfd_peak
    ));
    out.push_str(&format!(
        "Exercise Duration:            {:.1} min\n",
        config.duration
    ));
    out.push_str(&format!(
        "Predicted RFD After Exercise: {:.1} N/s\n",
        prediction.rfd_pred
    ));
    out.push_str(&format!(
        "Predicted % Loss:             {:.1}%\n",
        prediction.loss_percent
    ));
    out.push('\n');
    out.push_str(&format!("{}\n", format_params_caption(&config.params)));

    out
}

/// One-line parameter caption (also used by the TUI header).
pub fn format_params_caption(params: &ModelParams) -> String {
    format!(
        "Model parameters: k_RFD = {:.2}, a = {:.2}, d0 = {:.1}",
        params.k_rfd, params.a, params.d0
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CurveDomain, ModelParams};
    use crate::model::predict;

    #[test]
    fn prediction_block_golden() {
        let config = SimConfig {
            params: ModelParams::defaults(),
            duration: 20.0,
            domain: CurveDomain::defaults(),
            plot: false,
            plot_width: 100,
            plot_height: 25,
            export_csv: None,
            export_curve: None,
        };
        let prediction = predict(&config.params, config.duration);
        let txt = format_prediction(&config, &prediction);

        assert!(txt.contains("Baseline Peak RFD:            10000.0 N/s"));
        assert!(txt.contains("Exercise Duration:            20.0 min"));
        assert!(txt.contains("Predicted RFD After Exercise: 2088.9 N/s"));
        assert!(txt.contains("Predicted % Loss:             79.1%"));
        assert!(txt.contains("k_RFD = 0.80, a = 0.25, d0 = 2.0"));
    }

    #[test]
    fn caption_formats_params() {
        let caption = format_params_caption(&ModelParams::defaults());
        assert_eq!(caption, "Model parameters: k_RFD = 0.80, a = 0.25, d0 = 2.0");
    }
}
