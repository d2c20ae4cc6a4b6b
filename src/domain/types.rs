//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during prediction
//! - exported to JSON/CSV
//! - reloaded later for plotting or comparisons

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Shape parameters of the RFD decay model.
///
/// The model predicts the decline of rate of force development (RFD) after
/// aerobic exercise as an exponential approach to an asymptotic loss:
///
/// `scaling(d) = k_rfd * (1 - exp(-a * (d - d0)))` for `d > d0`, else `0`
/// `rfd(d)     = rfd_peak * (1 - scaling(d))`
///
/// Parameters are plain data; construction does not validate. Call
/// [`ModelParams::validate`] at input boundaries (CLI/TUI) to reject values
/// outside the physiologically meaningful ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParams {
    /// Baseline peak RFD (N/s). Non-negative.
    pub rfd_peak: f64,
    /// Asymptotic maximum fractional decline, in `[0, 1]`.
    pub k_rfd: f64,
    /// Decay rate constant (1/min). Non-negative.
    pub a: f64,
    /// Onset offset (min): durations at or below this see no decline.
    pub d0: f64,
}

impl ModelParams {
    /// Default parameter set (N/s, min).
    pub fn defaults() -> Self {
        Self {
            rfd_peak: 10_000.0,
            k_rfd: 0.8,
            a: 0.25,
            d0: 2.0,
        }
    }

    /// Reject parameter values outside their documented ranges.
    ///
    /// The core model itself accepts any finite floats (and produces
    /// mathematically well-defined output for them); this check exists so the
    /// CLI and TUI can surface a clear usage error instead of a nonsensical
    /// curve.
    pub fn validate(&self) -> Result<(), AppError> {
        if !self.rfd_peak.is_finite() || self.rfd_peak < 0.0 {
            return Err(AppError::usage(format!(
                "Peak RFD must be a non-negative number (got {})",
                self.rfd_peak
            )));
        }
        if !self.k_rfd.is_finite() || !(0.0..=1.0).contains(&self.k_rfd) {
            return Err(AppError::usage(format!(
                "Scaling factor k_RFD must be within [0, 1] (got {})",
                self.k_rfd
            )));
        }
        if !self.a.is_finite() || self.a < 0.0 {
            return Err(AppError::usage(format!(
                "Rate constant a must be a non-negative number (got {})",
                self.a
            )));
        }
        if !self.d0.is_finite() || self.d0 < 0.0 {
            return Err(AppError::usage(format!(
                "Onset time d0 must be a non-negative number (got {})",
                self.d0
            )));
        }
        Ok(())
    }
}

/// One model evaluation: predicted RFD and the percent loss versus peak.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted RFD at the requested duration (N/s).
    pub rfd_pred: f64,
    /// Percent decline relative to `rfd_peak`, in `[0, 100 * k_rfd]`.
    pub loss_percent: f64,
}

/// Duration range and resolution for curve sampling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveDomain {
    /// First sampled duration (min).
    pub start: f64,
    /// Last sampled duration (min), inclusive.
    pub end: f64,
    /// Number of samples across `[start, end]`.
    pub count: usize,
}

impl CurveDomain {
    /// Default plotting domain: 200 points over `[0, 60]` minutes.
    pub fn defaults() -> Self {
        Self {
            start: 0.0,
            end: 60.0,
            count: 200,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if !self.start.is_finite() || !self.end.is_finite() || self.end <= self.start {
            return Err(AppError::usage(format!(
                "Curve domain must satisfy start < end (got [{}, {}])",
                self.start, self.end
            )));
        }
        if self.count < 2 {
            return Err(AppError::usage(format!(
                "Curve must have at least 2 points (got {})",
                self.count
            )));
        }
        Ok(())
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults). The TUI mutates a copy of
/// it on every interaction and rebuilds the outputs from scratch; no model
/// state lives outside this struct.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub params: ModelParams,
    /// Selected exercise duration (min) for the headline prediction.
    pub duration: f64,
    pub domain: CurveDomain,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_csv: Option<PathBuf>,
    pub export_curve: Option<PathBuf>,
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.params.validate()?;
        self.domain.validate()?;
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(AppError::usage(format!(
                "Exercise duration must be a non-negative number (got {})",
                self.duration
            )));
        }
        Ok(())
    }
}

/// A saved curve file (JSON).
///
/// This is the "portable" representation of a run: the parameters, the
/// headline prediction, and a precomputed grid for quick re-plotting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveFile {
    pub tool: String,
    pub params: ModelParams,
    /// Selected duration (min) the headline prediction was computed at.
    pub duration: f64,
    pub prediction: Prediction,
    pub grid: CurveGrid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveGrid {
    pub duration_min: Vec<f64>,
    pub rfd: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_are_valid() {
        assert!(ModelParams::defaults().validate().is_ok());
        assert!(CurveDomain::defaults().validate().is_ok());
    }

    #[test]
    fn k_rfd_out_of_range_rejected() {
        let mut p = ModelParams::defaults();
        p.k_rfd = 1.2;
        assert!(p.validate().is_err());
        p.k_rfd = -0.1;
        assert!(p.validate().is_err());
    }

    #[test]
    fn negative_peak_rejected() {
        let mut p = ModelParams::defaults();
        p.rfd_peak = -1.0;
        assert!(p.validate().is_err());
    }

    #[test]
    fn degenerate_domain_rejected() {
        let d = CurveDomain {
            start: 10.0,
            end: 10.0,
            count: 200,
        };
        assert!(d.validate().is_err());
        let d = CurveDomain {
            start: 0.0,
            end: 60.0,
            count: 1,
        };
        assert!(d.validate().is_err());
    }
}
