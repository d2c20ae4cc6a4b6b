//! Exponential-decay RFD prediction.
//!
//! The model:
//!
//! - `scaling(d) = k_rfd * (1 - exp(-a * (d - d0)))` for `d > d0`, else `0`
//! - `rfd(d) = rfd_peak * (1 - scaling(d))`
//! - `loss% = 100 * (1 - rfd(d) / rfd_peak)`
//!
//! Numerical notes:
//! - `1 - exp(-x)` is computed as `-expm1(-x)` to avoid cancellation for
//!   small `a * (d - d0)`.
//! - The loss ratio is undefined when `rfd_peak = 0`. Algebraically
//!   `loss% = 100 * scaling(d)` wherever the ratio exists, so we use the ratio
//!   form only when `rfd_peak > 0` and fall back to the scaling form
//!   otherwise. `predict` is total: no input produces NaN.

use crate::domain::{ModelParams, Prediction};

/// Fractional decline at `duration`, in `[0, k_rfd]`.
///
/// Zero for all durations at or below the onset offset `d0`; monotonically
/// increasing above it, approaching `k_rfd` as duration grows.
pub fn scaling(params: &ModelParams, duration: f64) -> f64 {
    if duration <= params.d0 {
        return 0.0;
    }
    let x = params.a * (duration - params.d0);
    // 1 - exp(-x) computed as -expm1(-x).
    params.k_rfd * -(-x).exp_m1()
}

/// Predict RFD and percent loss at `duration`.
pub fn predict(params: &ModelParams, duration: f64) -> Prediction {
    let scaling = scaling(params, duration);
    let rfd_pred = params.rfd_peak * (1.0 - scaling);
    let loss_percent = if params.rfd_peak > 0.0 {
        100.0 * (1.0 - rfd_pred / params.rfd_peak)
    } else {
        100.0 * scaling
    };
    Prediction {
        rfd_pred,
        loss_percent,
    }
}

/// Sample the predicted RFD curve over `[start, end]`.
///
/// Returns `count` (duration, rfd_pred) pairs at evenly spaced durations in
/// ascending order, endpoints included. Fully materialized and deterministic:
/// identical inputs yield identical output.
pub fn sample_curve(params: &ModelParams, start: f64, end: f64, count: usize) -> Vec<(f64, f64)> {
    let count = count.max(2);
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let u = i as f64 / (count as f64 - 1.0);
        let d = start + u * (end - start);
        out.push((d, predict(params, d).rfd_pred));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> ModelParams {
        ModelParams::defaults()
    }

    #[test]
    fn no_decline_at_or_below_onset() {
        let p = defaults();
        for &d in &[0.0, 0.5, 1.0, 2.0] {
            let out = predict(&p, d);
            assert_eq!(out.rfd_pred, p.rfd_peak, "duration {d} should be at peak");
            assert_eq!(out.loss_percent, 0.0, "duration {d} should have zero loss");
        }
    }

    #[test]
    fn twenty_minute_prediction() {
        let p = defaults();
        let out = predict(&p, 20.0);
        // scaling = 0.8 * (1 - exp(-0.25 * 18)) = 0.8 * (1 - exp(-4.5))
        let expected_scaling = 0.8 * (1.0 - (-4.5_f64).exp());
        let expected_rfd = 10_000.0 * (1.0 - expected_scaling);
        assert!((out.rfd_pred - expected_rfd).abs() < 1e-9);
        assert!((out.loss_percent - 100.0 * expected_scaling).abs() < 1e-9);
        // Sanity against hand-computed magnitudes.
        assert!((out.rfd_pred - 2088.9).abs() < 1.0);
        assert!((out.loss_percent - 79.1).abs() < 0.1);
    }

    #[test]
    fn loss_matches_ratio_and_scaling_forms() {
        let p = defaults();
        for &d in &[0.0, 1.0, 2.0, 2.5, 5.0, 20.0, 60.0, 240.0] {
            let out = predict(&p, d);
            let via_ratio = 100.0 * (1.0 - out.rfd_pred / p.rfd_peak);
            let via_scaling = 100.0 * scaling(&p, d);
            assert!((out.loss_percent - via_ratio).abs() < 1e-9);
            assert!((out.loss_percent - via_scaling).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_peak_is_total() {
        let p = ModelParams {
            rfd_peak: 0.0,
            ..defaults()
        };
        let out = predict(&p, 20.0);
        assert_eq!(out.rfd_pred, 0.0);
        assert!(out.loss_percent.is_finite());
        // Loss falls back to the scaling identity.
        assert!((out.loss_percent - 100.0 * scaling(&p, 20.0)).abs() < 1e-12);
    }

    #[test]
    fn rfd_non_increasing_in_duration() {
        let p = defaults();
        let mut prev = f64::INFINITY;
        for i in 0..=600 {
            let d = i as f64 * 0.1;
            let rfd = predict(&p, d).rfd_pred;
            assert!(rfd <= prev + 1e-12, "rfd increased at duration {d}");
            prev = rfd;
        }
    }

    #[test]
    fn asymptotic_bound() {
        let p = defaults();
        let out = predict(&p, 1e6);
        let floor = p.rfd_peak * (1.0 - p.k_rfd);
        assert!((out.rfd_pred - floor).abs() < 1e-6);
        assert!((out.loss_percent - 100.0 * p.k_rfd).abs() < 1e-6);
    }

    #[test]
    fn scaling_stable_just_past_onset() {
        // Tiny (duration - d0) exercises the expm1 path; the result should be
        // tiny and positive, not a cancellation artifact.
        let p = defaults();
        let s = scaling(&p, p.d0 + 1e-9);
        assert!(s > 0.0);
        assert!(s < 1e-8);
        let linear = p.k_rfd * p.a * 1e-9;
        assert!((s - linear).abs() < 1e-15);
    }

    #[test]
    fn curve_shape_and_endpoints() {
        let p = defaults();
        let curve = sample_curve(&p, 0.0, 60.0, 200);
        assert_eq!(curve.len(), 200);
        assert_eq!(curve[0].0, 0.0);
        assert_eq!(curve[0].1, p.rfd_peak);
        assert_eq!(curve[199].0, 60.0);

        // Durations strictly ascending and (to fp tolerance) evenly spaced.
        let step = 60.0 / 199.0;
        for (i, w) in curve.windows(2).enumerate() {
            assert!(w[1].0 > w[0].0, "durations not ascending at index {i}");
            assert!((w[1].0 - w[0].0 - step).abs() < 1e-9);
        }
    }

    #[test]
    fn curve_is_restartable() {
        let p = defaults();
        let a = sample_curve(&p, 0.0, 60.0, 200);
        let b = sample_curve(&p, 0.0, 60.0, 200);
        assert_eq!(a, b);
    }
}
