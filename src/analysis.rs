//! Combined per-series analysis.
//!
//! Runs the limit calculator and all three run-rule detectors over one
//! sample series and bundles the results for the rendering layer: band
//! values for reference lines, ranges for shaded annotations and arrows,
//! and per-point significance flags for point styling.

use serde::{Deserialize, Serialize};

use crate::error::SpcError;
use crate::limits::{compute_limits_with, ControlLimits, SpreadConvention};
use crate::rules::{detect_bias, detect_oscillation, detect_trend, DetectionRange};
use crate::series::SampleSeries;

/// Everything the rendering layer needs for one series.
///
/// All fields are derived from the input series in a single pass and no
/// information is lost through merging: each flagged index can be
/// reconstructed exactly from the raw series plus the ranges and limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesAnalysis {
    /// Center line, spread, and the seven control bands.
    pub limits: ControlLimits,
    /// Sustained one-sided runs, signed.
    pub bias: Vec<DetectionRange>,
    /// Monotonic runs, signed.
    pub trends: Vec<DetectionRange>,
    /// Strictly alternating runs, unsigned.
    pub oscillations: Vec<DetectionRange>,
    /// Per-sample out-of-control flags, parallel to the series.
    pub significant: Vec<bool>,
}

/// Analyze one series with the default (sample) spread convention.
///
/// # Errors
///
/// [`SpcError::InsufficientData`] when the series is too short for limit
/// computation. Detectors never error: a series shorter than a detector's
/// window contributes an empty range list.
///
/// # Examples
///
/// ```
/// use replay_spc::analysis::analyze;
/// use replay_spc::rules::Sign;
/// use replay_spc::series::SampleSeries;
///
/// let values = vec![0.0, 0.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 1.0, 1.0, 1.0, 1.0];
/// let frames = (0..15).map(|i| i * 160).collect();
/// let series = SampleSeries::new(values, frames).unwrap();
///
/// let analysis = analyze(&series).unwrap();
/// assert_eq!(analysis.bias.len(), 1);
/// assert_eq!((analysis.bias[0].start, analysis.bias[0].end), (2, 11));
/// assert_eq!(analysis.bias[0].sign, Some(Sign::Positive));
/// ```
pub fn analyze(series: &SampleSeries) -> Result<SeriesAnalysis, SpcError> {
    analyze_with(series, SpreadConvention::Sample)
}

/// Analyze one series with an explicit spread convention.
///
/// # Errors
///
/// [`SpcError::InsufficientData`] when the series is too short for limit
/// computation under the chosen convention.
pub fn analyze_with(
    series: &SampleSeries,
    convention: SpreadConvention,
) -> Result<SeriesAnalysis, SpcError> {
    let values = series.values();
    let limits = compute_limits_with(values, convention)?;

    Ok(SeriesAnalysis {
        bias: detect_bias(values, limits.center()),
        trends: detect_trend(values, limits.spread()),
        oscillations: detect_oscillation(values),
        significant: limits.significance_flags(values),
        limits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Sign;

    fn series(values: Vec<f64>) -> SampleSeries {
        let frames = (0..values.len() as u64).map(|i| i * 160).collect();
        SampleSeries::new(values, frames).unwrap()
    }

    #[test]
    fn test_end_to_end_bias_scenario() {
        // Nine 5's after the stripped prefix, then a drop: the bias range
        // must cover exactly indices 2..=10.
        let s = series(vec![
            0.0, 0.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 1.0, 1.0, 1.0, 1.0,
        ]);
        let analysis = analyze(&s).unwrap();

        assert_eq!(analysis.bias.len(), 1);
        assert_eq!(
            analysis.bias[0],
            DetectionRange {
                start: 2,
                end: 11,
                sign: Some(Sign::Positive)
            }
        );
        // Center is the trimmed mean, ~3.77.
        assert!((analysis.limits.center() - 49.0 / 13.0).abs() < 1e-12);
    }

    #[test]
    fn test_short_series_yields_empty_detections() {
        // Long enough for limits (>= 4) but shorter than every window.
        let s = series(vec![0.0, 0.0, 3.0, 4.0, 5.0]);
        let analysis = analyze(&s).unwrap();
        assert!(analysis.bias.is_empty());
        assert!(analysis.trends.is_empty());
        assert!(analysis.oscillations.is_empty());
        assert_eq!(analysis.significant.len(), 5);
    }

    #[test]
    fn test_too_short_for_limits_errors() {
        let s = series(vec![0.0, 0.0, 3.0]);
        assert_eq!(
            analyze(&s).unwrap_err(),
            SpcError::InsufficientData {
                required: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_degenerate_series_analyzes_without_nan() {
        let s = series(vec![0.0, 0.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0]);
        let analysis = analyze(&s).unwrap();
        assert!(analysis.limits.is_degenerate());
        assert!(analysis.significant.iter().all(|&f| !f));
        // Constant above zero spread: the weak-trend span clause fires, but
        // nothing is NaN and the output stays well-formed.
        for range in &analysis.trends {
            assert!(range.end <= s.len());
        }
    }

    #[test]
    fn test_significance_flags_parallel_to_series() {
        let mut values = vec![0.0, 0.0];
        values.extend((0..20).map(|i| 10.0 + f64::from(i % 3)));
        values.push(100.0); // far outlier
        let s = series(values);
        let analysis = analyze(&s).unwrap();
        assert_eq!(analysis.significant.len(), s.len());
        assert!(analysis.significant[s.len() - 1]);
    }

    #[test]
    fn test_analysis_serializes_for_renderer() {
        let s = series(vec![
            0.0, 0.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 1.0, 1.0, 1.0, 1.0,
        ]);
        let analysis = analyze(&s).unwrap();
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["bias"][0]["sign"], "+");
        assert_eq!(json["bias"][0]["start"], 2);
        assert_eq!(json["significant"].as_array().unwrap().len(), 15);
    }

    #[test]
    fn test_population_convention_passthrough() {
        let s = series(vec![0.0, 0.0, 2.0, 4.0]);
        let sample = analyze(&s).unwrap();
        let population = analyze_with(&s, SpreadConvention::Population).unwrap();
        assert!(population.limits.spread() < sample.limits.spread());
    }
}
