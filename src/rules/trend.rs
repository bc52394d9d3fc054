//! Trend detection: sustained monotonic movement.
//!
//! Nelson Rule 3: six or more consecutive points steadily increasing or
//! decreasing indicate a trend. A second clause admits weakly monotone
//! windows (plateaus allowed) whose total displacement reaches 1.5 spreads,
//! catching slow monotone creep that a strict-inequality test would miss.
//!
//! # Reference
//!
//! Nelson, L.S. (1984). "The Shewhart Control Chart — Tests for Special
//! Causes", *Journal of Quality Technology* 16(4), pp. 237-239.

use super::range::{merge_window, DetectionRange, Sign};

/// Run length for a trend violation.
pub const TREND_RUN_LENGTH: usize = 6;

/// Displacement a weakly monotone window must cover, in spreads.
const SPAN_THRESHOLD: f64 = 1.5;

/// Detect runs of monotonic (or near-monotonic with sufficient span)
/// movement.
///
/// Every window of [`TREND_RUN_LENGTH`] consecutive points is tested. A
/// window matches as [`Sign::Positive`] when every consecutive pair is
/// strictly increasing, or when every pair is non-decreasing and the window
/// spans at least 1.5 × `spread` end to end; symmetrically for
/// [`Sign::Negative`]. Adjacent matching windows of the same sign are
/// coalesced.
///
/// Returns an ordered list of non-overlapping ranges; empty when the series
/// is shorter than the run length.
///
/// # Examples
///
/// ```
/// use replay_spc::rules::{detect_trend, Sign};
///
/// let values: Vec<f64> = (0..8).map(f64::from).collect();
/// let ranges = detect_trend(&values, 1.0);
/// assert_eq!(ranges.len(), 1);
/// assert_eq!((ranges[0].start, ranges[0].end), (0, 8));
/// assert_eq!(ranges[0].sign, Some(Sign::Positive));
/// ```
pub fn detect_trend(values: &[f64], spread: f64) -> Vec<DetectionRange> {
    let mut ranges = Vec::new();
    if values.len() < TREND_RUN_LENGTH {
        return ranges;
    }

    for (start, window) in values.windows(TREND_RUN_LENGTH).enumerate() {
        if let Some(sign) = window_trend(window, spread) {
            merge_window(&mut ranges, start, TREND_RUN_LENGTH, Some(sign));
        }
    }
    ranges
}

/// Classify one window, or `None` when it is not trending.
///
/// The upward test runs first, mirroring the reference behavior: a constant
/// window under zero spread satisfies the upward span clause and is tagged
/// positive.
fn window_trend(window: &[f64], spread: f64) -> Option<Sign> {
    let span_ok = (window[window.len() - 1] - window[0]).abs() >= SPAN_THRESHOLD * spread;

    let strictly_up = window.windows(2).all(|p| p[0] < p[1]);
    let weakly_up = window.windows(2).all(|p| p[0] <= p[1]);
    if strictly_up || (weakly_up && span_ok) {
        return Some(Sign::Positive);
    }

    let strictly_down = window.windows(2).all(|p| p[0] > p[1]);
    let weakly_down = window.windows(2).all(|p| p[0] >= p[1]);
    if strictly_down || (weakly_down && span_ok) {
        return Some(Sign::Negative);
    }

    None
}
