//! Oscillation detection: sustained strict up/down alternation.
//!
//! Nelson Rule 4: fourteen or more consecutive points alternating in
//! direction indicate systematic, non-random variation (e.g. two alternating
//! streams feeding one process). A flat step never oscillates — equality
//! immediately disqualifies the window.
//!
//! # Reference
//!
//! Nelson, L.S. (1984). "The Shewhart Control Chart — Tests for Special
//! Causes", *Journal of Quality Technology* 16(4), pp. 237-239.

use super::range::{merge_window, DetectionRange, Sign};

/// Run length for an oscillation violation.
pub const OSCILLATION_RUN_LENGTH: usize = 14;

/// Detect runs of strictly alternating up/down movement.
///
/// Every window of [`OSCILLATION_RUN_LENGTH`] consecutive points is tested
/// by inspecting its 13 consecutive steps: the window qualifies iff every
/// step's direction is defined (no flat steps) and strictly alternates sign
/// from the previous step. Adjacent qualifying windows are coalesced; the
/// resulting ranges carry no sign, since alternation has no overall
/// direction.
///
/// Returns an ordered list of non-overlapping ranges; empty when the series
/// is shorter than the run length.
///
/// # Examples
///
/// ```
/// use replay_spc::rules::detect_oscillation;
///
/// let values: Vec<f64> = (0..16)
///     .map(|i| if i % 2 == 0 { 4.0 } else { 6.0 })
///     .collect();
/// let ranges = detect_oscillation(&values);
/// assert_eq!(ranges.len(), 1);
/// assert_eq!((ranges[0].start, ranges[0].end), (0, 16));
/// assert_eq!(ranges[0].sign, None);
/// ```
pub fn detect_oscillation(values: &[f64]) -> Vec<DetectionRange> {
    let mut ranges = Vec::new();
    if values.len() < OSCILLATION_RUN_LENGTH {
        return ranges;
    }

    for (start, window) in values.windows(OSCILLATION_RUN_LENGTH).enumerate() {
        if is_alternating(window) {
            merge_window(&mut ranges, start, OSCILLATION_RUN_LENGTH, None);
        }
    }
    ranges
}

/// Direction of one step, or `None` for a flat step.
fn step_direction(a: f64, b: f64) -> Option<Sign> {
    if b > a {
        Some(Sign::Positive)
    } else if b < a {
        Some(Sign::Negative)
    } else {
        None
    }
}

/// Whether every step in the window is defined and alternates sign.
///
/// The first step seeds the alternation; each later step must be the
/// negation of its predecessor.
fn is_alternating(window: &[f64]) -> bool {
    let mut expected = match step_direction(window[0], window[1]) {
        Some(first) => first.flipped(),
        None => return false,
    };
    for pair in window[1..].windows(2) {
        match step_direction(pair[0], pair[1]) {
            Some(dir) if dir == expected => expected = dir.flipped(),
            _ => return false,
        }
    }
    true
}
