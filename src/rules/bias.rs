//! Bias detection: sustained one-sided deviation from the center line.
//!
//! Nelson Rule 2 / Western Electric Rule 4: nine or more consecutive points
//! all strictly above, or all strictly below, the center line indicate a
//! sustained shift in the process mean.
//!
//! # Reference
//!
//! Nelson, L.S. (1984). "The Shewhart Control Chart — Tests for Special
//! Causes", *Journal of Quality Technology* 16(4), pp. 237-239.

use super::range::{merge_window, DetectionRange, Sign};

/// Run length for a bias violation.
pub const BIAS_RUN_LENGTH: usize = 9;

/// Detect runs of points consistently above or below the center line.
///
/// Every window of [`BIAS_RUN_LENGTH`] consecutive points is tested; a
/// window matches as [`Sign::Positive`] when all points are strictly above
/// `center` and as [`Sign::Negative`] when all are strictly below. Points
/// exactly on the center line match neither side. Adjacent matching windows
/// of the same sign are coalesced.
///
/// Returns an ordered list of non-overlapping ranges, each covering at
/// least [`BIAS_RUN_LENGTH`] samples; empty when the series is shorter than
/// the run length.
///
/// # Examples
///
/// ```
/// use replay_spc::rules::{detect_bias, Sign};
///
/// let values = vec![6.0; 12];
/// let ranges = detect_bias(&values, 5.0);
/// assert_eq!(ranges.len(), 1);
/// assert_eq!((ranges[0].start, ranges[0].end), (0, 12));
/// assert_eq!(ranges[0].sign, Some(Sign::Positive));
/// ```
pub fn detect_bias(values: &[f64], center: f64) -> Vec<DetectionRange> {
    let mut ranges = Vec::new();
    if values.len() < BIAS_RUN_LENGTH {
        return ranges;
    }

    for (start, window) in values.windows(BIAS_RUN_LENGTH).enumerate() {
        if window.iter().all(|&v| v > center) {
            merge_window(&mut ranges, start, BIAS_RUN_LENGTH, Some(Sign::Positive));
        } else if window.iter().all(|&v| v < center) {
            merge_window(&mut ranges, start, BIAS_RUN_LENGTH, Some(Sign::Negative));
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_series_empty() {
        let values = vec![6.0; BIAS_RUN_LENGTH - 1];
        assert!(detect_bias(&values, 5.0).is_empty());
    }

    #[test]
    fn test_constant_above_spans_whole_series() {
        for n in [9, 10, 20] {
            let values = vec![6.0; n];
            let ranges = detect_bias(&values, 5.0);
            assert_eq!(ranges.len(), 1, "n = {n}");
            assert_eq!(
                ranges[0],
                DetectionRange {
                    start: 0,
                    end: n,
                    sign: Some(Sign::Positive)
                }
            );
        }
    }

    #[test]
    fn test_constant_below_is_negative() {
        let values = vec![4.0; 10];
        let ranges = detect_bias(&values, 5.0);
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].sign, Some(Sign::Negative));
    }

    #[test]
    fn test_points_on_center_line_break_run() {
        let mut values = vec![6.0; 20];
        values[10] = 5.0; // exactly on center, neither side
        let ranges = detect_bias(&values, 5.0);
        // Ten above on the left (0..=9), nine above on the right (11..=19).
        assert_eq!(ranges.len(), 2);
        assert_eq!((ranges[0].start, ranges[0].end), (0, 10));
        assert_eq!((ranges[1].start, ranges[1].end), (11, 20));
    }

    #[test]
    fn test_eight_point_run_not_flagged() {
        // Eight above, then back to center: never nine in a row.
        let mut values = vec![5.0; 20];
        for v in values.iter_mut().take(8) {
            *v = 6.0;
        }
        assert!(detect_bias(&values, 5.0).is_empty());
    }

    #[test]
    fn test_bias_does_not_extend_past_side_change() {
        // Nine 5's above center, then a drop below: the range must stop at
        // the last of the nine, not bleed into the trailing low values.
        let values = [
            0.0, 0.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 1.0, 1.0, 1.0, 1.0,
        ];
        let center = values[2..].iter().sum::<f64>() / 13.0; // ~3.77
        let ranges = detect_bias(&values, center);
        assert_eq!(ranges.len(), 1);
        assert_eq!(
            ranges[0],
            DetectionRange {
                start: 2,
                end: 11,
                sign: Some(Sign::Positive)
            }
        );
    }

    #[test]
    fn test_sign_flip_produces_two_ranges() {
        let mut values = vec![6.0; 9];
        values.extend(vec![4.0; 9]);
        let ranges = detect_bias(&values, 5.0);
        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges[0].sign, Some(Sign::Positive));
        assert_eq!(ranges[1].sign, Some(Sign::Negative));
        assert_eq!((ranges[0].start, ranges[0].end), (0, 9));
        assert_eq!((ranges[1].start, ranges[1].end), (9, 18));
    }
}
