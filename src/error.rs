//! Error taxonomy.
//!
//! All failures are local, synchronous, and reported to the caller; nothing
//! is retried or swallowed. Detectors are deliberately infallible — a series
//! shorter than a detector's window is a benign case that yields an empty
//! result — so only limit computation and series construction produce errors.

use thiserror::Error;

/// Errors produced by limit computation and series construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpcError {
    /// The series has too few samples for the requested computation.
    ///
    /// Limit computation needs at least one trimmed sample for the
    /// population convention and two for the sample convention; returning
    /// this error keeps undefined means and NaN spreads out of results.
    #[error("insufficient data: need at least {required} samples, got {actual}")]
    InsufficientData {
        /// Minimum number of samples required.
        required: usize,
        /// Number of samples supplied.
        actual: usize,
    },

    /// The computed spread is zero, so all seven control bands collapse
    /// onto the center line.
    ///
    /// Returned by [`ControlLimits::significance`] so callers can reject a
    /// degenerate series instead of treating every point as non-significant.
    ///
    /// [`ControlLimits::significance`]: crate::limits::ControlLimits::significance
    #[error("degenerate spread: standard deviation is zero, control bands collapse")]
    DegenerateSpread,

    /// The value and frame sequences of a sample series differ in length.
    #[error("length mismatch: {values} values vs {frames} frame timestamps")]
    LengthMismatch {
        /// Number of measurement values supplied.
        values: usize,
        /// Number of frame timestamps supplied.
        frames: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_message() {
        let err = SpcError::InsufficientData {
            required: 4,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "insufficient data: need at least 4 samples, got 2"
        );
    }

    #[test]
    fn test_length_mismatch_message() {
        let err = SpcError::LengthMismatch {
            values: 10,
            frames: 9,
        };
        assert_eq!(
            err.to_string(),
            "length mismatch: 10 values vs 9 frame timestamps"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(SpcError::DegenerateSpread, SpcError::DegenerateSpread);
        assert_ne!(
            SpcError::DegenerateSpread,
            SpcError::InsufficientData {
                required: 3,
                actual: 0
            }
        );
    }
}
