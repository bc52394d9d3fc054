//! Control limit calculator.
//!
//! Derives the center line, spread, and seven control bands (center and
//! ±1σ, ±2σ, ±3σ) from a sample series, and classifies individual points as
//! significant.
//!
//! The estimator is deliberately trimmed: the first two samples are
//! discarded before computing the mean and standard deviation. In the replay
//! domain the first sample is always zero and the second is near-identical
//! across games, so both would bias the estimate.
//!
//! # Significance threshold
//!
//! A point is significant when it falls outside the ±2σ bands, not the
//! literal UCL/LCL at ±3σ. This is a deliberate sensitivity setting carried
//! over from the reference behavior, not a defect; see
//! [`ControlLimits::is_significant`].
//!
//! # References
//!
//! - Western Electric (1956). *Statistical Quality Control Handbook*.
//! - Montgomery, D.C. (2019). *Introduction to Statistical Quality Control*, 8th ed.

use serde::{Deserialize, Serialize};

use crate::error::SpcError;

/// Number of leading samples discarded before estimating center and spread.
pub const TRIMMED_PREFIX: usize = 2;

/// Display labels for the seven control bands, in band order.
///
/// The ordering is fixed and must be preserved: the rendering layer zips
/// these with [`ControlLimits::bands`] to draw reference lines and the
/// legend.
pub const BAND_LABELS: [&str; 7] = ["LCL", "-2σ", "-1σ", "x-bar", "1σ", "2σ", "UCL"];

/// Convention used for the spread (standard deviation) estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpreadConvention {
    /// Sample standard deviation (n − 1 denominator). Matches the reference
    /// behavior and is the default.
    #[default]
    Sample,
    /// Population standard deviation (n denominator).
    Population,
}

/// Center line, spread, and the seven control bands for one series.
///
/// Band `k` sits at `center + (k − 3) · spread`, so `bands[0]` is the LCL
/// at −3σ, `bands[3]` is exactly the center line, and `bands[6]` is the UCL
/// at +3σ.
///
/// # Examples
///
/// ```
/// use replay_spc::limits::compute_limits;
///
/// let values = [0.0, 0.0, 2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// let limits = compute_limits(&values).unwrap();
/// assert!((limits.center() - 5.0).abs() < 1e-12);
/// assert!(limits.ucl() > limits.center());
/// assert!(limits.lcl() < limits.center());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlLimits {
    center: f64,
    spread: f64,
    bands: [f64; 7],
}

impl ControlLimits {
    /// The center line (trimmed mean).
    pub fn center(&self) -> f64 {
        self.center
    }

    /// The spread (trimmed standard deviation).
    pub fn spread(&self) -> f64 {
        self.spread
    }

    /// The seven band values, ordered LCL through UCL.
    pub fn bands(&self) -> &[f64; 7] {
        &self.bands
    }

    /// The lower control limit (center − 3σ).
    pub fn lcl(&self) -> f64 {
        self.bands[0]
    }

    /// The upper control limit (center + 3σ).
    pub fn ucl(&self) -> f64 {
        self.bands[6]
    }

    /// The bands paired with their display labels, in legend order.
    pub fn labeled_bands(&self) -> [(&'static str, f64); 7] {
        std::array::from_fn(|k| (BAND_LABELS[k], self.bands[k]))
    }

    /// Whether the spread is zero, collapsing all bands onto the center line.
    pub fn is_degenerate(&self) -> bool {
        self.spread == 0.0
    }

    /// Whether a value is out of control.
    ///
    /// True iff the value lies strictly above the +2σ band or strictly below
    /// the −2σ band. The 2σ threshold (rather than the literal UCL/LCL at
    /// 3σ) is preserved from the reference behavior as a sensitivity
    /// setting.
    ///
    /// On a degenerate chart (zero spread) every point is treated as
    /// non-significant; callers that want to reject such a series instead
    /// should use [`significance`](Self::significance) or check
    /// [`is_degenerate`](Self::is_degenerate).
    pub fn is_significant(&self, value: f64) -> bool {
        if self.is_degenerate() {
            return false;
        }
        value > self.bands[5] || value < self.bands[1]
    }

    /// Strict variant of [`is_significant`](Self::is_significant).
    ///
    /// # Errors
    ///
    /// [`SpcError::DegenerateSpread`] if the spread is zero.
    pub fn significance(&self, value: f64) -> Result<bool, SpcError> {
        if self.is_degenerate() {
            return Err(SpcError::DegenerateSpread);
        }
        Ok(self.is_significant(value))
    }

    /// Per-sample significance flags for a whole series.
    pub fn significance_flags(&self, values: &[f64]) -> Vec<bool> {
        values.iter().map(|&v| self.is_significant(v)).collect()
    }
}

/// Compute control limits with the default (sample) spread convention.
///
/// # Errors
///
/// [`SpcError::InsufficientData`] if fewer than [`TRIMMED_PREFIX`] + 2
/// samples are supplied — the trimmed sample standard deviation is undefined
/// below two retained samples, and an undefined spread must surface as an
/// error rather than a NaN.
pub fn compute_limits(values: &[f64]) -> Result<ControlLimits, SpcError> {
    compute_limits_with(values, SpreadConvention::Sample)
}

/// Compute control limits with an explicit spread convention.
///
/// # Errors
///
/// [`SpcError::InsufficientData`] if the trimmed series is too short for the
/// chosen convention (one retained sample for population, two for sample).
pub fn compute_limits_with(
    values: &[f64],
    convention: SpreadConvention,
) -> Result<ControlLimits, SpcError> {
    let min_retained = match convention {
        SpreadConvention::Sample => 2,
        SpreadConvention::Population => 1,
    };
    if values.len() < TRIMMED_PREFIX + min_retained {
        return Err(SpcError::InsufficientData {
            required: TRIMMED_PREFIX + min_retained,
            actual: values.len(),
        });
    }

    let trimmed = &values[TRIMMED_PREFIX..];
    let n = trimmed.len() as f64;
    let center = trimmed.iter().sum::<f64>() / n;

    let sum_sq = trimmed.iter().map(|x| (x - center).powi(2)).sum::<f64>();
    let spread = match convention {
        SpreadConvention::Sample => (sum_sq / (n - 1.0)).sqrt(),
        SpreadConvention::Population => (sum_sq / n).sqrt(),
    };

    let mut bands = [0.0; 7];
    for (k, band) in bands.iter_mut().enumerate() {
        *band = center + (k as f64 - 3.0) * spread;
    }
    // The center band is exactly the mean, never mean + 0.0 * spread
    // subject to rounding.
    bands[3] = center;

    Ok(ControlLimits {
        center,
        spread,
        bands,
    })
}
