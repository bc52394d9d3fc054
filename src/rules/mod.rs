//! Run-rule detectors for non-random patterns in a time series.
//!
//! Each detector scans fixed-length windows over the raw series and reports
//! maximal, non-overlapping [`DetectionRange`]s where its rule holds
//! continuously. Adjacent matching windows are coalesced by a single shared
//! merge primitive, so all three scanners agree on what "contiguous" means.
//!
//! # Detectors
//!
//! - [`detect_bias`] — 9+ consecutive points one side of the center line
//! - [`detect_trend`] — 6+ consecutive points moving monotonically
//! - [`detect_oscillation`] — 14+ consecutive points strictly alternating
//!
//! All detectors are pure functions over an immutable slice; a series
//! shorter than a detector's window yields an empty list.
//!
//! # References
//!
//! - Nelson, L.S. (1984). "The Shewhart Control Chart — Tests for Special
//!   Causes", *Journal of Quality Technology* 16(4), pp. 237-239.
//! - Western Electric (1956). *Statistical Quality Control Handbook*.

mod bias;
mod oscillation;
mod range;
mod trend;

pub use bias::{detect_bias, BIAS_RUN_LENGTH};
pub use oscillation::{detect_oscillation, OSCILLATION_RUN_LENGTH};
pub use range::{DetectionRange, Sign};
pub use trend::{detect_trend, TREND_RUN_LENGTH};
