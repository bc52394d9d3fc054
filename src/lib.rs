//! # replay-spc
//!
//! Statistical process control (SPC) rule detection for game-replay time
//! series.
//!
//! Given an ordered numeric series sampled from a replay (one measurement
//! per source event, with a parallel sequence of frame timestamps), this
//! crate computes control limits and scans for the three classical run-rule
//! violations that indicate a process is out of statistical control:
//!
//! - **Bias** — 9 or more consecutive points on one side of the center line
//! - **Trend** — 6 or more consecutive points moving monotonically (with an
//!   allowance for plateaus when total displacement is large)
//! - **Oscillation** — 14 or more consecutive points strictly alternating
//!   in direction
//!
//! Violations are reported as maximal, non-overlapping index ranges;
//! contiguous matching windows are coalesced into a single range. Replay
//! ingestion and chart rendering are external collaborators: this crate
//! accepts plain numeric sequences and hands back ranges, band values, and
//! per-point significance flags.
//!
//! ## Modules
//!
//! - [`series`] — Sample series and the per-replay (player, process) mapping
//! - [`limits`] — Control limit calculator: center line, spread, seven bands
//! - [`rules`] — The three run-rule detectors and the shared range merger
//! - [`analysis`] — Combined per-series analysis (limits + all detectors)
//! - [`error`] — Error taxonomy
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: every entity is a stateless derivation of an input
//!   series; nothing persists between invocations, nothing is mutated after
//!   creation. Safe to run across series in parallel.
//! - **Benign degradation**: a series shorter than a detector's window
//!   yields an empty result, not an error; only limit computation on
//!   insufficient data fails loudly.
//!
//! # References
//!
//! - Nelson, L.S. (1984). "The Shewhart Control Chart — Tests for Special
//!   Causes", *Journal of Quality Technology* 16(4), pp. 237-239.
//! - Western Electric (1956). *Statistical Quality Control Handbook*.

pub mod analysis;
pub mod error;
pub mod limits;
pub mod rules;
pub mod series;
