//! Sample series and the per-replay series mapping.
//!
//! A replay yields one measured process per (player, process-name) pair —
//! e.g. player 1's mineral count — sampled once per source event. The
//! ingestion layer (an external collaborator) constructs a [`ReplaySeries`]
//! once per replay and hands each [`SampleSeries`] to the detectors as a
//! plain immutable sequence; no global state is involved.

use std::collections::BTreeMap;

use crate::error::SpcError;

/// Replay frame rate: one frame is 1/16 of a second.
pub const FRAMES_PER_SECOND: f64 = 16.0;

/// An ordered numeric time series paired with frame timestamps.
///
/// # Invariants
///
/// - Values and frames have equal, non-zero length (enforced at
///   construction).
///
/// # Examples
///
/// ```
/// use replay_spc::series::SampleSeries;
///
/// let series = SampleSeries::new(vec![0.0, 50.0, 50.0], vec![0, 160, 320]).unwrap();
/// assert_eq!(series.len(), 3);
/// assert_eq!(series.seconds(), vec![0.0, 10.0, 20.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    /// Measured values, one per source event.
    values: Vec<f64>,
    /// Frame number of each measurement.
    frames: Vec<u64>,
}

impl SampleSeries {
    /// Create a series from parallel value and frame sequences.
    ///
    /// # Errors
    ///
    /// - [`SpcError::LengthMismatch`] if the sequences differ in length.
    /// - [`SpcError::InsufficientData`] if the sequences are empty.
    pub fn new(values: Vec<f64>, frames: Vec<u64>) -> Result<Self, SpcError> {
        if values.len() != frames.len() {
            return Err(SpcError::LengthMismatch {
                values: values.len(),
                frames: frames.len(),
            });
        }
        if values.is_empty() {
            return Err(SpcError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }
        Ok(Self { values, frames })
    }

    /// The measured values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The frame timestamps.
    pub fn frames(&self) -> &[u64] {
        &self.frames
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: the constructor rejects empty series.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Frame timestamps converted to game seconds.
    pub fn seconds(&self) -> Vec<f64> {
        self.frames
            .iter()
            .map(|&f| f as f64 / FRAMES_PER_SECOND)
            .collect()
    }
}

/// Per-replay mapping of (player id, process name) to its sample series.
///
/// Built once per replay by the ingestion layer, then read-only. Iteration
/// order is deterministic (sorted by player id, then process name).
///
/// # Examples
///
/// ```
/// use replay_spc::series::{ReplaySeries, SampleSeries};
///
/// let mut replay = ReplaySeries::new();
/// let minerals = SampleSeries::new(vec![0.0, 50.0, 105.0], vec![0, 160, 320]).unwrap();
/// replay.insert(1, "mineral_count", minerals);
///
/// assert_eq!(replay.len(), 1);
/// assert!(replay.get(1, "mineral_count").is_some());
/// assert!(replay.get(2, "mineral_count").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReplaySeries {
    series: BTreeMap<u32, BTreeMap<String, SampleSeries>>,
}

impl ReplaySeries {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a series for the given player and process, replacing any
    /// previous entry for that pair.
    pub fn insert(&mut self, player: u32, process: impl Into<String>, series: SampleSeries) {
        self.series
            .entry(player)
            .or_default()
            .insert(process.into(), series);
    }

    /// Look up the series for a (player, process) pair.
    pub fn get(&self, player: u32, process: &str) -> Option<&SampleSeries> {
        self.series.get(&player)?.get(process)
    }

    /// Iterate over all (player, process) pairs and their series, in
    /// deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str, &SampleSeries)> {
        self.series.iter().flat_map(|(&player, processes)| {
            processes
                .iter()
                .map(move |(process, series)| (player, process.as_str(), series))
        })
    }

    /// Number of stored series.
    pub fn len(&self) -> usize {
        self.series.values().map(BTreeMap::len).sum()
    }

    /// Whether any series are stored.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
