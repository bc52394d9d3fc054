//! Detection ranges and the shared run-length merge primitive.
//!
//! All three detectors scan fixed-length windows over the series and
//! coalesce adjacent matching windows into one maximal range. The merge
//! rule lives here, once, so the scanners cannot drift apart.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Direction tag for a detection range.
///
/// Serialized as `"+"` / `"-"`, matching the annotation tags the rendering
/// layer consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sign {
    /// Above the center line, or increasing.
    #[serde(rename = "+")]
    Positive,
    /// Below the center line, or decreasing.
    #[serde(rename = "-")]
    Negative,
}

impl Sign {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Positive => write!(f, "+"),
            Sign::Negative => write!(f, "-"),
        }
    }
}

/// A maximal contiguous interval over which one rule's condition holds.
///
/// Half-open over sample indices: `start..end` with
/// `0 <= start < end <= N`. The sign is `None` for detectors that do not
/// track direction (oscillation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionRange {
    /// First sample index covered.
    pub start: usize,
    /// One past the last sample index covered.
    pub end: usize,
    /// Direction of the violation, where the rule distinguishes one.
    pub sign: Option<Sign>,
}

impl DetectionRange {
    /// Number of samples covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false: a range covers at least one window.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Whether a sample index falls inside the range.
    pub fn contains(&self, index: usize) -> bool {
        (self.start..self.end).contains(&index)
    }
}

/// Merge a matching window at `start` into the accumulated range list.
///
/// The window `start..start + length` extends the last range when the two
/// overlap and carry the same sign; called with consecutive matching starts
/// this yields a single range spanning the whole scanned region. An
/// overlapping window of the *opposite* sign is dropped instead: the
/// samples it would add beyond the last range span fewer than `length`
/// points, too few to claim the rule held for a full run, and ranges must
/// never overlap. A window disjoint from the last range opens a new one.
///
/// A non-matching start is simply not reported here; once a gap leaves the
/// next window disjoint from the accumulated range, that range is closed
/// permanently.
pub(crate) fn merge_window(
    ranges: &mut Vec<DetectionRange>,
    start: usize,
    length: usize,
    sign: Option<Sign>,
) {
    if let Some(last) = ranges.last_mut() {
        if last.end > start {
            if last.sign == sign {
                last.end = start + length;
            }
            return;
        }
    }
    ranges.push(DetectionRange {
        start,
        end: start + length,
        sign,
    });
}
