//! Evenly spaced axis ranges and their midpoints.
use std::fmt;
use std::str::FromStr;

use itertools_num::linspace;

use crate::error::{ChartError, ChartResult};

/// Return the values halfway between consecutive boundaries.
///
/// `N + 1` boundaries yield `N` midpoints. Fewer than two boundaries is an
/// error rather than an empty result.
pub fn midpoints(boundaries: &[f64]) -> ChartResult<Vec<f64>> {
    if boundaries.len() < 2 {
        log::warn!(
            "Cannot compute midpoints from {} boundary value(s)",
            boundaries.len()
        );
        return Err(ChartError::TooFewBoundaries(boundaries.len()));
    }
    Ok(boundaries
        .windows(2)
        .map(|pair| (pair[0] + pair[1]) / 2.0)
        .collect())
}

/// `count` evenly spaced values from `start` to `stop`, both ends included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoubleRange {
    start: f64,
    stop: f64,
    count: usize,
}

impl DoubleRange {
    pub fn new(start: f64, stop: f64, count: usize) -> ChartResult<Self> {
        if !start.is_finite() || !stop.is_finite() {
            return Err(ChartError::InvalidRange(format!(
                "bounds must be finite (start: {}, stop: {})",
                start, stop
            )));
        }
        if count < 2 {
            return Err(ChartError::InvalidRange(format!(
                "a range needs at least 2 points, got {}",
                count
            )));
        }
        Ok(Self { start, stop, count })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn stop(&self) -> f64 {
        self.stop
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Spacing between two neighbouring values.
    pub fn delta(&self) -> f64 {
        (self.stop - self.start) / (self.count - 1) as f64
    }

    pub fn to_vec(&self) -> Vec<f64> {
        linspace(self.start, self.stop, self.count).collect()
    }

    /// Midpoints of the range, treating its values as bin boundaries.
    pub fn midpoints(&self) -> ChartResult<Vec<f64>> {
        midpoints(&self.to_vec())
    }
}

impl fmt::Display for DoubleRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}:{}", self.start, self.stop, self.count)
    }
}

/// Parses `start:stop:count`, e.g. `0:10:101`.
impl FromStr for DoubleRange {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ChartError::InvalidRange(format!(
                "expected start:stop:count, got '{}'",
                s
            )));
        }

        let parse_bound = |value: &str| {
            value.parse::<f64>().map_err(|_| {
                ChartError::InvalidRange(format!("'{}' is not a number in '{}'", value, s))
            })
        };
        let start = parse_bound(parts[0])?;
        let stop = parse_bound(parts[1])?;
        let count = parts[2].parse::<usize>().map_err(|_| {
            ChartError::InvalidRange(format!("'{}' is not a valid count in '{}'", parts[2], s))
        })?;

        DoubleRange::new(start, stop, count)
    }
}
