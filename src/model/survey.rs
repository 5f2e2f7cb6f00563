//! Sensor Spread
//!
//! Surface sensor geometry: an ordered sequence of horizontal source-sensor
//! offsets. Offsets are expected to be non-negative; any ordering and
//! duplicates are accepted. Real refraction surveys mix dense near-source
//! spacing with sparse far offsets, so the builders support chaining
//! evenly-spaced segments.

/// Ordered set of horizontal sensor offsets in meters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SensorSpread {
    offsets: Vec<f64>,
}

impl SensorSpread {
    /// Create a spread from explicit offsets.
    pub fn from_offsets(offsets: Vec<f64>) -> Self {
        Self { offsets }
    }

    /// Create `count` evenly spaced sensors covering `[start, stop]`
    /// inclusive.
    ///
    /// With `count == 1` the single sensor sits at `start`; with
    /// `count == 0` the spread is empty.
    pub fn evenly_spaced(start: f64, stop: f64, count: usize) -> Self {
        let offsets = match count {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (stop - start) / (count - 1) as f64;
                (0..count).map(|i| start + step * i as f64).collect()
            }
        };
        Self { offsets }
    }

    /// Round every offset down to a whole meter.
    ///
    /// Matches stake-at-whole-meter field layouts for near-source sensors.
    pub fn floored(mut self) -> Self {
        for offset in &mut self.offsets {
            *offset = offset.floor();
        }
        self
    }

    /// Append another spread's sensors after this one's.
    pub fn chain(mut self, other: SensorSpread) -> Self {
        self.offsets.extend(other.offsets);
        self
    }

    /// Offsets in meters, in spread order.
    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }

    /// Number of sensors in the spread.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the spread contains no sensors.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Largest offset in the spread, if any.
    pub fn max_offset(&self) -> Option<f64> {
        self.offsets.iter().copied().fold(None, |acc, x| match acc {
            Some(m) if m >= x => Some(m),
            _ => Some(x),
        })
    }

    /// Smallest offset in the spread, if any.
    pub fn min_offset(&self) -> Option<f64> {
        self.offsets.iter().copied().fold(None, |acc, x| match acc {
            Some(m) if m <= x => Some(m),
            _ => Some(x),
        })
    }

    /// Consume the spread, returning the raw offsets.
    pub fn into_offsets(self) -> Vec<f64> {
        self.offsets
    }
}
