//! Canonical bar series.

use swing_types::{Bar, Timeframe};

use crate::gaps::GapStats;

/// Canonical bar series produced by [`crate::normalize`].
///
/// Bars are strictly time-ordered with valid OHLC ranges. Bars inserted
/// by forward fill are flagged in `synthetic`. Gaps kept under the
/// `allow` policy are described by [`Series::gap_stats`].
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    bars: Vec<Bar>,
    synthetic: Vec<bool>,
    gaps: Option<GapStats>,
    /// Bar interval the series was checked against, if any.
    pub interval: Option<Timeframe>,
}

impl Series {
    /// Creates a series without synthetic bars.
    #[must_use]
    pub fn new(bars: Vec<Bar>, interval: Option<Timeframe>) -> Self {
        let synthetic = vec![false; bars.len()];
        Self {
            bars,
            synthetic,
            gaps: None,
            interval,
        }
    }

    /// Creates a series with an explicit synthetic flag per bar.
    ///
    /// Missing flags are treated as `false`.
    #[must_use]
    pub fn with_synthetic(bars: Vec<Bar>, mut synthetic: Vec<bool>, interval: Option<Timeframe>) -> Self {
        synthetic.resize(bars.len(), false);
        Self {
            bars,
            synthetic,
            gaps: None,
            interval,
        }
    }

    /// Attaches the gap analysis of the kept bars.
    #[must_use]
    pub fn with_gap_stats(mut self, stats: GapStats) -> Self {
        self.gaps = Some(stats);
        self
    }

    /// Gap analysis of the series, present when gaps were allowed.
    #[must_use]
    pub fn gap_stats(&self) -> Option<&GapStats> {
        self.gaps.as_ref()
    }

    /// Grid slots without a bar (0 when no gap analysis ran).
    #[must_use]
    pub fn missing_bars(&self) -> usize {
        self.gaps.map_or(0, |g| g.missing_bars)
    }

    /// Bars off the interval grid (0 when no gap analysis ran).
    #[must_use]
    pub fn off_grid_bars(&self) -> usize {
        self.gaps.map_or(0, |g| g.off_grid_bars)
    }

    /// Returns the number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Returns `true` if there are no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Returns the bar at `idx`.
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&Bar> {
        self.bars.get(idx)
    }

    /// Returns all bars.
    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Returns the timestamps (epoch-ns) of all bars.
    #[must_use]
    pub fn timestamps(&self) -> Vec<i64> {
        self.bars.iter().map(|b| b.timestamp_ns).collect()
    }

    /// Returns `true` if the bar at `idx` was inserted by forward fill.
    #[must_use]
    pub fn is_synthetic(&self, idx: usize) -> bool {
        self.synthetic.get(idx).copied().unwrap_or(false)
    }

    /// Number of forward-filled bars.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.synthetic.iter().filter(|&&s| s).count()
    }

    /// Consumes the series and returns its bars.
    #[must_use]
    pub fn into_bars(self) -> Vec<Bar> {
        self.bars
    }
}
