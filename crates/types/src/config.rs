use crate::error::ConfigError;
use crate::price_field::PriceField;
use crate::timeframe::Timeframe;

/// Swing detection configuration
///
/// Every field has a documented default, so partial JSON documents
/// deserialize into a complete configuration.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SwingConfig {
    /// Moving-average method used by the smoother
    pub smoothing_method: SmoothingMethod,
    /// Primary smoothing window (bars), must be > 1
    pub window: usize,
    /// Second-pass window for [`SmoothingMethod::Dual`], must be > 1
    pub secondary_window: usize,
    /// Bar the smoothed value is attributed to
    pub alignment: SmoothingAlignment,
    /// Price field that is smoothed
    pub price_field: PriceField,
    /// Reversal threshold as a fraction of local volatility, in (0, 1]
    pub reversal_threshold_fraction: f64,
    /// Rolling volatility estimator
    pub volatility_method: VolatilityMethod,
    /// Lookback of the volatility estimator (bars), must be > 1
    pub volatility_window: usize,
    /// Leading undetermined segments shorter than this are dropped
    pub min_segment_points: usize,
    /// Search radius around a pivot as a fraction of the smoothing window, in (0, 1]
    pub neighborhood_fraction: f64,
    /// Minimum strength (move / volatility) a swing point must reach, >= 0
    pub min_strength: f64,
    /// Minimum move in percent of the opposing extreme, >= 0
    pub min_amplitude_pct: f64,
    /// Minimum distance in bars between consecutive swing points
    pub min_separation_bars: usize,
    /// Fixed bar interval; enables gap analysis when set
    pub bar_interval: Option<Timeframe>,
    /// What to do with missing bars on the `bar_interval` grid
    pub gap_policy: GapPolicy,
    /// Longest gap (missing bars) that [`GapPolicy::ForwardFill`] repairs
    pub max_fill_bars: usize,
}

impl Default for SwingConfig {
    fn default() -> Self {
        Self {
            smoothing_method: SmoothingMethod::Sma,
            window: 10,
            secondary_window: 5,
            alignment: SmoothingAlignment::Trailing,
            price_field: PriceField::Close,
            reversal_threshold_fraction: 0.5,
            volatility_method: VolatilityMethod::Atr,
            volatility_window: 14,
            min_segment_points: 3,
            neighborhood_fraction: 0.5,
            min_strength: 1.0,
            min_amplitude_pct: 0.0,
            min_separation_bars: 0,
            bar_interval: None,
            gap_policy: GapPolicy::Reject,
            max_fill_bars: 3,
        }
    }
}

impl SwingConfig {
    /// Number of bars covered by one smoothed value.
    ///
    /// For the dual method both passes chain, so the span is
    /// `window + secondary_window - 1`.
    #[must_use]
    pub fn effective_window(&self) -> usize {
        match self.smoothing_method {
            SmoothingMethod::Sma | SmoothingMethod::Ema => self.window,
            SmoothingMethod::Dual => self
                .window
                .saturating_add(self.secondary_window.saturating_sub(1)),
        }
    }

    /// Minimum canonical series length the pipeline accepts.
    #[must_use]
    pub fn required_bars(&self) -> usize {
        self.effective_window()
            .saturating_add(1)
            .max(self.volatility_window)
    }

    fn checked_required_bars(&self) -> Option<usize> {
        let span = match self.smoothing_method {
            SmoothingMethod::Sma | SmoothingMethod::Ema => self.window,
            SmoothingMethod::Dual => self
                .window
                .checked_add(self.secondary_window.saturating_sub(1))?,
        };
        span.checked_add(1)
    }

    /// Radius (bars) of the raw-data search window around a pivot.
    #[must_use]
    pub fn neighborhood_radius(&self) -> usize {
        #[allow(clippy::cast_precision_loss)]
        let span = self.effective_window() as f64;
        let radius = (self.neighborhood_fraction * span).round();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let radius = radius as usize;
        radius.max(1)
    }

    /// Validates parameter ranges.
    ///
    /// # Errors
    /// Returns [`ConfigError`] naming the first offending parameter.
    #[allow(clippy::cast_precision_loss)]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window <= 1 {
            return Err(ConfigError::out_of_range("window", self.window as f64, "> 1"));
        }
        if self.smoothing_method == SmoothingMethod::Dual && self.secondary_window <= 1 {
            return Err(ConfigError::out_of_range(
                "secondary_window",
                self.secondary_window as f64,
                "> 1",
            ));
        }
        if self.checked_required_bars().is_none() {
            return Err(ConfigError::out_of_range(
                "window",
                self.window as f64,
                "a window span that fits in usize",
            ));
        }
        if !(self.reversal_threshold_fraction > 0.0 && self.reversal_threshold_fraction <= 1.0) {
            return Err(ConfigError::out_of_range(
                "reversal_threshold_fraction",
                self.reversal_threshold_fraction,
                "(0, 1]",
            ));
        }
        if self.volatility_window <= 1 {
            return Err(ConfigError::out_of_range(
                "volatility_window",
                self.volatility_window as f64,
                "> 1",
            ));
        }
        if !(self.neighborhood_fraction > 0.0 && self.neighborhood_fraction <= 1.0) {
            return Err(ConfigError::out_of_range(
                "neighborhood_fraction",
                self.neighborhood_fraction,
                "(0, 1]",
            ));
        }
        if !(self.min_strength.is_finite() && self.min_strength >= 0.0) {
            return Err(ConfigError::out_of_range(
                "min_strength",
                self.min_strength,
                ">= 0",
            ));
        }
        if !(self.min_amplitude_pct.is_finite() && self.min_amplitude_pct >= 0.0) {
            return Err(ConfigError::out_of_range(
                "min_amplitude_pct",
                self.min_amplitude_pct,
                ">= 0",
            ));
        }
        if self.gap_policy == GapPolicy::ForwardFill {
            if self.bar_interval.is_none() {
                return Err(ConfigError::Inconsistent(
                    "gap_policy forward_fill requires bar_interval".to_string(),
                ));
            }
            if self.max_fill_bars == 0 {
                return Err(ConfigError::out_of_range(
                    "max_fill_bars",
                    0.0,
                    ">= 1 with forward_fill",
                ));
            }
        }
        Ok(())
    }
}

/// Moving-average method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmoothingMethod {
    /// Simple moving average
    #[default]
    Sma,
    /// Exponential moving average (span = window)
    Ema,
    /// SMA(window) smoothed again by SMA(secondary_window)
    Dual,
}

/// Bar a smoothed value is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmoothingAlignment {
    /// Last bar of the averaging window
    #[default]
    Trailing,
    /// Middle bar of the averaging window (removes most of the lag)
    ///
    /// The shift is `(effective_window - 1) / 2`, applied once to the
    /// combined span. For [`SmoothingMethod::Dual`] this differs from
    /// halving each pass separately: windows 120 and 60 shift by 89 bars,
    /// not 60 + 30.
    Centered,
}

/// Rolling volatility estimator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolatilityMethod {
    /// Average True Range (Wilder)
    #[default]
    Atr,
    /// Sample standard deviation of the price field
    StdDev,
}

/// Handling of missing bars on a fixed interval grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapPolicy {
    /// Any missing or off-grid bar is malformed input
    #[default]
    Reject,
    /// Short gaps are filled with flat bars at the previous close
    ForwardFill,
    /// Gaps are kept and only reported
    Allow,
}
