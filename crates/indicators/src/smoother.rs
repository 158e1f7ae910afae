//! Smoother: turns a bar series into smoothed points.

use swing_types::{Bar, PriceField, SmoothingAlignment, SmoothingMethod, SwingConfig};

use crate::error::IndicatorError;
use crate::impl_::{ema::EMA, sma::SMA};
use crate::traits::price_series;

/// Smoothing parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingSpec {
    /// Moving-average method.
    pub method: SmoothingMethod,
    /// Primary window.
    pub window: usize,
    /// Second-pass window (dual method only).
    pub secondary_window: usize,
    /// Bar each value is attributed to.
    pub alignment: SmoothingAlignment,
    /// Smoothed price field.
    pub price_field: PriceField,
}

impl SmoothingSpec {
    /// Simple moving average over close prices.
    #[must_use]
    pub fn sma(window: usize) -> Self {
        Self {
            method: SmoothingMethod::Sma,
            window,
            secondary_window: 0,
            alignment: SmoothingAlignment::Trailing,
            price_field: PriceField::Close,
        }
    }

    /// Builds the smoothing parameters from a detection configuration.
    #[must_use]
    pub fn from_config(config: &SwingConfig) -> Self {
        Self {
            method: config.smoothing_method,
            window: config.window,
            secondary_window: config.secondary_window,
            alignment: config.alignment,
            price_field: config.price_field,
        }
    }

    /// Number of bars covered by one smoothed value.
    #[must_use]
    pub fn effective_window(&self) -> usize {
        match self.method {
            SmoothingMethod::Sma | SmoothingMethod::Ema => self.window,
            SmoothingMethod::Dual => self
                .window
                .saturating_add(self.secondary_window.saturating_sub(1)),
        }
    }

    /// Backward shift applied to the attributed bar index.
    #[must_use]
    pub fn shift(&self) -> usize {
        match self.alignment {
            SmoothingAlignment::Trailing => 0,
            SmoothingAlignment::Centered => self.effective_window().saturating_sub(1) / 2,
        }
    }
}

/// One smoothed value attributed to a bar of the series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothedPoint {
    /// Index of the attributed bar in the series.
    pub index: usize,
    /// Timestamp of the attributed bar (epoch-ns).
    pub timestamp_ns: i64,
    /// Smoothed value.
    pub value: f64,
}

/// Smooths the configured price field of `bars`.
///
/// The warm-up of every pass is omitted, so the result holds
/// `len - effective_window + 1` points with strictly increasing indices.
///
/// # Errors
/// - [`IndicatorError::ParamOutOfRange`] when a window is `<= 1`.
/// - [`IndicatorError::InvalidParams`] when the effective window is not
///   smaller than the series.
/// - [`IndicatorError::ComputationError`] on a non-finite smoothed value.
#[allow(clippy::cast_precision_loss)]
pub fn smooth(bars: &[Bar], spec: &SmoothingSpec) -> Result<Vec<SmoothedPoint>, IndicatorError> {
    let len = bars.len();
    let max_window = len.saturating_sub(1) as f64;
    if spec.window <= 1 {
        return Err(IndicatorError::param_out_of_range(
            "window",
            spec.window as f64,
            2.0,
            max_window,
        ));
    }
    if spec.method == SmoothingMethod::Dual && spec.secondary_window <= 1 {
        return Err(IndicatorError::param_out_of_range(
            "secondary_window",
            spec.secondary_window as f64,
            2.0,
            max_window,
        ));
    }

    let effective = spec.effective_window();
    if spec.window >= len || effective >= len {
        return Err(IndicatorError::invalid_params(format!(
            "effective window {effective} must be smaller than the series length {len}"
        )));
    }

    let values = price_series(bars, spec.price_field);
    let raw = match spec.method {
        SmoothingMethod::Sma => SMA::new(spec.window).apply(&values),
        SmoothingMethod::Ema => EMA::new(spec.window).apply(&values),
        SmoothingMethod::Dual => {
            let first = SMA::new(spec.window).apply(&values);
            let mut out = vec![f64::NAN; spec.window - 1];
            out.extend(SMA::new(spec.secondary_window).apply(&first[spec.window - 1..]));
            out
        }
    };

    let shift = spec.shift();
    let mut points = Vec::with_capacity(len - effective + 1);
    for (i, &value) in raw.iter().enumerate().skip(effective - 1) {
        if !value.is_finite() {
            return Err(IndicatorError::computation(format!(
                "non-finite smoothed value at bar {i}"
            )));
        }
        let index = i - shift;
        points.push(SmoothedPoint {
            index,
            timestamp_ns: bars[index].timestamp_ns,
            value,
        });
    }

    tracing::debug!(
        "Smoothed {} bars into {} points ({:?}, window {}, shift {})",
        len,
        points.len(),
        spec.method,
        effective,
        shift
    );

    Ok(points)
}
