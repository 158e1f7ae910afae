//! Indicator trait and price extraction.

use swing_types::{Bar, PriceField};

/// Trait for single-output indicators.
///
/// All indicators compute over the full bar series and return a `Vec<f64>`
/// of the same length. Values before the warmup period are NaN.
pub trait Indicator: Send + Sync {
    /// Computes the indicator for all bars.
    ///
    /// Returns `Vec<f64>` with the same length as `bars`.
    fn compute(&self, bars: &[Bar]) -> Vec<f64>;

    /// Name of the indicator (e.g., "EMA", "ATR").
    fn name(&self) -> &str;

    /// Minimum number of bars required for valid output.
    fn warmup_periods(&self) -> usize;
}

/// Extracts one price field from every bar.
#[must_use]
pub fn price_series(bars: &[Bar], field: PriceField) -> Vec<f64> {
    bars.iter().map(|b| b.price(field)).collect()
}
