//! Simple Moving Average (SMA) indicator

use crate::traits::{Indicator, price_series};
use swing_types::{Bar, PriceField};

/// Simple Moving Average
///
/// Calculates the arithmetic mean of the last N values of a price field.
#[derive(Debug, Clone)]
pub struct SMA {
    /// Number of periods for the moving average
    pub period: usize,
    /// Price field to average
    pub field: PriceField,
}

impl SMA {
    /// Creates a new SMA over close prices.
    #[must_use]
    pub fn new(period: usize) -> Self {
        Self {
            period,
            field: PriceField::Close,
        }
    }

    /// Uses another price field.
    #[must_use]
    pub fn with_field(mut self, field: PriceField) -> Self {
        self.field = field;
        self
    }

    /// Rolling mean over a raw value slice; leading `period - 1` values are NaN.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn apply(&self, values: &[f64]) -> Vec<f64> {
        let len = values.len();
        let mut result = vec![f64::NAN; len];

        if len < self.period || self.period == 0 {
            return result;
        }

        let period = self.period as f64;
        let mut sum: f64 = values[..self.period].iter().sum();
        result[self.period - 1] = sum / period;

        for i in self.period..len {
            sum += values[i] - values[i - self.period];
            result[i] = sum / period;
        }

        result
    }
}

impl Indicator for SMA {
    fn compute(&self, bars: &[Bar]) -> Vec<f64> {
        self.apply(&price_series(bars, self.field))
    }

    fn name(&self) -> &str {
        "SMA"
    }

    fn warmup_periods(&self) -> usize {
        self.period
    }
}
