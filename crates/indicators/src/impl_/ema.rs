//! Exponential Moving Average (EMA) indicator

use crate::traits::{Indicator, price_series};
use swing_types::{Bar, PriceField};

/// Exponential Moving Average
///
/// Matches pandas `ewm(span=period, adjust=False).mean()` semantics:
/// seeded with the first finite value, multiplier = 2 / (period + 1).
#[derive(Debug, Clone)]
pub struct EMA {
    /// Number of periods for the EMA
    pub period: usize,
    /// Price field to smooth
    pub field: PriceField,
}

impl EMA {
    /// Creates a new EMA over close prices.
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

    /// Calculates the EMA multiplier (smoothing factor).
    #[allow(clippy::cast_precision_loss)]
    fn multiplier(&self) -> f64 {
        2.0 / (self.period as f64 + 1.0)
    }

    /// EMA recursion over a raw value slice.
    ///
    /// Non-finite inputs carry the previous value forward.
    #[must_use]
    pub fn apply(&self, values: &[f64]) -> Vec<f64> {
        let len = values.len();
        let mut result = vec![f64::NAN; len];

        if self.period == 0 || len == 0 {
            return result;
        }

        let alpha = self.multiplier();
        let mut prev = f64::NAN;

        for (i, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                if prev.is_finite() {
                    result[i] = prev;
                }
                continue;
            }

            if prev.is_finite() {
                prev = alpha.mul_add(value, (1.0 - alpha) * prev);
            } else {
                prev = value;
            }
            result[i] = prev;
        }

        result
    }
}

impl Indicator for EMA {
    fn compute(&self, bars: &[Bar]) -> Vec<f64> {
        self.apply(&price_series(bars, self.field))
    }

    fn name(&self) -> &str {
        "EMA"
    }

    fn warmup_periods(&self) -> usize {
        1
    }
}
