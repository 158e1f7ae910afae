//! Rolling standard deviation indicator

use crate::traits::{Indicator, price_series};
use swing_types::{Bar, PriceField};

/// Rolling sample standard deviation (ddof=1) of a price field.
#[derive(Debug, Clone)]
pub struct RollingStd {
    /// Window size
    pub window: usize,
    /// Price field
    pub field: PriceField,
}

impl RollingStd {
    /// Creates a rolling std over close prices.
    #[must_use]
    pub fn new(window: usize) -> Self {
        Self {
            window,
            field: PriceField::Close,
        }
    }

    /// Uses another price field.
    #[must_use]
    pub fn with_field(mut self, field: PriceField) -> Self {
        self.field = field;
        self
    }

    /// Rolling std over a raw value slice; windows with `window < 2` are NaN.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn apply(&self, values: &[f64]) -> Vec<f64> {
        let len = values.len();
        let mut result = vec![f64::NAN; len];

        if self.window < 2 || len < self.window {
            return result;
        }

        let n = self.window as f64;
        for i in (self.window - 1)..len {
            let window = &values[i + 1 - self.window..=i];
            let mean = window.iter().sum::<f64>() / n;
            let variance = window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
            result[i] = variance.sqrt();
        }

        result
    }
}

impl Indicator for RollingStd {
    fn compute(&self, bars: &[Bar]) -> Vec<f64> {
        self.apply(&price_series(bars, self.field))
    }

    fn name(&self) -> &str {
        "ROLLING_STD"
    }

    fn warmup_periods(&self) -> usize {
        self.window
    }
}
