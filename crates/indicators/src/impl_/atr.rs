//! Average True Range (ATR) indicator with Wilder smoothing

use crate::traits::Indicator;
use swing_types::Bar;

/// Average True Range (Wilder)
///
/// Seeded with the mean true range of the first `period` bars, then
/// ATR = (prev_ATR * (n-1) + TR) / n.
#[derive(Debug, Clone)]
pub struct ATR {
    /// Number of periods for ATR calculation
    pub period: usize,
}

impl ATR {
    /// Creates a new ATR indicator with the given period.
    #[must_use]
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// TR = max(High - Low, |High - Prev_Close|, |Low - Prev_Close|)
    #[inline]
    fn true_range(bar: &Bar, prev_close: f64) -> f64 {
        let hl = bar.high - bar.low;
        let hc = (bar.high - prev_close).abs();
        let lc = (bar.low - prev_close).abs();
        hl.max(hc).max(lc)
    }
}

impl Indicator for ATR {
    #[allow(clippy::cast_precision_loss)]
    fn compute(&self, bars: &[Bar]) -> Vec<f64> {
        let len = bars.len();
        let mut result = vec![f64::NAN; len];

        if self.period == 0 || len < self.period {
            return result;
        }

        let mut tr = Vec::with_capacity(len);
        tr.push(bars[0].high - bars[0].low);
        for pair in bars.windows(2) {
            tr.push(Self::true_range(&pair[1], pair[0].close));
        }

        let period = self.period as f64;
        let start_idx = self.period - 1;
        result[start_idx] = tr[..self.period].iter().sum::<f64>() / period;

        for i in (start_idx + 1)..len {
            if !tr[i].is_finite() {
                result[i] = result[i - 1];
                continue;
            }
            result[i] = (result[i - 1] * (period - 1.0) + tr[i]) / period;
        }

        result
    }

    fn name(&self) -> &str {
        "ATR"
    }

    fn warmup_periods(&self) -> usize {
        self.period
    }
}
