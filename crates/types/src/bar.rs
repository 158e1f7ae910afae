use crate::price_field::PriceField;

/// One OHLC observation.
/// `timestamp_ns` is the bar **open time** in Unix epoch nanoseconds (UTC).
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Bar {
    /// Unix epoch nanoseconds UTC (open time)
    pub timestamp_ns: i64,
    /// Open price
    pub open: f64,
    /// High price
    pub high: f64,
    /// Low price
    pub low: f64,
    /// Close price
    pub close: f64,
    /// Volume (informational, not used by detection)
    #[serde(default)]
    pub volume: f64,
}

impl Bar {
    /// Creates a bar with zero volume.
    #[must_use]
    pub fn new(timestamp_ns: i64, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            timestamp_ns,
            open,
            high,
            low,
            close,
            volume: 0.0,
        }
    }

    /// Creates a flat bar where all four prices equal `price`.
    ///
    /// Used for forward-filled gap bars.
    #[must_use]
    pub fn flat(timestamp_ns: i64, price: f64) -> Self {
        Self::new(timestamp_ns, price, price, price, price)
    }

    /// Returns the requested price field of this bar.
    #[must_use]
    pub fn price(&self, field: PriceField) -> f64 {
        match field {
            PriceField::Open => self.open,
            PriceField::High => self.high,
            PriceField::Low => self.low,
            PriceField::Close => self.close,
            PriceField::Median => (self.high + self.low) / 2.0,
            PriceField::Typical => (self.high + self.low + self.close) / 3.0,
        }
    }

    /// Returns `true` when all prices are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.open.is_finite()
            && self.high.is_finite()
            && self.low.is_finite()
            && self.close.is_finite()
            && self.volume.is_finite()
    }

    /// Returns `true` when high/low bracket open and close.
    #[must_use]
    pub fn has_valid_range(&self) -> bool {
        self.low <= self.open
            && self.low <= self.close
            && self.high >= self.open
            && self.high >= self.close
            && self.low <= self.high
    }
}
