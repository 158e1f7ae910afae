/// Kind of a swing point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwingKind {
    /// Local high (taken from the bar high)
    High,
    /// Local low (taken from the bar low)
    Low,
}

impl SwingKind {
    /// Returns the other kind.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            SwingKind::High => SwingKind::Low,
            SwingKind::Low => SwingKind::High,
        }
    }
}

/// Detected swing high or low
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SwingPoint {
    /// High or low
    pub kind: SwingKind,
    /// Index into the canonical series
    pub index: usize,
    /// Open time of the bar in Unix epoch nanoseconds UTC
    pub timestamp_ns: i64,
    /// Bar high for a `High`, bar low for a `Low`
    pub price: f64,
    /// Terminated move divided by local volatility
    pub strength: f64,
    /// Terminated move in price units
    pub amplitude: f64,
}

impl SwingPoint {
    /// Price of the extreme this point's move started from.
    #[must_use]
    pub fn opposing_price(&self) -> f64 {
        match self.kind {
            SwingKind::High => self.price - self.amplitude,
            SwingKind::Low => self.price + self.amplitude,
        }
    }

    /// Terminated move in percent of the opposing extreme.
    ///
    /// Returns `f64::INFINITY` when the opposing price is not positive.
    #[must_use]
    pub fn amplitude_pct(&self) -> f64 {
        let base = self.opposing_price();
        if base > 0.0 {
            self.amplitude / base * 100.0
        } else {
            f64::INFINITY
        }
    }
}
