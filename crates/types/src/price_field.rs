use serde::{Deserialize, Serialize};

/// Bar price field fed into smoothing and rolling statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceField {
    /// Open price.
    Open,
    /// High price.
    High,
    /// Low price.
    Low,
    /// Close price.
    #[default]
    Close,
    /// (high + low) / 2
    Median,
    /// (high + low + close) / 3
    Typical,
}

impl PriceField {
    /// Returns lowercase string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceField::Open => "open",
            PriceField::High => "high",
            PriceField::Low => "low",
            PriceField::Close => "close",
            PriceField::Median => "median",
            PriceField::Typical => "typical",
        }
    }
}

impl std::fmt::Display for PriceField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error parsing price field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsePriceFieldError;

impl std::fmt::Display for ParsePriceFieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid price field")
    }
}

impl std::error::Error for ParsePriceFieldError {}

impl std::str::FromStr for PriceField {
    type Err = ParsePriceFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(PriceField::Open),
            "high" => Ok(PriceField::High),
            "low" => Ok(PriceField::Low),
            "close" => Ok(PriceField::Close),
            "median" | "hl2" => Ok(PriceField::Median),
            "typical" | "hlc3" => Ok(PriceField::Typical),
            _ => Err(ParsePriceFieldError),
        }
    }
}
