//! Swing Indicators
//!
//! Moving averages, volatility estimators and the smoother used by the
//! swing detection engine.
//!
//! # Available Indicators
//! - SMA: Simple Moving Average
//! - EMA: Exponential Moving Average (`adjust=False`)
//! - ATR: Average True Range (Wilder smoothing)
//! - `RollingStd`: rolling sample standard deviation
//!
//! [`smooth`] and [`volatility`] combine them into the per-bar inputs of
//! the trend segmenter.

#![deny(clippy::all)]

pub mod error;
pub mod impl_;
pub mod smoother;
pub mod traits;
pub mod volatility;

pub use error::IndicatorError;
pub use smoother::{SmoothedPoint, SmoothingSpec, smooth};
pub use traits::{Indicator, price_series};
pub use volatility::{VolatilitySpec, volatility};

pub use impl_::{atr::ATR, ema::EMA, rolling_std::RollingStd, sma::SMA};
