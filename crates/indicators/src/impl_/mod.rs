//! Indicator implementations

pub mod atr;
pub mod ema;
pub mod rolling_std;
pub mod sma;
