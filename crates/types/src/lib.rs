//! Swing Types
//!
//! Core data structures for the swing-point detection engine.
//! This crate provides types for OHLC bars, swing points, the engine
//! configuration surface, and the serializable detection result envelope.

#![deny(clippy::all)]

pub mod bar;
pub mod config;
pub mod error;
pub mod price_field;
pub mod result;
pub mod swing;
pub mod timeframe;

// Re-export main types for convenience
pub use bar::Bar;
pub use config::{
    GapPolicy, SmoothingAlignment, SmoothingMethod, SwingConfig, VolatilityMethod,
};
pub use error::ConfigError;
pub use price_field::{ParsePriceFieldError, PriceField};
pub use result::{DetectionOutput, DetectionReport, ErrorReport};
pub use swing::{SwingKind, SwingPoint};
pub use timeframe::{ParseTimeframeError, Timeframe};
