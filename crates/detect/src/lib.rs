//! Swing Detect
//!
//! Swing-point detection engine: smooths an OHLC series, partitions it into
//! alternating trend segments with a volatility-normalized reversal
//! threshold, maps segment pivots back to the raw bars and filters the
//! candidates into an alternating list of swing highs and lows.
//!
//! Entry points: [`detect_swings`], [`SwingDetector`] and the JSON runner
//! [`detect_swings_from_json`].

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]

pub mod annotate;
#[cfg(feature = "parallel")]
pub mod batch;
pub mod engine;
pub mod error;
pub mod extractor;
pub mod runner;
pub mod segmenter;
pub mod validator;

pub use annotate::{SwingColumns, swing_columns};
#[cfg(feature = "parallel")]
pub use batch::detect_batch;
pub use engine::{Detection, SwingDetector, detect_swings};
pub use error::SwingError;
pub use extractor::extract;
pub use runner::{DetectionRequest, detect_swings_from_json};
pub use segmenter::{Segment, SegmenterParams, TrendBias, TrendState, segment, transition};
pub use validator::{FilterParams, filter};
