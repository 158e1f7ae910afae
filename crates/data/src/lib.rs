//! Swing Data
//!
//! Series normalization: OHLC validation, ordering, gap analysis and
//! forward fill into a canonical [`Series`].

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]

/// Data-layer error types.
pub mod error;
/// Gap analysis and forward fill on a regular grid.
pub mod gaps;
/// Sorting, validation and gap handling entry point.
pub mod normalize;
/// Canonical bar series.
pub mod series;
/// OHLC and ordering validation helpers.
pub mod validation;

/// Re-export: data-layer error type.
pub use error::DataError;
/// Re-export: gap analysis result stats.
pub use gaps::GapStats;
/// Re-export: grid gap analysis.
pub use gaps::analyze_gaps;
/// Re-export: forward fill of short gaps.
pub use gaps::fill_gaps;
/// Re-export: normalizer options.
pub use normalize::NormalizeOptions;
/// Re-export: normalizer entry point.
pub use normalize::normalize;
/// Re-export: canonical series.
pub use series::Series;
/// Re-export: bar validation.
pub use validation::validate_bars;
