//! Data-layer error types.

use thiserror::Error;

/// Errors that can occur while normalizing or validating bar data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    /// No bars were supplied.
    #[error("Empty data")]
    EmptyData,

    /// A bar violated the OHLC or ordering contract.
    #[error("Corrupt data: {0}")]
    CorruptData(String),

    /// Two bars share the same timestamp after sorting.
    #[error("Duplicate timestamp at index {index}: {timestamp_ns}")]
    DuplicateTimestamp {
        /// Index of the second occurrence in the sorted sequence.
        index: usize,
        /// Duplicated timestamp (epoch-ns).
        timestamp_ns: i64,
    },

    /// A timestamp does not sit on the configured interval grid.
    #[error("Off-grid timestamp at index {index}: {timestamp_ns} (step {step_ns} ns)")]
    OffGrid {
        /// Index of the offending bar.
        index: usize,
        /// Offending timestamp (epoch-ns).
        timestamp_ns: i64,
        /// Grid step (ns).
        step_ns: i64,
    },

    /// Missing bars that the gap policy does not allow.
    #[error("Gap of {missing} missing bars after {after_ns} (allowed: {allowed})")]
    Gap {
        /// Timestamp of the last bar before the gap (epoch-ns).
        after_ns: i64,
        /// Number of missing bars.
        missing: usize,
        /// Largest gap the policy accepts.
        allowed: usize,
    },

    /// Grid step is not positive.
    #[error("Invalid interval step (ns): {0}")]
    InvalidInterval(i64),

    /// Not enough bars to proceed.
    #[error("Insufficient data: need {required}, have {available}")]
    InsufficientData {
        /// Required number of bars.
        required: usize,
        /// Available number of bars.
        available: usize,
    },
}

impl DataError {
    /// Returns `true` for structural violations of the input contract.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            DataError::CorruptData(_)
                | DataError::DuplicateTimestamp { .. }
                | DataError::OffGrid { .. }
                | DataError::Gap { .. }
        )
    }
}
