//! Indicator error types.

use thiserror::Error;

/// Errors that can occur during indicator or smoother computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    /// Invalid parameters for the indicator
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// Insufficient data for computation
    #[error("insufficient data: need {required} bars, got {actual}")]
    InsufficientData {
        /// Required number of bars.
        required: usize,
        /// Actual number of bars provided.
        actual: usize,
    },

    /// Computation error (e.g. no finite output)
    #[error("computation error: {0}")]
    ComputationError(String),

    /// Parameter out of valid range
    #[error("parameter out of range: {param} = {value} (valid: {min}..={max})")]
    ParamOutOfRange {
        /// Parameter name.
        param: String,
        /// Parameter value.
        value: f64,
        /// Minimum allowed value.
        min: f64,
        /// Maximum allowed value.
        max: f64,
    },
}

impl IndicatorError {
    /// Creates an `InvalidParams` error with a message.
    #[must_use]
    pub fn invalid_params(msg: impl Into<String>) -> Self {
        IndicatorError::InvalidParams(msg.into())
    }

    /// Creates a `ComputationError` with a message.
    #[must_use]
    pub fn computation(msg: impl Into<String>) -> Self {
        IndicatorError::ComputationError(msg.into())
    }

    /// Creates a `ParamOutOfRange` error.
    #[must_use]
    pub fn param_out_of_range(param: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        IndicatorError::ParamOutOfRange {
            param: param.into(),
            value,
            min,
            max,
        }
    }

    /// Returns `true` when the error stems from parameters rather than data.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            IndicatorError::InvalidParams(_) | IndicatorError::ParamOutOfRange { .. }
        )
    }
}
