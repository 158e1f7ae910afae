//! Detection error types.

use swing_data::DataError;
use swing_indicators::IndicatorError;
use swing_types::{ConfigError, ErrorReport};
use thiserror::Error;

/// Errors that can occur during swing detection.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SwingError {
    /// JSON request parse error
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// Parameter outside its documented range
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Bars violate the input contract
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Series shorter than the configured windows require
    #[error("insufficient data: need {required} bars, have {available}")]
    InsufficientData {
        /// Required number of bars
        required: usize,
        /// Available number of bars
        available: usize,
    },

    /// Empty search neighborhood around a pivot
    #[error("no extremum found around bar {pivot} in [{start}, {end}]")]
    NoExtremumFound {
        /// Original index of the pivot
        pivot: usize,
        /// First bar of the neighborhood
        start: usize,
        /// Last bar of the neighborhood
        end: usize,
    },

    /// Filtering removed every candidate
    #[error("filtering removed all {candidates} swing candidates")]
    EmptyResult {
        /// Number of candidates before filtering
        candidates: usize,
    },

    /// Result serialization error
    #[error("result serialization error: {0}")]
    ResultSerialize(String),
}

impl SwingError {
    /// Returns true if this is a config parse/validation error.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            SwingError::ConfigParse(_) | SwingError::InvalidConfiguration(_)
        )
    }

    /// Returns the error category for the output contract.
    /// Categories: `config`, `input`, `empty`, `internal`
    #[must_use]
    pub fn error_category(&self) -> &'static str {
        match self {
            SwingError::ConfigParse(_) | SwingError::InvalidConfiguration(_) => "config",
            SwingError::MalformedInput(_) | SwingError::InsufficientData { .. } => "input",
            SwingError::EmptyResult { .. } => "empty",
            SwingError::NoExtremumFound { .. } | SwingError::ResultSerialize(_) => "internal",
        }
    }
}

impl From<ConfigError> for SwingError {
    fn from(err: ConfigError) -> Self {
        SwingError::InvalidConfiguration(err.to_string())
    }
}

impl From<DataError> for SwingError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::EmptyData => SwingError::InsufficientData {
                required: 1,
                available: 0,
            },
            DataError::InsufficientData {
                required,
                available,
            } => SwingError::InsufficientData {
                required,
                available,
            },
            DataError::InvalidInterval(_) => SwingError::InvalidConfiguration(err.to_string()),
            other => SwingError::MalformedInput(other.to_string()),
        }
    }
}

impl From<IndicatorError> for SwingError {
    fn from(err: IndicatorError) -> Self {
        match err {
            IndicatorError::InsufficientData { required, actual } => SwingError::InsufficientData {
                required,
                available: actual,
            },
            IndicatorError::ComputationError(msg) => SwingError::MalformedInput(msg),
            other => SwingError::InvalidConfiguration(other.to_string()),
        }
    }
}

impl From<SwingError> for ErrorReport {
    fn from(err: SwingError) -> Self {
        Self {
            category: err.error_category().to_string(),
            message: err.to_string(),
        }
    }
}
