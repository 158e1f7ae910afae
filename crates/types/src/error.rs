use thiserror::Error;

/// Configuration errors raised by [`crate::SwingConfig::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Parameter outside its valid range
    #[error("parameter out of range: {param} = {value} (expected {expected})")]
    ParamOutOfRange {
        /// Parameter name.
        param: String,
        /// Offending value.
        value: f64,
        /// Human readable valid range.
        expected: String,
    },

    /// Parameter combination that cannot work together
    #[error("invalid parameter combination: {0}")]
    Inconsistent(String),
}

impl ConfigError {
    /// Creates a `ParamOutOfRange` error.
    #[must_use]
    pub fn out_of_range(param: impl Into<String>, value: f64, expected: impl Into<String>) -> Self {
        ConfigError::ParamOutOfRange {
            param: param.into(),
            value,
            expected: expected.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::out_of_range("window", 1.0, "> 1");
        assert_eq!(
            err.to_string(),
            "parameter out of range: window = 1 (expected > 1)"
        );
    }
}
