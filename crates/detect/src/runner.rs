//! JSON entry point.

use swing_types::{Bar, DetectionOutput, SwingConfig};

use crate::engine::SwingDetector;
use crate::error::SwingError;

/// JSON request: configuration plus bars.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DetectionRequest {
    /// Detection configuration (missing fields use defaults)
    #[serde(default)]
    pub config: SwingConfig,
    /// Raw bars, not necessarily sorted
    pub bars: Vec<Bar>,
}

/// Main entry point: receives request JSON, returns result JSON.
///
/// Input and detection failures are returned as JSON with `ok: false`.
///
/// # Errors
/// - [`SwingError::ConfigParse`] when JSON parsing fails.
/// - [`SwingError::InvalidConfiguration`] for invalid configuration values.
/// - [`SwingError::ResultSerialize`] when the output cannot be serialized.
pub fn detect_swings_from_json(request_json: &str) -> Result<String, SwingError> {
    let request: DetectionRequest = serde_json::from_str(request_json)
        .map_err(|e| SwingError::ConfigParse(e.to_string()))?;

    let detector = SwingDetector::new(request.config)?;
    let output = match detector.run(&request.bars) {
        Ok(detection) => DetectionOutput::success(detection.points, detection.report),
        Err(err) if err.is_config_error() => return Err(err),
        Err(err) => {
            tracing::warn!("Detection failed ({}): {}", err.error_category(), err);
            DetectionOutput::failure(err.into())
        }
    };

    serde_json::to_string(&output).map_err(|e| SwingError::ResultSerialize(e.to_string()))
}
