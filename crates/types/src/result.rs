use crate::swing::SwingPoint;

/// Serializable detection result envelope.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DetectionOutput {
    /// Success flag
    pub ok: bool,
    /// Error information if not ok
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
    /// Validated swing points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<SwingPoint>>,
    /// Per-stage counters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<DetectionReport>,
}

impl DetectionOutput {
    /// Successful output.
    #[must_use]
    pub fn success(points: Vec<SwingPoint>, report: DetectionReport) -> Self {
        Self {
            ok: true,
            error: None,
            points: Some(points),
            report: Some(report),
        }
    }

    /// Failed output.
    #[must_use]
    pub fn failure(error: ErrorReport) -> Self {
        Self {
            ok: false,
            error: Some(error),
            points: None,
            report: None,
        }
    }
}

/// Error result information
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ErrorReport {
    /// Error category (`config`, `input`, `empty`, `internal`)
    pub category: String,
    /// Error message
    pub message: String,
}

/// Counters describing one detection run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DetectionReport {
    /// Bars handed to the engine
    pub input_bars: usize,
    /// Bars after normalization (including forward-filled bars)
    pub canonical_bars: usize,
    /// Bars synthesized by forward fill
    pub filled_bars: usize,
    /// Grid slots left empty under the `allow` gap policy
    #[serde(default)]
    pub missing_bars: usize,
    /// Bars off the interval grid under the `allow` gap policy
    #[serde(default)]
    pub off_grid_bars: usize,
    /// Smoothed points after warm-up
    pub smoothed_points: usize,
    /// Trend segments
    pub segments: usize,
    /// Swing candidates before filtering
    pub candidates: usize,
    /// Swing points returned
    pub points: usize,
}
