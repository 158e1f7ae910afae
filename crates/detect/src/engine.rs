//! Detection engine orchestration.

use swing_data::{NormalizeOptions, normalize};
use swing_indicators::{SmoothingSpec, VolatilitySpec, smooth, volatility};
use swing_types::{Bar, DetectionReport, SwingConfig, SwingPoint};

use crate::error::SwingError;
use crate::extractor::extract;
use crate::segmenter::{SegmenterParams, segment};
use crate::validator::{FilterParams, filter};

/// Result of one detection run.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// Validated swing points (alternating kinds, increasing timestamps)
    pub points: Vec<SwingPoint>,
    /// Per-stage counters
    pub report: DetectionReport,
}

/// Swing detector bound to a validated configuration.
///
/// Stateless between runs; one detector can serve many series.
#[derive(Debug, Clone)]
pub struct SwingDetector {
    config: SwingConfig,
}

impl SwingDetector {
    /// Creates a detector after validating the configuration.
    ///
    /// # Errors
    /// [`SwingError::InvalidConfiguration`] when a parameter is out of range.
    pub fn new(config: SwingConfig) -> Result<Self, SwingError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &SwingConfig {
        &self.config
    }

    /// Runs the full pipeline on `bars`.
    ///
    /// # Errors
    /// - [`SwingError::MalformedInput`] for invalid bars.
    /// - [`SwingError::InsufficientData`] when the series is too short.
    /// - [`SwingError::EmptyResult`] when filtering removed every candidate.
    /// - [`SwingError::NoExtremumFound`] on an internal inconsistency.
    pub fn run(&self, bars: &[Bar]) -> Result<Detection, SwingError> {
        let config = &self.config;

        let series = normalize(bars, &NormalizeOptions::from_config(config))?;
        let canonical = series.bars();

        let smoothed = smooth(canonical, &SmoothingSpec::from_config(config))?;
        let vol = volatility(canonical, &VolatilitySpec::from_config(config))?;
        let segments = segment(&smoothed, &vol, &SegmenterParams::from_config(config));
        let candidates = extract(
            canonical,
            &smoothed,
            &segments,
            &vol,
            config.neighborhood_radius(),
        )?;
        let candidate_count = candidates.len();
        let points = filter(candidates, &FilterParams::from_config(config))?;

        let report = DetectionReport {
            input_bars: bars.len(),
            canonical_bars: series.len(),
            filled_bars: series.filled_count(),
            missing_bars: series.missing_bars(),
            off_grid_bars: series.off_grid_bars(),
            smoothed_points: smoothed.len(),
            segments: segments.len(),
            candidates: candidate_count,
            points: points.len(),
        };

        tracing::info!(
            "Detected {} swing points in {} bars ({} segments, {} candidates)",
            report.points,
            report.canonical_bars,
            report.segments,
            report.candidates
        );

        Ok(Detection { points, report })
    }
}

/// Detects swing points with the given configuration.
///
/// # Errors
/// Any [`SwingError`] from configuration validation or the pipeline.
pub fn detect_swings(bars: &[Bar], config: &SwingConfig) -> Result<Vec<SwingPoint>, SwingError> {
    SwingDetector::new(config.clone())?
        .run(bars)
        .map(|detection| detection.points)
}
