//! Parallel detection over independent series.

use rayon::prelude::*;
use swing_types::{Bar, SwingConfig};

use crate::engine::{Detection, SwingDetector};
use crate::error::SwingError;

/// Runs one detection per series in parallel.
///
/// Results keep the order of `series`.
///
/// # Errors
/// [`SwingError::InvalidConfiguration`] when the configuration is invalid;
/// per-series failures are returned in place.
pub fn detect_batch<S>(
    series: &[S],
    config: &SwingConfig,
) -> Result<Vec<Result<Detection, SwingError>>, SwingError>
where
    S: AsRef<[Bar]> + Sync,
{
    let detector = SwingDetector::new(config.clone())?;
    let results: Vec<_> = series
        .par_iter()
        .map(|bars| detector.run(bars.as_ref()))
        .collect();

    tracing::debug!("Batch detection over {} series", results.len());
    Ok(results)
}
