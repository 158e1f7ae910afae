//! Series normalizer.

use swing_types::{Bar, GapPolicy, SwingConfig, Timeframe};

use crate::error::DataError;
use crate::gaps::{analyze_gaps, fill_gaps, require_complete_grid};
use crate::series::Series;
use crate::validation::validate_bars;

/// Options controlling [`normalize`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizeOptions {
    /// Minimum length of the canonical series.
    pub required_bars: usize,
    /// Interval grid; `None` disables gap handling.
    pub bar_interval: Option<Timeframe>,
    /// Gap handling policy (only used with `bar_interval`).
    pub gap_policy: GapPolicy,
    /// Longest gap repaired by forward fill.
    pub max_fill_bars: usize,
}

impl NormalizeOptions {
    /// Builds options from a detection configuration.
    #[must_use]
    pub fn from_config(config: &SwingConfig) -> Self {
        Self {
            required_bars: config.required_bars(),
            bar_interval: config.bar_interval,
            gap_policy: config.gap_policy,
            max_fill_bars: config.max_fill_bars,
        }
    }
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self::from_config(&SwingConfig::default())
    }
}

/// Normalizes raw bars into a canonical [`Series`].
///
/// Bars are sorted by timestamp (stable), validated, and checked
/// against the interval grid according to the gap policy.
///
/// # Errors
/// - [`DataError::InsufficientData`] when the input is empty or the
///   canonical series is shorter than `required_bars`.
/// - [`DataError::CorruptData`] / [`DataError::DuplicateTimestamp`] for
///   invalid bars.
/// - [`DataError::OffGrid`] / [`DataError::Gap`] when the gap policy
///   rejects the grid.
pub fn normalize(bars: &[Bar], options: &NormalizeOptions) -> Result<Series, DataError> {
    if bars.is_empty() {
        return Err(DataError::InsufficientData {
            required: options.required_bars.max(1),
            available: 0,
        });
    }

    let mut sorted = bars.to_vec();
    sorted.sort_by_key(|b| b.timestamp_ns);
    validate_bars(&sorted)?;

    let series = match options.bar_interval {
        None => Series::new(sorted, None),
        Some(tf) => {
            let step_ns = tf.step_ns();
            match options.gap_policy {
                GapPolicy::Reject => {
                    require_complete_grid(&sorted, step_ns)?;
                    Series::new(sorted, Some(tf))
                }
                GapPolicy::ForwardFill => {
                    let (filled, synthetic) = fill_gaps(&sorted, step_ns, options.max_fill_bars)?;
                    let series = Series::with_synthetic(filled, synthetic, Some(tf));
                    if series.filled_count() > 0 {
                        tracing::warn!(
                            "Forward-filled {} missing bars on {} grid",
                            series.filled_count(),
                            tf
                        );
                    }
                    series
                }
                GapPolicy::Allow => {
                    let stats = analyze_gaps(&sorted, step_ns)?;
                    if !stats.is_complete() {
                        tracing::warn!(
                            "Keeping gaps on {} grid: {} missing, {} off-grid bars",
                            tf,
                            stats.missing_bars,
                            stats.off_grid_bars
                        );
                    }
                    Series::new(sorted, Some(tf)).with_gap_stats(stats)
                }
            }
        }
    };

    if series.len() < options.required_bars {
        return Err(DataError::InsufficientData {
            required: options.required_bars,
            available: series.len(),
        });
    }

    tracing::debug!(
        "Normalized {} input bars into {} canonical bars ({} filled)",
        bars.len(),
        series.len(),
        series.filled_count()
    );

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    const M1: i64 = 60_000_000_000;

    fn make_bar(ts: i64, close: f64) -> Bar {
        Bar::new(ts, close, close + 0.5, close - 0.5, close)
    }

    fn opts(required: usize) -> NormalizeOptions {
        NormalizeOptions {
            required_bars: required,
            bar_interval: None,
            gap_policy: GapPolicy::Reject,
            max_fill_bars: 3,
        }
    }

    #[test]
    fn test_normalize_sorts_bars() {
        let bars = vec![make_bar(120, 3.0), make_bar(0, 1.0), make_bar(60, 2.0)];
        let series = normalize(&bars, &opts(3)).unwrap();
        assert_eq!(series.timestamps(), vec![0, 60, 120]);
        assert_eq!(series.get(0).map(|b| b.close), Some(1.0));
    }

    #[test]
    fn test_normalize_empty_is_insufficient() {
        assert_eq!(
            normalize(&[], &opts(0)),
            Err(DataError::InsufficientData {
                required: 1,
                available: 0
            })
        );
    }

    #[test]
    fn test_normalize_too_short() {
        let bars = vec![make_bar(0, 1.0), make_bar(60, 2.0)];
        assert_eq!(
            normalize(&bars, &opts(5)),
            Err(DataError::InsufficientData {
                required: 5,
                available: 2
            })
        );
    }

    #[test]
    fn test_normalize_rejects_duplicates() {
        let bars = vec![make_bar(0, 1.0), make_bar(60, 2.0), make_bar(60, 2.5)];
        let err = normalize(&bars, &opts(1)).unwrap_err();
        assert!(matches!(err, DataError::DuplicateTimestamp { timestamp_ns: 60, .. }));
        assert!(err.is_malformed());
    }

    #[test]
    fn test_normalize_reject_policy_on_gap() {
        let bars = vec![make_bar(0, 1.0), make_bar(M1, 2.0), make_bar(3 * M1, 3.0)];
        let options = NormalizeOptions {
            bar_interval: Some(Timeframe::M1),
            ..opts(1)
        };
        let err = normalize(&bars, &options).unwrap_err();
        assert!(matches!(err, DataError::Gap { missing: 1, .. }));
    }

    #[test]
    fn test_normalize_forward_fill_counts_toward_length() {
        let bars = vec![make_bar(0, 1.0), make_bar(M1, 2.0), make_bar(4 * M1, 3.0)];
        let options = NormalizeOptions {
            bar_interval: Some(Timeframe::M1),
            gap_policy: GapPolicy::ForwardFill,
            ..opts(5)
        };
        let series = normalize(&bars, &options).unwrap();
        assert_eq!(series.len(), 5);
        assert_eq!(series.filled_count(), 2);
        assert!(series.is_synthetic(2));
        assert_eq!(series.get(3).map(|b| b.close), Some(2.0));
    }

    #[test]
    fn test_normalize_allow_policy_keeps_gaps() {
        let bars = vec![make_bar(0, 1.0), make_bar(M1, 2.0), make_bar(10 * M1, 3.0)];
        let options = NormalizeOptions {
            bar_interval: Some(Timeframe::M1),
            gap_policy: GapPolicy::Allow,
            ..opts(3)
        };
        let series = normalize(&bars, &options).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.filled_count(), 0);

        let stats = series.gap_stats().unwrap();
        assert_eq!(stats.expected_bars, 11);
        assert_eq!(stats.missing_bars, 8);
        assert_eq!(series.missing_bars(), 8);
    }

    #[test]
    fn test_normalize_allow_policy_extreme_span_is_malformed() {
        let bars = vec![make_bar(i64::MIN, 1.0), make_bar(0, 2.0), make_bar(M1, 3.0)];
        let options = NormalizeOptions {
            bar_interval: Some(Timeframe::M1),
            gap_policy: GapPolicy::Allow,
            ..opts(1)
        };
        let err = normalize(&bars, &options).unwrap_err();
        assert!(matches!(err, DataError::OffGrid { index: 2, .. }));
        assert!(err.is_malformed());
    }

    #[test]
    fn test_normalize_without_allow_has_no_gap_stats() {
        let bars = vec![make_bar(0, 1.0), make_bar(M1, 2.0)];
        let options = NormalizeOptions {
            bar_interval: Some(Timeframe::M1),
            ..opts(2)
        };
        assert!(normalize(&bars, &options).unwrap().gap_stats().is_none());
    }

    #[test]
    fn test_options_from_config() {
        let config = SwingConfig {
            bar_interval: Some(Timeframe::H1),
            gap_policy: GapPolicy::ForwardFill,
            ..SwingConfig::default()
        };
        let options = NormalizeOptions::from_config(&config);
        assert_eq!(options.required_bars, 14);
        assert_eq!(options.bar_interval, Some(Timeframe::H1));
        assert_eq!(options.gap_policy, GapPolicy::ForwardFill);
    }
}
