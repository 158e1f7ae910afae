//! Gap analysis for bars on a regular interval grid.

use swing_types::Bar;

use crate::error::DataError;

/// Statistics describing missing bars on the interval grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapStats {
    /// Number of grid slots between the first and last bar (inclusive).
    pub expected_bars: usize,
    /// Number of grid slots without a bar.
    pub missing_bars: usize,
    /// Number of bars whose timestamp is not on the grid.
    pub off_grid_bars: usize,
    /// Longest run of consecutive missing slots.
    pub largest_gap: usize,
    /// Missing bars divided by expected bars.
    pub gap_loss: f64,
}

impl GapStats {
    /// Returns `true` when the bars cover every grid slot.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_bars == 0 && self.off_grid_bars == 0
    }
}

/// Analyze gaps of a sorted bar sequence on a grid anchored at the first bar.
///
/// The analysis does not interpolate. Large gap losses (> 5%) are logged.
///
/// # Errors
/// - [`DataError::EmptyData`] when `bars` is empty.
/// - [`DataError::InvalidInterval`] when `step_ns` is non-positive.
/// - [`DataError::OffGrid`] when the time span overflows `i64`.
pub fn analyze_gaps(bars: &[Bar], step_ns: i64) -> Result<GapStats, DataError> {
    if step_ns <= 0 {
        return Err(DataError::InvalidInterval(step_ns));
    }
    let (Some(first), Some(last)) = (bars.first(), bars.last()) else {
        return Err(DataError::EmptyData);
    };

    let mut missing_bars = 0usize;
    let mut off_grid_bars = 0usize;
    let mut largest_gap = 0usize;

    let span = span_ns(first, last, bars.len() - 1, step_ns)?;

    for (i, pair) in bars.windows(2).enumerate() {
        let delta = span_ns(&pair[0], &pair[1], i + 1, step_ns)?;
        let offset = span_ns(first, &pair[1], i + 1, step_ns)?;
        if offset % step_ns != 0 {
            off_grid_bars += 1;
            continue;
        }
        let missing = missing_slots(delta, step_ns);
        missing_bars += missing;
        largest_gap = largest_gap.max(missing);
    }

    let expected_bars = slot_count(span, step_ns).saturating_add(1);

    #[allow(clippy::cast_precision_loss)]
    let gap_loss = missing_bars as f64 / expected_bars as f64;

    if gap_loss > 0.05 {
        tracing::warn!(
            "Large gaps detected: {} missing bars ({:.2}%), largest gap {} bars",
            missing_bars,
            gap_loss * 100.0,
            largest_gap
        );
    }

    Ok(GapStats {
        expected_bars,
        missing_bars,
        off_grid_bars,
        largest_gap,
        gap_loss,
    })
}

/// Forward-fills gaps of at most `max_fill` missing bars.
///
/// Filled bars are flat at the previous close with zero volume.
/// Returns the filled sequence and a flag per bar marking synthetic bars.
///
/// # Errors
/// - [`DataError::InvalidInterval`] when `step_ns` is non-positive.
/// - [`DataError::OffGrid`] when a timestamp is not on the grid.
/// - [`DataError::Gap`] when a gap is longer than `max_fill`.
pub fn fill_gaps(
    bars: &[Bar],
    step_ns: i64,
    max_fill: usize,
) -> Result<(Vec<Bar>, Vec<bool>), DataError> {
    if step_ns <= 0 {
        return Err(DataError::InvalidInterval(step_ns));
    }

    let mut filled: Vec<Bar> = Vec::with_capacity(bars.len());
    let mut synthetic = Vec::with_capacity(bars.len());

    for (i, bar) in bars.iter().enumerate() {
        if let Some(prev) = filled.last().copied() {
            let delta = span_ns(&prev, bar, i, step_ns)?;
            if delta % step_ns != 0 {
                return Err(DataError::OffGrid {
                    index: i,
                    timestamp_ns: bar.timestamp_ns,
                    step_ns,
                });
            }
            let missing = missing_slots(delta, step_ns);
            if missing > max_fill {
                return Err(DataError::Gap {
                    after_ns: prev.timestamp_ns,
                    missing,
                    allowed: max_fill,
                });
            }
            let mut ts = prev.timestamp_ns;
            for _ in 0..missing {
                ts += step_ns;
                filled.push(Bar::flat(ts, prev.close));
                synthetic.push(true);
            }
        }
        filled.push(*bar);
        synthetic.push(false);
    }

    Ok((filled, synthetic))
}

/// Checks that every bar sits on the grid with no missing slot.
///
/// # Errors
/// [`DataError::OffGrid`] or [`DataError::Gap`] for the first violation.
pub(crate) fn require_complete_grid(bars: &[Bar], step_ns: i64) -> Result<(), DataError> {
    fill_gaps(bars, step_ns, 0).map(|_| ())
}

/// Distance between two timestamps, or `OffGrid` for `later` when the
/// difference does not fit in an `i64`.
fn span_ns(earlier: &Bar, later: &Bar, index: usize, step_ns: i64) -> Result<i64, DataError> {
    later
        .timestamp_ns
        .checked_sub(earlier.timestamp_ns)
        .ok_or(DataError::OffGrid {
            index,
            timestamp_ns: later.timestamp_ns,
            step_ns,
        })
}

fn slot_count(delta_ns: i64, step_ns: i64) -> usize {
    usize::try_from(delta_ns / step_ns).unwrap_or(0)
}

fn missing_slots(delta_ns: i64, step_ns: i64) -> usize {
    slot_count(delta_ns, step_ns).saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: i64 = 60;

    fn bars_at(timestamps: &[i64]) -> Vec<Bar> {
        timestamps
            .iter()
            .enumerate()
            .map(|(i, &ts)| {
                let close = 100.0 + i as f64;
                Bar::new(ts, close, close + 1.0, close - 1.0, close)
            })
            .collect()
    }

    #[test]
    fn test_analyze_complete_grid() {
        let bars = bars_at(&[0, 60, 120, 180]);
        let stats = analyze_gaps(&bars, STEP).unwrap();
        assert_eq!(stats.expected_bars, 4);
        assert_eq!(stats.missing_bars, 0);
        assert!(stats.is_complete());
        assert_eq!(stats.gap_loss, 0.0);
    }

    #[test]
    fn test_analyze_counts_missing_and_largest() {
        let bars = bars_at(&[0, 60, 240, 300, 480]);
        let stats = analyze_gaps(&bars, STEP).unwrap();
        assert_eq!(stats.expected_bars, 9);
        assert_eq!(stats.missing_bars, 4);
        assert_eq!(stats.largest_gap, 2);
        assert!((stats.gap_loss - 4.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_analyze_counts_off_grid() {
        let bars = bars_at(&[0, 60, 150]);
        let stats = analyze_gaps(&bars, STEP).unwrap();
        assert_eq!(stats.off_grid_bars, 1);
        assert!(!stats.is_complete());
    }

    #[test]
    fn test_analyze_rejects_bad_step() {
        let bars = bars_at(&[0, 60]);
        assert_eq!(
            analyze_gaps(&bars, 0),
            Err(DataError::InvalidInterval(0))
        );
        assert_eq!(analyze_gaps(&[], STEP), Err(DataError::EmptyData));
    }

    #[test]
    fn test_fill_inserts_flat_bars() {
        let bars = bars_at(&[0, 60, 240]);
        let (filled, synthetic) = fill_gaps(&bars, STEP, 2).unwrap();

        let ts: Vec<i64> = filled.iter().map(|b| b.timestamp_ns).collect();
        assert_eq!(ts, vec![0, 60, 120, 180, 240]);
        assert_eq!(synthetic, vec![false, false, true, true, false]);
        // Flat at previous close
        assert_eq!(filled[2], Bar::flat(120, 101.0));
        assert_eq!(filled[3].high, 101.0);
        assert_eq!(filled[3].volume, 0.0);
    }

    #[test]
    fn test_fill_rejects_long_gap() {
        let bars = bars_at(&[0, 300]);
        assert_eq!(
            fill_gaps(&bars, STEP, 3),
            Err(DataError::Gap {
                after_ns: 0,
                missing: 4,
                allowed: 3
            })
        );
    }

    #[test]
    fn test_fill_rejects_off_grid() {
        let bars = bars_at(&[0, 90]);
        assert!(matches!(
            fill_gaps(&bars, STEP, 3),
            Err(DataError::OffGrid { index: 1, .. })
        ));
    }

    #[test]
    fn test_extreme_timestamps_do_not_overflow() {
        let bars = bars_at(&[i64::MIN, 60]);
        assert!(matches!(
            analyze_gaps(&bars, STEP),
            Err(DataError::OffGrid { index: 1, timestamp_ns: 60, .. })
        ));
        assert!(matches!(
            fill_gaps(&bars, STEP, 3),
            Err(DataError::OffGrid { index: 1, .. })
        ));

        let bars = bars_at(&[i64::MIN, i64::MIN + STEP]);
        assert!(analyze_gaps(&bars, STEP).unwrap().is_complete());
    }

    #[test]
    fn test_require_complete_grid() {
        assert!(require_complete_grid(&bars_at(&[0, 60, 120]), STEP).is_ok());
        assert!(require_complete_grid(&bars_at(&[0, 120]), STEP).is_err());
    }
}
