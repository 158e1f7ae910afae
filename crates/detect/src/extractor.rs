//! Inflection extractor.
//!
//! Maps each segment pivot back to the raw bars and locates the true
//! extreme in a neighborhood around it.

use swing_indicators::SmoothedPoint;
use swing_types::{Bar, SwingKind, SwingPoint};

use crate::error::SwingError;
use crate::segmenter::{Segment, TrendBias};

/// Extracts one swing candidate per determined segment.
///
/// An up-segment yields a `High` at the max bar high within
/// `[o - radius, o + radius]` around the pivot's original index `o`, a
/// down-segment a `Low` at the min bar low. Windows are clamped at the
/// midpoints to the neighbouring pivots, so candidate indices strictly
/// increase. Ties resolve to the earliest bar.
///
/// # Errors
/// [`SwingError::NoExtremumFound`] when a neighborhood is empty.
pub fn extract(
    bars: &[Bar],
    points: &[SmoothedPoint],
    segments: &[Segment],
    volatility: &[f64],
    radius: usize,
) -> Result<Vec<SwingPoint>, SwingError> {
    let pivots: Vec<(&Segment, usize)> = segments
        .iter()
        .filter(|s| s.bias != TrendBias::Undetermined)
        .filter_map(|s| s.extreme.and_then(|e| points.get(e)).map(|p| (s, p.index)))
        .collect();

    let last_bar = bars.len().saturating_sub(1);
    let mut candidates = Vec::with_capacity(pivots.len());

    for (k, &(seg, pivot)) in pivots.iter().enumerate() {
        let mut start = pivot.saturating_sub(radius);
        let mut end = (pivot + radius).min(last_bar);
        if k > 0 {
            let prev = pivots[k - 1].1;
            start = start.max((prev + pivot) / 2 + 1);
        }
        if let Some(&(_, next)) = pivots.get(k + 1) {
            end = end.min((pivot + next) / 2);
        }
        if start > end || end >= bars.len() {
            return Err(SwingError::NoExtremumFound { pivot, start, end });
        }

        let origin = points
            .get(seg.start)
            .map_or(0, |p| p.index)
            .saturating_sub(radius)
            .min(pivot);

        let window = &bars[start..=end];
        let span = &bars[origin..=pivot];
        let (offset, kind, price, opposing) = if seg.bias == TrendBias::Up {
            let (offset, price) = arg_extreme(window.iter().map(|b| b.high), |a, b| a > b);
            let opposing = span.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);
            (offset, SwingKind::High, price, opposing)
        } else {
            let (offset, price) = arg_extreme(window.iter().map(|b| b.low), |a, b| a < b);
            let opposing = span.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);
            (offset, SwingKind::Low, price, opposing)
        };

        let index = start + offset;
        let amplitude = (price - opposing).abs();
        let strength = match volatility.get(index) {
            Some(&v) if v.is_finite() && v > 0.0 => amplitude / v,
            _ => 0.0,
        };

        candidates.push(SwingPoint {
            kind,
            index,
            timestamp_ns: bars[index].timestamp_ns,
            price,
            strength,
            amplitude,
        });
    }

    tracing::debug!(
        "Extracted {} swing candidates from {} segments (radius {})",
        candidates.len(),
        segments.len(),
        radius
    );

    Ok(candidates)
}

/// First position whose value beats every earlier one under `better`.
fn arg_extreme(values: impl Iterator<Item = f64>, better: impl Fn(f64, f64) -> bool) -> (usize, f64) {
    let mut best = (0, f64::NAN);
    for (i, v) in values.enumerate() {
        if i == 0 || better(v, best.1) {
            best = (i, v);
        }
    }
    best
}
