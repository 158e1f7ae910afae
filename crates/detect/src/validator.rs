//! Validator and filter for swing candidates.

use swing_types::{SwingConfig, SwingPoint};

use crate::error::SwingError;

/// Filter thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterParams {
    /// Minimum strength (move / volatility)
    pub min_strength: f64,
    /// Minimum move in percent of the opposing extreme
    pub min_amplitude_pct: f64,
    /// Minimum distance in bars between consecutive points
    pub min_separation_bars: usize,
}

impl FilterParams {
    /// Builds the params from a detection configuration.
    #[must_use]
    pub fn from_config(config: &SwingConfig) -> Self {
        Self {
            min_strength: config.min_strength,
            min_amplitude_pct: config.min_amplitude_pct,
            min_separation_bars: config.min_separation_bars,
        }
    }
}

/// Filters candidates into an alternating, strictly increasing list.
///
/// Weak candidates are dropped first. Then adjacent same-kind points are
/// merged and the weaker point of any adjacent pair that is too close (or
/// not strictly increasing) is dropped, until nothing changes. On equal
/// strength the earlier point survives.
///
/// # Errors
/// [`SwingError::EmptyResult`] when filtering removed every candidate of a
/// non-empty list.
pub fn filter(
    candidates: Vec<SwingPoint>,
    params: &FilterParams,
) -> Result<Vec<SwingPoint>, SwingError> {
    let total = candidates.len();
    if total == 0 {
        return Ok(candidates);
    }

    let mut points: Vec<SwingPoint> = candidates
        .into_iter()
        .filter(|p| p.strength >= params.min_strength)
        .filter(|p| p.amplitude_pct() >= params.min_amplitude_pct)
        .collect();
    let significant = points.len();

    loop {
        let mut changed = merge_same_kind(&mut points);
        if let Some(i) = first_crowded_pair(&points, params.min_separation_bars) {
            drop_weaker(&mut points, i);
            changed = true;
        }
        if !changed {
            break;
        }
    }

    tracing::debug!(
        "Filtered {} candidates: {} significant, {} kept",
        total,
        significant,
        points.len()
    );

    if points.is_empty() {
        return Err(SwingError::EmptyResult { candidates: total });
    }
    Ok(points)
}

/// Removes the weaker of `points[i]` and `points[i + 1]`.
fn drop_weaker(points: &mut Vec<SwingPoint>, i: usize) {
    if points[i + 1].strength > points[i].strength {
        points.remove(i);
    } else {
        points.remove(i + 1);
    }
}

fn merge_same_kind(points: &mut Vec<SwingPoint>) -> bool {
    let mut changed = false;
    let mut i = 0;
    while i + 1 < points.len() {
        if points[i].kind == points[i + 1].kind {
            drop_weaker(points, i);
            changed = true;
        } else {
            i += 1;
        }
    }
    changed
}

fn first_crowded_pair(points: &[SwingPoint], min_separation: usize) -> Option<usize> {
    points.windows(2).position(|pair| {
        pair[1].index <= pair[0].index || pair[1].index - pair[0].index < min_separation
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use swing_types::SwingKind;

    fn point(kind: SwingKind, index: usize, strength: f64) -> SwingPoint {
        SwingPoint {
            kind,
            index,
            timestamp_ns: index as i64 * 60,
            price: 100.0,
            strength,
            amplitude: strength,
        }
    }

    fn params(min_strength: f64, min_separation_bars: usize) -> FilterParams {
        FilterParams {
            min_strength,
            min_amplitude_pct: 0.0,
            min_separation_bars,
        }
    }

    fn summary(points: &[SwingPoint]) -> Vec<(SwingKind, usize)> {
        points.iter().map(|p| (p.kind, p.index)).collect()
    }

    #[test]
    fn test_no_candidates_is_ok() {
        assert_eq!(filter(Vec::new(), &params(1.0, 0)), Ok(Vec::new()));
    }

    #[test]
    fn test_drops_weak_and_merges() {
        let candidates = vec![
            point(SwingKind::High, 1, 2.0),
            point(SwingKind::Low, 3, 0.5),
            point(SwingKind::High, 5, 5.0),
            point(SwingKind::Low, 9, 3.0),
        ];
        let kept = filter(candidates, &params(1.0, 0)).unwrap();
        assert_eq!(
            summary(&kept),
            vec![(SwingKind::High, 5), (SwingKind::Low, 9)]
        );
    }

    #[test]
    fn test_equal_strength_keeps_earlier() {
        let candidates = vec![point(SwingKind::Low, 2, 1.0), point(SwingKind::Low, 4, 1.0)];
        let kept = filter(candidates, &params(0.0, 0)).unwrap();
        assert_eq!(summary(&kept), vec![(SwingKind::Low, 2)]);
    }

    #[test]
    fn test_separation_remerges_to_fixed_point() {
        let candidates = vec![
            point(SwingKind::High, 0, 5.0),
            point(SwingKind::Low, 2, 1.0),
            point(SwingKind::High, 6, 4.0),
        ];
        let kept = filter(candidates, &params(0.0, 3)).unwrap();
        assert_eq!(summary(&kept), vec![(SwingKind::High, 0)]);
    }

    #[test]
    fn test_duplicate_index_is_dropped() {
        let candidates = vec![
            point(SwingKind::High, 4, 1.0),
            point(SwingKind::Low, 4, 2.0),
            point(SwingKind::High, 8, 3.0),
        ];
        let kept = filter(candidates, &params(0.0, 0)).unwrap();
        assert_eq!(
            summary(&kept),
            vec![(SwingKind::Low, 4), (SwingKind::High, 8)]
        );
    }

    #[test]
    fn test_amplitude_pct_filter() {
        let mut small = point(SwingKind::High, 3, 5.0);
        small.amplitude = 0.5; // 0.5 / 99.5 ~ 0.5%
        let mut large = point(SwingKind::Low, 7, 5.0);
        large.amplitude = 5.0; // 5 / 105 ~ 4.8%

        let filter_params = FilterParams {
            min_strength: 0.0,
            min_amplitude_pct: 1.0,
            min_separation_bars: 0,
        };
        let kept = filter(vec![small, large], &filter_params).unwrap();
        assert_eq!(summary(&kept), vec![(SwingKind::Low, 7)]);
    }

    #[test]
    fn test_everything_filtered_is_empty_result() {
        let candidates = vec![point(SwingKind::High, 1, 0.2), point(SwingKind::Low, 5, 0.3)];
        assert_eq!(
            filter(candidates, &params(1.0, 0)),
            Err(SwingError::EmptyResult { candidates: 2 })
        );
    }

    #[test]
    fn test_output_alternates_and_increases() {
        let kinds = [SwingKind::High, SwingKind::High, SwingKind::Low, SwingKind::High, SwingKind::Low, SwingKind::Low];
        let candidates: Vec<SwingPoint> = kinds
            .iter()
            .enumerate()
            .map(|(i, &k)| point(k, i * 2, 1.0 + (i % 3) as f64))
            .collect();
        let kept = filter(candidates, &params(0.0, 3)).unwrap();

        for pair in kept.windows(2) {
            assert_ne!(pair[0].kind, pair[1].kind);
            assert!(pair[1].index >= pair[0].index + 3);
        }
    }
}
