//! Trend segmenter.
//!
//! Partitions the smoothed series into alternating up and down segments.
//! A reversal happens when the smoothed value moves against the current
//! direction, measured from the pivot, by strictly more than
//! `reversal_threshold_fraction * volatility`.

use swing_indicators::SmoothedPoint;
use swing_types::SwingConfig;

/// Direction of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendBias {
    /// Rising segment, terminated by a high
    Up,
    /// Falling segment, terminated by a low
    Down,
    /// No threshold-exceeding move observed
    Undetermined,
}

impl TrendBias {
    /// Returns the reverse direction (`Undetermined` stays).
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            TrendBias::Up => TrendBias::Down,
            TrendBias::Down => TrendBias::Up,
            TrendBias::Undetermined => TrendBias::Undetermined,
        }
    }
}

/// Half-open run `[start, end)` of smoothed points sharing one bias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Direction of the run
    pub bias: TrendBias,
    /// First smoothed position
    pub start: usize,
    /// One past the last smoothed position
    pub end: usize,
    /// Smoothed position of the pivot terminating the run.
    ///
    /// This is the first point of the successor, or the running pivot
    /// for the final segment. `None` for an undetermined segment.
    pub extreme: Option<usize>,
}

impl Segment {
    /// Number of smoothed points in the segment.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` for an empty segment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// Parameters of the segmenter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmenterParams {
    /// Reversal threshold as a fraction of local volatility
    pub reversal_threshold_fraction: f64,
    /// Leading undetermined runs shorter than this are absorbed
    pub min_segment_points: usize,
}

impl SegmenterParams {
    /// Builds the params from a detection configuration.
    #[must_use]
    pub fn from_config(config: &SwingConfig) -> Self {
        Self {
            reversal_threshold_fraction: config.reversal_threshold_fraction,
            min_segment_points: config.min_segment_points,
        }
    }
}

/// Running extreme of the smoothed series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pivot {
    /// Smoothed value
    pub value: f64,
    /// Position in the smoothed series
    pub position: usize,
}

/// Segmenter state threaded through [`transition`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrendState {
    /// Direction unknown; both extremes tracked
    Undetermined {
        /// Running high
        high: Pivot,
        /// Running low
        low: Pivot,
    },
    /// Rising from the last low
    Up {
        /// Running high
        pivot: Pivot,
    },
    /// Falling from the last high
    Down {
        /// Running low
        pivot: Pivot,
    },
}

impl TrendState {
    /// Initial state at the first smoothed point.
    #[must_use]
    pub fn start(value: f64) -> Self {
        let pivot = Pivot { value, position: 0 };
        TrendState::Undetermined {
            high: pivot,
            low: pivot,
        }
    }

    /// Pivot of a determined state.
    #[must_use]
    pub fn pivot(&self) -> Option<Pivot> {
        match *self {
            TrendState::Up { pivot } | TrendState::Down { pivot } => Some(pivot),
            TrendState::Undetermined { .. } => None,
        }
    }
}

/// Direction change emitted by [`transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reversal {
    /// Smoothed position of the pivot where the new segment starts
    pub boundary: usize,
    /// Direction of the new segment
    pub bias: TrendBias,
}

/// Advances the segmenter by one smoothed point.
///
/// `threshold` is `None` when the local volatility is zero or non-finite;
/// pivots still move but no reversal can occur.
#[must_use]
pub fn transition(
    state: TrendState,
    value: f64,
    position: usize,
    threshold: Option<f64>,
) -> (TrendState, Option<Reversal>) {
    let here = Pivot { value, position };

    match state {
        TrendState::Undetermined { mut high, mut low } => {
            if value > high.value {
                high = here;
            }
            if value < low.value {
                low = here;
            }
            let Some(threshold) = threshold else {
                return (TrendState::Undetermined { high, low }, None);
            };

            let rise = value - low.value;
            let fall = high.value - value;
            let up = rise > threshold;
            let down = fall > threshold;

            // Both directions exceed the threshold: the larger move wins, ties go up
            if up && (!down || rise >= fall) {
                (
                    TrendState::Up { pivot: here },
                    Some(Reversal {
                        boundary: low.position,
                        bias: TrendBias::Up,
                    }),
                )
            } else if down {
                (
                    TrendState::Down { pivot: here },
                    Some(Reversal {
                        boundary: high.position,
                        bias: TrendBias::Down,
                    }),
                )
            } else {
                (TrendState::Undetermined { high, low }, None)
            }
        }
        TrendState::Up { pivot } => {
            if value > pivot.value {
                (TrendState::Up { pivot: here }, None)
            } else if threshold.is_some_and(|t| pivot.value - value > t) {
                (
                    TrendState::Down { pivot: here },
                    Some(Reversal {
                        boundary: pivot.position,
                        bias: TrendBias::Down,
                    }),
                )
            } else {
                (TrendState::Up { pivot }, None)
            }
        }
        TrendState::Down { pivot } => {
            if value < pivot.value {
                (TrendState::Down { pivot: here }, None)
            } else if threshold.is_some_and(|t| value - pivot.value > t) {
                (
                    TrendState::Up { pivot: here },
                    Some(Reversal {
                        boundary: pivot.position,
                        bias: TrendBias::Up,
                    }),
                )
            } else {
                (TrendState::Down { pivot }, None)
            }
        }
    }
}

/// Partitions the smoothed series into trend segments.
///
/// `volatility` is indexed by original bar index (`SmoothedPoint::index`).
/// Segments cover `[0, points.len())` without overlap and adjacent
/// segments have opposite bias.
#[must_use]
pub fn segment(
    points: &[SmoothedPoint],
    volatility: &[f64],
    params: &SegmenterParams,
) -> Vec<Segment> {
    let Some(first) = points.first() else {
        return Vec::new();
    };

    let mut state = TrendState::start(first.value);
    let mut reversals = Vec::new();

    for (position, point) in points.iter().enumerate() {
        let threshold = volatility
            .get(point.index)
            .map(|v| params.reversal_threshold_fraction * v)
            .filter(|t| t.is_finite() && *t > 0.0);
        let (next, reversal) = transition(state, point.value, position, threshold);
        state = next;
        reversals.extend(reversal);
    }

    let len = points.len();
    let terminal = state.pivot().map_or(len - 1, |p| p.position);
    let segments = build_segments(&reversals, terminal, len, params.min_segment_points);

    tracing::debug!(
        "Segmented {} smoothed points into {} segments ({} reversals)",
        len,
        segments.len(),
        reversals.len()
    );

    segments
}

fn build_segments(
    reversals: &[Reversal],
    terminal: usize,
    len: usize,
    min_segment_points: usize,
) -> Vec<Segment> {
    let Some(first) = reversals.first() else {
        return vec![Segment {
            bias: TrendBias::Undetermined,
            start: 0,
            end: len,
            extreme: None,
        }];
    };

    let mut segments = Vec::with_capacity(reversals.len() + 1);
    let keep_leading = first.boundary > 0 && first.boundary >= min_segment_points;
    if keep_leading {
        segments.push(Segment {
            bias: first.bias.opposite(),
            start: 0,
            end: first.boundary,
            extreme: Some(first.boundary),
        });
    }

    for (k, reversal) in reversals.iter().enumerate() {
        let start = if k == 0 && !keep_leading {
            0
        } else {
            reversal.boundary
        };
        let next = reversals.get(k + 1).map(|r| r.boundary);
        segments.push(Segment {
            bias: reversal.bias,
            start,
            end: next.unwrap_or(len),
            extreme: Some(next.unwrap_or(terminal)),
        });
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(values: &[f64]) -> Vec<SmoothedPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| SmoothedPoint {
                index: i,
                timestamp_ns: i as i64,
                value,
            })
            .collect()
    }

    fn params(fraction: f64, min_segment_points: usize) -> SegmenterParams {
        SegmenterParams {
            reversal_threshold_fraction: fraction,
            min_segment_points,
        }
    }

    #[test]
    fn test_zigzag_segments() {
        let pts = points(&[0.0, 1.0, 2.0, 3.0, 4.0, 3.0, 2.0, 1.0, 0.0, 1.0, 2.0]);
        let vol = vec![2.0; pts.len()];
        let segments = segment(&pts, &vol, &params(0.5, 3));

        assert_eq!(
            segments,
            vec![
                Segment { bias: TrendBias::Up, start: 0, end: 4, extreme: Some(4) },
                Segment { bias: TrendBias::Down, start: 4, end: 8, extreme: Some(8) },
                Segment { bias: TrendBias::Up, start: 8, end: 11, extreme: Some(10) },
            ]
        );
    }

    #[test]
    fn test_move_equal_to_threshold_does_not_reverse() {
        // thr = 1.0; the pullback 4 -> 3 equals it exactly
        let pts = points(&[0.0, 2.0, 4.0, 3.0, 3.5]);
        let vol = vec![2.0; pts.len()];
        let segments = segment(&pts, &vol, &params(0.5, 3));
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].bias, TrendBias::Up);
        assert_eq!(segments[0].extreme, Some(2));
    }

    #[test]
    fn test_long_leading_run_is_kept_with_opposite_bias() {
        let pts = points(&[1.0, 1.5, 1.0, 0.5, 0.2, 0.0, 2.0, 3.0]);
        let vol = vec![4.0; pts.len()];
        let segments = segment(&pts, &vol, &params(0.5, 3));

        assert_eq!(
            segments,
            vec![
                Segment { bias: TrendBias::Down, start: 0, end: 5, extreme: Some(5) },
                Segment { bias: TrendBias::Up, start: 5, end: 8, extreme: Some(7) },
            ]
        );
    }

    #[test]
    fn test_short_leading_run_is_absorbed() {
        let pts = points(&[1.0, 1.5, 1.0, 0.5, 0.2, 0.0, 2.0, 3.0]);
        let vol = vec![4.0; pts.len()];
        let segments = segment(&pts, &vol, &params(0.5, 6));

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start, 0);
        assert_eq!(segments[0].end, 8);
        assert_eq!(segments[0].bias, TrendBias::Up);
    }

    #[test]
    fn test_zero_volatility_never_reverses() {
        let pts = points(&[0.0, 5.0, -5.0, 10.0]);
        let vol = vec![0.0; pts.len()];
        let segments = segment(&pts, &vol, &params(1.0, 3));
        assert_eq!(
            segments,
            vec![Segment { bias: TrendBias::Undetermined, start: 0, end: 4, extreme: None }]
        );
    }

    #[test]
    fn test_nan_volatility_never_reverses() {
        let pts = points(&[0.0, 5.0, -5.0]);
        let vol = vec![f64::NAN; pts.len()];
        let segments = segment(&pts, &vol, &params(1.0, 3));
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].bias, TrendBias::Undetermined);
    }

    #[test]
    fn test_tie_in_undetermined_goes_up() {
        let state = TrendState::Undetermined {
            high: Pivot { value: 4.0, position: 1 },
            low: Pivot { value: 0.0, position: 0 },
        };
        let (next, reversal) = transition(state, 2.0, 2, Some(1.0));
        assert_eq!(next, TrendState::Up { pivot: Pivot { value: 2.0, position: 2 } });
        assert_eq!(reversal, Some(Reversal { boundary: 0, bias: TrendBias::Up }));
    }

    #[test]
    fn test_larger_move_wins_in_undetermined() {
        let state = TrendState::Undetermined {
            high: Pivot { value: 4.0, position: 1 },
            low: Pivot { value: 0.0, position: 0 },
        };
        let (next, reversal) = transition(state, 1.0, 2, Some(0.5));
        assert!(matches!(next, TrendState::Down { .. }));
        assert_eq!(reversal, Some(Reversal { boundary: 1, bias: TrendBias::Down }));
    }

    #[test]
    fn test_pivot_moves_without_threshold() {
        let state = TrendState::Down { pivot: Pivot { value: 3.0, position: 4 } };
        let (next, reversal) = transition(state, 2.0, 5, None);
        assert_eq!(next.pivot(), Some(Pivot { value: 2.0, position: 5 }));
        assert!(reversal.is_none());
    }

    #[test]
    fn test_empty_input() {
        assert!(segment(&[], &[], &params(0.5, 3)).is_empty());
    }

    #[test]
    fn test_segments_partition_series() {
        let values: Vec<f64> = (0..200_i32).map(|i| (f64::from(i) * 0.21).sin() * 5.0).collect();
        let pts = points(&values);
        let vol = vec![1.0; pts.len()];
        let segments = segment(&pts, &vol, &params(0.5, 3));

        assert_eq!(segments.first().map(|s| s.start), Some(0));
        assert_eq!(segments.last().map(|s| s.end), Some(pts.len()));
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
            assert_eq!(pair[0].bias, pair[1].bias.opposite());
        }
    }
}
