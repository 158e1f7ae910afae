//! Column export of swing points for chart overlays.

use swing_types::{SwingKind, SwingPoint};

/// Series-aligned swing columns; NaN where a bar holds no swing point.
#[derive(Debug, Clone, PartialEq)]
pub struct SwingColumns {
    /// Swing high prices
    pub highs: Vec<f64>,
    /// Swing low prices
    pub lows: Vec<f64>,
}

impl SwingColumns {
    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.highs.len()
    }

    /// Returns `true` when there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.highs.is_empty()
    }
}

/// Builds `highs`/`lows` columns of length `len` from swing points.
///
/// Points indexing past `len` are ignored.
#[must_use]
pub fn swing_columns(len: usize, points: &[SwingPoint]) -> SwingColumns {
    let mut highs = vec![f64::NAN; len];
    let mut lows = vec![f64::NAN; len];

    for point in points.iter().filter(|p| p.index < len) {
        match point.kind {
            SwingKind::High => highs[point.index] = point.price,
            SwingKind::Low => lows[point.index] = point.price,
        }
    }

    SwingColumns { highs, lows }
}
