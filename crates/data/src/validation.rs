//! OHLC validation helpers.

use crate::error::DataError;
use swing_types::Bar;

/// Validates a sequence of bars that is expected to be sorted by timestamp.
///
/// # Errors
/// - [`DataError::EmptyData`] when `bars` is empty.
/// - [`DataError::CorruptData`] for NaN/Inf prices, negative volume, an OHLC
///   range violation or a decreasing timestamp.
/// - [`DataError::DuplicateTimestamp`] when two consecutive bars share a timestamp.
pub fn validate_bars(bars: &[Bar]) -> Result<(), DataError> {
    if bars.is_empty() {
        return Err(DataError::EmptyData);
    }

    for (i, bar) in bars.iter().enumerate() {
        if !bar.is_finite() {
            return Err(DataError::CorruptData(format!(
                "NaN/Inf at index {i}: {bar:?}"
            )));
        }

        if bar.volume < 0.0 {
            return Err(DataError::CorruptData(format!(
                "Negative volume at index {i}: {}",
                bar.volume
            )));
        }

        if !bar.has_valid_range() {
            return Err(DataError::CorruptData(format!(
                "Invalid OHLC at index {i}: low={}, high={}, open={}, close={}",
                bar.low, bar.high, bar.open, bar.close
            )));
        }

        if i > 0 {
            let prev = bars[i - 1].timestamp_ns;
            if bar.timestamp_ns == prev {
                return Err(DataError::DuplicateTimestamp {
                    index: i,
                    timestamp_ns: bar.timestamp_ns,
                });
            }
            if bar.timestamp_ns < prev {
                return Err(DataError::CorruptData(format!(
                    "Non-monotonic timestamp at index {i}: {} < {prev}",
                    bar.timestamp_ns
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(ts: i64, close: f64) -> Bar {
        Bar::new(ts, close, close + 0.5, close - 0.5, close)
    }

    #[test]
    fn test_valid_sequence_passes() {
        let bars = vec![bar(1, 10.0), bar(2, 10.5), bar(3, 10.2)];
        assert!(validate_bars(&bars).is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(validate_bars(&[]), Err(DataError::EmptyData));
    }

    #[test]
    fn test_rejects_high_below_close() {
        let mut bars = vec![bar(1, 10.0), bar(2, 10.5)];
        bars[1].high = 10.4;
        let err = validate_bars(&bars).unwrap_err();
        assert!(matches!(err, DataError::CorruptData(ref msg) if msg.contains("index 1")));
    }

    #[test]
    fn test_rejects_duplicate_timestamp() {
        let bars = vec![bar(1, 10.0), bar(2, 10.5), bar(2, 10.6)];
        assert_eq!(
            validate_bars(&bars),
            Err(DataError::DuplicateTimestamp {
                index: 2,
                timestamp_ns: 2
            })
        );
    }

    #[test]
    fn test_rejects_unsorted() {
        let bars = vec![bar(5, 10.0), bar(2, 10.5)];
        assert!(matches!(
            validate_bars(&bars),
            Err(DataError::CorruptData(_))
        ));
    }

    #[test]
    fn test_rejects_infinite_price_and_negative_volume() {
        let mut bars = vec![bar(1, 10.0)];
        bars[0].close = f64::INFINITY;
        assert!(validate_bars(&bars).unwrap_err().is_malformed());

        let mut bars = vec![bar(1, 10.0)];
        bars[0].volume = -3.0;
        assert!(validate_bars(&bars).unwrap_err().is_malformed());
    }
}
