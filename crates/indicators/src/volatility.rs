//! Rolling volatility estimate per bar.

use swing_types::{Bar, PriceField, SwingConfig, VolatilityMethod};

use crate::error::IndicatorError;
use crate::impl_::{atr::ATR, rolling_std::RollingStd};
use crate::traits::Indicator;

/// Volatility estimator parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolatilitySpec {
    /// Estimator.
    pub method: VolatilityMethod,
    /// Lookback window.
    pub window: usize,
    /// Price field for the standard deviation estimator.
    pub price_field: PriceField,
}

impl VolatilitySpec {
    /// Builds the volatility parameters from a detection configuration.
    #[must_use]
    pub fn from_config(config: &SwingConfig) -> Self {
        Self {
            method: config.volatility_method,
            window: config.volatility_window,
            price_field: config.price_field,
        }
    }
}

/// Computes one volatility value per bar.
///
/// Warm-up values are back-filled with the first estimate so every bar
/// carries a finite value.
///
/// # Errors
/// - [`IndicatorError::ParamOutOfRange`] when `window <= 1`.
/// - [`IndicatorError::InsufficientData`] when there are fewer bars than `window`.
/// - [`IndicatorError::ComputationError`] when no finite estimate exists.
pub fn volatility(bars: &[Bar], spec: &VolatilitySpec) -> Result<Vec<f64>, IndicatorError> {
    if spec.window <= 1 {
        #[allow(clippy::cast_precision_loss)]
        let value = spec.window as f64;
        return Err(IndicatorError::param_out_of_range(
            "volatility_window",
            value,
            2.0,
            f64::INFINITY,
        ));
    }
    if bars.len() < spec.window {
        return Err(IndicatorError::InsufficientData {
            required: spec.window,
            actual: bars.len(),
        });
    }

    let mut values = match spec.method {
        VolatilityMethod::Atr => ATR::new(spec.window).compute(bars),
        VolatilityMethod::StdDev => RollingStd::new(spec.window)
            .with_field(spec.price_field)
            .compute(bars),
    };

    let Some(first) = values.iter().copied().find(|v| v.is_finite()) else {
        return Err(IndicatorError::computation("no finite volatility estimate"));
    };
    for v in &mut values {
        if !v.is_finite() {
            *v = first;
        }
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bars(n: usize) -> Vec<Bar> {
        (0..n)
            .map(|i| {
                let c = 100.0 + i as f64;
                Bar::new(i as i64, c, c + 1.0, c - 1.0, c)
            })
            .collect()
    }

    #[test]
    fn test_atr_backfills_warmup() {
        let spec = VolatilitySpec {
            method: VolatilityMethod::Atr,
            window: 3,
            price_field: PriceField::Close,
        };
        let vol = volatility(&bars(6), &spec).unwrap();

        assert_eq!(vol.len(), 6);
        assert!(vol.iter().all(|v| v.is_finite()));
        assert!((vol[0] - vol[2]).abs() < 1e-12);
    }

    #[test]
    fn test_std_dev_uses_price_field() {
        let spec = VolatilitySpec {
            method: VolatilityMethod::StdDev,
            window: 3,
            price_field: PriceField::Close,
        };
        let vol = volatility(&bars(5), &spec).unwrap();
        // closes step by 1: sample std of three consecutive integers is 1
        assert!(vol.iter().all(|v| (v - 1.0).abs() < 1e-10));
    }

    #[test]
    fn test_insufficient_bars() {
        let spec = VolatilitySpec {
            method: VolatilityMethod::Atr,
            window: 14,
            price_field: PriceField::Close,
        };
        assert_eq!(
            volatility(&bars(5), &spec),
            Err(IndicatorError::InsufficientData {
                required: 14,
                actual: 5
            })
        );
    }

    #[test]
    fn test_rejects_window_one() {
        let spec = VolatilitySpec {
            method: VolatilityMethod::StdDev,
            window: 1,
            price_field: PriceField::Close,
        };
        assert!(volatility(&bars(5), &spec).unwrap_err().is_config());
    }
}
