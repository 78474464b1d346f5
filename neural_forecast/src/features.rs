//! Technical-indicator feature extraction
//!
//! Derives a fixed six-scalar feature vector at every index of a price
//! history:
//!
//! 1. price / SMA5
//! 2. price / SMA10
//! 3. price / SMA20
//! 4. relative volatility over the last 10 prices
//! 5. momentum over 5 steps
//! 6. volume relative to the 10-step average
//!
//! The ratios are centered near 1.0 and the remaining indicators near 0.0;
//! [`rescale_unit`] maps them into `[0, 1]` with a fixed, non-adaptive
//! transform before they reach the network.

use crate::data::{self, PricePoint};
use crate::error::Result;
use price_math::{momentum, moving_averages, volatility, volume};

/// Number of indicators in a feature vector.
pub const FEATURE_COUNT: usize = 6;

/// One six-scalar indicator set, in the order listed in the module docs.
pub type FeatureVector = [f64; FEATURE_COUNT];

const SMA_PERIODS: [usize; 3] = [5, 10, 20];
const VOLATILITY_WINDOW: usize = 10;
const MOMENTUM_LAG: usize = 5;
const VOLUME_WINDOW: usize = 10;

/// Compute the feature vector at every index of a history.
pub fn technical_indicators(history: &[PricePoint]) -> Result<Vec<FeatureVector>> {
    let prices = data::prices(history);
    let volumes = data::volumes(history);

    let mut indicators = Vec::with_capacity(prices.len());
    for index in 0..prices.len() {
        let mut features = [0.0; FEATURE_COUNT];

        for (slot, period) in SMA_PERIODS.iter().enumerate() {
            let sma = moving_averages::trailing_sma(&prices, index, *period)?;
            features[slot] = prices[index] / sma;
        }

        features[3] = volatility::trailing_volatility(&prices, index, VOLATILITY_WINDOW)?;
        features[4] = momentum::rate_of_change(&prices, index, MOMENTUM_LAG)?;
        features[5] = volume::relative_volume(&volumes, index, VOLUME_WINDOW)?;

        indicators.push(features);
    }

    Ok(indicators)
}

/// Map an indicator value into `[0, 1]` via `(v + 1) / 2`, saturating at the
/// bounds. Values far outside `[-1, 1]` clip rather than stretch the scale.
pub fn rescale_unit(value: f64) -> f64 {
    ((value + 1.0) / 2.0).clamp(0.0, 1.0)
}

/// Rescale a whole feature vector into `[0, 1]`.
pub fn rescale_features(features: &FeatureVector) -> FeatureVector {
    let mut rescaled = [0.0; FEATURE_COUNT];
    for (slot, value) in features.iter().enumerate() {
        rescaled[slot] = rescale_unit(*value);
    }
    rescaled
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn history(prices: &[f64]) -> Vec<PricePoint> {
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        prices
            .iter()
            .enumerate()
            .map(|(i, &price)| PricePoint::new(start + chrono::Duration::days(i as i64), price))
            .collect()
    }

    #[test]
    fn test_first_index_ratios_center_at_one() {
        let history = history(&[100.0, 101.0, 102.0]);
        let indicators = technical_indicators(&history).unwrap();

        // SMA falls back to the price itself at the series head
        assert_eq!(indicators[0][0], 1.0);
        assert_eq!(indicators[0][1], 1.0);
        assert_eq!(indicators[0][2], 1.0);
    }

    #[test]
    fn test_early_volatility_and_momentum_are_zero() {
        let history = history(&[100.0, 101.0, 102.0, 103.0]);
        let indicators = technical_indicators(&history).unwrap();

        // Volatility needs 10 points, momentum needs 5
        assert_eq!(indicators[3][3], 0.0);
        assert_eq!(indicators[3][4], 0.0);
    }

    #[test]
    fn test_momentum_positive_on_rising_series() {
        let prices: Vec<f64> = (0..12).map(|i| 100.0 + i as f64).collect();
        let indicators = technical_indicators(&history(&prices)).unwrap();

        // (105 - 100) / 100 = 0.05
        assert!((indicators[5][4] - 0.05).abs() < 1e-9);
        // A full 10-point window exists from index 9 on
        assert!(indicators[9][3] > 0.0);
    }

    #[test]
    fn test_missing_volume_defaults_to_one() {
        let history = history(&[100.0, 101.0]);
        let indicators = technical_indicators(&history).unwrap();

        assert_eq!(indicators[0][5], 1.0);
        assert_eq!(indicators[1][5], 1.0);
    }

    #[test]
    fn test_rescale_unit_saturates() {
        assert_eq!(rescale_unit(0.0), 0.5);
        assert_eq!(rescale_unit(1.0), 1.0);
        assert_eq!(rescale_unit(-1.0), 0.0);
        assert_eq!(rescale_unit(5.0), 1.0);
        assert_eq!(rescale_unit(-3.0), 0.0);
    }
}
