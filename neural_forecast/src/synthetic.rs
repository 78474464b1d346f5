//! Synthetic price series generation
//!
//! Deterministic series for examples and tests: a pure linear trend, and a
//! linear trend with seeded Gaussian noise. Both carry a simple volume
//! pattern so the volume indicator has something to work with.

use crate::data::PricePoint;
use crate::error::{ForecastError, Result};
use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

/// Floor keeping generated prices valid for the engine.
const MIN_SYNTHETIC_PRICE: f64 = 0.01;

/// Daily series following `base + slope * i`, starting at `start_date`.
pub fn linear_series(start_date: NaiveDate, len: usize, base: f64, slope: f64) -> Vec<PricePoint> {
    (0..len)
        .map(|i| {
            let price = (base + slope * i as f64).max(MIN_SYNTHETIC_PRICE);
            PricePoint::new(start_date + Duration::days(i as i64), price)
                .with_volume(1_000.0 + 25.0 * (i % 7) as f64)
        })
        .collect()
}

/// Daily linear series with seeded Gaussian noise on every price.
pub fn noisy_series(
    start_date: NaiveDate,
    len: usize,
    base: f64,
    slope: f64,
    noise_std: f64,
    seed: u64,
) -> Result<Vec<PricePoint>> {
    let noise = Normal::new(0.0, noise_std)
        .map_err(|err| ForecastError::InvalidParameter(format!("Invalid noise level: {}", err)))?;
    let mut rng = StdRng::seed_from_u64(seed);

    Ok((0..len)
        .map(|i| {
            let price = (base + slope * i as f64 + noise.sample(&mut rng)).max(MIN_SYNTHETIC_PRICE);
            PricePoint::new(start_date + Duration::days(i as i64), price)
                .with_volume(1_000.0 + 25.0 * (i % 7) as f64)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 6, 1).unwrap()
    }

    #[test]
    fn test_linear_series_shape() {
        let series = linear_series(start(), 5, 100.0, 2.0);

        assert_eq!(series.len(), 5);
        assert_eq!(series[0].price, 100.0);
        assert_eq!(series[4].price, 108.0);
        assert_eq!(series[1].date, start() + Duration::days(1));
    }

    #[test]
    fn test_noisy_series_is_reproducible() {
        let a = noisy_series(start(), 10, 100.0, 1.0, 0.5, 42).unwrap();
        let b = noisy_series(start(), 10, 100.0, 1.0, 0.5, 42).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_noisy_series_rejects_negative_noise() {
        assert!(noisy_series(start(), 10, 100.0, 1.0, -0.5, 42).is_err());
    }

    #[test]
    fn test_prices_stay_positive() {
        let series = linear_series(start(), 10, 1.0, -5.0);

        assert!(series.iter().all(|point| point.price > 0.0));
    }
}
