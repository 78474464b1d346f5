//! Volatility calculations
//!
//! Contains the population standard deviation and a trailing relative
//! volatility (standard deviation of a recent window divided by the value
//! at the evaluation index).

use crate::{check_index, check_period, Result};

/// Population standard deviation of a slice.
///
/// Returns `0.0` for slices with fewer than two values.
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|&value| {
            let diff = value - mean;
            diff * diff
        })
        .sum::<f64>()
        / n;

    variance.sqrt()
}

/// Standard deviation of the `window` values ending at `index`, divided by
/// the value at `index`.
///
/// Returns `0.0` until a full window exists, and `0.0` when the value at
/// `index` is zero.
pub fn trailing_volatility(values: &[f64], index: usize, window: usize) -> Result<f64> {
    check_period(window, "Window")?;
    check_index(index, values.len())?;

    if index + 1 < window {
        return Ok(0.0);
    }

    let current = values[index];
    if current == 0.0 {
        return Ok(0.0);
    }

    let recent = &values[index + 1 - window..=index];
    Ok(population_std_dev(recent) / current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_population_std_dev() {
        // sqrt(((10-20)^2 + (20-20)^2 + (30-20)^2) / 3) = sqrt(200/3)
        let expected = (200.0f64 / 3.0).sqrt();
        let actual = population_std_dev(&[10.0, 20.0, 30.0]);
        assert!((actual - expected).abs() < 1e-9);
    }

    #[test]
    fn test_population_std_dev_degenerate() {
        assert_eq!(population_std_dev(&[]), 0.0);
        assert_eq!(population_std_dev(&[5.0]), 0.0);
        assert_eq!(population_std_dev(&[5.0, 5.0, 5.0]), 0.0);
    }

    #[test]
    fn test_trailing_volatility_short_window() {
        let values = [100.0, 101.0, 102.0];

        // No full window yet
        assert_eq!(trailing_volatility(&values, 1, 3).unwrap(), 0.0);
    }

    #[test]
    fn test_trailing_volatility_full_window() {
        let values = [10.0, 20.0, 30.0];

        // sqrt(200/3) / 30
        let expected = (200.0f64 / 3.0).sqrt() / 30.0;
        let actual = trailing_volatility(&values, 2, 3).unwrap();
        assert!((actual - expected).abs() < 1e-9);
    }

    #[test]
    fn test_trailing_volatility_rejects_bad_input() {
        assert!(trailing_volatility(&[1.0], 0, 0).is_err());
        assert!(trailing_volatility(&[1.0], 1, 2).is_err());
    }
}
