//! Min-max price scaling
//!
//! Maps a price series onto the unit interval and back. The scaler records
//! the min/max it was fitted with so a trained model can denormalize network
//! outputs long after the fit.

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};

/// Min-max scaler for a price series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceScaler {
    min: f64,
    max: f64,
}

impl PriceScaler {
    /// Fit a scaler to a series, recording its min and max.
    pub fn fit(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(ForecastError::InsufficientData(
                "Cannot fit a scaler to an empty series".to_string(),
            ));
        }

        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        Ok(Self { min, max })
    }

    /// Map a value into `[0, 1]`.
    ///
    /// A degenerate flat series (`max == min`) maps every value to exactly
    /// `0.5`.
    pub fn normalize(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.5;
        }
        (value - self.min) / range
    }

    /// Normalize a whole series.
    pub fn normalize_all(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|&value| self.normalize(value)).collect()
    }

    /// Map a normalized value back to the original scale.
    pub fn denormalize(&self, value: f64) -> f64 {
        value * (self.max - self.min) + self.min
    }

    /// The minimum the scaler was fitted with.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// The maximum the scaler was fitted with.
    pub fn max(&self) -> f64 {
        self.max
    }
}
