//! Autoregressive multi-step forecasting
//!
//! Walks a trained model forward over a horizon: each step feeds the
//! current window plus the indicator set frozen at the last real data point
//! into the network, denormalizes the output into a price, and pushes the
//! raw network output back onto the window for the next step. Every
//! subsequent step therefore consumes the network's own prior outputs, so
//! errors compound across the horizon.

use crate::data::{self, PricePoint};
use crate::error::{ForecastError, Result};
use crate::features;
use crate::scaling::PriceScaler;
use crate::training::Model;
use chrono::{Duration, NaiveDate};
use log::debug;
use price_math::volatility;
use serde::{Deserialize, Serialize};

/// Floor applied to every forecast price; the model never emits a
/// non-positive price.
pub const MIN_FORECAST_PRICE: f64 = 0.01;

/// Bounds of the confidence heuristic.
const CONFIDENCE_FLOOR: f64 = 0.3;
const CONFIDENCE_CEILING: f64 = 0.95;

/// Window used for the recent-volatility term of the confidence score.
const CONFIDENCE_VOLATILITY_WINDOW: usize = 10;

/// Result of one forecast call: the projected price path plus the training
/// metadata the projection was made with. Stateless and safe to discard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Last real price in the supplied history
    pub current_price: f64,
    /// First projected price (one step ahead)
    pub predicted_price: f64,
    /// Projected prices, one per horizon step
    pub future_prices: Vec<f64>,
    /// Calendar dates of the projected prices, one per horizon step
    pub future_dates: Vec<NaiveDate>,
    /// Heuristic confidence in `[0.3, 0.95]`, blending training fit and
    /// recent price dispersion; not a statistical interval
    pub confidence: f64,
    /// Mean squared error of the model's final training epoch
    pub training_error: f64,
    /// Number of training epochs actually run
    pub iterations: usize,
}

impl PredictionResult {
    /// Serialize the result to a JSON string for the presentation layer.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Model {
    /// Forecast `horizon_days` steps beyond the end of `history`.
    ///
    /// The history must contain at least `window_length` points. The
    /// indicator set is computed once at the last real index and reused for
    /// every step of the horizon; indicators do not evolve across synthetic
    /// predictions.
    pub fn forecast(&self, history: &[PricePoint], horizon_days: usize) -> Result<PredictionResult> {
        if horizon_days == 0 {
            return Err(ForecastError::InvalidParameter(
                "Horizon must be greater than zero".to_string(),
            ));
        }
        data::validate_history(history)?;
        if history.len() < self.window_length {
            return Err(ForecastError::InsufficientData(format!(
                "Need at least {} data points for prediction, have {}.",
                self.window_length,
                history.len()
            )));
        }

        let prices = data::prices(history);
        let last_point = history.last().unwrap();

        // Inputs are normalized against the supplied history; outputs are
        // denormalized through the scaler fitted at training time.
        let input_scaler = PriceScaler::fit(&prices)?;
        let mut window = input_scaler.normalize_all(&prices);

        let indicators = features::technical_indicators(history)?;
        let frozen_indicators = features::rescale_features(indicators.last().unwrap());

        debug!(
            "forecasting {} steps from {} points ending {}",
            horizon_days,
            history.len(),
            last_point.date
        );

        let mut future_prices = Vec::with_capacity(horizon_days);
        let mut future_dates = Vec::with_capacity(horizon_days);

        for step in 0..horizon_days {
            let mut input = window[window.len() - self.window_length..].to_vec();
            input.extend_from_slice(&frozen_indicators);

            let raw = self.network.forward(&input)[0];
            let price = self.scaler.denormalize(raw).max(MIN_FORECAST_PRICE);

            future_prices.push(price);
            future_dates.push(last_point.date + Duration::days(step as i64 + 1));

            // The raw normalized prediction feeds the next step
            window.push(raw);
        }

        let current_price = *prices.last().unwrap();
        let recent = &prices[prices.len().saturating_sub(CONFIDENCE_VOLATILITY_WINDOW)..];
        let recent_volatility = volatility::population_std_dev(recent);
        let confidence = (1.0 - (self.training_error * 10.0 + recent_volatility / current_price))
            .clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING);

        Ok(PredictionResult {
            current_price,
            predicted_price: future_prices[0],
            future_prices,
            future_dates,
            confidence,
            training_error: self.training_error,
            iterations: self.iterations,
        })
    }
}
