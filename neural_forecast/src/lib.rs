//! # Neural Forecast
//!
//! A Rust library for price series forecasting with a small, hand-rolled
//! feedforward neural network — no external ML framework.
//!
//! ## Features
//!
//! - Technical-indicator feature extraction (moving-average ratios,
//!   volatility, momentum, relative volume)
//! - Min-max price normalization with exact round-tripping
//! - A configurable fully-connected network with manual forward and
//!   backward propagation, trained by online SGD
//! - Autoregressive multi-step forecasting with a bounded confidence score
//! - Explicit seeding for reproducible training runs
//! - Cooperative cancellation checked once per training epoch
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use neural_forecast::synthetic;
//! use neural_forecast::{NeuralPredictor, TrainingConfig};
//!
//! # fn main() -> neural_forecast::Result<()> {
//! let start = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
//! let history = synthetic::linear_series(start, 30, 100.0, 1.0);
//!
//! let config = TrainingConfig {
//!     max_epochs: 200,
//!     seed: Some(7),
//!     ..TrainingConfig::default()
//! };
//! let predictor = NeuralPredictor::new(config)?;
//!
//! let model = predictor.train(&history)?;
//! let result = model.forecast(&history, 5)?;
//!
//! assert_eq!(result.future_prices.len(), 5);
//! assert_eq!(result.future_dates.len(), 5);
//! assert!(result.confidence >= 0.3 && result.confidence <= 0.95);
//! # Ok(())
//! # }
//! ```
//!
//! The engine is stateless between calls: [`NeuralPredictor::train`]
//! returns an immutable [`Model`], and [`Model::forecast`] derives a fresh
//! [`PredictionResult`] from it each time. Training is CPU-heavy for large
//! epoch budgets; hosts should run it on a dedicated worker and may pass a
//! [`CancelToken`] to stop it between epochs.

pub mod data;
pub mod error;
pub mod features;
pub mod forecast;
pub mod network;
pub mod scaling;
pub mod synthetic;
pub mod training;

// Re-export commonly used types
pub use crate::data::{CsvPriceSource, PricePoint, PriceSource};
pub use crate::error::{ForecastError, Result};
pub use crate::forecast::{PredictionResult, MIN_FORECAST_PRICE};
pub use crate::network::{Activation, NeuralNetwork};
pub use crate::scaling::PriceScaler;
pub use crate::training::{CancelToken, Model, NeuralPredictor, TrainingConfig};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
