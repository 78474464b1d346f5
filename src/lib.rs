//! # Augur
//!
//! Umbrella crate for the augur workspace: neural price forecasting for
//! financial time series.
//!
//! The workspace is split into two member crates:
//!
//! - [`price_math`] — low-level price/volume math primitives (moving
//!   averages, volatility, momentum, relative volume)
//! - [`neural_forecast`] — the prediction engine: feature extraction,
//!   min-max scaling, a hand-rolled feedforward network, epoch-based
//!   training and autoregressive multi-step forecasting
//!
//! Most users should depend on `neural_forecast` directly; this crate simply
//! re-exports both members for convenience.

pub use neural_forecast;
pub use price_math;
