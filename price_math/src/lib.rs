//! # Price Math
//!
//! Mathematical primitives for price series analysis. This crate provides
//! the windowed calculations that feature engineering is built from:
//! trailing moving averages, volatility, momentum and relative volume.
//!
//! All functions operate on plain `&[f64]` slices and evaluate at a single
//! index, so callers can sweep a whole history without building intermediate
//! indicator state.

use thiserror::Error;

// Indicator modules
pub mod momentum;
pub mod moving_averages;
pub mod volatility;
pub mod volume;

/// Errors that can occur in price-math calculations
#[derive(Error, Debug)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for price-math operations
pub type Result<T> = std::result::Result<T, MathError>;

/// Validate an `(index, len)` pair shared by the windowed functions.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(MathError::InsufficientData(format!(
            "Index {} out of range for series of length {}",
            index, len
        )));
    }
    Ok(())
}

/// Validate a window/period/lag parameter shared by the windowed functions.
pub(crate) fn check_period(period: usize, name: &str) -> Result<()> {
    if period == 0 {
        return Err(MathError::InvalidInput(format!(
            "{} must be greater than zero",
            name
        )));
    }
    Ok(())
}
