//! Error types for the neural_forecast crate

use thiserror::Error;

/// Custom error types for the neural_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Too few usable price points for the requested operation
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// A price history containing non-positive or non-finite prices
    #[error("Invalid history: {0}")]
    InvalidHistory(String),

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Training was cancelled at an epoch boundary
    #[error("Training cancelled")]
    Cancelled,

    /// Error from price-math calculations
    #[error("Math error: {0}")]
    Math(#[from] price_math::MathError),

    /// Error related to data loading or validation
    #[error("Data error: {0}")]
    Data(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from CSV parsing
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error from JSON serialization
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
