//! Price series data handling
//!
//! The engine consumes a chronologically ascending `Vec<PricePoint>` owned
//! by the caller. Where the series comes from is deliberately outside the
//! engine: the [`PriceSource`] trait is the whole contract with the
//! market-data layer, and [`CsvPriceSource`] is an offline implementation
//! for local files.

use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A single observation in a price history.
///
/// `price` is the closing price and must be positive and finite; the
/// remaining fields are optional market detail. The sequence a caller hands
/// to the engine must be ascending by date, with no required uniform
/// spacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Observation date
    pub date: NaiveDate,
    /// Closing price
    pub price: f64,
    /// Opening price, if known
    pub open: Option<f64>,
    /// Session high, if known
    pub high: Option<f64>,
    /// Session low, if known
    pub low: Option<f64>,
    /// Traded volume, if known
    pub volume: Option<f64>,
}

impl PricePoint {
    /// Create a price point carrying only a date and a closing price.
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self {
            date,
            price,
            open: None,
            high: None,
            low: None,
            volume: None,
        }
    }

    /// Attach a traded volume to the point.
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }
}

/// Reject any history containing a non-positive or non-finite price.
///
/// Invalid prices would corrupt min-max normalization, so they are refused
/// before reaching the network.
pub fn validate_history(history: &[PricePoint]) -> Result<()> {
    for (index, point) in history.iter().enumerate() {
        if !point.price.is_finite() || point.price <= 0.0 {
            return Err(ForecastError::InvalidHistory(format!(
                "Price at index {} ({}) must be positive and finite",
                index, point.price
            )));
        }
    }
    Ok(())
}

/// Extract the closing prices of a history.
pub fn prices(history: &[PricePoint]) -> Vec<f64> {
    history.iter().map(|point| point.price).collect()
}

/// Extract the volumes of a history, treating missing volume as zero.
pub fn volumes(history: &[PricePoint]) -> Vec<f64> {
    history
        .iter()
        .map(|point| point.volume.unwrap_or(0.0))
        .collect()
}

/// Contract with the market-data layer.
///
/// Implementations own their transport, caching and quota behavior; the
/// engine only sees the ordered series they return. Returned series must be
/// ascending by date and pre-filtered to valid prices.
pub trait PriceSource {
    /// Fetch the price history for a symbol, chronologically ascending.
    fn fetch_price_series(&self, symbol: &str) -> Result<Vec<PricePoint>>;
}

/// Row shape accepted by [`CsvPriceSource`].
#[derive(Debug, Deserialize)]
struct CsvRow {
    date: NaiveDate,
    close: f64,
    open: Option<f64>,
    high: Option<f64>,
    low: Option<f64>,
    volume: Option<f64>,
}

/// Offline [`PriceSource`] reading `<SYMBOL>.csv` files from a directory.
///
/// Expected header: `date,close,open,high,low,volume` with the optional
/// columns allowed to be empty. Rows with non-positive or non-finite close
/// prices are skipped, and the result is sorted ascending by date.
#[derive(Debug, Clone)]
pub struct CsvPriceSource {
    directory: PathBuf,
}

impl CsvPriceSource {
    /// Create a source rooted at a directory of per-symbol CSV files.
    pub fn new<P: AsRef<Path>>(directory: P) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }
}

impl PriceSource for CsvPriceSource {
    fn fetch_price_series(&self, symbol: &str) -> Result<Vec<PricePoint>> {
        let path = self.directory.join(format!("{}.csv", symbol));
        let mut reader = csv::Reader::from_path(&path)?;

        let mut series = Vec::new();
        for row in reader.deserialize() {
            let row: CsvRow = row?;
            if !row.close.is_finite() || row.close <= 0.0 {
                continue;
            }
            series.push(PricePoint {
                date: row.date,
                price: row.close,
                open: row.open,
                high: row.high,
                low: row.low,
                volume: row.volume,
            });
        }

        if series.is_empty() {
            return Err(ForecastError::Data(format!(
                "No valid data points in {}",
                path.display()
            )));
        }

        series.sort_by_key(|point| point.date);
        Ok(series)
    }
}
