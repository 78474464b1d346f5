//! Trailing moving-average calculations
//!
//! A trailing SMA is the mean of the `period` values ending at a given
//! index. Near the start of a series, where a full window does not exist
//! yet, the value at the index is returned unchanged so that ratios against
//! the average stay centered at 1.0 instead of distorting the series head.

use crate::{check_index, check_period, Result};

/// Simple moving average of the `period` values ending at `index`.
///
/// Falls back to `values[index]` itself while fewer than `period` values
/// exist up to and including `index`.
pub fn trailing_sma(values: &[f64], index: usize, period: usize) -> Result<f64> {
    check_period(period, "Period")?;
    check_index(index, values.len())?;

    if index + 1 < period {
        return Ok(values[index]);
    }

    let window = &values[index + 1 - period..=index];
    Ok(window.iter().sum::<f64>() / period as f64)
}
