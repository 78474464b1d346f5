//! Momentum calculations
//!
//! Rate of change of a series over a fixed lag, expressed as a fraction of
//! the earlier value.

use crate::{check_index, check_period, Result};

/// Rate of change at `index` over `lag` steps:
/// `(values[index] - values[index - lag]) / values[index - lag]`.
///
/// Returns `0.0` while fewer than `lag` earlier values exist, and `0.0`
/// when the reference value is zero.
pub fn rate_of_change(values: &[f64], index: usize, lag: usize) -> Result<f64> {
    check_period(lag, "Lag")?;
    check_index(index, values.len())?;

    if index < lag {
        return Ok(0.0);
    }

    let reference = values[index - lag];
    if reference == 0.0 {
        return Ok(0.0);
    }

    Ok((values[index] - reference) / reference)
}
