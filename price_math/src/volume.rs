//! Volume calculations
//!
//! Relative volume compares the volume at an index against the average of a
//! recent trailing window.

use crate::{check_index, check_period, Result};

/// Volume at `index` divided by the average of the last `window` volumes
/// ending at `index`, using all available values when fewer than `window`
/// exist.
///
/// Returns `1.0` when the volume at `index` is zero or negative (missing
/// volume data), and `1.0` when the trailing average is zero.
pub fn relative_volume(volumes: &[f64], index: usize, window: usize) -> Result<f64> {
    check_period(window, "Window")?;
    check_index(index, volumes.len())?;

    let current = volumes[index];
    if current <= 0.0 {
        return Ok(1.0);
    }

    let start = (index + 1).saturating_sub(window);
    let recent = &volumes[start..=index];
    let average = recent.iter().sum::<f64>() / recent.len() as f64;

    if average == 0.0 {
        return Ok(1.0);
    }

    Ok(current / average)
}
