use anyhow::{Result, bail};

const VAR_DECIMALS: i32 = 6;

/// Compute the arithmetic mean of the values in `data`.
///
/// Values are summed in slice order and the sum is divided by the
/// number of values.
///
/// # Errors
/// Returns an error if `data` is empty.
pub fn average(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        bail!("List must contain at least one value");
    }
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Compute the population variance of the values in `data`.
///
/// The variance is the sum of squared differences between the values
/// and their mean, divided by the number of values. This is the
/// population variance (divide by `n`), not the sample variance
/// (divide by `n - 1`).
///
/// The result is rounded to 6 decimal places to mask floating-point
/// summation noise; ties round to even. This rounding is part of the
/// contract, so a single value yields exactly `0.0` and two true
/// variances closer than `5e-7` compare equal.
///
/// # Errors
/// Returns an error if `data` is empty.
pub fn variance(data: &[f64]) -> Result<f64> {
    let n_vals = data.len();
    if n_vals == 0 {
        bail!("List must contain at least one value");
    }

    let mean = average(data)?;
    let diff_2_sum: f64 = data.iter().map(|&val| (val - mean).powi(2)).sum();

    Ok(round_decimals(diff_2_sum / n_vals as f64, VAR_DECIMALS))
}

/// Compute the standard deviation of the values in `data`.
///
/// The non-negative square root of [`variance`], taken of the rounded
/// variance. The root itself is not rounded again.
///
/// # Errors
/// Returns an error if `data` is empty.
pub fn std_dev(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        bail!("List must contain at least one value");
    }
    Ok(variance(data)?.sqrt())
}

fn round_decimals(val: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (val * scale).round_ties_even() / scale
}
