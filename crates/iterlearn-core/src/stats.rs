//! Residualization and population statistics.
//!
//! The permutation tests score covariance between residualized distance
//! vectors and standardize against the population (not sample) standard
//! deviation of the null distribution, so these helpers divide by `n`
//! rather than `n - 1`.

/// Arithmetic mean. Returns 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance (divides by `n`).
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64
}

/// Population standard deviation.
pub fn population_std(values: &[f64]) -> f64 {
    population_variance(values).sqrt()
}

/// Subtract the arithmetic mean from every element.
///
/// The residualized vector sums to (numerically) zero.
pub fn residualize(values: &[f64]) -> Vec<f64> {
    let m = mean(values);
    values.iter().map(|v| v - m).collect()
}
