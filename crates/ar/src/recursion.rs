//! Recursive multi-step forecasting.
//!
//! The output buffer is seeded with the historical values and then filled
//! left to right from index `m + 1`:
//!
//! ```text
//! y[i] = Σ_{j=1..na} -theta[j-1]·y[i-j]  +  Σ_{j=0..nb} theta[na+j]·p[i-j]
//! ```
//!
//! Each `y[i-j]` on the right is whatever the buffer holds at that point, so
//! once `i > m` the autoregressive terms consume earlier predictions rather
//! than observed values. Index `m` itself keeps its historical seed.

/// Runs the recursion over the extended input `axis`.
///
/// `values` seeds the first `min(axis.len(), values.len())` positions.
/// `theta` must hold `na + nb + 1` coefficients. Non-finite results from an
/// ill-conditioned `theta` are propagated unchanged.
///
/// # Panics
///
/// Panics if `theta.len() < na + nb + 1`.
pub fn recursive_forecast(
    values: &[f64],
    axis: &[f64],
    theta: &[f64],
    lag_window: usize,
    na: usize,
    nb: usize,
) -> Vec<f64> {
    assert!(
        theta.len() > na + nb,
        "recursive_forecast: theta has {} coefficients, need {}",
        theta.len(),
        na + nb + 1
    );

    let len = axis.len();
    let mut y = vec![0.0; len];
    let seeded = len.min(values.len());
    y[..seeded].copy_from_slice(&values[..seeded]);

    for i in (lag_window + 1)..len {
        let mut sum = 0.0;
        for j in 1..=na.min(i) {
            sum -= theta[j - 1] * y[i - j];
        }
        for j in 0..=nb.min(i) {
            sum += theta[na + j] * axis[i - j];
        }
        y[i] = sum;
    }

    y
}
