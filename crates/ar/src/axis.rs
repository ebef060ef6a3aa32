//! Input-axis extrapolation for the forecast horizon.

/// Returns `inputs` followed by `horizon` linearly extrapolated samples.
///
/// Sample `k` (1-based) past the end is `inputs[last] + k * step`. A zero
/// horizon yields a copy of `inputs`; an empty `inputs` has no last sample to
/// project from, so only the copy is returned.
pub fn extend_axis(inputs: &[f64], horizon: usize, step: f64) -> Vec<f64> {
    let mut axis = Vec::with_capacity(inputs.len() + horizon);
    axis.extend_from_slice(inputs);

    let Some(&last) = inputs.last() else {
        return axis;
    };
    axis.extend((1..=horizon).map(|k| last + k as f64 * step));
    axis
}
