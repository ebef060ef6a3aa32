//! Forecast results.

use crate::error::ArError;
use crate::estimate::{Conditioning, Estimate};

/// One point of a forecast: an input-axis position and its value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForecastPoint {
    /// Input-axis position (historical or extrapolated).
    pub input: f64,
    /// Historical seed or recursive prediction at that position.
    pub value: f64,
}

/// Output of [`Predictor::forecast()`](crate::Predictor::forecast).
///
/// Holds `history_len + horizon` points. Positions `0..=lag_window` restate
/// the observed values. Every later position is produced by the recursion,
/// including positions `lag_window + 1..history_len` that lie inside the
/// history: there the observed values are replaced by the model's free-run
/// reconstruction, so `values()[i]` differs from the `i`-th observation
/// unless the fit is exact.
///
/// The coefficient estimate travels with the forecast so that callers can
/// decide whether a [`Conditioning::Singular`] fit is acceptable.
#[derive(Clone, Debug)]
pub struct Forecast {
    inputs: Vec<f64>,
    values: Vec<f64>,
    history_len: usize,
    lag_window: usize,
    estimate: Estimate,
}

impl Forecast {
    pub(crate) fn new(
        inputs: Vec<f64>,
        values: Vec<f64>,
        history_len: usize,
        lag_window: usize,
        estimate: Estimate,
    ) -> Self {
        debug_assert_eq!(inputs.len(), values.len());
        Self {
            inputs,
            values,
            history_len,
            lag_window,
            estimate,
        }
    }

    /// Total number of points (`history_len + horizon`).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the forecast has no points.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Extended input axis.
    pub fn inputs(&self) -> &[f64] {
        &self.inputs
    }

    /// Seeded and predicted values, aligned with [`Forecast::inputs()`].
    ///
    /// Only the first `lag_window + 1` entries are observations. Entries
    /// after the lag window are recursive predictions, even where they
    /// overlap the history.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterates over all `(input, value)` points in order.
    pub fn points(&self) -> impl Iterator<Item = ForecastPoint> + '_ {
        self.inputs
            .iter()
            .zip(&self.values)
            .map(|(&input, &value)| ForecastPoint { input, value })
    }

    /// Iterates over the extrapolated points past the end of the history.
    pub fn predicted(&self) -> impl Iterator<Item = ForecastPoint> + '_ {
        self.points().skip(self.history_len)
    }

    /// Number of historical observations the forecast was built from.
    pub fn history_len(&self) -> usize {
        self.history_len
    }

    /// Number of extrapolated points.
    pub fn horizon(&self) -> usize {
        self.len() - self.history_len
    }

    /// Lag window `m`; positions `0..=m` are historical seeds.
    pub fn lag_window(&self) -> usize {
        self.lag_window
    }

    /// Fitted coefficients.
    pub fn theta(&self) -> &[f64] {
        self.estimate.theta()
    }

    /// The full coefficient estimate.
    pub fn estimate(&self) -> &Estimate {
        &self.estimate
    }

    /// Conditioning of the normal equations behind this forecast.
    pub fn conditioning(&self) -> Conditioning {
        self.estimate.conditioning()
    }

    /// Returns `true` if the coefficients came from a singular system.
    pub fn is_singular(&self) -> bool {
        self.estimate.is_singular()
    }

    /// Consumes the forecast, rejecting one built on a singular system.
    pub fn into_strict(self) -> Result<Self, ArError> {
        if self.is_singular() {
            return Err(ArError::SingularMatrix {
                cols: self.theta().len(),
            });
        }
        Ok(self)
    }

    /// Consumes the forecast into `(input, value)` pairs.
    pub fn into_pairs(self) -> Vec<(f64, f64)> {
        self.inputs.into_iter().zip(self.values).collect()
    }
}
