//! Fit-and-forecast orchestration.

use tracing::{debug, info};

use crate::axis::extend_axis;
use crate::design::DesignMatrix;
use crate::error::ArError;
use crate::estimate::estimate_coefficients;
use crate::forecast::Forecast;
use crate::observation::{Observation, split_columns};
use crate::params::ModelParameters;
use crate::recursion::recursive_forecast;

/// An ARX predictor over a fixed historical series.
///
/// Parameters are validated once, here. Each call to
/// [`Predictor::forecast()`] re-runs the whole pipeline (axis extension,
/// design matrix, estimation, recursion); nothing is cached between calls.
///
/// ```mermaid
/// graph LR
///     A["Predictor::new(data, params)?"] -->|".forecast(horizon)?"| B["Forecast"]
/// ```
#[derive(Clone, Debug)]
pub struct Predictor {
    values: Vec<f64>,
    inputs: Vec<f64>,
    params: ModelParameters,
}

impl Predictor {
    /// Creates a predictor over `observations`.
    ///
    /// # Errors
    ///
    /// [`ArError::InvalidParameter`] if `params` fails
    /// [`ModelParameters::validate()`]. The series itself is not checked
    /// until a forecast is requested.
    ///
    /// # Example
    ///
    /// ```
    /// use arxcast_ar::{ModelParameters, Observation, Predictor};
    ///
    /// let data: Vec<Observation> = (0..8)
    ///     .map(|t| Observation::new(1.0 + 0.5 * t as f64, t as f64))
    ///     .collect();
    /// let predictor = Predictor::new(data, ModelParameters::new(1, 1.0)).unwrap();
    /// let forecast = predictor.forecast(3).unwrap();
    /// assert_eq!(forecast.len(), 11);
    /// ```
    pub fn new(observations: Vec<Observation>, params: ModelParameters) -> Result<Self, ArError> {
        params.validate()?;
        let (values, inputs) = split_columns(&observations);
        Ok(Self {
            values,
            inputs,
            params,
        })
    }

    /// Creates a predictor from `(value, input)` pairs.
    pub fn from_pairs(pairs: &[(f64, f64)], params: ModelParameters) -> Result<Self, ArError> {
        Self::new(pairs.iter().copied().map(Observation::from).collect(), params)
    }

    /// Model parameters.
    pub fn params(&self) -> ModelParameters {
        self.params
    }

    /// Historical values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Historical inputs.
    pub fn inputs(&self) -> &[f64] {
        &self.inputs
    }

    /// Number of historical observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there are no historical observations.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Fits the model and forecasts `horizon` steps past the history.
    ///
    /// The result holds `len() + horizon` points. A singular normal-equation
    /// matrix does not fail the call; check [`Forecast::is_singular()`] or
    /// use [`Forecast::into_strict()`].
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ArError::InsufficientData`] | `len() <= max(na, nb)` |
    /// | [`ArError::NonFiniteData`] | NaN or infinity in the regression inputs |
    #[tracing::instrument(skip(self), fields(n = self.values.len()))]
    pub fn forecast(&self, horizon: usize) -> Result<Forecast, ArError> {
        let na = self.params.autoregressive_lags();
        let nb = self.params.external_input_lags();
        let m = self.params.lag_window();
        let n = self.values.len();

        let insufficient = || ArError::InsufficientData { n, min: m + 1 };
        if n <= m {
            return Err(insufficient());
        }

        let axis = extend_axis(&self.inputs, horizon, self.params.step_size());
        let phi =
            DesignMatrix::build(&self.values, &self.inputs, na, nb)?.ok_or_else(insufficient)?;
        let estimate = estimate_coefficients(&phi, &self.values)?;
        debug!(theta = ?estimate.theta(), "fitted coefficients");

        let values = recursive_forecast(&self.values, &axis, estimate.theta(), m, na, nb);
        info!(
            len = values.len(),
            singular = estimate.is_singular(),
            "forecast complete"
        );

        Ok(Forecast::new(axis, values, n, m, estimate))
    }
}
