//! Model parameters for the ARX predictor.

use crate::error::ArError;

/// Lag orders and sampling step of an ARX model.
///
/// `na` past values and `nb + 1` input samples (`input[t]` through
/// `input[t - nb]`) enter each regression row. The step size is only used to
/// extrapolate the input axis past the end of the history.
///
/// Parameters are checked once by [`ModelParameters::validate()`], which
/// [`Predictor::new()`](crate::Predictor::new) calls at construction.
///
/// # Example
///
/// ```
/// use arxcast_ar::ModelParameters;
///
/// let params = ModelParameters::new(3, 25.0).with_external_input_lags(2);
/// assert_eq!(params.lag_window(), 3);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelParameters {
    autoregressive_lags: usize,
    external_input_lags: usize,
    step_size: f64,
}

impl ModelParameters {
    /// Creates parameters with `na` autoregressive lags and the given step.
    ///
    /// The external input lag order defaults to 0 (only `input[t]` is used).
    pub fn new(autoregressive_lags: usize, step_size: f64) -> Self {
        Self {
            autoregressive_lags,
            external_input_lags: 0,
            step_size,
        }
    }

    /// Sets the autoregressive lag order (`na`).
    pub fn with_autoregressive_lags(mut self, na: usize) -> Self {
        self.autoregressive_lags = na;
        self
    }

    /// Sets the external input lag order (`nb`).
    pub fn with_external_input_lags(mut self, nb: usize) -> Self {
        self.external_input_lags = nb;
        self
    }

    /// Sets the input-axis step size.
    pub fn with_step_size(mut self, step_size: f64) -> Self {
        self.step_size = step_size;
        self
    }

    /// Returns the autoregressive lag order (`na`).
    pub fn autoregressive_lags(&self) -> usize {
        self.autoregressive_lags
    }

    /// Returns the external input lag order (`nb`).
    pub fn external_input_lags(&self) -> usize {
        self.external_input_lags
    }

    /// Returns the input-axis step size.
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Returns the lag window `m = max(na, nb)`.
    pub fn lag_window(&self) -> usize {
        self.autoregressive_lags.max(self.external_input_lags)
    }

    /// Validates these parameters.
    ///
    /// Fails when `na` is zero or the step size is not a finite positive
    /// number. A negative `nb` cannot be expressed.
    pub fn validate(&self) -> Result<(), ArError> {
        if self.autoregressive_lags == 0 {
            return Err(ArError::InvalidParameter {
                reason: format!(
                    "autoregressive lags must be positive, got {}",
                    self.autoregressive_lags
                ),
            });
        }
        if !self.step_size.is_finite() || self.step_size <= 0.0 {
            return Err(ArError::InvalidParameter {
                reason: format!(
                    "step size must be finite and positive, got {}",
                    self.step_size
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let params = ModelParameters::new(2, 1.0);
        assert_eq!(params.autoregressive_lags(), 2);
        assert_eq!(params.external_input_lags(), 0);
        assert!((params.step_size() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn builder_chaining() {
        let params = ModelParameters::new(1, 1.0)
            .with_autoregressive_lags(3)
            .with_external_input_lags(5)
            .with_step_size(25.0);
        assert_eq!(params.autoregressive_lags(), 3);
        assert_eq!(params.external_input_lags(), 5);
        assert!((params.step_size() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn lag_window_is_max_of_orders() {
        assert_eq!(ModelParameters::new(2, 1.0).lag_window(), 2);
        assert_eq!(
            ModelParameters::new(2, 1.0)
                .with_external_input_lags(4)
                .lag_window(),
            4
        );
        assert_eq!(
            ModelParameters::new(3, 1.0)
                .with_external_input_lags(3)
                .lag_window(),
            3
        );
    }

    #[test]
    fn validate_ok() {
        assert!(ModelParameters::new(1, 0.5).validate().is_ok());
        assert!(
            ModelParameters::new(4, 10.0)
                .with_external_input_lags(0)
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn validate_zero_autoregressive_lags() {
        let err = ModelParameters::new(0, 1.0).validate().unwrap_err();
        assert!(matches!(err, ArError::InvalidParameter { .. }));
    }

    #[test]
    fn validate_bad_step_size() {
        for step in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = ModelParameters::new(1, step).validate().unwrap_err();
            assert!(
                matches!(err, ArError::InvalidParameter { .. }),
                "step {step} should be rejected"
            );
        }
    }
}
