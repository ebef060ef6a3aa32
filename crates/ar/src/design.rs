//! Lagged regression ("phi") matrix construction.
//!
//! Row `i` corresponds to series index `t = i + m` and holds
//!
//! ```text
//! [ -y[t-1], ..., -y[t-na], p[t], p[t-1], ..., p[t-nb] ]
//! ```
//!
//! so that `phi[i] · theta` estimates `y[t]`. There is no separate intercept
//! column; `p[t]` plays that role.

use ndarray::{Array2, ArrayView1};
use tracing::debug;

use crate::error::ArError;

/// Dense `(N - m) x (na + nb + 1)` design matrix.
///
/// Built fresh for every forecast and never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct DesignMatrix {
    phi: Array2<f64>,
    lag_window: usize,
}

impl DesignMatrix {
    /// Builds the design matrix with lag window `m = max(na, nb)`.
    ///
    /// Returns `Ok(None)` when the series has `N <= m` samples, which leaves
    /// no row to estimate from. Turning that into a failure is the caller's
    /// decision.
    ///
    /// # Errors
    ///
    /// [`ArError::LengthMismatch`] if `values` and `inputs` differ in length.
    pub fn build(
        values: &[f64],
        inputs: &[f64],
        na: usize,
        nb: usize,
    ) -> Result<Option<Self>, ArError> {
        Self::with_window(values, inputs, na, nb, na.max(nb))
    }

    /// Builds the design matrix starting at an explicit lag window.
    ///
    /// Lag terms that would reach before the start of the series are filled
    /// with zero rather than dropping the row. With `window >= max(na, nb)`
    /// every term is in range; a smaller window pads the earliest rows.
    pub fn with_window(
        values: &[f64],
        inputs: &[f64],
        na: usize,
        nb: usize,
        window: usize,
    ) -> Result<Option<Self>, ArError> {
        if values.len() != inputs.len() {
            return Err(ArError::LengthMismatch {
                values: values.len(),
                inputs: inputs.len(),
            });
        }

        let n = values.len();
        if n <= window {
            debug!(n, window, "series too short for a design row");
            return Ok(None);
        }

        let rows = n - window;
        let cols = na + nb + 1;
        let phi = Array2::from_shape_fn((rows, cols), |(i, c)| {
            let t = i + window;
            if c < na {
                let j = c + 1;
                t.checked_sub(j).map_or(0.0, |k| -values[k])
            } else {
                let j = c - na;
                t.checked_sub(j).map_or(0.0, |k| inputs[k])
            }
        });

        debug!(rows, cols, window, "built design matrix");
        Ok(Some(Self {
            phi,
            lag_window: window,
        }))
    }

    /// Number of rows (estimable time steps).
    pub fn rows(&self) -> usize {
        self.phi.nrows()
    }

    /// Number of columns (`na + nb + 1`).
    pub fn cols(&self) -> usize {
        self.phi.ncols()
    }

    /// Series index of the first row.
    pub fn lag_window(&self) -> usize {
        self.lag_window
    }

    /// Returns row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.rows()`.
    pub fn row(&self, i: usize) -> ArrayView1<'_, f64> {
        self.phi.row(i)
    }

    /// Borrows the underlying matrix.
    pub fn as_array(&self) -> &Array2<f64> {
        &self.phi
    }
}
