//! Least-squares coefficient estimation via the normal equations.
//!
//! ```text
//! theta = (phiᵀ·phi)⁻¹ · phiᵀ · y_tail
//! ```
//!
//! `y_tail` is the last `rows` values of the series, aligned with the design
//! rows that start at the lag window. The singular values of `phi` decide
//! whether the normal equations are usable: when `phi` is numerically rank
//! deficient or `phiᵀ·phi` is too ill-conditioned to invert, the estimate
//! falls back to the minimum-norm SVD solution of `phi·theta = y_tail` and is
//! flagged [`Conditioning::Singular`] instead of failing.

use nalgebra::{DMatrix, DVector, Dyn, SVD};
use tracing::{debug, warn};

use crate::design::DesignMatrix;
use crate::error::ArError;

/// Largest condition number of `phiᵀ·phi` accepted for direct inversion.
const MAX_NORMAL_CONDITION: f64 = 1e16;

/// Whether the normal-equation matrix could be inverted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Conditioning {
    /// `phiᵀ·phi` was inverted directly.
    WellPosed,
    /// `phiᵀ·phi` is singular or ill-conditioned; theta is the best-effort
    /// SVD solution.
    Singular,
}

/// Estimated coefficient vector with its conditioning flag.
#[derive(Clone, Debug)]
pub struct Estimate {
    theta: Vec<f64>,
    conditioning: Conditioning,
    condition_number: f64,
    rss: f64,
}

impl Estimate {
    pub(crate) fn new(
        theta: Vec<f64>,
        conditioning: Conditioning,
        condition_number: f64,
        rss: f64,
    ) -> Self {
        Self {
            theta,
            conditioning,
            condition_number,
            rss,
        }
    }

    /// Coefficients: `na` value weights followed by `nb + 1` input weights.
    pub fn theta(&self) -> &[f64] {
        &self.theta
    }

    /// Conditioning of the normal equations.
    pub fn conditioning(&self) -> Conditioning {
        self.conditioning
    }

    /// Returns `true` if the normal-equation matrix was singular.
    pub fn is_singular(&self) -> bool {
        self.conditioning == Conditioning::Singular
    }

    /// Condition number of `phiᵀ·phi`, `(σ_max / σ_min)²` over the singular
    /// values of `phi`. Infinite when `phi` has a zero singular value.
    pub fn condition_number(&self) -> f64 {
        self.condition_number
    }

    /// In-sample residual sum of squares, `‖y_tail - phi·theta‖²`.
    pub fn rss(&self) -> f64 {
        self.rss
    }

    /// Consumes the estimate, rejecting a singular one.
    pub fn into_strict(self) -> Result<Self, ArError> {
        match self.conditioning {
            Conditioning::WellPosed => Ok(self),
            Conditioning::Singular => Err(ArError::SingularMatrix {
                cols: self.theta.len(),
            }),
        }
    }
}

/// Solves the normal equations for `phi` against the tail of `values`.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`ArError::DimensionMismatch`] | `values.len() < phi.rows()` |
/// | [`ArError::NonFiniteData`] | NaN or infinity in `phi` or the target tail |
pub fn estimate_coefficients(phi: &DesignMatrix, values: &[f64]) -> Result<Estimate, ArError> {
    let (rows, cols) = (phi.rows(), phi.cols());
    if values.len() < rows {
        return Err(ArError::DimensionMismatch {
            rows,
            cols,
            values: values.len(),
        });
    }

    let y_tail = &values[values.len() - rows..];
    if !phi.as_array().iter().chain(y_tail).all(|v| v.is_finite()) {
        return Err(ArError::NonFiniteData);
    }

    let x = DMatrix::from_row_iterator(rows, cols, phi.as_array().iter().copied());
    let y = DVector::from_column_slice(y_tail);
    let svd = x.clone().svd(true, true);

    let sigma_max = svd.singular_values.max();
    let sigma_min = if rows < cols {
        0.0
    } else {
        svd.singular_values.min()
    };
    let tol = sigma_max * f64::EPSILON * rows.max(cols) as f64;
    let rank = svd.rank(tol);
    let condition_number = if sigma_min > 0.0 {
        (sigma_max / sigma_min).powi(2)
    } else {
        f64::INFINITY
    };

    let direct = if rank == cols && condition_number <= MAX_NORMAL_CONDITION {
        let xt = x.transpose();
        (&xt * &x).try_inverse().map(|inv| inv * (&xt * &y))
    } else {
        None
    };

    let (theta, conditioning) = match direct {
        Some(theta) => (theta, Conditioning::WellPosed),
        None => {
            warn!(
                rows,
                cols,
                rank,
                condition_number,
                "normal-equation matrix is singular, using SVD solution"
            );
            // Drop every direction that pushed the condition number past the cap.
            let solve_tol = tol.max(sigma_max / MAX_NORMAL_CONDITION.sqrt());
            (min_norm_solution(&svd, &y, solve_tol, cols), Conditioning::Singular)
        }
    };

    let rss = (&y - &x * &theta).norm_squared();
    debug!(
        rows,
        cols,
        rss,
        condition_number,
        ?conditioning,
        "estimated coefficients"
    );

    Ok(Estimate::new(
        theta.iter().copied().collect(),
        conditioning,
        condition_number,
        rss,
    ))
}

/// Minimum-norm least-squares solution, discarding singular values below
/// `tol`.
fn min_norm_solution(
    svd: &SVD<f64, Dyn, Dyn>,
    y: &DVector<f64>,
    tol: f64,
    cols: usize,
) -> DVector<f64> {
    // solve() only fails when U or V were not computed.
    svd.solve(y, tol).unwrap_or_else(|_| DVector::zeros(cols))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn phi_from(values: &[f64], inputs: &[f64], na: usize, nb: usize) -> DesignMatrix {
        DesignMatrix::build(values, inputs, na, nb).unwrap().unwrap()
    }

    #[test]
    fn square_system_reproduces_targets() {
        // na = 1, nb = 0: rows t = 1..3, two columns, N - m = 2 rows.
        let y = [1.0, 3.0, 2.0];
        let p = [0.5, 2.0, 7.0];
        let phi = phi_from(&y, &p, 1, 0);
        assert_eq!((phi.rows(), phi.cols()), (2, 2));

        let est = estimate_coefficients(&phi, &y).unwrap();
        assert_eq!(est.conditioning(), Conditioning::WellPosed);

        for i in 0..phi.rows() {
            let fitted: f64 = phi
                .row(i)
                .iter()
                .zip(est.theta())
                .map(|(a, b)| a * b)
                .sum();
            assert_abs_diff_eq!(fitted, y[i + 1], epsilon = 1e-9);
        }
        assert_abs_diff_eq!(est.rss(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn recovers_exact_linear_relation() {
        // y[t] = 0.5 * y[t-1] + 2 * p[t], generated without noise.
        let p: Vec<f64> = (0..20).map(|t| (t as f64 * 0.7).sin() + 1.5).collect();
        let mut y = vec![1.0; 20];
        for t in 1..20 {
            y[t] = 0.5 * y[t - 1] + 2.0 * p[t];
        }
        let phi = phi_from(&y, &p, 1, 0);
        let est = estimate_coefficients(&phi, &y).unwrap();

        // Value columns hold -y, so the fitted weight is -0.5.
        assert_abs_diff_eq!(est.theta()[0], -0.5, epsilon = 1e-8);
        assert_abs_diff_eq!(est.theta()[1], 2.0, epsilon = 1e-8);
        assert!(!est.is_singular());
    }

    #[test]
    fn singular_matrix_still_returns_theta() {
        // All inputs zero: the input column of phi vanishes.
        let y = [1.0, 2.0, 4.0, 8.0, 16.0];
        let p = [0.0; 5];
        let phi = phi_from(&y, &p, 1, 0);
        let est = estimate_coefficients(&phi, &y).unwrap();

        assert_eq!(est.conditioning(), Conditioning::Singular);
        assert_eq!(est.theta().len(), 2);
        assert!(est.theta().iter().all(|v| v.is_finite()));
        // Minimum-norm solution leaves the unidentified weight at zero.
        assert_abs_diff_eq!(est.theta()[1], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(est.theta()[0], -2.0, epsilon = 1e-9);
    }

    #[test]
    fn collinear_columns_are_singular_despite_rounding() {
        // Constant values with an evenly spaced input axis: p[t-1] equals
        // p[t] - 0.3, a combination of the constant -y column and p[t].
        // Rounding keeps phiᵀ·phi from being exactly singular.
        let y = vec![1578.0077; 40];
        let p: Vec<f64> = (0..40).map(|t| 0.1 + 0.3 * t as f64).collect();
        let phi = phi_from(&y, &p, 1, 1);
        let est = estimate_coefficients(&phi, &y).unwrap();

        assert_eq!(est.conditioning(), Conditioning::Singular);
        assert!(est.condition_number() > MAX_NORMAL_CONDITION);
        assert!(est.theta().iter().all(|v| v.is_finite()));
        assert_abs_diff_eq!(est.rss(), 0.0, epsilon = 1e-6);
        // Dominant weight carries the constant; the input weights cancel.
        assert_abs_diff_eq!(est.theta()[0], -1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(est.theta()[1], -est.theta()[2], epsilon = 1e-9);
    }

    #[test]
    fn well_posed_condition_number_is_finite() {
        let y = [1.0, 3.0, 2.0];
        let p = [0.5, 2.0, 7.0];
        let phi = phi_from(&y, &p, 1, 0);
        let est = estimate_coefficients(&phi, &y).unwrap();
        assert!(est.condition_number().is_finite());
        assert!(est.condition_number() >= 1.0);
    }

    #[test]
    fn zero_column_has_infinite_condition() {
        let y = [1.0, 2.0, 4.0, 8.0];
        let phi = phi_from(&y, &[0.0; 4], 1, 0);
        let est = estimate_coefficients(&phi, &y).unwrap();
        assert!(est.condition_number().is_infinite());
    }

    #[test]
    fn strict_rejects_singular() {
        let y = [1.0, 2.0, 4.0, 8.0];
        let p = [0.0; 4];
        let phi = phi_from(&y, &p, 1, 0);
        let err = estimate_coefficients(&phi, &y)
            .unwrap()
            .into_strict()
            .unwrap_err();
        assert!(matches!(err, ArError::SingularMatrix { cols: 2 }));
    }

    #[test]
    fn strict_passes_well_posed() {
        let y = [1.0, 3.0, 2.0];
        let p = [0.5, 2.0, 7.0];
        let phi = phi_from(&y, &p, 1, 0);
        assert!(estimate_coefficients(&phi, &y).unwrap().into_strict().is_ok());
    }

    #[test]
    fn too_few_values() {
        let y = [1.0, 3.0, 2.0, 5.0];
        let phi = phi_from(&y, &y, 1, 0);
        let err = estimate_coefficients(&phi, &y[..2]).unwrap_err();
        assert!(matches!(
            err,
            ArError::DimensionMismatch {
                rows: 3,
                cols: 2,
                values: 2
            }
        ));
    }

    #[test]
    fn non_finite_inputs_are_fatal() {
        let y = [1.0, f64::NAN, 2.0, 5.0];
        let p = [1.0, 2.0, 3.0, 4.0];
        let phi = phi_from(&y, &p, 1, 0);
        let err = estimate_coefficients(&phi, &y).unwrap_err();
        assert!(matches!(err, ArError::NonFiniteData));
    }
}
