//! Error types for the arxcast-ar crate.

/// Error type for all fallible operations in the arxcast-ar crate.
///
/// A singular normal-equation matrix is deliberately absent from the
/// default failure paths: estimation still yields a best-effort coefficient
/// vector and flags the condition on the result. [`ArError::SingularMatrix`]
/// only appears when a caller opts into strict handling.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ArError {
    /// Returned when a model parameter is out of range.
    #[error("invalid parameter: {reason}")]
    InvalidParameter {
        /// Human-readable description of the violated constraint.
        reason: String,
    },

    /// Returned when the series is too short to form a single design row.
    #[error("insufficient data: got {n} observations, need at least {min}")]
    InsufficientData {
        /// Number of observations provided.
        n: usize,
        /// Minimum number of observations required (lag window + 1).
        min: usize,
    },

    /// Returned when the value and input columns have different lengths.
    #[error("value series has {values} samples but input series has {inputs}")]
    LengthMismatch {
        /// Length of the value column.
        values: usize,
        /// Length of the input column.
        inputs: usize,
    },

    /// Returned when the design matrix has more rows than the target series.
    #[error("design matrix is {rows}x{cols} but only {values} target values were supplied")]
    DimensionMismatch {
        /// Design matrix rows.
        rows: usize,
        /// Design matrix columns.
        cols: usize,
        /// Length of the value series.
        values: usize,
    },

    /// Returned when the regression inputs contain NaN or infinity.
    #[error("regression inputs contain non-finite values")]
    NonFiniteData,

    /// Returned when strict handling rejects a singular normal-equation matrix.
    #[error("normal-equation matrix is singular ({cols}x{cols})")]
    SingularMatrix {
        /// Dimension of the square normal-equation matrix.
        cols: usize,
    },
}
