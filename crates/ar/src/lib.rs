//! # arxcast-ar
//!
//! Autoregressive model with an exogenous input (ARX), fitted by least
//! squares and rolled forward recursively to forecast past the history.
//!
//! ## Workflow
//!
//! ```mermaid
//! graph LR
//!     A["Predictor::new(data, params)?"] -->|".forecast(h)?"| B["Forecast"]
//!     B --> C[".points() — (input, value) pairs"]
//!     B --> D[".predicted() — extrapolated tail"]
//!     B --> E[".theta() — fitted coefficients"]
//!     B --> F[".conditioning() — singular or not"]
//! ```
//!
//! Inside `forecast` the pipeline runs in order:
//!
//! 1. [`extend_axis`] — append `h` inputs spaced by the step size.
//! 2. [`DesignMatrix::build`] — lagged regressors, one row per usable step.
//! 3. [`estimate_coefficients`] — normal equations, SVD fallback if singular.
//! 4. [`recursive_forecast`] — feed predictions back in as lagged values.
//!
//! ## Mathematical Glossary
//!
//! | Symbol | Accessor | Meaning |
//! |--------|----------|---------|
//! | na | [`ModelParameters::autoregressive_lags()`] | past values per regression row |
//! | nb | [`ModelParameters::external_input_lags()`] | past inputs per row (plus the current one) |
//! | m | [`ModelParameters::lag_window()`] | `max(na, nb)`, first estimable index |
//! | phi | [`DesignMatrix`] | lagged regressor matrix |
//! | theta | [`Forecast::theta()`] | least-squares coefficients |

mod axis;
mod design;
mod error;
mod estimate;
mod forecast;
mod observation;
mod params;
mod predictor;
mod recursion;

pub use axis::extend_axis;
pub use design::DesignMatrix;
pub use error::ArError;
pub use estimate::{Conditioning, Estimate, estimate_coefficients};
pub use forecast::{Forecast, ForecastPoint};
pub use observation::Observation;
pub use params::ModelParameters;
pub use predictor::Predictor;
pub use recursion::recursive_forecast;
