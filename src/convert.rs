//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result};

use arxcast_ar::{ModelParameters, Observation, Predictor};

use crate::config::{DataToml, ModelToml};

/// Converts the `[model]` table into `ModelParameters`.
///
/// Validation happens when the predictor is built.
pub fn build_model_params(m: &ModelToml) -> ModelParameters {
    ModelParameters::new(m.autoregressive_lags, m.step_size)
        .with_external_input_lags(m.external_input_lags)
}

/// Converts `[value, input]` rows into observations.
pub fn build_observations(d: &DataToml) -> Vec<Observation> {
    d.observations.iter().copied().map(Observation::from).collect()
}

/// Builds a predictor from the `[model]` and `[data]` tables.
pub fn build_predictor(model: &ModelToml, data: &DataToml) -> Result<Predictor> {
    Predictor::new(build_observations(data), build_model_params(model))
        .context("invalid [model] settings")
}
