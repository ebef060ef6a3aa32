use serde::Deserialize;

/// Top-level arxcast configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArxcastConfig {
    /// Number of steps to forecast past the history.
    #[serde(default = "default_horizon")]
    pub horizon: usize,

    /// Reject forecasts built on a singular normal-equation matrix.
    #[serde(default)]
    pub strict: bool,

    /// Model settings.
    pub model: ModelToml,

    /// Historical series.
    pub data: DataToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelToml {
    pub autoregressive_lags: usize,
    #[serde(default)]
    pub external_input_lags: usize,
    pub step_size: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataToml {
    /// Rows of `[value, input]`.
    pub observations: Vec<[f64; 2]>,
}

fn default_horizon() -> usize {
    10
}
