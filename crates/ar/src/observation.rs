//! Historical observations.

/// One sample of the historical series: the modelled value together with
/// its auxiliary input (commonly a timestamp or exogenous regressor).
///
/// Order within a series is positional; lags never consult the input to
/// decide which sample precedes which.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Observation {
    /// Modelled value (`y`).
    pub value: f64,
    /// Auxiliary input (`p`).
    pub input: f64,
}

impl Observation {
    /// Creates an observation from a value and its input.
    pub fn new(value: f64, input: f64) -> Self {
        Self { value, input }
    }
}

impl From<(f64, f64)> for Observation {
    /// Interprets the pair as `(value, input)`.
    fn from((value, input): (f64, f64)) -> Self {
        Self { value, input }
    }
}

impl From<[f64; 2]> for Observation {
    /// Interprets the row as `[value, input]`.
    fn from([value, input]: [f64; 2]) -> Self {
        Self { value, input }
    }
}

/// Splits observations into separate value and input columns.
pub(crate) fn split_columns(observations: &[Observation]) -> (Vec<f64>, Vec<f64>) {
    observations.iter().map(|o| (o.value, o.input)).unzip()
}
