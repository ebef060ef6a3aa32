//! Forecast command: fit the configured series and print the forecast.

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use crate::cli::ForecastArgs;
use crate::config::ArxcastConfig;
use crate::convert;

/// Run the forecast pipeline.
pub fn run(args: ForecastArgs) -> Result<()> {
    let _cmd = info_span!("forecast").entered();

    // 1. Load project TOML
    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let config: ArxcastConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;

    // 2. Build predictor; CLI flags override the file
    let predictor = convert::build_predictor(&config.model, &config.data)?;
    let horizon = args.horizon.unwrap_or(config.horizon);
    let strict = args.strict || config.strict;
    info!(
        n_obs = predictor.len(),
        horizon,
        strict,
        "series loaded"
    );

    // 3. Fit and forecast
    let mut forecast = predictor.forecast(horizon).context("forecast failed")?;
    if strict {
        forecast = forecast
            .into_strict()
            .context("rerun without --strict to accept a singular fit")?;
    } else if forecast.is_singular() {
        warn!("coefficients estimated from a singular system");
    }
    info!(theta = ?forecast.theta(), rss = forecast.estimate().rss(), "model fitted");

    // 4. Write `input,value` lines
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for p in forecast.points() {
        writeln!(out, "{},{}", p.input, p.value).context("failed to write forecast")?;
    }
    out.flush().context("failed to write forecast")?;

    Ok(())
}
