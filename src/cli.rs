use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// arxcast ARX forecaster.
#[derive(Parser)]
#[command(
    name = "arxcast",
    version,
    about = "Fit an ARX model and forecast recursively"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Fit the model to the configured series and print the forecast.
    Forecast(ForecastArgs),
}

/// Arguments for the `forecast` subcommand.
#[derive(clap::Args)]
pub struct ForecastArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "arxcast.toml")]
    pub config: PathBuf,

    /// Override forecast horizon from config.
    #[arg(long)]
    pub horizon: Option<usize>,

    /// Fail if the normal-equation matrix is singular.
    #[arg(long)]
    pub strict: bool,
}
