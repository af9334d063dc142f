//! strcalc: estimates the investment, profit and ROI of launching a
//! short-term rental under one of three packages, converting between USD
//! and CAD with a live exchange rate.

pub mod cli;
pub mod core;
pub mod providers;

use anyhow::Result;

/// Commands the application can execute against a loaded configuration.
pub enum AppCommand {
    Estimate,
    Rate,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    match command {
        AppCommand::Estimate => cli::estimate::run(config_path).await,
        AppCommand::Rate => cli::rate::run(config_path).await,
    }
}
