//! The `rate` command: show the current exchange rate and its provenance.

use anyhow::Result;

use crate::cli::estimate::{self, SOURCE_CURRENCY, TARGET_CURRENCY};
use crate::core::config::AppConfig;

pub async fn run(config_path: Option<&str>) -> Result<()> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };

    let provider = estimate::rate_provider(&config);
    let session = estimate::acquire_rate(&provider).await;

    println!("1.00 {SOURCE_CURRENCY} = {} {TARGET_CURRENCY}", session.rate);
    println!("{}", estimate::rate_banner(&session));
    Ok(())
}
