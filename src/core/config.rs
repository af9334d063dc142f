use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

use crate::core::package::PackageKind;

/// Launch cost estimates. All amounts are in the source currency (USD)
/// except `fee_cad`, which is entered in the target currency.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct CostInputs {
    pub furniture_usd: f64,
    pub rent_usd: f64,
    /// When true the stored deposit field is ignored and the security
    /// deposit equals one month of rent.
    pub deposit_same_as_rent: bool,
    pub security_deposit_usd: f64,
    pub llc_ein_usd: f64,
    pub utility_deposit_usd: f64,
    pub stocking_usd: f64,
    pub smart_lock_usd: f64,
    pub permits_usd: f64,
    pub photos_usd: f64,
    pub fee_cad: f64,
}

impl Default for CostInputs {
    fn default() -> Self {
        CostInputs {
            furniture_usd: 0.0,
            rent_usd: 0.0,
            deposit_same_as_rent: true,
            security_deposit_usd: 0.0,
            llc_ein_usd: 0.0,
            utility_deposit_usd: 0.0,
            stocking_usd: 0.0,
            smart_lock_usd: 0.0,
            permits_usd: 0.0,
            photos_usd: 0.0,
            fee_cad: 0.0,
        }
    }
}

/// Monthly revenue and expense estimates, source currency.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ProfitInputs {
    pub monthly_gross_usd: f64,
    pub monthly_expenses_usd: f64,
}

/// One estimation scenario: a package plus its cost and profit figures.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Scenario {
    pub package: PackageKind,
    #[serde(default)]
    pub costs: CostInputs,
    /// When omitted, monthly figures are derived from rent via the
    /// package profile.
    pub profit: Option<ProfitInputs>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExchangeRateProviderConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub exchange_rate: Option<ExchangeRateProviderConfig>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            exchange_rate: Some(ExchangeRateProviderConfig {
                base_url: "https://open.er-api.com".to_string(),
            }),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub scenario: Scenario,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "strlaunch", "strcalc")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}
