//! Exchange rate provider backed by the open.er-api.com latest-rates API.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::core::currency::{CurrencyRateProvider, RateQuote};

/// Retry attempts after the initial request fails at the transport level.
const RETRIES: usize = 2;
const RETRY_DELAY_MS: u64 = 500;

pub struct OpenErApiProvider {
    base_url: String,
}

impl OpenErApiProvider {
    pub fn new(base_url: &str) -> Self {
        OpenErApiProvider {
            base_url: base_url.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    result: String,
    time_last_update_utc: Option<String>,
    rates: HashMap<String, f64>,
}

#[async_trait]
impl CurrencyRateProvider for OpenErApiProvider {
    #[instrument(
        name = "OpenErRateFetch",
        skip(self),
        fields(from = %from, to = %to)
    )]
    async fn get_rate(&self, from: &str, to: &str) -> Result<RateQuote> {
        let url = format!("{}/v6/latest/{}", self.base_url, from);
        debug!("Requesting exchange rates from {}", url);

        let client = reqwest::Client::builder()
            .user_agent("strcalc/0.1")
            .build()?;

        let mut attempt = 1;
        let response = loop {
            match client.get(&url).send().await {
                Ok(resp) => break resp,
                Err(err) => {
                    if attempt > RETRIES {
                        return Err(anyhow!("Request error: {} for URL: {}", err, url));
                    }
                    debug!("Attempt {}/{} failed: {}. Retrying...", attempt, RETRIES, err);
                    attempt += 1;
                    tokio::time::sleep(Duration::from_millis(RETRY_DELAY_MS)).await;
                }
            }
        };

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for currency pair: {}{}",
                response.status(),
                from,
                to
            ));
        }

        let text = response.text().await?;
        let data: LatestRatesResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse rates response for base {}: {}", from, e))?;

        if data.result != "success" {
            return Err(anyhow!(
                "Rate API returned result '{}' for base {}",
                data.result,
                from
            ));
        }

        let rate = *data
            .rates
            .get(to)
            .ok_or_else(|| anyhow!("No {} rate found in response for base {}", to, from))?;
        if rate <= 0.0 {
            return Err(anyhow!("Non-positive {}{} rate in response: {}", from, to, rate));
        }

        let last_updated = data
            .time_last_update_utc
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc2822(s).ok())
            .map(|dt| dt.with_timezone(&Utc));

        Ok(RateQuote { rate, last_updated })
    }
}
