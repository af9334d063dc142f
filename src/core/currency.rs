//! Currency conversion primitives and the rate provider abstraction.
//!
//! Every monetary figure in a result row passes through [`round_money`]
//! before display; non-money scalars (payback months, ROI fractions) use
//! [`round_ratio`] with higher precision so the presentation layer can
//! format them without accumulated rounding loss.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Source of exchange rates, e.g. a remote rates API.
///
/// The rate is expressed as: target = source * rate. Implementations must
/// only return positive rates; [`to_source`] divides by the rate.
#[async_trait]
pub trait CurrencyRateProvider: Send + Sync {
    async fn get_rate(&self, from: &str, to: &str) -> Result<RateQuote>;
}

/// A fetched rate together with the provider's publication timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct RateQuote {
    pub rate: f64,
    pub last_updated: Option<DateTime<Utc>>,
}

/// Converts a source-currency amount into the target currency.
pub fn to_target(source: f64, rate: f64) -> f64 {
    source * rate
}

/// Converts a target-currency amount back into the source currency.
///
/// Precondition: `rate > 0`. A zero rate yields a non-finite result; the
/// rate-acquisition boundary guarantees positivity before calculation.
pub fn to_source(target: f64, rate: f64) -> f64 {
    target / rate
}

/// Rounds a currency amount to 2 decimal places.
pub fn round_money(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Rounds a non-money scalar to `places` decimal places.
pub fn round_ratio(x: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (x * factor).round() / factor
}

/// Normalizes raw numeric input: non-finite values become 0.
///
/// Keeps NaN/Infinity out of the arithmetic so a partially filled scenario
/// still produces displayable rows.
pub fn sanitize(x: f64) -> f64 {
    if x.is_finite() { x } else { 0.0 }
}
