//! The `estimate` command: load a scenario, acquire a rate and print the
//! investment and profit breakdowns.

use anyhow::Result;
use chrono::{DateTime, Utc};
use comfy_table::Cell;
use tracing::{debug, warn};

use crate::cli::ui;
use crate::core::config::{AppConfig, ProfitInputs};
use crate::core::currency::CurrencyRateProvider;
use crate::core::investment::compute_investment;
use crate::core::package::{Section, derive_monthly_estimates};
use crate::core::profit::compute_profit;
use crate::core::report::{CalculationRow, CellValue, RowTag};
use crate::providers::open_er::OpenErApiProvider;

pub const SOURCE_CURRENCY: &str = "USD";
pub const TARGET_CURRENCY: &str = "CAD";

/// Rate used when the remote fetch fails.
pub const FALLBACK_RATE: f64 = 1.35;

const DEFAULT_RATE_API_URL: &str = "https://open.er-api.com";

/// The session's exchange rate and its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRate {
    pub rate: f64,
    pub live: bool,
    pub last_updated: Option<DateTime<Utc>>,
}

/// Fetches the rate once, falling back to [`FALLBACK_RATE`] on failure.
///
/// The returned rate is always positive: live rates are validated by the
/// provider and the fallback constant is positive.
pub async fn acquire_rate(provider: &dyn CurrencyRateProvider) -> SessionRate {
    let spinner = ui::new_spinner("Fetching exchange rate...");
    let fetched = provider.get_rate(SOURCE_CURRENCY, TARGET_CURRENCY).await;
    spinner.finish_and_clear();

    match fetched {
        Ok(quote) => SessionRate {
            rate: quote.rate,
            live: true,
            last_updated: quote.last_updated,
        },
        Err(err) => {
            warn!("Failed to fetch exchange rate: {err}. Using fixed rate {FALLBACK_RATE}");
            SessionRate {
                rate: FALLBACK_RATE,
                live: false,
                last_updated: None,
            }
        }
    }
}

pub(crate) fn rate_provider(config: &AppConfig) -> OpenErApiProvider {
    let base_url = config
        .providers
        .exchange_rate
        .as_ref()
        .map_or(DEFAULT_RATE_API_URL, |p| p.base_url.as_str());
    OpenErApiProvider::new(base_url)
}

pub(crate) fn rate_banner(session: &SessionRate) -> String {
    let provenance = if session.live {
        match session.last_updated {
            Some(updated) => format!("live, updated {}", updated.format("%Y-%m-%d %H:%M UTC")),
            None => "live".to_string(),
        }
    } else {
        "fixed fallback".to_string()
    };
    format!(
        "Rate {SOURCE_CURRENCY}\u{2192}{TARGET_CURRENCY}: {} ({})",
        session.rate,
        ui::style_text(&provenance, ui::StyleType::Subtle)
    )
}

fn target_cell(row: &CalculationRow) -> Cell {
    match (row.target, row.tag) {
        (CellValue::Money(v), RowTag::DayOne | RowTag::TotalRequired) => ui::total_money_cell(v),
        (CellValue::Money(v), _) => ui::money_cell(v),
        (CellValue::Ratio(v), RowTag::RoiYear(_)) => ui::percent_cell(v),
        (CellValue::Ratio(v), _) => ui::months_cell(v),
        (CellValue::NotApplicable, _) => ui::na_cell(),
    }
}

fn source_cell(row: &CalculationRow) -> Cell {
    row.source.map_or_else(ui::na_cell, ui::money_cell)
}

fn render_section(title: &str, rows: &[CalculationRow]) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Description"),
        ui::header_cell(&format!("{TARGET_CURRENCY} Amount")),
        ui::header_cell(&format!("{SOURCE_CURRENCY} Amount")),
    ]);

    for row in rows {
        table.add_row(vec![Cell::new(row.label), target_cell(row), source_cell(row)]);
    }

    format!(
        "{}\n\n{}",
        ui::style_text(title, ui::StyleType::Title),
        table
    )
}

pub async fn run(config_path: Option<&str>) -> Result<()> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let provider = rate_provider(&config);
    let session = acquire_rate(&provider).await;

    let scenario = &config.scenario;
    let profit_inputs = match &scenario.profit {
        Some(inputs) => inputs.clone(),
        None => {
            let estimates = derive_monthly_estimates(scenario.package, scenario.costs.rent_usd);
            ProfitInputs {
                monthly_gross_usd: estimates.gross_revenue,
                monthly_expenses_usd: estimates.expenses,
            }
        }
    };

    let investment = compute_investment(scenario.package, &scenario.costs, session.rate);
    let profit = compute_profit(&profit_inputs, session.rate, investment.total_target);

    println!("{}\n", rate_banner(&session));
    println!(
        "{}",
        render_section(
            scenario.package.section_title(Section::Investment),
            &investment.rows
        )
    );
    ui::print_separator();
    println!(
        "{}",
        render_section(scenario.package.section_title(Section::Profit), &profit.rows)
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::package::PackageKind;

    struct FailingProvider;

    #[async_trait::async_trait]
    impl CurrencyRateProvider for FailingProvider {
        async fn get_rate(&self, _from: &str, _to: &str) -> Result<crate::core::RateQuote> {
            anyhow::bail!("connection refused")
        }
    }

    #[tokio::test]
    async fn test_acquire_rate_falls_back_on_error() {
        let session = acquire_rate(&FailingProvider).await;
        assert_eq!(session.rate, FALLBACK_RATE);
        assert!(!session.live);
        assert!(session.last_updated.is_none());
    }

    #[test]
    fn test_rate_banner_marks_fallback() {
        let session = SessionRate {
            rate: FALLBACK_RATE,
            live: false,
            last_updated: None,
        };
        let banner = rate_banner(&session);
        assert!(banner.contains("1.35"));
        assert!(banner.contains("fixed fallback"));
    }

    #[test]
    fn test_render_section_contains_rows_and_total() {
        let inputs = crate::core::config::CostInputs {
            rent_usd: 2000.0,
            fee_cad: 8000.0,
            ..Default::default()
        };
        let result = compute_investment(PackageKind::Furnished, &inputs, 1.35);
        let rendered = render_section("FURNISHED PACKAGE (1BR/2BR/3BR) Investment", &result.rows);
        // Short labels render unwrapped regardless of terminal width.
        assert!(rendered.contains("Furniture Cost"));
        assert!(rendered.contains("Our Fee"));
        assert!(rendered.contains("2700.00"));
        assert!(rendered.contains("13400.00"));
    }

    #[test]
    fn test_na_rows_render_sentinel() {
        let inputs = ProfitInputs {
            monthly_gross_usd: 1000.0,
            monthly_expenses_usd: 2000.0,
        };
        let result = compute_profit(&inputs, 1.35, 0.0);
        let rendered = render_section("profits", &result.rows);
        assert!(rendered.contains("N/A"));
    }
}
