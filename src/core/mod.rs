//! Core calculation logic: pure, synchronous and side-effect free.

pub mod config;
pub mod currency;
pub mod investment;
pub mod log;
pub mod package;
pub mod profit;
pub mod report;

// Re-export main types for cleaner imports
pub use currency::{CurrencyRateProvider, RateQuote};
pub use package::{PackageKind, Section};
pub use report::{CalculationRow, CellValue, InvestmentResult, ProfitResult, RowTag};
