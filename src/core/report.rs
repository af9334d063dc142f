//! Result row model shared by the investment and profit calculators.

/// A single cell value in a result row.
///
/// `Money` is already rounded to 2 decimals. `Ratio` carries a raw
/// fraction or month count at higher precision; the presentation layer
/// decides how to format it. `NotApplicable` renders as "N/A".
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue {
    Money(f64),
    Ratio(f64),
    NotApplicable,
}

impl CellValue {
    pub fn as_f64(self) -> Option<f64> {
        match self {
            CellValue::Money(v) | CellValue::Ratio(v) => Some(v),
            CellValue::NotApplicable => None,
        }
    }
}

/// Stable identifier for a result row.
///
/// Consumers group and style rows by tag; the display label is for humans
/// only and must never be substring-matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTag {
    Furniture,
    Rent,
    SecurityDeposit,
    LlcEin,
    UtilityDeposit,
    Stocking,
    SmartLock,
    Permits,
    Photos,
    Fee,
    DayOne,
    AdditionalRequired,
    TotalRequired,
    GrossRevenue,
    Expenses,
    NetProfit,
    PaybackMonths,
    ProfitYear(u8),
    RoiYear(u8),
}

/// One labeled line of a calculation result.
///
/// `target` is the target-currency amount (or a ratio / N/A). `source` is
/// the source-currency equivalent, absent for ratios and month counts.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRow {
    pub tag: RowTag,
    pub label: &'static str,
    pub target: CellValue,
    pub source: Option<f64>,
}

/// Itemized investment breakdown plus the total consumed by the profit
/// calculator. `total_target` is kept unrounded; rounding happens per row.
#[derive(Debug, Clone, PartialEq)]
pub struct InvestmentResult {
    pub rows: Vec<CalculationRow>,
    pub total_target: f64,
}

/// Monthly net, payback timeline and multi-year profit/ROI breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfitResult {
    pub rows: Vec<CalculationRow>,
}

impl InvestmentResult {
    pub fn row(&self, tag: RowTag) -> Option<&CalculationRow> {
        self.rows.iter().find(|r| r.tag == tag)
    }
}

impl ProfitResult {
    pub fn row(&self, tag: RowTag) -> Option<&CalculationRow> {
        self.rows.iter().find(|r| r.tag == tag)
    }
}
