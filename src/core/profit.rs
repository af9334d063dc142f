//! Profit breakdown: monthly net, payback timeline and 3-year ROI.

use crate::core::config::ProfitInputs;
use crate::core::currency::{round_money, round_ratio, sanitize, to_source, to_target};
use crate::core::report::{CalculationRow, CellValue, ProfitResult, RowTag};

/// Decimal places kept on the payback month count.
const TIMELINE_PLACES: u32 = 9;
/// Decimal places kept on the raw ROI fractions.
const ROI_PLACES: u32 = 6;

/// Computes the monthly and multi-year profit breakdown.
///
/// `total_investment` is the target-currency total from
/// [`compute_investment`](crate::core::investment::compute_investment).
/// Never fails: degenerate figures produce negative rows or N/A sentinels.
pub fn compute_profit(
    inputs: &ProfitInputs,
    rate: f64,
    total_investment: f64,
) -> ProfitResult {
    let gross_source = sanitize(inputs.monthly_gross_usd);
    let expenses_source = sanitize(inputs.monthly_expenses_usd);
    let gross = to_target(gross_source, rate);
    let expenses = to_target(expenses_source, rate);
    let net = gross - expenses;

    let mut rows = Vec::with_capacity(10);
    rows.push(CalculationRow {
        tag: RowTag::GrossRevenue,
        label: "Est. Monthly Gross Revenue",
        target: CellValue::Money(round_money(gross)),
        source: Some(round_money(gross_source)),
    });
    rows.push(CalculationRow {
        tag: RowTag::Expenses,
        label: "Est. Expenses",
        target: CellValue::Money(round_money(expenses)),
        source: Some(round_money(expenses_source)),
    });
    rows.push(CalculationRow {
        tag: RowTag::NetProfit,
        label: "Est. Monthly Net Profits",
        target: CellValue::Money(round_money(net)),
        source: Some(round_money(to_source(net, rate))),
    });

    // A non-positive net never pays the investment back.
    let payback = if net > 0.0 {
        CellValue::Ratio(round_ratio(total_investment / net, TIMELINE_PLACES))
    } else {
        CellValue::NotApplicable
    };
    rows.push(CalculationRow {
        tag: RowTag::PaybackMonths,
        label: "Est. ROI Timeline (months)",
        target: payback,
        source: None,
    });

    // Year 2 and 3 build on year 1 so the investment is subtracted once.
    let year1 = net * 12.0 - total_investment;
    let year2 = net * 24.0 + year1;
    let year3 = net * 36.0 + year1;

    let year_labels: [(u8, &'static str, f64); 3] = [
        (1, "Est. Total Profits Year 1", year1),
        (2, "Est. Total Profits Year 2", year2),
        (3, "Est. Total Profits Year 3", year3),
    ];
    for (year, label, amount) in year_labels {
        rows.push(CalculationRow {
            tag: RowTag::ProfitYear(year),
            label,
            target: CellValue::Money(round_money(amount)),
            source: Some(round_money(to_source(amount, rate))),
        });
    }

    let roi_labels: [(u8, &'static str, f64); 3] = [
        (1, "Est. ROI % (Year 1)", year1),
        (2, "Est. ROI % (Year 2)", year2),
        (3, "Est. ROI % (Year 3)", year3),
    ];
    for (year, label, amount) in roi_labels {
        let roi = if total_investment != 0.0 {
            CellValue::Ratio(round_ratio(amount / total_investment, ROI_PLACES))
        } else {
            CellValue::NotApplicable
        };
        rows.push(CalculationRow {
            tag: RowTag::RoiYear(year),
            label,
            target: roi,
            source: None,
        });
    }

    ProfitResult { rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_inputs() -> ProfitInputs {
        ProfitInputs {
            monthly_gross_usd: 5000.0,
            monthly_expenses_usd: 2000.0,
        }
    }

    #[test]
    fn test_sample_scenario() {
        let result = compute_profit(&sample_inputs(), 1.35, 13400.0);

        assert_eq!(
            result.row(RowTag::GrossRevenue).unwrap().target,
            CellValue::Money(6750.0)
        );
        assert_eq!(
            result.row(RowTag::Expenses).unwrap().target,
            CellValue::Money(2700.0)
        );
        assert_eq!(
            result.row(RowTag::NetProfit).unwrap().target,
            CellValue::Money(4050.0)
        );
        assert_eq!(
            result.row(RowTag::PaybackMonths).unwrap().target,
            CellValue::Ratio(3.308641975)
        );
        assert_eq!(
            result.row(RowTag::ProfitYear(1)).unwrap().target,
            CellValue::Money(35200.0)
        );
        assert_eq!(
            result.row(RowTag::ProfitYear(2)).unwrap().target,
            CellValue::Money(132400.0)
        );
        assert_eq!(
            result.row(RowTag::ProfitYear(3)).unwrap().target,
            CellValue::Money(181000.0)
        );
        assert_eq!(
            result.row(RowTag::RoiYear(1)).unwrap().target,
            CellValue::Ratio(2.626866)
        );
    }

    #[test]
    fn test_row_order() {
        let result = compute_profit(&sample_inputs(), 1.35, 13400.0);
        let tags: Vec<RowTag> = result.rows.iter().map(|r| r.tag).collect();
        assert_eq!(
            tags,
            vec![
                RowTag::GrossRevenue,
                RowTag::Expenses,
                RowTag::NetProfit,
                RowTag::PaybackMonths,
                RowTag::ProfitYear(1),
                RowTag::ProfitYear(2),
                RowTag::ProfitYear(3),
                RowTag::RoiYear(1),
                RowTag::RoiYear(2),
                RowTag::RoiYear(3),
            ]
        );
    }

    #[test]
    fn test_payback_sentinel_on_non_positive_net() {
        let inputs = ProfitInputs {
            monthly_gross_usd: 2000.0,
            monthly_expenses_usd: 2500.0,
        };
        let result = compute_profit(&inputs, 1.35, 13400.0);
        let payback = result.row(RowTag::PaybackMonths).unwrap();
        assert_eq!(payback.target, CellValue::NotApplicable);
        assert_eq!(payback.source, None);

        // Year rows stay numeric, just negative.
        let year1 = result.row(RowTag::ProfitYear(1)).unwrap();
        assert!(year1.target.as_f64().unwrap() < 0.0);
    }

    #[test]
    fn test_roi_sentinel_on_zero_investment() {
        let result = compute_profit(&sample_inputs(), 1.35, 0.0);
        for year in 1..=3 {
            let roi = result.row(RowTag::RoiYear(year)).unwrap();
            assert_eq!(roi.target, CellValue::NotApplicable);
            assert_eq!(roi.source, None);
        }
    }

    #[test]
    fn test_year_formula_matches_closed_form() {
        let result = compute_profit(&sample_inputs(), 1.35, 13400.0);
        let net = 4050.0;
        for year in 1..=3u8 {
            let closed_form = net * 12.0 * f64::from(year) - 13400.0;
            let row = result.row(RowTag::ProfitYear(year)).unwrap();
            assert!((row.target.as_f64().unwrap() - closed_form).abs() < 0.01);
        }
    }

    #[test]
    fn test_idempotence() {
        let inputs = sample_inputs();
        let a = compute_profit(&inputs, 1.35, 13400.0);
        let b = compute_profit(&inputs, 1.35, 13400.0);
        assert_eq!(a, b);
    }
}
