//! Investment breakdown: itemized launch costs, the day-1 fee and the
//! total required investment.

use crate::core::config::CostInputs;
use crate::core::currency::{round_money, sanitize, to_source, to_target};
use crate::core::package::PackageKind;
use crate::core::report::{CalculationRow, CellValue, InvestmentResult, RowTag};

/// Computes the itemized investment breakdown for a scenario.
///
/// Cost items are entered in the source currency and converted; the fee is
/// entered in the target currency and excluded from the additional total.
/// Row order is fixed: itemized costs, fee, day-1 aggregate, additional
/// aggregate, total.
pub fn compute_investment(
    kind: PackageKind,
    inputs: &CostInputs,
    rate: f64,
) -> InvestmentResult {
    let rent = sanitize(inputs.rent_usd);
    let security = if inputs.deposit_same_as_rent {
        rent
    } else {
        sanitize(inputs.security_deposit_usd)
    };

    let mut items: Vec<(RowTag, &'static str, f64)> = vec![
        (RowTag::Furniture, "Furniture Cost", sanitize(inputs.furniture_usd)),
        (RowTag::Rent, "Est. 1 Month Rent", rent),
        (RowTag::SecurityDeposit, "Est. Security Deposit", security),
        (RowTag::LlcEin, "Est. LLC + EIN", sanitize(inputs.llc_ein_usd)),
        (
            RowTag::UtilityDeposit,
            "Est. Utility Deposit",
            sanitize(inputs.utility_deposit_usd),
        ),
    ];

    let furnishing = kind.profile().furnishing_items;
    if furnishing {
        items.push((
            RowTag::Stocking,
            "Est. Stocking Essentials",
            sanitize(inputs.stocking_usd),
        ));
        items.push((
            RowTag::SmartLock,
            "Est. Smart Lock & Tech Setup",
            sanitize(inputs.smart_lock_usd),
        ));
    }
    items.push((RowTag::Permits, "Est. Permits & License", sanitize(inputs.permits_usd)));
    if furnishing {
        items.push((RowTag::Photos, "Est. Professional Photos", sanitize(inputs.photos_usd)));
    }

    let mut rows = Vec::with_capacity(items.len() + 4);

    // Additional = sum of converted cost items, accumulated before rounding.
    let mut additional_target = 0.0;
    for (tag, label, source) in items {
        let target = to_target(source, rate);
        additional_target += target;
        rows.push(CalculationRow {
            tag,
            label,
            target: CellValue::Money(round_money(target)),
            source: Some(round_money(source)),
        });
    }

    // The fee is typed in the target currency; the source amount is derived
    // for display only.
    let fee_target = sanitize(inputs.fee_cad);
    let fee_source = to_source(fee_target, rate);
    rows.push(CalculationRow {
        tag: RowTag::Fee,
        label: "Our Fee",
        target: CellValue::Money(round_money(fee_target)),
        source: Some(round_money(fee_source)),
    });

    // Day 1 equals the fee alone.
    rows.push(CalculationRow {
        tag: RowTag::DayOne,
        label: "Total Investment Paid to STR Launch (Day 1)",
        target: CellValue::Money(round_money(fee_target)),
        source: Some(round_money(fee_source)),
    });

    rows.push(CalculationRow {
        tag: RowTag::AdditionalRequired,
        label: "Est. Additional Investment Required Over Next 60–90 Days",
        target: CellValue::Money(round_money(additional_target)),
        source: Some(round_money(to_source(additional_target, rate))),
    });

    let total_target = fee_target + additional_target;
    rows.push(CalculationRow {
        tag: RowTag::TotalRequired,
        label: "Est. Total Investment Required",
        target: CellValue::Money(round_money(total_target)),
        source: Some(round_money(to_source(total_target, rate))),
    });

    InvestmentResult { rows, total_target }
}
